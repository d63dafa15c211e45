//! Host-setup errors.
//!
//! Rendering never fails; only filling or sizing the canvas can.

/// Errors raised while sizing or filling a canvas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("pixel data length {actual} does not match canvas size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("canvas dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: u32, height: u32 },
}
