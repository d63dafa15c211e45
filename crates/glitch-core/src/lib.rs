//! Glitch Core: bubble-masked pixel effects over RGBA8 buffers.
//!
//! This crate contains the effect algorithms, the shared bubble mask, the
//! effect dispatch table and the per-frame render cycle. No windowing, GPU or
//! host-bridge dependencies.

pub mod canvas;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod mask;
pub mod params;
pub mod pixel;
pub mod region;
pub mod registry;

// Re-exports for convenience.
pub use canvas::Canvas;
pub use config::EngineConfig;
pub use effects::EffectKind;
pub use engine::{FrameOutcome, FrameRequest, GlitchEngine};
pub use error::CanvasError;
pub use mask::inside_bubble;
pub use params::EffectParams;
pub use pixel::Pixel;
pub use region::Region;
