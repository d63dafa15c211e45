//! Error type for the demo host.

use std::path::PathBuf;

use glitch_core::CanvasError;

use crate::image_loader::ImageLoadError;

/// Everything that can stop a demo run.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Image(#[from] ImageLoadError),
    #[error("canvas setup failed: {0}")]
    Canvas(#[from] CanvasError),
    #[error("invalid trace {}: {source}", path.display())]
    Trace {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
