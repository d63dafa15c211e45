//! Recorded cursor paths: load a JSON array of frame requests and render
//! each one to its own numbered file.

use std::path::{Path, PathBuf};

use glitch_core::{FrameOutcome, FrameRequest, GlitchEngine};

use crate::error::DemoError;
use crate::image_loader::save_image;

/// Parse a trace file.
pub fn load_trace(path: &Path) -> Result<Vec<FrameRequest>, DemoError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| DemoError::Trace {
        path: path.to_path_buf(),
        source,
    })
}

/// Render every request and write frame `i` next to `output` as
/// `<stem>_<i>.<ext>`. Returns the number of frames written.
pub fn replay(
    engine: &mut GlitchEngine,
    requests: &[FrameRequest],
    output: &Path,
) -> Result<usize, DemoError> {
    for (index, request) in requests.iter().enumerate() {
        let outcome = engine.render_request(request);
        if outcome == FrameOutcome::Skipped {
            tracing::warn!("frame {index} skipped: no image loaded");
        }
        let path = frame_path(output, index);
        let (width, height) = (engine.width(), engine.height());
        save_image(&path, width, height, engine.display_bytes())?;
        tracing::debug!("wrote {}", path.display());
    }
    Ok(requests.len())
}

/// Numbered sibling of `output` for frame `index`.
pub fn frame_path(output: &Path, index: usize) -> PathBuf {
    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let ext = output.extension().and_then(|s| s.to_str()).unwrap_or("png");
    output.with_file_name(format!("{stem}_{index:04}.{ext}"))
}
