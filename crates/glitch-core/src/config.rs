//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default full-frame bubble radius relative to the longer canvas side.
const DEFAULT_FULL_FRAME_SCALE: f32 = 1.5;

/// Construction-time settings for a [`GlitchEngine`](crate::GlitchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the random source used by jitter, scanline and noise.
    /// `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Full-frame mode radius as a multiple of `max(width, height)`.
    #[serde(default = "EngineConfig::default_full_frame_scale")]
    pub full_frame_scale: f32,
}

impl EngineConfig {
    /// Config with a fixed seed, for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn default_full_frame_scale() -> f32 {
        DEFAULT_FULL_FRAME_SCALE
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            full_frame_scale: DEFAULT_FULL_FRAME_SCALE,
        }
    }
}
