//! Per-frame effect configuration.

use serde::{Deserialize, Serialize};

/// Configuration bundle handed to every effect.
///
/// Nothing here is validated. Effects saturate or no-op on out-of-range values
/// rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectParams {
    /// Effect strength. Nominally 0–100; the meaning varies per effect.
    pub intensity: f32,
    /// Restrict the effect to the circular bubble.
    pub use_circle_mask: bool,
    /// Bubble center, x.
    pub center_x: i32,
    /// Bubble center, y.
    pub center_y: i32,
    /// Bubble radius in pixels.
    pub radius: i32,
}

impl EffectParams {
    /// Parameters for an interactive bubble at `(center_x, center_y)`.
    pub const fn bubble(center_x: i32, center_y: i32, radius: i32, intensity: f32) -> Self {
        Self {
            intensity,
            use_circle_mask: true,
            center_x,
            center_y,
            radius,
        }
    }

    /// Parameters with masking disabled; the effect covers its whole region.
    pub const fn unmasked(intensity: f32) -> Self {
        Self {
            intensity,
            use_circle_mask: false,
            center_x: 0,
            center_y: 0,
            radius: 0,
        }
    }

    /// Intensity truncated toward zero, saturating at the `i32` range.
    /// NaN maps to zero.
    #[inline]
    pub fn intensity_steps(&self) -> i32 {
        self.intensity as i32
    }
}

impl Default for EffectParams {
    /// Unmasked, zero intensity.
    fn default() -> Self {
        Self::unmasked(0.0)
    }
}
