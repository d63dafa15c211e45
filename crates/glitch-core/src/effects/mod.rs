//! Pixel effects: one module per transform, plus the shared plumbing.
//!
//! Every effect has the same shape ([`EffectFn`]): it mutates the buffer in
//! place inside `region`, reads a private snapshot when it needs neighbours,
//! and treats degenerate input (empty region, short buffer, odd intensity) as
//! a no-op rather than an error.

pub mod chromatic;
pub mod invert;
pub mod jitter;
pub mod mosaic;
pub mod pixel_sort;
pub mod ripple;
pub mod rgb_noise;
pub mod scanline;
pub mod sobel;
pub mod solarize;
pub mod swirl;

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Signature shared by every effect implementation.
///
/// `(pixels, width, height, region, params, rng)`. Deterministic effects
/// ignore `rng`.
pub type EffectFn = fn(&mut [Pixel], u32, u32, &Region, &EffectParams, &mut dyn RngCore);

/// Identifies an effect. Numeric ids are stable and shared with hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    /// No transform; the frame is only healed.
    None,
    /// Blend toward the color negative.
    Invert,
    /// Sort column strips by luminance.
    PixelSort,
    /// Split red and blue channels horizontally.
    Chromatic,
    /// Twist around the bubble center.
    Swirl,
    /// Pixelate into square blocks.
    Mosaic,
    /// Displace 10×10 blocks randomly.
    Jitter,
    /// Shift random rows horizontally.
    Scanline,
    /// Sobel edge map.
    Sobel,
    /// Radial sine displacement.
    Ripple,
    /// Invert channels above a threshold.
    Solarize,
    /// Independent per-channel noise.
    RgbNoise,
}

impl EffectKind {
    /// Stable numeric identifier used by hosts.
    pub const fn id(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Invert => 1,
            Self::PixelSort => 2,
            Self::Chromatic => 3,
            Self::Swirl => 4,
            Self::Mosaic => 5,
            Self::Jitter => 6,
            Self::Scanline => 7,
            Self::Sobel => 8,
            Self::Ripple => 9,
            Self::Solarize => 10,
            Self::RgbNoise => 11,
        }
    }

    /// Inverse of [`id`](Self::id). Unknown ids return `None`.
    pub fn from_id(id: i32) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.id() == id)
    }

    /// Symbolic host-facing name, e.g. `"PIXEL_SORT"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Invert => "INVERT",
            Self::PixelSort => "PIXEL_SORT",
            Self::Chromatic => "CHROMATIC",
            Self::Swirl => "SWIRL",
            Self::Mosaic => "MOSAIC",
            Self::Jitter => "JITTER",
            Self::Scanline => "SCANLINE",
            Self::Sobel => "SOBEL",
            Self::Ripple => "RIPPLE",
            Self::Solarize => "SOLARIZE",
            Self::RgbNoise => "RGB_NOISE",
        }
    }

    /// Human-readable label for menus and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Invert => "Invert",
            Self::PixelSort => "Pixel Sort",
            Self::Chromatic => "Chromatic Aberration",
            Self::Swirl => "Swirl",
            Self::Mosaic => "Mosaic",
            Self::Jitter => "Block Jitter",
            Self::Scanline => "Scanlines",
            Self::Sobel => "Edge Detect",
            Self::Ripple => "Ripple",
            Self::Solarize => "Solarize",
            Self::RgbNoise => "RGB Noise",
        }
    }

    /// Whether the effect draws from the random source.
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Jitter | Self::Scanline | Self::RgbNoise)
    }

    /// Every kind, in id order.
    pub fn all() -> &'static [Self] {
        const ALL: [EffectKind; 12] = [
            EffectKind::None,
            EffectKind::Invert,
            EffectKind::PixelSort,
            EffectKind::Chromatic,
            EffectKind::Swirl,
            EffectKind::Mosaic,
            EffectKind::Jitter,
            EffectKind::Scanline,
            EffectKind::Sobel,
            EffectKind::Ripple,
            EffectKind::Solarize,
            EffectKind::RgbNoise,
        ];
        &ALL
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown effect: {0}")]
pub struct UnknownEffect(pub String);

impl FromStr for EffectKind {
    type Err = UnknownEffect;

    /// Accepts the symbolic name in any case, with `_`, `-` or nothing between
    /// words (`PIXEL_SORT`, `pixel-sort`, `pixelsort`), or a numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i32>() {
            return Self::from_id(id).ok_or_else(|| UnknownEffect(s.to_string()));
        }

        let wanted = normalize_name(trimmed);
        Self::all()
            .iter()
            .copied()
            .find(|k| normalize_name(k.name()) == wanted)
            .ok_or_else(|| UnknownEffect(s.to_string()))
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ── Shared helpers ───────────────────────────────────────────────

/// Scan bounds for one effect call, or `None` when there is nothing to do.
///
/// Rejects zero-area canvases and buffers shorter than `width × height`, then
/// clips `region` to the canvas.
pub(crate) fn scan_bounds(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    region: &Region,
) -> Option<Region> {
    let needed = (width as usize).checked_mul(height as usize)?;
    if needed == 0 || pixels.len() < needed {
        return None;
    }
    let bounds = region.clipped(width, height);
    (!bounds.is_empty()).then_some(bounds)
}

/// Row-major index of an in-canvas coordinate.
#[inline]
pub(crate) fn index(x: i32, y: i32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Clamp a coordinate into `[0, len − 1]`. `len` must be non-zero.
#[inline]
pub(crate) fn clamp_coord(v: i64, len: u32) -> i32 {
    v.clamp(0, i64::from(len) - 1) as i32
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in EffectKind::all() {
            assert_eq!(EffectKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(EffectKind::from_id(12), None);
        assert_eq!(EffectKind::from_id(-1), None);
    }

    #[test]
    fn test_from_str_accepts_name_variants() {
        assert_eq!(
            "PIXEL_SORT".parse::<EffectKind>(),
            Ok(EffectKind::PixelSort)
        );
        assert_eq!(
            "pixel-sort".parse::<EffectKind>(),
            Ok(EffectKind::PixelSort)
        );
        assert_eq!("pixelsort".parse::<EffectKind>(), Ok(EffectKind::PixelSort));
        assert_eq!("rgb_noise".parse::<EffectKind>(), Ok(EffectKind::RgbNoise));
        assert_eq!("9".parse::<EffectKind>(), Ok(EffectKind::Ripple));
        assert!("blur".parse::<EffectKind>().is_err());
        assert!("42".parse::<EffectKind>().is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            EffectKind::all().iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), EffectKind::all().len());
        assert_eq!(EffectKind::PixelSort.label(), "Pixel Sort");
    }

    #[test]
    fn test_serde_uses_symbolic_names() {
        let json = serde_json::to_string(&EffectKind::RgbNoise).expect("serialize");
        assert_eq!(json, "\"RGB_NOISE\"");
        let kind: EffectKind = serde_json::from_str("\"PIXEL_SORT\"").expect("deserialize");
        assert_eq!(kind, EffectKind::PixelSort);
    }

    #[test]
    fn test_scan_bounds_rejects_short_buffer() {
        let pixels = vec![Pixel::default(); 3];
        assert!(scan_bounds(&pixels, 2, 2, &Region::full(2, 2)).is_none());
    }

    #[test]
    fn test_scan_bounds_rejects_zero_area() {
        assert!(scan_bounds(&[], 0, 0, &Region::new(0, 0, 5, 5)).is_none());
    }

    #[test]
    fn test_clamp_coord_bounds() {
        assert_eq!(clamp_coord(-3, 10), 0);
        assert_eq!(clamp_coord(15, 10), 9);
        assert_eq!(clamp_coord(4, 10), 4);
    }
}
