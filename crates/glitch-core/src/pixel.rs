//! RGBA8 pixel representation.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Luminance weights used for ordering and edge magnitude.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// A single 8-bit RGBA sample.
///
/// Laid out as four consecutive bytes so a `&[Pixel]` can be viewed as a
/// tightly packed RGBA8 byte slice without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all color channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v, 255)
    }

    /// Weighted brightness:
    ///
    /// ```text
    /// luma = 0.299 × R + 0.587 × G + 0.114 × B
    /// ```
    #[inline]
    pub fn luminance(&self) -> f32 {
        LUMA_WEIGHTS[0] * f32::from(self.r)
            + LUMA_WEIGHTS[1] * f32::from(self.g)
            + LUMA_WEIGHTS[2] * f32::from(self.b)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b, p.a]
    }
}
