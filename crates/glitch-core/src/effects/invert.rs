//! Partial color negative.

use rand::RngCore;

use super::{index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Blend each color channel toward its complement.
///
/// ```text
/// f   = intensity / 100
/// out = in × (1 − f) + (255 − in) × f
/// ```
///
/// `f` is not clamped: values past 1 overshoot and saturate at the `u8`
/// bounds. Alpha is untouched. Per-pixel bubble test.
pub fn apply(
    pixels: &mut [Pixel],
    width: u32,
    height: u32,
    region: &Region,
    params: &EffectParams,
    _rng: &mut dyn RngCore,
) {
    let Some(bounds) = scan_bounds(pixels, width, height, region) else {
        return;
    };
    let factor = params.intensity / 100.0;

    for y in bounds.rows() {
        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let p = &mut pixels[index(x, y, width)];
            p.r = blend(p.r, factor);
            p.g = blend(p.g, factor);
            p.b = blend(p.b, factor);
        }
    }
}

#[inline]
fn blend(c: u8, factor: f32) -> u8 {
    let c = f32::from(c);
    (c * (1.0 - factor) + (255.0 - c) * factor) as u8
}
