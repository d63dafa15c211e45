//! Threshold inversion ("burned film").

use rand::RngCore;

use super::{index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Invert every channel brighter than a threshold.
///
/// ```text
/// threshold = clamp(255 − intensity × 2.5, 0, 255)
/// out       = in > threshold ? 255 − in : in
/// ```
///
/// The threshold is computed once per call. Per-pixel bubble test.
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
    let threshold = threshold(params.intensity);

    for y in bounds.rows() {
        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let p = &mut pixels[index(x, y, width)];
            p.r = solarize(p.r, threshold);
            p.g = solarize(p.g, threshold);
            p.b = solarize(p.b, threshold);
        }
    }
}

fn threshold(intensity: f32) -> u8 {
    // NaN falls through the clamp and casts to 0.
    (255.0 - intensity * 2.5).clamp(0.0, 255.0) as u8
}

#[inline]
fn solarize(c: u8, threshold: u8) -> u8 {
    if c > threshold { 255 - c } else { c }
}
