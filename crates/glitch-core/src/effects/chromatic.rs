//! Chromatic aberration: horizontal red/blue channel split.

use rand::RngCore;

use super::{clamp_coord, index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Pull red from `offset` pixels to the left and blue from `offset` pixels to
/// the right, keeping green, with `offset = trunc(intensity)`.
///
/// Reads from a pre-effect snapshot. Source columns clamp to the canvas edge.
/// A zero offset is a no-op; negative offsets swap the directions.
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
    let offset = i64::from(params.intensity_steps());
    if offset == 0 {
        return;
    }

    let source = pixels.to_vec();

    for y in bounds.rows() {
        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let red_x = clamp_coord(i64::from(x) - offset, width);
            let blue_x = clamp_coord(i64::from(x) + offset, width);

            let p = &mut pixels[index(x, y, width)];
            p.r = source[index(red_x, y, width)].r;
            p.b = source[index(blue_x, y, width)].b;
        }
    }
}
