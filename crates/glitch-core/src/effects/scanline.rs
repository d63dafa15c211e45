//! Scanline tearing.

use rand::{Rng, RngCore};

use super::{clamp_coord, index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// A row shifts when a roll in `0..100` is at most this value (31 in 100).
const SHIFT_ROLL_MAX: i32 = 30;

/// Shift random rows horizontally, like a VHS tracking error.
///
/// Every region row rolls independently; a shifted row moves by
/// `rand[0, max(1, m)) − m / 2`, `m = max(0, trunc(intensity))`, reading from
/// the snapshot with the source column clamped. Rows that don't roll keep
/// their healed value. Per-pixel bubble test.
pub fn apply(
    pixels: &mut [Pixel],
    width: u32,
    height: u32,
    region: &Region,
    params: &EffectParams,
    rng: &mut dyn RngCore,
) {
    let Some(bounds) = scan_bounds(pixels, width, height, region) else {
        return;
    };
    let max_shift = params.intensity_steps().max(0);
    let source = pixels.to_vec();

    for y in bounds.rows() {
        if rng.random_range(0..100) > SHIFT_ROLL_MAX {
            continue;
        }
        let shift = i64::from(rng.random_range(0..max_shift.max(1)) - max_shift / 2);

        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let src_x = clamp_coord(i64::from(x) - shift, width);
            pixels[index(x, y, width)] = source[index(src_x, y, width)];
        }
    }
}
