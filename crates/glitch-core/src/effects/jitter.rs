//! Block jitter ("datamosh").

use rand::{Rng, RngCore};

use super::{clamp_coord, index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Edge length of a displaced block.
const BLOCK_SIZE: i32 = 10;

/// Displace fixed 10×10 blocks by a random vector.
///
/// Each block whose anchor is inside the bubble draws
/// `(dx, dy) = rand[0, s) − s / 2` per axis, `s = max(1, trunc(intensity))`,
/// and copies pixels from the snapshot at the displaced position. Source
/// coordinates clamp to the canvas (edges smear); destinations clip to the
/// region.
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
    let shift_power = params.intensity_steps().max(1);
    let half = shift_power / 2;
    let source = pixels.to_vec();

    for y in bounds.rows().step_by(BLOCK_SIZE as usize) {
        for x in bounds.cols().step_by(BLOCK_SIZE as usize) {
            if !inside_bubble(x, y, params) {
                continue;
            }

            let offset_x = i64::from(rng.random_range(0..shift_power) - half);
            let offset_y = i64::from(rng.random_range(0..shift_power) - half);

            let x_end = x.saturating_add(BLOCK_SIZE).min(bounds.right());
            let y_end = y.saturating_add(BLOCK_SIZE).min(bounds.bottom());
            for dest_y in y..y_end {
                let src_y = clamp_coord(i64::from(dest_y) + offset_y, height);
                for dest_x in x..x_end {
                    let src_x = clamp_coord(i64::from(dest_x) + offset_x, width);
                    pixels[index(dest_x, dest_y, width)] = source[index(src_x, src_y, width)];
                }
            }
        }
    }
}
