//! Mosaic pixelation.

use rand::RngCore;

use super::{index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Fill square blocks with the color of their top-left pixel.
///
/// `block = max(1, trunc(intensity / 2))`; the grid is anchored at the
/// region's top-left corner. Only the block's anchor is tested against the
/// bubble: a block whose anchor is inside is filled completely (clipped to
/// the region), so the bubble edge stays blocky. Block size 1 is a no-op.
///
/// Blocks never overlap and each anchor is read before its own block is
/// written, so no snapshot is needed.
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
    let block = block_size(params.intensity);
    if block == 1 {
        return;
    }

    for y in bounds.rows().step_by(block as usize) {
        for x in bounds.cols().step_by(block as usize) {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let sample = pixels[index(x, y, width)];
            let x_end = x.saturating_add(block).min(bounds.right());
            let y_end = y.saturating_add(block).min(bounds.bottom());
            for py in y..y_end {
                for px in x..x_end {
                    pixels[index(px, py, width)] = sample;
                }
            }
        }
    }
}

fn block_size(intensity: f32) -> i32 {
    ((intensity / 2.0) as i32).max(1)
}
