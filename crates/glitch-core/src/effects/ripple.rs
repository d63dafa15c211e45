//! Radial sine ripple.

use glam::Vec2;
use rand::RngCore;

use super::{clamp_coord, index, scan_bounds};
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Distance between ripple crests, in pixels (scaled by 2π).
const WAVELENGTH: f32 = 20.0;

/// Keeps the radial direction finite at the center.
const CENTER_BIAS: f32 = 0.1;

/// Push each pixel along its radial direction by a sine of its distance:
///
/// ```text
/// amount = sin(dist / 20) × intensity / 5
/// src    = p + (d / (dist + 0.1)) × amount
/// ```
///
/// sampled from the snapshot with the source clamped to the canvas. Pixels
/// farther than the radius are skipped.
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
    let source = pixels.to_vec();
    let amplitude = params.intensity / 5.0;
    let radius = params.radius as f32;

    for y in bounds.rows() {
        for x in bounds.cols() {
            let offset = Vec2::new(
                (i64::from(x) - i64::from(params.center_x)) as f32,
                (i64::from(y) - i64::from(params.center_y)) as f32,
            );
            let dist = offset.length();
            if dist > radius {
                continue;
            }

            let amount = (dist / WAVELENGTH).sin() * amplitude;
            let src = Vec2::new(x as f32, y as f32) + offset / (dist + CENTER_BIAS) * amount;

            let sx = clamp_coord(src.x as i64, width);
            let sy = clamp_coord(src.y as i64, height);
            pixels[index(x, y, width)] = source[index(sx, sy, width)];
        }
    }
}
