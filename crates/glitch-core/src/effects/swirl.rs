//! Swirl distortion around the bubble center.

use glam::Vec2;
use rand::RngCore;

use super::{index, scan_bounds};
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Twist the bubble: each pixel samples the snapshot at its offset from the
/// center rotated by
///
/// ```text
/// θ = ((r − dist) / r)² × intensity / 10
/// ```
///
/// strongest at the center and zero at the rim. Pixels farther than `r` are
/// skipped.
///
/// Unlike the other effects, a source position that falls off the canvas is
/// not clamped: the destination keeps its current value.
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
    let angle_scale = params.intensity / 10.0;
    if params.radius <= 0 || !angle_scale.is_finite() {
        return;
    }

    let source = pixels.to_vec();
    let radius = params.radius as f32;
    let center = Vec2::new(params.center_x as f32, params.center_y as f32);

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

            let falloff = (radius - dist) / radius;
            let theta = falloff * falloff * angle_scale;
            let src = center + Vec2::from_angle(theta).rotate(offset);

            let (sx, sy) = (src.x as i64, src.y as i64);
            if (0..i64::from(width)).contains(&sx) && (0..i64::from(height)).contains(&sy) {
                pixels[index(x, y, width)] = source[index(sx as i32, sy as i32, width)];
            }
        }
    }
}
