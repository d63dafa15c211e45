//! Vertical pixel sorting ("melting").

use rand::RngCore;

use super::{index, scan_bounds};
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Sort each column strip by luminance, darkest at the top.
///
/// With masking on, each column's strip is the vertical chord of the bubble
/// at that column:
///
/// ```text
/// span = floor(sqrt(r² − dx²))
/// rows = [cy − span, cy + span)
/// ```
///
/// clipped to the canvas and region; columns the circle misses (and every
/// column, for a negative radius) are skipped.
/// Without masking the strip is the region's full column. The sort is stable
/// and only happens when `intensity > 0`. Strips of one pixel or fewer are
/// left alone.
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
    let sort = params.intensity > 0.0;
    let mut strip = Vec::with_capacity(bounds.height as usize);

    for x in bounds.cols() {
        let Some((start_y, end_y)) = column_span(x, &bounds, params) else {
            continue;
        };
        if end_y - start_y <= 1 {
            continue;
        }

        strip.clear();
        strip.extend((start_y..end_y).map(|y| pixels[index(x, y, width)]));
        if sort {
            strip.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));
        }
        for (y, p) in (start_y..end_y).zip(&strip) {
            pixels[index(x, y, width)] = *p;
        }
    }
}

/// Row span `[start, end)` of column `x`, or `None` if the bubble misses it.
fn column_span(x: i32, bounds: &Region, params: &EffectParams) -> Option<(i32, i32)> {
    if !params.use_circle_mask {
        return Some((bounds.y, bounds.bottom()));
    }

    let dx = i64::from(x) - i64::from(params.center_x);
    let r = i64::from(params.radius);
    let dist_sq = dx * dx;
    let radius_sq = r * r;
    if r < 0 || dist_sq > radius_sq {
        return None;
    }

    let span = ((radius_sq - dist_sq) as f64).sqrt() as i64;
    let cy = i64::from(params.center_y);
    let start = (cy - span).max(i64::from(bounds.y));
    let end = (cy + span).min(i64::from(bounds.bottom()));
    (start < end).then_some((start as i32, end as i32))
}
