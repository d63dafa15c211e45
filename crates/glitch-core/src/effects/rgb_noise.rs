//! Per-channel uniform noise.

use rand::{Rng, RngCore};

use super::{index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Perturb each color channel by an independent offset drawn uniformly from
/// `[−n, n]`, `n = trunc(intensity)`, clamped to `[0, 255]`.
///
/// `n ≤ 0` is a no-op. Alpha is untouched. Per-pixel bubble test.
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
    let level = i64::from(params.intensity_steps());
    if level <= 0 {
        return;
    }

    for y in bounds.rows() {
        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }
            let p = &mut pixels[index(x, y, width)];
            p.r = perturb(p.r, rng.random_range(-level..=level));
            p.g = perturb(p.g, rng.random_range(-level..=level));
            p.b = perturb(p.b, rng.random_range(-level..=level));
        }
    }
}

#[inline]
fn perturb(c: u8, offset: i64) -> u8 {
    (i64::from(c) + offset).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::test_support::{changed, run_full};

    #[test]
    fn test_offsets_stay_within_level() {
        let mut pixels = vec![Pixel::new(128, 128, 128, 200); 400];
        run_full(apply, &mut pixels, 20, 20, &EffectParams::unmasked(10.0));
        for p in &pixels {
            for c in [p.r, p.g, p.b] {
                assert!((118..=138).contains(&c), "channel {c} outside ±10");
            }
            assert_eq!(p.a, 200, "alpha must be preserved");
        }
        assert!(
            pixels.iter().any(|p| p.r != 128),
            "noise should change something"
        );
    }

    #[test]
    fn test_channels_are_independent() {
        let mut pixels = vec![Pixel::gray(128); 400];
        run_full(apply, &mut pixels, 20, 20, &EffectParams::unmasked(50.0));
        assert!(pixels.iter().any(|p| p.r != p.g || p.g != p.b));
    }

    #[test]
    fn test_non_positive_level_is_noop() {
        for intensity in [0.0, 0.9, -25.0, f32::NAN] {
            let mut pixels = vec![Pixel::gray(128); 16];
            run_full(apply, &mut pixels, 4, 4, &EffectParams::unmasked(intensity));
            assert!(
                pixels.iter().all(|p| *p == Pixel::gray(128)),
                "intensity {intensity}"
            );
        }
    }

    #[test]
    fn test_huge_level_saturates() {
        let mut pixels = vec![Pixel::gray(128); 64];
        run_full(apply, &mut pixels, 8, 8, &EffectParams::unmasked(1e12));
        // With a level of i32::MAX practically every draw saturates.
        assert!(
            pixels
                .iter()
                .all(|p| [p.r, p.g, p.b].iter().all(|c| *c == 0 || *c == 255))
        );
    }

    #[test]
    fn test_respects_bubble() {
        let before = vec![Pixel::gray(128); 100];
        let mut pixels = before.clone();
        let params = EffectParams::bubble(5, 5, 2, 80.0);
        run_full(apply, &mut pixels, 10, 10, &params);
        for i in changed(&before, &pixels) {
            let (x, y) = ((i % 10) as i32, (i / 10) as i32);
            assert!(
                inside_bubble(x, y, &params),
                "({x},{y}) changed outside bubble"
            );
        }
    }
}
