//! Sobel edge detection.

use rand::RngCore;

use super::{clamp_coord, index, scan_bounds};
use crate::mask::inside_bubble;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// Horizontal gradient kernel.
const KERNEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical gradient kernel.
const KERNEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Intensity above which edges are drawn neon green instead of gray.
const NEON_THRESHOLD: f32 = 50.0;

/// Replace each pixel with its luminance gradient magnitude.
///
/// ```text
/// edge = min(255, trunc(sqrt(gx² + gy²)))
/// ```
///
/// Kernel taps replicate the canvas border. Output is opaque: `(0, e, 0)`
/// when `intensity > 50`, `(e, e, e)` otherwise. This overwrites the pixel
/// outright rather than blending. Per-pixel bubble test.
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
    let neon = params.intensity > NEON_THRESHOLD;
    let luma: Vec<f32> = pixels.iter().map(Pixel::luminance).collect();

    for y in bounds.rows() {
        for x in bounds.cols() {
            if !inside_bubble(x, y, params) {
                continue;
            }

            let mut sum_x = 0.0_f32;
            let mut sum_y = 0.0_f32;
            for (ky, (row_x, row_y)) in KERNEL_X.iter().zip(&KERNEL_Y).enumerate() {
                let py = clamp_coord(i64::from(y) + ky as i64 - 1, height);
                for (kx, (wx, wy)) in row_x.iter().zip(row_y).enumerate() {
                    let px = clamp_coord(i64::from(x) + kx as i64 - 1, width);
                    let val = luma[index(px, py, width)];
                    sum_x += val * wx;
                    sum_y += val * wy;
                }
            }

            let magnitude = (sum_x * sum_x + sum_y * sum_y).sqrt() as i32;
            let edge = magnitude.min(255) as u8;
            pixels[index(x, y, width)] = if neon {
                Pixel::new(0, edge, 0, 255)
            } else {
                Pixel::new(edge, edge, edge, 255)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::test_support::{run_full, seeded};

    /// Left half black, right half white.
    fn step_image(w: u32, h: u32) -> Vec<Pixel> {
        (0..w * h)
            .map(|i| Pixel::gray(u8::from(i % w >= w / 2) * 255))
            .collect()
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let mut pixels = vec![Pixel::new(90, 140, 30, 12); 25];
        run_full(apply, &mut pixels, 5, 5, &EffectParams::unmasked(10.0));
        assert!(pixels.iter().all(|p| *p == Pixel::new(0, 0, 0, 255)));
    }

    #[test]
    fn test_step_edge_grayscale() {
        let (w, h) = (6, 3);
        let mut pixels = step_image(w, h);
        run_full(apply, &mut pixels, w, h, &EffectParams::unmasked(10.0));
        let row: Vec<u8> = pixels[w as usize..2 * w as usize]
            .iter()
            .map(|p| p.r)
            .collect();
        assert_eq!(row, vec![0, 0, 255, 255, 0, 0]);
        assert!(
            pixels.iter().all(|p| p.r == p.g && p.g == p.b && p.a == 255)
        );
    }

    #[test]
    fn test_step_edge_neon() {
        let (w, h) = (6, 3);
        let mut pixels = step_image(w, h);
        run_full(apply, &mut pixels, w, h, &EffectParams::unmasked(75.0));
        assert_eq!(pixels[w as usize + 2], Pixel::new(0, 255, 0, 255));
        assert_eq!(pixels[w as usize], Pixel::new(0, 0, 0, 255));
    }

    #[test]
    fn test_reads_snapshot() {
        // Processing (2,0) must still see the original white at (3,0), not
        // an already-written edge value.
        let (w, h) = (6, 1);
        let mut pixels = step_image(w, h);
        let mut expected = step_image(w, h);
        apply(
            &mut expected,
            w,
            h,
            &Region::new(2, 0, 1, 1),
            &EffectParams::unmasked(0.0),
            &mut seeded(),
        );
        run_full(apply, &mut pixels, w, h, &EffectParams::unmasked(0.0));
        assert_eq!(pixels[2], expected[2]);
    }

    #[test]
    fn test_single_pixel_canvas() {
        let mut pixels = vec![Pixel::gray(200)];
        run_full(apply, &mut pixels, 1, 1, &EffectParams::unmasked(100.0));
        assert_eq!(pixels[0], Pixel::new(0, 0, 0, 255));
    }
}
