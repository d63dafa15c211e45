//! Render-cycle integration tests: healing, containment, determinism and
//! robustness across every registered effect.

use glitch_core::registry;
use glitch_core::{
    EffectKind, EffectParams, FrameOutcome, FrameRequest, GlitchEngine, Pixel, Region,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Gradient with enough variation that every effect visibly changes it.
fn test_image(width: u32, height: u32) -> Vec<Pixel> {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Pixel::new(
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                ((x * 31 + y * 17) % 256) as u8,
                255,
            ));
        }
    }
    pixels
}

fn loaded_engine(width: u32, height: u32, seed: u64) -> GlitchEngine {
    let mut engine = GlitchEngine::seeded(seed);
    engine
        .load_image(width, height, test_image(width, height))
        .expect("test image matches canvas");
    engine
}

fn effects() -> impl Iterator<Item = EffectKind> {
    EffectKind::all().iter().copied().filter(|k| *k != EffectKind::None)
}

/// Effects that test every pixel against the bubble. Jitter and Mosaic only
/// test block anchors, so whole blocks may straddle the rim.
const PER_PIXEL_MASKED: [EffectKind; 6] = [
    EffectKind::Invert,
    EffectKind::Chromatic,
    EffectKind::Scanline,
    EffectKind::Sobel,
    EffectKind::Solarize,
    EffectKind::RgbNoise,
];

#[test]
fn test_none_heals_previous_frame() {
    let mut engine = loaded_engine(32, 32, 3);
    engine.render(16, 16, 10, EffectKind::Invert, 100.0);
    assert_ne!(
        engine.display(),
        engine.backup(),
        "invert should have drawn"
    );

    let outcome = engine.render(16, 16, 10, EffectKind::None, 100.0);
    assert_eq!(outcome, FrameOutcome::Healed);
    assert_eq!(engine.display(), engine.backup());
}

#[test]
fn test_frames_never_accumulate() {
    for effect in effects() {
        let mut once = loaded_engine(32, 32, 9);
        let mut twice = loaded_engine(32, 32, 9);
        once.render(12, 14, 8, effect, 60.0);
        twice.render(12, 14, 8, effect, 60.0);
        // Second engine renders again from a reseeded source: output must
        // match the first frame, not a doubly-processed one.
        twice.reseed(9);
        twice.render(12, 14, 8, effect, 60.0);
        assert_eq!(
            once.display(),
            twice.display(),
            "{effect} compounded across frames"
        );
    }
}

#[test]
fn test_region_containment_for_every_effect() {
    let (w, h) = (48, 40);
    let (mx, my, r) = (20, 18, 9);
    for effect in effects() {
        let mut engine = loaded_engine(w, h, 11);
        let outcome = engine.render(mx, my, r, effect, 80.0);
        let FrameOutcome::Applied { region, .. } = outcome else {
            panic!("{effect} was not applied: {outcome:?}");
        };
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if region.contains(x, y) {
                    continue;
                }
                let i = (y as u32 * w + x as u32) as usize;
                assert_eq!(
                    engine.display()[i],
                    engine.backup()[i],
                    "{effect} changed ({x},{y}) outside {region:?}"
                );
            }
        }
    }
}

#[test]
fn test_bubble_containment_for_masked_effects() {
    let (w, h) = (48, 48);
    let (mx, my, r) = (24, 24, 11);
    for effect in PER_PIXEL_MASKED {
        let mut engine = loaded_engine(w, h, 5);
        engine.render(mx, my, r, effect, 70.0);
        let mut touched = 0;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let i = (y as u32 * w + x as u32) as usize;
                let (dx, dy) = (x - mx, y - my);
                if dx * dx + dy * dy > r * r {
                    assert_eq!(
                        engine.display()[i],
                        engine.backup()[i],
                        "{effect} leaked to ({x},{y})"
                    );
                } else if engine.display()[i] != engine.backup()[i] {
                    touched += 1;
                }
            }
        }
        assert!(touched > 0, "{effect} changed nothing inside the bubble");
    }
}

#[test]
fn test_radial_effects_stay_within_radius() {
    let (w, h) = (40, 40);
    let (mx, my, r) = (20, 20, 12);
    for effect in [EffectKind::Swirl, EffectKind::Ripple, EffectKind::PixelSort] {
        let mut engine = loaded_engine(w, h, 5);
        engine.render(mx, my, r, effect, 90.0);
        for (i, (shown, source)) in engine.display().iter().zip(engine.backup()).enumerate() {
            let (x, y) = ((i as u32 % w) as i32, (i as u32 / w) as i32);
            let (dx, dy) = (x - mx, y - my);
            if dx * dx + dy * dy > r * r {
                assert_eq!(shown, source, "{effect} changed ({x},{y})");
            }
        }
    }
}

#[test]
fn test_deterministic_effects_repeat_exactly() {
    for effect in effects().filter(|k| !k.is_randomized()) {
        let mut a = loaded_engine(32, 24, 1);
        let mut b = loaded_engine(32, 24, 2);
        a.render(15, 11, 9, effect, 65.0);
        b.render(15, 11, 9, effect, 65.0);
        assert_eq!(a.display(), b.display(), "{effect} depends on the seed");

        let first = a.display().to_vec();
        a.render(15, 11, 9, effect, 65.0);
        assert_eq!(a.display(), &first[..], "{effect} differs between frames");
    }
}

#[test]
fn test_randomized_effects_follow_seed() {
    for effect in effects().filter(|k| k.is_randomized()) {
        let mut a = loaded_engine(32, 32, 42);
        let mut b = loaded_engine(32, 32, 42);
        a.render(16, 16, 14, effect, 40.0);
        b.render(16, 16, 14, effect, 40.0);
        assert_eq!(a.display(), b.display(), "{effect} ignored the seed");
    }
}

#[test]
fn test_unloaded_engine_is_inert() {
    let mut engine = GlitchEngine::seeded(0);
    for effect in EffectKind::all() {
        assert_eq!(engine.render(5, 5, 5, *effect, 50.0), FrameOutcome::Skipped);
    }
    let outcome = engine.render_full_frame(EffectKind::Swirl.id(), 50.0);
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert!(engine.display().is_empty());
    assert!(engine.display_bytes().is_empty());
    assert_eq!((engine.width(), engine.height()), (0, 0));
}

#[test]
fn test_zero_area_canvas_is_inert() {
    let mut engine = GlitchEngine::seeded(0);
    engine.load_canvas(0, 16).expect("zero width is valid");
    let outcome = engine.render_frame(0, 0, 10, 1, 50.0);
    assert_eq!(outcome, FrameOutcome::Skipped);
}

#[test]
fn test_off_canvas_cursor_leaves_frame_healed() {
    for effect in effects() {
        let mut engine = loaded_engine(16, 16, 4);
        engine.render(-1000, -1000, 0, effect, 50.0);
        assert_eq!(engine.display(), engine.backup(), "{effect}");
        engine.render(500, 8, 20, effect, 50.0);
        assert_eq!(engine.display(), engine.backup(), "{effect}");
    }
}

#[test]
fn test_extreme_parameters_do_not_panic() {
    let intensities = [
        0.0,
        -1.0,
        -10_000.0,
        0.5,
        100.0,
        10_000.0,
        1e30,
        f32::NAN,
        f32::INFINITY,
    ];
    let radii = [0, 1, 3, 15, 64, 10_000];
    let cursors = [(0, 0), (15, 9), (31, 23), (-5, 12), (40, -3)];
    for effect in effects() {
        let mut engine = loaded_engine(32, 24, 8);
        for &intensity in &intensities {
            for &radius in &radii {
                for &(x, y) in &cursors {
                    engine.render(x, y, radius, effect, intensity);
                    assert_eq!(engine.display().len(), 32 * 24);
                }
            }
        }
    }
}

#[test]
fn test_effects_tolerate_out_of_canvas_regions() {
    let (w, h) = (12, 10);
    let region = Region::new(-20, -20, 100, 100);
    for entry in registry::entries() {
        let mut pixels = test_image(w, h);
        let params = EffectParams::bubble(6, 5, 50, 60.0);
        let mut rng = StdRng::seed_from_u64(3);
        entry.run(&mut pixels, w, h, &region, &params, &mut rng);
        assert_eq!(pixels.len(), (w * h) as usize);
    }
}

#[test]
fn test_effects_ignore_short_buffers() {
    for entry in registry::entries() {
        let mut pixels = vec![Pixel::gray(9); 5];
        let params = EffectParams::unmasked(60.0);
        let mut rng = StdRng::seed_from_u64(3);
        entry.run(&mut pixels, 4, 4, &Region::full(4, 4), &params, &mut rng);
        assert!(
            pixels.iter().all(|p| *p == Pixel::gray(9)),
            "{} touched a short buffer",
            entry.kind
        );
    }
}

#[test]
fn test_negative_radius_bubble_is_empty_for_every_effect() {
    let (w, h) = (16, 12);
    for entry in registry::entries() {
        let before = test_image(w, h);
        let mut pixels = before.clone();
        let params = EffectParams::bubble(8, 6, -5, 80.0);
        let mut rng = StdRng::seed_from_u64(3);
        entry.run(&mut pixels, w, h, &Region::full(w, h), &params, &mut rng);
        assert_eq!(
            pixels,
            before,
            "{} drew inside a negative bubble",
            entry.kind
        );
    }
}

#[test]
fn test_full_frame_mode_reaches_corners() {
    let (w, h) = (30, 17);
    let mut engine = loaded_engine(w, h, 2);
    let outcome = engine.render_full_frame(EffectKind::Solarize.id(), 100.0);
    assert_eq!(
        outcome,
        FrameOutcome::Applied {
            effect: EffectKind::Solarize,
            region: Region::full(w, h),
        }
    );
    let last = (w * h - 1) as usize;
    for i in [0, (w - 1) as usize, last - (w - 1) as usize, last] {
        let (src, out) = (engine.backup()[i], engine.display()[i]);
        // Threshold at intensity 100 is 5.
        let expected = if src.b > 5 { 255 - src.b } else { src.b };
        assert_eq!(out.b, expected, "corner {i}");
    }
}

#[test]
fn test_replayed_requests_match_direct_calls() {
    let json = r#"[
        {"x": 10, "y": 10, "radius": 6, "effect": "SWIRL", "intensity": 40.0},
        {"x": 20, "y": 12, "radius": 8, "effect": "PIXEL_SORT", "intensity": 100.0}
    ]"#;
    let requests: Vec<FrameRequest> = serde_json::from_str(json).expect("valid trace");

    let mut replayed = loaded_engine(32, 24, 6);
    let mut direct = loaded_engine(32, 24, 6);
    for request in &requests {
        replayed.render_request(request);
    }
    direct.render_frame(20, 12, 8, EffectKind::PixelSort.id(), 100.0);
    assert_eq!(replayed.display(), direct.display());
}
