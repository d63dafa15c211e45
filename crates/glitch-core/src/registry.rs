//! Effect dispatch table.
//!
//! Maps an [`EffectKind`] (or its numeric id) to its implementation. Adding an
//! effect means adding one module under `effects` and one entry here; the
//! render cycle only ever calls [`lookup`].

use rand::RngCore;

use crate::effects::{self, EffectFn, EffectKind};
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct EffectEntry {
    /// Which effect this row implements.
    pub kind: EffectKind,
    /// The transform itself.
    pub apply: EffectFn,
}

impl EffectEntry {
    /// Run this effect on `pixels`.
    pub fn run(
        &self,
        pixels: &mut [Pixel],
        width: u32,
        height: u32,
        region: &Region,
        params: &EffectParams,
        rng: &mut dyn RngCore,
    ) {
        (self.apply)(pixels, width, height, region, params, rng);
    }
}

const fn entry(kind: EffectKind, apply: EffectFn) -> EffectEntry {
    EffectEntry { kind, apply }
}

static EFFECTS: [EffectEntry; 11] = [
    entry(EffectKind::Invert, effects::invert::apply),
    entry(EffectKind::PixelSort, effects::pixel_sort::apply),
    entry(EffectKind::Chromatic, effects::chromatic::apply),
    entry(EffectKind::Swirl, effects::swirl::apply),
    entry(EffectKind::Mosaic, effects::mosaic::apply),
    entry(EffectKind::Jitter, effects::jitter::apply),
    entry(EffectKind::Scanline, effects::scanline::apply),
    entry(EffectKind::Sobel, effects::sobel::apply),
    entry(EffectKind::Ripple, effects::ripple::apply),
    entry(EffectKind::Solarize, effects::solarize::apply),
    entry(EffectKind::RgbNoise, effects::rgb_noise::apply),
];

/// Every registered effect.
pub fn entries() -> &'static [EffectEntry] {
    &EFFECTS
}

/// Look up the implementation of `kind`. `EffectKind::None` has none.
pub fn lookup(kind: EffectKind) -> Option<&'static EffectEntry> {
    EFFECTS.iter().find(|e| e.kind == kind)
}

/// Look up a host-supplied numeric id. `0` and unknown ids resolve to `None`.
pub fn resolve(effect_id: i32) -> Option<&'static EffectEntry> {
    EffectKind::from_id(effect_id).and_then(lookup)
}
