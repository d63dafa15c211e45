//! Per-frame render cycle and host-facing accessors.
//!
//! Each call to [`GlitchEngine::render_frame`] runs one full cycle:
//!
//! 1. **Heal**: copy the backup over the display (no-op frame if unloaded)
//! 2. **Resolve**: look the effect id up in the dispatch table
//! 3. **Bound**: clip the bubble's bounding box to the canvas
//! 4. **Configure**: bubble-masked params centered on the cursor
//! 5. **Apply**: run the effect on the display buffer
//!
//! Frames never compound: every frame starts from the pristine backup.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::config::EngineConfig;
use crate::effects::EffectKind;
use crate::error::CanvasError;
use crate::params::EffectParams;
use crate::pixel::Pixel;
use crate::region::Region;
use crate::registry;

/// What a render call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Canvas not loaded; nothing was touched.
    Skipped,
    /// Display healed, no effect for the requested id.
    Healed,
    /// Display healed and `effect` applied within `region` (possibly empty).
    Applied {
        /// Effect that ran.
        effect: EffectKind,
        /// Scan bounds it ran over.
        region: Region,
    },
}

/// One interaction event, as recorded or replayed by a host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest {
    /// Cursor x in canvas pixels.
    pub x: i32,
    /// Cursor y in canvas pixels.
    pub y: i32,
    /// Bubble radius in pixels.
    pub radius: i32,
    /// Effect to apply.
    pub effect: EffectKind,
    /// Effect strength, nominally 0–100.
    pub intensity: f32,
}

/// Owns the canvas and random source, and renders frames on request.
///
/// Frames are serialized by `&mut self`; there is no internal locking.
#[derive(Debug)]
pub struct GlitchEngine {
    canvas: Canvas,
    rng: StdRng,
    config: EngineConfig,
}

impl GlitchEngine {
    /// Unloaded engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Unloaded engine with a fixed seed, for reproducible randomized effects.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(EngineConfig::seeded(seed))
    }

    /// Unloaded engine built from `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            canvas: Canvas::default(),
            rng,
            config,
        }
    }

    /// Reseed the random source.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
    }

    // ── Canvas setup ──────────────────────────────────────────────

    /// (Re)allocate both buffers at `width × height`, zeroed.
    pub fn load_canvas(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        self.canvas = Canvas::new(width, height)?;
        tracing::info!("canvas loaded: {width}x{height}");
        Ok(())
    }

    /// Load a canvas and its source image in one step.
    pub fn load_image(
        &mut self,
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    ) -> Result<(), CanvasError> {
        self.canvas = Canvas::from_pixels(width, height, pixels)?;
        tracing::info!("image loaded: {width}x{height}");
        Ok(())
    }

    /// Replace the backup image. `pixels` must be exactly canvas-sized.
    pub fn set_backup(&mut self, pixels: &[Pixel]) -> Result<(), CanvasError> {
        self.canvas.set_backup(pixels)
    }

    /// Replace the backup image from packed RGBA8 bytes.
    pub fn set_backup_bytes(&mut self, bytes: &[u8]) -> Result<(), CanvasError> {
        let expected = self.canvas.len() * size_of::<Pixel>();
        if bytes.len() != expected {
            return Err(CanvasError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        self.backup_bytes_mut().copy_from_slice(bytes);
        Ok(())
    }

    /// Backup buffer for the host to fill in place.
    pub fn backup_mut(&mut self) -> &mut [Pixel] {
        self.canvas.backup_mut()
    }

    /// Backup buffer as packed RGBA8 bytes, for zero-copy host fills.
    pub fn backup_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(self.canvas.backup_mut())
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// Canvas width in pixels (0 when unloaded).
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Canvas height in pixels (0 when unloaded).
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Whether a non-empty canvas is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.canvas.is_empty()
    }

    /// The pristine source image.
    pub fn backup(&self) -> &[Pixel] {
        self.canvas.backup()
    }

    /// The most recently rendered frame.
    pub fn display(&self) -> &[Pixel] {
        self.canvas.display()
    }

    /// The most recently rendered frame as packed RGBA8 bytes.
    pub fn display_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.canvas.display())
    }

    // ── Rendering ─────────────────────────────────────────────────

    /// Reset the display to the backup without applying anything.
    pub fn heal(&mut self) -> FrameOutcome {
        if self.canvas.heal() {
            FrameOutcome::Healed
        } else {
            FrameOutcome::Skipped
        }
    }

    /// Render one frame for a host-supplied numeric effect id.
    ///
    /// Unknown ids behave like [`EffectKind::None`]: the frame is healed and
    /// nothing else happens.
    pub fn render_frame(
        &mut self,
        mouse_x: i32,
        mouse_y: i32,
        radius: i32,
        effect_id: i32,
        intensity: f32,
    ) -> FrameOutcome {
        let effect = EffectKind::from_id(effect_id).unwrap_or_else(|| {
            tracing::trace!("no effect registered for id {effect_id}");
            EffectKind::None
        });
        self.render(mouse_x, mouse_y, radius, effect, intensity)
    }

    /// Render one frame with a bubble of `radius` around the cursor.
    pub fn render(
        &mut self,
        mouse_x: i32,
        mouse_y: i32,
        radius: i32,
        effect: EffectKind,
        intensity: f32,
    ) -> FrameOutcome {
        if !self.canvas.heal() {
            return FrameOutcome::Skipped;
        }
        let Some(entry) = registry::lookup(effect) else {
            return FrameOutcome::Healed;
        };

        let (width, height) = (self.canvas.width(), self.canvas.height());
        let region = Region::around(mouse_x, mouse_y, radius, width, height);
        let params = EffectParams::bubble(mouse_x, mouse_y, radius, intensity);

        entry.run(
            self.canvas.display_mut(),
            width,
            height,
            &region,
            &params,
            &mut self.rng,
        );
        tracing::debug!(
            "{} at ({mouse_x}, {mouse_y}) r={radius} intensity={intensity}, region {}x{}",
            entry.kind,
            region.width.max(0),
            region.height.max(0),
        );

        FrameOutcome::Applied {
            effect: entry.kind,
            region,
        }
    }

    /// Render a recorded [`FrameRequest`].
    pub fn render_request(&mut self, request: &FrameRequest) -> FrameOutcome {
        self.render(
            request.x,
            request.y,
            request.radius,
            request.effect,
            request.intensity,
        )
    }

    /// Apply an effect to the whole image: the bubble is centered on the
    /// canvas with a radius of `max(width, height) × full_frame_scale`, large
    /// enough to reach every corner at the default scale.
    pub fn render_full_frame(&mut self, effect_id: i32, intensity: f32) -> FrameOutcome {
        let (width, height) = (self.width(), self.height());
        let cx = i32::try_from(width / 2).unwrap_or(i32::MAX);
        let cy = i32::try_from(height / 2).unwrap_or(i32::MAX);
        let radius = (width.max(height) as f32 * self.config.full_frame_scale) as i32;
        self.render_frame(cx, cy, radius, effect_id, intensity)
    }
}

impl Default for GlitchEngine {
    fn default() -> Self {
        Self::new()
    }
}
