//! Backup/display buffer pair.

use crate::error::CanvasError;
use crate::pixel::Pixel;

/// A pristine `backup` image and the `display` buffer effects draw into.
///
/// Both buffers always hold exactly `width × height` pixels. The display is
/// rebuilt from the backup at the start of every frame ("healing"), so effects
/// never accumulate.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    backup: Vec<Pixel>,
    display: Vec<Pixel>,
}

impl Canvas {
    /// Allocate a `width × height` canvas with both buffers transparent black.
    ///
    /// Zero-area canvases are valid and turn every operation into a no-op.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            backup: vec![Pixel::TRANSPARENT; len],
            display: vec![Pixel::TRANSPARENT; len],
        })
    }

    /// Build a canvas whose backup (and display) start as `pixels`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, CanvasError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(CanvasError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            display: pixels.clone(),
            backup: pixels,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per buffer.
    pub fn len(&self) -> usize {
        self.backup.len()
    }

    /// True for an unloaded or zero-area canvas.
    pub fn is_empty(&self) -> bool {
        self.backup.is_empty()
    }

    /// The pristine source image.
    pub fn backup(&self) -> &[Pixel] {
        &self.backup
    }

    /// Mutable access for the host to fill the source image in place.
    pub fn backup_mut(&mut self) -> &mut [Pixel] {
        &mut self.backup
    }

    /// The most recently rendered frame.
    pub fn display(&self) -> &[Pixel] {
        &self.display
    }

    pub(crate) fn display_mut(&mut self) -> &mut [Pixel] {
        &mut self.display
    }

    /// Replace the backup with `pixels`, which must be exactly canvas-sized.
    pub fn set_backup(&mut self, pixels: &[Pixel]) -> Result<(), CanvasError> {
        if pixels.len() != self.backup.len() {
            return Err(CanvasError::SizeMismatch {
                expected: self.backup.len(),
                actual: pixels.len(),
            });
        }
        self.backup.copy_from_slice(pixels);
        Ok(())
    }

    /// Copy the backup over the display. Returns `false` (and does nothing)
    /// when the canvas is empty.
    pub fn heal(&mut self) -> bool {
        if self.backup.is_empty() {
            return false;
        }
        self.display.copy_from_slice(&self.backup);
        true
    }
}

/// `width × height`, rejecting sizes whose byte length can't be allocated
/// (reachable on 32-bit and wasm targets).
fn pixel_count(width: u32, height: u32) -> Result<usize, CanvasError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|len| {
            len.checked_mul(size_of::<Pixel>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(CanvasError::DimensionsTooLarge { width, height })
}
