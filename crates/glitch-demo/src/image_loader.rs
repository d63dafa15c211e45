//! Image loading and saving for the demo application.

use std::path::Path;

use glitch_core::Pixel;

/// A decoded image in the engine's pixel format.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

/// Load an image from disk and convert it to RGBA8.
///
/// Supports every format the `image` crate decodes. Higher bit depths are
/// quantized to 8 bits per channel.
pub fn load_image(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels: Vec<Pixel> = rgba.pixels().map(|p| Pixel::from(p.0)).collect();

    Ok(LoadedImage {
        width,
        height,
        pixels,
    })
}

/// Write packed RGBA8 bytes to `path`; the format follows the extension.
pub fn save_image(
    path: &Path,
    width: u32,
    height: u32,
    bytes: &[u8],
) -> Result<(), ImageLoadError> {
    let expected = width as usize * height as usize * 4;
    let buffer = image::RgbaImage::from_raw(width, height, bytes.to_vec()).ok_or(
        ImageLoadError::BufferSize {
            expected,
            actual: bytes.len(),
        },
    )?;
    buffer.save(path).map_err(ImageLoadError::Encode)
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
