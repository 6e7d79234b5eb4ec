//! Pure conversion between [`Image`] and packed RGB8 byte buffers.
//!
//! This module is always available (no feature gate) so that the `png`
//! raster path and any embedder handing over raw frames share one layout:
//! three bytes per pixel, R then G then B, rows top to bottom, no padding.

use pixel_filter_core::{FilterError, Image, Pixel};

/// Flattens an image into `width * height * 3` bytes.
pub fn image_to_rgb8(image: &Image) -> Vec<u8> {
    image.pixels().iter().flat_map(|px| px.channels()).collect()
}

/// Builds an image from packed RGB8 bytes.
///
/// Returns `FilterError::DimensionMismatch` if `bytes` is not exactly
/// `width * height * 3` long.
pub fn rgb8_to_image(width: usize, height: usize, bytes: &[u8]) -> Result<Image, FilterError> {
    let expected = width
        .checked_mul(height)
        .ok_or(FilterError::InvalidDimensions)?;
    if bytes.len() % 3 != 0 || bytes.len() / 3 != expected {
        return Err(FilterError::DimensionMismatch {
            width,
            height,
            expected,
            got: bytes.len() / 3,
        });
    }
    let pixels = bytes
        .chunks_exact(3)
        .map(|c| Pixel::new(c[0], c[1], c[2]))
        .collect();
    Image::from_pixels(width, height, pixels)
}
