//! PNG (and other `image`-crate formats) loading and saving.
//!
//! This module is feature-gated behind `png` (default on) so that embedders
//! that only need the BMP path can drop the `image` dependency. The byte
//! layout conversion lives in [`crate::pixel`] (always available).

use std::path::Path;

use image::ImageError;
use pixel_filter_core::{FilterError, Image};
use tracing::debug;

use crate::pixel::{image_to_rgb8, rgb8_to_image};

/// Decodes any format the `image` crate was built with, discarding alpha.
pub fn read(path: &Path) -> Result<Image, FilterError> {
    let rgb = image::open(path).map_err(convert_error)?.to_rgb8();
    let (w, h) = rgb.dimensions();
    debug!(width = w, height = h, path = %path.display(), "decoded raster");
    rgb8_to_image(w as usize, h as usize, rgb.as_raw())
}

/// Encodes an image, the format chosen by the extension of `path`.
///
/// Returns `FilterError::InvalidDimensions` for empty images or dimensions
/// that overflow `u32`, and `FilterError::Io` on write failure.
pub fn write(image: &Image, path: &Path) -> Result<(), FilterError> {
    if image.is_empty() {
        return Err(FilterError::InvalidDimensions);
    }
    let w = u32::try_from(image.width()).map_err(|_| FilterError::InvalidDimensions)?;
    let h = u32::try_from(image.height()).map_err(|_| FilterError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, image_to_rgb8(image))
        .ok_or_else(|| FilterError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(convert_error)?;
    debug!(width = w, height = h, path = %path.display(), "encoded raster");
    Ok(())
}

fn convert_error(e: ImageError) -> FilterError {
    match e {
        ImageError::Unsupported(_) | ImageError::Decoding(_) => {
            FilterError::UnsupportedFormat(e.to_string())
        }
        other => FilterError::Io(other.to_string()),
    }
}
