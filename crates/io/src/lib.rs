#![deny(unsafe_code)]
//! Loading and saving images for pixel-filter.
//!
//! This crate sits between `pixel-filter-core` (pure pixel math) and the
//! CLI. It picks a codec from the file extension: `.bmp` goes through the
//! header-preserving [`bmp`] codec, anything else through [`raster`] (when
//! the `png` feature is enabled).

pub mod bmp;
pub mod pixel;

#[cfg(feature = "png")]
pub mod raster;

use std::path::Path;

use pixel_filter_core::{FilterError, Image};
use tracing::debug;

use crate::bmp::BmpHeader;

/// A decoded image plus, for BMP input, its original header.
///
/// Saving a document to `.bmp` reuses the stored header verbatim as long as
/// the image still has the dimensions it declares.
#[derive(Debug, Clone)]
pub struct Document {
    image: Image,
    header: Option<BmpHeader>,
}

impl Document {
    /// Wraps an image with no source header.
    pub fn new(image: Image) -> Self {
        Self {
            image,
            header: None,
        }
    }

    /// Wraps an image decoded from a BMP file together with its header.
    pub fn with_header(image: Image, header: BmpHeader) -> Self {
        Self {
            image,
            header: Some(header),
        }
    }

    /// The pixel grid.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Mutable access to the pixel grid, for running transforms.
    pub fn image_mut(&mut self) -> &mut Image {
        &mut self.image
    }

    /// The BMP header the image was read with, if any.
    pub fn header(&self) -> Option<&BmpHeader> {
        self.header.as_ref()
    }
}

/// True if `path` has a `.bmp` extension (case insensitive).
pub(crate) fn is_bmp(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("bmp"))
}

/// Loads an image, choosing the codec by extension.
pub fn open(path: &Path) -> Result<Document, FilterError> {
    if is_bmp(path) {
        let (header, image) = bmp::read(path)?;
        return Ok(Document::with_header(image, header));
    }
    open_raster(path)
}

#[cfg(feature = "png")]
fn open_raster(path: &Path) -> Result<Document, FilterError> {
    raster::read(path).map(Document::new)
}

#[cfg(not(feature = "png"))]
fn open_raster(path: &Path) -> Result<Document, FilterError> {
    Err(FilterError::UnsupportedFormat(format!(
        "{}: only .bmp is supported without the `png` feature",
        path.display()
    )))
}

/// Saves a document, choosing the codec by extension.
///
/// For `.bmp` output the document's own header is written back unchanged
/// when it matches the image size; otherwise a fresh top-down header is
/// built.
pub fn save(doc: &Document, path: &Path) -> Result<(), FilterError> {
    if is_bmp(path) {
        let image = doc.image();
        let header = match doc.header() {
            Some(h) if h.width() == image.width() && h.height() == image.height() => h.clone(),
            _ => {
                debug!(path = %path.display(), "synthesizing bmp header");
                BmpHeader::for_dimensions(image.width(), image.height())?
            }
        };
        return bmp::write(path, &header, image);
    }
    save_raster(doc, path)
}

#[cfg(feature = "png")]
fn save_raster(doc: &Document, path: &Path) -> Result<(), FilterError> {
    raster::write(doc.image(), path)
}

#[cfg(not(feature = "png"))]
fn save_raster(_doc: &Document, path: &Path) -> Result<(), FilterError> {
    Err(FilterError::UnsupportedFormat(format!(
        "{}: only .bmp is supported without the `png` feature",
        path.display()
    )))
}
