//! Error types for pixel-filter.

use thiserror::Error;

/// Errors produced while building images, resolving filters, or moving
/// images in and out of files.
///
/// The transforms themselves never fail; see [`crate::transform`].
#[derive(Debug, Error)]
pub enum FilterError {
    /// `width * height` overflowed `usize`, or a codec was handed a zero or
    /// out-of-range dimension.
    #[error("invalid dimensions: width and height must be positive and fit in memory")]
    InvalidDimensions,

    /// A pixel buffer did not match the declared image size.
    #[error("dimension mismatch: expected {expected} pixels for {width}x{height}, got {got}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// A filter name or flag was not recognized.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// A file was readable but not in a format the codec accepts.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Reading or writing an image file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FilterError {
    fn from(e: std::io::Error) -> Self {
        FilterError::Io(e.to_string())
    }
}
