#![deny(unsafe_code)]
//! Core types and transforms for pixel-filter.
//!
//! Provides the [`Pixel`] and [`Image`] data model, the four in-place
//! transforms in [`transform`] (grayscale, sepia, reflect, blur), and the
//! [`Filter`] registry that selects one of them by name. No file I/O lives
//! here; see `pixel-filter-io`.

pub mod error;
pub mod filter;
pub mod image;
pub mod pixel;
pub mod transform;

pub use error::FilterError;
pub use filter::Filter;
pub use image::Image;
pub use pixel::Pixel;
pub use transform::{blur, grayscale, reflect, sepia};
