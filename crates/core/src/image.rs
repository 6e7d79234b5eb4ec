//! Row-major grid of RGB pixels.
//!
//! An [`Image`] owns `width * height` [`Pixel`]s in a flat buffer with a row
//! stride equal to `width`. Unlike most containers in this workspace, zero
//! dimensions are allowed: an empty image is a valid input to every
//! transform and simply stays empty.

use crate::error::FilterError;
use crate::pixel::Pixel;

/// A `height` x `width` grid of pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Creates a black image of the given dimensions.
    ///
    /// Returns `FilterError::InvalidDimensions` if `width * height`
    /// overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FilterError> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Creates an image with every pixel set to `pixel`.
    ///
    /// Returns `FilterError::InvalidDimensions` if `width * height`
    /// overflows `usize`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, FilterError> {
        let len = width
            .checked_mul(height)
            .ok_or(FilterError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; len],
        })
    }

    /// Creates an image from a row-major pixel vector, validating that
    /// `pixels.len() == width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, FilterError> {
        let expected = width
            .checked_mul(height)
            .ok_or(FilterError::InvalidDimensions)?;
        if pixels.len() != expected {
            return Err(FilterError::DimensionMismatch {
                width,
                height,
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read-only access to the row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to the row-major pixel buffer.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        self.pixels[row * self.width + col]
    }

    /// Overwrites the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        self.pixels[row * self.width + col] = pixel;
    }

    /// Returns row `row` as a slice of `width` pixels.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterates over rows top to bottom.
    ///
    /// Yields nothing for an empty image.
    pub fn rows(
        &self,
    ) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator + '_ {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Iterates mutably over rows top to bottom.
    pub fn rows_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut [Pixel]> + ExactSizeIterator + '_ {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_black_image() {
        let image = Image::new(4, 3).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|&p| p == Pixel::BLACK));
    }

    #[test]
    fn zero_dimensions_are_empty_not_errors() {
        assert!(Image::new(0, 5).unwrap().is_empty());
        assert!(Image::new(5, 0).unwrap().is_empty());
        assert_eq!(Image::new(0, 5).unwrap().rows().count(), 0);
        assert_eq!(Image::new(0, 0).unwrap().rows().count(), 0);
    }

    #[test]
    fn overflowing_dimensions_return_error() {
        let result = Image::new(usize::MAX, 2);
        assert!(matches!(result, Err(FilterError::InvalidDimensions)));
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let result = Image::from_pixels(2, 2, vec![Pixel::WHITE; 3]);
        assert!(matches!(
            result,
            Err(FilterError::DimensionMismatch {
                expected: 4,
                got: 3,
                ..
            })
        ));
    }

    #[test]
    fn get_and_set_are_row_major() {
        let mut image = Image::new(3, 2).unwrap();
        image.set(1, 2, Pixel::new(9, 8, 7));
        assert_eq!(image.get(1, 2), Pixel::new(9, 8, 7));
        assert_eq!(image.pixels()[5], Pixel::new(9, 8, 7));
        assert_eq!(image.row(1)[2], Pixel::new(9, 8, 7));
    }

    #[test]
    fn rows_yield_height_slices_of_width() {
        let mut image = Image::new(3, 4).unwrap();
        for (i, row) in image.rows_mut().enumerate() {
            row.fill(Pixel::new(i as u8, 0, 0));
        }
        let rows: Vec<&[Pixel]> = image.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[3][0], Pixel::new(3, 0, 0));
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let image = Image::new(2, 2).unwrap();
        image.get(2, 0);
    }
}
