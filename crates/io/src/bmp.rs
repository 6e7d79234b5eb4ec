//! 24-bit uncompressed BMP codec.
//!
//! Accepts exactly one layout: a 14-byte BITMAPFILEHEADER followed by a
//! 40-byte BITMAPINFOHEADER, pixel data at offset 54, 24 bits per pixel,
//! no compression. Rows are stored BGR and padded with zeros to a multiple
//! of four bytes. A positive height means bottom-up storage; decoded images
//! are always top row first.
//!
//! The 54 header bytes are kept verbatim in [`BmpHeader`] so that an image
//! written back with [`encode`] carries the exact header it was read with.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use pixel_filter_core::{FilterError, Image, Pixel};
use tracing::debug;

/// Size of BITMAPFILEHEADER.
pub const FILE_HEADER_LEN: usize = 14;
/// Size of BITMAPINFOHEADER.
pub const INFO_HEADER_LEN: usize = 40;
/// Combined header size, which is also the only accepted pixel data offset.
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

/// "BM", little-endian.
const SIGNATURE: u16 = 0x4d42;
const BITS_PER_PIXEL: u16 = 24;
const BYTES_PER_PIXEL: usize = 3;
const BI_RGB: u32 = 0;
/// 2835 pixels per metre is 72 DPI.
const DEFAULT_RESOLUTION: i32 = 2835;

// Field offsets within the combined header.
const OFF_TYPE: usize = 0;
const OFF_FILE_SIZE: usize = 2;
const OFF_DATA_OFFSET: usize = 10;
const OFF_INFO_SIZE: usize = 14;
const OFF_WIDTH: usize = 18;
const OFF_HEIGHT: usize = 22;
const OFF_PLANES: usize = 26;
const OFF_BIT_COUNT: usize = 28;
const OFF_COMPRESSION: usize = 30;
const OFF_IMAGE_SIZE: usize = 34;
const OFF_X_PPM: usize = 38;
const OFF_Y_PPM: usize = 42;

/// The raw, validated 54-byte header of a 24-bit BMP file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    bytes: [u8; HEADER_LEN],
}

impl BmpHeader {
    /// Validates raw header bytes.
    ///
    /// Returns `FilterError::UnsupportedFormat` for anything other than an
    /// uncompressed 24-bit BMP 3 layout, and `FilterError::InvalidDimensions`
    /// for a non-positive width or a zero height.
    pub fn parse(bytes: [u8; HEADER_LEN]) -> Result<Self, FilterError> {
        let header = Self { bytes };

        let signature = header.u16_at(OFF_TYPE);
        if signature != SIGNATURE {
            return Err(FilterError::UnsupportedFormat(format!(
                "not a BMP file (signature {signature:#06x})"
            )));
        }
        let offset = header.u32_at(OFF_DATA_OFFSET);
        if offset as usize != HEADER_LEN {
            return Err(FilterError::UnsupportedFormat(format!(
                "pixel data offset {offset}, expected {HEADER_LEN}"
            )));
        }
        let info_size = header.u32_at(OFF_INFO_SIZE);
        if info_size as usize != INFO_HEADER_LEN {
            return Err(FilterError::UnsupportedFormat(format!(
                "info header size {info_size}, expected {INFO_HEADER_LEN}"
            )));
        }
        let bits = header.u16_at(OFF_BIT_COUNT);
        if bits != BITS_PER_PIXEL {
            return Err(FilterError::UnsupportedFormat(format!(
                "{bits} bits per pixel, expected {BITS_PER_PIXEL}"
            )));
        }
        let compression = header.u32_at(OFF_COMPRESSION);
        if compression != BI_RGB {
            return Err(FilterError::UnsupportedFormat(format!(
                "compression type {compression}, expected uncompressed"
            )));
        }
        if header.i32_at(OFF_WIDTH) <= 0 || header.i32_at(OFF_HEIGHT) == 0 {
            return Err(FilterError::InvalidDimensions);
        }
        Ok(header)
    }

    /// Builds a fresh top-down header for a `width` x `height` image.
    ///
    /// Returns `FilterError::InvalidDimensions` if either dimension is zero
    /// or the file would not fit the 32-bit size fields.
    pub fn for_dimensions(width: usize, height: usize) -> Result<Self, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions);
        }
        let w = i32::try_from(width).map_err(|_| FilterError::InvalidDimensions)?;
        let h = i32::try_from(height).map_err(|_| FilterError::InvalidDimensions)?;
        let image_size = width
            .checked_mul(BYTES_PER_PIXEL)
            .map(|row| row + row_padding(width))
            .and_then(|stride| stride.checked_mul(height))
            .and_then(|size| u32::try_from(size).ok())
            .ok_or(FilterError::InvalidDimensions)?;
        let file_size = image_size
            .checked_add(HEADER_LEN as u32)
            .ok_or(FilterError::InvalidDimensions)?;

        let mut bytes = [0_u8; HEADER_LEN];
        put(&mut bytes, OFF_TYPE, &SIGNATURE.to_le_bytes());
        put(&mut bytes, OFF_FILE_SIZE, &file_size.to_le_bytes());
        put(&mut bytes, OFF_DATA_OFFSET, &(HEADER_LEN as u32).to_le_bytes());
        put(&mut bytes, OFF_INFO_SIZE, &(INFO_HEADER_LEN as u32).to_le_bytes());
        put(&mut bytes, OFF_WIDTH, &w.to_le_bytes());
        put(&mut bytes, OFF_HEIGHT, &(-h).to_le_bytes());
        put(&mut bytes, OFF_PLANES, &1_u16.to_le_bytes());
        put(&mut bytes, OFF_BIT_COUNT, &BITS_PER_PIXEL.to_le_bytes());
        put(&mut bytes, OFF_COMPRESSION, &BI_RGB.to_le_bytes());
        put(&mut bytes, OFF_IMAGE_SIZE, &image_size.to_le_bytes());
        put(&mut bytes, OFF_X_PPM, &DEFAULT_RESOLUTION.to_le_bytes());
        put(&mut bytes, OFF_Y_PPM, &DEFAULT_RESOLUTION.to_le_bytes());
        Ok(Self { bytes })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.i32_at(OFF_WIDTH).unsigned_abs() as usize
    }

    /// Image height in pixels, regardless of row order.
    pub fn height(&self) -> usize {
        self.i32_at(OFF_HEIGHT).unsigned_abs() as usize
    }

    /// True when the file stores its bottom row first (positive height).
    pub fn is_bottom_up(&self) -> bool {
        self.i32_at(OFF_HEIGHT) > 0
    }

    /// Zero bytes appended to each stored row.
    pub fn row_padding(&self) -> usize {
        row_padding(self.width())
    }

    /// The header exactly as it appears at the start of the file.
    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.bytes
    }

    fn u16_at(&self, off: usize) -> u16 {
        u16::from_le_bytes([self.bytes[off], self.bytes[off + 1]])
    }

    fn u32_at(&self, off: usize) -> u32 {
        u32::from_le_bytes(self.field4(off))
    }

    fn i32_at(&self, off: usize) -> i32 {
        i32::from_le_bytes(self.field4(off))
    }

    fn field4(&self, off: usize) -> [u8; 4] {
        [
            self.bytes[off],
            self.bytes[off + 1],
            self.bytes[off + 2],
            self.bytes[off + 3],
        ]
    }
}

/// `(4 - (width * 3) % 4) % 4`
fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

fn put(bytes: &mut [u8; HEADER_LEN], off: usize, value: &[u8]) {
    bytes[off..off + value.len()].copy_from_slice(value);
}

/// Reads a header and pixel grid from `reader`.
///
/// Returns `FilterError::Io` if the stream ends before the last row.
pub fn decode<R: Read>(mut reader: R) -> Result<(BmpHeader, Image), FilterError> {
    let mut raw = [0_u8; HEADER_LEN];
    reader.read_exact(&mut raw)?;
    let header = BmpHeader::parse(raw)?;

    let (width, height) = (header.width(), header.height());
    let stride = width
        .checked_mul(BYTES_PER_PIXEL)
        .map(|row| row + header.row_padding())
        .ok_or(FilterError::InvalidDimensions)?;

    // Grow with the bytes actually read; the header's size is untrusted.
    let mut pixels: Vec<Pixel> = Vec::new();
    let mut row = Vec::new();
    for stored in 0..height {
        row.clear();
        (&mut reader).take(stride as u64).read_to_end(&mut row)?;
        if row.len() != stride {
            return Err(FilterError::Io(format!(
                "unexpected end of file in row {stored} of {height}"
            )));
        }
        pixels.extend(
            row[..width * BYTES_PER_PIXEL]
                .chunks_exact(BYTES_PER_PIXEL)
                .map(|bgr| Pixel::new(bgr[2], bgr[1], bgr[0])),
        );
    }

    let mut image = Image::from_pixels(width, height, pixels)?;
    if header.is_bottom_up() {
        flip_rows(&mut image);
    }
    debug!(width, height, bottom_up = header.is_bottom_up(), "decoded bmp");
    Ok((header, image))
}

/// Writes `header` verbatim followed by the pixel grid in the header's row
/// order.
///
/// Returns `FilterError::DimensionMismatch` if the image is not the size the
/// header declares.
pub fn encode<W: Write>(
    mut writer: W,
    header: &BmpHeader,
    image: &Image,
) -> Result<(), FilterError> {
    if image.width() != header.width() || image.height() != header.height() {
        return Err(FilterError::DimensionMismatch {
            width: header.width(),
            height: header.height(),
            expected: header.width() * header.height(),
            got: image.pixels().len(),
        });
    }
    writer.write_all(header.as_bytes())?;

    let padding = [0_u8; 3];
    let pad = &padding[..header.row_padding()];
    let mut buf = Vec::with_capacity(image.width() * BYTES_PER_PIXEL + pad.len());
    let mut write_row = |row: &[Pixel]| -> Result<(), FilterError> {
        buf.clear();
        for px in row {
            buf.extend_from_slice(&[px.b, px.g, px.r]);
        }
        buf.extend_from_slice(pad);
        writer.write_all(&buf)?;
        Ok(())
    };
    if header.is_bottom_up() {
        image.rows().rev().try_for_each(&mut write_row)?;
    } else {
        image.rows().try_for_each(&mut write_row)?;
    }
    debug!(
        width = image.width(),
        height = image.height(),
        bottom_up = header.is_bottom_up(),
        "encoded bmp"
    );
    Ok(())
}

/// Opens and decodes a BMP file.
pub fn read(path: &Path) -> Result<(BmpHeader, Image), FilterError> {
    let file = File::open(path)
        .map_err(|e| FilterError::Io(format!("cannot open {}: {e}", path.display())))?;
    decode(BufReader::new(file))
}

/// Creates (or truncates) `path` and encodes the image into it.
pub fn write(path: &Path, header: &BmpHeader, image: &Image) -> Result<(), FilterError> {
    let file = File::create(path)
        .map_err(|e| FilterError::Io(format!("cannot create {}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, header, image)?;
    writer.flush()?;
    Ok(())
}

fn flip_rows(image: &mut Image) {
    let (width, height) = (image.width(), image.height());
    let pixels = image.pixels_mut();
    for top in 0..height / 2 {
        let bottom = height - 1 - top;
        let (upper, lower) = pixels.split_at_mut(bottom * width);
        upper[top * width..(top + 1) * width].swap_with_slice(&mut lower[..width]);
    }
}
