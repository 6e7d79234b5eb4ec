use crate::image::Image;

/// Mirrors every row left to right.
///
/// Column `j` swaps with column `width - 1 - j` for `j < width / 2`, whole
/// pixels at a time. For odd widths the middle column stays put.
pub fn reflect(image: &mut Image) {
    for row in image.rows_mut() {
        row.reverse();
    }
}
