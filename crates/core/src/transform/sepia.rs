use crate::image::Image;
use crate::pixel::{quantize, Pixel};

/// Rows of the sepia matrix: output channel `k` is `SEPIA[k] . (r, g, b)`.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Applies the classic sepia tone matrix to every pixel.
///
/// Each output channel is rounded and capped at 255. All three are computed
/// from the pixel's original channels before any is stored.
pub fn sepia(image: &mut Image) {
    for px in image.pixels_mut() {
        *px = tone(*px);
    }
}

fn tone(px: Pixel) -> Pixel {
    let (r, g, b) = (f64::from(px.r), f64::from(px.g), f64::from(px.b));
    let [red, green, blue] = SEPIA.map(|[kr, kg, kb]| quantize(kr * r + kg * g + kb * b));
    Pixel::new(red, green, blue)
}
