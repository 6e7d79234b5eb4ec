use crate::image::Image;
use crate::pixel::quantize;

/// Replaces every pixel with the rounded mean of its three channels.
///
/// `avg = round((r + g + b) / 3)`, written to all three channels.
pub fn grayscale(image: &mut Image) {
    for px in image.pixels_mut() {
        let sum = u16::from(px.r) + u16::from(px.g) + u16::from(px.b);
        let avg = quantize(f64::from(sum) / 3.0);
        px.r = avg;
        px.g = avg;
        px.b = avg;
    }
}
