use crate::image::Image;
use crate::pixel::{quantize, Pixel};

/// Box blur over the 3x3 neighborhood of every pixel.
///
/// Only in-bounds cells contribute, so the divisor ranges from 4 at a corner
/// to 9 in the interior (fewer on 1-wide or 1-tall images). Every sum reads
/// from a snapshot of the image taken before the first write.
pub fn blur(image: &mut Image) {
    if image.is_empty() {
        return;
    }
    let snapshot = image.clone();
    let (width, height) = (snapshot.width(), snapshot.height());

    for i in 0..height {
        let rows = i.saturating_sub(1)..=(i + 1).min(height - 1);
        for j in 0..width {
            let cols = j.saturating_sub(1)..=(j + 1).min(width - 1);

            let mut sum = [0_u32; 3];
            let mut count = 0_u32;
            for ni in rows.clone() {
                for px in &snapshot.row(ni)[cols.clone()] {
                    sum[0] += u32::from(px.r);
                    sum[1] += u32::from(px.g);
                    sum[2] += u32::from(px.b);
                    count += 1;
                }
            }

            let n = f64::from(count);
            let [r, g, b] = sum.map(|s| quantize(f64::from(s) / n));
            image.set(i, j, Pixel::new(r, g, b));
        }
    }
}
