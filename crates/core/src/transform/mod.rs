//! The four in-place transforms.
//!
//! Each transform takes the caller's [`Image`](crate::Image) by mutable
//! reference, rewrites it, and returns nothing. None of them can fail and
//! none retain state between calls; an empty image is left untouched.
//!
//! Grayscale, sepia, and reflect are per-pixel or per-row maps that read
//! only values they have not yet overwritten. Blur reads neighbors, so it
//! works from a full snapshot taken before the first write.

mod blur;
mod grayscale;
mod reflect;
mod sepia;

pub use blur::blur;
pub use grayscale::grayscale;
pub use reflect::reflect;
pub use sepia::sepia;

#[cfg(test)]
pub(crate) mod strategies {
    use crate::image::Image;
    use crate::pixel::Pixel;
    use proptest::prelude::*;

    /// Strategy for small images, including zero-sized ones.
    pub fn any_image() -> impl Strategy<Value = Image> {
        (0_usize..=12, 0_usize..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<[u8; 3]>(), w * h).prop_map(move |raw| {
                let pixels = raw.into_iter().map(Pixel::from).collect();
                Image::from_pixels(w, h, pixels).unwrap()
            })
        })
    }
}
