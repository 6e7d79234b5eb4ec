//! Filter registry: maps names and CLI flags to transforms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FilterError;
use crate::image::Image;
use crate::transform;

/// All available filter names, in flag order.
const FILTER_NAMES: &[&str] = &["grayscale", "sepia", "reflect", "blur"];

/// The four supported image filters.
///
/// Use [`Filter::from_name`] or [`Filter::from_flag`] for string-based
/// construction (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Mean of the three channels on every channel.
    Grayscale,
    /// Sepia tone matrix, capped at 255.
    Sepia,
    /// Horizontal mirror.
    Reflect,
    /// 3x3 box blur with edge-aware divisors.
    Blur,
}

impl Filter {
    /// Every filter, in the same order as [`Filter::list_names`].
    pub const ALL: [Filter; 4] = [
        Filter::Grayscale,
        Filter::Sepia,
        Filter::Reflect,
        Filter::Blur,
    ];

    /// Looks up a filter by name (case insensitive).
    ///
    /// Returns `FilterError::UnknownFilter` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, FilterError> {
        match name.to_ascii_lowercase().as_str() {
            "grayscale" | "greyscale" => Ok(Filter::Grayscale),
            "sepia" => Ok(Filter::Sepia),
            "reflect" => Ok(Filter::Reflect),
            "blur" => Ok(Filter::Blur),
            _ => Err(FilterError::UnknownFilter(name.to_string())),
        }
    }

    /// Looks up a filter by its single-letter flag (`g`, `s`, `r`, `b`).
    pub fn from_flag(flag: char) -> Result<Self, FilterError> {
        match flag {
            'g' => Ok(Filter::Grayscale),
            's' => Ok(Filter::Sepia),
            'r' => Ok(Filter::Reflect),
            'b' => Ok(Filter::Blur),
            other => Err(FilterError::UnknownFilter(format!("-{other}"))),
        }
    }

    /// Returns a slice of all recognized filter names.
    pub fn list_names() -> &'static [&'static str] {
        FILTER_NAMES
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
        }
    }

    /// Single-letter flag.
    pub fn flag(self) -> char {
        match self {
            Filter::Grayscale => 'g',
            Filter::Sepia => 's',
            Filter::Reflect => 'r',
            Filter::Blur => 'b',
        }
    }

    /// Runs the filter over `image` in place.
    pub fn apply(self, image: &mut Image) {
        debug!(
            filter = self.name(),
            width = image.width(),
            height = image.height(),
            "applying filter"
        );
        match self {
            Filter::Grayscale => transform::grayscale(image),
            Filter::Sepia => transform::sepia(image),
            Filter::Reflect => transform::reflect(image),
            Filter::Blur => transform::blur(image),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn from_name_round_trips_every_listed_name() {
        for (name, filter) in Filter::list_names().iter().zip(Filter::ALL) {
            assert_eq!(Filter::from_name(name).unwrap(), filter);
            assert_eq!(filter.name(), *name);
        }
    }

    #[test]
    fn from_name_is_case_insensitive_and_accepts_greyscale() {
        assert_eq!(Filter::from_name("BLUR").unwrap(), Filter::Blur);
        assert_eq!(Filter::from_name("greyscale").unwrap(), Filter::Grayscale);
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = Filter::from_name("emboss");
        assert!(matches!(result, Err(FilterError::UnknownFilter(ref n)) if n == "emboss"));
    }

    #[test]
    fn flags_match_first_letter() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_flag(filter.flag()).unwrap(), filter);
        }
        assert!(matches!(
            Filter::from_flag('x'),
            Err(FilterError::UnknownFilter(_))
        ));
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Filter::Grayscale).unwrap();
        assert_eq!(json, "\"grayscale\"");
        let back: Filter = serde_json::from_str("\"blur\"").unwrap();
        assert_eq!(back, Filter::Blur);
    }

    #[test]
    fn apply_dispatches_to_the_matching_transform() {
        let base = Image::from_pixels(2, 1, vec![Pixel::new(10, 20, 30), Pixel::WHITE]).unwrap();

        let mut gray = base.clone();
        Filter::Grayscale.apply(&mut gray);
        assert_eq!(gray.get(0, 0), Pixel::new(20, 20, 20));

        let mut toned = base.clone();
        Filter::Sepia.apply(&mut toned);
        assert_eq!(toned.get(0, 1), Pixel::new(255, 255, 239));

        let mut mirrored = base.clone();
        Filter::Reflect.apply(&mut mirrored);
        assert_eq!(mirrored.get(0, 0), Pixel::WHITE);

        let mut blurred = base;
        Filter::Blur.apply(&mut blurred);
        // (10 + 255) / 2 = 132.5, (20 + 255) / 2 = 137.5, (30 + 255) / 2 = 142.5
        assert_eq!(blurred.get(0, 0), Pixel::new(133, 138, 143));
        assert_eq!(blurred.get(0, 0), blurred.get(0, 1));
    }

    #[test]
    fn every_filter_is_a_no_op_on_empty_images() {
        for filter in Filter::ALL {
            for (w, h) in [(0, 0), (0, 4), (4, 0)] {
                let mut image = Image::new(w, h).unwrap();
                filter.apply(&mut image);
                assert!(image.is_empty(), "{filter} changed an empty {w}x{h} image");
            }
        }
    }

    mod proptests {
        use super::*;
        use crate::transform::strategies::any_image;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_filter_is_deterministic(image in any_image()) {
                for filter in Filter::ALL {
                    let mut a = image.clone();
                    let mut b = image.clone();
                    filter.apply(&mut a);
                    filter.apply(&mut b);
                    prop_assert_eq!(a, b);
                }
            }

            #[test]
            fn every_filter_preserves_dimensions(image in any_image()) {
                for filter in Filter::ALL {
                    let mut out = image.clone();
                    filter.apply(&mut out);
                    prop_assert_eq!(out.width(), image.width());
                    prop_assert_eq!(out.height(), image.height());
                }
            }
        }
    }
}
