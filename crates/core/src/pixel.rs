//! 8-bit RGB pixel.

use serde::{Deserialize, Serialize};

/// One RGB triple with 8-bit channels and no alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// All channels zero.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    /// All channels 255.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Creates a pixel from red, green, and blue channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Rounds half away from zero and saturates to the 8-bit channel range.
///
/// NaN maps to 0.
pub(crate) fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_expected_channels() {
        assert_eq!(Pixel::BLACK.channels(), [0, 0, 0]);
        assert_eq!(Pixel::WHITE.channels(), [255, 255, 255]);
        assert_eq!(Pixel::default(), Pixel::BLACK);
    }

    #[test]
    fn from_array_preserves_order() {
        assert_eq!(Pixel::from([1, 2, 3]), Pixel::new(1, 2, 3));
    }

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(1.49), 1);
        assert_eq!(quantize(2.5), 3);
        assert_eq!(quantize(254.5), 255);
    }

    #[test]
    fn quantize_saturates() {
        assert_eq!(quantize(344.505), 255);
        assert_eq!(quantize(-3.0), 0);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn serde_round_trip_uses_named_channels() {
        let json = serde_json::to_value(Pixel::new(10, 20, 30)).unwrap();
        assert_eq!(json, serde_json::json!({"r": 10, "g": 20, "b": 30}));
        let back: Pixel = serde_json::from_value(json).unwrap();
        assert_eq!(back, Pixel::new(10, 20, 30));
    }
}
