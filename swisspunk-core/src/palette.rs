//! Clashing palette generator.
//!
//! Saturated colors are drawn from four hue buckets spread around the wheel,
//! then one neutral (black, white or mid-gray) closes the set.

use crate::color::{HexColor, LabelColor};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_SWATCH_COUNT: usize = 5;

/// Hue ranges in degrees: red, green/yellow, cyan/blue, magenta/pink.
pub static HUE_BUCKETS: [RangeInclusive<f64>; 4] = [
    0.0..=30.0,
    60.0..=120.0,
    180.0..=240.0,
    280.0..=330.0,
];
pub const SATURATION_RANGE: RangeInclusive<f64> = 70.0..=100.0;
pub const LIGHTNESS_RANGE: RangeInclusive<f64> = 45.0..=65.0;

/// Black, white and mid-gray as HSL.
pub const NEUTRALS: [(f64, f64, f64); 3] = [(0.0, 0.0, 0.0), (0.0, 0.0, 100.0), (0.0, 0.0, 50.0)];

/// One generated color with the text color that reads best on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteSwatch {
    pub hex: HexColor,
    pub brightness: f64,
    pub label_color: LabelColor,
}

impl PaletteSwatch {
    pub fn new(hex: HexColor) -> Self {
        let brightness = hex.brightness();
        Self {
            hex,
            brightness,
            label_color: LabelColor::for_brightness(brightness),
        }
    }
}

/// Bucket used for the saturated swatch at `index`.
pub fn hue_bucket(index: usize) -> &'static RangeInclusive<f64> {
    &HUE_BUCKETS[index % HUE_BUCKETS.len()]
}

/// Generate `count` swatches. The last one is always a neutral.
pub fn generate_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<PaletteSwatch> {
    (0..count)
        .map(|i| {
            let (h, s, l) = if i + 1 < count {
                (
                    rng.gen_range(hue_bucket(i).clone()),
                    rng.gen_range(SATURATION_RANGE),
                    rng.gen_range(LIGHTNESS_RANGE),
                )
            } else {
                NEUTRALS[rng.gen_range(0..NEUTRALS.len())]
            };
            PaletteSwatch::new(HexColor::from_hsl(h, s, l))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn length_matches_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in 0..10 {
            assert_eq!(generate_palette(count, &mut rng).len(), count);
        }
    }

    #[test]
    fn single_swatch_is_neutral() {
        let mut rng = StdRng::seed_from_u64(2);
        let palette = generate_palette(1, &mut rng);
        let hex = palette[0].hex.to_string();
        assert!(["#000000", "#FFFFFF", "#808080"].contains(&hex.as_str()));
    }

    #[test]
    fn swatch_label_follows_brightness() {
        let white = PaletteSwatch::new(HexColor::WHITE);
        assert_eq!(white.brightness, 255.0);
        assert_eq!(white.label_color, LabelColor::Black);

        let black = PaletteSwatch::new(HexColor::BLACK);
        assert_eq!(black.brightness, 0.0);
        assert_eq!(black.label_color, LabelColor::White);
    }

    #[test]
    fn buckets_cycle_by_index() {
        assert_eq!(hue_bucket(0), &(0.0..=30.0));
        assert_eq!(hue_bucket(4), &(0.0..=30.0));
        assert_eq!(hue_bucket(7), &(280.0..=330.0));
    }
}
