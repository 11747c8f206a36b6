//! Style parameters for a playground element.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Text shown when the user clears the text input.
pub const PLACEHOLDER_TEXT: &str = "PUNK";

pub const FONT_SIZE_RANDOM_RANGE: RangeInclusive<i32> = 30..=180;
pub const ROTATION_RANGE: RangeInclusive<i32> = -180..=180;
pub const LETTER_SPACING_RANGE: RangeInclusive<i32> = -10..=30;
pub const SKEW_RANGE: RangeInclusive<i32> = -30..=30;
pub const GLITCH_RANGE: RangeInclusive<u32> = 0..=100;
pub const LAYER_RANDOM_RANGE: RangeInclusive<u32> = 1..=5;

/// Colors offered by the color buttons and picked from on randomize.
pub const TEXT_COLORS: [&str; 6] = [
    "#FF0080", "#00FF41", "#FFFF00", "#00FFFF", "#000000", "#FFFFFF",
];

/// Everything needed to render one element. Rebuilt from the controls on every apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleParameters {
    pub text: String,
    pub font_size_px: i32,
    pub rotation_deg: i32,
    pub letter_spacing_px: i32,
    pub skew_x_deg: i32,
    pub skew_y_deg: i32,
    pub glitch_intensity: u32,
    pub layer_count: u32,
    pub halftone: bool,
    pub color: String,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            text: PLACEHOLDER_TEXT.to_string(),
            font_size_px: 80,
            rotation_deg: 0,
            letter_spacing_px: 0,
            skew_x_deg: 0,
            skew_y_deg: 0,
            glitch_intensity: 0,
            layer_count: 1,
            halftone: false,
            color: "#000000".to_string(),
        }
    }
}

impl StyleParameters {
    /// Sample every field uniformly within its range. The text is kept.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, text: &str) -> Self {
        Self {
            text: text.to_string(),
            font_size_px: rng.gen_range(FONT_SIZE_RANDOM_RANGE),
            rotation_deg: rng.gen_range(ROTATION_RANGE),
            letter_spacing_px: rng.gen_range(LETTER_SPACING_RANGE),
            skew_x_deg: rng.gen_range(SKEW_RANGE),
            skew_y_deg: rng.gen_range(SKEW_RANGE),
            glitch_intensity: rng.gen_range(GLITCH_RANGE),
            layer_count: rng.gen_range(LAYER_RANDOM_RANGE),
            halftone: rng.gen_bool(0.5),
            color: TEXT_COLORS[rng.gen_range(0..TEXT_COLORS.len())].to_string(),
        }
    }

    /// Text to display, substituting the placeholder for empty input.
    pub fn resolved_text(&self) -> &str {
        resolve_text(&self.text)
    }

    /// Layer count with the `>= 1` floor applied.
    pub fn effective_layer_count(&self) -> u32 {
        self.layer_count.max(1)
    }

    /// Glitch intensity clamped to [0, 100].
    pub fn effective_glitch(&self) -> u32 {
        self.glitch_intensity.min(*GLITCH_RANGE.end())
    }
}

/// Empty text falls back to the placeholder.
pub fn resolve_text(text: &str) -> &str {
    if text.is_empty() {
        PLACEHOLDER_TEXT
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults_match_reset_values() {
        let p = StyleParameters::default();
        assert_eq!(p.text, "PUNK");
        assert_eq!(p.font_size_px, 80);
        assert_eq!(p.layer_count, 1);
        assert_eq!(p.glitch_intensity, 0);
        assert!(!p.halftone);
        assert_eq!(p.color, "#000000");
    }

    #[test]
    fn empty_text_resolves_to_placeholder() {
        let p = StyleParameters {
            text: String::new(),
            ..StyleParameters::default()
        };
        assert_eq!(p.resolved_text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn zero_layers_floor_to_one() {
        let p = StyleParameters {
            layer_count: 0,
            ..StyleParameters::default()
        };
        assert_eq!(p.effective_layer_count(), 1);
    }

    #[test]
    fn random_stays_in_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = StyleParameters::random(&mut rng, "HELLO");
            assert_eq!(p.text, "HELLO");
            assert!(FONT_SIZE_RANDOM_RANGE.contains(&p.font_size_px));
            assert!(ROTATION_RANGE.contains(&p.rotation_deg));
            assert!(LETTER_SPACING_RANGE.contains(&p.letter_spacing_px));
            assert!(SKEW_RANGE.contains(&p.skew_x_deg));
            assert!(SKEW_RANGE.contains(&p.skew_y_deg));
            assert!(GLITCH_RANGE.contains(&p.glitch_intensity));
            assert!(LAYER_RANDOM_RANGE.contains(&p.layer_count));
            assert!(TEXT_COLORS.contains(&p.color.as_str()));
        }
    }

    #[test]
    fn random_halftone_takes_both_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let on = (0..200)
            .filter(|_| StyleParameters::random(&mut rng, "X").halftone)
            .count();
        assert!(on > 50 && on < 150, "halftone on {on} of 200");
    }
}
