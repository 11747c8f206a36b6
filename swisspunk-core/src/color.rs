//! Hex/RGB/HSL conversions and perceived brightness.
//!
//! HSL: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
//! Hex colors are always rendered as `#RRGGBB` with uppercase digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Brightness above which dark label text reads better than light.
pub const LABEL_BRIGHTNESS_THRESHOLD: f64 = 128.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// An opaque sRGB color written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    rgb: [u8; 3],
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { rgb: [0, 0, 0] };
    pub const WHITE: HexColor = HexColor {
        rgb: [255, 255, 255],
    };

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let [r, g, b] = hsl_to_rgb(h, s, l);
        Self::from_rgb(r, g, b)
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Luma-weighted brightness in [0, 255].
    pub fn brightness(&self) -> f64 {
        let [r, g, b] = self.rgb;
        (r as f64 * 299.0 + g as f64 * 587.0 + b as f64 * 114.0) / 1000.0
    }

    pub fn label_color(&self) -> LabelColor {
        LabelColor::for_brightness(self.brightness())
    }

    /// Convert back to HSL as (hue degrees, saturation %, lightness %).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let [r, g, b] = self.rgb;
        rgb_to_hsl(r, g, b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    /// Accepts `#RRGGBB` or `RRGGBB` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(s.to_string()))
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Foreground color for text drawn on top of a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelColor {
    Black,
    White,
}

impl LabelColor {
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness > LABEL_BRIGHTNESS_THRESHOLD {
            LabelColor::Black
        } else {
            LabelColor::White
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            LabelColor::Black => "#000000",
            LabelColor::White => "#FFFFFF",
        }
    }
}

/// Brightness of a hex color string such as `#FF0080`.
pub fn brightness_of(hex: &str) -> Result<f64, ColorError> {
    Ok(hex.parse::<HexColor>()?.brightness())
}

/// Convert HSL to 8-bit sRGB channels.
///
/// Uses the piecewise form `f(n) = l - a * max(min(k - 3, 9 - k, 1), -1)`
/// with `k = (n + h / 30) mod 12` and `a = s * min(l, 1 - l)`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}

/// Convert HSL to an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    HexColor::from_hsl(h, s, l).to_string()
}

/// Convert 8-bit sRGB to (hue degrees, saturation %, lightness %).
/// Achromatic colors report a hue of 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, l * 100.0);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h.rem_euclid(360.0), s * 100.0, l * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00FF00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000FF");
    }

    #[test]
    fn hsl_neutrals() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
        assert_eq!(hsl_to_hex(0.0, 0.0, 50.0), "#808080");
    }

    #[test]
    fn hex_output_is_uppercase() {
        // Hot pink has lowercase-prone digits
        assert_eq!(hsl_to_hex(330.0, 100.0, 50.0), "#FF0080");
    }

    #[test]
    fn parse_accepts_optional_hash_and_any_case() {
        let a: HexColor = "#ff0080".parse().unwrap();
        let b: HexColor = "FF0080".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rgb(), [255, 0, 128]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "#FFF".parse::<HexColor>(),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            "#GG0000".parse::<HexColor>(),
            Err(ColorError::InvalidDigit(_))
        ));
        assert!(matches!(
            "#+F0000".parse::<HexColor>(),
            Err(ColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn brightness_extremes() {
        assert_eq!(brightness_of("#FFFFFF").unwrap(), 255.0);
        assert_eq!(brightness_of("#000000").unwrap(), 0.0);
    }

    #[test]
    fn brightness_weights_green_most() {
        let red = brightness_of("#FF0000").unwrap();
        let green = brightness_of("#00FF00").unwrap();
        let blue = brightness_of("#0000FF").unwrap();
        assert!(green > red && red > blue);
        assert!((green - 149.685).abs() < 1e-9);
    }

    #[test]
    fn label_flips_at_threshold() {
        assert_eq!(LabelColor::for_brightness(128.0), LabelColor::White);
        assert_eq!(LabelColor::for_brightness(128.001), LabelColor::Black);
        assert_eq!(HexColor::WHITE.label_color(), LabelColor::Black);
        assert_eq!(HexColor::BLACK.label_color(), LabelColor::White);
    }

    #[test]
    fn rgb_to_hsl_recovers_hue() {
        let (h, s, l) = rgb_to_hsl(0, 0, 255);
        assert!((h - 240.0).abs() < 1e-9);
        assert!((s - 100.0).abs() < 1e-9);
        assert!((l - 50.0).abs() < 1e-9);
    }

    #[test]
    fn serde_uses_hex_string() {
        let color = HexColor::from_rgb(0, 255, 65);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#00FF41\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
