//! Text-effect generator for the resources page.
//!
//! Each preset expands the input text into a stack of styled spans. Like the
//! style engine, this only describes the spans; the host creates the nodes.

use crate::params::resolve_text;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PUNK_COLORS: [&str; 5] = ["#FF0080", "#00FF41", "#FFFF00", "#00FFFF", "#000000"];
pub const PUNK_FONT_FAMILY: &str = "Bebas Neue, sans-serif";
pub const PUNK_FONT_SIZE_PX: f64 = 80.0;

/// Max distance in px the glitch preset jitters each tick.
pub const GLITCH_JITTER_PX: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunkPreset {
    /// Three offset, slightly rotated copies.
    #[default]
    Weingart,
    /// One copy with a three-color shadow, jittered by the host.
    Glitch,
    /// Dot-pattern fill clipped to the glyphs.
    Halftone,
    /// Five translucent copies marching down-right.
    Layer,
    /// Every letter scattered with its own size, color and rotation.
    Chaos,
}

impl PunkPreset {
    pub const ALL: [PunkPreset; 5] = [
        PunkPreset::Weingart,
        PunkPreset::Glitch,
        PunkPreset::Halftone,
        PunkPreset::Layer,
        PunkPreset::Chaos,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PunkPreset::Weingart => "weingart",
            PunkPreset::Glitch => "glitch",
            PunkPreset::Halftone => "halftone",
            PunkPreset::Layer => "layer",
            PunkPreset::Chaos => "chaos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunkPreset::Weingart => "WEINGART",
            PunkPreset::Glitch => "GLITCH",
            PunkPreset::Halftone => "HALFTONE",
            PunkPreset::Layer => "LAYER",
            PunkPreset::Chaos => "CHAOS",
        }
    }

    /// Whether the host should run the jitter timer for this preset.
    pub fn animates(&self) -> bool {
        matches!(self, PunkPreset::Glitch)
    }
}

impl fmt::Display for PunkPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PunkPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PunkPreset::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| format!("unknown preset: {s}"))
    }
}

/// A single styled span of punkified output.
#[derive(Clone, Debug, PartialEq)]
pub struct PunkSpan {
    pub text: String,
    pub color: &'static str,
    pub font_size_px: f64,
    pub absolute: bool,
    pub transform: Option<String>,
    pub text_shadow: Option<String>,
    pub opacity: Option<f64>,
    pub z_index: Option<i32>,
    pub halftone: bool,
}

impl PunkSpan {
    fn new(text: &str, color: &'static str) -> Self {
        Self {
            text: text.to_string(),
            color,
            font_size_px: PUNK_FONT_SIZE_PX,
            absolute: false,
            transform: None,
            text_shadow: None,
            opacity: None,
            z_index: None,
            halftone: false,
        }
    }

    pub fn css(&self) -> String {
        let mut css = format!(
            "font-size: {}px; font-family: {}; color: {};",
            self.font_size_px, PUNK_FONT_FAMILY, self.color
        );
        if self.absolute {
            css.push_str(" position: absolute;");
        }
        if let Some(transform) = &self.transform {
            css.push_str(&format!(" transform: {transform};"));
        }
        if let Some(shadow) = &self.text_shadow {
            css.push_str(&format!(" text-shadow: {shadow};"));
        }
        if let Some(opacity) = self.opacity {
            css.push_str(&format!(" opacity: {opacity};"));
        }
        if let Some(z) = self.z_index {
            css.push_str(&format!(" z-index: {z};"));
        }
        if self.halftone {
            css.push_str(
                " background: radial-gradient(circle, #000 20%, transparent 20%);\
                 \x20background-size: 10px 10px;\
                 \x20-webkit-background-clip: text; background-clip: text;\
                 \x20-webkit-text-fill-color: transparent;",
            );
        }
        css
    }

    /// Class names for the span, e.g. `output-text glitch-style`.
    pub fn class_for(preset: PunkPreset) -> String {
        format!("output-text {}-style", preset.id())
    }
}

/// Expand `text` into the spans for `preset`. Empty text becomes the placeholder.
pub fn punkify<R: Rng + ?Sized>(text: &str, preset: PunkPreset, rng: &mut R) -> Vec<PunkSpan> {
    let text = resolve_text(text);

    match preset {
        PunkPreset::Weingart => (0..3)
            .map(|i| PunkSpan {
                absolute: true,
                transform: Some(format!(
                    "translate({}px, {}px) rotate({}deg)",
                    i * 5,
                    i * 5,
                    i * 2
                )),
                z_index: Some(10 - i as i32),
                ..PunkSpan::new(text, PUNK_COLORS[i])
            })
            .collect(),

        PunkPreset::Glitch => vec![PunkSpan {
            text_shadow: Some(format!(
                "3px 3px 0 {}, -3px -3px 0 {}, 3px -3px 0 {}",
                PUNK_COLORS[1], PUNK_COLORS[2], PUNK_COLORS[3]
            )),
            ..PunkSpan::new(text, PUNK_COLORS[0])
        }],

        PunkPreset::Halftone => vec![PunkSpan {
            halftone: true,
            ..PunkSpan::new(text, PUNK_COLORS[0])
        }],

        PunkPreset::Layer => (0..5)
            .map(|i| PunkSpan {
                absolute: true,
                opacity: Some(0.5),
                transform: Some(format!("translate({}px, {}px)", i * 8, i * 8)),
                z_index: Some(10 - i as i32),
                ..PunkSpan::new(text, PUNK_COLORS[i % PUNK_COLORS.len()])
            })
            .collect(),

        PunkPreset::Chaos => text
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                let color = PUNK_COLORS[rng.gen_range(0..PUNK_COLORS.len())];
                let dx = index as f64 * 50.0 + rng.gen_range(-20.0..20.0);
                let dy: f64 = rng.gen_range(-50.0..50.0);
                let rotation: f64 = rng.gen_range(-30.0..30.0);
                PunkSpan {
                    font_size_px: rng.gen_range(40.0..100.0_f64).round(),
                    absolute: true,
                    transform: Some(format!(
                        "translate({dx:.1}px, {dy:.1}px) rotate({rotation:.1}deg)"
                    )),
                    z_index: Some(index as i32),
                    ..PunkSpan::new(&letter.to_string(), color)
                }
            })
            .collect(),
    }
}

/// One tick of the glitch preset's jitter animation.
pub fn glitch_jitter<R: Rng + ?Sized>(rng: &mut R) -> String {
    let offset: f64 = rng.gen_range(-GLITCH_JITTER_PX..GLITCH_JITTER_PX);
    format!("translate({offset:.2}px, {offset:.2}px)")
}

/// Standalone SVG of the punkified text for download.
pub fn to_svg(text: &str, width: f64, height: f64) -> String {
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
    <rect width="100%" height="100%" fill="white"/>
    <text x="50%" y="50%" font-family="{font}" font-size="{size}" fill="{fill}" text-anchor="middle" dominant-baseline="middle">
        {text}
    </text>
</svg>"##,
        font = PUNK_FONT_FAMILY,
        size = PUNK_FONT_SIZE_PX,
        fill = PUNK_COLORS[0],
        text = escape_xml(resolve_text(text)),
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn span_counts_per_preset() {
        let mut rng = rng();
        assert_eq!(punkify("PUNK", PunkPreset::Weingart, &mut rng).len(), 3);
        assert_eq!(punkify("PUNK", PunkPreset::Glitch, &mut rng).len(), 1);
        assert_eq!(punkify("PUNK", PunkPreset::Halftone, &mut rng).len(), 1);
        assert_eq!(punkify("PUNK", PunkPreset::Layer, &mut rng).len(), 5);
        assert_eq!(punkify("RIOT!", PunkPreset::Chaos, &mut rng).len(), 5);
    }

    #[test]
    fn chaos_counts_characters_not_bytes() {
        let spans = punkify("ÜBER", PunkPreset::Chaos, &mut rng());
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].text, "Ü");
        for (i, span) in spans.iter().enumerate() {
            assert_eq!(span.z_index, Some(i as i32));
            assert!((40.0..=100.0).contains(&span.font_size_px));
        }
    }

    #[test]
    fn weingart_offsets_and_stacks() {
        let spans = punkify("X", PunkPreset::Weingart, &mut rng());
        assert_eq!(
            spans[2].transform.as_deref(),
            Some("translate(10px, 10px) rotate(4deg)")
        );
        assert_eq!(spans[2].z_index, Some(8));
        assert_eq!(spans[1].color, "#00FF41");
    }

    #[test]
    fn layer_copies_are_translucent() {
        let spans = punkify("X", PunkPreset::Layer, &mut rng());
        assert!(spans.iter().all(|s| s.opacity == Some(0.5)));
        assert_eq!(spans[4].transform.as_deref(), Some("translate(32px, 32px)"));
        assert_eq!(spans[4].color, "#000000");
    }

    #[test]
    fn empty_text_uses_placeholder() {
        let spans = punkify("", PunkPreset::Glitch, &mut rng());
        assert_eq!(spans[0].text, "PUNK");
    }

    #[test]
    fn halftone_css_clips_background_to_text() {
        let spans = punkify("DOTS", PunkPreset::Halftone, &mut rng());
        let css = spans[0].css();
        assert!(css.contains("background-clip: text;"));
        assert!(css.contains("background-size: 10px 10px;"));
    }

    #[test]
    fn preset_ids_round_trip() {
        for preset in PunkPreset::ALL {
            assert_eq!(preset.id().parse::<PunkPreset>(), Ok(preset));
        }
        assert!("mosh".parse::<PunkPreset>().is_err());
    }

    #[test]
    fn svg_escapes_markup() {
        let svg = to_svg("<B&W>", 400.0, 120.0);
        assert!(svg.contains("&lt;B&amp;W&gt;"));
        assert!(svg.contains(r#"viewBox="0 0 400 120""#));
        assert!(svg.starts_with("<?xml"));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mut rng = rng();
        for _ in 0..100 {
            let t = glitch_jitter(&mut rng);
            let value: f64 = t
                .trim_start_matches("translate(")
                .split("px")
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert!(value.abs() <= GLITCH_JITTER_PX);
        }
    }
}
