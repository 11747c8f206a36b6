//! Style engine: turns [`StyleParameters`] into a renderable [`ComputedStyle`].
//!
//! Everything here is pure. Rendering the result onto real nodes is the
//! host's job, which keeps ghost layer generation testable without a DOM.

use crate::params::StyleParameters;

/// Glitch shadow palette. Only the first three are used by the shadow.
pub const GLITCH_COLORS: [&str; 4] = ["#FF0080", "#00FF41", "#FFFF00", "#00FFFF"];

/// Ghost layer `i` takes `GHOST_COLORS[i % 4]`.
pub const GHOST_COLORS: [&str; 4] = ["#FF0080", "#00FF41", "#FFFF00", "#00FFFF"];

pub const GHOST_OFFSET_STEP_PX: u32 = 3;
pub const GHOST_OPACITY: f64 = 0.5;
pub const GHOST_Z_INDEX: i32 = -1;

/// One offset copy of the text shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowLayer {
    pub dx: f64,
    pub dy: f64,
    pub color: &'static str,
}

/// Three-way colored drop shadow with offsets (+o,+o), (-o,-o), (+o,-o).
#[derive(Clone, Debug, PartialEq)]
pub struct GlitchShadow {
    pub offset: f64,
}

impl GlitchShadow {
    /// `None` when the intensity is zero.
    pub fn for_intensity(intensity: u32) -> Option<Self> {
        (intensity > 0).then(|| Self {
            offset: intensity as f64 / 10.0,
        })
    }

    pub fn layers(&self) -> [ShadowLayer; 3] {
        let o = self.offset;
        [
            ShadowLayer {
                dx: o,
                dy: o,
                color: GLITCH_COLORS[0],
            },
            ShadowLayer {
                dx: -o,
                dy: -o,
                color: GLITCH_COLORS[1],
            },
            ShadowLayer {
                dx: o,
                dy: -o,
                color: GLITCH_COLORS[2],
            },
        ]
    }

    pub fn css(&self) -> String {
        self.layers()
            .iter()
            .map(|l| format!("{}px {}px 0 {}", l.dx, l.dy, l.color))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A non-interactive duplicate of the base text, drawn behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerDescriptor {
    /// 1-based position in the stack.
    pub index: u32,
    pub transform: String,
    pub color: &'static str,
    pub opacity: f64,
    pub z_index: i32,
}

impl LayerDescriptor {
    /// Declarations layered over the base text style.
    pub fn css(&self) -> String {
        format!(
            "position: absolute; top: 0; left: 0; pointer-events: none; \
             opacity: {}; z-index: {}; transform: {}; color: {};",
            self.opacity, self.z_index, self.transform, self.color
        )
    }
}

/// Fully resolved visual state of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub font_size_px: i32,
    pub letter_spacing_px: i32,
    pub transform: String,
    pub shadow: Option<GlitchShadow>,
    pub color: String,
    pub ghost_layers: Vec<LayerDescriptor>,
    pub halftone: bool,
}

impl ComputedStyle {
    pub fn text_shadow_css(&self) -> String {
        self.shadow
            .as_ref()
            .map(GlitchShadow::css)
            .unwrap_or_else(|| "none".to_string())
    }

    /// Inline style for the base text node.
    pub fn text_css(&self) -> String {
        format!(
            "font-size: {}px; letter-spacing: {}px; transform: {}; text-shadow: {}; color: {};",
            self.font_size_px,
            self.letter_spacing_px,
            self.transform,
            self.text_shadow_css(),
            self.color
        )
    }

    /// Inline style for a ghost layer: base text style with the layer's overrides.
    pub fn ghost_css(&self, layer: &LayerDescriptor) -> String {
        format!("{} {}", self.text_css(), layer.css())
    }
}

/// Rotate first, then skew. The order matters and ghost layers append to it.
pub fn base_transform(params: &StyleParameters) -> String {
    format!(
        "rotate({}deg) skew({}deg, {}deg)",
        params.rotation_deg, params.skew_x_deg, params.skew_y_deg
    )
}

/// `layer_count - 1` ghost layers, each shifted a further 3px down-right.
pub fn compute_ghost_layers(params: &StyleParameters, base: &str) -> Vec<LayerDescriptor> {
    (1..params.effective_layer_count())
        .map(|i| {
            let shift = i * GHOST_OFFSET_STEP_PX;
            LayerDescriptor {
                index: i,
                transform: format!("{base} translate({shift}px, {shift}px)"),
                color: GHOST_COLORS[i as usize % GHOST_COLORS.len()],
                opacity: GHOST_OPACITY,
                z_index: GHOST_Z_INDEX,
            }
        })
        .collect()
}

pub fn compute_style(params: &StyleParameters) -> ComputedStyle {
    let transform = base_transform(params);
    let ghost_layers = compute_ghost_layers(params, &transform);

    ComputedStyle {
        font_size_px: params.font_size_px,
        letter_spacing_px: params.letter_spacing_px,
        shadow: GlitchShadow::for_intensity(params.effective_glitch()),
        color: params.color.clone(),
        ghost_layers,
        transform,
        halftone: params.halftone,
    }
}
