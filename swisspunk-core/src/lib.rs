pub mod color;
pub mod config;
pub mod drag;
pub mod element;
pub mod palette;
pub mod params;
pub mod punkify;
pub mod session;
pub mod style;

pub use color::{brightness_of, hsl_to_hex, hsl_to_rgb, ColorError, HexColor, LabelColor};
pub use config::{ConfigError, PlaygroundConfig};
pub use drag::DragSession;
pub use element::{CanvasBounds, Element, ElementId, Footprint, Position};
pub use palette::{generate_palette, PaletteSwatch, DEFAULT_SWATCH_COUNT};
pub use params::{resolve_text, StyleParameters, PLACEHOLDER_TEXT, TEXT_COLORS};
pub use punkify::{glitch_jitter, punkify, to_svg, PunkPreset, PunkSpan};
pub use session::PlaygroundSession;
pub use style::{
    base_transform, compute_ghost_layers, compute_style, ComputedStyle, GlitchShadow,
    LayerDescriptor,
};
