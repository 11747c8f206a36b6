pub mod control_panel;
pub mod control_slider;
pub mod copy_button;
pub mod palette_generator;
pub mod playground;
pub mod punkifier;
pub mod styled_element;

pub use control_panel::{ControlAction, ControlPanel};
pub use control_slider::ControlSlider;
pub use copy_button::CopyButton;
pub use palette_generator::PaletteGenerator;
pub use playground::Playground;
pub use punkifier::Punkifier;
pub use styled_element::StyledElement;
