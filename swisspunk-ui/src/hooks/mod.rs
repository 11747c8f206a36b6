pub mod clipboard;
pub mod download;
pub mod drag;
pub mod rng;

pub use clipboard::copy_to_clipboard;
pub use download::download_text;
pub use drag::use_drag;
pub use rng::seeded_rng;
