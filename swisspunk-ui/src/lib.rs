pub mod app;
pub mod components;
pub mod config;
pub mod hooks;

pub use app::{PlaygroundApp, ResourcesApp};

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Mount point for the playground page.
pub const PLAYGROUND_ROOT_ID: &str = "playground-root";
/// Mount point for the resources page tools.
pub const RESOURCES_ROOT_ID: &str = "resources-root";

fn find_root(id: &str) -> Option<web_sys::HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Mount the playground if this page has a playground root.
#[wasm_bindgen]
pub fn mount_playground() -> bool {
    let Some(root) = find_root(PLAYGROUND_ROOT_ID) else {
        return false;
    };
    let config = config::load_config(&root);
    mount_to(root, move || view! { <PlaygroundApp config=config /> });
    log::info!("Playground ready");
    true
}

/// Mount the punkifier and palette tools if this page has a resources root.
#[wasm_bindgen]
pub fn mount_resources() -> bool {
    let Some(root) = find_root(RESOURCES_ROOT_ID) else {
        return false;
    };
    mount_to(root, ResourcesApp);
    log::info!("Resources tools ready");
    true
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let mounted = mount_playground() | mount_resources();
    if !mounted {
        log::debug!(
            "No #{} or #{} on this page, nothing to mount",
            PLAYGROUND_ROOT_ID,
            RESOURCES_ROOT_ID
        );
    }
}
