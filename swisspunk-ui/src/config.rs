//! Playground settings read from the mount root.
//!
//! A page can tune layout with `data-config='{"spawn_step": 40}'` on the root
//! element. Anything missing or unreadable falls back to the defaults.

use swisspunk_core::PlaygroundConfig;

pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Load the playground config from the root element's `data-config` attribute.
pub fn load_config(root: &web_sys::Element) -> PlaygroundConfig {
    parse_config(root.get_attribute(CONFIG_ATTRIBUTE).as_deref())
}

/// Parse an optional JSON config, logging and defaulting on failure.
pub fn parse_config(raw: Option<&str>) -> PlaygroundConfig {
    let Some(json) = raw else {
        return PlaygroundConfig::default();
    };

    match PlaygroundConfig::from_json(json) {
        Ok(config) => {
            log::info!("Loaded playground config from {}", CONFIG_ATTRIBUTE);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
            PlaygroundConfig::default()
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_data_config_attribute() {
        let document = leptos::document();
        let root = document.create_element("div").unwrap();
        root.set_attribute(CONFIG_ATTRIBUTE, r#"{"spawn_origin": 10, "spawn_step": 5}"#)
            .unwrap();

        let config = load_config(&root);
        assert_eq!(config.spawn_origin, 10.0);
        assert_eq!(config.spawn_step, 5.0);
    }
}
