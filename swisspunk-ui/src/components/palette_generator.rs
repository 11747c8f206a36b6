//! Clashing palette generator with per-swatch copy buttons.

use crate::components::CopyButton;
use crate::hooks::seeded_rng;
use leptos::*;
use swisspunk_core::{generate_palette, PaletteSwatch, DEFAULT_SWATCH_COUNT};

#[component]
pub fn PaletteGenerator() -> impl IntoView {
    let rng = store_value(seeded_rng());
    let swatches = create_rw_signal(Vec::<PaletteSwatch>::new());

    let regenerate = move || {
        let mut next = Vec::new();
        rng.update_value(|rng| next = generate_palette(DEFAULT_SWATCH_COUNT, rng));
        log::debug!("Generated palette of {} swatches", next.len());
        swatches.set(next);
    };

    regenerate();

    view! {
        <div class="palette-generator">
            <div class="palette-display">
                {move || {
                    swatches
                        .get()
                        .into_iter()
                        .map(|swatch| {
                            let hex = swatch.hex.to_string();
                            view! {
                                <div class="color-swatch" style=format!("background: {hex};")>
                                    <span
                                        class="color-code"
                                        style=format!("color: {};", swatch.label_color.css())
                                    >
                                        {hex.clone()}
                                    </span>
                                    <CopyButton text=hex/>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button class="btn-primary" on:click=move |_| regenerate()>
                "GENERATE PALETTE"
            </button>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_a_full_palette_on_mount() {
        let root = document()
            .create_element("div")
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        document().body().unwrap().append_child(&root).unwrap();

        mount_to(root.clone(), PaletteGenerator);

        let swatches = root.query_selector_all(".color-swatch").unwrap();
        assert_eq!(swatches.length() as usize, DEFAULT_SWATCH_COUNT);
        let copy_buttons = root.query_selector_all(".copy-btn").unwrap();
        assert_eq!(copy_buttons.length() as usize, DEFAULT_SWATCH_COUNT);
    }
}
