//! Text punkifier: preset picker, generated output and SVG download.

use crate::hooks::{download_text, seeded_rng};
use gloo_timers::callback::Interval;
use leptos::*;
use swisspunk_core::{glitch_jitter, punkify, resolve_text, to_svg, PunkPreset, PunkSpan};

const JITTER_PERIOD_MS: u32 = 100;
const SVG_FILE_NAME: &str = "swiss-punk-text.svg";

#[component]
pub fn Punkifier() -> impl IntoView {
    let rng = store_value(seeded_rng());
    let input = create_rw_signal(String::new());
    let preset = create_rw_signal(PunkPreset::default());

    // What is on screen, which can lag behind the picker until Generate.
    let rendered_preset = create_rw_signal(PunkPreset::default());
    let rendered_text = create_rw_signal(String::new());
    let spans = create_rw_signal(Vec::<PunkSpan>::new());
    let jitter = create_rw_signal(None::<String>);
    let animation = store_value(None::<Interval>);
    let output_ref = create_node_ref::<html::Div>();

    on_cleanup(move || animation.set_value(None));

    let generate = move |_| {
        // Dropping the interval cancels it.
        animation.set_value(None);
        jitter.set(None);

        let text = input.get_untracked();
        let chosen = preset.get_untracked();
        let mut next = Vec::new();
        rng.update_value(|rng| next = punkify(&text, chosen, rng));
        log::debug!("Punkified {:?} as {} ({} spans)", text, chosen, next.len());

        rendered_text.set(resolve_text(&text).to_string());
        rendered_preset.set(chosen);
        spans.set(next);

        if chosen.animates() {
            animation.set_value(Some(Interval::new(JITTER_PERIOD_MS, move || {
                let mut offset = String::new();
                rng.update_value(|rng| offset = glitch_jitter(rng));
                jitter.set(Some(offset));
            })));
        }
    };

    let download = move |_| {
        let Some(output) = output_ref.get_untracked() else {
            return;
        };
        let rect = output.get_bounding_client_rect();
        let svg = to_svg(&rendered_text.get_untracked(), rect.width(), rect.height());
        if let Err(e) = download_text(&svg, SVG_FILE_NAME, "image/svg+xml") {
            log::warn!("SVG download failed: {:?}", e);
        }
    };

    let preset_buttons = PunkPreset::ALL
        .into_iter()
        .map(|p| {
            view! {
                <button
                    class="preset-btn"
                    class:active=move || preset.get() == p
                    data-style=p.id()
                    on:click=move |_| preset.set(p)
                >
                    {p.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="punkifier">
            <input
                id="inputText"
                type="text"
                class="tool-input"
                placeholder="ENTER YOUR TEXT"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <div class="preset-buttons">{preset_buttons}</div>
            <div class="tool-actions">
                <button id="generateBtn" class="btn-primary" on:click=generate>
                    "GENERATE"
                </button>
                <button id="downloadSVG" class="btn-secondary" on:click=download>
                    "DOWNLOAD SVG"
                </button>
            </div>
            <div id="punkOutput" class="punk-output" node_ref=output_ref>
                {move || {
                    let class = PunkSpan::class_for(rendered_preset.get());
                    spans
                        .get()
                        .into_iter()
                        .map(|span| {
                            let class = class.clone();
                            let text = span.text.clone();
                            let style = move || {
                                let mut css = span.css();
                                if span.transform.is_none() {
                                    if let Some(offset) = jitter.get() {
                                        css.push_str(&format!(" transform: {offset};"));
                                    }
                                }
                                css
                            };
                            view! { <span class=class style=style>{text}</span> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
