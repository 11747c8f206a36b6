//! Playground control panel: text, style sliders, colors and actions.

use crate::components::ControlSlider;
use leptos::*;
use swisspunk_core::{StyleParameters, TEXT_COLORS};

/// Everything the panel can ask the playground to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// A style control changed. Carries the full updated snapshot.
    Params(StyleParameters),
    /// Text input changed. Updates the text only, without restyling.
    Text(String),
    Color(String),
    Randomize,
    Reset,
    AddElement,
    ShowGrid(bool),
    BreakGrid(bool),
}

struct SliderDef {
    label: &'static str,
    min: i32,
    max: i32,
    unit: &'static str,
    get: fn(&StyleParameters) -> i32,
    set: fn(&mut StyleParameters, i32),
}

#[component]
pub fn ControlPanel(
    /// Current control values
    params: Signal<StyleParameters>,
    /// Called for every user action
    on_action: Callback<ControlAction>,
) -> impl IntoView {
    let sliders = [
        SliderDef {
            label: "FONT SIZE",
            min: 20,
            max: 200,
            unit: "px",
            get: |p| p.font_size_px,
            set: |p, v| p.font_size_px = v,
        },
        SliderDef {
            label: "ROTATION",
            min: -180,
            max: 180,
            unit: "°",
            get: |p| p.rotation_deg,
            set: |p, v| p.rotation_deg = v,
        },
        SliderDef {
            label: "LETTER SPACING",
            min: -10,
            max: 30,
            unit: "px",
            get: |p| p.letter_spacing_px,
            set: |p, v| p.letter_spacing_px = v,
        },
        SliderDef {
            label: "GLITCH",
            min: 0,
            max: 100,
            unit: "",
            get: |p| p.glitch_intensity as i32,
            set: |p, v| p.glitch_intensity = v.max(0) as u32,
        },
        SliderDef {
            label: "LAYERS",
            min: 1,
            max: 5,
            unit: "",
            get: |p| p.layer_count as i32,
            set: |p, v| p.layer_count = v.max(1) as u32,
        },
        SliderDef {
            label: "SKEW X",
            min: -30,
            max: 30,
            unit: "°",
            get: |p| p.skew_x_deg,
            set: |p, v| p.skew_x_deg = v,
        },
        SliderDef {
            label: "SKEW Y",
            min: -30,
            max: 30,
            unit: "°",
            get: |p| p.skew_y_deg,
            set: |p, v| p.skew_y_deg = v,
        },
    ];

    let slider_views = sliders
        .into_iter()
        .map(|def| {
            let SliderDef {
                label,
                min,
                max,
                unit,
                get,
                set,
            } = def;
            let value = Signal::derive(move || params.with(|p| get(p)));
            let on_change = Callback::new(move |v: i32| {
                let mut next = params.get_untracked();
                set(&mut next, v);
                on_action.call(ControlAction::Params(next));
            });
            view! {
                <ControlSlider
                    label=label
                    value=value
                    on_change=on_change
                    min=min
                    max=max
                    unit=unit
                />
            }
        })
        .collect_view();

    let color_buttons = TEXT_COLORS
        .into_iter()
        .map(|color| {
            view! {
                <button
                    class="color-btn"
                    data-color=color
                    style=format!("background: {color};")
                    title=color
                    on:click=move |_| on_action.call(ControlAction::Color(color.to_string()))
                />
            }
        })
        .collect_view();

    view! {
        <div class="control-panel">
            <div class="control-group">
                <label class="control-label" for="textInput">"TEXT"</label>
                <input
                    id="textInput"
                    type="text"
                    class="control-input"
                    prop:value=move || params.with(|p| p.text.clone())
                    on:input=move |ev| on_action.call(ControlAction::Text(event_target_value(&ev)))
                />
            </div>

            {slider_views}

            <div class="control-group">
                <label class="control-label">"COLOR"</label>
                <div class="color-buttons">{color_buttons}</div>
            </div>

            <div class="control-group checkboxes">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || params.with(|p| p.halftone)
                        on:change=move |ev| {
                            let mut next = params.get_untracked();
                            next.halftone = event_target_checked(&ev);
                            on_action.call(ControlAction::Params(next));
                        }
                    />
                    " HALFTONE"
                </label>
                <label>
                    <input
                        type="checkbox"
                        on:change=move |ev| {
                            on_action.call(ControlAction::ShowGrid(event_target_checked(&ev)))
                        }
                    />
                    " SHOW GRID"
                </label>
                <label>
                    <input
                        type="checkbox"
                        on:change=move |ev| {
                            on_action.call(ControlAction::BreakGrid(event_target_checked(&ev)))
                        }
                    />
                    " BREAK GRID"
                </label>
            </div>

            <div class="control-actions">
                <button class="btn-primary" on:click=move |_| on_action.call(ControlAction::Randomize)>
                    "RANDOMIZE"
                </button>
                <button class="btn-secondary" on:click=move |_| on_action.call(ControlAction::Reset)>
                    "RESET"
                </button>
                <button class="btn-secondary" on:click=move |_| on_action.call(ControlAction::AddElement)>
                    "ADD ELEMENT"
                </button>
            </div>
        </div>
    }
}
