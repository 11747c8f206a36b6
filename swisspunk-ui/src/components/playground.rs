//! The playground page: canvas of draggable elements plus the control panel.

use crate::components::{ControlAction, ControlPanel, StyledElement};
use crate::hooks::{seeded_rng, use_drag};
use leptos::*;
use leptos_use::{use_element_size, UseElementSizeReturn};
use swisspunk_core::{CanvasBounds, PlaygroundConfig, PlaygroundSession, StyleParameters};

#[component]
pub fn Playground(config: PlaygroundConfig) -> impl IntoView {
    let initial_text = config.initial_text.clone();
    let session = create_rw_signal(PlaygroundSession::new(config));
    let params = create_rw_signal(StyleParameters {
        text: initial_text,
        ..StyleParameters::default()
    });
    let rng = store_value(seeded_rng());

    let canvas_ref = create_node_ref::<html::Div>();
    let UseElementSizeReturn { width, height } = use_element_size(canvas_ref);

    // Selecting an element pulls its text into the text input.
    let sync_text = Callback::new(move |text: String| params.update(|p| p.text = text));
    let on_grab = use_drag(session, sync_text);

    let on_action = Callback::new(move |action: ControlAction| match action {
        ControlAction::Params(next) => {
            session.update(|s| {
                s.apply_to_selected(&next);
            });
            params.set(next);
        }
        ControlAction::Text(text) => {
            session.update(|s| {
                s.set_text(&text);
            });
            params.update(|p| p.text = text);
        }
        ControlAction::Color(color) => {
            let current = params.get_untracked();
            let mut next = None;
            session.update(|s| next = s.set_color(&current, &color));
            if let Some(next) = next {
                params.set(next);
            }
        }
        ControlAction::Randomize => {
            let current = params.get_untracked();
            let bounds = CanvasBounds::new(width.get_untracked(), height.get_untracked());
            let mut next = None;
            rng.update_value(|rng| {
                session.update(|s| next = s.randomize_selected(&current, bounds, rng));
            });
            if let Some(next) = next {
                params.set(next);
            }
        }
        ControlAction::Reset => {
            let mut next = None;
            session.update(|s| next = s.reset_selected());
            if let Some(next) = next {
                params.set(next);
            }
        }
        ControlAction::AddElement => {
            let mut text = None;
            session.update(|s| {
                s.add_element();
                text = s.selected().map(|el| el.text.clone());
            });
            if let Some(text) = text {
                sync_text.call(text);
            }
        }
        ControlAction::ShowGrid(on) => session.update(|s| s.set_show_grid(on)),
        ControlAction::BreakGrid(on) => session.update(|s| s.set_break_grid(on)),
    });

    let canvas_class = move || session.with(|s| s.canvas_class());
    let element_ids = move || session.with(|s| s.element_ids());

    view! {
        <div class="playground">
            <div id="playgroundCanvas" class=canvas_class node_ref=canvas_ref>
                <For
                    each=element_ids
                    key=|id| *id
                    children=move |id| {
                        view! { <StyledElement id=id session=session on_grab=on_grab /> }
                    }
                />
            </div>
            <ControlPanel params=params.into() on_action=on_action />
        </div>
    }
}
