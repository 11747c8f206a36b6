use leptos::*;
use swisspunk_core::{ElementId, PlaygroundSession};
use web_sys::PointerEvent;

/// One draggable element: base text plus its ghost layers.
#[component]
pub fn StyledElement(
    id: ElementId,
    session: RwSignal<PlaygroundSession>,
    /// Pointer-down on the element
    on_grab: Callback<(ElementId, PointerEvent)>,
) -> impl IntoView {
    let element = create_memo(move |_| session.with(|s| s.element(id).cloned()));

    let class = move || {
        element.with(|el| {
            let mut class = String::from("draggable-element");
            if let Some(el) = el {
                if el.selected {
                    class.push_str(" selected");
                }
                if el.halftone() {
                    class.push_str(" halftone-effect");
                }
            }
            class
        })
    };

    let position = move || element.with(|el| el.as_ref().map(|el| el.position_css()));
    let text = move || element.with(|el| el.as_ref().map(|el| el.text.clone()).unwrap_or_default());
    let text_style = move || {
        element.with(|el| {
            el.as_ref()
                .and_then(|el| el.style.as_ref())
                .map(|style| style.text_css())
        })
    };

    let ghosts = move || {
        element.with(|el| {
            let Some(el) = el else {
                return Vec::new();
            };
            let Some(style) = el.style.as_ref() else {
                return Vec::new();
            };
            style
                .ghost_layers
                .iter()
                .map(|layer| (style.ghost_css(layer), el.text.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class=class
            data-id=id.to_string()
            style=position
            on:pointerdown=move |ev: PointerEvent| on_grab.call((id, ev))
        >
            <span class="element-text" style=text_style>
                {text}
            </span>
            {move || {
                ghosts()
                    .into_iter()
                    .map(|(style, text)| {
                        view! { <span class="element-text layer-clone" style=style>{text}</span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
