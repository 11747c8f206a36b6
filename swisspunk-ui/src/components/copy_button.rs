use crate::hooks::copy_to_clipboard;
use leptos::*;
use std::time::Duration;

const FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

/// Copies `text` and briefly confirms it in the button label.
#[component]
pub fn CopyButton(text: String) -> impl IntoView {
    let copied = create_rw_signal(false);
    let text = store_value(text);

    let on_click = move |ev: web_sys::MouseEvent| {
        // Swatch clicks must not bubble into the palette.
        ev.stop_propagation();
        text.with_value(|t| copy_to_clipboard(t));
        copied.set(true);
        set_timeout(move || copied.set(false), FEEDBACK_DURATION);
    };

    view! {
        <button class="copy-btn" on:click=on_click>
            {move || if copied.get() { "COPIED!" } else { "COPY" }}
        </button>
    }
}
