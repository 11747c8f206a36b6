//! Labelled range input for an integer style parameter.

use leptos::*;

/// Slider with label and live value readout.
#[component]
pub fn ControlSlider(
    /// Label text displayed above the slider
    label: &'static str,
    /// Current value signal
    value: Signal<i32>,
    /// Called on every input event with the new value
    on_change: Callback<i32>,
    /// Minimum value
    min: i32,
    /// Maximum value
    max: i32,
    /// Unit shown after the value, e.g. "px"
    #[prop(default = "")]
    unit: &'static str,
) -> impl IntoView {
    view! {
        <div class="control-group">
            <label class="control-label">
                {label}
                <span class="control-value">
                    {move || format!("{}{}", value.get(), unit)}
                </span>
            </label>
            <input
                type="range"
                class="control-slider"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                        on_change.call(v);
                    }
                }
            />
        </div>
    }
}
