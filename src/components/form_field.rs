//! Form Field Components
//!
//! Labelled inputs that show a field-level validation message.

use leptos::prelude::*;

/// Text-like input
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field" class:has-error=move || error.get().is_some()>
            <span class="form-label">{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

/// Drop-down with a blank placeholder option
#[component]
pub fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    /// (value, label) pairs
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-field" class:has-error=move || error.get().is_some()>
            <span class="form-label">{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                {move || {
                    let current = value.get();
                    options.get().into_iter().map(|(option_value, option_label)| {
                        let selected = option_value == current;
                        view! { <option value=option_value selected=selected>{option_label}</option> }
                    }).collect_view()
                }}
            </select>
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}
