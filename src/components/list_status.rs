//! List Status Component
//!
//! Loading spinner and the last fetch error.

use leptos::prelude::*;

#[component]
pub fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="list-status">
            <Show when=move || loading.get()>
                <span class="spinner" aria-label="Loading"></span>
            </Show>
            {move || error.get().map(|msg| view! { <span class="text-danger">{msg}</span> })}
        </div>
    }
}
