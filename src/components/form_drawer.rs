//! Form Drawer Component
//!
//! Slide-in panel hosting a create/edit form with Cancel and Submit actions.

use leptos::prelude::*;

#[component]
pub fn FormDrawer(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] submitting: Signal<bool>,
    /// Message from the last failed save
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| on_cancel.run(())></div>
            <aside class="drawer">
                <header class="drawer-header">
                    <h2>{move || title.get()}</h2>
                    <div class="drawer-actions">
                        <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        <button
                            type="button"
                            class="primary"
                            disabled=move || submitting.get()
                            on:click=move |_| on_submit.run(())
                        >
                            {move || if submitting.get() { "Saving..." } else { "Submit" }}
                        </button>
                    </div>
                </header>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="drawer-body">{children()}</div>
            </aside>
        </Show>
    }
}
