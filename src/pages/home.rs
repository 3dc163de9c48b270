//! Dashboard Home

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Role;
use crate::store::{store_user, use_app_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="page home">
            {move || match store_user(&store) {
                Some(user) => {
                    let is_admin = user.role == Role::Admin.as_str();
                    view! {
                        <h1>{format!("Welcome, {}", user.first_name)}</h1>
                        <Show when=move || is_admin>
                            <ul class="home-links">
                                <li><A href="/users">"Manage users"</A></li>
                                <li><A href="/tenants">"Manage restaurants"</A></li>
                            </ul>
                        </Show>
                    }.into_any()
                }
                None => view! { <p class="muted">"You are not signed in."</p> }.into_any(),
            }}
        </section>
    }
}
