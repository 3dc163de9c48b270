//! Restaurant Admin App
//!
//! Root component: resolves the session, provides shared context, and routes
//! between the dashboard pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Role;
use crate::pages::{HomePage, TenantsPage, UsersPage};
use crate::store::{store_clear_user, store_session_checked, store_set_user, store_user, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Resolve the session cookie once on mount
    spawn_local(async move {
        match api::fetch_self(&ctx.config()).await {
            Ok(user) => {
                log::info!("signed in as {} ({})", user.email, user.role);
                store_set_user(&store, Some(user));
            }
            Err(err) => {
                log::info!("no active session: {}", err);
                store_set_user(&store, None);
            }
        }
    });

    let logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::logout(&ctx.config()).await {
                log::warn!("logout failed: {}", err);
            }
            store_clear_user(&store);
        });
    };

    let is_admin = move || store_user(&store).is_some_and(|user| user.role == Role::Admin.as_str());

    view! {
        <Router>
            <header class="top-bar">
                <span class="brand">"Restaurant Admin"</span>
                <nav class="top-nav">
                    <A href="/">"Home"</A>
                    <Show when=is_admin>
                        <A href="/users">"Users"</A>
                        <A href="/tenants">"Restaurants"</A>
                    </Show>
                </nav>
                {move || store_user(&store).map(|user| view! {
                    <span class="current-user">{user.first_name}</span>
                    <button class="link-btn" on:click=logout>"Logout"</button>
                })}
            </header>

            <main class="main-content">
                <Show
                    when=move || store_session_checked(&store)
                    fallback=|| view! { <span class="spinner" aria-label="Loading"></span> }
                >
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/users") view=UsersPage />
                        <Route path=path!("/tenants") view=TenantsPage />
                    </Routes>
                </Show>
            </main>
        </Router>
    }
}
