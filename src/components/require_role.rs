//! Require Role Component
//!
//! Renders its children only for users holding the given role.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::models::Role;
use crate::role_gate::{self, GateDecision};
use crate::store::{store_user, use_app_store};

/// Re-evaluated whenever the session user changes; a mismatch (or no session)
/// redirects and renders nothing else.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();

    move || match role_gate::evaluate(store_user(&store).as_ref(), role) {
        GateDecision::Allow => children().into_any(),
        GateDecision::Redirect(path) => {
            log::info!("role {} required, redirecting to {}", role.as_str(), path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}
