//! Pages
//!
//! Routed views and the glue they share.

mod home;
mod tenants;
mod users;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::components::TextField;
use crate::context::AppContext;
use crate::forms::FormSchema;
use crate::http;
use crate::query::ListResource;
use crate::session::EditSession;

pub use home::HomePage;
pub use tenants::TenantsPage;
pub use users::UsersPage;

/// Validate, send the planned create/update, then either close the drawer and
/// refetch `list` or keep the form open with the error.
fn submit_form<S, T>(ctx: AppContext, session: RwSignal<EditSession<S>>, list: ListResource<T>)
where
    S: FormSchema,
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    // Invalid forms keep their field errors in the session
    let Some(Ok(ticket)) = session.try_update(|s| s.submit()) else {
        return;
    };
    let config = ctx.config();
    spawn_local(async move {
        match http::send(&config, ticket.request()).await {
            Ok(_) => {
                ctx.cache.update(|cache| {
                    session.try_update(|s| s.on_success(&ticket, cache));
                });
                list.fetch();
            }
            Err(err) => {
                session.try_update(|s| s.on_failure(&ticket, &err));
            }
        }
    });
}

/// Text input bound to one field of an edit session
fn session_text_field<S: FormSchema>(
    session: RwSignal<EditSession<S>>,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <TextField
            label=label
            input_type=input_type
            value=Signal::derive(move || session.with(|s| s.value(name)))
            error=Signal::derive(move || session.with(|s| s.error(name)))
            on_input=Callback::new(move |value: String| session.update(|s| s.set_field(name, value)))
        />
    }
}
