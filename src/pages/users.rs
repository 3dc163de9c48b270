//! Users Page
//!
//! Paginated user table with search and role filters, plus the create/edit
//! drawer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, Resource};
use crate::components::{FormDrawer, ListStatus, Pager, RequireRole, SelectField};
use crate::context::use_app_context;
use crate::debounce::SEARCH_FIELD;
use crate::forms::UserForm;
use crate::models::{Role, Tenant, User};
use crate::query::ListResource;
use crate::session::EditSession;

use super::{session_text_field, submit_form};

const ROLE_FILTER: &str = "role";

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <UsersView />
        </RequireRole>
    }
}

#[component]
fn UsersView() -> impl IntoView {
    let ctx = use_app_context();
    let users = ListResource::<User>::new(Resource::Users, ctx);
    let session = RwSignal::new(EditSession::<UserForm>::new());
    let (tenants, set_tenants) = signal(Vec::<Tenant>::new());

    // Restaurant picker options
    spawn_local(async move {
        match api::fetch_tenant_options(&ctx.config()).await {
            Ok(loaded) => set_tenants.set(loaded),
            Err(err) => log::warn!("could not load restaurants: {}", err),
        }
    });

    let role_options: Vec<(String, String)> = Role::ALL
        .iter()
        .map(|role| (role.as_str().to_string(), role.label().to_string()))
        .collect();
    let filter_role_options = role_options.clone();

    view! {
        <section class="page">
            <div class="page-header">
                <nav class="breadcrumb">
                    <A href="/">"Dashboard"</A>
                    <span class="separator">"›"</span>
                    <span>"Users"</span>
                </nav>
                <ListStatus
                    loading=Signal::derive(move || users.is_loading())
                    error=Signal::derive(move || users.error())
                />
            </div>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search"
                    on:input=move |ev| users.on_filter_input(SEARCH_FIELD, event_target_value(&ev))
                />
                <select on:change=move |ev| users.on_filter_input(ROLE_FILTER, event_target_value(&ev))>
                    <option value="">"All roles"</option>
                    {filter_role_options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <button class="primary" on:click=move |_| session.update(|s| s.open_create())>
                    "+ Add User"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Restaurant"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || users.items().into_iter().map(|user| {
                        let restaurant = user.tenant.as_ref().map(|t| t.name.clone()).unwrap_or_default();
                        let row = view! {
                            <td>{user.id}</td>
                            <td>{user.full_name()}</td>
                            <td>{user.email.clone()}</td>
                            <td>{user.role.clone()}</td>
                            <td>{restaurant}</td>
                        };
                        view! {
                            <tr>
                                {row}
                                <td>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| session.update(|s| s.select_for_edit(user.clone()))
                                    >
                                        "Edit"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Pager
                page=Signal::derive(move || users.page())
                rows_page=Signal::derive(move || users.rows_page())
                page_size=Signal::derive(move || users.page_size())
                total=Signal::derive(move || users.total())
                shown=Signal::derive(move || users.items().len())
                on_change=Callback::new(move |page: u32| users.set_page(page))
            />

            <FormDrawer
                open=Signal::derive(move || session.with(|s| s.is_open()))
                title=Signal::derive(move || session.with(|s| s.title()))
                submitting=Signal::derive(move || session.with(|s| s.is_submitting()))
                error=Signal::derive(move || session.with(|s| s.submit_error().map(str::to_string)))
                on_cancel=Callback::new(move |_: ()| session.update(|s| s.cancel()))
                on_submit=Callback::new(move |_: ()| submit_form(ctx, session, users))
            >
                <UserFields session=session tenants=tenants role_options=role_options.clone() />
            </FormDrawer>
        </section>
    }
}

#[component]
fn UserFields(
    session: RwSignal<EditSession<UserForm>>,
    tenants: ReadSignal<Vec<Tenant>>,
    role_options: Vec<(String, String)>,
) -> impl IntoView {
    let tenant_options = Signal::derive(move || {
        tenants
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });

    view! {
        <fieldset class="form-card">
            <legend>"Basic Info"</legend>
            {session_text_field(session, "firstName", "First name", "text")}
            {session_text_field(session, "lastName", "Last name", "text")}
            {session_text_field(session, "email", "Email", "email")}
        </fieldset>

        <Show when=move || session.with(|s| s.is_active("password"))>
            <fieldset class="form-card">
                <legend>"Security Info"</legend>
                {session_text_field(session, "password", "Password", "password")}
            </fieldset>
        </Show>

        <fieldset class="form-card">
            <legend>"Role and Restaurant"</legend>
            <SelectField
                label="Role"
                placeholder="Select role"
                options=role_options.clone()
                value=Signal::derive(move || session.with(|s| s.value("role")))
                error=Signal::derive(move || session.with(|s| s.error("role")))
                on_change=Callback::new(move |value: String| session.update(|s| s.set_field("role", value)))
            />
            <Show when=move || session.with(|s| s.is_active("tenantId"))>
                <SelectField
                    label="Restaurant"
                    placeholder="Select restaurant"
                    options=tenant_options
                    value=Signal::derive(move || session.with(|s| s.value("tenantId")))
                    error=Signal::derive(move || session.with(|s| s.error("tenantId")))
                    on_change=Callback::new(move |value: String| session.update(|s| s.set_field("tenantId", value)))
                />
            </Show>
        </fieldset>
    }
}
