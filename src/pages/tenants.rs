//! Tenants Page
//!
//! Restaurants table with search, plus the create/edit drawer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::Resource;
use crate::components::{FormDrawer, ListStatus, Pager, RequireRole};
use crate::context::use_app_context;
use crate::debounce::SEARCH_FIELD;
use crate::forms::TenantForm;
use crate::models::{Role, Tenant};
use crate::query::ListResource;
use crate::session::EditSession;

use super::{session_text_field, submit_form};

#[component]
pub fn TenantsPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <TenantsView />
        </RequireRole>
    }
}

#[component]
fn TenantsView() -> impl IntoView {
    let ctx = use_app_context();
    let tenants = ListResource::<Tenant>::new(Resource::Tenants, ctx);
    let session = RwSignal::new(EditSession::<TenantForm>::new());

    view! {
        <section class="page">
            <div class="page-header">
                <nav class="breadcrumb">
                    <A href="/">"Dashboard"</A>
                    <span class="separator">"›"</span>
                    <span>"Restaurants"</span>
                </nav>
                <ListStatus
                    loading=Signal::derive(move || tenants.is_loading())
                    error=Signal::derive(move || tenants.error())
                />
            </div>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search"
                    on:input=move |ev| tenants.on_filter_input(SEARCH_FIELD, event_target_value(&ev))
                />
                <button class="primary" on:click=move |_| session.update(|s| s.open_create())>
                    "+ Add Restaurant"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Address"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || tenants.items().into_iter().map(|tenant| {
                        let row = view! {
                            <td>{tenant.id}</td>
                            <td>{tenant.name.clone()}</td>
                            <td>{tenant.address.clone()}</td>
                        };
                        view! {
                            <tr>
                                {row}
                                <td>
                                    <button
                                        class="link-btn"
                                        on:click=move |_| session.update(|s| s.select_for_edit(tenant.clone()))
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
                page=Signal::derive(move || tenants.page())
                rows_page=Signal::derive(move || tenants.rows_page())
                page_size=Signal::derive(move || tenants.page_size())
                total=Signal::derive(move || tenants.total())
                shown=Signal::derive(move || tenants.items().len())
                on_change=Callback::new(move |page: u32| tenants.set_page(page))
            />

            <FormDrawer
                open=Signal::derive(move || session.with(|s| s.is_open()))
                title=Signal::derive(move || session.with(|s| s.title()))
                submitting=Signal::derive(move || session.with(|s| s.is_submitting()))
                error=Signal::derive(move || session.with(|s| s.submit_error().map(str::to_string)))
                on_cancel=Callback::new(move |_: ()| session.update(|s| s.cancel()))
                on_submit=Callback::new(move |_: ()| submit_form(ctx, session, tenants))
            >
                <fieldset class="form-card">
                    <legend>"Basic Info"</legend>
                    {session_text_field(session, "name", "Restaurant name", "text")}
                    {session_text_field(session, "address", "Address", "text")}
                </fieldset>
            </FormDrawer>
        </section>
    }
}
