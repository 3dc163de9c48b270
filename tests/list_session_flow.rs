//! End-to-end flow across the list controller, edit session, debouncer and
//! shared cache, with the backend replaced by canned JSON.

use std::time::Duration;

use restaurant_admin_ui::api::Resource;
use restaurant_admin_ui::debounce::{FilterChange, FilterDebouncer, SEARCH_FIELD};
use restaurant_admin_ui::forms::TenantForm;
use restaurant_admin_ui::http::HttpMethod;
use restaurant_admin_ui::models::Tenant;
use restaurant_admin_ui::query::{FetchPlan, FetchTicket, ListQueryController, QueryCache};
use restaurant_admin_ui::session::{EditSession, SubmitPlan};
use serde_json::json;

fn network(plan: FetchPlan) -> FetchTicket {
    match plan {
        FetchPlan::Network(ticket) => ticket,
        FetchPlan::Cached => panic!("expected a network fetch"),
    }
}

#[test]
fn test_create_tenant_then_list_shows_it() {
    let mut cache = QueryCache::new();
    let mut list = ListQueryController::<Tenant>::new(Resource::Tenants, 6);
    let initial = network(list.begin_fetch(&cache));
    list.complete(initial, Ok(json!({ "data": [], "total": 0 })), &mut cache);
    assert_eq!(list.total(), 0);

    let mut session = EditSession::<TenantForm>::new();
    session.open_create();
    session.set_field("name", "Pizza Hut");
    session.set_field("address", "MG Road");
    let ticket = session.submit().unwrap();
    assert!(matches!(ticket.plan(), SubmitPlan::Create(req) if req.method == HttpMethod::Post));

    // Server answers with the created entity
    assert!(session.on_success(&ticket, &mut cache));
    assert!(!session.is_open());
    assert!(session.values().is_empty());

    // Invalidation forces the next read to the network
    let refetch = network(list.begin_fetch(&cache));
    let body = json!({ "data": [{ "id": 1, "name": "Pizza Hut", "address": "MG Road" }], "total": 1 });
    assert!(list.complete(refetch, Ok(body), &mut cache));

    let items = list.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].name, "Pizza Hut");
    assert_eq!(list.total(), 1);
}

#[test]
fn test_debounced_search_drives_single_fetch() {
    let cache = QueryCache::new();
    let mut list = ListQueryController::<Tenant>::new(Resource::Tenants, 6);
    let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
    list.set_page(3);

    let tokens: Vec<_> = ["p", "pi", "piz"]
        .iter()
        .filter_map(|v| match debouncer.on_change(SEARCH_FIELD, Some(v.to_string())) {
            FilterChange::Schedule { token, .. } => Some(token),
            FilterChange::Commit { .. } => None,
        })
        .collect();
    assert_eq!(tokens.len(), 3);

    let mut fetches = Vec::new();
    for token in &tokens {
        if let Some((field, value)) = debouncer.fire(token) {
            if list.set_filter(&field, value) {
                fetches.push(network(list.begin_fetch(&cache)));
            }
        }
    }

    assert_eq!(fetches.len(), 1);
    assert_eq!(fetches[0].request().query.as_deref(), Some("perPage=6&currentPage=1&q=piz"));
}
