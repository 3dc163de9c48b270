//! REST Request Builders
//!
//! Pure functions mapping a resource action to an `ApiRequest`, organized by
//! domain. Nothing here retries or caches.

mod auth;
mod tenants;

use serde_json::Value;

use crate::http::ApiRequest;

pub use auth::*;
pub use tenants::*;

/// Collections managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Users,
    Tenants,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Tenants => "tenants",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/{}/", self.name())
    }

    pub fn item_path(&self, id: u64) -> String {
        format!("/{}/{}", self.name(), id)
    }
}

// ========================
// Collection Requests
// ========================

/// GET `/{resource}/?{query}`
pub fn list(resource: Resource, query: &str) -> ApiRequest {
    ApiRequest::get(resource.collection_path()).with_query(query)
}

/// POST `/{resource}/`
pub fn create(resource: Resource, payload: Value) -> ApiRequest {
    ApiRequest::post(resource.collection_path(), Some(payload))
}

/// PATCH `/{resource}/{id}`
pub fn update(resource: Resource, id: u64, payload: Value) -> ApiRequest {
    ApiRequest::patch(resource.item_path(id), payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_list_appends_query() {
        let req = list(Resource::Users, "perPage=6&currentPage=2&role=admin");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/users/");
        assert_eq!(req.query.as_deref(), Some("perPage=6&currentPage=2&role=admin"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_create_posts_to_collection() {
        let req = create(Resource::Tenants, json!({ "name": "Pizza Hut", "address": "MG Road" }));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/tenants/");
        assert_eq!(req.body.unwrap()["name"], "Pizza Hut");
    }

    #[test]
    fn test_update_patches_item_path() {
        let req = update(Resource::Users, 42, json!({ "firstName": "A" }));
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/users/42");
        assert!(req.query.is_none());
    }
}
