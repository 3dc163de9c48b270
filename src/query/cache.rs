//! Query Cache
//!
//! Raw list responses keyed by `QueryKey`. Invalidation marks entries stale
//! instead of dropping them so a page can keep showing old rows while the
//! refetch is in flight.

use std::collections::HashMap;

use serde_json::Value;

use crate::api::Resource;

use super::QueryKey;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stale: bool,
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `key` only if it has not been invalidated
    pub fn fresh(&self, key: &QueryKey) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.value)
    }

    /// Entry for `key`, stale or not
    pub fn get(&self, key: &QueryKey) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: QueryKey, value: Value) {
        self.entries.insert(key, CacheEntry { value, stale: false });
    }

    /// Mark every entry of `resource` stale; returns how many were touched.
    pub fn invalidate(&mut self, resource: Resource) -> usize {
        let mut touched = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.resource == resource {
                entry.stale = true;
                touched += 1;
            }
        }
        log::debug!("invalidated {} cached {} pages", touched, resource.name());
        touched
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQueryState;
    use serde_json::json;

    #[test]
    fn test_invalidate_only_touches_resource() {
        let mut cache = QueryCache::new();
        let state = ListQueryState::new(6);
        let users_p1 = QueryKey::new(Resource::Users, &state);
        let users_p2 = QueryKey::new(Resource::Users, &state.with_page(2));
        let tenants = QueryKey::new(Resource::Tenants, &state);
        cache.insert(users_p1.clone(), json!({ "data": [], "total": 0 }));
        cache.insert(users_p2.clone(), json!({ "data": [], "total": 0 }));
        cache.insert(tenants.clone(), json!({ "data": [], "total": 0 }));

        assert_eq!(cache.invalidate(Resource::Users), 2);

        assert!(cache.fresh(&users_p1).is_none());
        assert!(cache.fresh(&users_p2).is_none());
        assert!(cache.get(&users_p1).is_some());
        assert!(cache.fresh(&tenants).is_some());
    }

    #[test]
    fn test_insert_refreshes_stale_entry() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new(Resource::Tenants, &ListQueryState::new(6));
        cache.insert(key.clone(), json!(1));
        cache.invalidate(Resource::Tenants);
        cache.insert(key.clone(), json!(2));
        assert_eq!(cache.fresh(&key), Some(&json!(2)));
        assert_eq!(cache.len(), 1);
    }
}
