//! List Queries
//!
//! Pagination + filter state, the cache keyed by it, and the controller that
//! turns state changes into fetches.

mod cache;
mod controller;
mod resource;

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::Resource;

pub use cache::QueryCache;
pub use controller::{FetchPlan, FetchTicket, ListQueryController};
pub use resource::ListResource;

// Same unreserved set as URLSearchParams minus the space-as-plus rule
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'*');

/// Pagination and filters for one list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
    pub page: u32,
    pub page_size: u32,
    pub filters: BTreeMap<String, Option<String>>,
}

impl ListQueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
        }
    }

    /// New state with `name` set; blank values clear the filter. Page resets to 1.
    pub fn with_filter(&self, name: &str, value: Option<String>) -> Self {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let mut filters = self.filters.clone();
        match value {
            Some(v) => {
                filters.insert(name.to_string(), Some(v));
            }
            None => {
                filters.remove(name);
            }
        }
        Self {
            page: 1,
            page_size: self.page_size,
            filters,
        }
    }

    /// New state on `page`, filters untouched.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).and_then(|v| v.as_deref())
    }

    /// Filters that actually go on the wire
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().filter_map(|(name, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((name.as_str(), v)),
            _ => None,
        })
    }

    /// `perPage=..&currentPage=..` followed by the active filters in name order
    pub fn query_string(&self) -> String {
        let mut parts = vec![
            format!("perPage={}", self.page_size),
            format!("currentPage={}", self.page),
        ];
        for (name, value) in self.active_filters() {
            parts.push(format!(
                "{}={}",
                utf8_percent_encode(name, QUERY_VALUE),
                utf8_percent_encode(value, QUERY_VALUE)
            ));
        }
        parts.join("&")
    }
}

/// Canonical cache key: resource plus the serialized query
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub resource: Resource,
    pub query: String,
}

impl QueryKey {
    pub fn new(resource: Resource, state: &ListQueryState) -> Self {
        Self {
            resource,
            query: state.query_string(),
        }
    }
}
