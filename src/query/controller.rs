//! List-Query Controller
//!
//! Owns a page's `ListQueryState` and the data shown for it. Every fetch plan
//! carries a sequence number; only the response for the latest plan is
//! applied, so a slow response for an older state never overwrites newer rows.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{self, Resource};
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::models::Page;

use super::{ListQueryState, QueryCache, QueryKey};

/// An outstanding network fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    key: QueryKey,
    page: u32,
    request: ApiRequest,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }
}

/// What `begin_fetch` decided
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan {
    /// Served from a fresh cache entry; nothing to send
    Cached,
    Network(FetchTicket),
}

#[derive(Debug, Clone)]
pub struct ListQueryController<T> {
    resource: Resource,
    state: ListQueryState,
    data: Option<Page<T>>,
    /// Key and page the current `data` was loaded for
    data_key: Option<QueryKey>,
    data_page: u32,
    error: Option<String>,
    loading: bool,
    latest_seq: u64,
}

impl<T: DeserializeOwned + Clone> ListQueryController<T> {
    pub fn new(resource: Resource, page_size: u32) -> Self {
        Self {
            resource,
            state: ListQueryState::new(page_size),
            data: None,
            data_key: None,
            data_page: 1,
            error: None,
            loading: false,
            latest_seq: 0,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn state(&self) -> &ListQueryState {
        &self.state
    }

    pub fn key(&self) -> QueryKey {
        QueryKey::new(self.resource, &self.state)
    }

    pub fn data(&self) -> Option<&Page<T>> {
        self.data.as_ref()
    }

    pub fn items(&self) -> Vec<T> {
        self.data.as_ref().map(|page| page.items.clone()).unwrap_or_default()
    }

    pub fn total(&self) -> u64 {
        self.data.as_ref().map(|page| page.total).unwrap_or(0)
    }

    /// Page number the visible rows belong to. Lags `state().page` while a
    /// placeholder is shown.
    pub fn data_page(&self) -> u32 {
        self.data_page
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while rows from a previous key are shown for the current one
    pub fn is_placeholder(&self) -> bool {
        self.data_key.as_ref().is_some_and(|key| *key != self.key())
    }

    /// Returns whether the state changed (and a fetch is due).
    pub fn set_filter(&mut self, name: &str, value: Option<String>) -> bool {
        let next = self.state.with_filter(name, value);
        self.replace_state(next)
    }

    /// Returns whether the state changed (and a fetch is due).
    pub fn set_page(&mut self, page: u32) -> bool {
        let next = self.state.with_page(page);
        self.replace_state(next)
    }

    fn replace_state(&mut self, next: ListQueryState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    /// Decide how to load the current state. Any previously issued ticket is
    /// superseded, even when the answer comes from cache.
    pub fn begin_fetch(&mut self, cache: &QueryCache) -> FetchPlan {
        self.latest_seq += 1;
        let key = self.key();

        if let Some(value) = cache.fresh(&key) {
            match serde_json::from_value::<Page<T>>(value.clone()) {
                Ok(page) => {
                    log::debug!("{} served from cache: {}", self.resource.name(), key.query);
                    self.data = Some(page);
                    self.data_key = Some(key);
                    self.data_page = self.state.page;
                    self.error = None;
                    self.loading = false;
                    return FetchPlan::Cached;
                }
                Err(e) => log::warn!("discarding unreadable cache entry: {}", e),
            }
        }

        self.loading = true;
        self.error = None;
        let request = api::list(self.resource, &key.query);
        log::debug!("{} fetch #{}: {}", self.resource.name(), self.latest_seq, key.query);
        FetchPlan::Network(FetchTicket {
            seq: self.latest_seq,
            key,
            page: self.state.page,
            request,
        })
    }

    /// Apply a response. Returns false when the ticket was superseded and the
    /// response was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Value, ApiError>, cache: &mut QueryCache) -> bool {
        if ticket.seq != self.latest_seq {
            log::debug!(
                "{} dropping stale response #{} (latest #{})",
                self.resource.name(),
                ticket.seq,
                self.latest_seq
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(value) => match serde_json::from_value::<Page<T>>(value.clone()) {
                Ok(page) => {
                    cache.insert(ticket.key.clone(), value);
                    self.data = Some(page);
                    self.data_key = Some(ticket.key);
                    self.data_page = ticket.page;
                    self.error = None;
                }
                Err(e) => {
                    let err = ApiError::Decode(e.to_string());
                    log::warn!("{} list: {}", self.resource.name(), err);
                    self.error = Some(err.to_string());
                }
            },
            Err(err) => {
                log::warn!("{} list failed: {}", self.resource.name(), err);
                self.error = Some(err.to_string());
            }
        }
        true
    }
}
