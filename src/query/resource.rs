//! List Resource
//!
//! Binds a `ListQueryController` and a `FilterDebouncer` to Leptos signals and
//! runs the fetches they plan.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::Resource;
use crate::context::AppContext;
use crate::debounce::{FilterChange, FilterDebouncer};
use crate::http;

use super::{FetchPlan, ListQueryController};

/// Reactive handle for one list page
pub struct ListResource<T: Send + Sync + 'static> {
    controller: RwSignal<ListQueryController<T>>,
    debouncer: StoredValue<FilterDebouncer>,
    ctx: AppContext,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T> ListResource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create the handle and load the first page
    pub fn new(resource: Resource, ctx: AppContext) -> Self {
        let config = ctx.config();
        let this = Self {
            controller: RwSignal::new(ListQueryController::new(resource, config.per_page)),
            debouncer: StoredValue::new(FilterDebouncer::new(config.search_debounce)),
            ctx,
        };
        let debouncer = this.debouncer;
        on_cleanup(move || {
            debouncer.try_update_value(|d| d.cancel_all());
        });
        this.fetch();
        this
    }

    /// Load the current state, from cache when fresh
    pub fn fetch(self) {
        let plan = self
            .ctx
            .cache
            .with_untracked(|cache| self.controller.try_update(|c| c.begin_fetch(cache)));
        let Some(FetchPlan::Network(ticket)) = plan else {
            return;
        };
        let config = self.ctx.config();
        spawn_local(async move {
            let result = http::send(&config, ticket.request()).await;
            self.ctx.cache.update(|cache| {
                self.controller.update(|c| {
                    c.complete(ticket, result, cache);
                });
            });
        });
    }

    pub fn set_page(self, page: u32) {
        if self.controller.try_update(|c| c.set_page(page)).unwrap_or(false) {
            self.fetch();
        }
    }

    /// Apply a filter right away
    pub fn set_filter(self, field: &str, value: Option<String>) {
        if self.controller.try_update(|c| c.set_filter(field, value)).unwrap_or(false) {
            self.fetch();
        }
    }

    /// Raw input from a filter control; text fields are debounced
    pub fn on_filter_input(self, field: &str, value: String) {
        let value = Some(value).filter(|v| !v.trim().is_empty());
        match self.debouncer.try_update_value(|d| d.on_change(field, value)) {
            Some(FilterChange::Commit { field, value }) => self.set_filter(&field, value),
            Some(FilterChange::Schedule { token, delay }) => {
                let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                spawn_local(async move {
                    TimeoutFuture::new(ms).await;
                    // None once superseded or after the page is gone
                    if let Some((field, value)) = self.debouncer.try_update_value(|d| d.fire(&token)).flatten() {
                        self.set_filter(&field, value);
                    }
                });
            }
            None => {}
        }
    }

    // ========================
    // Tracked Accessors
    // ========================

    pub fn items(&self) -> Vec<T> {
        self.controller.with(|c| c.items())
    }

    pub fn total(&self) -> u64 {
        self.controller.with(|c| c.total())
    }

    pub fn error(&self) -> Option<String> {
        self.controller.with(|c| c.error().map(str::to_string))
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.is_loading())
    }

    pub fn page(&self) -> u32 {
        self.controller.with(|c| c.state().page)
    }

    /// Page the visible rows were loaded for
    pub fn rows_page(&self) -> u32 {
        self.controller.with(|c| c.data_page())
    }

    pub fn page_size(&self) -> u32 {
        self.controller.with(|c| c.state().page_size)
    }
}
