//! Application Context
//!
//! Shared dependencies provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::query::QueryCache;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// List cache shared by every page
    pub cache: RwSignal<QueryCache>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            cache: RwSignal::new(QueryCache::new()),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
