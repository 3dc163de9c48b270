//! Application Configuration
//!
//! Values are baked in at build time from `ADMIN_*` environment variables.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5501";
pub const DEFAULT_PER_PAGE: u32 = 6;
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Rows per list page
    pub per_page: u32,
    /// Quiet period before the search box commits
    pub search_debounce: Duration,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ADMIN_API_BASE_URL"),
            option_env!("ADMIN_PER_PAGE"),
            option_env!("ADMIN_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, per_page: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            per_page: per_page
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.per_page),
            log_level: log_level
                .and_then(|v| v.trim().parse::<LevelFilter>().ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}
