//! Tenant Requests
//!
//! Lookup used by the user form's restaurant picker.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http;
use crate::models::{Page, Tenant};

use super::{list, Resource};

/// Upper bound on restaurants offered in the picker
pub const TENANT_OPTIONS_LIMIT: u32 = 100;

pub async fn fetch_tenant_options(config: &AppConfig) -> Result<Vec<Tenant>, ApiError> {
    let query = format!("perPage={}&currentPage=1", TENANT_OPTIONS_LIMIT);
    let page: Page<Tenant> = http::send_json(config, &list(Resource::Tenants, &query)).await?;
    Ok(page.items)
}
