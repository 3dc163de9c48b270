//! HTTP Transport
//!
//! `ApiRequest` is a plain description of a backend call; `send` executes it
//! with gloo-net against the configured base URL.

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

/// A backend call, independent of how it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), query: None, body: None }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), query: None, body }
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Patch, path: path.into(), query: None, body: Some(body) }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Absolute URL under `base`; the query is appended even when empty so
    /// list paths always read `/users/?...`.
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match &self.query {
            Some(query) => format!("{}{}?{}", base, self.path, query),
            None => format!("{}{}", base, self.path),
        }
    }
}

/// Send a request and return the decoded JSON body (`Null` for empty bodies).
pub async fn send(config: &AppConfig, request: &ApiRequest) -> Result<Value, ApiError> {
    let url = request.url(&config.api_base_url);
    log::debug!("{:?} {}", request.method, url);

    let builder = RequestBuilder::new(&url)
        .method(request.method.into())
        .credentials(RequestCredentials::Include);
    let prepared = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("{:?} {} failed with {}", request.method, url, status);
        return Err(ApiError::from_response(status, &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and decode the body into `T`.
pub async fn send_json<T: DeserializeOwned>(config: &AppConfig, request: &ApiRequest) -> Result<T, ApiError> {
    let value = send(config, request).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
