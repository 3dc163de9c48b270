//! Error Types
//!
//! Transport errors from the REST backend and field-scoped validation errors.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field name -> message, kept in field order for stable rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|field, _| keep(field));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Errors surfaced by a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        fields: FieldErrors,
    },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-2xx response body.
    ///
    /// Understands `{ "errors": [{ "msg", "path" | "param" }] }` and
    /// `{ "message": ... }`; anything else falls back to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let mut fields = FieldErrors::new();
        let mut message = None;

        if let Some(json) = &parsed {
            if let Some(errors) = json.get("errors").and_then(Value::as_array) {
                for entry in errors {
                    let Some(msg) = entry.get("msg").and_then(Value::as_str) else {
                        continue;
                    };
                    if message.is_none() {
                        message = Some(msg.to_string());
                    }
                    let field = entry
                        .get("path")
                        .or_else(|| entry.get("param"))
                        .and_then(Value::as_str);
                    if let Some(field) = field {
                        fields.insert(field, msg);
                    }
                }
            }
            if message.is_none() {
                message = json.get("message").and_then(Value::as_str).map(str::to_string);
            }
        }

        ApiError::Status {
            status,
            message: message.unwrap_or_else(|| format!("Request failed with status {}", status)),
            fields,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Status { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
