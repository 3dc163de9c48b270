//! Auth Requests
//!
//! Session endpoints. The login form itself lives outside this app; the
//! builder is kept so every backend route has one place that names it.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http::{self, ApiRequest};
use crate::models::{AuthUser, Credentials};

pub fn login_request(credentials: &Credentials) -> ApiRequest {
    let body = serde_json::json!({
        "email": credentials.email,
        "password": credentials.password,
    });
    ApiRequest::post("/auth/login", Some(body))
}

pub fn self_request() -> ApiRequest {
    ApiRequest::get("/auth/self")
}

pub fn logout_request() -> ApiRequest {
    ApiRequest::post("/auth/logout", None)
}

/// Load the user behind the current session cookie
pub async fn fetch_self(config: &AppConfig) -> Result<AuthUser, ApiError> {
    http::send_json(config, &self_request()).await
}

pub async fn logout(config: &AppConfig) -> Result<(), ApiError> {
    http::send(config, &logout_request()).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn test_login_body() {
        let req = login_request(&Credentials {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/auth/login");
        let body = req.body.unwrap();
        assert_eq!(body["email"], "admin@example.com");
        assert_eq!(body["password"], "secret");
    }

    #[test]
    fn test_session_routes() {
        assert_eq!(self_request().method, HttpMethod::Get);
        assert_eq!(self_request().path, "/auth/self");
        let out = logout_request();
        assert_eq!(out.method, HttpMethod::Post);
        assert!(out.body.is_none());
    }
}
