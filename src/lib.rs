//! Restaurant Admin Frontend
//!
//! Leptos CSR dashboard for managing users and restaurants. The state
//! machines behind the pages (`query`, `debounce`, `session`, `forms`,
//! `role_gate`) have no DOM dependency and are tested natively.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod debounce;
pub mod error;
pub mod forms;
pub mod http;
pub mod logging;
pub mod models;
pub mod pages;
pub mod query;
pub mod role_gate;
pub mod session;
pub mod store;
