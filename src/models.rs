//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Contract shared by every server-owned record shown in a list page
pub trait Entity: Clone + Send + Sync + 'static {
    /// Server-assigned identifier
    fn id(&self) -> u64;
}

/// Tenant (restaurant) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: u64,
    pub name: String,
    // Embedded tenant references on users may omit the address
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Entity for Tenant {
    fn id(&self) -> u64 {
        self.id
    }
}

/// User record as returned by `/users/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub tenant: Option<Tenant>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Authenticated user returned by `/auth/self`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub tenant: Option<Tenant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Roles understood by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
        }
    }
}

/// One page of a list query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}
