//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::AuthUser;

/// Session state shared by the shell and the role gate
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// User behind the session cookie, if any
    pub user: Option<AuthUser>,
    /// Set once the initial `/auth/self` check has resolved
    pub session_checked: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the outcome of the session check
pub fn store_set_user(store: &AppStore, user: Option<AuthUser>) {
    *store.user().write() = user;
    *store.session_checked().write() = true;
}

/// Forget the current user (after logout)
pub fn store_clear_user(store: &AppStore) {
    *store.user().write() = None;
}

/// Current user, tracked
pub fn store_user(store: &AppStore) -> Option<AuthUser> {
    store.user().get()
}

pub fn store_session_checked(store: &AppStore) -> bool {
    store.session_checked().get()
}
