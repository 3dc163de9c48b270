//! UI Components
//!
//! Reusable Leptos components.

mod form_drawer;
mod form_field;
mod list_status;
mod pager;
mod require_role;

pub use form_drawer::FormDrawer;
pub use form_field::{SelectField, TextField};
pub use list_status::ListStatus;
pub use pager::Pager;
pub use require_role::RequireRole;
