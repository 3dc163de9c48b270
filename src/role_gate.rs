//! Role Gate
//!
//! Decides whether the signed-in user may see a page.

use crate::models::{AuthUser, Role};

/// Where rejected viewers are sent
pub const DEFAULT_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// No session counts as a mismatch.
pub fn evaluate(user: Option<&AuthUser>, required: Role) -> GateDecision {
    match user {
        Some(user) if user.role == required.as_str() => GateDecision::Allow,
        _ => GateDecision::Redirect(DEFAULT_ROUTE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> AuthUser {
        AuthUser {
            id: 1,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            role: role.to_string(),
            tenant: None,
        }
    }

    #[test]
    fn test_admin_allowed() {
        assert_eq!(evaluate(Some(&user_with_role("admin")), Role::Admin), GateDecision::Allow);
    }

    #[test]
    fn test_manager_redirected() {
        assert_eq!(
            evaluate(Some(&user_with_role("manager")), Role::Admin),
            GateDecision::Redirect("/")
        );
    }

    #[test]
    fn test_no_session_redirected() {
        assert_eq!(evaluate(None, Role::Admin), GateDecision::Redirect(DEFAULT_ROUTE));
    }

    #[test]
    fn test_role_match_is_exact() {
        assert_eq!(
            evaluate(Some(&user_with_role("Admin")), Role::Admin),
            GateDecision::Redirect(DEFAULT_ROUTE)
        );
    }
}
