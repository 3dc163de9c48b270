//! User Form
//!
//! Password only exists when creating; the restaurant picker only exists for
//! managers and is re-evaluated whenever the role changes.

use serde_json::json;

use crate::api::Resource;
use crate::models::{Role, User};

use super::{Condition, FieldRule, FormSchema, FormValues, Format};

pub const ROLE_CHOICES: &[&str] = &["admin", "manager"];

fn is_manager(values: &FormValues) -> bool {
    values.get("role") == Role::Manager.as_str()
}

static RULES: [FieldRule; 6] = [
    FieldRule::required("firstName", "First name"),
    FieldRule::required("lastName", "Last name"),
    FieldRule::required("email", "Email").format(Format::Email),
    FieldRule::required("password", "Password").when(Condition::CreateOnly),
    FieldRule::required("role", "Role").one_of(ROLE_CHOICES),
    FieldRule::required("tenantId", "Restaurant")
        .when(Condition::When(is_manager))
        .format(Format::Id),
];

pub struct UserForm;

impl FormSchema for UserForm {
    type Entity = User;

    const RESOURCE: Resource = Resource::Users;
    const NOUN: &'static str = "User";

    fn rules() -> &'static [FieldRule] {
        &RULES
    }

    fn populate(user: &User) -> FormValues {
        let mut values = FormValues::new();
        values.set("firstName", user.first_name.as_str());
        values.set("lastName", user.last_name.as_str());
        values.set("email", user.email.as_str());
        values.set("role", user.role.as_str());
        // Embedded tenant collapses to its id
        values.set(
            "tenantId",
            user.tenant.as_ref().map(|t| t.id.to_string()).unwrap_or_default(),
        );
        values
    }
}
