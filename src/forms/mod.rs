//! Form Definitions
//!
//! Declarative field rules per resource. A rule's condition decides whether
//! the field is part of the form for the current mode and values; only active
//! fields are validated and sent.

mod tenant;
mod user;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::api::Resource;
use crate::error::FieldErrors;
use crate::models::Entity;

pub use tenant::TenantForm;
pub use user::UserForm;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// When a field belongs to the form
#[derive(Clone, Copy)]
pub enum Condition {
    Always,
    CreateOnly,
    When(fn(&FormValues) -> bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    /// Positive integer id
    Id,
}

#[derive(Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub condition: Condition,
    pub required: bool,
    pub format: Option<Format>,
    /// Allowed values; empty means free input
    pub choices: &'static [&'static str],
}

impl FieldRule {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            condition: Condition::Always,
            required: true,
            format: None,
            choices: &[],
        }
    }

    pub const fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub const fn one_of(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    pub fn is_active(&self, mode: FormMode, values: &FormValues) -> bool {
        match self.condition {
            Condition::Always => true,
            Condition::CreateOnly => mode == FormMode::Create,
            Condition::When(predicate) => predicate(values),
        }
    }

    /// First failing check for `value`, if any
    pub fn check(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return self.required.then(|| format!("{} is required", self.label));
        }
        if !self.choices.is_empty() && !self.choices.contains(&value) {
            return Some(format!("{} must be one of: {}", self.label, self.choices.join(", ")));
        }
        match self.format {
            Some(Format::Email) if !EMAIL_RE.is_match(value) => Some(format!("{} is not valid", self.label)),
            Some(Format::Id) if value.parse::<u64>().map_or(true, |id| id == 0) => {
                Some(format!("{} is not valid", self.label))
            }
            _ => None,
        }
    }
}

/// Current string values of a form, by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormValues {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut values = Self::new();
        for (field, value) in pairs {
            values.set(field, value);
        }
        values
    }
}

/// Rules active for `mode` given the current values
pub fn active_rules(rules: &'static [FieldRule], mode: FormMode, values: &FormValues) -> Vec<&'static FieldRule> {
    rules.iter().filter(|rule| rule.is_active(mode, values)).collect()
}

pub fn validate(rules: &'static [FieldRule], mode: FormMode, values: &FormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in active_rules(rules, mode, values) {
        if let Some(message) = rule.check(values.get(rule.name)) {
            errors.insert(rule.name, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// JSON object of the active, non-empty fields. `Id` fields are sent as numbers.
pub fn payload(rules: &'static [FieldRule], mode: FormMode, values: &FormValues) -> Value {
    let mut body = Map::new();
    for rule in active_rules(rules, mode, values) {
        let value = values.get(rule.name).trim();
        if value.is_empty() {
            continue;
        }
        let json = match (rule.format, value.parse::<u64>()) {
            (Some(Format::Id), Ok(id)) => Value::from(id),
            _ => Value::from(value),
        };
        body.insert(rule.name.to_string(), json);
    }
    Value::Object(body)
}

/// Binds a resource's entity type to its field rules
pub trait FormSchema: 'static {
    type Entity: Entity;

    const RESOURCE: Resource;
    /// Drawer title noun, e.g. "User"
    const NOUN: &'static str;

    fn rules() -> &'static [FieldRule];

    /// Form values pre-filled from an existing record
    fn populate(entity: &Self::Entity) -> FormValues;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", None)]
    #[case("first.last@restaurant.in", None)]
    #[case("no-at-sign", Some("Email is not valid"))]
    #[case("two@@example.com", Some("Email is not valid"))]
    #[case("space in@example.com", Some("Email is not valid"))]
    #[case("", Some("Email is required"))]
    fn test_email_rule(#[case] input: &str, #[case] expected: Option<&str>) {
        let rule = FieldRule::required("email", "Email").format(Format::Email);
        assert_eq!(rule.check(input).as_deref(), expected);
    }

    #[rstest]
    #[case("admin", None)]
    #[case("manager", None)]
    #[case("customer", Some("Role must be one of: admin, manager"))]
    fn test_choice_rule(#[case] input: &str, #[case] expected: Option<&str>) {
        let rule = FieldRule::required("role", "Role").one_of(&["admin", "manager"]);
        assert_eq!(rule.check(input).as_deref(), expected);
    }

    #[rstest]
    #[case("3", None)]
    #[case("0", Some("Tenant is not valid"))]
    #[case("abc", Some("Tenant is not valid"))]
    fn test_id_rule(#[case] input: &str, #[case] expected: Option<&str>) {
        let rule = FieldRule::required("tenantId", "Tenant").format(Format::Id);
        assert_eq!(rule.check(input).as_deref(), expected);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let rule = FieldRule::required("name", "Name");
        assert_eq!(rule.check("   ").as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_blank_values_are_empty() {
        let values = FormValues::from([("name", ""), ("address", "")]);
        assert!(values.is_empty());
        assert_eq!(values.get("missing"), "");
    }
}
