//! Edit/Create Session
//!
//! Tracks whether the drawer is creating a record or editing one, holds the
//! form values, and decides which request a submit turns into.

use std::marker::PhantomData;

use crate::api;
use crate::error::{ApiError, FieldErrors};
use crate::forms::{self, FieldRule, FormMode, FormSchema, FormValues};
use crate::http::ApiRequest;
use crate::models::Entity;
use crate::query::QueryCache;

/// Request produced by a valid submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    Create(ApiRequest),
    Update { id: u64, request: ApiRequest },
}

impl SubmitPlan {
    pub fn request(&self) -> &ApiRequest {
        match self {
            SubmitPlan::Create(request) => request,
            SubmitPlan::Update { request, .. } => request,
        }
    }
}

/// An outstanding save, tied to the form it was submitted from
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    generation: u64,
    plan: SubmitPlan,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn plan(&self) -> &SubmitPlan {
        &self.plan
    }

    pub fn request(&self) -> &ApiRequest {
        self.plan.request()
    }
}

/// Why a submit did not produce a request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    Invalid(FieldErrors),
    /// A previous submit has not resolved yet
    InFlight,
}

pub struct EditSession<S: FormSchema> {
    target: Option<S::Entity>,
    open: bool,
    values: FormValues,
    errors: FieldErrors,
    submit_error: Option<String>,
    /// Bumped every time the form is reset; identifies the form a ticket belongs to
    generation: u64,
    /// Survives cancel, so a reopened form cannot start a second save
    in_flight: bool,
    _schema: PhantomData<fn() -> S>,
}

impl<S: FormSchema> Default for EditSession<S> {
    fn default() -> Self {
        Self {
            target: None,
            open: false,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            submit_error: None,
            generation: 0,
            in_flight: false,
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> EditSession<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        if self.target.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn target(&self) -> Option<&S::Entity> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).to_string()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn title(&self) -> String {
        match self.mode() {
            FormMode::Create => format!("Create {}", S::NOUN),
            FormMode::Edit => format!("Edit {}", S::NOUN),
        }
    }

    /// Fields currently part of the form
    pub fn active_rules(&self) -> Vec<&'static FieldRule> {
        forms::active_rules(S::rules(), self.mode(), &self.values)
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.active_rules().iter().any(|rule| rule.name == field)
    }

    /// Open an empty form in create mode
    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Open the form in edit mode, pre-filled from `entity`
    pub fn select_for_edit(&mut self, entity: S::Entity) {
        self.reset();
        self.values = S::populate(&entity);
        self.target = Some(entity);
        self.open = true;
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
        // Errors on fields that just dropped out of the form no longer apply
        let active: Vec<&str> = self.active_rules().iter().map(|rule| rule.name).collect();
        self.errors.retain(|name| active.contains(&name));
    }

    /// Validate and produce the create or update request
    pub fn submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.in_flight {
            return Err(SubmitRejected::InFlight);
        }
        let mode = self.mode();
        if let Err(errors) = forms::validate(S::rules(), mode, &self.values) {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        self.errors = FieldErrors::new();
        self.submit_error = None;
        self.in_flight = true;

        let body = forms::payload(S::rules(), mode, &self.values);
        let plan = match &self.target {
            None => SubmitPlan::Create(api::create(S::RESOURCE, body)),
            Some(target) => {
                let id = target.id();
                SubmitPlan::Update {
                    id,
                    request: api::update(S::RESOURCE, id, body),
                }
            }
        };
        Ok(SubmitTicket {
            generation: self.generation,
            plan,
        })
    }

    fn is_current(&self, ticket: &SubmitTicket) -> bool {
        ticket.generation == self.generation
    }

    /// The mutation succeeded: drop cached lists and, if the form that sent it
    /// is still showing, close it. Returns whether the form was closed.
    pub fn on_success(&mut self, ticket: &SubmitTicket, cache: &mut QueryCache) -> bool {
        log::info!("{} saved", S::NOUN);
        cache.invalidate(S::RESOURCE);
        self.in_flight = false;
        if !self.is_current(ticket) {
            log::debug!("{} save #{} finished after its form was closed", S::NOUN, ticket.generation);
            return false;
        }
        self.reset();
        true
    }

    /// The mutation failed: keep everything the user typed. Returns false when
    /// the form that sent it is gone and the error was dropped.
    pub fn on_failure(&mut self, ticket: &SubmitTicket, err: &ApiError) -> bool {
        log::warn!("{} save failed: {}", S::NOUN, err);
        self.in_flight = false;
        if !self.is_current(ticket) {
            return false;
        }
        self.submit_error = Some(err.to_string());
        if let Some(fields) = err.field_errors() {
            let active: Vec<&str> = self.active_rules().iter().map(|rule| rule.name).collect();
            for (field, message) in fields.iter() {
                if active.contains(&field) {
                    self.errors.insert(field, message);
                }
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            in_flight: self.in_flight,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;
    use crate::forms::{TenantForm, UserForm};
    use crate::http::HttpMethod;
    use crate::models::{Tenant, User};
    use crate::query::{ListQueryState, QueryKey};
    use serde_json::json;

    fn tenant(id: u64) -> Tenant {
        Tenant {
            id,
            name: "Pizza Hut".to_string(),
            address: "MG Road".to_string(),
            created_at: None,
        }
    }

    fn manager() -> User {
        User {
            id: 11,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            role: "manager".to_string(),
            tenant: Some(tenant(3)),
            created_at: None,
        }
    }

    fn seeded_cache(resource: Resource) -> (QueryCache, QueryKey) {
        let mut cache = QueryCache::new();
        let key = QueryKey::new(resource, &ListQueryState::new(6));
        cache.insert(key.clone(), json!({ "data": [], "total": 0 }));
        (cache, key)
    }

    #[test]
    fn test_create_tenant_flow() {
        let (mut cache, key) = seeded_cache(Resource::Tenants);
        let mut session = EditSession::<TenantForm>::new();
        session.open_create();
        assert_eq!(session.title(), "Create Restaurant");
        session.set_field("name", "Pizza Hut");
        session.set_field("address", "MG Road");

        let ticket = session.submit().unwrap();
        let SubmitPlan::Create(request) = ticket.plan() else {
            panic!("expected create, got {:?}", ticket);
        };
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/tenants/");
        assert_eq!(request.body, Some(json!({ "name": "Pizza Hut", "address": "MG Road" })));
        assert!(session.is_submitting());

        assert!(session.on_success(&ticket, &mut cache));
        assert!(!session.is_open());
        assert!(!session.is_submitting());
        assert!(session.values().is_empty());
        assert!(session.target().is_none());
        assert!(cache.fresh(&key).is_none());
    }

    #[test]
    fn test_invalid_submit_never_plans_request() {
        let mut session = EditSession::<TenantForm>::new();
        session.open_create();
        session.set_field("name", "Pizza Hut");
        match session.submit() {
            Err(SubmitRejected::Invalid(errors)) => assert_eq!(errors.get("address"), Some("Address is required")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!session.is_submitting());
        assert!(session.is_open());
        assert_eq!(session.error("address").as_deref(), Some("Address is required"));
    }

    #[test]
    fn test_edit_prefills_and_updates_by_id() {
        let mut session = EditSession::<UserForm>::new();
        session.select_for_edit(manager());
        assert!(session.is_open());
        assert_eq!(session.mode(), FormMode::Edit);
        assert_eq!(session.title(), "Edit User");
        assert_eq!(session.value("tenantId"), "3");
        assert_eq!(session.value("email"), "asha@example.com");
        assert!(!session.is_active("password"));

        session.set_field("lastName", "Iyer");
        let ticket = session.submit().unwrap();
        match ticket.plan().clone() {
            SubmitPlan::Update { id, request } => {
                assert_eq!(id, 11);
                assert_eq!(request.method, HttpMethod::Patch);
                assert_eq!(request.path, "/users/11");
                let body = request.body.unwrap();
                assert_eq!(body["lastName"], "Iyer");
                assert_eq!(body["tenantId"], 3);
                assert!(body.get("password").is_none());
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_keeps_form_and_maps_server_fields() {
        let (mut cache, key) = seeded_cache(Resource::Users);
        let mut session = EditSession::<UserForm>::new();
        session.select_for_edit(manager());
        let ticket = session.submit().unwrap();

        let err = ApiError::from_response(
            400,
            r#"{"errors":[{"msg":"Email already taken","path":"email"},{"msg":"bad","path":"password"}]}"#,
        );
        assert!(session.on_failure(&ticket, &err));

        assert!(session.is_open());
        assert!(!session.is_submitting());
        assert_eq!(session.target().map(|u| u.id), Some(11));
        assert_eq!(session.value("firstName"), "Asha");
        assert_eq!(session.submit_error(), Some("Email already taken"));
        assert_eq!(session.error("email").as_deref(), Some("Email already taken"));
        // password is not part of the edit form
        assert!(session.error("password").is_none());
        assert!(cache.fresh(&key).is_some());

        // Retry is allowed after the failure
        let retry = session.submit().unwrap();
        assert!(session.on_success(&retry, &mut cache));
        assert!(cache.fresh(&key).is_none());
    }

    #[test]
    fn test_late_failure_does_not_touch_reopened_form() {
        let mut session = EditSession::<TenantForm>::new();
        session.select_for_edit(tenant(1));
        let first = session.submit().unwrap();
        session.cancel();

        session.select_for_edit(tenant(2));
        assert!(session.is_submitting());
        assert_eq!(session.submit(), Err(SubmitRejected::InFlight));

        let err = ApiError::from_response(400, r#"{"errors":[{"msg":"A failed","path":"name"}]}"#);
        assert!(!session.on_failure(&first, &err));
        assert_eq!(session.target().map(|t| t.id), Some(2));
        assert!(session.submit_error().is_none());
        assert!(session.error("name").is_none());
        assert!(!session.is_submitting());

        let second = session.submit().unwrap();
        assert!(matches!(second.plan(), SubmitPlan::Update { id: 2, .. }));
    }

    #[test]
    fn test_late_success_invalidates_but_keeps_reopened_form() {
        let (mut cache, key) = seeded_cache(Resource::Tenants);
        let mut session = EditSession::<TenantForm>::new();
        session.select_for_edit(tenant(1));
        let first = session.submit().unwrap();
        session.cancel();

        session.open_create();
        session.set_field("name", "Dominos");
        assert!(!session.on_success(&first, &mut cache));

        assert!(cache.fresh(&key).is_none());
        assert!(session.is_open());
        assert_eq!(session.value("name"), "Dominos");
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut session = EditSession::<TenantForm>::new();
        session.select_for_edit(tenant(5));
        assert!(session.submit().is_ok());
        assert_eq!(session.submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_role_change_drops_tenant_error() {
        let mut session = EditSession::<UserForm>::new();
        session.open_create();
        session.set_field("role", "manager");
        let _ = session.submit();
        assert!(session.error("tenantId").is_some());

        session.set_field("role", "admin");
        assert!(session.error("tenantId").is_none());
        assert!(!session.is_active("tenantId"));
        assert!(session.error("firstName").is_some());
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut session = EditSession::<UserForm>::new();
        session.select_for_edit(manager());
        session.cancel();
        assert!(!session.is_open());
        assert_eq!(session.mode(), FormMode::Create);
        assert!(session.values().is_empty());
    }
}
