//! Tenant Form

use crate::api::Resource;
use crate::models::Tenant;

use super::{FieldRule, FormSchema, FormValues};

static RULES: [FieldRule; 2] = [
    FieldRule::required("name", "Restaurant name"),
    FieldRule::required("address", "Address"),
];

pub struct TenantForm;

impl FormSchema for TenantForm {
    type Entity = Tenant;

    const RESOURCE: Resource = Resource::Tenants;
    const NOUN: &'static str = "Restaurant";

    fn rules() -> &'static [FieldRule] {
        &RULES
    }

    fn populate(tenant: &Tenant) -> FormValues {
        FormValues::from([("name", tenant.name.as_str()), ("address", tenant.address.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{validate, FormMode};

    #[test]
    fn test_both_fields_required() {
        let errors = validate(TenantForm::rules(), FormMode::Create, &FormValues::new()).unwrap_err();
        assert_eq!(errors.get("name"), Some("Restaurant name is required"));
        assert_eq!(errors.get("address"), Some("Address is required"));
    }
}
