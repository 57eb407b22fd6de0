use super::*;
use crate::util::form;

fn specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("full_name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Email", FieldKind::Email).with_validator(form::email),
        FieldSpec::new("notes", "Notes", FieldKind::TextArea),
    ]
}

fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect()
}

#[test]
fn validate_passes_a_complete_form() {
    let errors = validate(&specs(), &values(&[("full_name", "Alice"), ("email", "a@x.com")]));
    assert!(errors.is_empty());
}

#[test]
fn validate_flags_missing_required_field() {
    let errors = validate(&specs(), &values(&[("email", "a@x.com")]));
    assert!(errors.contains_key("full_name"));
    assert!(!errors.contains_key("email"));
}

#[test]
fn validate_runs_validator_on_non_empty_values_only() {
    // Optional email left blank: fine.
    assert!(validate(&specs(), &values(&[("full_name", "Alice")])).is_empty());
    // Optional email filled with garbage: flagged.
    let errors = validate(&specs(), &values(&[("full_name", "Alice"), ("email", "nope")]));
    assert!(errors.contains_key("email"));
}

#[test]
fn validate_required_beats_validator() {
    let spec = [FieldSpec::new("email", "Email", FieldKind::Email)
        .required()
        .with_validator(form::email)];
    let errors = validate(&spec, &values(&[("email", "   ")]));
    assert_eq!(errors.get("email").unwrap(), "This field is required");
}
