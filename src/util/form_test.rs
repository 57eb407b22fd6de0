use super::*;

#[test]
fn required_rejects_blank_and_whitespace() {
    assert!(required("").is_err());
    assert!(required("   ").is_err());
    assert!(required("x").is_ok());
}

#[test]
fn email_accepts_plausible_addresses() {
    assert!(email("alice@example.com").is_ok());
    assert!(email("  bob@school.edu.vn  ").is_ok());
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(email("").is_err());
    assert!(email("no-at-sign").is_err());
    assert!(email("@example.com").is_err());
    assert!(email("a@nodot").is_err());
    assert!(email("a@.com").is_err());
}

#[test]
fn password_enforces_minimum_length() {
    assert!(password("12345").is_err());
    assert!(password("123456").is_ok());
}

#[test]
fn confirm_requires_exact_match() {
    assert!(confirm("secret1", "secret1").is_ok());
    assert!(confirm("secret1", "secret2").is_err());
}
