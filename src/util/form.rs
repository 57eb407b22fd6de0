//! Client-side field validation.
//!
//! Validation failures render inline next to the offending field and
//! suppress the network call entirely.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Minimum password length accepted by the backend.
pub const PASSWORD_MIN_LEN: usize = 6;

pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required".to_owned())
    } else {
        Ok(())
    }
}

/// Shallow shape check; the backend remains the authority.
pub fn email(value: &str) -> Result<(), String> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'));
    if valid {
        Ok(())
    } else {
        Err("Invalid email address".to_owned())
    }
}

pub fn password(value: &str) -> Result<(), String> {
    if value.chars().count() < PASSWORD_MIN_LEN {
        Err(format!("Password must be at least {PASSWORD_MIN_LEN} characters"))
    } else {
        Ok(())
    }
}

/// Confirmation fields must match their primary exactly.
pub fn confirm(value: &str, other: &str) -> Result<(), String> {
    if value == other {
        Ok(())
    } else {
        Err("Passwords do not match".to_owned())
    }
}
