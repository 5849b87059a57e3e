//! Validation for the login and registration forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{FieldErrors, Validated, check, required};
use crate::net::types::{LoginRequest, RegisterRequest};

/// Login only insists that both fields are present; the backend decides
/// whether the pair is any good.
pub fn validate_login(form: LoginRequest) -> Validated<LoginRequest> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "username", required(&form.username, "Username is required"));
    check(&mut errors, "password", required(&form.password, "Password is required"));
    if errors.is_empty() {
        Validated::Valid(form)
    } else {
        Validated::Invalid(errors)
    }
}

pub fn validate_register(form: RegisterRequest) -> Validated<RegisterRequest> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "username", required(&form.username, "Username is required"));
    check(&mut errors, "email", email_rule(&form.email));
    check(&mut errors, "password", password_rule(&form.password));
    if errors.is_empty() {
        Validated::Valid(form)
    } else {
        Validated::Invalid(errors)
    }
}

fn email_rule(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Email is required")
    } else if !address_shaped(value) {
        Some("Invalid email format")
    } else {
        None
    }
}

/// `local@domain.tld` with no whitespace and non-empty parts, the usual
/// permissive front-end check.
fn address_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// 9–20 characters with at least one uppercase letter, one lowercase
/// letter, and one digit. Violations are reported in schema order, first
/// one wins.
fn password_rule(value: &str) -> Option<&'static str> {
    let len = value.chars().count();
    if len == 0 {
        Some("Password is required")
    } else if len < 9 {
        Some("Password must be greater than 8 characters")
    } else if len > 20 {
        Some("Password must be less than or equal to 20 characters")
    } else if !value.chars().any(char::is_uppercase) {
        Some("Password must contain at least one uppercase letter")
    } else if !value.chars().any(char::is_lowercase) {
        Some("Password must contain at least one lowercase letter")
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else {
        None
    }
}
