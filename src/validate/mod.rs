//! Schema-style form validation.
//!
//! DESIGN
//! ======
//! Each form has one synchronous validator that checks every field in a
//! single pass and yields either the typed value or a map from field name
//! to the first violated message for that field. The per-field rules are
//! tiny pure helpers so they can be unit-tested on their own, away from
//! any UI binding.


pub mod auth;
pub mod customer;

use std::collections::BTreeMap;

/// Field name → first violated message for that field.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Result of validating a full form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Record a violation for `field`, keeping the first one only.
pub(crate) fn check(
    errors: &mut FieldErrors,
    field: &'static str,
    violation: Option<&'static str>,
) {
    if let Some(message) = violation {
        errors.entry(field).or_insert(message);
    }
}

/// `message` if the trimmed value is empty.
pub(crate) fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

/// `message` if the value is longer than `max` characters.
pub(crate) fn max_len(value: &str, max: usize, message: &'static str) -> Option<&'static str> {
    (value.chars().count() > max).then_some(message)
}

/// `message` if a non-empty value is longer than `max` characters.
/// Empty is fine: the field is optional.
pub(crate) fn optional_max_len(
    value: &str,
    max: usize,
    message: &'static str,
) -> Option<&'static str> {
    if value.is_empty() {
        None
    } else {
        max_len(value, max, message)
    }
}
