//! Field limits and validation for site content (projects, clients,
//! contacts, subscribers).
//!
//! Handlers call these helpers at the request boundary so that only
//! well-formed values ever reach the repository layer. All helpers trim
//! surrounding whitespace and return the trimmed value.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Length limits (characters)
// ---------------------------------------------------------------------------

/// Project and client display names.
pub const MAX_NAME_LENGTH: usize = 100;
/// Client designation (job title, company role).
pub const MAX_DESIGNATION_LENGTH: usize = 100;
/// Contact full name.
pub const MAX_FULL_NAME_LENGTH: usize = 100;
/// Contact and subscriber email addresses.
pub const MAX_EMAIL_LENGTH: usize = 100;
/// Contact mobile number.
pub const MAX_MOBILE_LENGTH: usize = 20;
/// Contact city.
pub const MAX_CITY_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate a required text field.
///
/// Missing and whitespace-only values are rejected. When `max_len` is set,
/// the trimmed value must not exceed it.
pub fn require(field: &str, value: Option<&str>, max_len: Option<usize>) -> Result<String, CoreError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_length(field, value, max_len)?;
    Ok(value.to_string())
}

/// Validate a field on a partial update.
///
/// An absent field yields `None` (keep the stored value). A field that is
/// present must satisfy the same rules as [`require`].
pub fn optional(
    field: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(v) => require(field, Some(v), max_len).map(Some),
    }
}

/// Validate an email address for newsletter signup.
///
/// The address must be non-empty, within [`MAX_EMAIL_LENGTH`], and have a
/// valid address shape.
pub fn validate_email(value: &str) -> Result<String, CoreError> {
    let email = require("email", Some(value), Some(MAX_EMAIL_LENGTH))?;
    if !email.as_str().validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(email)
}

fn check_length(field: &str, value: &str, max_len: Option<usize>) -> Result<(), CoreError> {
    if let Some(max) = max_len {
        let len = value.chars().count();
        if len > max {
            return Err(CoreError::Validation(format!(
                "{field} must be at most {max} characters (got {len})"
            )));
        }
    }
    Ok(())
}
