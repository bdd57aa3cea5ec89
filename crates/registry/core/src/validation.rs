//! Input validation errors shared by every form-backed operation.

use thiserror::Error;

/// Form fields that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Title,
}

/// Rejected user input. Raised before any write happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Trims `value` and fails with [`ValidationError::MissingField`] if nothing is left.
pub(crate) fn required(value: &str, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims `value`, mapping blank input to `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
