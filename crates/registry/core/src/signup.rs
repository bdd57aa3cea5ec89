//! Registration and volunteer records plus email normalization.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::event::EventId;
use crate::validation::{Field, ValidationError, optional, required};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Trimmed, lower-cased form used for every stored email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose shape check: one `@`, no whitespace, a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// One row of the global registration log.
///
/// `event_id` is not enforced: rows outlive the event they point at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Registration {
    /// Normalizes raw form input. Name and email are required.
    pub fn new(
        event_id: EventId,
        name: &str,
        email: &str,
        phone: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = required(name, Field::Name)?;
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }

        Ok(Self {
            event_id,
            name,
            email,
            phone: optional(Some(phone)),
            timestamp,
        })
    }
}

/// Raw volunteer form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub availability: String,
}

impl VolunteerForm {
    pub fn into_signup(self, timestamp: DateTime<Utc>) -> Result<VolunteerSignup, ValidationError> {
        let name = required(&self.name, Field::Name)?;
        let email = normalize_email(&self.email);
        if email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }

        Ok(VolunteerSignup {
            name,
            email,
            phone: self.phone.trim().to_string(),
            skills: self.skills.trim().to_string(),
            availability: self.availability.trim().to_string(),
            timestamp,
        })
    }
}

/// One row of the append-only volunteer log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerSignup {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub availability: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
