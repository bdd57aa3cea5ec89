//! Event records and the editable draft submitted by admin forms.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::capacity::CapacityStatus;
use crate::signup::normalize_email;
use crate::validation::{Field, ValidationError, optional, required};

/// Category shown for events stored without one.
pub const DEFAULT_CATEGORY: &str = "Event";

/// Image shown for events stored without one.
pub const DEFAULT_IMAGE: &str = "assets/default-event.jpg";

/// Time label on the event detail view when no time is set.
pub const TIME_TBD: &str = "Time TBD";

/// Stable identifier of an event.
///
/// Assigned once as `max(existing) + 1` and never reused while the event
/// exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// Identifier handed out when the collection is empty.
    pub const FIRST: Self = Self(1);

    /// The following id, or `None` once the id space is used up.
    #[inline]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A community event as persisted in the `events` collection.
///
/// `registered` is the authoritative registration count for the event; it is
/// appended to by registration and replaced only by an explicit admin edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Zero or absent means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub registered: Vec<String>,
}

impl Event {
    /// Builds a new event from a normalized draft. `registered` always starts
    /// empty, whatever the draft carries.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            image: draft.image,
            category: draft.category,
            capacity: draft.capacity,
            registered: Vec::new(),
        }
    }

    /// Replaces every field with the draft's. The registrant list is only
    /// replaced when the draft supplies one.
    pub fn apply_draft(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.time = draft.time;
        self.location = draft.location;
        self.description = draft.description;
        self.image = draft.image;
        self.category = draft.category;
        self.capacity = draft.capacity;
        if let Some(registered) = draft.registered {
            self.registered = registered;
        }
    }

    /// Bounded capacity, if any.
    pub fn capacity_limit(&self) -> Option<u32> {
        self.capacity.filter(|&c| c > 0)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn capacity_status(&self) -> CapacityStatus {
        CapacityStatus::of(self)
    }

    pub fn category_label(&self) -> &str {
        non_blank(self.category.as_deref()).unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn image_or_default(&self) -> &str {
        non_blank(self.image.as_deref()).unwrap_or(DEFAULT_IMAGE)
    }

    pub fn time_label(&self) -> &str {
        self.time_or(TIME_TBD)
    }

    /// Stored time, or `fallback` when none is set.
    pub fn time_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(self.time.as_deref()).unwrap_or(fallback)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Field values submitted by the admin editor.
///
/// `registered` is `None` unless the admin explicitly edits the registrant
/// list; an update with `None` keeps the stored list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub capacity: Option<u32>,
    pub registered: Option<Vec<String>>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            location: String::new(),
            description: String::new(),
            image: None,
            category: None,
            capacity: None,
            registered: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_registered(mut self, registered: Vec<String>) -> Self {
        self.registered = Some(registered);
        self
    }

    /// Trims text fields, drops blank optional fields, treats a zero capacity
    /// as unlimited and normalizes any supplied registrant emails.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let title = required(&self.title, Field::Title)?;
        let registered = self.registered.map(|emails| {
            emails
                .iter()
                .map(|email| normalize_email(email))
                .filter(|email| !email.is_empty())
                .collect()
        });

        Ok(Self {
            title,
            date: self.date,
            time: optional(self.time.as_deref()),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            image: optional(self.image.as_deref()),
            category: optional(self.category.as_deref()),
            capacity: self.capacity.filter(|&c| c > 0),
            registered,
        })
    }
}

/// Editor pre-fill. The registrant list is left out so that saving the form
/// does not clobber registrations made while it was open.
impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            image: event.image.clone(),
            category: event.category.clone(),
            capacity: event.capacity,
            registered: None,
        }
    }
}
