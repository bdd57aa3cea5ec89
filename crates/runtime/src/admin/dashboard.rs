//! Admin dashboard over every collection.
//!
//! Each mutation finishes with one [`AdminDashboard::snapshot`] pass, so totals
//! and rows returned to the caller always come from the same reads.

use chrono::NaiveDate;
use registry_core::{Event, EventDraft, EventId, Registration, VolunteerSignup};

use crate::api::Result;
use crate::registry::Registry;
use crate::repository::{EventRepository, NewsletterList, RegistrationLog, VolunteerLog};

const ALL_DAY: &str = "All day";
const UNLIMITED: &str = "Unlimited";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub events: usize,
    pub registrations: usize,
    pub subscribers: usize,
    pub volunteers: usize,
}

/// One line of the admin events table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminEventRow {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time_label: String,
    pub location: String,
    pub capacity_label: String,
    pub registrant_count: usize,
}

impl From<&Event> for AdminEventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            date: event.date,
            time_label: event.time_or(ALL_DAY).to_string(),
            location: event.location.clone(),
            capacity_label: event
                .capacity_limit()
                .map_or_else(|| UNLIMITED.to_string(), |cap| cap.to_string()),
            registrant_count: event.registered_count(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub totals: Totals,
    pub rows: Vec<AdminEventRow>,
}

/// Confirmation token for a delete. Dropping it cancels the delete.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    id: EventId,
    title: String,
}

impl PendingDelete {
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

pub struct AdminDashboard {
    events: EventRepository,
    registrations: RegistrationLog,
    newsletter: NewsletterList,
    volunteers: VolunteerLog,
}

impl AdminDashboard {
    pub(crate) fn new(registry: &Registry) -> Self {
        Self {
            events: registry.events(),
            registrations: registry.registrations(),
            newsletter: registry.newsletter(),
            volunteers: registry.volunteers(),
        }
    }

    /// Re-read every collection and derive totals and rows together.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let events = self.events.list();
        let totals = Totals {
            events: events.len(),
            registrations: self.registrations.len(),
            subscribers: self.newsletter.len(),
            volunteers: self.volunteers.len(),
        };

        DashboardSnapshot {
            totals,
            rows: events.iter().map(AdminEventRow::from).collect(),
        }
    }

    pub fn create_event(&self, draft: EventDraft) -> Result<(Event, DashboardSnapshot)> {
        let event = self.events.create(draft)?;
        Ok((event, self.snapshot()))
    }

    /// Draft pre-filled from the stored event, for editing.
    pub fn open_editor(&self, id: EventId) -> Option<EventDraft> {
        self.events.get(id).as_ref().map(EventDraft::from)
    }

    pub fn update_event(&self, id: EventId, draft: EventDraft) -> Result<(Event, DashboardSnapshot)> {
        let event = self.events.update(id, draft)?;
        Ok((event, self.snapshot()))
    }

    /// Start a delete. Nothing is removed until the token is confirmed.
    pub fn request_delete(&self, id: EventId) -> Option<PendingDelete> {
        self.events.get(id).map(|event| PendingDelete {
            id: event.id,
            title: event.title,
        })
    }

    pub fn confirm_delete(&self, pending: PendingDelete) -> DashboardSnapshot {
        if !self.events.remove(pending.id) {
            tracing::debug!("Event {} was already removed", pending.id);
        }
        self.snapshot()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.list()
    }

    pub fn volunteers(&self) -> Vec<VolunteerSignup> {
        self.volunteers.list()
    }

    pub fn subscribers(&self) -> Vec<String> {
        self.newsletter.list()
    }
}
