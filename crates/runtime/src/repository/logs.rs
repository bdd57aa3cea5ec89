//! Append-only signup collections: registrations, volunteers, newsletter.

use registry_core::{EventId, Registration, VolunteerSignup};

use crate::store::{Collection, Storage, WriteOutcome};

/// Global registration log. Rows are never edited or removed, including
/// when the event they reference is deleted.
#[derive(Clone)]
pub struct RegistrationLog {
    storage: Storage,
}

impl RegistrationLog {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Every row in append order. Rows that fail to decode are skipped.
    pub fn list(&self) -> Vec<Registration> {
        self.storage.read_records(Collection::Registrations).into_records()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Rows referencing `event_id`, whether or not the event still exists.
    pub fn for_event(&self, event_id: EventId) -> Vec<Registration> {
        self.list()
            .into_iter()
            .filter(|registration| registration.event_id == event_id)
            .collect()
    }

    pub fn append(&self, registration: &Registration) -> WriteOutcome {
        let mut registrations = self.list();
        registrations.push(registration.clone());
        self.save_all(&registrations)
    }

    pub(crate) fn save_all(&self, registrations: &[Registration]) -> WriteOutcome {
        self.storage.write(Collection::Registrations, registrations)
    }
}

/// Volunteer signups, append-only with no dedup.
#[derive(Clone)]
pub struct VolunteerLog {
    storage: Storage,
}

impl VolunteerLog {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<VolunteerSignup> {
        self.storage.read_records(Collection::Volunteers).into_records()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn append(&self, signup: &VolunteerSignup) -> WriteOutcome {
        let mut volunteers = self.list();
        volunteers.push(signup.clone());
        self.storage.write(Collection::Volunteers, &volunteers)
    }
}

/// Newsletter subscribers: a set of normalized emails kept in first-seen
/// order.
#[derive(Clone)]
pub struct NewsletterList {
    storage: Storage,
}

impl NewsletterList {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<String> {
        self.storage.read_or_default(Collection::Newsletter)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.list().iter().any(|subscriber| subscriber == email)
    }

    /// Add an already-normalized email. Returns `None` when it was already
    /// present (nothing written).
    pub fn insert(&self, email: &str) -> Option<WriteOutcome> {
        let mut subscribers = self.list();
        if subscribers.iter().any(|subscriber| subscriber == email) {
            return None;
        }
        subscribers.push(email.to_string());
        Some(self.storage.write(Collection::Newsletter, &subscribers))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn registration(event: u64, email: &str) -> Registration {
        Registration::new(
            EventId(event),
            "Ann",
            email,
            "",
            Utc.timestamp_millis_opt(1_000).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn registration_log_appends_in_order() {
        let log = RegistrationLog::new(Storage::in_memory());
        assert!(log.is_empty());

        log.append(&registration(1, "a@b.co"));
        log.append(&registration(2, "c@d.co"));
        log.append(&registration(1, "a@b.co"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.for_event(EventId(1)).len(), 2);
        assert_eq!(log.list()[1].email, "c@d.co");
    }

    #[test]
    fn newsletter_insert_dedups() {
        let list = NewsletterList::new(Storage::in_memory());

        assert_eq!(list.insert("a@b.co"), Some(WriteOutcome::Persisted));
        assert_eq!(list.insert("a@b.co"), None);
        assert_eq!(list.insert("c@d.co"), Some(WriteOutcome::Persisted));

        assert_eq!(list.list(), vec!["a@b.co".to_string(), "c@d.co".to_string()]);
        assert!(list.contains("c@d.co"));
    }

    #[test]
    fn volunteer_log_keeps_duplicates() {
        let log = VolunteerLog::new(Storage::in_memory());
        let signup = VolunteerSignup {
            name: "Bo".into(),
            email: "bo@x.org".into(),
            phone: String::new(),
            skills: String::new(),
            availability: "weekends".into(),
            timestamp: Utc.timestamp_millis_opt(0).unwrap(),
        };

        log.append(&signup);
        log.append(&signup);
        assert_eq!(log.len(), 2);
    }
}
