//! Event collection repository.

use registry_core::{CapacityStatus, Event, EventDraft, EventId, sample_events};

use crate::api::{RegistryError, Result};
use crate::store::{Collection, Storage, WriteOutcome};

/// Owns the `events` collection: lookup, insert, update, delete and the
/// first-run bootstrap.
#[derive(Clone)]
pub struct EventRepository {
    storage: Storage,
}

impl EventRepository {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All events in store order. A missing or malformed collection reads as
    /// empty; a malformed record is skipped and the rest are kept.
    pub fn list(&self) -> Vec<Event> {
        self.storage.read_records(Collection::Events).into_records()
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.list().into_iter().find(|event| event.id == id)
    }

    /// Insert a new event with a fresh id and no registrants.
    pub fn create(&self, draft: EventDraft) -> Result<Event> {
        let draft = draft.normalized()?;
        let mut events = self.list();

        let event = Event::from_draft(next_id(&events)?, draft);
        events.push(event.clone());
        self.save_all(&events);

        tracing::info!("Created event {} '{}'", event.id, event.title);
        Ok(event)
    }

    /// Replace the fields of an existing event in place.
    pub fn update(&self, id: EventId, draft: EventDraft) -> Result<Event> {
        let draft = draft.normalized()?;
        let mut events = self.list();

        let event = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        event.apply_draft(draft);
        let updated = event.clone();
        self.save_all(&events);

        tracing::info!("Updated event {} '{}'", updated.id, updated.title);
        Ok(updated)
    }

    /// Delete an event. Returns whether it existed.
    ///
    /// Registration log rows pointing at the event are left alone.
    pub fn remove(&self, id: EventId) -> bool {
        let mut events = self.list();
        let before = events.len();
        events.retain(|event| event.id != id);

        if events.len() == before {
            return false;
        }

        self.save_all(&events);
        tracing::info!("Deleted event {}", id);
        true
    }

    pub fn capacity_status(&self, event: &Event) -> CapacityStatus {
        event.capacity_status()
    }

    /// Write the sample events if the collection is absent, empty or not a
    /// JSON array.
    ///
    /// An array holding only malformed records is left alone. Returns whether
    /// seeding happened. Running it again is a no-op.
    pub fn seed_if_empty(&self) -> bool {
        if !self.storage.read_records::<Event>(Collection::Events).is_vacant() {
            return false;
        }

        let samples = sample_events();
        let outcome = self.save_all(&samples);
        if outcome.is_persisted() {
            tracing::info!("Seeded {} sample events", samples.len());
        }
        outcome.is_persisted()
    }

    pub(crate) fn save_all(&self, events: &[Event]) -> WriteOutcome {
        self.storage.write(Collection::Events, events)
    }
}

/// `max(existing) + 1`, or [`EventId::FIRST`] for an empty collection.
fn next_id(events: &[Event]) -> Result<EventId> {
    match events.iter().map(|event| event.id).max() {
        None => Ok(EventId::FIRST),
        Some(max) => max.next().ok_or(RegistryError::IdsExhausted(max)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use registry_core::{Field, Severity, ValidationError};

    use super::*;

    fn repo() -> EventRepository {
        EventRepository::new(Storage::in_memory())
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft::new(title, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
            .with_location("Hall")
            .with_description("Desc")
            .with_category("Education")
            .with_capacity(10)
    }

    #[test]
    fn create_assigns_one_on_empty_collection() {
        let repo = repo();
        let event = repo.create(draft("First")).unwrap();

        assert_eq!(event.id, EventId(1));
        assert!(event.registered.is_empty());
        assert_eq!(repo.get(EventId(1)), Some(event));
    }

    #[test]
    fn created_record_matches_normalized_draft() {
        let repo = repo();
        let input = draft("  Book Swap ")
            .with_time("18:30")
            .with_image(" ")
            .with_capacity(0);
        let expected = input.clone().normalized().unwrap();

        let id = repo.create(input).unwrap().id;
        let stored = repo.get(id).unwrap();

        assert_eq!(stored.title, "Book Swap");
        assert_eq!(stored.title, expected.title);
        assert_eq!(stored.date, expected.date);
        assert_eq!(stored.time, expected.time);
        assert_eq!(stored.location, expected.location);
        assert_eq!(stored.description, expected.description);
        assert_eq!(stored.image, None);
        assert_eq!(stored.image, expected.image);
        assert_eq!(stored.category, expected.category);
        assert_eq!(stored.capacity, None);
        assert_eq!(stored.capacity, expected.capacity);
        assert!(stored.registered.is_empty());
    }

    #[test]
    fn create_fails_when_ids_run_out() {
        let repo = repo();
        let mut last = Event::from_draft(EventId(u64::MAX), draft("Last").normalized().unwrap());
        last.registered.push("a@b.co".into());
        repo.save_all(&[last.clone()]);

        let err = repo.create(draft("Overflow")).unwrap_err();

        assert!(matches!(err, RegistryError::IdsExhausted(EventId(u64::MAX))));
        assert_eq!(repo.list(), vec![last]);
    }

    #[test]
    fn bad_record_is_skipped_and_blocks_seeding() {
        let repo = repo();
        repo.storage
            .backend()
            .set(
                Collection::Events.key(),
                r#"[{"id":7,"title":"Picnic","date":"2025-05-01","registered":["a@b.co"]},
                    {"id":8,"title":"Draft","date":""}]"#,
            )
            .unwrap();

        assert!(!repo.seed_if_empty());

        let events = repo.list();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, EventId(7));
        assert_eq!(events[0].registered, vec!["a@b.co".to_string()]);
        assert_eq!(repo.create(draft("Next")).unwrap().id, EventId(8));
    }

    #[test]
    fn only_bad_records_still_block_seeding() {
        let repo = repo();
        repo.storage
            .backend()
            .set(Collection::Events.key(), r#"[{"id":1}]"#)
            .unwrap();

        assert!(!repo.seed_if_empty());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn create_uses_max_plus_one_after_gaps() {
        let repo = repo();
        repo.seed_if_empty();
        repo.remove(EventId(2));

        let event = repo.create(draft("Next")).unwrap();
        assert_eq!(event.id, EventId(4));
    }

    #[test]
    fn create_ignores_draft_registrants() {
        let repo = repo();
        let event = repo
            .create(draft("Fresh").with_registered(vec!["a@b.co".into()]))
            .unwrap();
        assert!(event.registered.is_empty());
    }

    #[test]
    fn create_rejects_blank_title_without_writing() {
        let repo = repo();
        let err = repo.create(draft("  ")).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::MissingField(Field::Title))
        ));
        assert!(!repo.storage.contains(Collection::Events));
    }

    #[test]
    fn update_replaces_fields_and_keeps_registrants() {
        let repo = repo();
        repo.seed_if_empty();
        let mut events = repo.list();
        events[0].registered.push("ann@example.com".into());
        repo.save_all(&events);

        let updated = repo.update(EventId(1), draft("Renamed")).unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.location, "Hall");
        assert_eq!(updated.registered, vec!["ann@example.com".to_string()]);
        assert_eq!(repo.get(EventId(1)), Some(updated));
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn update_with_registrants_replaces_list() {
        let repo = repo();
        repo.seed_if_empty();

        let updated = repo
            .update(EventId(3), draft("Workshop").with_registered(vec!["X@Y.Z".into()]))
            .unwrap();
        assert_eq!(updated.registered, vec!["x@y.z".to_string()]);
    }

    #[test]
    fn update_missing_event_is_not_found() {
        let repo = repo();
        let err = repo.update(EventId(9), draft("Nope")).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(EventId(9))));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn remove_reports_existence() {
        let repo = repo();
        repo.seed_if_empty();

        assert!(repo.remove(EventId(2)));
        assert!(!repo.remove(EventId(2)));
        let ids: Vec<EventId> = repo.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EventId(1), EventId(3)]);
    }

    #[test]
    fn seeding_is_idempotent_and_never_overwrites() {
        let repo = repo();
        assert!(repo.seed_if_empty());
        let once = repo.list();

        assert!(!repo.seed_if_empty());
        assert_eq!(repo.list(), once);

        repo.remove(EventId(1));
        repo.remove(EventId(2));
        assert!(!repo.seed_if_empty());
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn seeding_fills_an_emptied_collection() {
        let repo = repo();
        repo.save_all(&[]);
        assert!(repo.seed_if_empty());
        assert_eq!(repo.list().len(), 3);
    }

    #[test]
    fn malformed_collection_lists_empty() {
        let repo = repo();
        repo.storage
            .backend()
            .set(Collection::Events.key(), "<<garbage>>")
            .unwrap();

        assert!(repo.list().is_empty());
        assert_eq!(repo.get(EventId(1)), None);
    }

    #[test]
    fn capacity_status_tracks_registrants() {
        let repo = repo();
        let mut event = repo.create(draft("Small").with_capacity(1)).unwrap();
        assert_eq!(repo.capacity_status(&event).severity, Severity::Ample);

        event.registered.push("a@b.co".into());
        assert_eq!(repo.capacity_status(&event).severity, Severity::SoldOut);
    }
}
