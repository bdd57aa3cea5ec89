//! Attendee registration against a single event.

use chrono::Utc;
use registry_core::{CapacityStatus, Event, EventId, Registration};

use crate::api::{RegistryError, Result};
use crate::repository::{EventRepository, RegistrationLog};

/// What a successful registration produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub registration: Registration,
    /// The event as written back, registrant appended.
    pub event: Event,
    pub capacity: CapacityStatus,
    /// False when storage dropped either write. The registration is then
    /// missing from both the log and the event.
    pub persisted: bool,
}

/// Records a registrant in the global log and on the event itself.
#[derive(Clone)]
pub struct RegistrationService {
    events: EventRepository,
    log: RegistrationLog,
}

impl RegistrationService {
    pub fn new(events: EventRepository, log: RegistrationLog) -> Self {
        Self { events, log }
    }

    /// Register `email` for an event.
    ///
    /// Validation and the event lookup both happen before any write, so a
    /// rejected call leaves every collection untouched. The same email may
    /// register for the same event more than once, and a sold-out event
    /// still accepts registrations.
    ///
    /// The log is written first. If the event write is then dropped the log
    /// is restored to its prior rows.
    pub fn register(
        &self,
        event_id: EventId,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<RegistrationReceipt> {
        let registration = Registration::new(event_id, name, email, phone, Utc::now())?;

        let mut events = self.events.list();
        let event = events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or(RegistryError::NotFound(event_id))?;
        event.registered.push(registration.email.clone());
        let event = event.clone();

        let prior = self.log.list();
        let mut log = prior.clone();
        log.push(registration.clone());

        let persisted = if !self.log.save_all(&log).is_persisted() {
            false
        } else if self.events.save_all(&events).is_persisted() {
            true
        } else {
            if !self.log.save_all(&prior).is_persisted() {
                tracing::error!("Could not roll back registration log for event {}", event_id);
            }
            false
        };

        if persisted {
            tracing::info!(
                "Registered {} for event {} ({} registrants)",
                registration.email,
                event_id,
                event.registered_count()
            );
        } else {
            tracing::warn!("Registration for event {} was not persisted", event_id);
        }

        Ok(RegistrationReceipt {
            capacity: event.capacity_status(),
            registration,
            event,
            persisted,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use registry_core::{EventDraft, Field, Severity, ValidationError};

    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::store::{Collection, InMemoryStore, KeyValueStore, Storage, StoreError};

    /// In-memory backend whose events writes fail once `fail_events` is set.
    struct FlakyEvents {
        inner: InMemoryStore,
        fail_events: Arc<AtomicBool>,
    }

    impl KeyValueStore for FlakyEvents {
        fn get(&self, key: &str) -> crate::store::Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> crate::store::Result<()> {
            if key == Collection::Events.key() && self.fail_events.load(Ordering::SeqCst) {
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> crate::store::Result<()> {
            self.inner.remove(key)
        }
    }

    fn service(storage: &Storage) -> RegistrationService {
        RegistrationService::new(
            EventRepository::new(storage.clone()),
            RegistrationLog::new(storage.clone()),
        )
    }

    fn single_seat_event(storage: &Storage) -> Event {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        EventRepository::new(storage.clone())
            .create(EventDraft::new("Seat", date).with_capacity(1))
            .unwrap()
    }

    #[test]
    fn register_fills_last_seat() {
        let storage = Storage::in_memory();
        let event = single_seat_event(&storage);

        let receipt = service(&storage)
            .register(event.id, "Ann", "ann@example.com", "")
            .unwrap();

        assert!(receipt.persisted);
        assert_eq!(receipt.event.registered, vec!["ann@example.com".to_string()]);
        assert_eq!(receipt.capacity.severity, Severity::SoldOut);

        let stored = EventRepository::new(storage.clone()).get(event.id).unwrap();
        assert_eq!(stored.registered, vec!["ann@example.com".to_string()]);

        let log = RegistrationLog::new(storage).list();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_id, event.id);
        assert_eq!(log[0].email, "ann@example.com");
    }

    #[test]
    fn register_normalizes_email() {
        let storage = Storage::in_memory();
        let event = single_seat_event(&storage);

        let receipt = service(&storage)
            .register(event.id, " Ann ", "  ANN@Example.com ", " 021 ")
            .unwrap();

        assert_eq!(receipt.registration.name, "Ann");
        assert_eq!(receipt.registration.email, "ann@example.com");
        assert_eq!(receipt.registration.phone.as_deref(), Some("021"));
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let storage = Storage::in_memory();
        let event = single_seat_event(&storage);

        let err = service(&storage).register(event.id, "", "a@b.co", "").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::MissingField(Field::Name))
        ));

        let err = service(&storage).register(event.id, "Ann", "  ", "").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::MissingField(Field::Email))
        ));

        assert!(RegistrationLog::new(storage.clone()).is_empty());
        assert!(EventRepository::new(storage).get(event.id).unwrap().registered.is_empty());
    }

    #[test]
    fn unknown_event_writes_nothing() {
        let storage = Storage::in_memory();
        single_seat_event(&storage);

        let err = service(&storage)
            .register(EventId(99), "Ann", "a@b.co", "")
            .unwrap_err();

        assert!(matches!(err, RegistryError::NotFound(EventId(99))));
        assert!(RegistrationLog::new(storage).is_empty());
    }

    #[test]
    fn duplicate_registration_is_accepted() {
        let storage = Storage::in_memory();
        let event = single_seat_event(&storage);
        let service = service(&storage);

        service.register(event.id, "Ann", "a@b.co", "").unwrap();
        let receipt = service.register(event.id, "Ann", "a@b.co", "").unwrap();

        assert_eq!(receipt.event.registered.len(), 2);
        assert_eq!(receipt.capacity.spots_left, registry_core::SpotsLeft::Limited(-1));
        assert_eq!(RegistrationLog::new(storage).len(), 2);
    }

    #[test]
    fn other_events_are_unchanged() {
        let storage = Storage::in_memory();
        let events = EventRepository::new(storage.clone());
        events.seed_if_empty();
        let before = events.list();

        service(&storage).register(EventId(2), "Ann", "a@b.co", "").unwrap();

        let after = events.list();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].registered, vec!["a@b.co".to_string()]);
    }

    #[test]
    fn dropped_log_write_leaves_event_untouched() {
        let storage = Storage::new(InMemoryStore::with_quota(600));
        let events = EventRepository::new(storage.clone());
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let event = events.create(EventDraft::new("Tight", date)).unwrap();

        let long_name = "N".repeat(1_000);
        let receipt = service(&storage)
            .register(event.id, &long_name, "a@b.co", "")
            .unwrap();

        assert!(!receipt.persisted);
        assert!(events.get(event.id).unwrap().registered.is_empty());
        assert!(RegistrationLog::new(storage).is_empty());
    }

    #[test]
    fn dropped_event_write_rolls_back_log() {
        let fail_events = Arc::new(AtomicBool::new(false));
        let storage = Storage::new(FlakyEvents {
            inner: InMemoryStore::new(),
            fail_events: fail_events.clone(),
        });
        let event = single_seat_event(&storage);
        let service = service(&storage);
        service.register(event.id, "Ann", "ann@example.com", "").unwrap();

        fail_events.store(true, Ordering::SeqCst);
        let receipt = service.register(event.id, "Bob", "bob@example.com", "").unwrap();

        assert!(!receipt.persisted);
        let log = RegistrationLog::new(storage.clone()).list();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].email, "ann@example.com");
        let stored = EventRepository::new(storage).get(event.id).unwrap();
        assert_eq!(stored.registered, vec!["ann@example.com".to_string()]);
    }
}
