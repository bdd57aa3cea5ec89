//! Registry facade and builder.
//!
//! [`Registry`] owns the shared storage handle and hands out repositories and
//! services over it. It is cheap to clone; every clone sees the same backend.

use std::sync::Arc;

use registry_core::{Event, EventId, EventQuery, featured, filter};

use crate::admin::{AdminGate, AdminSession, StaticCredentials};
use crate::api::{RegistryError, Result};
use crate::config::RegistryConfig;
use crate::query::SearchDebouncer;
use crate::repository::{
    EventRepository, NewsletterList, PreferenceRepository, RegistrationLog, VolunteerLog,
};
use crate::services::{
    AccessibilityService, RegistrationReceipt, RegistrationService, SignupService, ThemeApplier,
};
use crate::store::{FileStore, KeyValueStore, Storage};

#[derive(Clone)]
pub struct Registry {
    storage: Storage,
    config: RegistryConfig,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Unseeded registry over an in-memory backend.
    pub fn in_memory() -> Self {
        Self {
            storage: Storage::in_memory(),
            config: RegistryConfig::default(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn events(&self) -> EventRepository {
        EventRepository::new(self.storage.clone())
    }

    pub fn registrations(&self) -> RegistrationLog {
        RegistrationLog::new(self.storage.clone())
    }

    pub fn volunteers(&self) -> VolunteerLog {
        VolunteerLog::new(self.storage.clone())
    }

    pub fn newsletter(&self) -> NewsletterList {
        NewsletterList::new(self.storage.clone())
    }

    pub fn preferences(&self) -> PreferenceRepository {
        PreferenceRepository::new(self.storage.clone())
    }

    pub fn registration_service(&self) -> RegistrationService {
        RegistrationService::new(self.events(), self.registrations())
    }

    pub fn signups(&self) -> SignupService {
        SignupService::new(self.newsletter(), self.volunteers())
    }

    /// Apply the stored accessibility preferences to `applier` and keep it
    /// in sync with later updates.
    pub fn accessibility<A: ThemeApplier>(&self, applier: A) -> AccessibilityService<A> {
        AccessibilityService::init(self.preferences(), applier)
    }

    pub fn register(
        &self,
        event_id: EventId,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<RegistrationReceipt> {
        self.registration_service()
            .register(event_id, name, email, phone)
    }

    pub fn search(&self, query: &EventQuery) -> Vec<Event> {
        filter(&self.events().list(), query)
    }

    /// The configured number of soonest events.
    pub fn featured(&self) -> Vec<Event> {
        featured(&self.events().list(), self.config.featured_count)
    }

    /// Debouncer using the configured interval. Requires a tokio runtime.
    pub fn search_debouncer(&self) -> SearchDebouncer {
        SearchDebouncer::new(self.events(), self.config.search_debounce)
    }

    pub fn admin_credentials(&self) -> StaticCredentials {
        StaticCredentials::from_config(&self.config)
    }

    /// Log in against the configured admin credentials.
    pub fn admin_login(&self, email: &str, password: &str) -> Result<AdminSession> {
        AdminGate::login(&self.admin_credentials(), email, password)
    }
}

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    config: RegistryConfig,
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            backend: None,
        }
    }

    /// Override registry configuration
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `backend` instead of a file store in the configured data dir.
    pub fn backend(mut self, backend: impl KeyValueStore + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    pub fn seed_sample_events(mut self, seed: bool) -> Self {
        self.config.seed_sample_events = seed;
        self
    }

    /// Open the backend and seed the events collection if configured.
    pub fn build(self) -> Result<Registry> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let store =
                    FileStore::new(&self.config.data_dir).map_err(RegistryError::Storage)?;
                tracing::info!("Opened registry at {}", self.config.data_dir.display());
                Arc::new(store)
            }
        };

        let registry = Registry {
            storage: Storage::from_shared(backend),
            config: self.config,
        };

        if registry.config.seed_sample_events {
            registry.events().seed_if_empty();
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn build_seeds_by_default() {
        let registry = Registry::builder()
            .backend(InMemoryStore::new())
            .build()
            .unwrap();
        assert_eq!(registry.events().list().len(), 3);
    }

    #[test]
    fn build_can_skip_seeding() {
        let registry = Registry::builder()
            .backend(InMemoryStore::new())
            .seed_sample_events(false)
            .build()
            .unwrap();
        assert!(registry.events().list().is_empty());
    }

    #[test]
    fn featured_honors_configured_count() {
        let mut config = RegistryConfig::default();
        config.featured_count = 2;
        let registry = Registry::builder()
            .config(config)
            .backend(InMemoryStore::new())
            .build()
            .unwrap();

        let titles: Vec<String> = registry.featured().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Senior Tech Workshop", "Volunteer Tree Planting"]);
    }

    #[test]
    fn admin_login_uses_configured_credentials() {
        let registry = Registry::builder()
            .config(RegistryConfig::default().with_admin("admin@x.org", "pw"))
            .backend(InMemoryStore::new())
            .build()
            .unwrap();

        assert!(registry.admin_login("admin@x.org", "pw").is_ok());
        assert!(matches!(
            registry.admin_login("admin@x.org", "bad"),
            Err(RegistryError::Unauthorized)
        ));
        assert!(matches!(
            Registry::in_memory().admin_login("", ""),
            Err(RegistryError::Unauthorized)
        ));
    }

    #[test]
    fn clones_share_the_backend() {
        let registry = Registry::in_memory();
        let other = registry.clone();
        other.events().seed_if_empty();

        assert_eq!(registry.search(&EventQuery::category("Education")).len(), 1);
    }
}
