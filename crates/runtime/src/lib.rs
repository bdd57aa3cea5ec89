//! Storage-backed runtime for the community event registry.
//!
//! This crate wires the pure rules from `registry-core` to a persistent
//! key-value store. Consumers open a [`Registry`] and reach every collection,
//! service and the admin surface through it.
//!
//! Modules are organized by responsibility:
//! - [`store`] adapts a key-value backend into typed, never-failing reads and writes
//! - [`repository`] owns one collection each
//! - [`services`] validate input and write across collections
//! - [`query`] drives search filtering from keystrokes
//! - [`admin`] gates and synchronizes the admin dashboard
//! - [`api`] exposes the error types downstream clients interact with
pub mod admin;
pub mod api;
pub mod config;
pub mod query;
pub mod registry;
pub mod repository;
pub mod services;
pub mod store;

pub use admin::{
    AdminDashboard, AdminEventRow, AdminGate, AdminSession, Authenticator, DashboardSnapshot,
    PendingDelete, StaticCredentials, Totals,
};
pub use api::{RegistryError, Result};
pub use config::RegistryConfig;
pub use query::SearchDebouncer;
pub use registry::{Registry, RegistryBuilder};
pub use repository::{
    EventRepository, NewsletterList, PreferenceRepository, RegistrationLog, VolunteerLog,
};
pub use services::{
    AccessibilityService, RegistrationReceipt, RegistrationService, SignupService,
    SubscribeOutcome, ThemeApplier,
};
pub use store::{Collection, FileStore, InMemoryStore, KeyValueStore, Storage, WriteOutcome};
