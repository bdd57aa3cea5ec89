//! Pure data model and rules for the community event registry.
//!
//! `registry-core` defines the canonical records (events, registrations,
//! volunteer signups, accessibility preferences) and the derived views built
//! from them (capacity status, filtered and featured lists). Nothing here
//! touches storage: the `runtime` crate reads collections, hands them to these
//! functions and writes the results back.
pub mod accessibility;
pub mod capacity;
pub mod event;
pub mod query;
pub mod samples;
pub mod signup;
pub mod validation;

pub use accessibility::{AccessibilityPatch, AccessibilityPrefs, SizeStep, TEXT_SIZES};
pub use capacity::{CapacityStatus, Severity, SpotsLeft};
pub use event::{Event, EventDraft, EventId};
pub use query::{DEFAULT_FEATURED_COUNT, EventQuery, featured, filter};
pub use samples::sample_events;
pub use signup::{Registration, VolunteerForm, VolunteerSignup, is_valid_email, normalize_email};
pub use validation::{Field, ValidationError};
