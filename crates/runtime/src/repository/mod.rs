//! Repository layer over the persisted collections.
//!
//! Each repository owns one collection and follows the same discipline:
//! read the full collection, transform it, write it back. None of them keeps
//! a copy between calls, so every view reflects the latest write.

mod events;
mod logs;
mod preferences;

pub use events::EventRepository;
pub use logs::{NewsletterList, RegistrationLog, VolunteerLog};
pub use preferences::PreferenceRepository;
