//! Search over the events collection.
//!
//! The pure matching rules live in `registry_core::query`; this module adds
//! the store-backed debouncer that drives them from keystrokes.

mod debounce;

pub use debounce::{DEFAULT_DEBOUNCE, SearchDebouncer};
