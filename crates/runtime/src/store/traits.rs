//! Backend contract for whole-value key/value persistence.

use super::Result;

/// Whole-value string store keyed by collection name.
///
/// Implementations must make `set` atomic per key: after a failed `set` the
/// previous value is still readable.
pub trait KeyValueStore: Send + Sync {
    /// Load the raw value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
