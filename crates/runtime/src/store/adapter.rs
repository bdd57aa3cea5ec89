//! Typed, fail-safe access to persisted collections.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;

use super::{Collection, InMemoryStore, KeyValueStore};

/// Result of a [`Storage::write`].
///
/// A dropped write is not an error: the caller's action proceeds, it simply
/// does not persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Persisted,
    Dropped,
}

impl WriteOutcome {
    pub fn is_persisted(self) -> bool {
        self == WriteOutcome::Persisted
    }
}

/// Result of [`Storage::read_records`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Records<T> {
    /// Nothing stored under the key.
    Missing,
    /// The backend failed to return the value.
    Unavailable,
    /// The stored value is not a JSON array.
    Unparseable,
    /// The array decoded; `skipped` records were malformed.
    Loaded { records: Vec<T>, skipped: usize },
}

impl<T> Records<T> {
    /// Decoded records, empty unless the array loaded.
    pub fn into_records(self) -> Vec<T> {
        match self {
            Records::Loaded { records, .. } => records,
            _ => Vec::new(),
        }
    }

    /// True when seeding may replace the stored value: nothing stored, an
    /// unparseable value or an empty array.
    pub fn is_vacant(&self) -> bool {
        match self {
            Records::Missing | Records::Unparseable => true,
            Records::Unavailable => false,
            Records::Loaded { records, skipped } => records.is_empty() && *skipped == 0,
        }
    }
}

/// Typed view over a [`KeyValueStore`].
///
/// Cloning is cheap and every clone shares the same backend. Nothing is
/// cached: each read goes back to the backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_shared(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Storage over a fresh [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// Raw backend, for callers that need to inspect stored documents.
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Load a collection, returning `default` when it is missing, malformed
    /// or unreadable.
    pub fn read<T: DeserializeOwned>(&self, collection: Collection, default: T) -> T {
        let key = collection.key();

        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!("Failed to read {} from storage: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse {} from storage: {}", key, e);
                default
            }
        }
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, collection: Collection) -> T {
        self.read(collection, T::default())
    }

    /// Load an array collection record by record.
    ///
    /// Records that fail to decode are skipped with a warning instead of
    /// discarding the whole collection.
    pub fn read_records<T: DeserializeOwned>(&self, collection: Collection) -> Records<T> {
        let key = collection.key();

        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Records::Missing,
            Err(e) => {
                tracing::warn!("Failed to read {} from storage: {}", key, e);
                return Records::Unavailable;
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Failed to parse {} from storage: {}", key, e);
                return Records::Unparseable;
            }
        };

        let stored = values.len();
        let records: Vec<T> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping record {} of {}: {}", index, key, e);
                    None
                }
            })
            .collect();

        Records::Loaded {
            skipped: stored - records.len(),
            records,
        }
    }

    /// Replace a collection. Serialization or backend failures are logged and
    /// the previous value is left untouched.
    pub fn write<T: Serialize + ?Sized>(&self, collection: Collection, value: &T) -> WriteOutcome {
        let key = collection.key();

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize {}: {}", key, e);
                return WriteOutcome::Dropped;
            }
        };

        match self.backend.set(key, &json) {
            Ok(()) => WriteOutcome::Persisted,
            Err(e) => {
                tracing::error!("Storage write failed for {}: {}", key, e);
                WriteOutcome::Dropped
            }
        }
    }

    /// Remove a collection, so the next read returns its default.
    pub fn clear(&self, collection: Collection) -> WriteOutcome {
        let key = collection.key();
        match self.backend.remove(key) {
            Ok(()) => WriteOutcome::Persisted,
            Err(e) => {
                tracing::error!("Failed to clear {}: {}", key, e);
                WriteOutcome::Dropped
            }
        }
    }

    /// Remove every collection. Returns how many removals succeeded.
    pub fn clear_all(&self) -> usize {
        Collection::iter()
            .map(|collection| self.clear(collection))
            .filter(|outcome| outcome.is_persisted())
            .count()
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.backend.contains(collection.key())
    }
}
