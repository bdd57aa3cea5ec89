//! In-memory KeyValueStore implementation for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{KeyValueStore, Result, StoreError};

/// In-memory implementation of KeyValueStore.
///
/// Optionally enforces a total size quota (keys plus values, in bytes) the
/// way browser storage does; a write that would exceed it fails and leaves
/// the previous value in place.
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    /// Create a new empty store without a quota.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Create an empty store limited to `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.values
            .read()
            .map(|values| values.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;

        if let Some(quota) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let required = others + key.len() + value.len();
            if required > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}
