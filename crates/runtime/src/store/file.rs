//! File-based KeyValueStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result};

/// File-based implementation of KeyValueStore.
///
/// Each key is stored as `{key}.json` in the base directory. Writes go to a
/// temp file first and are renamed into place, so a failed write leaves the
/// previous document intact.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store, creating the base directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a collection file.
    fn value_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        tracing::trace!("Loaded {} ({} bytes)", path.display(), raw.len());

        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key);
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, value)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} ({} bytes)", path.display(), value.len());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}", path.display());
        }

        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.value_path(key).exists()
    }
}
