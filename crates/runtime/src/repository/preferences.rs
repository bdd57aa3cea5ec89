//! Accessibility preference record.

use registry_core::AccessibilityPatch;

use crate::store::{Collection, Storage};

/// Process-wide accessibility record. Updates merge into the stored value
/// rather than replacing it.
#[derive(Clone)]
pub struct PreferenceRepository {
    storage: Storage,
}

impl PreferenceRepository {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> AccessibilityPatch {
        self.storage.read_or_default(Collection::Accessibility)
    }

    /// Merge `patch` into the stored record and return the merged record.
    pub fn merge(&self, patch: AccessibilityPatch) -> AccessibilityPatch {
        let merged = self.load().merge(patch);
        self.storage.write(Collection::Accessibility, &merged);
        merged
    }
}

#[cfg(test)]
mod tests {
    use registry_core::AccessibilityPrefs;

    use super::*;

    #[test]
    fn merge_does_not_erase_other_field() {
        let storage = Storage::in_memory();
        let prefs = PreferenceRepository::new(storage.clone());

        prefs.merge(AccessibilityPatch::size(150));
        prefs.merge(AccessibilityPatch::contrast(true));

        assert_eq!(
            prefs.load().resolve(),
            AccessibilityPrefs { size: 150, contrast: true }
        );

        prefs.merge(AccessibilityPatch::size(100));
        assert_eq!(prefs.load().contrast, Some(true));
    }

    #[test]
    fn reads_legacy_partial_record() {
        let storage = Storage::in_memory();
        storage
            .backend()
            .set(Collection::Accessibility.key(), r#"{"size":125}"#)
            .unwrap();

        let prefs = PreferenceRepository::new(storage);
        assert_eq!(prefs.load(), AccessibilityPatch::size(125));
    }
}
