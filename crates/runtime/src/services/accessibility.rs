//! Accessibility preferences pushed to the presentation layer.

use registry_core::{AccessibilityPatch, AccessibilityPrefs, SizeStep};

use crate::repository::PreferenceRepository;

/// Presentation hook that renders with the current preferences.
///
/// Called once at initialization and again after every update; the applier
/// never reads preferences back from its own state.
pub trait ThemeApplier {
    fn apply(&mut self, prefs: &AccessibilityPrefs);
}

impl<F> ThemeApplier for F
where
    F: FnMut(&AccessibilityPrefs),
{
    fn apply(&mut self, prefs: &AccessibilityPrefs) {
        self(prefs)
    }
}

/// Owns a [`ThemeApplier`] and keeps it in sync with the stored record.
pub struct AccessibilityService<A> {
    prefs: PreferenceRepository,
    applier: A,
}

impl<A: ThemeApplier> AccessibilityService<A> {
    /// Apply the stored preferences and return the service.
    pub fn init(prefs: PreferenceRepository, mut applier: A) -> Self {
        applier.apply(&prefs.load().resolve());
        Self { prefs, applier }
    }

    pub fn current(&self) -> AccessibilityPrefs {
        self.prefs.load().resolve()
    }

    /// Merge `patch` into the stored record, then re-apply.
    pub fn update(&mut self, patch: AccessibilityPatch) -> AccessibilityPrefs {
        let resolved = self.prefs.merge(patch).resolve();
        self.applier.apply(&resolved);
        resolved
    }

    /// Move to the adjacent text size. At either end nothing is written.
    pub fn step_text_size(&mut self, step: SizeStep) -> AccessibilityPrefs {
        let current = self.current();
        let next = current.stepped_size(step);
        if next == current.size {
            return current;
        }
        tracing::debug!("Text size {} -> {}", current.size, next);
        self.update(AccessibilityPatch::size(next))
    }

    pub fn toggle_contrast(&mut self) -> AccessibilityPrefs {
        let contrast = !self.current().contrast;
        self.update(AccessibilityPatch::contrast(contrast))
    }

    pub fn into_applier(self) -> A {
        self.applier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Storage;

    #[derive(Default)]
    struct Recorder {
        applied: Vec<AccessibilityPrefs>,
    }

    impl ThemeApplier for Recorder {
        fn apply(&mut self, prefs: &AccessibilityPrefs) {
            self.applied.push(*prefs);
        }
    }

    #[test]
    fn init_applies_stored_prefs() {
        let storage = Storage::in_memory();
        let repo = PreferenceRepository::new(storage);
        repo.merge(AccessibilityPatch::contrast(true));

        let service = AccessibilityService::init(repo, Recorder::default());
        let applied = service.into_applier().applied;

        assert_eq!(applied, vec![AccessibilityPrefs { size: 100, contrast: true }]);
    }

    #[test]
    fn updates_merge_and_reapply() {
        let repo = PreferenceRepository::new(Storage::in_memory());
        let mut service = AccessibilityService::init(repo.clone(), Recorder::default());

        service.step_text_size(SizeStep::Larger);
        service.toggle_contrast();
        service.step_text_size(SizeStep::Larger);

        assert_eq!(repo.load().resolve(), AccessibilityPrefs { size: 150, contrast: true });
        let sizes: Vec<u16> = service.into_applier().applied.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![100, 125, 125, 150]);
    }

    #[test]
    fn stepping_past_the_end_is_a_no_op() {
        let repo = PreferenceRepository::new(Storage::in_memory());
        let mut service = AccessibilityService::init(repo.clone(), Recorder::default());

        let prefs = service.step_text_size(SizeStep::Smaller);

        assert_eq!(prefs.size, 100);
        assert_eq!(repo.load(), AccessibilityPatch::default());
        assert_eq!(service.into_applier().applied.len(), 1);
    }

    #[test]
    fn closures_are_appliers() {
        let mut seen = Vec::new();
        let repo = PreferenceRepository::new(Storage::in_memory());
        let mut service = AccessibilityService::init(repo, |p: &AccessibilityPrefs| seen.push(p.contrast));
        service.toggle_contrast();
        drop(service);

        assert_eq!(seen, vec![false, true]);
    }
}
