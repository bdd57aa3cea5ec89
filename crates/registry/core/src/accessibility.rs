//! Accessibility preferences: text size and high-contrast mode.
//!
//! The stored record may hold either field alone, so it is modelled as an
//! [`AccessibilityPatch`]. Updates merge field by field; resolving a patch
//! fills in defaults for whatever was never set.

use serde::{Deserialize, Serialize};

/// Allowed text sizes in percent, ascending.
pub const TEXT_SIZES: [u16; 4] = [100, 125, 150, 200];

/// Text size used when none is stored.
pub const DEFAULT_TEXT_SIZE: u16 = TEXT_SIZES[0];

/// Fully resolved preferences handed to a theme applier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPrefs {
    pub size: u16,
    pub contrast: bool,
}

impl Default for AccessibilityPrefs {
    fn default() -> Self {
        Self {
            size: DEFAULT_TEXT_SIZE,
            contrast: false,
        }
    }
}

impl AccessibilityPrefs {
    /// Adjacent allowed size in the given direction. Stays put at either end;
    /// a size outside [`TEXT_SIZES`] steps from the default.
    pub fn stepped_size(&self, step: SizeStep) -> u16 {
        let index = TEXT_SIZES
            .iter()
            .position(|&s| s == self.size)
            .unwrap_or(0);
        let target = match step {
            SizeStep::Larger => index.saturating_add(1).min(TEXT_SIZES.len() - 1),
            SizeStep::Smaller => index.saturating_sub(1),
        };
        TEXT_SIZES[target]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeStep {
    Larger,
    Smaller,
}

/// Partial preference record, as stored and as submitted by an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<bool>,
}

impl AccessibilityPatch {
    pub fn size(size: u16) -> Self {
        Self {
            size: Some(size),
            contrast: None,
        }
    }

    pub fn contrast(contrast: bool) -> Self {
        Self {
            size: None,
            contrast: Some(contrast),
        }
    }

    /// Fields set in `newer` win; everything else is kept.
    pub fn merge(self, newer: Self) -> Self {
        Self {
            size: newer.size.or(self.size),
            contrast: newer.contrast.or(self.contrast),
        }
    }

    pub fn resolve(&self) -> AccessibilityPrefs {
        let defaults = AccessibilityPrefs::default();
        AccessibilityPrefs {
            size: self.size.unwrap_or(defaults.size),
            contrast: self.contrast.unwrap_or(defaults.contrast),
        }
    }
}
