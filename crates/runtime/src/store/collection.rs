//! The fixed set of persisted collections and their storage keys.

/// A named, independently persisted collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
pub enum Collection {
    #[strum(serialize = "community_events")]
    Events,
    #[strum(serialize = "event_registrations")]
    Registrations,
    #[strum(serialize = "newsletter_subscribers")]
    Newsletter,
    #[strum(serialize = "volunteer_signups")]
    Volunteers,
    #[strum(serialize = "accessibility_prefs")]
    Accessibility,
}

impl Collection {
    /// Storage key for this collection.
    pub fn key(self) -> &'static str {
        self.into()
    }
}
