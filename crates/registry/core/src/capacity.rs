//! Capacity accounting and urgency tiers for event badges.

use std::fmt;

use serde::Serialize;

use crate::event::Event;

/// Urgency tier derived from the remaining-spots ratio, least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Ample,
    Medium,
    Low,
    #[strum(serialize = "sold out")]
    SoldOut,
}

/// Remaining spots. `Limited` goes negative when an event is over-subscribed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SpotsLeft {
    Unlimited,
    Limited(i64),
}

impl fmt::Display for SpotsLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotsLeft::Unlimited => write!(f, "unlimited"),
            SpotsLeft::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// Derived availability of one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CapacityStatus {
    pub registered_count: usize,
    pub spots_left: SpotsLeft,
    pub label: String,
    pub severity: Severity,
}

impl CapacityStatus {
    pub fn of(event: &Event) -> Self {
        Self::compute(event.capacity_limit(), event.registered_count())
    }

    /// `capacity` of `None` means unlimited.
    pub fn compute(capacity: Option<u32>, registered_count: usize) -> Self {
        let Some(capacity) = capacity.filter(|&c| c > 0) else {
            return Self {
                registered_count,
                spots_left: SpotsLeft::Unlimited,
                label: "Unlimited spots".to_string(),
                severity: Severity::Ample,
            };
        };

        let capacity = i64::from(capacity);
        let registered = i64::try_from(registered_count).unwrap_or(i64::MAX);
        let spots = capacity.saturating_sub(registered);

        // Integer forms of spots/capacity < 0.2 and < 0.5.
        let severity = if spots <= 0 {
            Severity::SoldOut
        } else if spots * 5 < capacity {
            Severity::Low
        } else if spots * 2 < capacity {
            Severity::Medium
        } else {
            Severity::Ample
        };

        let label = if severity == Severity::SoldOut {
            "Sold Out".to_string()
        } else {
            format!("{} spots left", spots)
        };

        Self {
            registered_count,
            spots_left: SpotsLeft::Limited(spots),
            label,
            severity,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.severity == Severity::SoldOut
    }
}
