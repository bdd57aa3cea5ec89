//! Derived event views: search/category filtering and the featured subset.

use crate::event::Event;

/// Number of events on the featured strip unless configured otherwise.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Visitor-supplied filter. Blank fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub search_term: String,
    pub category: String,
}

impl EventQuery {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    pub fn search(search_term: impl Into<String>) -> Self {
        Self::new(search_term, String::new())
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self::new(String::new(), category)
    }

    /// Case-insensitive substring match on title or description, AND exact
    /// category match.
    pub fn matches(&self, event: &Event) -> bool {
        let term = self.search_term.trim().to_lowercase();
        let matches_search = term.is_empty()
            || event.title.to_lowercase().contains(&term)
            || event.description.to_lowercase().contains(&term);

        let matches_category =
            self.category.is_empty() || event.category.as_deref() == Some(self.category.as_str());

        matches_search && matches_category
    }
}

/// Events matching `query`, in input order.
pub fn filter(events: &[Event], query: &EventQuery) -> Vec<Event> {
    events
        .iter()
        .filter(|event| query.matches(event))
        .cloned()
        .collect()
}

/// The `count` soonest events by date. Equal dates keep their input order.
pub fn featured(events: &[Event], count: usize) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.date);
    sorted.truncate(count);
    sorted
}
