//! Debounced search: coalesces keystrokes into one filter run.

use std::sync::Arc;
use std::time::Duration;

use registry_core::{Event, EventQuery, filter};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::EventRepository;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Recomputes the filtered event list from search and category input.
///
/// Keystrokes are coalesced: each one cancels the scheduled run and starts a
/// new delay. A category change runs immediately with the latest term. Every
/// run re-reads the events collection and publishes on a watch channel.
///
/// Must be used from within a tokio runtime. Dropping the debouncer cancels
/// any scheduled run.
pub struct SearchDebouncer {
    events: EventRepository,
    delay: Duration,
    query: EventQuery,
    results: Arc<watch::Sender<Vec<Event>>>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Creates the debouncer and publishes the unfiltered list right away.
    pub fn new(events: EventRepository, delay: Duration) -> Self {
        let query = EventQuery::default();
        let initial = filter(&events.list(), &query);
        let (results, _) = watch::channel(initial);

        Self {
            events,
            delay,
            query,
            results: Arc::new(results),
            pending: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Event>> {
        self.results.subscribe()
    }

    /// Last published result.
    pub fn latest(&self) -> Vec<Event> {
        self.results.borrow().clone()
    }

    pub fn query(&self) -> &EventQuery {
        &self.query
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True while a scheduled run has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Record a new search term and reschedule the filter.
    pub fn on_search_input(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.cancel();

        let events = self.events.clone();
        let query = self.query.clone();
        let results = Arc::clone(&self.results);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            publish(&results, &events, &query);
        }));
    }

    /// Switch category and filter immediately.
    pub fn on_category_change(&mut self, category: impl Into<String>) {
        self.query.category = category.into();
        self.cancel();
        publish(&self.results, &self.events, &self.query);
    }

    /// Cancel any scheduled run without publishing.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn publish(results: &watch::Sender<Vec<Event>>, events: &EventRepository, query: &EventQuery) {
    let matched = filter(&events.list(), query);
    tracing::debug!(
        "Search '{}' in '{}' matched {} events",
        query.search_term,
        query.category,
        matched.len()
    );
    results.send_replace(matched);
}
