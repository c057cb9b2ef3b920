//! The single current search result and the phase of the latest query.

use cibus_core::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Initial,
    Loading,
    Loaded,
    Error,
}

/// Holds at most one [`SearchResult`].
///
/// A new result replaces the previous one wholesale. A failed query changes
/// only the phase; the last good result stays readable.
#[derive(Debug, Default)]
pub struct ResultStore {
    phase: SearchPhase,
    current: Option<SearchResult>,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub fn current(&self) -> Option<&SearchResult> {
        self.current.as_ref()
    }

    pub fn begin_loading(&mut self) {
        self.phase = SearchPhase::Loading;
    }

    pub fn store(&mut self, result: SearchResult) {
        self.current = Some(result);
        self.phase = SearchPhase::Loaded;
    }

    pub fn fail(&mut self) {
        self.phase = SearchPhase::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(hits: u64) -> SearchResult {
        SearchResult {
            hits,
            locations: 0,
            vendors: Vec::new(),
        }
    }

    #[test]
    fn starts_initial_and_empty() {
        let store = ResultStore::new();
        assert_eq!(store.phase(), SearchPhase::Initial);
        assert!(store.current().is_none());
    }

    #[test]
    fn store_replaces_previous_result() {
        let mut store = ResultStore::new();
        store.begin_loading();
        store.store(result(1));
        store.begin_loading();
        store.store(result(2));

        assert_eq!(store.phase(), SearchPhase::Loaded);
        assert_eq!(store.current().map(|r| r.hits), Some(2));
    }

    #[test]
    fn failure_keeps_last_result() {
        let mut store = ResultStore::new();
        store.store(result(4));
        store.begin_loading();
        store.fail();

        assert_eq!(store.phase(), SearchPhase::Error);
        assert_eq!(store.current().map(|r| r.hits), Some(4));
    }
}
