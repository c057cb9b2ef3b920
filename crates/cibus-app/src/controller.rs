//! Query submission and the state that follows from it.
//!
//! [`QueryController`] owns the pending query, the [`ResultStore`], the result
//! list, the map and the notifier. A search is split into
//! [`QueryController::begin_submit`] and [`QueryController::complete`] so an
//! event loop can run the fetch elsewhere and hand the outcome back;
//! [`QueryController::submit`] does both in one call.

use cibus_core::{FailureKind, SearchResult};
use cibus_map::{clear, render, MapSurface, RenderError};
use cibus_search::{SearchClient, SearchError};
use thiserror::Error;

use crate::hover;
use crate::listing::ResultList;
use crate::notify::{Notification, Notifier};
use crate::store::{ResultStore, SearchPhase};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a search is already in flight")]
    AlreadyLoading,
}

/// A failed search or render, as reported to the user.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The search task ended without reporting an outcome.
    #[error("search task ended without a result: {0}")]
    Aborted(String),
}

impl ControllerError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ControllerError::Search(e) => e.kind(),
            ControllerError::Aborted(_) => FailureKind::FetchFailure,
            ControllerError::Render(RenderError::Projection(_)) => FailureKind::ParseFailure,
            ControllerError::Render(RenderError::Map(_)) => FailureKind::RenderFailure,
        }
    }
}

/// Fencing token for one submitted search. Only the completion carrying the
/// ticket currently in flight is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// What [`QueryController::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was rendered and stored.
    Loaded,
    /// The user was notified. The previous result stays current and the map
    /// shows it, redrawn if the map rejected part of the update.
    Failed(FailureKind),
    /// The ticket was not the one in flight; nothing changed.
    Stale,
}

pub struct QueryController<M, N> {
    query: String,
    store: ResultStore,
    listing: Option<ResultList>,
    map: M,
    notifier: N,
    last_ticket: u64,
    in_flight: Option<SearchTicket>,
}

impl<M: MapSurface, N: Notifier> QueryController<M, N> {
    pub fn new(map: M, notifier: N) -> Self {
        Self {
            query: String::new(),
            store: ResultStore::new(),
            listing: None,
            map,
            notifier,
            last_ticket: 0,
            in_flight: None,
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.store.phase()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SearchResult> {
        self.store.current()
    }

    #[must_use]
    pub fn listing(&self) -> Option<&ResultList> {
        self.listing.as_ref()
    }

    #[must_use]
    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Moves to `Loading` and hands out the ticket for the new search.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::AlreadyLoading`] while another search is in
    /// flight.
    pub fn begin_submit(&mut self) -> Result<SearchTicket, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::AlreadyLoading);
        }
        self.last_ticket += 1;
        let ticket = SearchTicket(self.last_ticket);
        self.in_flight = Some(ticket);
        self.store.begin_loading();
        tracing::debug!(query = %self.query, ticket = ticket.0, "search submitted");
        Ok(ticket)
    }

    /// Applies the outcome of the search identified by `ticket`.
    ///
    /// A success is rendered before it is stored, so a result whose
    /// coordinates cannot be projected is reported as a parse failure and the
    /// previous result stays current. If the map rejects the update partway,
    /// the previous result is drawn again. Each failure raises exactly one
    /// notification.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResult, SearchError>,
    ) -> Completion {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale search completion");
            return Completion::Stale;
        }
        self.in_flight = None;

        let applied = outcome
            .map_err(ControllerError::from)
            .and_then(|result| self.apply(result));

        match applied {
            Ok(()) => Completion::Loaded,
            Err(e) => self.fail(e),
        }
    }

    /// Ends the search identified by `ticket` as a fetch failure when its task
    /// died before posting an outcome.
    pub fn abort(&mut self, ticket: SearchTicket, reason: impl Into<String>) -> Completion {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "ignoring abort of stale search");
            return Completion::Stale;
        }
        self.in_flight = None;
        self.fail(ControllerError::Aborted(reason.into()))
    }

    /// Runs one search with `client` and applies its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::AlreadyLoading`] while another search is in
    /// flight. Search failures are reported through the notifier instead.
    pub async fn submit(&mut self, client: &SearchClient) -> Result<Completion, SubmitError> {
        let ticket = self.begin_submit()?;
        let outcome = client.search(&self.query).await;
        Ok(self.complete(ticket, outcome))
    }

    /// Highlights the branches of `vendor_name`. Does nothing until a result
    /// has been loaded.
    pub fn on_hover(&mut self, vendor_name: &str) {
        if let Err(e) = hover::highlight(&mut self.map, self.store.current(), vendor_name) {
            let e = ControllerError::from(e);
            tracing::warn!(vendor = vendor_name, error = %e, "hover highlight failed");
            self.restore_map();
            self.notifier.notify(Notification {
                kind: e.kind(),
                message: e.to_string(),
            });
        }
    }

    /// Toggles the food item line of list row `index`. Returns `false` when
    /// there is no such row.
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        self.listing
            .as_mut()
            .is_some_and(|listing| listing.toggle_expand(index))
    }

    fn fail(&mut self, e: ControllerError) -> Completion {
        let kind = e.kind();
        tracing::warn!(query = %self.query, %kind, error = %e, "search failed");
        if matches!(e, ControllerError::Render(RenderError::Map(_))) {
            self.restore_map();
        }
        self.store.fail();
        self.notifier.notify(Notification {
            kind,
            message: e.to_string(),
        });
        Completion::Failed(kind)
    }

    /// Redraws the stored result without highlight after a rejected update,
    /// or removes any partial layers when nothing has been loaded yet.
    fn restore_map(&mut self) {
        let restored = match self.store.current() {
            Some(result) => render(&mut self.map, &result.vendors, None).map(|_| ()),
            None => clear(&mut self.map).map_err(RenderError::from),
        };
        if let Err(e) = restored {
            tracing::warn!(error = %e, "could not restore map layers");
        }
    }

    fn apply(&mut self, result: SearchResult) -> Result<(), ControllerError> {
        let summary = render(&mut self.map, &result.vendors, None)?;
        tracing::info!(
            query = %self.query,
            hits = result.hits,
            markers = summary.normal,
            "search results loaded"
        );
        self.listing = Some(ResultList::from_result(&result));
        self.store.store(result);
        Ok(())
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
