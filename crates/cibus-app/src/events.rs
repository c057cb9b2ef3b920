//! The event loop that drives a [`QueryController`].
//!
//! All state changes happen on the task that owns the [`Session`]. Searches
//! run on spawned tokio tasks and post their outcome back into the same queue
//! as [`UiEvent::SearchCompleted`], so the map is only ever mutated from the
//! loop.

use cibus_core::SearchResult;
use cibus_map::MapSurface;
use cibus_search::{SearchClient, SearchError};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use crate::controller::{QueryController, SearchTicket};
use crate::notify::Notifier;
use crate::store::SearchPhase;

#[derive(Debug)]
pub enum UiEvent {
    QueryChanged(String),
    Submit,
    /// Pointer entered the list row of the named vendor.
    Hover(String),
    /// Row at this index was clicked.
    ToggleExpand(usize),
    SearchCompleted {
        ticket: SearchTicket,
        outcome: Result<SearchResult, SearchError>,
    },
}

pub struct Session<M, N> {
    controller: QueryController<M, N>,
    client: SearchClient,
    tx: mpsc::UnboundedSender<UiEvent>,
    rx: mpsc::UnboundedReceiver<UiEvent>,
    /// The latest spawned fetch, watched so a task that dies without posting
    /// its outcome does not leave the session loading forever.
    fetch: Option<(SearchTicket, JoinHandle<()>)>,
}

enum Wake {
    Event(Option<UiEvent>),
    FetchEnded(SearchTicket, Result<(), JoinError>),
}

impl<M: MapSurface, N: Notifier> Session<M, N> {
    pub fn new(controller: QueryController<M, N>, client: SearchClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller,
            client,
            tx,
            rx,
            fetch: None,
        }
    }

    /// A handle for posting events from elsewhere.
    #[must_use]
    pub fn sender(&self) -> mpsc::UnboundedSender<UiEvent> {
        self.tx.clone()
    }

    #[must_use]
    pub fn controller(&self) -> &QueryController<M, N> {
        &self.controller
    }

    pub fn into_controller(self) -> QueryController<M, N> {
        self.controller
    }

    /// Applies one event. Must be called from within a tokio runtime, since
    /// [`UiEvent::Submit`] spawns the fetch.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::QueryChanged(text) => self.controller.set_query(text),
            UiEvent::Submit => self.spawn_search(),
            UiEvent::Hover(name) => self.controller.on_hover(&name),
            UiEvent::ToggleExpand(index) => {
                if !self.controller.toggle_expand(index) {
                    tracing::debug!(index, "toggle ignored, no such row");
                }
            }
            UiEvent::SearchCompleted { ticket, outcome } => {
                self.controller.complete(ticket, outcome);
            }
        }
    }

    /// Handles queued events until the queue is empty and no search is in
    /// flight.
    pub async fn run_until_idle(&mut self) {
        loop {
            if let Ok(event) = self.rx.try_recv() {
                self.handle(event);
                continue;
            }
            if self.controller.phase() != SearchPhase::Loading {
                return;
            }

            let wake = match self.fetch.as_mut() {
                Some((ticket, task)) => {
                    let ticket = *ticket;
                    tokio::select! {
                        event = self.rx.recv() => Wake::Event(event),
                        joined = task => Wake::FetchEnded(ticket, joined),
                    }
                }
                None => Wake::Event(self.rx.recv().await),
            };

            match wake {
                Wake::Event(Some(event)) => self.handle(event),
                Wake::Event(None) => return,
                Wake::FetchEnded(ticket, joined) => {
                    self.fetch = None;
                    // A task that finished normally has already queued its
                    // completion.
                    if let Err(e) = joined {
                        self.controller.abort(ticket, e.to_string());
                    }
                }
            }
        }
    }

    fn spawn_search(&mut self) {
        let ticket = match self.controller.begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::debug!(error = %e, "submit ignored");
                return;
            }
        };

        let client = self.client.clone();
        let query = self.controller.query().to_owned();
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let outcome = client.search(&query).await;
            if tx
                .send(UiEvent::SearchCompleted { ticket, outcome })
                .is_err()
            {
                tracing::debug!(query = %query, "session closed before search completed");
            }
        });
        self.fetch = Some((ticket, task));
    }
}
