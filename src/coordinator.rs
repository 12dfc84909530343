//! The async driver that turns key events into rendered search results.
//!
//! One coordinator per widget. It owns the configuration, the state machine,
//! the transport (shared with spawned request tasks), and the presenter, and
//! runs a single select loop over three sources: incoming key events, the
//! debounce deadline, and completions arriving from request tasks. All state
//! mutation happens inside that one loop, so no locking is needed.

use crate::config::SearchConfig;
use crate::error::TransportError;
use crate::presenter::Presenter;
use crate::render;
use crate::state::{FireOutcome, KeyOutcome, ResponseOutcome, SearchState};
use crate::transport::SearchTransport;
use crate::types::{CollectionWhitelist, ResultSet};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// A raw key event from the input-binding layer.
#[derive(Debug, Clone)]
pub struct InputEvent {
    /// Numeric key code of the keystroke.
    pub code: u32,
    /// Full contents of the search box after the keystroke.
    pub buffer: String,
}

impl InputEvent {
    pub fn new(code: u32, buffer: impl Into<String>) -> Self {
        Self {
            code,
            buffer: buffer.into(),
        }
    }
}

/// A completed request, tagged with the generation that issued it.
#[derive(Debug)]
struct SearchResponse {
    generation: u64,
    result: Result<ResultSet, TransportError>,
}

/// Coordinates debounce timing, request issue, and rendering for one widget.
pub struct SearchCoordinator<T, P> {
    config: SearchConfig,
    whitelist: CollectionWhitelist,
    state: SearchState,
    transport: Arc<T>,
    presenter: P,
}

impl<T, P> SearchCoordinator<T, P>
where
    T: SearchTransport + Send + Sync + 'static,
    P: Presenter,
{
    pub fn new(config: SearchConfig, transport: T, presenter: P) -> Self {
        let whitelist = config.whitelist();
        let state = SearchState::new(config.min_query_length);
        Self {
            config,
            whitelist,
            state,
            transport: Arc::new(transport),
            presenter,
        }
    }

    /// The widget's search state, for inspection.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Drive the widget until the event channel closes.
    pub async fn run(&mut self, mut events: mpsc::Receiver<InputEvent>) {
        let (response_tx, mut responses) = mpsc::channel::<SearchResponse>(8);
        // At most one debounce timer is ever pending; a new keystroke
        // replaces the deadline wholesale (last keystroke wins).
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                maybe_event = events.recv() => {
                    match maybe_event {
                        Some(event) => {
                            if let Some(next) = self.on_key(&event) {
                                deadline = Some(next);
                            }
                        }
                        // Input layer is gone; the widget is being torn down.
                        None => break,
                    }
                }
                Some(response) = responses.recv() => {
                    self.on_response(response);
                }
                () = wait_until(deadline) => {
                    deadline = None;
                    self.on_debounce(&response_tx);
                }
            }
        }
    }

    /// Classify a keystroke; returns the new debounce deadline if it restarts.
    fn on_key(&mut self, event: &InputEvent) -> Option<Instant> {
        match self.state.keystroke(event.code, &event.buffer) {
            KeyOutcome::Ignored => {
                tracing::debug!(code = event.code, "ignored key press");
                None
            }
            KeyOutcome::RestartTimer => {
                tracing::debug!(
                    delay_ms = self.config.debounce_delay_ms,
                    "starting search countdown"
                );
                Some(Instant::now() + self.config.debounce_delay())
            }
        }
    }

    /// Evaluate the debounced query and, if it qualifies, issue a request.
    fn on_debounce(&mut self, response_tx: &mpsc::Sender<SearchResponse>) {
        match self.state.timer_fired() {
            FireOutcome::Cleared => {
                tracing::debug!(query = self.state.query(), "query below minimum, clearing results");
                self.render_current();
            }
            FireOutcome::AlreadyInFlight => {
                tracing::debug!("request already in flight, waiting for next keystroke");
            }
            FireOutcome::Issue { query, generation } => {
                tracing::info!(%query, generation, "issuing search request");
                self.presenter.set_searching(true);

                let transport = Arc::clone(&self.transport);
                let tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = transport.search(&query).await;
                    // A closed receiver means the widget is gone; nothing to deliver.
                    let _ = tx.send(SearchResponse { generation, result }).await;
                });
            }
        }
    }

    /// Apply a completed request.
    fn on_response(&mut self, response: SearchResponse) {
        // The busy indicator comes down however the request ended.
        self.presenter.set_searching(false);

        if let Err(error) = &response.result {
            tracing::warn!(%error, generation = response.generation, "search request failed");
        }

        match self.state.response(response.generation, response.result) {
            ResponseOutcome::Render => self.render_current(),
            ResponseOutcome::Discarded => {
                tracing::debug!(
                    generation = response.generation,
                    "discarding stale search response"
                );
            }
            // Already logged; transport failures are diagnostics only and
            // never surface to the end user.
            ResponseOutcome::Failed => {}
        }
    }

    /// Run the rendering pipeline over the current state and push the markup.
    fn render_current(&mut self) {
        let html = render::results_html(
            &self.config,
            &self.whitelist,
            self.state.query(),
            &self.state.last_results().items,
        );
        self.presenter.render(&html);
        self.presenter.reveal_if_hidden();
    }
}

/// Sleep until the deadline, or forever when no timer is pending.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
