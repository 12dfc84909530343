//! Shared fixtures for widget integration tests.
//!
//! # Test strategy
//!
//! Every test runs on tokio's paused clock (`start_paused = true`), so
//! debounce windows and slow transports are driven deterministically by
//! `tokio::time::sleep` in the test body: sleeping past a deadline runs the
//! coordinator's timer before the test resumes.
//!
//! [`Widget`] spawns a real coordinator over a [`MockTransport`] (scripted
//! responses, optional artificial latency) and a [`RecordingPresenter`]
//! whose call log stays inspectable from the test after the coordinator has
//! taken ownership of the presenter.

use docsearch::config::SearchConfig;
use docsearch::coordinator::{InputEvent, SearchCoordinator};
use docsearch::error::TransportError;
use docsearch::presenter::Presenter;
use docsearch::transport::SearchTransport;
use docsearch::types::{ArticleRecord, ResultSet};
use serde_json::json;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// One observed call against the presentation surface, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Variants matched across different tests
pub enum PresenterCall {
    Render(String),
    Searching(bool),
    Reveal,
}

/// Presenter that records every call for later inspection.
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, html: &str) {
        self.calls
            .lock()
            .expect("presenter log lock")
            .push(PresenterCall::Render(html.to_string()));
    }

    fn set_searching(&mut self, active: bool) {
        self.calls
            .lock()
            .expect("presenter log lock")
            .push(PresenterCall::Searching(active));
    }

    fn reveal_if_hidden(&mut self) {
        self.calls
            .lock()
            .expect("presenter log lock")
            .push(PresenterCall::Reveal);
    }
}

/// Read-side handle onto a [`RecordingPresenter`]'s call log.
pub struct PresenterLog(Arc<Mutex<Vec<PresenterCall>>>);

#[allow(dead_code)] // Accessors used across different tests
impl PresenterLog {
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.0.lock().expect("presenter log lock").clone()
    }

    /// Every rendered markup string, oldest first.
    pub fn renders(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Render(html) => Some(html),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<String> {
        self.renders().pop()
    }

    /// The busy-indicator toggles, in order.
    pub fn searching_toggles(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PresenterCall::Searching(active) => Some(active),
                _ => None,
            })
            .collect()
    }

    pub fn reveal_count(&self) -> usize {
        self.calls()
            .into_iter()
            .filter(|call| *call == PresenterCall::Reveal)
            .count()
    }
}

/// Scripted transport: pops one canned result per request, resolving after an
/// optional delay on the paused clock. An exhausted script yields empty
/// result sets.
pub struct MockTransport {
    delay: Duration,
    script: Mutex<VecDeque<Result<ResultSet, TransportError>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)] // Constructors used across different tests
impl MockTransport {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            script: Mutex::new(VecDeque::new()),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_ok(&self, results: ResultSet) {
        self.script
            .lock()
            .expect("transport script lock")
            .push_back(Ok(results));
    }

    pub fn push_err(&self, message: &str) {
        self.script
            .lock()
            .expect("transport script lock")
            .push_back(Err(TransportError::Request(message.to_string())));
    }

    fn queries_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.queries)
    }
}

impl SearchTransport for MockTransport {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<ResultSet, TransportError>> + Send {
        // Record the query at issue time, before any artificial latency.
        self.queries
            .lock()
            .expect("transport query lock")
            .push(query.to_string());
        let result = self
            .script
            .lock()
            .expect("transport script lock")
            .pop_front()
            .unwrap_or_else(|| Ok(ResultSet::default()));
        let delay = self.delay;

        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }
}

/// A spawned coordinator plus the handles the test pokes and inspects.
pub struct Widget {
    events: mpsc::Sender<InputEvent>,
    pub log: PresenterLog,
    queries: Arc<Mutex<Vec<String>>>,
    _task: JoinHandle<()>,
}

#[allow(dead_code)] // Helpers used across different tests
impl Widget {
    pub fn spawn(config: SearchConfig, transport: MockTransport) -> Self {
        let queries = transport.queries_handle();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let presenter = RecordingPresenter {
            calls: Arc::clone(&calls),
        };
        let (events_tx, events_rx) = mpsc::channel(32);

        let mut coordinator = SearchCoordinator::new(config, transport, presenter);
        let task = tokio::spawn(async move { coordinator.run(events_rx).await });

        Self {
            events: events_tx,
            log: PresenterLog(calls),
            queries,
            _task: task,
        }
    }

    /// Deliver one key event and let the coordinator process it.
    pub async fn key(&self, code: u32, buffer: &str) {
        self.events
            .send(InputEvent::new(code, buffer))
            .await
            .expect("coordinator alive");
        settle().await;
    }

    /// Type characters one keystroke at a time, growing the buffer. No time
    /// passes between keystrokes.
    pub async fn type_text(&self, text: &str) {
        let mut buffer = String::new();
        for ch in text.chars() {
            buffer.push(ch);
            self.key(key_code(ch), &buffer).await;
        }
    }

    /// Queries the transport has been asked to run, oldest first.
    pub fn issued_queries(&self) -> Vec<String> {
        self.queries.lock().expect("transport query lock").clone()
    }
}

/// Key code a browser would report for a typed character.
pub fn key_code(ch: char) -> u32 {
    ch.to_ascii_uppercase() as u32
}

/// Let the coordinator drain its queues without moving the clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// A deserialized article with the fields the default templates reference.
pub fn article(id: &str, collection: u64, name: &str) -> ArticleRecord {
    serde_json::from_value(json!({
        "id": id,
        "collectionId": collection,
        "name": name,
        "url": format!("https://docs.example.com/{id}"),
        "preview": format!("Preview of {name}."),
    }))
    .expect("valid article json")
}

pub fn result_set(items: Vec<ArticleRecord>) -> ResultSet {
    let total_available = items.len();
    ResultSet {
        items,
        total_available,
    }
}

/// Short debounce and a small minimum so tests stay readable.
pub fn test_config() -> SearchConfig {
    SearchConfig {
        min_query_length: 3,
        debounce_delay_ms: 100,
        result_limit: 10,
        ..SearchConfig::default()
    }
}
