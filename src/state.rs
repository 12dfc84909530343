//! The search-coordination state machine, free of timers and I/O.
//!
//! `SearchState` owns every flag the widget needs to neutralize stale
//! responses: the phase, the in-flight marker, the cancellation flag, and a
//! request generation counter. All transitions are synchronous methods that
//! return an explicit outcome; the async coordinator interprets those
//! outcomes against the transport and presenter.

use crate::error::TransportError;
use crate::input::{self, KeyClass};
use crate::query;
use crate::types::ResultSet;

/// Where the widget currently is in its search cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A keystroke landed and the debounce timer is counting down.
    Debouncing,
    /// A request has been issued and has not completed yet.
    Requesting,
}

/// Outcome of a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Modifier/navigation key; leave the timer alone.
    Ignored,
    /// Cancel any pending debounce timer and start a new one.
    RestartTimer,
}

/// Outcome of the debounce timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireOutcome {
    /// Query too short, or the box was emptied by a deletion: results are
    /// cleared and the empty-state banner should be rendered. Any in-flight
    /// request will still resolve but its results are now discarded.
    Cleared,
    /// A request is already in flight; nothing happens until the next
    /// keystroke (no auto-chaining).
    AlreadyInFlight,
    /// Issue a request for this sanitized query, tagged with `generation`.
    Issue { query: String, generation: u64 },
}

/// Outcome of a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Fresh results were stored; run the rendering pipeline.
    Render,
    /// The response was cancelled or superseded; nothing changes on screen.
    Discarded,
    /// The transport failed; diagnostics only, no user-visible change.
    Failed,
}

/// Per-widget search state. One instance per widget, owned by its
/// coordinator, never shared.
#[derive(Debug)]
pub struct SearchState {
    min_query_length: usize,
    phase: Phase,
    /// The debounced query, captured from the buffer when the timer fires.
    query: String,
    /// Latest search-box contents, updated on every qualifying keystroke.
    buffer: String,
    last_key_deletion: bool,
    in_flight: bool,
    cancelled: bool,
    generation: u64,
    last_results: ResultSet,
}

impl SearchState {
    pub fn new(min_query_length: usize) -> Self {
        Self {
            min_query_length,
            phase: Phase::Idle,
            query: String::new(),
            buffer: String::new(),
            last_key_deletion: false,
            in_flight: false,
            cancelled: false,
            generation: 0,
            last_results: ResultSet::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The query as of the last timer fire.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_results(&self) -> &ResultSet {
        &self.last_results
    }

    /// Record a keystroke and decide whether the debounce timer restarts.
    ///
    /// `buffer` is the full search-box contents after the keystroke; the
    /// latest snapshot stands in for "the value at the time the timer fired".
    pub fn keystroke(&mut self, code: u32, buffer: &str) -> KeyOutcome {
        match input::classify(code) {
            KeyClass::Ignored => KeyOutcome::Ignored,
            KeyClass::Qualifying { deletion } => {
                self.buffer = buffer.to_string();
                self.last_key_deletion = deletion;
                self.phase = Phase::Debouncing;
                KeyOutcome::RestartTimer
            }
        }
    }

    /// Evaluate the debounced query once the timer fires.
    pub fn timer_fired(&mut self) -> FireOutcome {
        self.query = self.buffer.clone();

        let too_short = self.query.trim().len() < self.min_query_length;
        let emptied = self.last_key_deletion && self.query.is_empty();
        if too_short || emptied {
            // In-flight requests still resolve; the flag makes them inert.
            self.cancelled = true;
            self.last_results = ResultSet::default();
            self.phase = Phase::Idle;
            return FireOutcome::Cleared;
        }

        if self.in_flight {
            self.phase = Phase::Idle;
            return FireOutcome::AlreadyInFlight;
        }

        // Cancellation is lifted only here, when a request actually starts.
        self.cancelled = false;
        self.in_flight = true;
        self.generation += 1;
        self.phase = Phase::Requesting;
        FireOutcome::Issue {
            query: query::sanitize(&self.query).into_owned(),
            generation: self.generation,
        }
    }

    /// Apply a completed request.
    ///
    /// The result is stored only when it succeeded, carries the current
    /// generation, and no cancellation intervened. The in-flight flag clears
    /// unconditionally.
    pub fn response(
        &mut self,
        generation: u64,
        result: Result<ResultSet, TransportError>,
    ) -> ResponseOutcome {
        self.in_flight = false;
        self.phase = Phase::Idle;

        match result {
            Ok(results) => {
                if self.cancelled || generation != self.generation {
                    ResponseOutcome::Discarded
                } else {
                    self.last_results = results;
                    ResponseOutcome::Render
                }
            }
            Err(_) => ResponseOutcome::Failed,
        }
    }
}
