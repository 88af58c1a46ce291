//! Request-cycle state machine for presentation code.
//!
//! # Design
//! `RequestController` owns the single observable state cell of one
//! request cycle: `Idle -> Loading -> Succeeded | Failed`, re-entrant
//! from any non-loading state. The cell is a `tokio::sync::watch`
//! channel: only the controller writes it, any number of subscribers
//! read it. The controller is a plain owned value with no global
//! instance; whoever constructs it drops it.
//!
//! Overlapping invocations are resolved deterministically: every `run`
//! takes a monotonically increasing token, and a completion whose token
//! is no longer current is discarded, so the last-started call owns the
//! final state. Superseded calls are not aborted, only ignored.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::error::{ErrorKind, RequestError};

/// The observable phase of a request cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(Failure),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// A failed cycle, with the error category preserved for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub detail: String,
}

impl Failure {
    /// The fixed human-readable string for presentations that do not
    /// differentiate failure categories.
    pub fn user_message(&self) -> &'static str {
        "Failed to load data"
    }
}

impl From<RequestError> for Failure {
    fn from(err: RequestError) -> Self {
        Failure {
            kind: err.kind(),
            detail: err.detail().to_string(),
        }
    }
}

/// Drives [`RequestState`] transitions around one async call at a time.
#[derive(Debug)]
pub struct RequestController<T> {
    state: watch::Sender<RequestState<T>>,
    seq: AtomicU64,
}

impl<T: Clone> RequestController<T> {
    /// A fresh controller in `Idle`.
    pub fn new() -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            state,
            seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes. Every transition is observable through
    /// the receiver; the current value is readable immediately.
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    /// Run one request cycle: emit `Loading` synchronously, await the
    /// operation, then emit `Succeeded` or `Failed` — unless a later
    /// `run` started in the meantime, in which case the outcome is
    /// discarded.
    pub async fn run<F>(&self, operation: F)
    where
        F: Future<Output = Result<T, RequestError>>,
    {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(RequestState::Loading);

        let outcome = operation.await;

        if self.seq.load(Ordering::SeqCst) != token {
            debug!(token, "discarding outcome of superseded request");
            return;
        }

        let next = match outcome {
            Ok(payload) => RequestState::Succeeded(payload),
            Err(err) => {
                debug!(error = %err, "request cycle failed");
                RequestState::Failed(Failure::from(err))
            }
        };
        self.state.send_replace(next);
    }
}

impl<T: Clone> Default for RequestController<T> {
    fn default() -> Self {
        Self::new()
    }
}
