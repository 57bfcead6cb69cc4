//! Best-effort click telemetry recorder.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::ports::{CounterStore, StoreError};
use crate::domain::telemetry_event::{EventMeta, TelemetryEvent};

/// Key prefix for per-task click counters in the counter store.
pub const CLICK_COUNTER_PREFIX: &str = "telemetry.clicks.";

/// Returns the counter store key for a task name.
pub fn counter_key(task: &str) -> String {
    format!("{CLICK_COUNTER_PREFIX}{task}")
}

/// Failure modes of a single recording attempt.
///
/// Returned for introspection; callers are free to ignore the result. The
/// recorder itself never panics and never blocks on delivery.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("counter store failure: {0}")]
    Store(#[from] StoreError),
    #[error("telemetry queue full, event dropped")]
    QueueFull,
    #[error("telemetry queue closed, event dropped")]
    QueueClosed,
}

/// Records UI click events: a local counter bump plus a queued analytics event.
///
/// The two side effects are independent: a counter store failure does not
/// prevent the event from being queued, and a full queue does not roll back
/// the counter. Failures are reported in the returned [`TelemetryError`] and
/// logged, nothing more.
pub struct TelemetryService<S: CounterStore + ?Sized> {
    counters: Arc<S>,
    events: mpsc::Sender<TelemetryEvent>,
}

impl<S: CounterStore + ?Sized> TelemetryService<S> {
    /// Creates a new telemetry recorder.
    ///
    /// # Arguments
    ///
    /// - `counters` - store backing the per-task click counters
    /// - `events` - bounded channel drained by the analytics worker
    pub fn new(counters: Arc<S>, events: mpsc::Sender<TelemetryEvent>) -> Self {
        Self { counters, events }
    }

    /// Records one click for `task`.
    ///
    /// Bumps the counter at `telemetry.clicks.<task>` and enqueues a
    /// timestamped click event for asynchronous delivery. Always returns
    /// normally; the `Err` variant only reports which side effect failed.
    ///
    /// `task` is expected to be non-empty; HTTP callers enforce this at the
    /// DTO layer.
    pub fn record_click(
        &self,
        task: &str,
        meta: Option<EventMeta>,
    ) -> Result<(), TelemetryError> {
        let counted = self.bump_counter(task);
        if let Err(e) = &counted {
            tracing::warn!(task, error = %e, "click counter update failed");
        }

        let queued = self.enqueue_event(task, meta);
        if let Err(e) = &queued {
            tracing::debug!(task, error = %e, "telemetry event dropped");
        }

        counted.and(queued)
    }

    /// Reads, increments, and writes back the counter for `task`.
    ///
    /// The prior value defaults to 0 when absent or non-numeric. Get and set
    /// are separate store operations: overlapping recorders for the same task
    /// can interleave here and lose an increment (last write wins). Accepted
    /// best-effort behavior, kept in sync with the store contract.
    fn bump_counter(&self, task: &str) -> Result<u64, TelemetryError> {
        let key = counter_key(task);

        let prior = self
            .counters
            .get(&key)?
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);

        let next = prior.saturating_add(1);
        self.counters.set(&key, &next.to_string())?;

        Ok(next)
    }

    /// Builds the click event and hands it to the delivery queue.
    ///
    /// Non-blocking: a full or closed queue drops the event.
    fn enqueue_event(&self, task: &str, meta: Option<EventMeta>) -> Result<(), TelemetryError> {
        let event = TelemetryEvent::click(task, meta);

        self.events.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => TelemetryError::QueueFull,
            TrySendError::Closed(_) => TelemetryError::QueueClosed,
        })
    }

    /// Remaining capacity of the delivery queue, for health reporting.
    pub fn queue_capacity(&self) -> usize {
        self.events.capacity()
    }

    /// Whether the delivery queue has been closed (worker gone).
    pub fn queue_is_closed(&self) -> bool {
        self.events.is_closed()
    }
}
