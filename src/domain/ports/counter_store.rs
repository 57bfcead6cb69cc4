//! Port for the client-local key-value store backing click counters.

use thiserror::Error;

/// Errors raised by counter store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(String),
    #[error("store serialization error: {0}")]
    Serialization(String),
}

/// Result type for counter store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous string key-value storage for per-task click counters.
///
/// Mirrors the contract of client-local storage: string keys, string values,
/// synchronous get/set. Counter semantics (parsing, incrementing, the
/// `telemetry.clicks.<task>` key scheme) live in
/// [`crate::application::services::TelemetryService`]; implementations only
/// move strings.
///
/// Individual operations must be internally consistent under concurrent use,
/// but implementations are NOT expected to make a get-then-set sequence
/// atomic. Callers composing read-modify-write from these primitives accept
/// last-write-wins behavior.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::FileCounterStore`] - JSON file persisted
///   across restarts
/// - [`crate::infrastructure::store::MemoryCounterStore`] - process-local map
///   for tests and storage-less deployments
#[cfg_attr(test, mockall::automock)]
pub trait CounterStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage is unavailable.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage is unavailable or the
    /// write cannot be persisted.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
