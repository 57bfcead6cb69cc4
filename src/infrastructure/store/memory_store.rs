//! In-memory counter store for tests and storage-less deployments.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::ports::{CounterStore, StoreResult};

/// A counter store backed by a process-local map.
///
/// Counters reset on restart. Used when no store path is configured or the
/// configured file cannot be opened.
pub struct MemoryCounterStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCounterStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        debug!("Using in-memory counter store (counters reset on restart)");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
