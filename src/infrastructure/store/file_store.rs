//! File-backed counter store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{CounterStore, StoreError, StoreResult};

/// Counter store persisted as a JSON object on disk.
///
/// The whole map is held in memory and written back on every `set`, which is
/// proportionate to the workload: a handful of small counters, updated at
/// human click rates. Each operation takes the map lock on its own; a
/// get-then-set sequence composed by a caller is not atomic.
#[derive(Debug)]
pub struct FileCounterStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileCounterStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store; the file appears on first write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file exists but cannot be read and
    /// [`StoreError::Serialization`] when its contents are not a JSON string
    /// map. Callers typically fall back to the in-memory store on error.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Serialization(e.to_string()))?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, raw).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl CounterStore for FileCounterStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());

        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_STORE: AtomicU32 = AtomicU32::new(0);

    fn temp_store_path() -> PathBuf {
        let unique = NEXT_STORE.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "compliance-portal-store-{}-{unique}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_store_path();

        let store = FileCounterStore::open(&path).unwrap();

        assert_eq!(store.get("telemetry.clicks.signup").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let path = temp_store_path();
        let store = FileCounterStore::open(&path).unwrap();

        store.set("telemetry.clicks.signup", "3").unwrap();

        assert_eq!(
            store.get("telemetry.clicks.signup").unwrap(),
            Some("3".to_string())
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_store_path();

        {
            let store = FileCounterStore::open(&path).unwrap();
            store.set("telemetry.clicks.export", "7").unwrap();
        }

        let reopened = FileCounterStore::open(&path).unwrap();

        assert_eq!(
            reopened.get("telemetry.clicks.export").unwrap(),
            Some("7".to_string())
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_store_path();
        fs::write(&path, "not json at all").unwrap();

        let result = FileCounterStore::open(&path);

        assert!(matches!(
            result.unwrap_err(),
            StoreError::Serialization(_)
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let path = temp_store_path();
        let store = FileCounterStore::open(&path).unwrap();

        store.set("telemetry.clicks.signup", "1").unwrap();
        store.set("telemetry.clicks.signup", "2").unwrap();

        assert_eq!(
            store.get("telemetry.clicks.signup").unwrap(),
            Some("2".to_string())
        );

        let _ = fs::remove_file(&path);
    }
}
