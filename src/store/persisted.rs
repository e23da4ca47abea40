use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app::Result;
use crate::store::Store;

/// One settings key with an in-memory write-through copy.
///
/// The in-memory value is the single source of truth for readers; every
/// `set` reaches durable storage before the copy is updated. Values are
/// stored JSON-encoded; a row that decodes is handed to consumers without
/// further shape validation.
pub struct PersistedValue<T> {
    store: Arc<dyn Store + Send + Sync>,
    key: String,
    value: T,
}

impl<T: Serialize + DeserializeOwned> PersistedValue<T> {
    /// Reads the stored value for `key`. Absent or undecodable rows fall
    /// back to `default`.
    pub fn open(
        store: Arc<dyn Store + Send + Sync>,
        key: impl Into<String>,
        default: T,
    ) -> Result<Self> {
        let key = key.into();
        let value = match store.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!("stored value for {} is unreadable ({}), using default", key, e);
                    default
                }
            },
            None => default,
        };

        Ok(Self { store, key, value })
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> Result<()> {
        let raw = serde_json::to_string(&value)?;
        self.store.set(&self.key, &raw)?;
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::sqlite::SqliteStore;
    use crate::store::SEARCH_TERM_KEY;

    fn store() -> Arc<SqliteStore> {
        Arc::new(SqliteStore::in_memory().unwrap())
    }

    #[test]
    fn test_default_when_storage_is_empty() {
        let term =
            PersistedValue::open(store(), SEARCH_TERM_KEY, "React".to_string()).unwrap();
        assert_eq!(term.get(), "React");
    }

    #[test]
    fn test_set_writes_through() {
        let store = store();

        let mut term =
            PersistedValue::open(store.clone(), SEARCH_TERM_KEY, "React".to_string()).unwrap();
        term.set("Vue".to_string()).unwrap();
        assert_eq!(term.get(), "Vue");

        // A fresh construction over the same storage sees the new value
        let term =
            PersistedValue::open(store, SEARCH_TERM_KEY, "React".to_string()).unwrap();
        assert_eq!(term.get(), "Vue");
    }

    #[test]
    fn test_unreadable_row_falls_back_to_default() {
        let store = store();
        store.set(SEARCH_TERM_KEY, "not json").unwrap();

        let term =
            PersistedValue::open(store, SEARCH_TERM_KEY, "React".to_string()).unwrap();
        assert_eq!(term.get(), "React");
    }

    #[test]
    fn test_survives_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("kindling.db");

        {
            let store = Arc::new(SqliteStore::new(&db_path).unwrap());
            let mut term =
                PersistedValue::open(store, SEARCH_TERM_KEY, "React".to_string()).unwrap();
            term.set("Vue".to_string()).unwrap();
        }

        let store = Arc::new(SqliteStore::new(&db_path).unwrap());
        let term = PersistedValue::open(store, SEARCH_TERM_KEY, "React".to_string()).unwrap();
        assert_eq!(term.get(), "Vue");
    }
}
