pub mod persisted;
pub mod sqlite;

use crate::app::Result;

pub use persisted::PersistedValue;
pub use sqlite::SqliteStore;

/// Storage key for the last search term.
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// Key/value persistence for small settings.
///
/// One writer per key is expected; there is no cross-process sync.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
