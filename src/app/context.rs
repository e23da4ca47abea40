use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::app::error::{KindlingError, Result};
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::SearchFetcher;
use crate::store::sqlite::SqliteStore;
use crate::store::{PersistedValue, SEARCH_TERM_KEY};

pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub fetcher: Arc<dyn SearchFetcher + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let fetcher: Arc<dyn SearchFetcher + Send + Sync> = Arc::new(HttpFetcher::with_timeout(
            Duration::from_secs(config.http.timeout_secs),
        ));

        Ok(Self {
            store,
            fetcher,
            config,
        })
    }

    pub fn in_memory() -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let fetcher: Arc<dyn SearchFetcher + Send + Sync> = Arc::new(HttpFetcher::new());

        Ok(Self {
            store,
            fetcher,
            config: Config::default(),
        })
    }

    /// The persisted search term backed by this context's store.
    pub fn search_term(&self) -> Result<PersistedValue<String>> {
        PersistedValue::open(
            self.store.clone(),
            SEARCH_TERM_KEY,
            self.config.search.default_term.clone(),
        )
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| KindlingError::Config("Could not find data directory".into()))?;
        let kindling_dir = data_dir.join("kindling");
        std::fs::create_dir_all(&kindling_dir)?;
        Ok(kindling_dir.join("kindling.db"))
    }
}
