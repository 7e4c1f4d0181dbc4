use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, VodostajError};
use crate::archive::Archive;
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::store::SnapshotStore;

/// Wires the pipeline together: config, snapshot store, capture archive,
/// fetcher and normalizer.
pub struct AppContext {
    pub config: Config,
    pub store: SnapshotStore,
    pub archive: Archive,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        url::Url::parse(&config.feed_url)?;

        let data_dir = Self::data_dir(&config)?;
        let state_dir = data_dir.join("state");
        std::fs::create_dir_all(&state_dir)?;

        let store = SnapshotStore::new(state_dir.join("last_state.json"));
        let archive = Archive::new(data_dir.join("history"));
        let normalizer = Normalizer::new();

        Ok(Self {
            config,
            store,
            archive,
            fetcher,
            normalizer,
        })
    }

    fn data_dir(config: &Config) -> Result<PathBuf> {
        if let Some(dir) = &config.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| VodostajError::Config("Could not find data directory".into()))?;
        Ok(base.join("vodostaj"))
    }
}
