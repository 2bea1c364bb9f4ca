use std::sync::{Arc, OnceLock};

use catalog_config::{Config, CredentialStore, PathManager};
use catalog_core::{FileStore, KeyValueStore, WatchlistStore};
use catalog_sources::{create_tmdb_client, TmdbClient};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::debug;

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
    watchlist: OnceLock<Arc<WatchlistStore>>,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        Self::load_from(PathManager::default())
    }

    pub fn load_from(paths: PathManager) -> Result<Self> {
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config
            .validate()
            .map_err(|e| eyre!("Invalid config in {}: {}", config_file.display(), e))?;
        debug!("Using config directory {}", paths.config_dir().display());
        Ok(Self {
            paths,
            config,
            watchlist: OnceLock::new(),
        })
    }

    pub fn credentials(&self) -> Result<CredentialStore> {
        let mut store = CredentialStore::new(self.paths.credentials_file());
        store
            .load()
            .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
        Ok(store)
    }

    pub fn catalog(&self) -> Result<TmdbClient> {
        let credentials = self.credentials()?;
        create_tmdb_client(&self.config, &credentials).map_err(|e| eyre!("{}", e))
    }

    /// File-backed watchlist in the configured storage slot, loaded once per process
    pub fn watchlist(&self) -> Arc<WatchlistStore> {
        self.watchlist
            .get_or_init(|| {
                let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::for_paths(&self.paths));
                Arc::new(WatchlistStore::initialize(
                    store,
                    self.config.watchlist.slot.clone(),
                ))
            })
            .clone()
    }
}
