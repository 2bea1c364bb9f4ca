use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistConfig {
    /// Storage slot holding the serialized watchlist
    #[serde(default = "default_watchlist_slot")]
    pub slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    TMDB_BASE_URL.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_watchlist_slot() -> String {
    "watchlist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            slot: default_watchlist_slot(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or fall back to defaults when it does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base_url = self.tmdb.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!("tmdb.base_url must be an http(s) URL, got '{}'", base_url));
        }

        if self.tmdb.language.trim().is_empty() {
            return Err(anyhow::anyhow!("tmdb.language cannot be empty"));
        }

        if self.tmdb.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("tmdb.timeout_seconds must be greater than zero"));
        }

        let slot = self.watchlist.slot.trim();
        if slot.is_empty() {
            return Err(anyhow::anyhow!("watchlist.slot cannot be empty"));
        }
        // The slot becomes a file name in the storage directory
        if !slot.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(anyhow::anyhow!(
                "watchlist.slot may only contain letters, digits, '-' and '_', got '{}'",
                slot
            ));
        }

        Ok(())
    }
}
