pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, LoggingConfig, TmdbConfig, WatchlistConfig, DEFAULT_LANGUAGE, TMDB_BASE_URL};
pub use credentials::{CredentialStore, TMDB_API_KEY_ENV};
pub use paths::{PathManager, container_base_path};
