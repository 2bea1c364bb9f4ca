use std::time::Duration;

use catalog_config::{Config, CredentialStore};
use tracing::debug;

use crate::error::CatalogError;
use crate::tmdb::TmdbClient;

/// Build a TMDB client from configuration.
///
/// The API key comes from `TMDB_API_KEY` when set, otherwise from the
/// credential store.
pub fn create_tmdb_client(
    config: &Config,
    credentials: &CredentialStore,
) -> Result<TmdbClient, CatalogError> {
    let api_key = credentials
        .resolve_tmdb_api_key()
        .ok_or(CatalogError::MissingApiKey)?;

    debug!(
        "Creating TMDB client (base_url={}, language={})",
        config.tmdb.base_url, config.tmdb.language
    );

    TmdbClient::with_options(
        api_key,
        config.tmdb.language.clone(),
        config.tmdb.base_url.clone(),
        Duration::from_secs(config.tmdb.timeout_seconds),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_config::TMDB_API_KEY_ENV;
    use std::path::PathBuf;

    #[test]
    fn test_client_uses_configured_language_and_base_url() {
        let mut config = Config::default();
        config.tmdb.language = "de-DE".to_string();
        config.tmdb.base_url = "http://localhost:8080/3".to_string();

        let mut credentials = CredentialStore::new(PathBuf::from("/nonexistent/credentials.toml"));
        credentials.set_tmdb_api_key("stored-key".to_string());

        let client = create_tmdb_client(&config, &credentials).unwrap();
        assert_eq!(client.language(), "de-DE");
        assert_eq!(client.base_url(), "http://localhost:8080/3");
    }

    #[test]
    fn test_missing_key_is_reported() {
        if std::env::var(TMDB_API_KEY_ENV).is_ok() {
            return;
        }
        let credentials = CredentialStore::new(PathBuf::from("/nonexistent/credentials.toml"));
        let result = create_tmdb_client(&Config::default(), &credentials);
        assert!(matches!(result, Err(CatalogError::MissingApiKey)));
    }
}
