use thiserror::Error;

/// Failure of a single catalog request. Nothing here is retried; callers
/// decide whether to render an empty state or give up.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No TMDB API key configured (set TMDB_API_KEY or run `reelshelf config api-key`)")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("TMDB rejected the API key (401)")]
    Unauthorized,

    #[error("Not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("TMDB API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
