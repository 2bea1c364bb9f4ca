//! Request plumbing and endpoint paths for the TMDB v3 API.

use catalog_models::{CatalogId, CatalogItem, MediaKind, Paged};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::category::{TimeWindow, TrendingScope};
use crate::error::CatalogError;

pub type QueryParams = Vec<(&'static str, String)>;

/// Error body TMDB attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    status_message: Option<String>,
}

/// GET `endpoint` with the API key attached and decode the JSON body.
///
/// Only the endpoint path is logged; the full URL carries the key.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    api_key: &str,
    endpoint: &str,
    params: &[(&'static str, String)],
) -> Result<T, CatalogError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), endpoint);
    debug!("GET {}", endpoint);

    let response = client
        .get(&url)
        .query(&[("api_key", api_key)])
        .query(params)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Transport(e.without_url()))?;

    if !status.is_success() {
        warn!("TMDB request {} failed with status {}", endpoint, status);
        return Err(match status {
            StatusCode::UNAUTHORIZED => CatalogError::Unauthorized,
            StatusCode::NOT_FOUND => CatalogError::NotFound {
                endpoint: endpoint.to_string(),
            },
            _ => CatalogError::Status {
                status: status.as_u16(),
                message: status_message(&body),
            },
        });
    }

    serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn status_message(body: &str) -> String {
    serde_json::from_str::<ApiStatus>(body)
        .ok()
        .and_then(|s| s.status_message)
        .unwrap_or_else(|| body.trim().to_string())
}

pub fn page_params(language: &str, page: u32) -> QueryParams {
    vec![
        ("language", language.to_string()),
        ("page", page.max(1).to_string()),
    ]
}

pub fn search_params(language: &str, query: &str, page: u32) -> QueryParams {
    let mut params = page_params(language, page);
    params.push(("query", query.to_string()));
    params.push(("include_adult", "false".to_string()));
    params
}

pub fn trending_path(scope: TrendingScope, window: TimeWindow) -> String {
    format!("/trending/{}/{}", scope.path_segment(), window.path_segment())
}

pub fn title_path(kind: MediaKind, id: CatalogId) -> String {
    format!("/{}/{}", kind.path_segment(), id)
}

pub fn credits_path(kind: MediaKind, id: CatalogId) -> String {
    format!("{}/credits", title_path(kind, id))
}

pub fn videos_path(kind: MediaKind, id: CatalogId) -> String {
    format!("{}/videos", title_path(kind, id))
}

pub fn similar_path(kind: MediaKind, id: CatalogId) -> String {
    format!("{}/similar", title_path(kind, id))
}

pub fn search_path(kind: Option<MediaKind>) -> String {
    match kind {
        Some(kind) => format!("/search/{}", kind.path_segment()),
        None => "/search/multi".to_string(),
    }
}

/// Keep films and series from a mixed-kind page, dropping people and any
/// other result type.
pub fn decode_mixed(
    endpoint: &str,
    page: Paged<serde_json::Value>,
) -> Result<Paged<CatalogItem>, CatalogError> {
    let mut results = Vec::with_capacity(page.results.len());
    let mut dropped = 0usize;

    for value in page.results {
        match value.get("media_type").and_then(|t| t.as_str()) {
            Some("movie") | Some("tv") => {
                let item = serde_json::from_value(value).map_err(|source| CatalogError::Decode {
                    endpoint: endpoint.to_string(),
                    source,
                })?;
                results.push(item);
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Dropped {} non-title results from {}", dropped, endpoint);
    }

    Ok(Paged {
        page: page.page,
        results,
        total_pages: page.total_pages,
        total_results: page.total_results,
    })
}
