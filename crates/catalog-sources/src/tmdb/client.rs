use std::time::Duration;

use async_trait::async_trait;
use catalog_models::{
    CatalogId, CatalogItem, Credits, Film, FilmDetails, MediaKind, Paged, Series, SeriesDetails,
    VideosResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api;
use crate::category::{FilmCategory, SeriesCategory, TimeWindow, TrendingScope};
use crate::error::CatalogError;
use crate::traits::CatalogSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, language: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_options(
            api_key,
            language,
            catalog_config::TMDB_BASE_URL,
            DEFAULT_TIMEOUT,
        )
    }

    pub fn with_options(
        api_key: impl Into<String>,
        language: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reelshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into();
        debug!("TMDB client ready ({})", base_url);

        Ok(Self {
            client,
            base_url,
            api_key,
            language: language.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, CatalogError> {
        api::get_json(&self.client, &self.base_url, &self.api_key, endpoint, params).await
    }

    async fn get_page<T: DeserializeOwned>(&self, endpoint: &str, page: u32) -> Result<Paged<T>, CatalogError> {
        self.get(endpoint, &api::page_params(&self.language, page)).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        kind: Option<MediaKind>,
        query: &str,
        page: u32,
    ) -> Result<Paged<T>, CatalogError> {
        let endpoint = api::search_path(kind);
        self.get(&endpoint, &api::search_params(&self.language, query, page)).await
    }

    /// Fetch a page of a single-kind endpoint and tag its results with that kind
    async fn get_tagged_page(
        &self,
        kind: MediaKind,
        endpoint: &str,
        page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError> {
        match kind {
            MediaKind::Film => Ok(self.get_page::<Film>(endpoint, page).await?.map(CatalogItem::from)),
            MediaKind::Series => Ok(self.get_page::<Series>(endpoint, page).await?.map(CatalogItem::from)),
        }
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    fn source_name(&self) -> &str {
        "tmdb"
    }

    async fn film_list(&self, category: FilmCategory, page: u32) -> Result<Paged<Film>, CatalogError> {
        self.get_page(category.path(), page).await
    }

    async fn series_list(&self, category: SeriesCategory, page: u32) -> Result<Paged<Series>, CatalogError> {
        self.get_page(category.path(), page).await
    }

    async fn trending(
        &self,
        scope: TrendingScope,
        window: TimeWindow,
        page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError> {
        let endpoint = api::trending_path(scope, window);
        match scope {
            TrendingScope::Films => self.get_tagged_page(MediaKind::Film, &endpoint, page).await,
            TrendingScope::Series => self.get_tagged_page(MediaKind::Series, &endpoint, page).await,
            TrendingScope::All => {
                let raw = self.get_page::<serde_json::Value>(&endpoint, page).await?;
                api::decode_mixed(&endpoint, raw)
            }
        }
    }

    async fn film_details(&self, id: CatalogId) -> Result<FilmDetails, CatalogError> {
        let endpoint = api::title_path(MediaKind::Film, id);
        self.get(&endpoint, &[("language", self.language.clone())]).await
    }

    async fn series_details(&self, id: CatalogId) -> Result<SeriesDetails, CatalogError> {
        let endpoint = api::title_path(MediaKind::Series, id);
        self.get(&endpoint, &[("language", self.language.clone())]).await
    }

    async fn credits(&self, kind: MediaKind, id: CatalogId) -> Result<Credits, CatalogError> {
        let endpoint = api::credits_path(kind, id);
        self.get(&endpoint, &[("language", self.language.clone())]).await
    }

    async fn videos(&self, kind: MediaKind, id: CatalogId) -> Result<VideosResponse, CatalogError> {
        let endpoint = api::videos_path(kind, id);
        self.get(&endpoint, &[("language", self.language.clone())]).await
    }

    async fn similar(
        &self,
        kind: MediaKind,
        id: CatalogId,
        page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError> {
        let endpoint = api::similar_path(kind, id);
        self.get_tagged_page(kind, &endpoint, page).await
    }

    async fn search_films(&self, query: &str, page: u32) -> Result<Paged<Film>, CatalogError> {
        self.search(Some(MediaKind::Film), query, page).await
    }

    async fn search_series(&self, query: &str, page: u32) -> Result<Paged<Series>, CatalogError> {
        self.search(Some(MediaKind::Series), query, page).await
    }

    async fn search_multi(&self, query: &str, page: u32) -> Result<Paged<CatalogItem>, CatalogError> {
        let endpoint = api::search_path(None);
        let raw = self.search::<serde_json::Value>(None, query, page).await?;
        api::decode_mixed(&endpoint, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    const KEY: &str = "test-key";

    type Params = Query<HashMap<String, String>>;

    fn unauthorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status_code": 7, "status_message": "Invalid API key"})),
        )
            .into_response()
    }

    fn has_key(params: &HashMap<String, String>) -> bool {
        params.get("api_key").map(String::as_str) == Some(KEY)
    }

    async fn popular_films(Query(params): Params) -> Response {
        if !has_key(&params) {
            return unauthorized();
        }
        let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let language = params.get("language").cloned();
        Json(json!({
            "page": page,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15", "vote_average": 8.4, "original_language": language},
                {"id": 157336, "title": "Interstellar", "release_date": "2014-11-05"}
            ],
            "total_pages": 3,
            "total_results": 60
        }))
        .into_response()
    }

    async fn trending_all(Query(params): Params) -> Response {
        if !has_key(&params) {
            return unauthorized();
        }
        Json(json!({
            "page": 1,
            "results": [
                {"media_type": "movie", "id": 27205, "title": "Inception"},
                {"media_type": "person", "id": 525, "name": "Christopher Nolan"},
                {"media_type": "tv", "id": 1399, "name": "Game of Thrones"}
            ],
            "total_pages": 1,
            "total_results": 3
        }))
        .into_response()
    }

    async fn film(Path(id): Path<u64>, Query(params): Params) -> Response {
        if !has_key(&params) {
            return unauthorized();
        }
        if id != 27205 {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"status_code": 34, "status_message": "The resource you requested could not be found."})),
            )
                .into_response();
        }
        Json(json!({
            "id": 27205,
            "title": "Inception",
            "runtime": 148,
            "genres": [{"id": 28, "name": "Action"}],
            "tagline": "Your mind is the scene of the crime.",
            "original_language": params.get("language")
        }))
        .into_response()
    }

    async fn similar_series(Path(_id): Path<u64>) -> Response {
        Json(json!({
            "page": 1,
            "results": [{"id": 1396, "name": "Breaking Bad"}],
            "total_pages": 1,
            "total_results": 1
        }))
        .into_response()
    }

    async fn broken_videos(Path(_id): Path<u64>) -> Response {
        Json(json!({"id": "not-a-number", "results": []})).into_response()
    }

    async fn search_tv(Query(params): Params) -> Response {
        let query = params.get("query").cloned().unwrap_or_default();
        let adult = params.get("include_adult").cloned().unwrap_or_default();
        Json(json!({
            "page": 1,
            "results": [{"id": 1, "name": format!("{}|{}", query, adult)}],
            "total_pages": 1,
            "total_results": 1
        }))
        .into_response()
    }

    async fn popular_series() -> Response {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status_code": 9, "status_message": "Service offline."})),
        )
            .into_response()
    }

    async fn spawn_fake_tmdb() -> String {
        let app = Router::new()
            .route("/movie/popular", get(popular_films))
            .route("/trending/all/day", get(trending_all))
            .route("/movie/:id", get(film))
            .route("/tv/:id/similar", get(similar_series))
            .route("/tv/:id/videos", get(broken_videos))
            .route("/search/tv", get(search_tv))
            .route("/tv/popular", get(popular_series));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: &str, key: &str) -> TmdbClient {
        TmdbClient::with_options(key, "en-US", base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let result = TmdbClient::new("  ", "en-US");
        assert!(matches!(result, Err(CatalogError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_film_list_passes_page_and_decodes() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let page = client.film_list(FilmCategory::Popular, 2).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "Inception");
        assert_eq!(page.results[0].original_language.as_deref(), Some("en-US"));
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn test_configured_language_is_sent() {
        let base = spawn_fake_tmdb().await;
        let client = TmdbClient::with_options(KEY, "de-DE", &base, Duration::from_secs(5)).unwrap();

        let page = client.film_list(FilmCategory::Popular, 1).await.unwrap();
        assert_eq!(page.results[0].original_language.as_deref(), Some("de-DE"));

        let details = client.film_details(27205).await.unwrap();
        assert_eq!(details.film.original_language.as_deref(), Some("de-DE"));
    }

    #[tokio::test]
    async fn test_bad_key_maps_to_unauthorized() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, "wrong");

        let err = client.film_list(FilmCategory::Popular, 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unauthorized));
    }

    #[tokio::test]
    async fn test_trending_all_drops_people() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let page = client
            .trending(TrendingScope::All, TimeWindow::Day, 1)
            .await
            .unwrap();
        let kinds: Vec<MediaKind> = page.results.iter().map(|i| i.kind()).collect();
        assert_eq!(kinds, vec![MediaKind::Film, MediaKind::Series]);
    }

    #[tokio::test]
    async fn test_details_and_not_found() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let details = client.film_details(27205).await.unwrap();
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.film.title, "Inception");
        assert_eq!(details.film.original_language.as_deref(), Some("en-US"));

        let via_kind = client.details(MediaKind::Film, 27205).await.unwrap();
        assert_eq!(via_kind.id(), 27205);

        let err = client.film_details(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_similar_results_are_tagged_with_requested_kind() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let page = client.similar(MediaKind::Series, 1399, 1).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].kind(), MediaKind::Series);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let err = client.videos(MediaKind::Series, 1399).await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_search_sends_query_and_excludes_adult() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let page = client.search_series("the wire", 1).await.unwrap();
        assert_eq!(page.results[0].name, "the wire|false");
    }

    #[tokio::test]
    async fn test_server_error_carries_status_message() {
        let base = spawn_fake_tmdb().await;
        let client = client_for(&base, KEY);

        let err = client.series_list(SeriesCategory::Popular, 1).await.unwrap_err();
        match err {
            CatalogError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service offline.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = client_for("http://127.0.0.1:9", KEY);
        let err = client.film_list(FilmCategory::Popular, 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
