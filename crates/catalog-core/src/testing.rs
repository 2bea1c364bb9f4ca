//! In-memory catalog used by browse and search tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_models::{
    CatalogId, CatalogItem, Credits, Film, FilmDetails, MediaKind, Paged, Series, SeriesDetails,
    VideosResponse,
};
use catalog_sources::{
    CatalogError, CatalogSource, FilmCategory, SeriesCategory, TimeWindow, TrendingScope,
};
use serde_json::json;

pub fn film(id: CatalogId, title: &str, popularity: f64) -> CatalogItem {
    CatalogItem::Film(film_record(id, title, popularity))
}

pub fn series(id: CatalogId, name: &str, popularity: f64) -> CatalogItem {
    CatalogItem::Series(series_record(id, name, popularity))
}

pub fn film_record(id: CatalogId, title: &str, popularity: f64) -> Film {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "popularity": popularity,
        "release_date": "2010-07-15",
        "poster_path": "/poster.jpg"
    }))
    .unwrap()
}

pub fn series_record(id: CatalogId, name: &str, popularity: f64) -> Series {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "popularity": popularity,
        "first_air_date": "2011-04-17"
    }))
    .unwrap()
}

fn page<T>(results: Vec<T>) -> Paged<T> {
    let total = results.len() as u64;
    Paged {
        page: 1,
        results,
        total_pages: 1,
        total_results: total,
    }
}

fn server_error() -> CatalogError {
    CatalogError::Status {
        status: 500,
        message: "Internal error".to_string(),
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pub films: Vec<Film>,
    pub series: Vec<Series>,
    pub fail_series_lists: bool,
    pub fail_credits: bool,
    pub fail_film_search: bool,
    pub fail_series_search: bool,
    pub requests: AtomicUsize,
}

impl FakeCatalog {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }

    fn matching_films(&self, query: &str) -> Vec<Film> {
        let query = query.to_lowercase();
        self.films
            .iter()
            .filter(|f| f.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    fn matching_series(&self, query: &str) -> Vec<Series> {
        let query = query.to_lowercase();
        self.series
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn film_list(&self, _category: FilmCategory, _page: u32) -> Result<Paged<Film>, CatalogError> {
        self.hit();
        Ok(page(self.films.clone()))
    }

    async fn series_list(&self, _category: SeriesCategory, _page: u32) -> Result<Paged<Series>, CatalogError> {
        self.hit();
        if self.fail_series_lists {
            return Err(server_error());
        }
        Ok(page(self.series.clone()))
    }

    async fn trending(
        &self,
        scope: TrendingScope,
        _window: TimeWindow,
        _page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError> {
        self.hit();
        let films = self.films.iter().cloned().map(CatalogItem::from);
        let series = self.series.iter().cloned().map(CatalogItem::from);
        let results = match scope {
            TrendingScope::Films => films.collect(),
            TrendingScope::Series => series.collect(),
            TrendingScope::All => films.chain(series).collect(),
        };
        Ok(page(results))
    }

    async fn film_details(&self, id: CatalogId) -> Result<FilmDetails, CatalogError> {
        self.hit();
        let film = self
            .films
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| CatalogError::NotFound {
                endpoint: format!("/movie/{}", id),
            })?;
        let mut value = serde_json::to_value(film).unwrap();
        value["runtime"] = json!(148);
        value["tagline"] = json!("Your mind is the scene of the crime.");
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn series_details(&self, id: CatalogId) -> Result<SeriesDetails, CatalogError> {
        self.hit();
        let series = self
            .series
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::NotFound {
                endpoint: format!("/tv/{}", id),
            })?;
        let mut value = serde_json::to_value(series).unwrap();
        value["episode_run_time"] = json!([45, 42, 48]);
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn credits(&self, _kind: MediaKind, id: CatalogId) -> Result<Credits, CatalogError> {
        self.hit();
        if self.fail_credits {
            return Err(server_error());
        }
        Ok(serde_json::from_value(json!({
            "id": id,
            "cast": [
                {"id": 6193, "name": "Leonardo DiCaprio", "character": "Cobb"},
                {"id": 24045, "name": "Joseph Gordon-Levitt", "character": "Arthur"}
            ],
            "crew": [
                {"id": 525, "name": "Christopher Nolan", "job": "Director"},
                {"id": 947, "name": "Hans Zimmer", "job": "Original Music Composer"}
            ]
        }))
        .unwrap())
    }

    async fn videos(&self, _kind: MediaKind, id: CatalogId) -> Result<VideosResponse, CatalogError> {
        self.hit();
        Ok(serde_json::from_value(json!({
            "id": id,
            "results": [
                {"id": "a", "key": "teaser1", "name": "Teaser", "site": "YouTube", "type": "Teaser"},
                {"id": "b", "key": "vimeo1", "name": "Trailer", "site": "Vimeo", "type": "Trailer"},
                {"id": "c", "key": "YoHD9XEInc0", "name": "Official Trailer", "site": "YouTube", "type": "Trailer"}
            ]
        }))
        .unwrap())
    }

    async fn similar(
        &self,
        kind: MediaKind,
        id: CatalogId,
        _page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError> {
        self.hit();
        let results = match kind {
            MediaKind::Film => self
                .films
                .iter()
                .filter(|f| f.id != id)
                .cloned()
                .map(CatalogItem::from)
                .collect(),
            MediaKind::Series => self
                .series
                .iter()
                .filter(|s| s.id != id)
                .cloned()
                .map(CatalogItem::from)
                .collect(),
        };
        Ok(page(results))
    }

    async fn search_films(&self, query: &str, _page: u32) -> Result<Paged<Film>, CatalogError> {
        self.hit();
        if self.fail_film_search {
            return Err(server_error());
        }
        Ok(page(self.matching_films(query)))
    }

    async fn search_series(&self, query: &str, _page: u32) -> Result<Paged<Series>, CatalogError> {
        self.hit();
        if self.fail_series_search {
            return Err(server_error());
        }
        let mut result = page(self.matching_series(query));
        result.total_pages = 3;
        Ok(result)
    }

    async fn search_multi(&self, query: &str, _page: u32) -> Result<Paged<CatalogItem>, CatalogError> {
        self.hit();
        let films = self.matching_films(query).into_iter().map(CatalogItem::from);
        let series = self.matching_series(query).into_iter().map(CatalogItem::from);
        Ok(page(films.chain(series).collect()))
    }
}
