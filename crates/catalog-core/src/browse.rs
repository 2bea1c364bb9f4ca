//! Page loaders: the home feed and a single title page.

use catalog_models::{
    CastMember, CatalogId, CatalogItem, Credits, CrewMember, Film, MediaKind, Paged, Series,
    TitleDetails, Video,
};
use catalog_sources::{
    CatalogError, CatalogSource, FilmCategory, SeriesCategory, TimeWindow, TrendingScope,
};
use tracing::{debug, warn};

use crate::presentation;

/// Number of trending films featured at the top of the home feed
pub const HERO_SIZE: usize = 5;

pub type Section<T> = Result<Paged<T>, CatalogError>;

/// Home page sections. Each one is fetched independently and keeps its own
/// result, so a failed section renders as empty without affecting the rest.
#[derive(Debug)]
pub struct HomeFeed {
    pub trending: Section<CatalogItem>,
    pub popular_films: Section<Film>,
    pub top_rated_films: Section<Film>,
    pub upcoming_films: Section<Film>,
    pub popular_series: Section<Series>,
    pub top_rated_series: Section<Series>,
}

impl HomeFeed {
    pub async fn load(source: &dyn CatalogSource) -> Self {
        let (trending, popular_films, top_rated_films, upcoming_films, popular_series, top_rated_series) = futures::join!(
            source.trending(TrendingScope::Films, TimeWindow::Day, 1),
            source.film_list(FilmCategory::Popular, 1),
            source.film_list(FilmCategory::TopRated, 1),
            source.film_list(FilmCategory::Upcoming, 1),
            source.series_list(SeriesCategory::Popular, 1),
            source.series_list(SeriesCategory::TopRated, 1),
        );

        let feed = Self {
            trending,
            popular_films,
            top_rated_films,
            upcoming_films,
            popular_series,
            top_rated_series,
        };
        feed.log_failures();
        feed
    }

    /// First few trending films
    pub fn hero(&self) -> &[CatalogItem] {
        match &self.trending {
            Ok(page) => &page.results[..page.results.len().min(HERO_SIZE)],
            Err(_) => &[],
        }
    }

    pub fn failed_sections(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.trending.is_err() {
            failed.push("trending");
        }
        if self.popular_films.is_err() {
            failed.push("popular movies");
        }
        if self.top_rated_films.is_err() {
            failed.push("top rated movies");
        }
        if self.upcoming_films.is_err() {
            failed.push("upcoming movies");
        }
        if self.popular_series.is_err() {
            failed.push("popular tv");
        }
        if self.top_rated_series.is_err() {
            failed.push("top rated tv");
        }
        failed
    }

    fn log_failures(&self) {
        let sections: [(&str, Option<&CatalogError>); 6] = [
            ("trending", self.trending.as_ref().err()),
            ("popular movies", self.popular_films.as_ref().err()),
            ("top rated movies", self.top_rated_films.as_ref().err()),
            ("upcoming movies", self.upcoming_films.as_ref().err()),
            ("popular tv", self.popular_series.as_ref().err()),
            ("top rated tv", self.top_rated_series.as_ref().err()),
        ];
        for (name, err) in sections {
            if let Some(e) = err {
                warn!("Home section '{}' failed to load: {}", name, e);
            }
        }
    }
}

/// Everything a title page shows. Only `details` is required; the other
/// sections are empty when their request failed.
#[derive(Debug, Clone)]
pub struct TitleView {
    pub details: TitleDetails,
    pub credits: Option<Credits>,
    pub videos: Vec<Video>,
    pub similar: Vec<CatalogItem>,
}

impl TitleView {
    pub fn summary(&self) -> CatalogItem {
        self.details.summary()
    }

    pub fn trailer(&self) -> Option<&Video> {
        presentation::find_trailer(&self.videos)
    }

    pub fn directors(&self) -> Vec<&CrewMember> {
        self.credits
            .as_ref()
            .map(presentation::directors)
            .unwrap_or_default()
    }

    pub fn cast(&self, limit: usize) -> &[CastMember] {
        match &self.credits {
            Some(credits) => presentation::top_cast(credits, limit),
            None => &[],
        }
    }

    pub fn runtime(&self) -> Option<String> {
        presentation::title_runtime(&self.details)
    }
}

/// Load a title page. Fails only when the details request fails.
pub async fn load_title(
    source: &dyn CatalogSource,
    kind: MediaKind,
    id: CatalogId,
) -> Result<TitleView, CatalogError> {
    debug!("Loading {} {}", kind, id);
    let (details, credits, videos, similar) = futures::join!(
        source.details(kind, id),
        source.credits(kind, id),
        source.videos(kind, id),
        source.similar(kind, id, 1),
    );

    let details = details?;

    let credits = credits
        .map_err(|e| warn!("Credits for {} {} unavailable: {}", kind, id, e))
        .ok();
    let videos = videos
        .map(|v| v.results)
        .map_err(|e| warn!("Videos for {} {} unavailable: {}", kind, id, e))
        .unwrap_or_default();
    let similar = similar
        .map(|p| p.results)
        .map_err(|e| warn!("Similar titles for {} {} unavailable: {}", kind, id, e))
        .unwrap_or_default();

    Ok(TitleView {
        details,
        credits,
        videos,
        similar,
    })
}
