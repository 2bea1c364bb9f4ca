use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Catalog identifier. Films and series are numbered independently, so an id
/// is only unique together with its [`MediaKind`].
pub type CatalogId = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaKind {
    #[serde(rename = "movie")]
    Film,
    #[serde(rename = "tv")]
    Series,
}

impl MediaKind {
    /// Path segment the catalog uses for this kind (`/movie/{id}`, `/tv/{id}`)
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Film => "movie",
            MediaKind::Series => "tv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Film => "Movie",
            MediaKind::Series => "TV Show",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media kind '{0}' (expected movie or tv)")]
pub struct ParseMediaKindError(String);

impl FromStr for MediaKind {
    type Err = ParseMediaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" | "films" => Ok(MediaKind::Film),
            "tv" | "series" | "show" | "shows" => Ok(MediaKind::Series),
            other => Err(ParseMediaKindError(other.to_string())),
        }
    }
}

/// A film as returned by list, search and similar-titles endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Film {
    pub id: CatalogId,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

/// A TV series as returned by list, search and similar-titles endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub id: CatalogId,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
}

/// Either kind of catalog title.
///
/// Tagged by `media_type` the same way the catalog tags mixed-kind responses
/// (trending across kinds, multi search), so those decode directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type")]
pub enum CatalogItem {
    #[serde(rename = "movie")]
    Film(Film),
    #[serde(rename = "tv")]
    Series(Series),
}

impl CatalogItem {
    pub fn id(&self) -> CatalogId {
        match self {
            CatalogItem::Film(film) => film.id,
            CatalogItem::Series(series) => series.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            CatalogItem::Film(_) => MediaKind::Film,
            CatalogItem::Series(_) => MediaKind::Series,
        }
    }

    pub fn overview(&self) -> &str {
        match self {
            CatalogItem::Film(film) => &film.overview,
            CatalogItem::Series(series) => &series.overview,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            CatalogItem::Film(film) => film.poster_path.as_deref(),
            CatalogItem::Series(series) => series.poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            CatalogItem::Film(film) => film.backdrop_path.as_deref(),
            CatalogItem::Series(series) => series.backdrop_path.as_deref(),
        }
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            CatalogItem::Film(film) => film.vote_average,
            CatalogItem::Series(series) => series.vote_average,
        }
    }

    pub fn vote_count(&self) -> u64 {
        match self {
            CatalogItem::Film(film) => film.vote_count,
            CatalogItem::Series(series) => series.vote_count,
        }
    }

    pub fn popularity(&self) -> f64 {
        match self {
            CatalogItem::Film(film) => film.popularity,
            CatalogItem::Series(series) => series.popularity,
        }
    }
}

impl From<Film> for CatalogItem {
    fn from(film: Film) -> Self {
        CatalogItem::Film(film)
    }
}

impl From<Series> for CatalogItem {
    fn from(series: Series) -> Self {
        CatalogItem::Series(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serializes_as_catalog_tokens() {
        assert_eq!(serde_json::to_string(&MediaKind::Film).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&MediaKind::Series).unwrap(), "\"tv\"");
    }

    #[test]
    fn test_media_kind_from_str() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Film);
        assert_eq!("Series".parse::<MediaKind>().unwrap(), MediaKind::Series);
        assert_eq!(" tv ".parse::<MediaKind>().unwrap(), MediaKind::Series);
        let err = "person".parse::<MediaKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown media kind 'person' (expected movie or tv)");
    }

    #[test]
    fn test_film_decodes_with_missing_optional_fields() {
        let film: Film = serde_json::from_str(r#"{"id": 27205, "title": "Inception"}"#).unwrap();
        assert_eq!(film.id, 27205);
        assert_eq!(film.title, "Inception");
        assert!(film.poster_path.is_none());
        assert_eq!(film.vote_count, 0);
    }

    #[test]
    fn test_catalog_item_decodes_mixed_results() {
        let json = r#"[
            {"media_type": "movie", "id": 1, "title": "A Film", "popularity": 3.5},
            {"media_type": "tv", "id": 1, "name": "A Show", "first_air_date": ""}
        ]"#;
        let items: Vec<CatalogItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind(), MediaKind::Film);
        assert_eq!(items[1].kind(), MediaKind::Series);
        assert_eq!(items[0].id(), items[1].id());
        assert_eq!(items[0].popularity(), 3.5);
    }
}
