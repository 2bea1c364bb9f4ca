use crate::media::{CatalogId, CatalogItem, Film, MediaKind, Series};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creator {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonSummary {
    pub id: u64,
    pub season_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// Full film record from `/movie/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilmDetails {
    #[serde(flatten)]
    pub film: Film,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

/// Full series record from `/tv/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesDetails {
    #[serde(flatten)]
    pub series: Series,
    /// Per-episode runtimes in minutes; often a single value, sometimes empty
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub number_of_episodes: u32,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type")]
pub enum TitleDetails {
    #[serde(rename = "movie")]
    Film(FilmDetails),
    #[serde(rename = "tv")]
    Series(SeriesDetails),
}

impl TitleDetails {
    pub fn id(&self) -> CatalogId {
        match self {
            TitleDetails::Film(details) => details.film.id,
            TitleDetails::Series(details) => details.series.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            TitleDetails::Film(_) => MediaKind::Film,
            TitleDetails::Series(_) => MediaKind::Series,
        }
    }

    /// The list-shaped record embedded in the details, suitable as a watchlist snapshot
    pub fn summary(&self) -> CatalogItem {
        match self {
            TitleDetails::Film(details) => CatalogItem::Film(details.film.clone()),
            TitleDetails::Series(details) => CatalogItem::Series(details.series.clone()),
        }
    }

    pub fn genres(&self) -> &[Genre] {
        match self {
            TitleDetails::Film(details) => &details.genres,
            TitleDetails::Series(details) => &details.genres,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            TitleDetails::Film(details) => details.status.as_deref(),
            TitleDetails::Series(details) => details.status.as_deref(),
        }
    }

    /// Tagline, treating the catalog's empty string as absent
    pub fn tagline(&self) -> Option<&str> {
        let tagline = match self {
            TitleDetails::Film(details) => details.tagline.as_deref(),
            TitleDetails::Series(details) => details.tagline.as_deref(),
        };
        tagline.filter(|t| !t.trim().is_empty())
    }
}
