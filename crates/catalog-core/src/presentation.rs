//! Display helpers over catalog records. Everything here is pure.

use std::fmt;

use catalog_models::{
    CastMember, CatalogItem, Credits, CrewMember, SeasonSummary, SeriesDetails, TitleDetails, Video,
};
use chrono::{Datelike, NaiveDate};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Cast members shown on a title page
pub const DEFAULT_CAST_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W185,
    W300,
    W500,
    Original,
}

impl ImageSize {
    pub fn token(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

pub fn display_title(item: &CatalogItem) -> &str {
    match item {
        CatalogItem::Film(film) => &film.title,
        CatalogItem::Series(series) => &series.name,
    }
}

/// Release date for films, first air date for series. Empty strings count
/// as absent.
pub fn display_date(item: &CatalogItem) -> Option<&str> {
    let date = match item {
        CatalogItem::Film(film) => film.release_date.as_deref(),
        CatalogItem::Series(series) => series.first_air_date.as_deref(),
    };
    date.map(str::trim).filter(|d| !d.is_empty())
}

pub fn display_year(item: &CatalogItem) -> Option<i32> {
    display_date(item).and_then(parse_year)
}

fn parse_year(date: &str) -> Option<i32> {
    if let Some(parsed) = parse_date(date) {
        return Some(parsed.year());
    }
    // Partial dates ("2021", "2021-07") still carry a year
    let date = date.trim();
    let shaped = date
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 4 { b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return None;
    }
    match date.len() {
        4 => date.parse().ok(),
        7 => NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
            .ok()
            .map(|d| d.year()),
        _ => None,
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// "2021-07-09" -> "July 9, 2021"
pub fn format_long_date(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%B %-d, %Y").to_string())
}

/// 95 -> "1h 35m"
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Per-episode runtimes are floor-averaged before formatting.
pub fn format_episode_runtime(runtimes: &[u32]) -> Option<String> {
    if runtimes.is_empty() {
        return None;
    }
    let total: u64 = runtimes.iter().map(|&m| u64::from(m)).sum();
    let average = total / runtimes.len() as u64;
    Some(format_runtime(u32::try_from(average).unwrap_or(u32::MAX)))
}

/// Runtime line for a title page, `None` when the catalog has no runtime
pub fn title_runtime(details: &TitleDetails) -> Option<String> {
    match details {
        TitleDetails::Film(film) => film.runtime.filter(|&m| m > 0).map(format_runtime),
        TitleDetails::Series(series) => format_episode_runtime(&series.episode_run_time),
    }
}

/// 7.456 -> "7.5"
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, size.token(), path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

pub fn poster_url(path: Option<&str>) -> String {
    image_url(path, ImageSize::W500)
}

pub fn backdrop_url(path: Option<&str>) -> String {
    image_url(path, ImageSize::Original)
}

pub fn profile_url(path: Option<&str>) -> String {
    image_url(path, ImageSize::W185)
}

/// First YouTube video typed as a trailer
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
}

pub fn trailer_url(video: &Video) -> String {
    format!("{}{}", YOUTUBE_WATCH_URL, video.key)
}

pub fn directors(credits: &Credits) -> Vec<&CrewMember> {
    credits
        .crew
        .iter()
        .filter(|c| c.job.as_deref() == Some("Director"))
        .collect()
}

pub fn top_cast(credits: &Credits, limit: usize) -> &[CastMember] {
    &credits.cast[..credits.cast.len().min(limit)]
}

pub fn creators(series: &SeriesDetails) -> Vec<&str> {
    series.created_by.iter().map(|c| c.name.as_str()).collect()
}

/// Seasons in broadcast order, without the "Specials" season 0
pub fn regular_seasons(series: &SeriesDetails) -> Vec<&SeasonSummary> {
    let mut seasons: Vec<&SeasonSummary> = series
        .seasons
        .iter()
        .filter(|s| s.season_number > 0)
        .collect();
    seasons.sort_by_key(|s| s.season_number);
    seasons
}

pub fn season_year(season: &SeasonSummary) -> Option<i32> {
    season
        .air_date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(parse_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{film, series};
    use serde_json::json;

    fn video(key: &str, site: &str, kind: &str) -> Video {
        serde_json::from_value(json!({"id": key, "key": key, "name": key, "site": site, "type": kind}))
            .unwrap()
    }

    #[test]
    fn test_title_and_date_by_kind() {
        let inception = film(27205, "Inception", 1.0);
        assert_eq!(display_title(&inception), "Inception");
        assert_eq!(display_date(&inception), Some("2010-07-15"));

        let got = series(1399, "Game of Thrones", 1.0);
        assert_eq!(display_title(&got), "Game of Thrones");
        assert_eq!(display_year(&got), Some(2011));
    }

    #[test]
    fn test_display_year() {
        let released: CatalogItem = serde_json::from_value(json!({
            "media_type": "movie", "id": 1, "title": "X", "release_date": "2021-07-09"
        }))
        .unwrap();
        assert_eq!(display_year(&released), Some(2021));

        let unaired: CatalogItem = serde_json::from_value(json!({
            "media_type": "tv", "id": 2, "name": "Y", "first_air_date": ""
        }))
        .unwrap();
        assert_eq!(display_date(&unaired), None);
        assert_eq!(display_year(&unaired), None);

        let missing: CatalogItem =
            serde_json::from_value(json!({"media_type": "movie", "id": 3, "title": "Z"})).unwrap();
        assert_eq!(display_year(&missing), None);

        assert_eq!(parse_year("2021"), Some(2021));
        assert_eq!(parse_year("2021-07"), Some(2021));
        assert_eq!(parse_year("soon"), None);
        assert_eq!(parse_year("20211"), None);
        assert_eq!(parse_year("2021-13"), None);
        assert_eq!(parse_year("2021-13-45"), None);
        assert_eq!(parse_year("2021-garbage"), None);
        assert_eq!(parse_year("2021-"), None);

        let malformed: CatalogItem = serde_json::from_value(json!({
            "media_type": "movie", "id": 4, "title": "W", "release_date": "2021-13-45"
        }))
        .unwrap();
        assert_eq!(display_year(&malformed), None);
    }

    #[test]
    fn test_series_creators_and_seasons() {
        let details: SeriesDetails = serde_json::from_value(json!({
            "id": 1399,
            "name": "Game of Thrones",
            "created_by": [
                {"id": 9813, "name": "David Benioff"},
                {"id": 228068, "name": "D. B. Weiss"}
            ],
            "seasons": [
                {"id": 3627, "season_number": 0, "name": "Specials", "episode_count": 14},
                {"id": 3625, "season_number": 2, "name": "Season 2", "episode_count": 10, "air_date": "2012-04-01"},
                {"id": 3624, "season_number": 1, "name": "Season 1", "episode_count": 10, "air_date": "2011-04-17"},
                {"id": 3626, "season_number": 3, "name": "Season 3", "episode_count": 10, "air_date": ""}
            ]
        }))
        .unwrap();

        assert_eq!(creators(&details), vec!["David Benioff", "D. B. Weiss"]);

        let seasons = regular_seasons(&details);
        let names: Vec<&str> = seasons.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Season 1", "Season 2", "Season 3"]);
        assert_eq!(season_year(seasons[0]), Some(2011));
        assert_eq!(season_year(seasons[2]), None);
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(95), "1h 35m");
        assert_eq!(format_runtime(45), "0h 45m");
        assert_eq!(format_runtime(120), "2h 0m");
    }

    #[test]
    fn test_episode_runtime_is_floor_average() {
        assert_eq!(format_episode_runtime(&[45, 42, 48]).as_deref(), Some("0h 45m"));
        assert_eq!(format_episode_runtime(&[30, 31]).as_deref(), Some("0h 30m"));
        assert_eq!(format_episode_runtime(&[95]), Some(format_runtime(95)));
        assert_eq!(format_episode_runtime(&[]), None);
    }

    #[test]
    fn test_long_date_and_rating() {
        assert_eq!(format_long_date("2021-07-09").as_deref(), Some("July 9, 2021"));
        assert_eq!(format_long_date("not a date"), None);
        assert_eq!(format_rating(7.456), "7.5");
        assert_eq!(format_rating(0.0), "0.0");
    }

    #[test]
    fn test_image_urls() {
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            backdrop_url(Some("/bd.jpg")),
            "https://image.tmdb.org/t/p/original/bd.jpg"
        );
        assert_eq!(profile_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(Some(""), ImageSize::W300), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_find_trailer_requires_youtube_trailer() {
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("vimeo", "Vimeo", "Trailer"),
            video("yt", "YouTube", "Trailer"),
        ];
        let trailer = find_trailer(&videos).unwrap();
        assert_eq!(trailer.key, "yt");
        assert_eq!(trailer_url(trailer), "https://www.youtube.com/watch?v=yt");

        assert!(find_trailer(&videos[..2]).is_none());
    }

    #[test]
    fn test_credits_helpers() {
        let cast: Vec<serde_json::Value> = (0..15)
            .map(|i| json!({"id": i, "name": format!("Actor {}", i)}))
            .collect();
        let credits: Credits = serde_json::from_value(json!({
            "id": 1,
            "cast": cast,
            "crew": [
                {"id": 100, "name": "Lana", "job": "Director"},
                {"id": 101, "name": "Lilly", "job": "Director"},
                {"id": 102, "name": "Writer", "job": "Screenplay"}
            ]
        }))
        .unwrap();

        let names: Vec<&str> = directors(&credits).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lana", "Lilly"]);
        assert_eq!(top_cast(&credits, DEFAULT_CAST_LIMIT).len(), 10);
        assert_eq!(top_cast(&credits, 50).len(), 15);
    }
}
