use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

/// Curated film lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmCategory {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl FilmCategory {
    pub const ALL: [FilmCategory; 4] = [
        FilmCategory::Popular,
        FilmCategory::TopRated,
        FilmCategory::Upcoming,
        FilmCategory::NowPlaying,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            FilmCategory::Popular => "/movie/popular",
            FilmCategory::TopRated => "/movie/top_rated",
            FilmCategory::Upcoming => "/movie/upcoming",
            FilmCategory::NowPlaying => "/movie/now_playing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilmCategory::Popular => "Popular Movies",
            FilmCategory::TopRated => "Top Rated Movies",
            FilmCategory::Upcoming => "Upcoming Movies",
            FilmCategory::NowPlaying => "Now Playing",
        }
    }
}

impl FromStr for FilmCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "popular" => Ok(FilmCategory::Popular),
            "top-rated" => Ok(FilmCategory::TopRated),
            "upcoming" => Ok(FilmCategory::Upcoming),
            "now-playing" => Ok(FilmCategory::NowPlaying),
            _ => Err(ParseCategoryError {
                kind: "movie category",
                value: s.to_string(),
                expected: "popular, top-rated, upcoming, now-playing",
            }),
        }
    }
}

/// Curated series lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesCategory {
    Popular,
    TopRated,
    OnTheAir,
    AiringToday,
}

impl SeriesCategory {
    pub const ALL: [SeriesCategory; 4] = [
        SeriesCategory::Popular,
        SeriesCategory::TopRated,
        SeriesCategory::OnTheAir,
        SeriesCategory::AiringToday,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SeriesCategory::Popular => "/tv/popular",
            SeriesCategory::TopRated => "/tv/top_rated",
            SeriesCategory::OnTheAir => "/tv/on_the_air",
            SeriesCategory::AiringToday => "/tv/airing_today",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SeriesCategory::Popular => "Popular TV Shows",
            SeriesCategory::TopRated => "Top Rated TV Shows",
            SeriesCategory::OnTheAir => "On The Air",
            SeriesCategory::AiringToday => "Airing Today",
        }
    }
}

impl FromStr for SeriesCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "popular" => Ok(SeriesCategory::Popular),
            "top-rated" => Ok(SeriesCategory::TopRated),
            "on-the-air" => Ok(SeriesCategory::OnTheAir),
            "airing-today" => Ok(SeriesCategory::AiringToday),
            _ => Err(ParseCategoryError {
                kind: "tv category",
                value: s.to_string(),
                expected: "popular, top-rated, on-the-air, airing-today",
            }),
        }
    }
}

/// Which kinds a trending query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendingScope {
    All,
    Films,
    Series,
}

impl TrendingScope {
    pub fn path_segment(&self) -> &'static str {
        match self {
            TrendingScope::All => "all",
            TrendingScope::Films => "movie",
            TrendingScope::Series => "tv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    pub fn path_segment(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "day" | "today" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            _ => Err(ParseCategoryError {
                kind: "time window",
                value: s.to_string(),
                expected: "day, week",
            }),
        }
    }
}
