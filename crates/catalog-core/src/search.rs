use std::str::FromStr;

use catalog_models::{CatalogItem, Paged};
use catalog_sources::{CatalogError, CatalogSource};
use thiserror::Error;
use tracing::{debug, warn};

/// Which kinds a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Films,
    Series,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search scope '{0}' (expected all, movies or tv)")]
pub struct ParseSearchScopeError(String);

impl FromStr for SearchScope {
    type Err = ParseSearchScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SearchScope::All),
            "movie" | "movies" | "film" | "films" => Ok(SearchScope::Films),
            "tv" | "series" | "show" | "shows" => Ok(SearchScope::Series),
            other => Err(ParseSearchScopeError(other.to_string())),
        }
    }
}

/// Search films, series or both.
///
/// `All` runs both searches concurrently and merges them by popularity,
/// highest first. When only one side fails the other side is returned; when
/// both fail the film search error is returned. A blank query returns an
/// empty page without touching the catalog.
pub async fn combined_search(
    source: &dyn CatalogSource,
    query: &str,
    page: u32,
    scope: SearchScope,
) -> Result<Paged<CatalogItem>, CatalogError> {
    let query = query.trim();
    if query.is_empty() {
        debug!("Empty search query, skipping catalog request");
        return Ok(Paged::empty());
    }

    match scope {
        SearchScope::Films => Ok(source.search_films(query, page).await?.map(CatalogItem::from)),
        SearchScope::Series => Ok(source.search_series(query, page).await?.map(CatalogItem::from)),
        SearchScope::All => {
            let (films, series) = futures::join!(
                source.search_films(query, page),
                source.search_series(query, page),
            );
            match (films, series) {
                (Ok(films), Ok(series)) => Ok(merge(
                    page,
                    films.map(CatalogItem::from),
                    series.map(CatalogItem::from),
                )),
                (Ok(films), Err(e)) => {
                    warn!("Series search for '{}' failed: {}", query, e);
                    Ok(films.map(CatalogItem::from))
                }
                (Err(e), Ok(series)) => {
                    warn!("Movie search for '{}' failed: {}", query, e);
                    Ok(series.map(CatalogItem::from))
                }
                (Err(films_err), Err(series_err)) => {
                    warn!("Series search for '{}' failed: {}", query, series_err);
                    Err(films_err)
                }
            }
        }
    }
}

fn merge(page: u32, films: Paged<CatalogItem>, series: Paged<CatalogItem>) -> Paged<CatalogItem> {
    let mut results = films.results;
    results.extend(series.results);
    results.sort_by(|a, b| b.popularity().total_cmp(&a.popularity()));

    Paged {
        page: page.max(1),
        results,
        total_pages: films.total_pages.max(series.total_pages),
        total_results: films.total_results + series.total_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{film_record, series_record, FakeCatalog};
    use catalog_models::MediaKind;

    fn catalog() -> FakeCatalog {
        FakeCatalog {
            films: vec![
                film_record(1, "Star Wars", 40.0),
                film_record(2, "Star Trek", 90.0),
                film_record(3, "Alien", 70.0),
            ],
            series: vec![
                series_record(10, "Star Trek: The Next Generation", 60.0),
                series_record(11, "The Wire", 80.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("movies".parse::<SearchScope>().unwrap(), SearchScope::Films);
        assert_eq!("TV".parse::<SearchScope>().unwrap(), SearchScope::Series);
        assert_eq!("all".parse::<SearchScope>().unwrap(), SearchScope::All);
        let err = "people".parse::<SearchScope>().unwrap_err();
        assert_eq!(err.to_string(), "unknown search scope 'people' (expected all, movies or tv)");
    }

    #[tokio::test]
    async fn test_all_scope_merges_by_popularity() {
        let source = catalog();
        let result = combined_search(&source, "star", 1, SearchScope::All).await.unwrap();

        let ids: Vec<u64> = result.results.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![2, 10, 1]);
        assert_eq!(result.total_results, 3);
        assert_eq!(result.total_pages, 3);
    }

    #[tokio::test]
    async fn test_single_scope_passes_through() {
        let source = catalog();
        let result = combined_search(&source, "star", 1, SearchScope::Series).await.unwrap();

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].kind(), MediaKind::Series);
        assert_eq!(source.request_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_query_skips_catalog() {
        let source = catalog();
        let result = combined_search(&source, "   ", 1, SearchScope::All).await.unwrap();

        assert!(result.results.is_empty());
        assert_eq!(result.total_results, 0);
        assert_eq!(source.request_count(), 0);
    }

    #[tokio::test]
    async fn test_one_failed_side_degrades() {
        let source = FakeCatalog {
            fail_series_search: true,
            ..catalog()
        };
        let result = combined_search(&source, "star", 1, SearchScope::All).await.unwrap();
        assert_eq!(result.results.len(), 2);
        assert!(result.results.iter().all(|i| i.kind() == MediaKind::Film));
    }

    #[tokio::test]
    async fn test_both_sides_failing_is_an_error() {
        let source = FakeCatalog {
            fail_film_search: true,
            fail_series_search: true,
            ..catalog()
        };
        assert!(combined_search(&source, "star", 1, SearchScope::All).await.is_err());
    }
}
