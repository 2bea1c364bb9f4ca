use async_trait::async_trait;
use catalog_models::{
    CatalogId, CatalogItem, Credits, Film, FilmDetails, MediaKind, Paged, Series, SeriesDetails,
    TitleDetails, VideosResponse,
};

use crate::category::{FilmCategory, SeriesCategory, TimeWindow, TrendingScope};
use crate::error::CatalogError;

/// Read-only access to a film/series catalog.
///
/// Every call is a single request; results are never cached here.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    // Lists
    async fn film_list(&self, category: FilmCategory, page: u32) -> Result<Paged<Film>, CatalogError>;
    async fn series_list(&self, category: SeriesCategory, page: u32) -> Result<Paged<Series>, CatalogError>;
    async fn trending(
        &self,
        scope: TrendingScope,
        window: TimeWindow,
        page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError>;

    // Single title
    async fn film_details(&self, id: CatalogId) -> Result<FilmDetails, CatalogError>;
    async fn series_details(&self, id: CatalogId) -> Result<SeriesDetails, CatalogError>;
    async fn credits(&self, kind: MediaKind, id: CatalogId) -> Result<Credits, CatalogError>;
    async fn videos(&self, kind: MediaKind, id: CatalogId) -> Result<VideosResponse, CatalogError>;
    async fn similar(
        &self,
        kind: MediaKind,
        id: CatalogId,
        page: u32,
    ) -> Result<Paged<CatalogItem>, CatalogError>;

    /// Details for either kind
    async fn details(&self, kind: MediaKind, id: CatalogId) -> Result<TitleDetails, CatalogError> {
        match kind {
            MediaKind::Film => self.film_details(id).await.map(TitleDetails::Film),
            MediaKind::Series => self.series_details(id).await.map(TitleDetails::Series),
        }
    }

    // Search
    async fn search_films(&self, query: &str, page: u32) -> Result<Paged<Film>, CatalogError>;
    async fn search_series(&self, query: &str, page: u32) -> Result<Paged<Series>, CatalogError>;
    /// Mixed search; people are dropped from the results
    async fn search_multi(&self, query: &str, page: u32) -> Result<Paged<CatalogItem>, CatalogError>;
}
