pub mod category;
pub mod error;
pub mod factory;
pub mod tmdb;
pub mod traits;

pub use category::{FilmCategory, ParseCategoryError, SeriesCategory, TimeWindow, TrendingScope};
pub use error::CatalogError;
pub use factory::create_tmdb_client;
pub use tmdb::TmdbClient;
pub use traits::CatalogSource;
