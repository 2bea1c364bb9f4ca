pub mod credits;
pub mod details;
pub mod media;
pub mod paged;
pub mod video;
pub mod watchlist;

pub use credits::{CastMember, Credits, CrewMember};
pub use details::{
    Creator, FilmDetails, Genre, Network, ProductionCompany, SeasonSummary, SeriesDetails,
    TitleDetails,
};
pub use media::{CatalogId, CatalogItem, Film, MediaKind, ParseMediaKindError, Series};
pub use paged::Paged;
pub use video::{Video, VideosResponse};
pub use watchlist::{WatchlistEntry, WatchlistKey};
