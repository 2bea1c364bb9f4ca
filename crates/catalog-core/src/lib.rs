pub mod browse;
pub mod presentation;
pub mod search;
pub mod storage;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod testing;

pub use browse::{load_title, HomeFeed, TitleView, HERO_SIZE};
pub use search::{combined_search, ParseSearchScopeError, SearchScope};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use watchlist::{WatchlistStore, DEFAULT_SLOT};
