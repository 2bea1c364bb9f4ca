use crate::media::{CatalogId, CatalogItem, MediaKind};
use serde::{Deserialize, Serialize};

/// Composite watchlist key. Film and series ids share one numeric space
/// in the catalog, so the kind is part of identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchlistKey {
    pub identifier: CatalogId,
    pub kind: MediaKind,
}

impl WatchlistKey {
    pub fn new(identifier: CatalogId, kind: MediaKind) -> Self {
        Self { identifier, kind }
    }
}

/// A saved title. `snapshot` is the catalog record as it was when added and
/// is never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub identifier: CatalogId,
    pub kind: MediaKind,
    pub snapshot: CatalogItem,
}

impl WatchlistEntry {
    pub fn from_item(item: CatalogItem) -> Self {
        Self {
            identifier: item.id(),
            kind: item.kind(),
            snapshot: item,
        }
    }

    pub fn key(&self) -> WatchlistKey {
        WatchlistKey::new(self.identifier, self.kind)
    }
}
