//! Client-local watchlist.
//!
//! Entries are keyed by (identifier, kind) and kept in insertion order. Every
//! effective mutation writes the whole table back to its storage slot before
//! returning. Storage failures never reach the caller: the in-memory table
//! stays authoritative for the session and `is_synced` reports the divergence.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_models::{CatalogId, CatalogItem, MediaKind, WatchlistEntry, WatchlistKey};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;

pub const DEFAULT_SLOT: &str = "watchlist";

struct WatchlistState {
    entries: Vec<WatchlistEntry>,
    index: HashSet<WatchlistKey>,
    synced: bool,
}

impl WatchlistState {
    fn from_entries(entries: Vec<WatchlistEntry>) -> Self {
        let index = entries.iter().map(WatchlistEntry::key).collect();
        Self {
            entries,
            index,
            synced: true,
        }
    }
}

pub struct WatchlistStore {
    store: Arc<dyn KeyValueStore>,
    slot: String,
    state: Mutex<WatchlistState>,
    revision: watch::Sender<u64>,
}

impl WatchlistStore {
    /// Load the table from `slot`. A missing, unreadable or corrupt slot
    /// yields an empty watchlist.
    pub fn initialize(store: Arc<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let entries = match store.get(&slot) {
            Ok(Some(raw)) => decode(&slot, &raw),
            Ok(None) => {
                debug!("No stored watchlist in slot {}, starting empty", slot);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read watchlist slot {}: {}. Starting empty.", slot, e);
                Vec::new()
            }
        };

        info!("Loaded watchlist: {} entries", entries.len());
        let (revision, _) = watch::channel(0);

        Self {
            store,
            slot,
            state: Mutex::new(WatchlistState::from_entries(entries)),
            revision,
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Add a snapshot of `item`. Returns false when the (identifier, kind)
    /// key is already present; the existing snapshot is kept.
    pub fn add(&self, item: CatalogItem) -> bool {
        let entry = WatchlistEntry::from_item(item);
        let key = entry.key();

        let mut state = self.state.lock();
        if !state.index.insert(key) {
            debug!("Watchlist already contains {} {}", key.kind, key.identifier);
            return false;
        }
        state.entries.push(entry);
        self.commit(&mut state);
        true
    }

    /// Remove the entry for (identifier, kind). Returns false when absent.
    pub fn remove(&self, identifier: CatalogId, kind: MediaKind) -> bool {
        let key = WatchlistKey::new(identifier, kind);

        let mut state = self.state.lock();
        if !state.index.remove(&key) {
            return false;
        }
        state.entries.retain(|e| e.key() != key);
        self.commit(&mut state);
        true
    }

    /// Add when absent, remove when present. Returns whether the item is on
    /// the watchlist afterwards.
    pub fn toggle(&self, item: CatalogItem) -> bool {
        let key = WatchlistKey::new(item.id(), item.kind());

        let mut state = self.state.lock();
        if state.index.remove(&key) {
            state.entries.retain(|e| e.key() != key);
            self.commit(&mut state);
            false
        } else {
            state.index.insert(key);
            state.entries.push(WatchlistEntry::from_item(item));
            self.commit(&mut state);
            true
        }
    }

    pub fn contains(&self, identifier: CatalogId, kind: MediaKind) -> bool {
        self.state
            .lock()
            .index
            .contains(&WatchlistKey::new(identifier, kind))
    }

    /// Owned copy of all entries in insertion order
    pub fn list(&self) -> Vec<WatchlistEntry> {
        self.state.lock().entries.clone()
    }

    pub fn list_by_kind(&self, kind: MediaKind) -> Vec<WatchlistEntry> {
        self.state
            .lock()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Returns the number removed.
    pub fn clear(&self) -> usize {
        let mut state = self.state.lock();
        let removed = state.entries.len();
        if removed == 0 {
            return 0;
        }
        state.entries.clear();
        state.index.clear();
        self.commit(&mut state);
        removed
    }

    /// False while the last write to storage failed
    pub fn is_synced(&self) -> bool {
        self.state.lock().synced
    }

    /// Revision counter that advances after every effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // Called with the lock held so writes land in mutation order.
    fn commit(&self, state: &mut WatchlistState) {
        state.synced = self.persist(&state.entries);
        self.revision.send_modify(|rev| *rev += 1);
    }

    fn persist(&self, entries: &[WatchlistEntry]) -> bool {
        let encoded = match serde_json::to_string(entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to serialize watchlist: {}", e);
                return false;
            }
        };

        match self.store.set(&self.slot, &encoded) {
            Ok(()) => {
                debug!("Persisted watchlist ({} entries)", entries.len());
                true
            }
            Err(e) => {
                warn!(
                    "Failed to persist watchlist to slot {}: {}. Changes are kept for this session only.",
                    self.slot, e
                );
                false
            }
        }
    }
}

/// Decode a stored table. Duplicate keys keep their first occurrence.
fn decode(slot: &str, raw: &str) -> Vec<WatchlistEntry> {
    let entries: Vec<WatchlistEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Stored watchlist in slot {} is corrupt: {}. Starting empty.", slot, e);
            return Vec::new();
        }
    };

    // The key must agree with the snapshot it stands for
    let (consistent, mismatched): (Vec<WatchlistEntry>, Vec<WatchlistEntry>) = entries
        .into_iter()
        .partition(|e| e.identifier == e.snapshot.id() && e.kind == e.snapshot.kind());
    for e in &mismatched {
        warn!(
            "Dropped watchlist entry {} ({}) from slot {}: snapshot is {} ({})",
            e.identifier,
            e.kind,
            slot,
            e.snapshot.id(),
            e.snapshot.kind()
        );
    }

    let mut seen = HashSet::with_capacity(consistent.len());
    let total = consistent.len();
    let deduped: Vec<WatchlistEntry> = consistent
        .into_iter()
        .filter(|e| seen.insert(e.key()))
        .collect();

    if deduped.len() < total {
        warn!(
            "Dropped {} duplicate watchlist entries from slot {}",
            total - deduped.len(),
            slot
        );
    }
    deduped
}
