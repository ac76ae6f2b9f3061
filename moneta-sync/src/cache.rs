use std::collections::HashMap;
use std::sync::Arc;

use moneta_core::{CacheKey, Entry, Statistic};
use parking_lot::RwLock;

/// Query cache for one signed-in client: entry and statistic snapshots
/// keyed by ledger + month.
///
/// Reads hand out `Arc` clones of the current snapshot; writes replace
/// the whole snapshot. A reader holding a previous snapshot is never
/// affected by a later write, which is what makes the single-writer,
/// multiple-reader access pattern safe without further locking.
#[derive(Default)]
pub struct SnapshotCache {
    entries: RwLock<HashMap<CacheKey, Arc<[Entry]>>>,
    statistics: RwLock<HashMap<CacheKey, Arc<[Statistic]>>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entry snapshot for the key, if one has been fetched.
    pub fn entries(&self, key: &CacheKey) -> Option<Arc<[Entry]>> {
        self.entries.read().get(key).cloned()
    }

    /// Current statistic snapshot for the key, if one has been fetched.
    pub fn statistics(&self, key: &CacheKey) -> Option<Arc<[Statistic]>> {
        self.statistics.read().get(key).cloned()
    }

    /// Install an entry snapshot, replacing any previous one.
    pub fn put_entries(&self, key: CacheKey, entries: Vec<Entry>) {
        self.entries.write().insert(key, entries.into());
    }

    /// Install a statistic snapshot, replacing any previous one.
    pub fn put_statistics(&self, key: CacheKey, statistics: Vec<Statistic>) {
        self.statistics.write().insert(key, statistics.into());
    }

    /// Drop both snapshots for a key so the next read refetches.
    pub fn invalidate(&self, key: &CacheKey) {
        self.entries.write().remove(key);
        self.statistics.write().remove(key);
    }

    /// Drop every snapshot. Used when feed delivery gaps make all
    /// cached state suspect.
    pub fn clear(&self) {
        self.entries.write().clear();
        self.statistics.write().clear();
    }
}
