use std::sync::Arc;

use moneta_cache::{stats, store};
use moneta_core::{CacheKey, ChangeEvent, Entry};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::{FeedSubscription, SnapshotCache, SyncError, SyncResult};

/// Applies change feed events to the snapshot cache.
///
/// Holds no collection state of its own: each event reads the current
/// snapshot, computes the next one, and replaces it. An update may move
/// an entry between ledger/month keys, in which case the old key sees a
/// delete and the new key an insert. Keys without a cached snapshot are
/// skipped; the next fetch will observe backend truth directly.
pub struct Synchronizer {
    cache: Arc<SnapshotCache>,
}

impl Synchronizer {
    pub fn new(cache: Arc<SnapshotCache>) -> Self {
        Self { cache }
    }

    /// Apply one event to every cached snapshot it touches.
    ///
    /// On a cache error the affected key's snapshots are dropped so
    /// consumers refetch, and the error is surfaced to the caller.
    pub fn apply(&self, event: &ChangeEvent) -> SyncResult<()> {
        debug!(?event, "applying feed event");
        match event {
            ChangeEvent::Insert { new } => self.apply_insert(new),
            ChangeEvent::Delete { old } => self.apply_delete(old),
            ChangeEvent::Update { old, new } => {
                self.apply_delete(old)?;
                self.apply_insert(new)
            }
        }
    }

    /// Drive the synchronizer from a feed subscription until the feed
    /// closes.
    ///
    /// Desynchronized keys have already been invalidated by `apply`, so
    /// the loop keeps consuming. A lagged subscription has lost events
    /// for unknown keys, which makes every snapshot suspect; the whole
    /// cache is dropped.
    pub async fn run(&self, mut subscription: FeedSubscription) {
        loop {
            match subscription.recv().await {
                Ok(event) => {
                    if let Err(error) = self.apply(&event) {
                        warn!(%error, "feed event contradicted cached state");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "feed lagged, dropping all snapshots");
                    self.cache.clear();
                }
                Err(RecvError::Closed) => return,
            }
        }
    }

    fn apply_insert(&self, entry: &Entry) -> SyncResult<()> {
        let key = CacheKey::for_entry(entry);
        if let Some(snapshot) = self.cache.entries(&key) {
            match store::insert(&snapshot, entry.clone()) {
                Ok(next) => self.cache.put_entries(key, next),
                Err(source) => return Err(self.desync(key, source)),
            }
        }
        if let Some(snapshot) = self.cache.statistics(&key) {
            let next = stats::add_to_statistic(&snapshot, entry);
            self.cache.put_statistics(key, next);
        }
        Ok(())
    }

    fn apply_delete(&self, entry: &Entry) -> SyncResult<()> {
        let key = CacheKey::for_entry(entry);
        if let Some(snapshot) = self.cache.entries(&key) {
            match store::delete(&snapshot, entry) {
                Ok(next) => self.cache.put_entries(key, next),
                Err(source) => return Err(self.desync(key, source)),
            }
        }
        if let Some(snapshot) = self.cache.statistics(&key) {
            match stats::delete_from_statistic(&snapshot, entry) {
                Ok(next) => self.cache.put_statistics(key, next),
                Err(source) => return Err(self.desync(key, source)),
            }
        }
        Ok(())
    }

    fn desync(&self, key: CacheKey, source: moneta_cache::CacheError) -> SyncError {
        warn!(
            ledger = key.ledger,
            year = key.period.year,
            month = key.period.month,
            %source,
            "cache out of sync, dropping snapshots for refetch"
        );
        self.cache.invalidate(&key);
        SyncError::Desynchronized { key, source }
    }
}
