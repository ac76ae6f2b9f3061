use moneta_cache::CacheError;
use moneta_core::CacheKey;
use thiserror::Error;

/// Result alias for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Error type surfaced by the snapshot synchronizer.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A feed event contradicted the cached snapshot for a key. The
    /// snapshot has already been dropped; the owner should refetch.
    #[error("snapshots for {key:?} desynchronized: {source}")]
    Desynchronized {
        key: CacheKey,
        #[source]
        source: CacheError,
    },
}
