use thiserror::Error;

/// Result alias for cache reconciliation operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Error type surfaced by cache reconciliation operations.
///
/// Every variant signals that the local cache has drifted from the
/// backend; the expected caller response is a full refetch of the
/// affected query key, not local repair.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The feed asked to remove or relocate an entry the store never held.
    #[error("entry {id} not found in a store of {store_len} entries")]
    EntryNotFound { id: i64, store_len: usize },
    /// The feed redelivered an insert for an id the store already holds.
    #[error("entry {id} is already present")]
    DuplicateEntry { id: i64 },
    /// An entry was removed whose bucket was never aggregated.
    #[error("no statistic row for category {category:?} (is_positive: {is_positive})")]
    StatisticNotFound { category: String, is_positive: bool },
}
