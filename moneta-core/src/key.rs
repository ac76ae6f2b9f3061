use crate::{Entry, MonthKey};

/// Identifies one cached query: a ledger scoped to a calendar month.
///
/// Snapshots held under different keys never share state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub ledger: i64,
    pub period: MonthKey,
}

impl CacheKey {
    /// The key of the snapshot an entry belongs to.
    pub fn for_entry(entry: &Entry) -> Self {
        Self {
            ledger: entry.ledger,
            period: MonthKey::from_date(entry.date),
        }
    }
}
