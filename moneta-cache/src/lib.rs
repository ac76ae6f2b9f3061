//! Cache reconciliation primitives for the Moneta finance tracker.
//!
//! Keeps an in-memory, sorted view of financial entries and its derived
//! per-category totals consistent with a stream of out-of-band change
//! notifications, without refetching from the backend. All operations
//! are synchronous, copy-on-write transformations.

mod error;
pub mod grouping;
pub mod stats;
pub mod store;

pub use error::{CacheError, CacheResult};
pub use grouping::{group_by_month, MonthGroup};
