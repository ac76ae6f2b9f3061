//! Domain types shared across the Moneta cache reconciliation crates.

mod entry;
mod event;
mod key;
mod month;
mod statistic;

pub use entry::{entry_cmp, Entry};
pub use event::ChangeEvent;
pub use key::CacheKey;
pub use month::{MonthKey, MONTH_NAMES};
pub use statistic::Statistic;
