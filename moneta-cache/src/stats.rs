//! The incremental statistic aggregator.
//!
//! Keeps per-(category, sign) running totals in step with the entry
//! stream so a single-entry change never forces a rescan of the whole
//! collection. Like the entry store, every operation is copy-on-write.

use moneta_core::{Entry, Statistic};
use rust_decimal::Decimal;

use crate::{CacheError, CacheResult};

/// Fold an entry's amount into its statistic row, seeding the row when
/// the bucket has not been observed yet.
pub fn add_to_statistic(current: &[Statistic], entry: &Entry) -> Vec<Statistic> {
    let mut next = current.to_vec();
    match next.iter_mut().find(|row| row.matches(entry)) {
        Some(row) => row.total_amount += entry.amount,
        None => next.push(Statistic::seeded_from(entry)),
    }
    next
}

/// Subtract an entry's amount from its statistic row.
///
/// A row that reaches exactly zero is removed: absence and a zero total
/// are equivalent. A missing row is a desynchronization signal, since a
/// row must exist for any entry previously added.
pub fn delete_from_statistic(current: &[Statistic], entry: &Entry) -> CacheResult<Vec<Statistic>> {
    let index = current
        .iter()
        .position(|row| row.matches(entry))
        .ok_or_else(|| CacheError::StatisticNotFound {
            category: entry.category.clone(),
            is_positive: entry.is_positive,
        })?;

    let mut next = current.to_vec();
    next[index].total_amount -= entry.amount;
    if next[index].total_amount == Decimal::ZERO {
        next.remove(index);
    }
    Ok(next)
}

/// Move an entry's contribution from its old bucket to its new one.
///
/// Always composed as delete-then-add; netting the delta for same-bucket
/// updates would have to reproduce the zero-collapse and re-seeding
/// behavior exactly, so the composition stays the single code path.
pub fn update_statistic(
    current: &[Statistic],
    new_entry: &Entry,
    old_entry: &Entry,
) -> CacheResult<Vec<Statistic>> {
    let without_old = delete_from_statistic(current, old_entry)?;
    Ok(add_to_statistic(&without_old, new_entry))
}
