use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense transaction as stored by the backend.
///
/// `id` is assigned by the backend and immutable; `amount` is a
/// non-negative magnitude with `is_positive` carrying the sign (income
/// when true, expense when false).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub is_positive: bool,
    pub ledger: i64,
    pub created_by: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// Whether this entry sorts strictly before `other` under [`entry_cmp`].
    pub fn sort_precedes(&self, other: &Entry) -> bool {
        entry_cmp(self, other) == Ordering::Less
    }
}

/// The total order used by the entry store: date descending, then
/// category descending, then id ascending.
///
/// Distinct entries never compare equal because the id participates in
/// the key, which is what makes binary-search insertion and deletion
/// well-defined.
pub fn entry_cmp(a: &Entry, b: &Entry) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.category.cmp(&a.category))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(id: i64, date: &str, category: &str) -> Entry {
        Entry {
            id,
            date: date.parse().unwrap(),
            category: category.into(),
            amount: dec!(10),
            is_positive: false,
            ledger: 1,
            created_by: Uuid::nil(),
            note: None,
        }
    }

    #[test]
    fn newer_dates_come_first() {
        let older = entry(1, "2024-02-01", "Food");
        let newer = entry(2, "2024-03-01", "Food");
        assert_eq!(entry_cmp(&newer, &older), Ordering::Less);
        assert!(newer.sort_precedes(&older));
    }

    #[test]
    fn categories_break_date_ties_descending() {
        let transport = entry(1, "2024-02-01", "Transport");
        let food = entry(2, "2024-02-01", "Food");
        assert!(transport.sort_precedes(&food));
    }

    #[test]
    fn ids_break_full_ties_ascending() {
        let first = entry(3, "2024-02-01", "Food");
        let second = entry(7, "2024-02-01", "Food");
        assert!(first.sort_precedes(&second));
        assert!(!second.sort_precedes(&first));
    }

    #[test]
    fn order_is_total_over_distinct_entries() {
        let a = entry(1, "2024-02-01", "Food");
        let b = entry(2, "2024-02-01", "Food");
        assert_ne!(entry_cmp(&a, &b), Ordering::Equal);
    }
}
