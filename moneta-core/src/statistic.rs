use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Entry, MonthKey};

/// Running aggregate of entry amounts for one `(category, sign)` bucket
/// within a single ledger/month collection.
///
/// `period` is the first calendar day of the month the row summarizes.
/// A row whose `total_amount` reaches exactly zero is removed from its
/// collection rather than kept around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub category: String,
    pub is_positive: bool,
    pub ledger: i64,
    pub created_by: Uuid,
    pub period: NaiveDate,
    pub total_amount: Decimal,
}

impl Statistic {
    /// Whether this row aggregates entries like the provided one.
    ///
    /// Collections are already scoped to one ledger and month, so only
    /// the category and sign participate in the match.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.category == entry.category && self.is_positive == entry.is_positive
    }

    /// Seed a fresh row from the first entry observed for its bucket.
    pub fn seeded_from(entry: &Entry) -> Self {
        Self {
            category: entry.category.clone(),
            is_positive: entry.is_positive,
            ledger: entry.ledger,
            created_by: entry.created_by,
            period: MonthKey::from_date(entry.date).first_day(),
            total_amount: entry.amount,
        }
    }
}
