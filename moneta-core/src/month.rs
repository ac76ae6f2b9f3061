use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// English month names indexed by zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, used to bucket entries and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// One-based month number, 1 through 12.
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The first calendar day of this month, the `period` value used by
    /// statistic rows.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key built from a valid date")
    }

    /// English name of the month.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}
