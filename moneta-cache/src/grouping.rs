//! Month grouping over a sorted entry snapshot.

use std::ops::Range;

use moneta_core::{Entry, MonthKey};

/// A contiguous run of entries sharing one calendar month.
///
/// Holds an index range into the snapshot it was derived from rather
/// than copied entries; recompute after every snapshot replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGroup {
    pub month: &'static str,
    pub year: i32,
    pub range: Range<usize>,
}

impl MonthGroup {
    /// The slice of the source snapshot this group covers.
    pub fn entries<'a>(&self, snapshot: &'a [Entry]) -> &'a [Entry] {
        &snapshot[self.range.clone()]
    }
}

/// Partition a date-sorted snapshot into contiguous month groups, in
/// order of first appearance.
///
/// Pure: the input is never mutated, and an empty snapshot yields no
/// groups. The grouping key is the calendar month and year of
/// `entry.date`, free of any client-timezone dependence.
pub fn group_by_month(entries: &[Entry]) -> Vec<MonthGroup> {
    let mut groups = Vec::new();
    let Some(first) = entries.first() else {
        return groups;
    };

    let mut current = MonthKey::from_date(first.date);
    let mut start = 0;
    for (index, entry) in entries.iter().enumerate().skip(1) {
        let key = MonthKey::from_date(entry.date);
        if key == current {
            continue;
        }
        groups.push(MonthGroup {
            month: current.name(),
            year: current.year,
            range: start..index,
        });
        current = key;
        start = index;
    }
    groups.push(MonthGroup {
        month: current.name(),
        year: current.year,
        range: start..entries.len(),
    });

    groups
}
