use crate::vex_generation::domain::Statement;
use chrono::{DateTime, FixedOffset, Utc};
use std::cmp::Ordering;

/// StatementSorter service for ordering statements deterministically
pub struct StatementSorter;

impl StatementSorter {
    /// Sorts statements in place
    ///
    /// Order is vulnerability ID, then effective timestamp (the statement's
    /// own, else `reference_timestamp`), then status rank. The sort is
    /// stable, so statements equal on all three keep their relative order.
    pub fn sort(statements: &mut [Statement], reference_timestamp: DateTime<Utc>) {
        statements.sort_by(|a, b| Self::compare(a, b, reference_timestamp));
    }

    fn compare(a: &Statement, b: &Statement, reference_timestamp: DateTime<Utc>) -> Ordering {
        a.vulnerability
            .cmp(&b.vulnerability)
            .then_with(|| {
                let reference = DateTime::<FixedOffset>::from(reference_timestamp);
                let a_time = a.timestamp.unwrap_or(reference);
                let b_time = b.timestamp.unwrap_or(reference);
                a_time.cmp(&b_time)
            })
            .then_with(|| a.status.rank().cmp(&b.status.rank()))
    }
}
