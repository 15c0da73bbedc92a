//! Fee timing calculations.

use chrono::{Duration, NaiveDate};

/// Days after an allocation's start date before its rent counts as overdue.
pub const RENT_GRACE_DAYS: i64 = 31;

/// The date by which rent for an allocation starting on `start_date` must be
/// paid. Queried on a later date with the stored fee status not `paid`, the
/// fee resolver projects the student as overdue.
pub fn rent_due_date(start_date: NaiveDate) -> NaiveDate {
    start_date + Duration::days(RENT_GRACE_DAYS)
}
