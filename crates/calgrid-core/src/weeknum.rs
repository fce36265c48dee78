//! ISO 8601 week numbers.

use chrono::{Datelike, NaiveDate};

/// ISO 8601 week number of `date` (the week containing its Thursday).
///
/// Early-January dates can belong to week 52/53 of the prior year and
/// late-December dates to week 1 of the next — that is ISO behavior, not a
/// bug.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
