//! Timezone projection — UTC instants to calendar dates.
//!
//! Every day-boundary comparison in the engine goes through [`project_date`].
//! Comparing raw instants instead would misplace events near midnight in
//! non-UTC zones, so the span allocator and the day membership index both use
//! this projection exclusively.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::LayoutError;

/// The effective timezone used to turn UTC instants into calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimezoneMode {
    /// The host machine's local timezone.
    Local,
    /// A fixed IANA zone (e.g., a server-configured display timezone).
    Fixed(chrono_tz::Tz),
}

impl FromStr for TimezoneMode {
    type Err = LayoutError;

    /// Parse `"local"` (case-insensitive) or an IANA zone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(TimezoneMode::Local);
        }
        s.parse::<chrono_tz::Tz>()
            .map(TimezoneMode::Fixed)
            .map_err(|_| LayoutError::InvalidTimezone(s.to_string()))
    }
}

impl fmt::Display for TimezoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneMode::Local => f.write_str("local"),
            TimezoneMode::Fixed(tz) => write!(f, "{}", tz),
        }
    }
}

/// Project a UTC instant onto its calendar date under the effective timezone.
///
/// Two instants fall on the same calendar day iff their projected dates are
/// equal.
pub fn project_date(instant: DateTime<Utc>, mode: TimezoneMode) -> NaiveDate {
    match mode {
        TimezoneMode::Local => instant.with_timezone(&chrono::Local).date_naive(),
        TimezoneMode::Fixed(tz) => instant.with_timezone(&tz).date_naive(),
    }
}
