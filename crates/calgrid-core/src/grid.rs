//! Month grid construction — the week/day skeleton, independent of events.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::settings::WeekStart;

/// A displayed month. `month` is 1-based (1 = January), chrono convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    /// Construct a month reference, rejecting out-of-range month numbers.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(LayoutError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// The first calendar date of this month.
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated at construction; fall back to the epoch floor
        // rather than panicking if a raw struct literal sneaks past it.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The date of day-of-month `day` (1-based).
    pub fn date_of(&self, day: u32) -> NaiveDate {
        self.first_day() + Days::new(u64::from(day.saturating_sub(1)))
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// The preceding month.
    pub fn prev(&self) -> CalendarMonth {
        if self.month == 1 {
            CalendarMonth { year: self.year - 1, month: 12 }
        } else {
            CalendarMonth { year: self.year, month: self.month - 1 }
        }
    }

    /// The following month.
    pub fn next(&self) -> CalendarMonth {
        if self.month == 12 {
            CalendarMonth { year: self.year + 1, month: 1 }
        } else {
            CalendarMonth { year: self.year, month: self.month + 1 }
        }
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The week/day skeleton for one month.
///
/// `days` holds `weeks_count * 7` cells in row-major order; `None` marks a
/// cell outside the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub days: Vec<Option<u32>>,
    pub weeks_count: usize,
    /// Column index (0-based) of day 1 under the chosen week start.
    pub first_day_offset: usize,
}

impl MonthGrid {
    /// The 7 cells of week row `week` (0-based).
    pub fn week_days(&self, week: usize) -> [Option<u32>; 7] {
        let mut row = [None; 7];
        for (col, cell) in row.iter_mut().enumerate() {
            *cell = self.days.get(week * 7 + col).copied().flatten();
        }
        row
    }
}

/// Build the grid for a month: compute the weekday offset of day 1, lay the
/// day numbers out row-major, and pad the edges with `None`.
///
/// Months always produce 4, 5, or 6 week rows.
pub fn build_month_grid(month: CalendarMonth, week_start: WeekStart) -> MonthGrid {
    let days_in_month = month.days_in_month();

    // Plain weekday index of day 1, 0 = Sunday. For Monday-first grids remap
    // so Monday lands in column 0.
    let weekday = month.first_day().weekday().num_days_from_sunday() as usize;
    let first_day_offset = match week_start {
        WeekStart::Sunday => weekday,
        WeekStart::Monday => (weekday + 6) % 7,
    };

    let total_cells = first_day_offset + days_in_month as usize;
    let weeks_count = total_cells.div_ceil(7);

    let mut days = vec![None; weeks_count * 7];
    for day in 1..=days_in_month {
        days[first_day_offset + day as usize - 1] = Some(day);
    }

    MonthGrid { days, weeks_count, first_day_offset }
}

/// Cosmetic day numbers for the grid's empty edge cells, taken from the
/// neighboring months. Same length as `grid.days`; `Some` only where the grid
/// cell is `None`. These carry no event data.
pub fn adjacent_day_numbers(month: CalendarMonth, grid: &MonthGrid) -> Vec<Option<u32>> {
    let prev_days = month.prev().days_in_month();
    let leading = grid.first_day_offset;

    grid.days
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if cell.is_some() {
                return None;
            }
            if i < leading {
                // Trailing days of the previous month.
                Some(prev_days - (leading - 1 - i) as u32)
            } else {
                // Leading days of the next month.
                Some((i - leading) as u32 - month.days_in_month() + 1)
            }
        })
        .collect()
}
