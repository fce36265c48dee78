//! Per-day event membership — badges and the day expansion panel.
//!
//! Independent of the spanning-bar layout: a day's list is every event whose
//! projected `[start, end]` date window contains that day, regardless of
//! which bar (if any) represents the event that week. Feed this index the
//! same filtered event set as the span allocator so the two views agree.

use crate::event::Event;
use crate::grid::CalendarMonth;
use crate::timezone::{project_date, TimezoneMode};

/// Precomputed day → events mapping for one month.
#[derive(Debug, Clone)]
pub struct DayMembershipIndex {
    month: CalendarMonth,
    by_day: Vec<Vec<Event>>,
}

impl DayMembershipIndex {
    /// Build the index for a month from an already-filtered event list.
    pub fn build(events: &[Event], month: CalendarMonth, tz: TimezoneMode) -> Self {
        let days_in_month = month.days_in_month() as usize;
        let mut by_day: Vec<Vec<Event>> = vec![Vec::new(); days_in_month];

        let month_start = month.date_of(1);
        let month_end = month.date_of(days_in_month as u32);

        for event in events {
            let start = project_date(event.start_time_utc, tz);
            let end = project_date(event.end_time_utc, tz);
            if end < month_start || start > month_end {
                continue;
            }
            // Clip the event's day window to the month before walking it.
            let from = start.max(month_start);
            let to = end.min(month_end);
            let mut date = from;
            loop {
                let day = (date - month_start).num_days() as usize;
                by_day[day].push(event.clone());
                match date.succ_opt() {
                    Some(next) if next <= to => date = next,
                    _ => break,
                }
            }
        }

        Self { month, by_day }
    }

    /// The month this index was built for.
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Events touching day `day` (1-based), in input order.
    pub fn events_on_day(&self, day: u32) -> &[Event] {
        day.checked_sub(1)
            .and_then(|i| self.by_day.get(i as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Badge count for day `day` (1-based).
    pub fn count_for_day(&self, day: u32) -> usize {
        self.events_on_day(day).len()
    }
}
