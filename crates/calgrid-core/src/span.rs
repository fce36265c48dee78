//! Span allocation — the core layout algorithm.
//!
//! For each week row, determines which events overlap that week and computes
//! each event's occupied column range, continuation flags, and stacking
//! order. A week's effective bounds are its first and last in-month day; the
//! empty edge cells of the first and last rows never define the comparison
//! window, even when adjacent-month day numbers are shown cosmetically.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::event::{visible_events, Event};
use crate::grid::{adjacent_day_numbers, build_month_grid, CalendarMonth};
use crate::settings::{DisplaySettings, EventDisplayStyle};
use crate::timezone::{project_date, TimezoneMode};
use crate::weeknum::iso_week_number;

/// One bar segment: an event's placement within a single week row.
///
/// Invariants: `1 <= start_col`, `start_col + span - 1 <= 7`.
/// `is_start == false` means the event's true start precedes this week;
/// `is_end == false` means its true end follows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningEvent {
    pub event: Event,
    pub start_col: u32,
    pub span: u32,
    pub is_start: bool,
    pub is_end: bool,
}

/// One week row of the layout: 7 day cells plus the bars crossing them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekRow {
    pub week_index: usize,
    pub days: [Option<u32>; 7],
    pub spanning_events: Vec<SpanningEvent>,
}

/// The full computed layout for one month view.
///
/// A fresh value per `(events, month, settings, timezone)` tuple — never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout {
    pub month: CalendarMonth,
    pub weeks: Vec<WeekRow>,
    /// ISO week number per row (of the row's first in-month day), present
    /// when `show_week_numbers` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_numbers: Option<Vec<u32>>,
    /// Cosmetic neighboring-month day numbers for the empty edge cells,
    /// present when `show_adjacent_months` is set. Row-major, aligned with
    /// the grid; carries no event data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacent_days: Option<Vec<Option<u32>>>,
}

/// Compute the spanning-bar placements for one week row.
///
/// Scans the row's columns left to right, comparing each in-month cell date
/// against the event's projected start/end dates. Events reaching in from a
/// previous week are forced to column 1 with `is_start = false`; events
/// continuing past the week are forced to column 7 with `is_end = false`.
/// The result is sorted ascending by `start_col`, longer bars first on ties —
/// a deterministic presentation order assigned sequentially, not an
/// interval-packed lane layout.
pub fn allocate_week(
    days: &[Option<u32>; 7],
    month: CalendarMonth,
    events: &[Event],
    tz: TimezoneMode,
) -> Vec<SpanningEvent> {
    // Effective week bounds: first and last in-month day of the row.
    let Some(first_day) = days.iter().flatten().next().copied() else {
        return Vec::new();
    };
    let Some(last_day) = days.iter().flatten().next_back().copied() else {
        return Vec::new();
    };
    let week_start = month.date_of(first_day);
    let week_end = month.date_of(last_day);

    let mut placements = Vec::new();

    for event in events {
        let event_start = project_date(event.start_time_utc, tz);
        let event_end = project_date(event.end_time_utc, tz);

        if event_end < week_start || event_start > week_end {
            continue;
        }

        let (mut start_col, mut is_start) = (1u32, false);
        let (mut end_col, mut is_end) = (7u32, false);

        for (col, cell) in days.iter().enumerate() {
            let Some(day) = *cell else { continue };
            let cell_date = month.date_of(day);

            if cell_date == event_start {
                start_col = col as u32 + 1;
                is_start = true;
            } else if cell_date < event_start {
                // Event has not started yet at this cell; tentatively move
                // the start one column right of it.
                start_col = col as u32 + 2;
            }

            if cell_date == event_end {
                end_col = col as u32 + 1;
                is_end = true;
            } else if cell_date > event_end {
                end_col = col as u32;
                break;
            }
        }

        // Continuations reach the row edges regardless of the scan.
        if event_start < week_start {
            start_col = 1;
            is_start = false;
        }
        if event_end > week_end {
            end_col = 7;
            is_end = false;
        }

        if start_col < 1 || start_col > 7 || end_col < start_col {
            continue;
        }

        placements.push(SpanningEvent {
            event: event.clone(),
            start_col,
            span: end_col - start_col + 1,
            is_start,
            is_end,
        });
    }

    placements.sort_by(|a, b| {
        a.start_col
            .cmp(&b.start_col)
            .then_with(|| b.span.cmp(&a.span))
    });

    placements
}

/// Compute the full month layout.
///
/// The single engine entry point: applies the upstream visibility filter
/// once (so the span allocator and the day membership index agree), builds
/// the grid, and allocates bars per week row. `now` is the caller's clock,
/// used only by the `hide_ended_events` filter.
pub fn layout_month(
    events: &[Event],
    month: CalendarMonth,
    settings: &DisplaySettings,
    tz: TimezoneMode,
    now: DateTime<Utc>,
) -> MonthLayout {
    let visible = visible_events(events, settings, now);
    let grid = build_month_grid(month, settings.week_start_day);

    debug!(
        year = month.year,
        month = month.month,
        events = visible.len(),
        weeks = grid.weeks_count,
        %tz,
        "computing month layout"
    );

    let weeks: Vec<WeekRow> = (0..grid.weeks_count)
        .map(|week_index| {
            let days = grid.week_days(week_index);
            let spanning_events = match settings.event_display_style {
                EventDisplayStyle::Spanning => allocate_week(&days, month, &visible, tz),
                // Daily style renders from per-day membership; no bars.
                EventDisplayStyle::Daily => Vec::new(),
            };
            WeekRow { week_index, days, spanning_events }
        })
        .collect();

    let week_numbers = settings.show_week_numbers.then(|| {
        weeks
            .iter()
            .map(|row| week_number_of_row(row, month))
            .collect()
    });

    let adjacent_days = settings
        .show_adjacent_months
        .then(|| adjacent_day_numbers(month, &grid));

    MonthLayout { month, weeks, week_numbers, adjacent_days }
}

/// ISO week number of a row's first in-month day.
fn week_number_of_row(row: &WeekRow, month: CalendarMonth) -> u32 {
    row.days
        .iter()
        .flatten()
        .next()
        .map(|&day| iso_week_number(month.date_of(day)))
        .unwrap_or(0)
}
