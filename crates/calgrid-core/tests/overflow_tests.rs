//! Tests for overflow capping: visible-bar budgets, "+N more" counts, and
//! the expandable-day threshold.

use chrono::{TimeZone, Utc};

use calgrid_core::{
    is_expandable_day, layout_month, max_visible_for, truncate_spans, CalendarMonth,
    DisplaySettings, Event, TimezoneMode,
};

fn event(id: i64, name: &str, start_day: u32, end_day: u32) -> Event {
    Event {
        id,
        name: name.to_string(),
        start_time_utc: Utc.with_ymd_and_hms(2024, 2, start_day, 9, 0, 0).unwrap(),
        end_time_utc: Utc.with_ymd_and_hms(2024, 2, end_day, 17, 0, 0).unwrap(),
        color_index: 0,
    }
}

fn february() -> CalendarMonth {
    CalendarMonth::new(2024, 2).expect("valid month")
}

fn utc() -> TimezoneMode {
    "UTC".parse().expect("UTC parses")
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Visible budget
// ---------------------------------------------------------------------------

#[test]
fn budget_is_a_function_of_density_only() {
    assert_eq!(max_visible_for(&DisplaySettings::default()), 5);

    let compact = DisplaySettings {
        compact_mode: true,
        ..DisplaySettings::default()
    };
    assert_eq!(max_visible_for(&compact), 6);
}

// ---------------------------------------------------------------------------
// Truncation
// ---------------------------------------------------------------------------

#[test]
fn eight_overlapping_events_hide_three() {
    // Eight events all covering Feb 5–9 land in week 1; with a budget of 5,
    // exactly 5 stay visible (in sorted order) and 3 are hidden.
    let events: Vec<Event> = (1..=8).map(|id| event(id, "Busy", 5, 9)).collect();
    let layout = layout_month(&events, february(), &DisplaySettings::default(), utc(), now());

    let spans = &layout.weeks[1].spanning_events;
    assert_eq!(spans.len(), 8);

    let truncated = truncate_spans(spans, 5);
    assert_eq!(truncated.visible.len(), 5);
    assert_eq!(truncated.hidden_count, 3);

    // Identical placements keep input order, so ids 1..=5 survive.
    let ids: Vec<i64> = truncated.visible.iter().map(|s| s.event.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn under_budget_hides_nothing() {
    let events: Vec<Event> = (1..=3).map(|id| event(id, "Light", 5, 6)).collect();
    let layout = layout_month(&events, february(), &DisplaySettings::default(), utc(), now());

    let truncated = truncate_spans(&layout.weeks[1].spanning_events, 5);
    assert_eq!(truncated.visible.len(), 3);
    assert_eq!(truncated.hidden_count, 0);
}

#[test]
fn empty_span_list_truncates_to_empty() {
    let truncated = truncate_spans(&[], 5);
    assert!(truncated.visible.is_empty());
    assert_eq!(truncated.hidden_count, 0);
}

#[test]
fn compact_budget_shows_one_more() {
    let events: Vec<Event> = (1..=8).map(|id| event(id, "Busy", 5, 9)).collect();
    let layout = layout_month(&events, february(), &DisplaySettings::default(), utc(), now());

    let compact = DisplaySettings {
        compact_mode: true,
        ..DisplaySettings::default()
    };
    let truncated = truncate_spans(
        &layout.weeks[1].spanning_events,
        max_visible_for(&compact),
    );
    assert_eq!(truncated.visible.len(), 6);
    assert_eq!(truncated.hidden_count, 2);
}

// ---------------------------------------------------------------------------
// Expandable days
// ---------------------------------------------------------------------------

#[test]
fn day_expands_only_above_threshold() {
    assert!(!is_expandable_day(0));
    assert!(!is_expandable_day(5));
    assert!(is_expandable_day(6));
}
