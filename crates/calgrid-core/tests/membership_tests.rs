//! Tests for the per-day membership index: inclusive date windows,
//! month clipping, timezone-correct boundaries, and consistency with the
//! upstream visibility filter.

use chrono::{TimeZone, Utc};

use calgrid_core::{
    visible_events, CalendarMonth, DayMembershipIndex, DisplaySettings, Event, TimezoneMode,
};

fn event(id: i64, name: &str, start: (i32, u32, u32, u32), end: (i32, u32, u32, u32)) -> Event {
    Event {
        id,
        name: name.to_string(),
        start_time_utc: Utc
            .with_ymd_and_hms(start.0, start.1, start.2, start.3, 0, 0)
            .unwrap(),
        end_time_utc: Utc.with_ymd_and_hms(end.0, end.1, end.2, end.3, 0, 0).unwrap(),
        color_index: 0,
    }
}

fn february() -> CalendarMonth {
    CalendarMonth::new(2024, 2).expect("valid month")
}

fn utc() -> TimezoneMode {
    "UTC".parse().expect("UTC parses")
}

// ---------------------------------------------------------------------------
// Inclusive day windows
// ---------------------------------------------------------------------------

#[test]
fn multi_day_event_touches_every_covered_day() {
    let events = vec![event(1, "Offsite", (2024, 2, 5, 9), (2024, 2, 8, 17))];
    let index = DayMembershipIndex::build(&events, february(), utc());

    for day in 5..=8 {
        assert_eq!(index.count_for_day(day), 1, "day {}", day);
        assert_eq!(index.events_on_day(day)[0].id, 1);
    }
    assert_eq!(index.count_for_day(4), 0);
    assert_eq!(index.count_for_day(9), 0);
}

#[test]
fn single_day_event_touches_one_day() {
    let events = vec![event(2, "Dinner", (2024, 2, 14, 18), (2024, 2, 14, 21))];
    let index = DayMembershipIndex::build(&events, february(), utc());

    assert_eq!(index.count_for_day(14), 1);
    assert_eq!(index.count_for_day(13), 0);
    assert_eq!(index.count_for_day(15), 0);
}

#[test]
fn overlapping_events_all_counted() {
    let events = vec![
        event(1, "A", (2024, 2, 10, 9), (2024, 2, 12, 17)),
        event(2, "B", (2024, 2, 11, 9), (2024, 2, 11, 17)),
        event(3, "C", (2024, 2, 11, 9), (2024, 2, 14, 17)),
    ];
    let index = DayMembershipIndex::build(&events, february(), utc());

    assert_eq!(index.count_for_day(11), 3);
    let ids: Vec<i64> = index.events_on_day(11).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3], "input order is preserved");
}

// ---------------------------------------------------------------------------
// Month clipping
// ---------------------------------------------------------------------------

#[test]
fn event_overlapping_month_edges_is_clipped() {
    let events = vec![event(1, "Straddle", (2024, 1, 30, 0), (2024, 2, 2, 23))];
    let index = DayMembershipIndex::build(&events, february(), utc());

    assert_eq!(index.count_for_day(1), 1);
    assert_eq!(index.count_for_day(2), 1);
    assert_eq!(index.count_for_day(3), 0);
}

#[test]
fn event_outside_the_month_never_appears() {
    let events = vec![event(1, "Elsewhere", (2024, 3, 5, 0), (2024, 3, 7, 0))];
    let index = DayMembershipIndex::build(&events, february(), utc());

    for day in 1..=29 {
        assert_eq!(index.count_for_day(day), 0, "day {}", day);
    }
}

#[test]
fn out_of_range_day_queries_are_empty() {
    let events = vec![event(1, "Offsite", (2024, 2, 5, 9), (2024, 2, 8, 17))];
    let index = DayMembershipIndex::build(&events, february(), utc());

    assert!(index.events_on_day(0).is_empty());
    assert!(index.events_on_day(30).is_empty());
    assert_eq!(index.count_for_day(99), 0);
}

// ---------------------------------------------------------------------------
// Timezone-correct day boundaries
// ---------------------------------------------------------------------------

#[test]
fn membership_follows_the_projected_dates() {
    // 04:00–05:00 UTC on Feb 10 straddles local midnight in New York:
    // the event belongs to both Feb 9 and Feb 10 there, only Feb 10 in UTC.
    let events = vec![event(1, "Red-eye", (2024, 2, 10, 4), (2024, 2, 10, 5))];

    let ny: TimezoneMode = "America/New_York".parse().expect("IANA zone parses");
    let ny_index = DayMembershipIndex::build(&events, february(), ny);
    assert_eq!(ny_index.count_for_day(9), 1);
    assert_eq!(ny_index.count_for_day(10), 1);

    let utc_index = DayMembershipIndex::build(&events, february(), utc());
    assert_eq!(utc_index.count_for_day(9), 0);
    assert_eq!(utc_index.count_for_day(10), 1);
}

// ---------------------------------------------------------------------------
// Consistency with the upstream filter
// ---------------------------------------------------------------------------

#[test]
fn filtered_input_keeps_views_consistent() {
    // hide_ended_events filters once, upstream: feed the index the same
    // filtered list the span allocator gets and the ended event is gone
    // from both views.
    let events = vec![
        event(1, "Done", (2024, 2, 5, 9), (2024, 2, 6, 17)),
        event(2, "Upcoming", (2024, 2, 20, 9), (2024, 2, 21, 17)),
    ];
    let settings = DisplaySettings {
        hide_ended_events: true,
        ..DisplaySettings::default()
    };
    let now = Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap();

    let filtered = visible_events(&events, &settings, now);
    let index = DayMembershipIndex::build(&filtered, february(), utc());

    assert_eq!(index.count_for_day(5), 0);
    assert_eq!(index.count_for_day(6), 0);
    assert_eq!(index.count_for_day(20), 1);
}
