//! Tests for ISO 8601 week numbering, including the year-boundary spillover
//! cases.

use chrono::NaiveDate;

use calgrid_core::iso_week_number;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn january_first_2023_belongs_to_week_52_of_2022() {
    // Jan 1, 2023 is a Sunday: ISO places it in the last week of 2022.
    assert_eq!(iso_week_number(date(2023, 1, 1)), 52);
}

#[test]
fn january_first_2021_belongs_to_week_53_of_2020() {
    // Jan 1, 2021 is a Friday; 2020 is a 53-week ISO year.
    assert_eq!(iso_week_number(date(2021, 1, 1)), 53);
}

#[test]
fn late_december_can_belong_to_week_one() {
    // Dec 29, 2025 is a Monday: the week containing Jan 1, 2026 (Thursday).
    assert_eq!(iso_week_number(date(2025, 12, 29)), 1);
}

#[test]
fn mid_year_weeks_are_unremarkable() {
    // 2024 starts on a Monday, so week N covers Jan (7N-6)..(7N).
    assert_eq!(iso_week_number(date(2024, 1, 1)), 1);
    assert_eq!(iso_week_number(date(2024, 1, 8)), 2);
    assert_eq!(iso_week_number(date(2024, 2, 15)), 7);
    assert_eq!(iso_week_number(date(2024, 7, 1)), 27);
}

#[test]
fn week_boundaries_fall_between_sunday_and_monday() {
    // ISO weeks run Monday..Sunday: Sun Feb 11, 2024 closes week 6 and
    // Mon Feb 12 opens week 7.
    assert_eq!(iso_week_number(date(2024, 2, 11)), 6);
    assert_eq!(iso_week_number(date(2024, 2, 12)), 7);
}
