//! Display settings that parameterize a layout computation.
//!
//! One canonical engine, configured here — not a family of per-feature
//! variants. Settings are plain values passed per computation; they have no
//! lifecycle of their own.

use serde::{Deserialize, Serialize};

/// Which weekday occupies column 1 of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// How multi-day events are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDisplayStyle {
    /// One continuous bar per week row crossing every day column the event
    /// touches.
    #[default]
    Spanning,
    /// No bars; each day cell lists its own events (served by the day
    /// membership index).
    Daily,
}

/// Per-computation display configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub week_start_day: WeekStart,
    /// Fill the grid's empty edge cells with the neighboring months' day
    /// numbers. Cosmetic only — those cells never carry event data.
    pub show_adjacent_months: bool,
    pub show_week_numbers: bool,
    /// Exclude events that ended strictly before "now" from every view.
    pub hide_ended_events: bool,
    pub event_display_style: EventDisplayStyle,
    /// Denser grid; allows one extra visible bar per week row.
    pub compact_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            week_start_day: WeekStart::Sunday,
            show_adjacent_months: false,
            show_week_numbers: false,
            hide_ended_events: false,
            event_display_style: EventDisplayStyle::Spanning,
            compact_mode: false,
        }
    }
}
