//! # calgrid-core
//!
//! Deterministic month-calendar span layout. Given a target month, a set of
//! events with UTC start/end instants, a timezone mode, and display
//! settings, the engine computes the week/day grid, the per-week spanning
//! bars for multi-day events (column ranges, continuation flags, stacking
//! order), per-day event membership and overflow counts, and ISO week
//! numbers.
//!
//! Everything here is a pure, synchronous transformation of its explicit
//! inputs: no I/O, no shared mutable state, no ambient clock. Rendering,
//! persistence, and navigation are the caller's business — this crate is the
//! in-process library boundary between an event store and a calendar view.
//!
//! ## Modules
//!
//! - [`timezone`] — UTC instants → calendar dates under an effective timezone
//! - [`grid`] — week/day skeleton for a month, independent of events
//! - [`span`] — the core allocator: per-week bar placements ([`layout_month`])
//! - [`overflow`] — visible-bar caps and "+N more" / expandable-day counts
//! - [`membership`] — per-day event index for badges and the day panel
//! - [`weeknum`] — ISO 8601 week numbers
//! - [`event`] — event types, lenient ingestion, the upstream visibility filter
//! - [`cache`] — LRU memoization keyed by the input tuple
//! - [`settings`] — display configuration
//! - [`error`] — error types

pub mod cache;
pub mod error;
pub mod event;
pub mod grid;
pub mod membership;
pub mod overflow;
pub mod settings;
pub mod span;
pub mod timezone;
pub mod weeknum;

pub use cache::LayoutCache;
pub use error::LayoutError;
pub use event::{decode_events, visible_events, Event, EventRecord};
pub use grid::{build_month_grid, CalendarMonth, MonthGrid};
pub use membership::DayMembershipIndex;
pub use overflow::{is_expandable_day, max_visible_for, truncate_spans, VisibleSpans};
pub use settings::{DisplaySettings, EventDisplayStyle, WeekStart};
pub use span::{allocate_week, layout_month, MonthLayout, SpanningEvent, WeekRow};
pub use timezone::{project_date, TimezoneMode};
pub use weeknum::iso_week_number;
