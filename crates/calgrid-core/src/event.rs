//! Event types and the lenient ingestion boundary.
//!
//! The engine itself works on well-typed [`Event`]s. Records arriving from
//! outside (JSON over the CLI or WASM boundary) come in as [`EventRecord`]s
//! with timestamps as RFC 3339 strings or epoch seconds; records that fail to
//! parse are dropped rather than failing the whole layout — calendar
//! rendering degrades gracefully.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::settings::DisplaySettings;

/// A calendar event with UTC start/end instants.
///
/// Invariant: `end_time_utc > start_time_utc`. Events violating it are
/// excluded at the layout boundary (see [`visible_events`]), never corrected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_time_utc: DateTime<Utc>,
    pub end_time_utc: DateTime<Utc>,
    pub color_index: u32,
}

/// A timestamp as it arrives over a process boundary: epoch seconds or an
/// ISO 8601 string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Epoch(i64),
    Text(String),
}

/// Wire-format event record. Field aliases accept the camelCase keys used by
/// JavaScript event stores.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    #[serde(alias = "startTimeUtc")]
    pub start_time_utc: RawTimestamp,
    #[serde(alias = "endTimeUtc")]
    pub end_time_utc: RawTimestamp,
    #[serde(default, alias = "colorIndex")]
    pub color_index: u32,
}

/// Parse a raw timestamp into a UTC instant.
///
/// Strings are tried as RFC 3339 first, then as a naive datetime interpreted
/// as UTC. Returns `None` for anything unparsable.
fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::Epoch(secs) => DateTime::from_timestamp(*secs, 0),
        RawTimestamp::Text(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .map(|ndt| ndt.and_utc())
                .ok()
        }
    }
}

/// Decode wire records into typed events.
///
/// Records with malformed timestamps are dropped with a warning; decoding
/// never fails as a whole.
pub fn decode_events(records: Vec<EventRecord>) -> Vec<Event> {
    records
        .into_iter()
        .filter_map(|record| {
            let start = parse_timestamp(&record.start_time_utc);
            let end = parse_timestamp(&record.end_time_utc);
            match (start, end) {
                (Some(start_time_utc), Some(end_time_utc)) => Some(Event {
                    id: record.id,
                    name: record.name,
                    start_time_utc,
                    end_time_utc,
                    color_index: record.color_index,
                }),
                _ => {
                    warn!(id = record.id, "dropping event with unparsable timestamp");
                    None
                }
            }
        })
        .collect()
}

/// The single upstream visibility filter shared by the span allocator and the
/// day membership index.
///
/// Excludes events with inverted ranges (`end <= start`), and — when
/// `hide_ended_events` is set — events that ended strictly before `now`.
/// `now` is an explicit parameter; the engine never reads an ambient clock.
pub fn visible_events(
    events: &[Event],
    settings: &DisplaySettings,
    now: DateTime<Utc>,
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| {
            if event.end_time_utc <= event.start_time_utc {
                warn!(id = event.id, "excluding event with inverted time range");
                return false;
            }
            if settings.hide_ended_events && event.end_time_utc < now {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
