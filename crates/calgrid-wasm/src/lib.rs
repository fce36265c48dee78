//! WASM bindings for calgrid-core.
//!
//! Exposes the month layout, day membership, and week-number computations to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings; timestamps cross the boundary as RFC 3339 strings or epoch
//! seconds, and records that fail to parse are dropped by the engine's
//! lenient ingestion rather than failing the call.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p calgrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/calgrid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/calgrid_wasm.wasm
//! ```

use chrono::{NaiveDate, Utc};
use wasm_bindgen::prelude::*;

use calgrid_core::{
    decode_events, is_expandable_day, iso_week_number, layout_month, visible_events,
    CalendarMonth, DayMembershipIndex, DisplaySettings, Event, TimezoneMode,
};

/// Parse the events JSON array into typed events, dropping malformed records.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    let records = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;
    Ok(decode_events(records))
}

/// Parse the optional settings JSON object; `None`/empty uses the defaults.
fn parse_settings_json(json: Option<String>) -> Result<DisplaySettings, JsValue> {
    match json.as_deref() {
        None | Some("") => Ok(DisplaySettings::default()),
        Some(s) => serde_json::from_str(s)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e))),
    }
}

fn parse_month(year: i32, month: u32) -> Result<CalendarMonth, JsValue> {
    CalendarMonth::new(year, month).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_timezone(timezone: &str) -> Result<TimezoneMode, JsValue> {
    timezone
        .parse()
        .map_err(|e: calgrid_core::LayoutError| JsValue::from_str(&e.to_string()))
}

/// Compute the full month layout.
///
/// `events_json` is a JSON array of `{id, name, startTimeUtc, endTimeUtc,
/// colorIndex}` objects. `timezone` is `"local"` or an IANA name.
/// `settings_json` is an optional JSON object matching `DisplaySettings`
/// (snake_case keys); omit it for defaults. Returns the layout as JSON:
/// week rows with day cells and spanning-bar placements.
#[wasm_bindgen(js_name = "layoutMonth")]
pub fn layout_month_json(
    events_json: &str,
    year: i32,
    month: u32,
    timezone: &str,
    settings_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let month = parse_month(year, month)?;
    let tz = parse_timezone(timezone)?;
    let settings = parse_settings_json(settings_json)?;

    let layout = layout_month(&events, month, &settings, tz, Utc::now());

    serde_json::to_string(&layout)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the events touching one day of a month, with the badge count and
/// whether the day qualifies for the expansion panel.
///
/// Returns JSON: `{day, count, expandable, events: [...]}`.
#[wasm_bindgen(js_name = "eventsOnDay")]
pub fn events_on_day_json(
    events_json: &str,
    year: i32,
    month: u32,
    day: u32,
    timezone: &str,
    settings_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let month = parse_month(year, month)?;
    let tz = parse_timezone(timezone)?;
    let settings = parse_settings_json(settings_json)?;

    let filtered = visible_events(&events, &settings, Utc::now());
    let index = DayMembershipIndex::build(&filtered, month, tz);
    let count = index.count_for_day(day);

    let listing = serde_json::json!({
        "day": day,
        "count": count,
        "expandable": is_expandable_day(count),
        "events": index.events_on_day(day),
    });

    serde_json::to_string(&listing)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// ISO 8601 week number of a date given as `"YYYY-MM-DD"`.
#[wasm_bindgen(js_name = "isoWeekNumber")]
pub fn iso_week_number_json(date: &str) -> Result<u32, JsValue> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))?;
    Ok(iso_week_number(date))
}
