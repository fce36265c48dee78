//! Memoized layout computation.
//!
//! The layout is a pure function of its inputs, so results can be cached
//! keyed by the input tuple and discarded wholesale when any input changes —
//! never patched. This is a caller-side convenience for render loops that
//! would otherwise recompute per frame; nothing in the engine requires it.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::NonZeroUsize;

use chrono::{DateTime, NaiveDate, Utc};
use lru::LruCache;

use crate::event::Event;
use crate::grid::CalendarMonth;
use crate::settings::DisplaySettings;
use crate::span::{layout_month, MonthLayout};
use crate::timezone::TimezoneMode;

/// Cache key: a fingerprint of the event list plus the remaining inputs.
///
/// `now` participates only at day granularity — the clock advancing within a
/// day never invalidates entries (the `hide_ended_events` filter compares
/// against the instant, but a day-stale "+ended" entry is refreshed on the
/// next day boundary, which matches how the consuming views navigate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LayoutKey {
    events_fingerprint: u64,
    month: CalendarMonth,
    settings: DisplaySettings,
    tz: TimezoneMode,
    now_day: NaiveDate,
}

fn fingerprint(events: &[Event]) -> u64 {
    let mut hasher = DefaultHasher::new();
    events.hash(&mut hasher);
    hasher.finish()
}

/// LRU-memoized wrapper around [`layout_month`].
pub struct LayoutCache {
    inner: LruCache<LayoutKey, MonthLayout>,
}

impl LayoutCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { inner: LruCache::new(capacity) }
    }

    /// Compute (or fetch) the layout for the given inputs.
    pub fn layout_month(
        &mut self,
        events: &[Event],
        month: CalendarMonth,
        settings: &DisplaySettings,
        tz: TimezoneMode,
        now: DateTime<Utc>,
    ) -> MonthLayout {
        let key = LayoutKey {
            events_fingerprint: fingerprint(events),
            month,
            settings: *settings,
            tz,
            now_day: now.date_naive(),
        };

        if let Some(hit) = self.inner.get(&key) {
            return hit.clone();
        }

        let layout = layout_month(events, month, settings, tz, now);
        self.inner.put(key, layout.clone());
        layout
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every cached layout.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
