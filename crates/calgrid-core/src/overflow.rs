//! Overflow management — cap visible bars per week and flag busy days.

use serde::Serialize;

use crate::settings::DisplaySettings;
use crate::span::SpanningEvent;

/// Bars shown per week row in normal density.
pub const MAX_VISIBLE_SPANS: usize = 5;

/// Bars shown per week row in compact mode.
pub const MAX_VISIBLE_SPANS_COMPACT: usize = 6;

/// Per-day event count above which a day becomes expandable.
pub const DAY_EXPAND_THRESHOLD: usize = 5;

/// A week row's bar list after truncation, with the "+N more" count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleSpans {
    pub visible: Vec<SpanningEvent>,
    pub hidden_count: usize,
}

/// Visible-bar budget for the given settings. A pure function of display
/// density, never of content.
pub fn max_visible_for(settings: &DisplaySettings) -> usize {
    if settings.compact_mode {
        MAX_VISIBLE_SPANS_COMPACT
    } else {
        MAX_VISIBLE_SPANS
    }
}

/// Keep the first `max_visible` entries of an already-sorted bar list and
/// report how many were hidden.
pub fn truncate_spans(spans: &[SpanningEvent], max_visible: usize) -> VisibleSpans {
    VisibleSpans {
        visible: spans.iter().take(max_visible).cloned().collect(),
        hidden_count: spans.len().saturating_sub(max_visible),
    }
}

/// Whether a day with `count` events should offer the on-demand expansion
/// panel. The panel itself (one open day at a time, closing on re-toggle or
/// navigation) is presentation state, outside the engine.
pub fn is_expandable_day(count: usize) -> bool {
    count > DAY_EXPAND_THRESHOLD
}
