use chrono::TimeZone;
use tracing::trace;

use crate::core::primitives::format_local_instant;
use crate::core::{ColorMemo, EventBounds, RawEvent, TimeWindow, event_bounds, normalize_title};
use crate::render::EventBlock;

/// Smallest block height, so zero-length events stay visible.
pub const MIN_BLOCK_HEIGHT_PCT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    UnparsableTimestamp,
    OutsideWindow,
}

/// Blocks produced by one layout pass plus drop accounting for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLayout {
    pub blocks: Vec<EventBlock>,
    pub dropped_unparsable: usize,
    pub dropped_outside_window: usize,
}

impl EventLayout {
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped_unparsable + self.dropped_outside_window
    }

    fn record_drop(&mut self, index: usize, reason: DropReason) {
        trace!(index, ?reason, "drop event");
        match reason {
            DropReason::UnparsableTimestamp => self.dropped_unparsable += 1,
            DropReason::OutsideWindow => self.dropped_outside_window += 1,
        }
    }
}

/// Clips, positions and colors every event against `window`, in input order.
///
/// `memo` is scoped to the caller's render pass.
#[must_use]
pub fn layout_events<Tz: TimeZone>(
    events: &[RawEvent],
    window: TimeWindow,
    zone: &Tz,
    memo: &mut ColorMemo,
) -> EventLayout {
    let bounds: Vec<Option<EventBounds>> =
        events.iter().map(|event| event_bounds(event, zone)).collect();
    layout_parsed_events(events, &bounds, window, zone, memo)
}

/// Same as [`layout_events`] for callers that already normalized timestamps.
///
/// `bounds[i]` belongs to `events[i]`; `None` marks an unparsable event.
#[must_use]
pub fn layout_parsed_events<Tz: TimeZone>(
    events: &[RawEvent],
    bounds: &[Option<EventBounds>],
    window: TimeWindow,
    zone: &Tz,
    memo: &mut ColorMemo,
) -> EventLayout {
    let mut layout = EventLayout::default();
    for (index, (event, bounds)) in events.iter().zip(bounds).enumerate() {
        let Some(bounds) = *bounds else {
            layout.record_drop(index, DropReason::UnparsableTimestamp);
            continue;
        };
        match place_block(event, bounds, window, zone, memo) {
            Ok(block) => layout.blocks.push(block),
            Err(reason) => layout.record_drop(index, reason),
        }
    }
    layout
}

fn place_block<Tz: TimeZone>(
    event: &RawEvent,
    bounds: EventBounds,
    window: TimeWindow,
    zone: &Tz,
    memo: &mut ColorMemo,
) -> Result<EventBlock, DropReason> {
    let clamped_start = bounds.start.max(window.start());
    let clamped_end = bounds.end.min(window.end());
    if clamped_end < clamped_start {
        return Err(DropReason::OutsideWindow);
    }

    let top_pct = window.pct(clamped_start);
    let duration_pct = (clamped_end - clamped_start) as f64 / window.span() as f64 * 100.0;
    let top_pct = top_pct.clamp(0.0, 100.0);
    // The visibility floor wins over the strip bound for blocks at the very end.
    let height_pct = duration_pct.min(100.0 - top_pct).max(MIN_BLOCK_HEIGHT_PCT);

    let category = normalize_title(event.title());
    let color = memo.color_for(&category);
    let label = if event.title().is_empty() {
        category.to_string()
    } else {
        event.title().to_owned()
    };
    let tooltip = format!(
        "{label}\n{} - {}",
        format_local_instant(bounds.start, zone),
        format_local_instant(bounds.end, zone)
    );

    Ok(EventBlock {
        top_pct,
        height_pct,
        color,
        category,
        label,
        tooltip,
    })
}
