use chrono::TimeZone;
use tracing::{debug, warn};

use crate::core::{
    ColorMemo, EventBounds, RawEvent, compute_height, compute_window, event_bounds,
};
use crate::error::TimelineResult;
use crate::render::Scene;

use super::ViewOptions;
use super::event_layout::layout_parsed_events;
use super::grid_builder::{build_grid_lines, build_hour_labels};

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// Runs a full layout pass; failures become a degraded scene.
    pub(super) fn render<Tz: TimeZone>(
        events: &[RawEvent],
        options: &ViewOptions,
        zone: &Tz,
        viewport_height_px: Option<u32>,
    ) -> Scene {
        match Self::layout_pass(events, options, zone, viewport_height_px) {
            Ok(scene) => scene,
            Err(err) => {
                warn!(
                    error = %err,
                    day = %options.day,
                    focus_mode = options.focus_mode,
                    "timeline layout failed, emitting degraded scene"
                );
                Scene::degraded(err.to_string())
            }
        }
    }

    fn layout_pass<Tz: TimeZone>(
        events: &[RawEvent],
        options: &ViewOptions,
        zone: &Tz,
        viewport_height_px: Option<u32>,
    ) -> TimelineResult<Scene> {
        let parsed: Vec<Option<EventBounds>> =
            events.iter().map(|event| event_bounds(event, zone)).collect();
        let bounds: Vec<EventBounds> = parsed.iter().flatten().copied().collect();
        let window = compute_window(options.day, options.focus_mode, &bounds, zone)?;
        let height_px = compute_height(
            window.span(),
            options.base_height_px,
            options.focus_mode,
            viewport_height_px,
        );

        let mut memo = ColorMemo::new();
        let layout = layout_parsed_events(events, &parsed, window, zone, &mut memo);
        let grid_marks = build_grid_lines(window, zone);
        let hour_labels = build_hour_labels(window, zone);

        debug!(
            day = %options.day,
            focus_mode = options.focus_mode,
            events = events.len(),
            parsable = bounds.len(),
            visible = layout.visible_count(),
            dropped = layout.dropped_count(),
            categories = memo.len(),
            grid_marks = grid_marks.len(),
            window_start = window.start(),
            window_end = window.end(),
            height_px,
            "timeline render"
        );

        Ok(Scene::new(
            window,
            height_px,
            grid_marks,
            hour_labels,
            layout.blocks,
        ))
    }
}

/// Pure render entry point: same inputs always yield an identical scene.
///
/// Never fails; a layout error is reported through [`Scene::error`].
#[must_use]
pub fn render_scene<Tz: TimeZone>(
    events: &[RawEvent],
    options: &ViewOptions,
    zone: &Tz,
    viewport_height_px: Option<u32>,
) -> Scene {
    RenderCoordinator::render(events, options, zone, viewport_height_px)
}
