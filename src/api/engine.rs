use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use tracing::{debug, warn};

use crate::core::RawEvent;
use crate::render::{Scene, SceneConsumer};

use super::navigation::{NavigationRequest, Navigator};
use super::render_coordinator::render_scene;
use super::{TimelineEngineConfig, ViewOptions};

/// Interactive facade consumed by host applications.
///
/// Owns the current `ViewOptions` and the loaded day's events. Every
/// interaction replaces the options and synchronously re-renders; the engine
/// keeps no other state, so repeated triggers are last-write-wins.
pub struct TimelineEngine<C: SceneConsumer, Tz: TimeZone = Local> {
    consumer: C,
    zone: Tz,
    options: ViewOptions,
    viewport_height_px: Option<u32>,
    events: Vec<RawEvent>,
}

impl<C: SceneConsumer> TimelineEngine<C, Local> {
    /// Creates an engine laying out days in the host's local time zone.
    #[must_use]
    pub fn new(consumer: C, config: TimelineEngineConfig) -> Self {
        Self::with_zone(consumer, config, Local)
    }
}

impl<C: SceneConsumer, Tz: TimeZone> TimelineEngine<C, Tz> {
    #[must_use]
    pub fn with_zone(consumer: C, config: TimelineEngineConfig, zone: Tz) -> Self {
        Self {
            consumer,
            zone,
            options: config.options,
            viewport_height_px: config.viewport_height_px,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    #[must_use]
    pub fn events(&self) -> &[RawEvent] {
        &self.events
    }

    #[must_use]
    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    #[must_use]
    pub fn viewport_height_px(&self) -> Option<u32> {
        self.viewport_height_px
    }

    #[must_use]
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    #[must_use]
    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Replaces the current day's events without rendering.
    pub fn set_events(&mut self, events: Vec<RawEvent>) {
        debug!(count = events.len(), "set timeline events");
        self.events = events;
    }

    /// Computes the scene for the current state and hands it to the consumer.
    ///
    /// A consumer rejection is logged; the scene is returned regardless.
    pub fn render(&mut self) -> Scene {
        let scene = render_scene(
            &self.events,
            &self.options,
            &self.zone,
            self.viewport_height_px,
        );
        if let Err(err) = self.consumer.consume(&scene) {
            warn!(error = %err, "scene consumer rejected timeline scene");
        }
        scene
    }

    pub fn toggle_focus(&mut self, focus_mode: bool) -> Scene {
        self.options.focus_mode = focus_mode;
        self.render()
    }

    /// Sets the base height, pushing it to the consumer before recomputing.
    pub fn set_base_height(&mut self, base_height_px: u32) -> Scene {
        self.consumer.apply_height_px(base_height_px);
        self.options.base_height_px = base_height_px;
        self.render()
    }

    /// Flips between the focused and the full-day view.
    pub fn toggle_day(&mut self) -> Scene {
        self.options.focus_mode = !self.options.focus_mode;
        self.render()
    }

    pub fn set_viewport_height(&mut self, viewport_height_px: Option<u32>) -> Scene {
        self.viewport_height_px = viewport_height_px;
        self.render()
    }

    /// Installs a newly navigated day together with its events and renders it.
    pub fn load_day(&mut self, day: NaiveDate, events: Vec<RawEvent>) -> Scene {
        self.options.day = day;
        self.set_events(events);
        self.render()
    }

    /// Asks the host to navigate to the current day in the engine's zone.
    pub fn navigate_today<N: Navigator>(&self, navigator: &mut N) -> NavigationRequest {
        self.navigate_today_at(Utc::now(), navigator)
    }

    pub fn navigate_today_at<N: Navigator>(
        &self,
        now: DateTime<Utc>,
        navigator: &mut N,
    ) -> NavigationRequest {
        let request = NavigationRequest::today_at(now, &self.zone);
        debug!(route = %request.route(), "navigate to today");
        navigator.navigate(&request);
        request
    }
}
