use serde::{Deserialize, Serialize};

use crate::core::time_math::MIN_HEIGHT_PX;
use crate::core::{DisplayCategory, EventColor, TimeWindow};
use crate::error::{TimelineError, TimelineResult};

/// Shown instead of blocks when nothing falls inside the window.
pub const EMPTY_STATE_NOTICE: &str = "No visible entries in the current focus.";

/// Horizontal grid line at an hour or quarter-hour boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMark {
    pub offset_pct: f64,
    pub is_hour: bool,
}

/// `HH:00` label placed next to an hour boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLabel {
    pub offset_pct: f64,
    pub text: String,
}

/// One positioned, colored event on the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    pub top_pct: f64,
    pub height_pct: f64,
    pub color: EventColor,
    pub category: DisplayCategory,
    pub label: String,
    pub tooltip: String,
}

/// Presentation-ready result of one render pass.
///
/// A scene carrying `error` is degraded: its window is empty and it holds no
/// marks or blocks. Hosts render the error banner instead of a strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub window_start: i64,
    pub window_end: i64,
    pub height_px: u32,
    pub grid_marks: Vec<GridMark>,
    pub hour_labels: Vec<HourLabel>,
    pub event_blocks: Vec<EventBlock>,
    pub visible_count: usize,
    pub is_empty: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl Scene {
    /// Assembles a scene and derives the visible aggregates from the blocks.
    #[must_use]
    pub fn new(
        window: TimeWindow,
        height_px: u32,
        grid_marks: Vec<GridMark>,
        hour_labels: Vec<HourLabel>,
        event_blocks: Vec<EventBlock>,
    ) -> Self {
        let visible_count = event_blocks.len();
        Self {
            window_start: window.start(),
            window_end: window.end(),
            height_px,
            grid_marks,
            hour_labels,
            event_blocks,
            visible_count,
            is_empty: visible_count == 0,
            error: None,
        }
    }

    #[must_use]
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            window_start: 0,
            window_end: 0,
            height_px: MIN_HEIGHT_PX,
            grid_marks: Vec::new(),
            hour_labels: Vec::new(),
            event_blocks: Vec::new(),
            visible_count: 0,
            is_empty: true,
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.window_start, self.window_end).ok()
    }

    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} entries", self.visible_count)
    }

    #[must_use]
    pub fn empty_state_notice(&self) -> Option<&'static str> {
        (self.is_empty && !self.is_degraded()).then_some(EMPTY_STATE_NOTICE)
    }

    #[must_use]
    pub fn error_banner(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|message| format!("Timeline error: {message}"))
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.is_degraded() {
            return Ok(());
        }
        if self.window().is_none() {
            return Err(TimelineError::InvalidWindow {
                start: self.window_start,
                end: self.window_end,
            });
        }
        if self.visible_count != self.event_blocks.len() || self.is_empty != (self.visible_count == 0)
        {
            return Err(TimelineError::InvalidData(
                "scene aggregates disagree with its blocks".to_owned(),
            ));
        }

        for mark in &self.grid_marks {
            validate_offset(mark.offset_pct, "grid mark offset")?;
        }
        for label in &self.hour_labels {
            validate_offset(label.offset_pct, "hour label offset")?;
        }
        for block in &self.event_blocks {
            validate_offset(block.top_pct, "block top")?;
            if !block.height_pct.is_finite() || block.height_pct <= 0.0 {
                return Err(TimelineError::InvalidData(
                    "block height must be finite and > 0".to_owned(),
                ));
            }
            block.color.to_rgba().validate()?;
        }
        Ok(())
    }
}

fn validate_offset(value: f64, what: &str) -> TimelineResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(TimelineError::InvalidData(format!(
            "{what} must be finite and in [0, 100]"
        )));
    }
    Ok(())
}
