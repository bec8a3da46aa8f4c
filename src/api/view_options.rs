use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::parse_day;
use crate::core::time_math::DEFAULT_BASE_HEIGHT_PX;
use crate::error::{TimelineError, TimelineResult};

/// View state that drives one render: which day, focus mode and base height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub day: NaiveDate,
    #[serde(default = "default_focus_mode")]
    pub focus_mode: bool,
    #[serde(default = "default_base_height_px")]
    pub base_height_px: u32,
}

impl ViewOptions {
    #[must_use]
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            focus_mode: default_focus_mode(),
            base_height_px: default_base_height_px(),
        }
    }

    /// Builds options from a `YYYY-MM-DD` day string.
    pub fn for_day_str(day: &str) -> TimelineResult<Self> {
        Ok(Self::new(parse_day(day)?))
    }

    /// Reads the timeline route's query parameters.
    ///
    /// A missing day means `today`; `focus` is truthy unless `0`; a missing or
    /// non-positive height falls back to the default base height.
    pub fn from_query(
        day: Option<&str>,
        focus: Option<i64>,
        height: Option<i64>,
        today: NaiveDate,
    ) -> TimelineResult<Self> {
        let day = match day {
            Some(raw) if !raw.trim().is_empty() => parse_day(raw)?,
            _ => today,
        };
        let base_height_px = height
            .filter(|px| *px > 0)
            .map(|px| u32::try_from(px).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_BASE_HEIGHT_PX);
        Ok(Self {
            day,
            focus_mode: focus.is_none_or(|flag| flag != 0),
            base_height_px,
        })
    }

    #[must_use]
    pub fn with_focus_mode(mut self, focus_mode: bool) -> Self {
        self.focus_mode = focus_mode;
        self
    }

    #[must_use]
    pub fn with_base_height_px(mut self, base_height_px: u32) -> Self {
        self.base_height_px = base_height_px;
        self
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist the last view without inventing a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub options: ViewOptions,
    #[serde(default)]
    pub viewport_height_px: Option<u32>,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(options: ViewOptions) -> Self {
        Self {
            options,
            viewport_height_px: None,
        }
    }

    /// Sets the host viewport height used to fill the screen in focus mode.
    #[must_use]
    pub fn with_viewport_height_px(mut self, viewport_height_px: u32) -> Self {
        self.viewport_height_px = Some(viewport_height_px);
        self
    }

    #[must_use]
    pub fn with_focus_mode(mut self, focus_mode: bool) -> Self {
        self.options.focus_mode = focus_mode;
        self
    }

    #[must_use]
    pub fn with_base_height_px(mut self, base_height_px: u32) -> Self {
        self.options.base_height_px = base_height_px;
        self
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_focus_mode() -> bool {
    true
}

fn default_base_height_px() -> u32 {
    DEFAULT_BASE_HEIGHT_PX
}
