use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Normalized bounds of one event in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBounds {
    pub start: i64,
    pub end: i64,
}

impl EventBounds {
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Visible time span `[start, end)` of one render pass, in epoch milliseconds.
///
/// A window always has a strictly positive span; construction rejects
/// anything else so downstream percentage math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> TimelineResult<Self> {
        if end <= start {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> i64 {
        self.end
    }

    #[must_use]
    pub fn span(self) -> i64 {
        self.end - self.start
    }

    /// Maps an instant to its unclamped offset within the window, in percent.
    #[must_use]
    pub fn pct(self, instant: i64) -> f64 {
        crate::core::time_math::pct(instant, self.start, self.span())
    }
}
