use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Request to show another day; fulfilled by the host, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub day: NaiveDate,
}

impl NavigationRequest {
    #[must_use]
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }

    /// Resolves "today" for `now` as seen in `zone`.
    #[must_use]
    pub fn today_at<Tz: TimeZone>(now: DateTime<Utc>, zone: &Tz) -> Self {
        Self::new(now.with_timezone(zone).date_naive())
    }

    /// Route of the timeline page for this day.
    #[must_use]
    pub fn route(&self) -> String {
        format!("/timeline?day={}", self.day.format("%Y-%m-%d"))
    }
}

/// Host capability that performs page/route transitions.
pub trait Navigator {
    fn navigate(&mut self, request: &NavigationRequest);
}
