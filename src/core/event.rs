use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Timestamp exactly as delivered by the event producer.
///
/// Producers mix ISO strings, second epochs and millisecond epochs. Anything
/// else is kept as `Other` so that one malformed field only makes its own
/// event unrenderable instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl From<f64> for RawTimestamp {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawTimestamp {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawTimestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One title-tagged interval of foreground activity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "deserialize_lenient_title")]
    pub title: Option<String>,
    #[serde(default)]
    pub start: RawTimestamp,
    #[serde(default)]
    pub end: RawTimestamp,
}

impl RawEvent {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        start: impl Into<RawTimestamp>,
        end: impl Into<RawTimestamp>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            start: start.into(),
            end: end.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Payload the browser extension posts for the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSample {
    pub title: String,
    pub url: String,
}

impl TabSample {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Converts a sample observed at `observed_at` into a zero-length event.
    #[must_use]
    pub fn to_event(&self, observed_at: DateTime<Utc>) -> RawEvent {
        let millis = observed_at.timestamp_millis();
        RawEvent::new(format!("{} - {}", self.title, self.url), millis, millis)
    }
}

/// Parses the event batch embedded in a timeline page.
pub fn parse_events_json(input: &str) -> TimelineResult<Vec<RawEvent>> {
    serde_json::from_str(input)
        .map_err(|e| TimelineError::InvalidData(format!("failed to parse events json: {e}")))
}

fn deserialize_lenient_title<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(title) => Some(title),
        other => Some(other.to_string()),
    })
}
