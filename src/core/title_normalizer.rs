use std::fmt;

use serde::{Deserialize, Serialize};

/// Category every browser-originated title collapses into.
pub const BROWSER_CATEGORY: &str = "Firefox";

const EM_DASH: char = '\u{2014}';
const SPACED_HYPHEN: &str = " - ";

/// Stable grouping key derived from an event title; one color per category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayCategory(String);

impl DisplayCategory {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayCategory {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Maps a raw title to its display category.
///
/// Rules, first match wins:
/// 1. mentions "firefox" or "mozilla" (any case) -> [`BROWSER_CATEGORY`]
/// 2. contains a URL scheme marker `://` -> [`BROWSER_CATEGORY`]
/// 3. "source — detail" or "source - detail" -> trimmed `source`
/// 4. otherwise the title itself
#[must_use]
pub fn normalize_title(raw: &str) -> DisplayCategory {
    if raw.is_empty() {
        return DisplayCategory::default();
    }

    let lower = raw.to_lowercase();
    if lower.contains("firefox") || lower.contains("mozilla") || raw.contains("://") {
        return DisplayCategory::from(BROWSER_CATEGORY);
    }

    if let Some(index) = raw.find(EM_DASH) {
        return DisplayCategory::from(raw[..index].trim());
    }
    if let Some(index) = raw.find(SPACED_HYPHEN) {
        return DisplayCategory::from(raw[..index].trim());
    }

    DisplayCategory::from(raw)
}
