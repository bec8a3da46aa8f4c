pub mod color_assigner;
pub mod event;
pub mod primitives;
pub mod time_math;
pub mod title_normalizer;
pub mod types;

pub use color_assigner::{ColorMemo, EventColor, category_hue, color_for};
pub use event::{RawEvent, RawTimestamp, TabSample, parse_events_json};
pub use time_math::{
    compute_height, compute_window, event_bounds, parse_day, parse_flexible_timestamp, pct,
};
pub use title_normalizer::{BROWSER_CATEGORY, DisplayCategory, normalize_title};
pub use types::{EventBounds, TimeWindow};
