//! Timestamp normalization, window selection and percentage mapping.
//!
//! All instants are epoch milliseconds. Calendar arithmetic ("day@08:00") is
//! evaluated in the caller-provided time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::core::primitives::local_to_epoch_millis;
use crate::core::{EventBounds, RawEvent, RawTimestamp, TimeWindow};
use crate::error::{TimelineError, TimelineResult};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const QUARTER_HOUR_MS: i64 = 15 * MINUTE_MS;

/// Numeric timestamps below this value are read as seconds, not milliseconds.
///
/// A millisecond epoch before 1970-01-12 is therefore misread as seconds.
pub const SECONDS_EPOCH_THRESHOLD: f64 = 1e12;
/// Largest representable instant magnitude, in milliseconds.
pub const MAX_EPOCH_MS: f64 = 8.64e15;

pub const FOCUS_PADDING_MS: i64 = 5 * MINUTE_MS;
pub const MIN_FOCUS_SPAN_MS: i64 = 15 * MINUTE_MS;
pub const DEFAULT_FOCUS_START_HOUR: u32 = 8;
pub const DEFAULT_FOCUS_END_HOUR: u32 = 20;

pub const HEIGHT_REFERENCE_SPAN_MS: i64 = 12 * HOUR_MS;
pub const DEFAULT_BASE_HEIGHT_PX: u32 = 1200;
pub const MIN_HEIGHT_PX: u32 = 300;
pub const MAX_HEIGHT_PX: u32 = 3000;
pub const FOCUS_VIEWPORT_FILL_RATIO: f64 = 0.85;

const NAIVE_DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Normalizes any producer timestamp to epoch milliseconds.
///
/// Returns `None` for anything that does not resolve to a finite instant.
#[must_use]
pub fn parse_flexible_timestamp<Tz: TimeZone>(raw: &RawTimestamp, zone: &Tz) -> Option<i64> {
    match raw {
        RawTimestamp::Number(value) => epoch_millis_from_number(*value),
        RawTimestamp::Text(text) => epoch_millis_from_text(text, zone),
        RawTimestamp::Missing | RawTimestamp::Other(_) => None,
    }
}

/// Applies the seconds heuristic and truncates to whole milliseconds.
#[must_use]
pub fn epoch_millis_from_number(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value < SECONDS_EPOCH_THRESHOLD {
        value * 1000.0
    } else {
        value
    };
    within_epoch_range(millis.trunc())
}

/// Parses RFC 3339 instants, naive ISO date-times (zone-local) and bare dates (UTC midnight).
#[must_use]
pub fn epoch_millis_from_text<Tz: TimeZone>(text: &str, zone: &Tz) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return within_epoch_range(instant.timestamp_millis() as f64);
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local_to_epoch_millis(naive, zone)
                .and_then(|millis| within_epoch_range(millis as f64));
        }
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    within_epoch_range(midnight.timestamp_millis() as f64)
}

fn within_epoch_range(millis: f64) -> Option<i64> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MS {
        return None;
    }
    Some(millis as i64)
}

/// Normalizes both endpoints of an event; `None` marks it unrenderable.
#[must_use]
pub fn event_bounds<Tz: TimeZone>(event: &RawEvent, zone: &Tz) -> Option<EventBounds> {
    let start = parse_flexible_timestamp(&event.start, zone)?;
    let end = parse_flexible_timestamp(&event.end, zone)?;
    Some(EventBounds::new(start, end))
}

/// Parses a `YYYY-MM-DD` calendar day.
pub fn parse_day(day: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
        .map_err(|e| TimelineError::InvalidDay(format!("`{day}`: {e}")))
}

/// Returns `day@hour:minute:second` in `zone` as epoch milliseconds.
pub fn day_instant<Tz: TimeZone>(
    day: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
    zone: &Tz,
) -> TimelineResult<i64> {
    let naive = day.and_hms_opt(hour, minute, second).ok_or_else(|| {
        TimelineError::InvalidDay(format!("{day} has no time {hour:02}:{minute:02}:{second:02}"))
    })?;
    local_to_epoch_millis(naive, zone)
        .ok_or_else(|| TimelineError::InvalidDay(format!("{naive} cannot be resolved to an instant")))
}

/// Returns `(day@00:00:00, day@23:59:59)` in epoch milliseconds.
pub fn full_day_bounds<Tz: TimeZone>(day: NaiveDate, zone: &Tz) -> TimelineResult<(i64, i64)> {
    Ok((day_instant(day, 0, 0, 0, zone)?, day_instant(day, 23, 59, 59, zone)?))
}

/// Selects the visible window for `day`.
///
/// Outside focus mode this is the whole day. In focus mode the window
/// brackets all parsable events with [`FOCUS_PADDING_MS`] on each side,
/// clamped to the day. A bracket shorter than [`MIN_FOCUS_SPAN_MS`] is
/// re-centered on its midpoint at exactly that span, then slid back inside the
/// day if it pokes out. Without any parsable event focus falls back to
/// 08:00-20:00.
pub fn compute_window<Tz: TimeZone>(
    day: NaiveDate,
    focus_mode: bool,
    bounds: &[EventBounds],
    zone: &Tz,
) -> TimelineResult<TimeWindow> {
    let (full_start, full_end) = full_day_bounds(day, zone)?;
    if !focus_mode {
        return TimeWindow::new(full_start, full_end);
    }

    let (Some(min_start), Some(max_end)) = (
        bounds.iter().map(|b| b.start).min(),
        bounds.iter().map(|b| b.end).max(),
    ) else {
        return TimeWindow::new(
            day_instant(day, DEFAULT_FOCUS_START_HOUR, 0, 0, zone)?,
            day_instant(day, DEFAULT_FOCUS_END_HOUR, 0, 0, zone)?,
        );
    };

    let mut start = min_start.saturating_sub(FOCUS_PADDING_MS).max(full_start);
    let mut end = max_end.saturating_add(FOCUS_PADDING_MS).min(full_end);

    if end.saturating_sub(start) < MIN_FOCUS_SPAN_MS {
        let mid = rounded_midpoint(start, end);
        start = mid - MIN_FOCUS_SPAN_MS / 2;
        end = start + MIN_FOCUS_SPAN_MS;
        if start < full_start {
            start = full_start;
            end = start + MIN_FOCUS_SPAN_MS;
        } else if end > full_end {
            end = full_end;
            start = end - MIN_FOCUS_SPAN_MS;
        }
    }

    TimeWindow::new(start, end)
}

// Halves round toward positive infinity.
fn rounded_midpoint(start: i64, end: i64) -> i64 {
    (i128::from(start) + i128::from(end) + 1).div_euclid(2) as i64
}

/// Linear map of `instant` onto `[0, 100]` for a window; deliberately unclamped.
#[must_use]
pub fn pct(instant: i64, win_start: i64, win_span: i64) -> f64 {
    (instant - win_start) as f64 / win_span as f64 * 100.0
}

/// Strip height for a window span.
///
/// Scales linearly so a 12 hour span equals `base_height_px`. In focus mode a
/// supplied viewport raises the result to 85% of its height. The result is
/// always within `[MIN_HEIGHT_PX, MAX_HEIGHT_PX]`; a zero base height falls
/// back to [`DEFAULT_BASE_HEIGHT_PX`].
#[must_use]
pub fn compute_height(
    win_span: i64,
    base_height_px: u32,
    focus_mode: bool,
    viewport_px: Option<u32>,
) -> u32 {
    let base = if base_height_px == 0 {
        DEFAULT_BASE_HEIGHT_PX
    } else {
        base_height_px
    };
    let mut height = (win_span as f64 / HEIGHT_REFERENCE_SPAN_MS as f64 * f64::from(base)).round();

    if focus_mode {
        if let Some(viewport) = viewport_px {
            height = height.max((f64::from(viewport) * FOCUS_VIEWPORT_FILL_RATIO).round());
        }
    }

    if !height.is_finite() {
        return MIN_HEIGHT_PX;
    }
    height.clamp(f64::from(MIN_HEIGHT_PX), f64::from(MAX_HEIGHT_PX)) as u32
}
