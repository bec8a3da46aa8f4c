use chrono::{TimeZone, Timelike};

use crate::core::TimeWindow;
use crate::core::primitives::{epoch_millis_to_local, local_to_epoch_millis};
use crate::core::time_math::{HOUR_MS, QUARTER_HOUR_MS};
use crate::render::{GridMark, HourLabel};

/// Hour labels from the local hour at/before the window start through its end.
#[must_use]
pub fn build_hour_labels<Tz: TimeZone>(window: TimeWindow, zone: &Tz) -> Vec<HourLabel> {
    let mut labels = Vec::new();
    let mut tick = first_hour_at_or_before(window.start(), zone);
    while tick <= window.end() {
        if tick >= window.start() {
            let hour = epoch_millis_to_local(tick, zone)
                .map(|local| local.hour())
                .unwrap_or_else(|| tick.div_euclid(HOUR_MS).rem_euclid(24) as u32);
            labels.push(HourLabel {
                offset_pct: window.pct(tick),
                text: format!("{hour:02}:00"),
            });
        }
        tick += HOUR_MS;
    }
    labels
}

/// Quarter-hour grid lines; marks falling on a local full hour are hour lines.
#[must_use]
pub fn build_grid_lines<Tz: TimeZone>(window: TimeWindow, zone: &Tz) -> Vec<GridMark> {
    let mut marks = Vec::new();
    let mut tick = window.start().div_euclid(QUARTER_HOUR_MS) * QUARTER_HOUR_MS;
    while tick <= window.end() {
        if tick >= window.start() {
            let is_hour = epoch_millis_to_local(tick, zone)
                .map(|local| local.minute() == 0)
                .unwrap_or_else(|| tick.rem_euclid(HOUR_MS) == 0);
            marks.push(GridMark {
                offset_pct: window.pct(tick),
                is_hour,
            });
        }
        tick += QUARTER_HOUR_MS;
    }
    marks
}

fn first_hour_at_or_before<Tz: TimeZone>(instant: i64, zone: &Tz) -> i64 {
    let epoch_floor = instant.div_euclid(HOUR_MS) * HOUR_MS;
    let Some(local) = epoch_millis_to_local(instant, zone) else {
        return epoch_floor;
    };
    let Some(hour_start) = local
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
    else {
        return epoch_floor;
    };
    match local_to_epoch_millis(hour_start, zone) {
        Some(tick) if tick > instant => tick - HOUR_MS,
        Some(tick) => tick,
        None => epoch_floor,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::first_hour_at_or_before;
    use crate::core::time_math::{HOUR_MS, MINUTE_MS};

    #[test]
    fn hour_floor_respects_half_hour_offsets() {
        // 10:40 UTC is 16:10 at +05:30, so the local hour starts at 10:30 UTC.
        let zone = FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset");
        let instant = 10 * HOUR_MS + 40 * MINUTE_MS;
        assert_eq!(
            first_hour_at_or_before(instant, &zone),
            10 * HOUR_MS + 30 * MINUTE_MS
        );
        assert_eq!(first_hour_at_or_before(instant, &Utc), 10 * HOUR_MS);
    }
}
