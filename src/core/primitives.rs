use chrono::{NaiveDateTime, Offset, TimeDelta, TimeZone};

// Every real-world DST gap is shorter than this, so a wall-clock time this far
// back resolves with the offset in effect before the transition.
const GAP_LOOKBACK_HOURS: i64 = 3;

/// Resolves a wall-clock time in `zone` to epoch milliseconds.
///
/// Ambiguous times (DST fold) pick the earlier instant. Times inside a DST gap
/// keep the UTC offset in effect before the transition, so they land past the
/// gap by however much the clock skipped.
#[must_use]
pub fn local_to_epoch_millis<Tz: TimeZone>(naive: NaiveDateTime, zone: &Tz) -> Option<i64> {
    if let Some(resolved) = zone.from_local_datetime(&naive).earliest() {
        return Some(resolved.timestamp_millis());
    }
    let before = naive.checked_sub_signed(TimeDelta::hours(GAP_LOOKBACK_HOURS))?;
    let offset = zone.offset_from_local_datetime(&before).earliest()?.fix();
    let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(utc.and_utc().timestamp_millis())
}

#[must_use]
pub fn epoch_millis_to_local<Tz: TimeZone>(millis: i64, zone: &Tz) -> Option<NaiveDateTime> {
    zone.timestamp_millis_opt(millis)
        .single()
        .map(|instant| instant.naive_local())
}

/// Formats an absolute instant for tooltips.
#[must_use]
pub fn format_local_instant<Tz: TimeZone>(millis: i64, zone: &Tz) -> String {
    match epoch_millis_to_local(millis, zone) {
        Some(local) => local.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("@{millis}ms"),
    }
}
