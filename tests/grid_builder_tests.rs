use activity_timeline::api::{build_grid_lines, build_hour_labels};
use activity_timeline::core::TimeWindow;
use activity_timeline::core::time_math::{HOUR_MS, MINUTE_MS};
use approx::assert_abs_diff_eq;
use activity_timeline::core::time_math::full_day_bounds;
use chrono::{FixedOffset, NaiveDate, Utc};
use chrono_tz::Europe::Berlin;

const DAY_START: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z

fn at(hour: i64, minute: i64, second: i64) -> i64 {
    DAY_START + hour * HOUR_MS + minute * MINUTE_MS + second * 1000
}

#[test]
fn business_hours_window_has_thirteen_hour_labels() {
    let window = TimeWindow::new(at(8, 0, 0), at(20, 0, 0)).expect("window");
    let labels = build_hour_labels(window, &Utc);

    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0].text, "08:00");
    assert_eq!(labels[0].offset_pct, 0.0);
    assert_eq!(labels[12].text, "20:00");
    assert_eq!(labels[12].offset_pct, 100.0);
    assert_abs_diff_eq!(labels[1].offset_pct, 100.0 / 12.0, epsilon = 1e-9);
}

#[test]
fn full_day_grid_has_quarter_and_hour_marks() {
    let window = TimeWindow::new(at(0, 0, 0), at(23, 59, 59)).expect("window");
    let marks = build_grid_lines(window, &Utc);
    let labels = build_hour_labels(window, &Utc);

    assert_eq!(marks.len(), 96);
    assert_eq!(marks.iter().filter(|m| m.is_hour).count(), 24);
    assert!(marks[0].is_hour);
    assert!(!marks[1].is_hour);
    assert_eq!(labels.len(), 24);
    assert_eq!(labels[23].text, "23:00");
    assert!(marks.iter().all(|m| (0.0..=100.0).contains(&m.offset_pct)));
}

#[test]
fn marks_before_the_window_are_skipped_not_clamped() {
    let window = TimeWindow::new(at(8, 53, 30), at(9, 8, 30)).expect("window");
    let marks = build_grid_lines(window, &Utc);
    let labels = build_hour_labels(window, &Utc);

    assert_eq!(marks.len(), 1);
    assert!(marks[0].is_hour);
    assert_abs_diff_eq!(marks[0].offset_pct, 390.0 / 900.0 * 100.0, epsilon = 1e-9);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].text, "09:00");
    assert_eq!(labels[0].offset_pct, marks[0].offset_pct);
}

#[test]
fn labels_and_hour_marks_follow_the_layout_zone() {
    // 02:30-04:30 UTC is 08:00-10:00 at +05:30.
    let zone = FixedOffset::east_opt(5 * 3600 + 1800).expect("valid offset");
    let window = TimeWindow::new(at(2, 30, 0), at(4, 30, 0)).expect("window");

    let texts: Vec<String> = build_hour_labels(window, &zone)
        .into_iter()
        .map(|label| label.text)
        .collect();
    assert_eq!(texts, vec!["08:00", "09:00", "10:00"]);

    let marks = build_grid_lines(window, &zone);
    assert_eq!(marks.len(), 9);
    assert_eq!(marks.iter().filter(|m| m.is_hour).count(), 3);
}

#[test]
fn builders_are_pure_functions_of_the_window() {
    let window = TimeWindow::new(at(6, 7, 0), at(18, 41, 0)).expect("window");
    assert_eq!(build_grid_lines(window, &Utc), build_grid_lines(window, &Utc));
    assert_eq!(build_hour_labels(window, &Utc), build_hour_labels(window, &Utc));
}

fn berlin_day(year: i32, month: u32, day: u32) -> TimeWindow {
    let day = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    let (start, end) = full_day_bounds(day, &Berlin).expect("bounds");
    TimeWindow::new(start, end).expect("window")
}

#[test]
fn spring_forward_day_skips_the_missing_hour_label() {
    let labels = build_hour_labels(berlin_day(2024, 3, 31), &Berlin);
    let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();

    assert_eq!(labels.len(), 23);
    assert_eq!(&texts[..3], &["00:00", "01:00", "03:00"]);
    assert_eq!(texts.last(), Some(&"23:00"));
    assert!(!texts.contains(&"02:00"));
}

#[test]
fn fall_back_day_repeats_the_folded_hour_label() {
    let labels = build_hour_labels(berlin_day(2024, 10, 27), &Berlin);
    let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();

    assert_eq!(labels.len(), 25);
    assert_eq!(&texts[..4], &["00:00", "01:00", "02:00", "02:00"]);
    assert_eq!(texts.last(), Some(&"23:00"));
    assert_abs_diff_eq!(labels[0].offset_pct, 0.0, epsilon = 1e-9);
}
