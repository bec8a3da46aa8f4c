use activity_timeline::api::{SCENE_JSON_SCHEMA_V1, TimelineEngineConfig, ViewOptions, render_scene};
use activity_timeline::core::parse_events_json;
use activity_timeline::render::Scene;
use chrono::{NaiveDate, Utc};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

#[test]
fn page_event_batch_renders_end_to_end() {
    let events = parse_events_json(
        r#"[
            {"title": "Terminal - cargo", "start": 1704099600000, "end": 1704101400000},
            {"title": "Notes", "start": "2024-01-01T12:00:00", "end": "2024-01-01T12:45:00"},
            {"title": "broken", "start": "???", "end": "2024-01-01T13:00:00"},
            {"title": "seconds", "start": 1704110400, "end": 1704111000}
        ]"#,
    )
    .expect("events json");

    let scene = render_scene(&events, &ViewOptions::new(day()), &Utc, None);
    assert_eq!(scene.visible_count, 3);
    assert_eq!(scene.event_blocks[0].category.as_str(), "Terminal");
}

#[test]
fn scene_contract_v1_round_trips() {
    let events = parse_events_json(
        r#"[{"title": "A", "start": "2024-01-01T09:00:00", "end": "2024-01-01T09:30:00"}]"#,
    )
    .expect("events json");
    let scene = render_scene(&events, &ViewOptions::new(day()), &Utc, None);

    let json = scene.to_json_contract_v1_pretty().expect("contract json");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = Scene::from_json_compat_str(&json).expect("restore");
    assert_eq!(restored.visible_count, scene.visible_count);
    assert_eq!(restored.grid_marks.len(), scene.grid_marks.len());
    assert_eq!(restored.event_blocks[0].label, "A");
    assert_eq!(restored.event_blocks[0].color, scene.event_blocks[0].color);

    let bare = Scene::from_json_compat_str(&scene.to_json_pretty().expect("bare json"))
        .expect("restore bare");
    assert_eq!(bare.window_start, scene.window_start);
}

#[test]
fn unknown_scene_schema_is_rejected() {
    let scene = Scene::degraded("boom");
    let json = serde_json::json!({
        "schema_version": SCENE_JSON_SCHEMA_V1 + 1,
        "scene": scene,
    })
    .to_string();
    let err = Scene::from_json_compat_str(&json).expect_err("future schema must fail");
    assert!(format!("{err}").contains("unsupported scene schema version"));
}

#[test]
fn degraded_scene_carries_the_error_banner() {
    let scene = Scene::degraded("window collapsed");
    assert!(scene.is_degraded());
    assert!(scene.is_empty);
    assert_eq!(scene.empty_state_notice(), None);
    assert_eq!(
        scene.error_banner().as_deref(),
        Some("Timeline error: window collapsed")
    );
    scene.validate().expect("degraded scenes are valid");
}

#[test]
fn config_json_round_trips_and_fills_defaults() {
    let config = TimelineEngineConfig::new(ViewOptions::new(day()))
        .with_focus_mode(false)
        .with_base_height_px(900)
        .with_viewport_height_px(800);
    let json = config.to_json_pretty().expect("config json");
    assert_eq!(TimelineEngineConfig::from_json_str(&json).expect("parse"), config);

    let minimal = TimelineEngineConfig::from_json_str(r#"{"options": {"day": "2024-01-01"}}"#)
        .expect("minimal config");
    assert!(minimal.options.focus_mode);
    assert_eq!(minimal.options.base_height_px, 1200);
    assert_eq!(minimal.viewport_height_px, None);
}

#[test]
fn malformed_config_is_an_error() {
    let err = TimelineEngineConfig::from_json_str("{").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse config"));
}
