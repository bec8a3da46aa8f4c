use activity_timeline::telemetry::{init_default_tracing, init_tracing_with_filter};

#[test]
fn tracing_installs_at_most_once() {
    assert_eq!(init_default_tracing(), cfg!(feature = "telemetry"));
    assert!(!init_tracing_with_filter("activity_timeline=debug"));
}
