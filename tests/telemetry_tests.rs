use lifestyle_charts::telemetry::{init_default_tracing, init_tracing_with_default_filter};

#[test]
fn tracing_is_installed_at_most_once() {
    let first = init_default_tracing();
    let second = init_tracing_with_default_filter("lifestyle_charts=debug");

    assert!(!second);
    if !cfg!(feature = "telemetry") {
        assert!(!first);
    }
}
