#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn system_prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn watch_is_noop_but_callable() {
    watch_system_preference(|_| panic!("no system events outside the browser"));
}

#[test]
fn document_sink_forwards_without_panicking() {
    let mut sink = DocumentTheme;
    sink.apply(Theme::Dark);
}
