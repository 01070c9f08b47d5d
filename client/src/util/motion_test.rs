use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Easing + counters
// =============================================================

#[test]
fn ease_out_quart_endpoints_and_clamp() {
    assert!(close(ease_out_quart(0.0), 0.0));
    assert!(close(ease_out_quart(1.0), 1.0));
    assert!(close(ease_out_quart(-1.0), 0.0));
    assert!(close(ease_out_quart(2.0), 1.0));
    assert!(close(ease_out_quart(0.5), 0.9375));
}

#[test]
fn counter_parse_keeps_suffix() {
    assert_eq!(Counter::parse("150+"), Some(Counter { target: 150, suffix: "+" }));
    assert_eq!(Counter::parse("98%"), Some(Counter { target: 98, suffix: "%" }));
    assert_eq!(Counter::parse("5"), Some(Counter { target: 5, suffix: "" }));
    assert_eq!(Counter::parse("n/a"), None);
}

#[test]
fn counter_runs_from_zero_to_target() {
    let c = Counter { target: 150, suffix: "+" };
    assert_eq!(c.value_at(0.0, 1500.0), 0);
    assert_eq!(c.value_at(1500.0, 1500.0), 150);
    assert_eq!(c.value_at(9000.0, 1500.0), 150);
}

#[test]
fn counter_is_monotonic() {
    let c = Counter { target: 98, suffix: "%" };
    let mut last = 0;
    for step in 0..=100 {
        let v = c.value_at(f64::from(step) * 15.0, 1500.0);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(last, 98);
}

#[test]
fn counter_frame_reports_completion() {
    let c = Counter { target: 5, suffix: "" };
    assert_eq!(c.frame(0.0, 1500.0), ("0".to_owned(), false));
    assert_eq!(c.frame(1500.0, 1500.0), ("5".to_owned(), true));
    assert_eq!(c.render(3), "3");
}

#[test]
fn zero_duration_jumps_to_target() {
    let c = Counter { target: 42, suffix: "+" };
    assert_eq!(c.value_at(0.0, 0.0), 42);
}

// =============================================================
// Tilt + magnetic
// =============================================================

#[test]
fn pointer_at_card_center_means_no_tilt() {
    let section = Rect { left: 0.0, top: 0.0, width: 1000.0, height: 800.0 };
    let card = Rect { left: 100.0, top: 100.0, width: 200.0, height: 200.0 };
    let tilt = section_tilt((200.0, 200.0), section, card);
    assert!(close(tilt.rotate_x, 0.0));
    assert!(close(tilt.rotate_y, 0.0));
}

#[test]
fn tilt_is_proportional_to_offset() {
    let section = Rect { left: 0.0, top: 0.0, width: 1000.0, height: 800.0 };
    let card = Rect { left: 0.0, top: 0.0, width: 200.0, height: 200.0 };
    // dx = (600 - 100) / 500 = 1, dy = (500 - 100) / 400 = 1
    let tilt = section_tilt((600.0, 500.0), section, card);
    assert!(close(tilt.rotate_y, 5.0));
    assert!(close(tilt.rotate_x, -5.0));
    assert_eq!(tilt.css(), "perspective(1000px) rotateX(-5.00deg) rotateY(5.00deg)");
}

#[test]
fn degenerate_section_yields_no_tilt() {
    let tilt = section_tilt((10.0, 10.0), Rect::default(), Rect::default());
    assert_eq!(tilt, Tilt::default());
}

#[test]
fn tilt_only_on_wide_viewports() {
    assert!(!tilt_enabled(768.0));
    assert!(tilt_enabled(1024.0));
}

#[test]
fn magnetic_offset_pulls_toward_pointer() {
    let button = Rect { left: 0.0, top: 0.0, width: 100.0, height: 40.0 };
    let (x, y) = magnetic_offset((100.0, 20.0), button);
    assert!(close(x, 15.0));
    assert!(close(y, 0.0));
}
