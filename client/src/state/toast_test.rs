use super::*;

#[test]
fn show_starts_entering() {
    let mut state = ToastState::default();
    state.show("Switched to dark mode");
    let toast = state.current().expect("toast visible");
    assert_eq!(toast.message, "Switched to dark mode");
    assert_eq!(toast.phase, ToastPhase::Entering);
}

#[test]
fn steps_walk_through_phases_then_remove() {
    let mut state = ToastState::default();
    let generation = state.show("hi");
    state.advance(generation, ToastStep::Show);
    assert_eq!(state.current().map(|t| t.phase), Some(ToastPhase::Shown));
    state.advance(generation, ToastStep::Leave);
    assert_eq!(state.current().map(|t| t.phase), Some(ToastPhase::Leaving));
    state.advance(generation, ToastStep::Remove);
    assert_eq!(state.current(), None);
}

#[test]
fn stale_steps_do_not_remove_newer_toast() {
    let mut state = ToastState::default();
    let old = state.show("first");
    let new = state.show("second");
    state.advance(old, ToastStep::Remove);
    assert_eq!(state.current().map(|t| t.message), Some("second"));
    state.advance(new, ToastStep::Show);
    assert_eq!(state.current().map(|t| t.phase), Some(ToastPhase::Shown));
}

#[test]
fn sequence_fires_in_documented_order() {
    let waits = toast_sequence().into_waits();
    assert_eq!(
        waits,
        vec![(100, ToastStep::Show), (2400, ToastStep::Leave), (400, ToastStep::Remove)]
    );
}
