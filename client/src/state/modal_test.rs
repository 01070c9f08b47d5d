use super::*;

#[test]
fn default_is_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert_eq!(state.content(), None);
}

#[test]
fn open_unknown_id_is_a_noop() {
    let mut state = ModalState::default();
    assert!(!state.open("missing"));
    assert_eq!(state, ModalState::Closed);

    state.open("cloudsync");
    assert!(!state.open("missing"));
    assert_eq!(state.record().map(|r| r.id), Some("cloudsync"));
}

#[test]
fn open_close_open_renders_identical_standard_content() {
    let mut state = ModalState::default();
    assert!(state.open("techstore"));
    let first = state.content();
    assert!(matches!(first, Some(ModalContent::Standard(r)) if r.id == "techstore"));

    state.close();
    assert_eq!(state.content(), None);

    assert!(state.open("techstore"));
    assert_eq!(state.content(), first);
}

#[test]
fn close_is_idempotent() {
    let mut state = ModalState::default();
    state.close();
    state.close();
    assert_eq!(state, ModalState::Closed);
}

#[test]
fn open_while_open_replaces_record() {
    let mut state = ModalState::default();
    state.open("techstore");
    state.open("consultpro");
    assert_eq!(state.record().map(|r| r.id), Some("consultpro"));
}

#[test]
fn extended_record_defaults_to_overview_tab() {
    let mut state = ModalState::default();
    state.open("innovatelab");
    match state.content() {
        Some(ModalContent::Extended { record, tab, .. }) => {
            assert_eq!(record.id, "innovatelab");
            assert_eq!(tab, ModalTab::Overview);
        }
        other => panic!("expected extended content, got {other:?}"),
    }
}

#[test]
fn select_tab_switches_and_reopen_resets() {
    let mut state = ModalState::default();
    state.open("innovatelab");
    assert!(state.select_tab(ModalTab::Architecture));
    assert!(matches!(state.content(), Some(ModalContent::Extended { tab: ModalTab::Architecture, .. })));

    state.open("innovatelab");
    assert!(matches!(state.content(), Some(ModalContent::Extended { tab: ModalTab::Overview, .. })));
}

#[test]
fn select_tab_ignored_for_standard_or_closed() {
    let mut state = ModalState::default();
    assert!(!state.select_tab(ModalTab::Demo));

    state.open("techstore");
    assert!(!state.select_tab(ModalTab::Demo));
    assert!(matches!(state, ModalState::Open { tab: ModalTab::Overview, .. }));
}

#[test]
fn tab_labels_are_in_display_order() {
    let labels = ModalTab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Overview", "Roadmap", "Architecture", "Demo"]);
}
