use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), top: 0.0, height: 600.0 },
        SectionBounds { id: "projects".to_owned(), top: 600.0, height: 900.0 },
        SectionBounds { id: "about".to_owned(), top: 1500.0, height: 500.0 },
        SectionBounds { id: "contact".to_owned(), top: 2000.0, height: 700.0 },
    ]
}

#[test]
fn menu_toggles_and_closes() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.menu_open);
}

#[test]
fn active_section_uses_offset_probe() {
    let s = sections();
    assert_eq!(active_section(0.0, &s), Some("home"));
    // 550 + 100 lands inside projects.
    assert_eq!(active_section(550.0, &s), Some("projects"));
    assert_eq!(active_section(1950.0, &s), Some("contact"));
}

#[test]
fn shared_boundary_prefers_later_section() {
    let s = sections();
    assert_eq!(active_section(500.0, &s), Some("projects"));
}

#[test]
fn scroll_outside_every_section_keeps_previous_link() {
    let mut nav = NavState::default();
    nav.on_scroll(700.0, &sections());
    assert!(nav.is_active("projects"));
    nav.on_scroll(5000.0, &sections());
    assert!(nav.is_active("projects"));
}

#[test]
fn scrolled_flag_follows_threshold() {
    let mut nav = NavState::default();
    nav.on_scroll(100.0, &[]);
    assert!(!nav.scrolled);
    nav.on_scroll(101.0, &[]);
    assert!(nav.scrolled);
    nav.on_scroll(0.0, &[]);
    assert!(!nav.scrolled);
}
