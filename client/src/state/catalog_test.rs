use super::*;

#[test]
fn identifiers_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn find_returns_matching_record() {
    let record = find("techstore").expect("techstore should exist");
    assert_eq!(record.category, "ecommerce");
    assert_eq!(record.results.len(), 4);
}

#[test]
fn find_unknown_returns_none() {
    assert!(find("nope").is_none());
    assert!(find("").is_none());
}

#[test]
fn exactly_one_record_uses_extended_layout() {
    let extended = CATALOG.iter().filter(|r| r.extended().is_some()).collect::<Vec<_>>();
    assert_eq!(extended.len(), 1);
    assert_eq!(extended[0].id, "innovatelab");
}

#[test]
fn extended_detail_has_every_tab_section() {
    let detail = find("innovatelab").and_then(ProjectRecord::extended).expect("extended detail");
    assert!(!detail.features.is_empty());
    assert!(!detail.roadmap.is_empty());
    assert!(!detail.architecture.is_empty());
    assert!(!detail.metrics.is_empty());
    assert!(!detail.links.is_empty());
}

#[test]
fn categories_are_distinct_and_ordered() {
    let cats = categories();
    assert_eq!(
        cats,
        vec![("ecommerce", "E-commerce"), ("saas", "SaaS"), ("services", "Services"), ("startup", "Startup")]
    );
}

#[test]
fn phase_status_classes_differ() {
    assert_ne!(PhaseStatus::Done.class(), PhaseStatus::Planned.class());
    assert_eq!(PhaseStatus::InProgress.label(), "In progress");
}
