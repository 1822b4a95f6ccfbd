//! End-to-end navigation flows across the public API.
//!
//! Exercises the view state machine and the cheat-code recognizer the
//! way the event loop drives them, without a terminal.

use pixelfolio::input::{SequenceRecognizer, Symbol, KONAMI_SEQUENCE};
use pixelfolio::models::Project;
use pixelfolio::nav::{NavState, View};

#[test]
fn test_landing_to_project_and_back() {
    let projects = Project::catalog();
    let mut nav = NavState::new();

    // projects control from landing
    nav.navigate(View::Projects, None);
    assert_eq!(nav.current, View::Projects);

    // open project "3"
    let project = Project::find(&projects, "3").expect("catalog has project 3");
    nav.navigate(View::ProjectDetail, Some(&project.id));
    assert_eq!(nav.current, View::ProjectDetail);
    assert_eq!(nav.selected_project.as_deref(), Some("3"));

    // back goes to the catalog, not home
    assert!(nav.back());
    assert_eq!(nav.current, View::Projects);
}

#[test]
fn test_navigation_is_last_write_wins() {
    let mut nav = NavState::new();
    nav.navigate(View::About, None);
    nav.navigate(View::Contact, None);
    nav.navigate(View::About, None);
    assert_eq!(nav.current, View::About);
}

#[test]
fn test_back_from_top_level_views_lands_home() {
    for view in [View::Projects, View::About, View::Contact] {
        let mut nav = NavState::new();
        nav.navigate(view, None);
        assert!(nav.back());
        assert_eq!(nav.current, View::Landing);
    }
}

#[test]
fn test_selection_survives_unrelated_navigation() {
    let mut nav = NavState::new();
    nav.navigate(View::ProjectDetail, Some("2"));
    nav.navigate(View::About, None);
    assert_eq!(nav.selected_project.as_deref(), Some("2"));
}

#[test]
fn test_cheat_code_during_navigation_noise() {
    let mut recognizer = SequenceRecognizer::konami();

    // Ordinary browsing first
    for symbol in [Symbol::Left, Symbol::Right, Symbol::A, Symbol::B, Symbol::Up] {
        assert!(!recognizer.feed(symbol));
    }

    // Then the full code, which must fire exactly once
    let mut fired = 0;
    for &symbol in KONAMI_SEQUENCE {
        if recognizer.feed(symbol) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(recognizer.buffered(), 0);
}

#[test]
fn test_catalog_ids_are_unique_and_resolvable() {
    let projects = Project::catalog();
    for project in &projects {
        let found = Project::find(&projects, &project.id).expect("id resolves");
        assert_eq!(found.name, project.name);
    }
    let mut ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), projects.len());
}
