#![cfg(test)]
use gradebook_common::error::StoreError;
use gradebook_core::presenter::{ActionError, ProjectPresenter};
use gradebook_core::store::ProjectStore;

use crate::support::RecordingView;

fn presenter() -> ProjectPresenter<RecordingView> {
    let mut presenter = ProjectPresenter::new(ProjectStore::new(), RecordingView::default());
    presenter.start();
    presenter
}

/// A single registration is stored with its exact grade.
#[test]
fn register_single_project() {
    let mut store = ProjectStore::new();
    store.add("Calculus", 8.5).unwrap();

    assert_eq!(store.count(), 1);
    let found = store.find_by_name("Calculus").unwrap();
    assert_eq!(found.grade(), 8.5);
}

#[test]
fn delete_from_three_projects() {
    let mut store = ProjectStore::new();
    store.add("DB", 10.0).unwrap();
    store.add("Calculus", 8.5).unwrap();
    store.add("Intro", 7.0).unwrap();

    assert!(store.remove_by_name("DB"));
    assert_eq!(store.count(), 2);

    let listing = gradebook_core::listing::render(store.list());
    assert!(listing.contains("Calculus"));
    assert!(listing.contains("Intro"));
    assert!(!listing.contains("DB"));
}

#[test]
fn negative_grade_leaves_store_empty() {
    let mut store = ProjectStore::new();
    assert!(matches!(
        store.add("X", -1.0),
        Err(StoreError::InvalidGrade { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn empty_name_is_rejected_before_grade_parsing() {
    let mut p = presenter();
    let outcome = p.submit_new_project("", "7.5");
    assert!(matches!(outcome.error(), Some(ActionError::EmptyName)));

    let garbage = p.submit_new_project("", "not a number");
    assert!(matches!(garbage.error(), Some(ActionError::EmptyName)));

    assert_eq!(p.view().errors.len(), 2);
    assert_eq!(p.project_count(), 0);
}

#[test]
fn empty_register_renders_fixed_text() {
    let p = presenter();
    assert_eq!(p.render_listing(), "No projects registered.");
    assert!(!p.render_listing().is_empty());
    assert_eq!(p.view().listing, "No projects registered.");
}

#[test]
fn full_session_through_the_presenter() {
    let mut p = presenter();
    assert_eq!(p.view().status, "Application started. Enter a project.");

    assert!(p.submit_new_project("DB", "10").is_completed());
    assert!(p.submit_new_project("Calculus", " 8.5").is_completed());
    assert!(p.submit_new_project("calculus", "6").is_completed());
    assert_eq!(p.view().cleared_inputs, 3);

    let duplicate = p.submit_new_project("Calculus", "9");
    assert_eq!(duplicate.message(), "A project with that name already exists.");

    let out_of_range = p.submit_new_project("Physics", "10.001");
    assert_eq!(out_of_range.message(), "Grade must be between 0 and 10.");

    p.view_mut().delete_names.push_back(Some("  DB ".into()));
    assert!(p.request_delete().is_completed());

    p.view_mut().delete_names.push_back(None);
    assert!(p.request_delete().is_cancelled());

    p.view_mut().delete_names.push_back(Some("Physics".into()));
    let missing = p.request_delete();
    assert_eq!(missing.message(), "No project found with the name 'Physics'.");

    assert_eq!(
        p.view().listing,
        "Name: Calculus, Grade: 8.50\nName: calculus, Grade: 6.00"
    );
    assert_eq!(p.project_count(), 2);

    p.view_mut().confirmations.push_back(false);
    assert!(p.clear_all().is_cancelled());
    assert_eq!(p.project_count(), 2);

    p.view_mut().confirmations.push_back(true);
    assert!(p.clear_all().is_completed());
    assert_eq!(p.project_count(), 0);
    assert_eq!(p.view().listing, "No projects registered.");
    assert_eq!(p.view().questions.len(), 2);
}

#[test]
fn collaborator_failure_keeps_session_alive() {
    let mut p = presenter();
    p.submit_new_project("DB", "10");

    let outcome = p.clear_all();
    assert!(matches!(outcome.error(), Some(ActionError::Unexpected(_))));
    assert_eq!(
        outcome.message(),
        "An unexpected error occurred: no confirmation queued"
    );
    assert_eq!(p.project_count(), 1);

    assert!(p.submit_new_project("Intro", "7").is_completed());
    assert_eq!(p.project_count(), 2);
}

#[test]
fn boundary_grades_via_form_text() {
    let mut p = presenter();
    assert!(p.submit_new_project("Zero", "0").is_completed());
    assert!(p.submit_new_project("Ten", "10.0").is_completed());
    assert!(p.submit_new_project("Below", "-0.001").error().is_some());
    assert_eq!(p.project_count(), 2);
}
