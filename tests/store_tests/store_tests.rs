//! Tests for RecordStore
//!
//! These tests verify:
//! - Adding students and lookup by ID
//! - Capacity limit (100 students)
//! - Grade limit (10 grades) and range checks
//! - Insertion-ordered listing with averages

use gradebook::{GradebookError, RecordStore, MAX_GRADES, MAX_STUDENTS};

// =============================================================================
// Helper Functions
// =============================================================================

fn full_store() -> RecordStore {
    let mut store = RecordStore::new();
    for i in 0..MAX_STUDENTS {
        store.add(&format!("student{}", i), i as i32).unwrap();
    }
    store
}

fn store_with_full_grades(id: i32) -> RecordStore {
    let mut store = RecordStore::new();
    store.add("Ada", id).unwrap();
    for g in 0..MAX_GRADES {
        store.add_grade(id, 50.0 + g as f32).unwrap();
    }
    store
}

// =============================================================================
// Add / Find Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = RecordStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.capacity(), MAX_STUDENTS);
    assert!(!store.is_full());
}

#[test]
fn test_add_then_find() {
    let mut store = RecordStore::new();

    for (name, id) in [("Ada", 1), ("Grace", 2), ("Alan", -3), ("Edsger", 0)] {
        store.add(name, id).unwrap();
        let found = store.find_by_id(id).unwrap();
        assert_eq!(found.name(), name);
        assert_eq!(found.id(), id);
        assert_eq!(found.grade_count(), 0);
    }
    assert_eq!(store.len(), 4);
}

#[test]
fn test_find_missing_returns_none() {
    let mut store = RecordStore::new();
    store.add("Ada", 1).unwrap();

    assert!(store.find_by_id(2).is_none());
}

#[test]
fn test_duplicate_ids_first_match_wins() {
    let mut store = RecordStore::new();
    store.add("First", 5).unwrap();
    store.add("Second", 5).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(5).unwrap().name(), "First");

    store.add_grade(5, 70.0).unwrap();
    let grades: Vec<usize> = store.iter().map(|s| s.grade_count()).collect();
    assert_eq!(grades, vec![1, 0]);
}

#[test]
fn test_add_truncates_long_name() {
    let mut store = RecordStore::new();
    store.add(&"n".repeat(60), 1).unwrap();

    assert_eq!(store.find_by_id(1).unwrap().name().len(), 49);
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_fill_to_capacity() {
    let store = full_store();

    assert_eq!(store.len(), MAX_STUDENTS);
    assert!(store.is_full());
}

#[test]
fn test_add_when_full_fails_and_leaves_store_unchanged() {
    let mut store = full_store();
    let before = store.clone();

    let result = store.add("Overflow", 1000);

    assert!(matches!(
        result,
        Err(GradebookError::CapacityExceeded { capacity: 100 })
    ));
    assert_eq!(store, before);
    assert!(store.find_by_id(1000).is_none());
}

#[test]
fn test_clear_frees_capacity() {
    let mut store = full_store();
    store.clear();

    assert!(store.is_empty());
    store.add("Ada", 1).unwrap();
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Grade Tests
// =============================================================================

#[test]
fn test_add_grade_appends() {
    let mut store = RecordStore::new();
    store.add("Ada", 1).unwrap();

    let student = store.add_grade(1, 80.0).unwrap();
    assert_eq!(student.grades(), &[80.0]);

    store.add_grade(1, 90.0).unwrap();
    store.add_grade(1, 100.0).unwrap();

    let student = store.find_by_id(1).unwrap();
    assert_eq!(student.grades(), &[80.0, 90.0, 100.0]);
    assert_eq!(student.average(), 90.0);
}

#[test]
fn test_add_grade_unknown_id() {
    let mut store = RecordStore::new();
    store.add("Ada", 1).unwrap();

    let result = store.add_grade(2, 80.0);

    assert!(matches!(result, Err(GradebookError::NotFound(2))));
}

#[test]
fn test_eleventh_grade_fails_and_leaves_grades_unchanged() {
    let mut store = store_with_full_grades(1);
    let before = store.find_by_id(1).unwrap().grades().to_vec();

    let result = store.add_grade(1, 75.0);

    assert!(matches!(
        result,
        Err(GradebookError::GradeLimitExceeded { id: 1, limit: 10 })
    ));
    assert_eq!(store.find_by_id(1).unwrap().grades(), before.as_slice());
}

#[test]
fn test_grade_limit_checked_before_range() {
    let mut store = store_with_full_grades(1);

    let result = store.add_grade(1, 150.0);

    assert!(matches!(
        result,
        Err(GradebookError::GradeLimitExceeded { .. })
    ));
}

#[test]
fn test_out_of_range_grades_rejected() {
    let mut store = RecordStore::new();
    store.add("Ada", 1).unwrap();

    for value in [150.0, -5.0, 100.01, -0.01, f32::NAN, f32::INFINITY] {
        let result = store.add_grade(1, value);
        assert!(
            matches!(result, Err(GradebookError::OutOfRange(_))),
            "{} should be rejected",
            value
        );
    }
    assert_eq!(store.find_by_id(1).unwrap().grade_count(), 0);
}

#[test]
fn test_boundary_grades_accepted() {
    let mut store = RecordStore::new();
    store.add("Ada", 1).unwrap();

    store.add_grade(1, 0.0).unwrap();
    store.add_grade(1, 100.0).unwrap();

    assert_eq!(store.find_by_id(1).unwrap().grades(), &[0.0, 100.0]);
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_list_preserves_insertion_order_with_averages() {
    let mut store = RecordStore::new();
    store.add("Zed", 30).unwrap();
    store.add("Amy", 10).unwrap();
    store.add("Bob", 20).unwrap();
    store.add_grade(10, 80.0).unwrap();
    store.add_grade(10, 100.0).unwrap();

    let listed: Vec<(String, i32, f32)> = store
        .list()
        .map(|(s, avg)| (s.name().to_string(), s.id(), avg))
        .collect();

    assert_eq!(
        listed,
        vec![
            ("Zed".to_string(), 30, 0.0),
            ("Amy".to_string(), 10, 90.0),
            ("Bob".to_string(), 20, 0.0),
        ]
    );
}

#[test]
fn test_list_empty_store() {
    let store = RecordStore::new();

    assert_eq!(store.list().count(), 0);
}
