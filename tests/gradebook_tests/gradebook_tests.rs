//! Tests for Gradebook
//!
//! These tests verify:
//! - Load at startup (missing file, existing file, partial file)
//! - Save and reload through the configured data file
//! - Reload keeps the roster when the count is unreadable
//! - Autosave on close

use std::fs;
use std::path::PathBuf;

use gradebook::config::Config;
use gradebook::{Gradebook, GradebookError, ParseError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_gradebook() -> (TempDir, PathBuf, Gradebook) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    let gradebook = Gradebook::open_path(&path);
    (temp_dir, path, gradebook)
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.data_file, PathBuf::from("students.txt"));
    assert!(config.autosave_on_exit);
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .data_file("/tmp/roster.txt")
        .autosave_on_exit(false)
        .build();

    assert_eq!(config.data_file, PathBuf::from("/tmp/roster.txt"));
    assert!(!config.autosave_on_exit);
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_starts_empty() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();

    let report = gradebook.load().unwrap();

    assert!(report.file_missing);
    assert!(gradebook.store().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_existing_file() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    fs::write(&path, "2\nAda\n1\n2\n80.00 90.00 \nGrace\n2\n0\n\n").unwrap();

    let report = gradebook.load().unwrap();

    assert_eq!(report.records_loaded, 2);
    assert_eq!(gradebook.find(1).unwrap().average(), 85.0);
    assert_eq!(gradebook.find(2).unwrap().name(), "Grace");
}

#[test]
fn test_load_replaces_roster() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Unsaved", 99).unwrap();
    fs::write(&path, "1\nAda\n1\n0\n\n").unwrap();

    gradebook.load().unwrap();

    assert_eq!(gradebook.store().len(), 1);
    assert!(gradebook.find(99).is_none());
}

#[test]
fn test_partial_load_replaces_roster() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Unsaved", 99).unwrap();
    fs::write(&path, "3\nAda\n1\n0\n\nGrace\nbad\n0\n\n").unwrap();

    let report = gradebook.load().unwrap();

    assert!(report.is_partial());
    assert_eq!(gradebook.store().len(), 1);
    assert_eq!(gradebook.find(1).unwrap().name(), "Ada");
}

#[test]
fn test_unreadable_count_keeps_roster() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Kept", 5).unwrap();
    fs::write(&path, "garbage\n").unwrap();

    let report = gradebook.load().unwrap();

    assert_eq!(report.error, Some(ParseError::MissingCount));
    assert_eq!(gradebook.find(5).unwrap().name(), "Kept");
}

#[test]
fn test_reload_of_missing_file_keeps_roster() {
    let (_temp, _path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Kept", 5).unwrap();

    let report = gradebook.load().unwrap();

    assert!(report.file_missing);
    assert_eq!(gradebook.store().len(), 1);
}

// =============================================================================
// Mutation Tests
// =============================================================================

#[test]
fn test_add_student_and_grades() {
    let (_temp, _path, mut gradebook) = setup_temp_gradebook();

    gradebook.add_student("Ada", 1).unwrap();
    gradebook.add_grade(1, 80.0).unwrap();
    let student = gradebook.add_grade(1, 100.0).unwrap();

    assert_eq!(student.grades(), &[80.0, 100.0]);
    let averages: Vec<f32> = gradebook.list().map(|(_, avg)| avg).collect();
    assert_eq!(averages, vec![90.0]);
}

#[test]
fn test_add_grade_errors_propagate() {
    let (_temp, _path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Ada", 1).unwrap();

    assert!(matches!(
        gradebook.add_grade(2, 50.0),
        Err(GradebookError::NotFound(2))
    ));
    assert!(matches!(
        gradebook.add_grade(1, -5.0),
        Err(GradebookError::OutOfRange(_))
    ));
}

// =============================================================================
// Save / Close Tests
// =============================================================================

#[test]
fn test_save_then_load_in_new_session() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Ada", 1).unwrap();
    gradebook.add_grade(1, 92.5).unwrap();
    gradebook.add_student("Grace", 2).unwrap();

    assert_eq!(gradebook.save().unwrap(), 2);

    let mut reopened = Gradebook::open_path(&path);
    reopened.load().unwrap();
    assert_eq!(reopened.store(), gradebook.store());
}

#[test]
fn test_close_autosaves() {
    let (_temp, path, mut gradebook) = setup_temp_gradebook();
    gradebook.add_student("Ada", 1).unwrap();

    let saved = gradebook.close().unwrap();

    assert_eq!(saved, Some(1));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1\nAda\n1\n0\n\n");
}

#[test]
fn test_close_without_autosave() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    let config = Config::builder()
        .data_file(&path)
        .autosave_on_exit(false)
        .build();
    let mut gradebook = Gradebook::new(config);
    gradebook.add_student("Ada", 1).unwrap();

    let saved = gradebook.close().unwrap();

    assert_eq!(saved, None);
    assert!(!path.exists());
}

#[test]
fn test_save_to_unwritable_location_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("students.txt");
    let gradebook = Gradebook::open_path(&path);

    assert!(matches!(gradebook.save(), Err(GradebookError::Io(_))));
}

#[test]
fn test_accessors() {
    let (_temp, path, gradebook) = setup_temp_gradebook();

    assert_eq!(gradebook.data_file(), path.as_path());
    assert_eq!(gradebook.config().data_file, path);
}
