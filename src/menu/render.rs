//! Console rendering
//!
//! Builds the text shown to the user. Nothing here writes; the session
//! decides where the text goes.

use std::path::Path;

use crate::error::GradebookError;
use crate::serializer::LoadReport;
use crate::store::{RecordStore, Student};

use super::MenuChoice;

/// The menu block, without the trailing choice prompt
pub fn format_menu() -> String {
    let entries: String = MenuChoice::DISPLAY_ORDER
        .iter()
        .map(|choice| format!("{}. {}\n", choice.code(), choice.label()))
        .collect();
    format!("\n--- Student Gradebook ---\n{}", entries)
}

/// One line per student, numbered from 1
pub fn format_list(store: &RecordStore) -> String {
    if store.is_empty() {
        return "No students to show.\n".to_string();
    }

    let lines: String = store
        .list()
        .enumerate()
        .map(|(position, (student, average))| {
            format!(
                "{}) Name: {} | ID: {} | Grades: {} | Average: {:.2}\n",
                position + 1,
                student.name(),
                student.id(),
                student.grade_count(),
                average
            )
        })
        .collect();
    format!("\n--- All Students ---\n{}", lines)
}

/// Full detail block for one student
pub fn format_details(student: &Student) -> String {
    let mut text = format!(
        "\n--- Student Details ---\nName: {}\nID: {}\nNumber of grades: {}\n",
        student.name(),
        student.id(),
        student.grade_count()
    );

    if student.grades().is_empty() {
        text.push_str("No grades recorded yet.\n");
        return text;
    }

    text.push_str("Grades: ");
    for grade in student.grades() {
        text.push_str(&format!("{:.2} ", grade));
    }
    text.push_str(&format!("\nAverage: {:.2}\n", student.average()));
    text
}

/// Messages describing a load, one per line
pub fn format_load_report(report: &LoadReport, path: &Path) -> Vec<String> {
    if report.file_missing {
        return vec![format!(
            "No existing data file found ('{}'). Starting fresh.",
            path.display()
        )];
    }

    let mut lines: Vec<String> = report.warnings.iter().map(|w| w.to_string()).collect();
    match &report.error {
        Some(e) if !report.is_partial() => {
            lines.push(format!("{}.", e));
            return lines;
        }
        Some(e) => lines.push(format!("{}.", e)),
        None => {}
    }
    lines.push(format!(
        "Loaded {} students from '{}'.",
        report.records_loaded,
        path.display()
    ));
    lines
}

/// User-facing text for a failed operation
pub fn error_message(error: &GradebookError, path: &Path) -> String {
    match error {
        GradebookError::CapacityExceeded { .. } => {
            "Cannot add more students (max reached).".to_string()
        }
        GradebookError::NotFound(id) => format!("Student with ID {} not found.", id),
        GradebookError::GradeLimitExceeded { .. } => {
            "This student already has the maximum number of grades.".to_string()
        }
        GradebookError::OutOfRange(_) => "Grade must be between 0 and 100.".to_string(),
        GradebookError::Io(e) => format!("Error accessing file '{}': {}.", path.display(), e),
        GradebookError::Parse(e) => format!("{}.", e),
    }
}
