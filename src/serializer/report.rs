//! Load report
//!
//! Outcome of reading a roster file, alongside the loaded store.

use crate::error::ParseError;

/// Non-fatal conditions met while loading
///
/// `record` and `grade` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file declared more students than a store can hold
    CountTruncated { declared: i64, kept: usize },

    /// A record declared more grades than a student can hold
    GradeCountTruncated { record: usize, declared: i32, kept: usize },

    /// A grade could not be read; the record keeps the grades before it
    GradeUnreadable { record: usize, grade: usize },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::CountTruncated { declared, kept } => write!(
                f,
                "File has {} students, but max is {}. Truncating.",
                declared, kept
            ),
            LoadWarning::GradeCountTruncated { record, kept, .. } => write!(
                f,
                "Warning: student {} has too many grades in file. Truncating to {}.",
                record, kept
            ),
            LoadWarning::GradeUnreadable { record, grade } => write!(
                f,
                "Error reading grade {} for student {}.",
                grade, record
            ),
        }
    }
}

/// Result of a load operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// The source file did not exist; the store is empty
    pub file_missing: bool,

    /// Student count declared on the first line, if it could be read
    pub declared_count: Option<i64>,

    /// Number of records placed in the store
    pub records_loaded: usize,

    /// Truncations, in the order they were met
    pub warnings: Vec<LoadWarning>,

    /// The failure that stopped loading, if any
    pub error: Option<ParseError>,
}

impl LoadReport {
    /// Report for a source that does not exist
    pub fn missing() -> Self {
        Self {
            file_missing: true,
            ..Self::default()
        }
    }

    /// Loading stopped before the declared count was reached
    pub fn is_partial(&self) -> bool {
        matches!(self.error, Some(ParseError::Record { .. }))
    }

    /// Whether any truncation happened
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
