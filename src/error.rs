//! Error types for Gradebook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Cannot add more students (max {capacity} reached)")]
    CapacityExceeded { capacity: usize },

    #[error("Student with ID {0} not found")]
    NotFound(i32),

    #[error("Student {id} already has the maximum number of grades ({limit})")]
    GradeLimitExceeded { id: i32, limit: usize },

    #[error("Grade {0} is outside the range {min} - {max}", min = crate::MIN_GRADE, max = crate::MAX_GRADE)]
    OutOfRange(f32),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// The field of the data file that could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Id,
    GradeCount,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Id => write!(f, "ID"),
            Field::GradeCount => write!(f, "grade count"),
        }
    }
}

/// A fatal parse failure while loading a data file
///
/// `record` is 1-based, matching what the user sees in listings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Error reading student count from file")]
    MissingCount,

    #[error("Error reading {field} for student {record}")]
    Record { record: usize, field: Field },
}
