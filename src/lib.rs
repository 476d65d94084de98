//! # Gradebook
//!
//! An in-memory student roster with flat-file persistence:
//! - Bounded record store (100 students, 10 grades each)
//! - Line-oriented text format with tolerant, order-strict loading
//! - Interactive menu over any `BufRead`/`Write` pair
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Menu Session                           │
//! │                 (prompts, rendering, loop)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Gradebook                              │
//! │              (owns config + the single store)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordStore │◄─────────│ Serializer  │
//!   │ (bounded)   │          │ (text file) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod serializer;
pub mod gradebook;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GradebookError, ParseError, Result};
pub use config::Config;
pub use gradebook::Gradebook;
pub use store::{RecordStore, Student};

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of students held by a store
pub const MAX_STUDENTS: usize = 100;

/// Maximum number of grades per student
pub const MAX_GRADES: usize = 10;

/// Maximum name length in characters
pub const MAX_NAME_LEN: usize = 49;

/// Lowest accepted grade
pub const MIN_GRADE: f32 = 0.0;

/// Highest accepted grade
pub const MAX_GRADE: f32 = 100.0;

/// Data file used when none is configured
pub const DEFAULT_DATA_FILE: &str = "students.txt";

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Gradebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
