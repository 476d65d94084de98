//! Store Module
//!
//! In-memory roster of student records.
//!
//! ## Responsibilities
//! - Hold records in insertion order
//! - Enforce the hard caps (100 students, 10 grades per student)
//! - Validate grades at insertion time only
//! - Lookup by ID (first match wins)
//!
//! ## Data Structure Choice
//! A plain `Vec` with explicit capacity checks:
//! - Insertion order is the only ordering
//! - At most 100 records, so a linear scan for lookup is fine
//! - No interior mutability; the single owner mutates through `&mut self`

mod student;
mod table;

pub use student::{average, Student};
pub use table::RecordStore;
