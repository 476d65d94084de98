//! Serializer Module
//!
//! Converts a [`RecordStore`](crate::RecordStore) to and from the roster text
//! file.
//!
//! ## Responsibilities
//! - Write the whole store, overwriting the destination
//! - Read strictly in order, keeping whatever parsed before a failure
//! - Clamp oversized counts instead of rejecting the file
//! - Treat a missing file as an empty roster
//!
//! ## File Format
//! ```text
//! <student_count>
//! ┌─────────────────────────────────────────┐
//! │ Record 1                                │
//! │   <name>                                │
//! │   <id>                                  │
//! │   <grade_count>                         │
//! │   <grade_0> <grade_1> ... <grade_n-1>   │
//! ├─────────────────────────────────────────┤
//! │ Record 2                                │
//! │   ...                                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Grades are written with two decimals, each followed by a space. The grade
//! line is always present, so a record without grades ends in an empty line.
//! Names are not escaped: a name holding a line break or leading whitespace
//! desynchronises the reader.

mod reader;
mod report;
mod scanner;
mod writer;

pub use reader::{parse, read_from, read_path};
pub use report::{LoadReport, LoadWarning};
pub use writer::{write_path, write_to};
