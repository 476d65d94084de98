//! Menu Module
//!
//! Interactive front end for a [`Gradebook`](crate::Gradebook).
//!
//! ## Menu
//! ```text
//! --- Student Gradebook ---
//! 1. Add student
//! 2. Add grade to student
//! 3. List all students
//! 4. Show student details
//! 5. Save to file
//! 6. Load from file
//! 0. Exit
//! ```
//!
//! Input is line based. A line that does not hold the expected number is
//! discarded and the user goes back to the menu. End of input behaves like
//! choosing Exit.

mod command;
mod prompt;
mod render;
mod session;

pub use command::MenuChoice;
pub use prompt::{Input, Prompter};
pub use render::{error_message, format_details, format_list, format_load_report, format_menu};
pub use session::Session;
