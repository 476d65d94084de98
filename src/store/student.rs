//! Student record
//!
//! A single roster entry and its derived average.

use crate::{MAX_GRADES, MAX_NAME_LEN};

/// One student's stored data
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    id: i32,
    grades: Vec<f32>,
}

impl Student {
    /// Create a record with no grades
    ///
    /// The name is cut to the first 49 characters.
    pub fn new(name: &str, id: i32) -> Self {
        Self {
            name: truncate_name(name),
            id,
            grades: Vec::with_capacity(MAX_GRADES),
        }
    }

    /// Create a record with the given grades, keeping at most 10
    ///
    /// Grades are taken as-is; range checks only apply to
    /// [`RecordStore::add_grade`](super::RecordStore::add_grade).
    pub fn with_grades(name: &str, id: i32, grades: impl IntoIterator<Item = f32>) -> Self {
        let mut student = Self::new(name, id);
        student.grades.extend(grades.into_iter().take(MAX_GRADES));
        student
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn grades(&self) -> &[f32] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Whether another grade would exceed the per-student limit
    pub fn is_full(&self) -> bool {
        self.grades.len() >= MAX_GRADES
    }

    /// Mean of the grades, 0.0 when there are none
    pub fn average(&self) -> f32 {
        average(self)
    }

    pub(crate) fn push_grade(&mut self, value: f32) {
        self.grades.push(value);
    }
}

/// Arithmetic mean of a record's grades, or 0.0 when it has none
pub fn average(student: &Student) -> f32 {
    if student.grades.is_empty() {
        return 0.0;
    }
    let sum: f32 = student.grades.iter().sum();
    sum / student.grades.len() as f32
}

fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((cut, _)) => name[..cut].to_string(),
        None => name.to_string(),
    }
}
