//! RecordStore implementation
//!
//! Capacity-bounded, insertion-ordered roster.

use tracing::debug;

use crate::error::{GradebookError, Result};
use crate::{MAX_GRADE, MAX_GRADES, MAX_STUDENTS, MIN_GRADE};

use super::Student;

/// In-memory, insertion-ordered collection of student records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Append a student with no grades
    ///
    /// Fails with `CapacityExceeded` when the store already holds 100
    /// records. Duplicate IDs are accepted.
    pub fn add(&mut self, name: &str, id: i32) -> Result<()> {
        self.push_loaded(Student::new(name, id))
    }

    /// Append an already built record (used when loading from a file)
    pub fn push_loaded(&mut self, student: Student) -> Result<()> {
        if self.is_full() {
            return Err(GradebookError::CapacityExceeded {
                capacity: MAX_STUDENTS,
            });
        }
        debug!(id = student.id(), name = student.name(), "student added");
        self.students.push(student);
        Ok(())
    }

    /// Find the first record with the given ID
    pub fn find_by_id(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Append a grade to the first record with the given ID
    ///
    /// Checks, in order: the record exists, it has room for another grade,
    /// and the value lies in [0, 100].
    pub fn add_grade(&mut self, id: i32, value: f32) -> Result<&Student> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(GradebookError::NotFound(id))?;

        if student.is_full() {
            return Err(GradebookError::GradeLimitExceeded {
                id,
                limit: MAX_GRADES,
            });
        }

        // NaN fails both comparisons, so test for the accepted range instead
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradebookError::OutOfRange(value));
        }

        student.push_grade(value);
        debug!(id, value, grade_count = student.grade_count(), "grade added");
        Ok(student)
    }

    /// All records in insertion order, each paired with its average
    pub fn list(&self) -> impl Iterator<Item = (&Student, f32)> {
        self.students.iter().map(|s| (s, s.average()))
    }

    /// All records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= MAX_STUDENTS
    }

    pub fn capacity(&self) -> usize {
        MAX_STUDENTS
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.students.clear();
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
