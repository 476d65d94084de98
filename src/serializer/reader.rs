//! Roster reader
//!
//! Parses the text encoding strictly in order. Failures are handled per
//! field:
//! 1. Unreadable count: nothing is loaded
//! 2. Unreadable name, ID or grade count: loading stops, earlier records stay
//! 3. Unreadable grade: the record keeps the grades before it
//! 4. Oversized counts are clamped with a warning

use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Field, ParseError, Result};
use crate::store::{RecordStore, Student};
use crate::{MAX_GRADES, MAX_NAME_LEN, MAX_STUDENTS};

use super::report::{LoadReport, LoadWarning};
use super::scanner::Scanner;

/// Load a roster file
///
/// A missing file is not an error: it yields an empty store and a report
/// with `file_missing` set. Other I/O failures are returned as errors.
/// Bytes that are not UTF-8 are replaced with U+FFFD rather than rejected.
pub fn read_path(path: &Path) -> Result<(RecordStore, LoadReport)> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no data file found, starting fresh");
            return Ok((RecordStore::new(), LoadReport::missing()));
        }
        Err(e) => return Err(e.into()),
    };

    let (store, report) = parse(&String::from_utf8_lossy(&bytes));
    info!(
        path = %path.display(),
        records = report.records_loaded,
        warnings = report.warnings.len(),
        "roster loaded"
    );
    Ok((store, report))
}

/// Load a roster from any reader
pub fn read_from<R: Read>(mut reader: R) -> Result<(RecordStore, LoadReport)> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse(&String::from_utf8_lossy(&bytes)))
}

/// Parse roster text
///
/// Never fails outright; the report carries the warnings and the error that
/// stopped loading, and the store holds every record parsed before it.
pub fn parse(text: &str) -> (RecordStore, LoadReport) {
    let mut scanner = Scanner::new(text);
    let mut store = RecordStore::new();
    let mut report = LoadReport::default();

    let Some(declared) = scanner.read_int() else {
        warn!("student count unreadable, nothing loaded");
        report.error = Some(ParseError::MissingCount);
        return (store, report);
    };
    scanner.skip_whitespace();
    report.declared_count = Some(declared);

    let count = if declared > MAX_STUDENTS as i64 {
        warn!(declared, max = MAX_STUDENTS, "student count truncated");
        report.warnings.push(LoadWarning::CountTruncated {
            declared,
            kept: MAX_STUDENTS,
        });
        MAX_STUDENTS
    } else {
        usize::try_from(declared).unwrap_or(0)
    };

    for record in 1..=count {
        let student = match read_record(&mut scanner, record, &mut report.warnings) {
            Ok(student) => student,
            Err(e) => {
                warn!(record, error = %e, "partial load, remaining records skipped");
                report.error = Some(e);
                break;
            }
        };
        if store.push_loaded(student).is_err() {
            break;
        }
    }

    report.records_loaded = store.len();
    (store, report)
}

/// Read one record; `record` is 1-based
fn read_record(
    scanner: &mut Scanner<'_>,
    record: usize,
    warnings: &mut Vec<LoadWarning>,
) -> std::result::Result<Student, ParseError> {
    let unreadable = |field| ParseError::Record { record, field };

    let name = scanner
        .read_line(MAX_NAME_LEN)
        .ok_or_else(|| unreadable(Field::Name))?;

    let id = read_i32(scanner).ok_or_else(|| unreadable(Field::Id))?;
    scanner.skip_whitespace();

    let declared = read_i32(scanner).ok_or_else(|| unreadable(Field::GradeCount))?;
    // The grade line follows, even when empty
    scanner.skip_rest_of_line();

    let grade_count = if declared > MAX_GRADES as i32 {
        warn!(record, declared, max = MAX_GRADES, "grade count truncated");
        warnings.push(LoadWarning::GradeCountTruncated {
            record,
            declared,
            kept: MAX_GRADES,
        });
        MAX_GRADES
    } else {
        usize::try_from(declared).unwrap_or(0)
    };

    let mut grades = Vec::with_capacity(grade_count);
    for grade in 1..=grade_count {
        match scanner.read_float_on_line() {
            Some(value) => grades.push(value),
            None => {
                warn!(record, grade, "grade unreadable, grade list truncated");
                warnings.push(LoadWarning::GradeUnreadable { record, grade });
                break;
            }
        }
    }
    scanner.skip_rest_of_line();

    Ok(Student::with_grades(&name, id, grades))
}

fn read_i32(scanner: &mut Scanner<'_>) -> Option<i32> {
    scanner.read_int().and_then(|v| i32::try_from(v).ok())
}
