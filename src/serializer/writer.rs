//! Roster writer
//!
//! Emits the line-oriented text encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::store::RecordStore;

/// Write the store to any writer
pub fn write_to<W: Write>(store: &RecordStore, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", store.len())?;
    for student in store {
        writeln!(writer, "{}", student.name())?;
        writeln!(writer, "{}", student.id())?;
        writeln!(writer, "{}", student.grade_count())?;
        for grade in student.grades() {
            write!(writer, "{:.2} ", grade)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the store to a file, replacing its contents
///
/// Returns the number of records written.
pub fn write_path(store: &RecordStore, path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    write_to(store, BufWriter::new(file))?;
    info!(path = %path.display(), records = store.len(), "roster saved");
    Ok(store.len())
}
