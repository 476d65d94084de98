//! Gradebook Module
//!
//! The session coordinator that owns the roster.
//!
//! ## Responsibilities
//! - Own the configuration and the single `RecordStore`
//! - Load the data file at startup and on request
//! - Save on request and when the session closes
//! - Route mutations to the store

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ParseError, Result};
use crate::serializer::{self, LoadReport};
use crate::store::{RecordStore, Student};

/// A roster session bound to one data file
///
/// The store is owned exclusively; callers get shared references for reads
/// and go through `&mut self` for every mutation.
#[derive(Debug)]
pub struct Gradebook {
    /// Session configuration
    config: Config,

    /// The roster
    store: RecordStore,
}

impl Gradebook {
    /// Create a session with an empty roster
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: RecordStore::new(),
        }
    }

    /// Create a session for the given data file with default settings
    pub fn open_path(path: &Path) -> Self {
        Self::new(Config::builder().data_file(path).build())
    }

    /// Load the data file into the roster
    ///
    /// The current roster is kept when the file is missing or its student
    /// count cannot be read. Otherwise it is replaced by whatever loaded,
    /// including a partial load.
    pub fn load(&mut self) -> Result<LoadReport> {
        let (store, report) = serializer::read_path(&self.config.data_file)?;

        if report.file_missing {
            return Ok(report);
        }
        if report.error == Some(ParseError::MissingCount) {
            warn!(path = %self.config.data_file.display(), "load aborted, roster unchanged");
            return Ok(report);
        }

        self.store = store;
        Ok(report)
    }

    /// Write the roster to the data file
    ///
    /// Returns the number of records written.
    pub fn save(&self) -> Result<usize> {
        serializer::write_path(&self.store, &self.config.data_file)
    }

    /// Add a student with no grades
    pub fn add_student(&mut self, name: &str, id: i32) -> Result<()> {
        self.store.add(name, id)
    }

    /// Append a grade to a student
    pub fn add_grade(&mut self, id: i32, value: f32) -> Result<&Student> {
        self.store.add_grade(id, value)
    }

    /// Find a student by ID
    pub fn find(&self, id: i32) -> Option<&Student> {
        self.store.find_by_id(id)
    }

    /// All students with their averages, in insertion order
    pub fn list(&self) -> impl Iterator<Item = (&Student, f32)> {
        self.store.list()
    }

    /// Close the session
    ///
    /// Saves the roster when `autosave_on_exit` is set and returns the
    /// number of records written, or `None` when nothing was saved.
    pub fn close(self) -> Result<Option<usize>> {
        let saved = if self.config.autosave_on_exit {
            Some(self.save()?)
        } else {
            None
        };
        info!(records = self.store.len(), autosaved = saved.is_some(), "session closed");
        Ok(saved)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the roster
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
