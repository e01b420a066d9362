//! Course list persistence
//!
//! The grading engine never touches storage. Callers receive a [`CourseStore`]
//! and pass loaded snapshots to the engine; every save replaces the whole list,
//! so concurrent writers resolve as last write wins.

use crate::core::models::{Course, RigorClass, WeightConfig};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the persisted course list inside a profile directory
pub const COURSES_FILE_NAME: &str = "courses.toml";

/// Errors raised by course stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The stored course list is not valid.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// TOML decoding failure
        #[source]
        source: toml::de::Error,
    },

    /// The course list could not be serialized.
    #[error("failed to serialize course list: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Data-access collaborator for the persisted course list
pub trait CourseStore {
    /// Load the current course list snapshot
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read or parsed.
    fn load(&self) -> Result<Vec<Course>, StoreError>;

    /// Replace the stored course list
    ///
    /// # Errors
    /// Returns an error if the course list cannot be written.
    fn save(&self, courses: &[Course]) -> Result<(), StoreError>;
}

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct CourseDocument {
    #[serde(default)]
    courses: Vec<Course>,
}

/// TOML-file store keyed by user profile: `<data_dir>/<profile>/courses.toml`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store for a profile under a data directory
    #[must_use]
    pub fn new(data_dir: &Path, profile: &str) -> Self {
        Self {
            path: data_dir.join(profile).join(COURSES_FILE_NAME),
        }
    }

    /// Store backed by an explicit file path
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CourseStore for FileStore {
    /// A missing file is an empty course list.
    fn load(&self) -> Result<Vec<Course>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let doc: CourseDocument = toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(doc.courses)
    }

    fn save(&self, courses: &[Course]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let doc = CourseDocument {
            courses: courses.to_vec(),
        };
        let toml_str = toml::to_string_pretty(&doc)?;
        fs::write(&self.path, toml_str).map_err(io_err)
    }
}

/// In-process store used for local (offline) sessions and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    courses: RefCell<Vec<Course>>,
}

impl MemoryStore {
    /// Store holding the given courses
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: RefCell::new(courses),
        }
    }

    /// Store seeded with a single empty "English I" course
    #[must_use]
    pub fn with_sample() -> Self {
        Self::new(vec![Course::with_id(
            "1".to_string(),
            "English I".to_string(),
            RigorClass::Academic,
            WeightConfig::default(),
        )])
    }
}

impl CourseStore for MemoryStore {
    fn load(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.borrow().clone())
    }

    fn save(&self, courses: &[Course]) -> Result<(), StoreError> {
        *self.courses.borrow_mut() = courses.to_vec();
        Ok(())
    }
}
