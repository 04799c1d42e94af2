//! Flat-file store of user records.
//!
//! The whole collection lives in memory and is written back in full on every
//! [`RecordStore::save`]. The file is a pretty-printed JSON array:
//!
//! ```json
//! [
//!     {
//!         "name": "Alice Liddell",
//!         "contact": "555-0100",
//!         "address": "1 Rabbit Hole",
//!         "username": "alice",
//!         "password": "wonderland"
//!     }
//! ]
//! ```
//!
//! Passwords are stored in plaintext. There is no locking and no
//! partial-write protection; one process owns the file at a time.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use food_delivery_core::UserRecord;

/// Indentation used when writing the record file.
const INDENT: &[u8] = b"    ";

/// Errors that can occur reading or writing the record file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read or written.
    #[error("record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of user records.
    #[error("record file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory collection of user records backed by a JSON file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<UserRecord>,
}

impl RecordStore {
    /// Create an empty store for `path` without touching the file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Create a store for `path` and load its records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the file's contents.
    ///
    /// A missing file yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, or
    /// `StoreError::Malformed` if it is not valid JSON.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No record file yet, starting empty");
                self.records.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        self.records = serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.path.display(),
            count = self.records.len(),
            "Loaded user records"
        );
        self.warn_plaintext();
        Ok(())
    }

    /// Write the full collection to the file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn save(&self) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.records
            .serialize(&mut ser)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let mut file = fs::File::create(&self.path).map_err(io_err)?;
        file.write_all(&buf).map_err(io_err)?;

        tracing::debug!(
            path = %self.path.display(),
            count = self.records.len(),
            "Saved user records"
        );
        self.warn_plaintext();
        Ok(())
    }

    /// Append a record to the in-memory collection.
    ///
    /// Call [`RecordStore::save`] afterwards to persist it.
    pub fn add(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recently added record.
    pub(crate) fn pop(&mut self) -> Option<UserRecord> {
        self.records.pop()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// First record with the given username.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.username == username)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn warn_plaintext(&self) {
        if !self.records.is_empty() {
            tracing::warn!(
                path = %self.path.display(),
                "User record file stores passwords in plaintext"
            );
        }
    }
}
