//! Dataset loader.

use std::fs;
use std::path::{Path, PathBuf};
use stays_core::StayRecord;
use stays_error::{DataError, DataErrorKind, StaysResult};
use tracing::{debug, instrument};

/// Loads stay records from a local JSON file.
///
/// The file is read and parsed on every call, with no memoization: the
/// dataset is treated as immutable for the lifetime of the process, so a
/// fresh read always observes the same records.
pub struct StayLoader {
    data_path: PathBuf,
}

impl StayLoader {
    /// Creates a loader reading from the default path (`data/stays.json`).
    pub fn new() -> Self {
        Self {
            data_path: PathBuf::from("data/stays.json"),
        }
    }

    /// Creates a loader reading from a custom path.
    pub fn with_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Path this loader reads from.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Reads and parses the full dataset.
    ///
    /// Read or parse failure is fatal for the calling request and is not
    /// retried.
    #[instrument(skip(self))]
    pub fn load(&self) -> StaysResult<Vec<StayRecord>> {
        debug!(path = %self.data_path.display(), "Reading stays dataset");

        let raw = fs::read_to_string(&self.data_path).map_err(|e| {
            DataError::new(DataErrorKind::FileRead(format!(
                "{}: {}",
                self.data_path.display(),
                e
            )))
        })?;

        let stays: Vec<StayRecord> = serde_json::from_str(&raw)
            .map_err(|e| DataError::new(DataErrorKind::JsonParse(e.to_string())))?;

        debug!(count = stays.len(), "Dataset loaded");
        Ok(stays)
    }
}

impl Default for StayLoader {
    fn default() -> Self {
        Self::new()
    }
}
