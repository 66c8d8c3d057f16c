//! Dataset error types.

/// Kinds of dataset errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DataErrorKind {
    /// Failed to read the dataset file
    #[display("Failed to read dataset: {}", _0)]
    FileRead(String),
    /// Failed to parse the dataset as JSON
    #[display("Failed to parse dataset JSON: {}", _0)]
    JsonParse(String),
}

/// Dataset-unavailable error with location tracking.
///
/// Raised when the stays dataset cannot be read or parsed. The dataset is
/// re-read on every query, so this surfaces per request.
///
/// # Examples
///
/// ```
/// use stays_error::{DataError, DataErrorKind};
///
/// let err = DataError::new(DataErrorKind::FileRead("missing.json".to_string()));
/// assert!(format!("{}", err).contains("missing.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Data Error: {} at line {} in {}", kind, line, file)]
pub struct DataError {
    /// The kind of error that occurred
    pub kind: DataErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DataError {
    /// Create a new data error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DataErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
