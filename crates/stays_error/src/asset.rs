//! Widget asset error types.

/// Kinds of widget asset errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssetErrorKind {
    /// No built asset with the expected suffix exists
    #[display("No built asset ending with {} found in {}", suffix, dir)]
    NotFound {
        /// Filename suffix that was searched for (e.g. ".js")
        suffix: String,
        /// Directory that was searched
        dir: String,
    },
    /// Asset exists but could not be read as text
    #[display("Failed to read asset: {}", _0)]
    FileRead(String),
}

/// Widget asset error with location tracking.
///
/// Raised when the external build output the widget resource inlines is
/// missing or unreadable. Independent of query requests.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Asset Error: {} at line {} in {}", kind, line, file)]
pub struct AssetError {
    /// The kind of error that occurred
    pub kind: AssetErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssetError {
    /// Create a new asset error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
