//! MCP error types.

use stays_error::{AssetError, DataError, StaysError};

/// Errors surfaced by MCP tools and resources.
#[derive(Debug, Clone, derive_more::Display)]
pub enum McpError {
    /// Tool input failed validation
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),
    /// No tool registered under the requested name
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),
    /// Tool ran but failed
    #[display("Tool execution failed: {}", _0)]
    ToolExecutionFailed(String),
    /// No resource handler matched the URI
    #[display("Resource not found: {}", _0)]
    ResourceNotFound(String),
}

impl std::error::Error for McpError {}

impl From<DataError> for McpError {
    fn from(err: DataError) -> Self {
        McpError::ToolExecutionFailed(err.to_string())
    }
}

impl From<AssetError> for McpError {
    fn from(err: AssetError) -> Self {
        McpError::ResourceNotFound(err.to_string())
    }
}

impl From<StaysError> for McpError {
    fn from(err: StaysError) -> Self {
        match err {
            StaysError::Data(e) => e.into(),
            StaysError::Asset(e) => e.into(),
        }
    }
}

/// Result alias for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
