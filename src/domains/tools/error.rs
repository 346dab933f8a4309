//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::fathom::FathomError;

/// Errors that abort a tool call.
///
/// Remote API rejections are not in here: they are reported to the caller as
/// an error-flagged tool result instead.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No credential is attached to the request.
    #[error("Fathom API key is required")]
    MissingCredential,

    /// The tool execution failed outside the remote API's control.
    #[error("Execution failed: {0}")]
    ExecutionFailed(#[from] FathomError),

    /// The tool ran past the configured execution ceiling.
    #[error("Tool execution timed out after {0}s")]
    Timeout(u64),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// JSON-RPC error code reported for this error.
    pub fn rpc_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::InvalidArguments(_) => -32602,
            Self::MissingCredential => -32600,
            Self::ExecutionFailed(_) | Self::Timeout(_) | Self::Internal(_) => -32603,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(message, None)
            }
            ToolError::MissingCredential => McpError::invalid_request(message, None),
            ToolError::ExecutionFailed(_) | ToolError::Timeout(_) | ToolError::Internal(_) => {
                McpError::internal_error(message, None)
            }
        }
    }
}
