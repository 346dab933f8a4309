//! Result helpers shared across the Fathom tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::fathom::FathomError;
use crate::domains::tools::ToolError;

/// Success envelope: pretty JSON for display plus the same value as
/// structured content.
pub fn structured_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(output)
        .map_err(|e| ToolError::internal(format!("Failed to serialize result: {e}")))?;
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| ToolError::internal(format!("Failed to render result: {e}")))?;

    Ok(CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(value),
        is_error: Some(false),
        meta: None,
    })
}

/// Error-flagged envelope for a response the remote API rejected.
pub fn api_error_result(err: &FathomError) -> CallToolResult {
    warn!("{}", err);
    CallToolResult::error(vec![Content::text(err.to_string())])
}
