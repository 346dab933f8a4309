//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls, with the caller's credential
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use super::ToolError;
use super::definitions::{
    GetSummaryTool, GetTranscriptTool, ListMeetingsTool, ListTeamMembersTool, ListTeamsTool,
};
use super::handlers::{FathomTool, ToolHandlerFn, dispatch, to_tool};
use crate::core::auth::Credential;
use crate::core::config::Config;

/// Name and entry point of every tool, in listing order.
const DISPATCH_TABLE: &[(&str, ToolHandlerFn)] = &[
    (ListMeetingsTool::NAME, dispatch::<ListMeetingsTool>),
    (GetSummaryTool::NAME, dispatch::<GetSummaryTool>),
    (GetTranscriptTool::NAME, dispatch::<GetTranscriptTool>),
    (ListTeamsTool::NAME, dispatch::<ListTeamsTool>),
    (ListTeamMembersTool::NAME, dispatch::<ListTeamMembersTool>),
];

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        DISPATCH_TABLE.iter().map(|(name, _)| *name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO transports list the same five tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<ListMeetingsTool>(),
            to_tool::<GetSummaryTool>(),
            to_tool::<GetTranscriptTool>(),
            to_tool::<ListTeamsTool>(),
            to_tool::<ListTeamMembersTool>(),
        ]
    }

    /// Dispatch a tool call on behalf of `credential`.
    ///
    /// `arguments` must be a JSON object or null.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
        credential: Option<&Credential>,
    ) -> Result<CallToolResult, ToolError> {
        let Some((_, handler)) = DISPATCH_TABLE.iter().find(|(n, _)| *n == name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        handler(arguments, &self.config, credential).await
    }
}
