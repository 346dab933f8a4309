//! Tool Router - builds the rmcp ToolRouter for STDIO transport.
//!
//! Each route runs through the shared call path in `handlers.rs` with the
//! configured API key as credential.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    GetSummaryTool, GetTranscriptTool, ListMeetingsTool, ListTeamMembersTool, ListTeamsTool,
};
use super::handlers::create_route;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<ListMeetingsTool, S>(config.clone()))
        .with_route(create_route::<GetSummaryTool, S>(config.clone()))
        .with_route(create_route::<GetTranscriptTool, S>(config.clone()))
        .with_route(create_route::<ListTeamsTool, S>(config.clone()))
        .with_route(create_route::<ListTeamMembersTool, S>(config))
}
