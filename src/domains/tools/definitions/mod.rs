//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by API resource.

pub mod common;
pub mod meetings;
pub mod teams;

pub use meetings::{
    GetSummaryParams, GetSummaryTool, GetTranscriptParams, GetTranscriptTool, ListMeetingsParams,
    ListMeetingsTool,
};
pub use teams::{ListTeamMembersParams, ListTeamMembersTool, ListTeamsParams, ListTeamsTool};
