//! Team tools module.
//!
//! - `list_teams`: teams in the organization
//! - `list_team_members`: members of one team

pub mod list_team_members;
pub mod list_teams;

pub use list_team_members::{ListTeamMembersParams, ListTeamMembersTool};
pub use list_teams::{ListTeamsParams, ListTeamsTool};
