//! Fathom API domain.
//!
//! A thin, stateless client for the Fathom external REST API:
//! - `client`: the HTTP client performing one call per operation
//! - `models`: response DTOs
//! - `query`: query-string construction
//! - `error`: the typed error raised for remote and transport failures

mod client;
mod error;
pub mod models;
pub mod query;

pub use client::{API_KEY_HEADER, DEFAULT_BASE_URL, FathomClient};
pub use error::FathomError;
pub use models::{
    ActionItem, CalendarInvitee, CrmMatches, DomainsType, FathomUser, Meeting, MeetingType,
    Paginated, Speaker, Summary, Team, TeamMember, TranscriptEntry,
};
pub use query::{MeetingsQuery, QueryPairs};
