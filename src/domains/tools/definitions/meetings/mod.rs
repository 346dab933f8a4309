//! Meeting tools module.
//!
//! - `list_meetings`: paginated meetings with filters and optional payloads
//! - `get_summary`: summary of one recording
//! - `get_transcript`: transcript of one recording

pub mod get_summary;
pub mod get_transcript;
pub mod list_meetings;

pub use get_summary::{GetSummaryParams, GetSummaryTool};
pub use get_transcript::{GetTranscriptParams, GetTranscriptTool};
pub use list_meetings::{ListMeetingsParams, ListMeetingsTool};
