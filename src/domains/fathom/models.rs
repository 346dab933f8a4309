//! Data transfer objects returned by the Fathom API.
//!
//! These are read-only projections of remote state. Optional fields are only
//! populated upstream when the caller explicitly asks for them (for example
//! `include_transcript` on the meetings listing) and are omitted again on
//! serialization so the payload handed back to MCP clients mirrors what the
//! API sent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A page of results with an opaque continuation cursor.
///
/// The cursor is produced by the server; this crate never builds or decodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub items: Vec<T>,
}

/// Whether the invitee list of a meeting includes external domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DomainsType {
    All,
    OnlyInternal,
    OneOrMoreExternal,
}

impl DomainsType {
    /// Wire representation used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::OnlyInternal => "only_internal",
            Self::OneOrMoreExternal => "one_or_more_external",
        }
    }
}

/// Legacy meeting classification filter accepted by `/meetings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    All,
    Internal,
    External,
}

impl MeetingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

/// A recorded meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_title: Option<String>,
    pub recording_id: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_invitees_domains_type: Option<DomainsType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Vec<TranscriptEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_summary: Option<Summary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<ActionItem>>,
    #[serde(default)]
    pub calendar_invitees: Vec<CalendarInvitee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<FathomUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_matches: Option<CrmMatches>,
}

/// One utterance in a meeting transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_calendar_invitee_email: Option<String>,
}

/// A rendered meeting summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub template_name: String,
    pub markdown_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub description: String,
    #[serde(default)]
    pub user_generated: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_playback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<FathomUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarInvitee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_speaker_display_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<String>,
    #[serde(default)]
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FathomUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmMatches {
    #[serde(default)]
    pub contacts: Vec<CrmContact>,
    #[serde(default)]
    pub companies: Vec<CrmCompany>,
    #[serde(default)]
    pub deals: Vec<CrmDeal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmContact {
    pub name: String,
    pub email: String,
    pub record_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmCompany {
    pub name: String,
    pub record_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmDeal {
    pub name: String,
    pub amount: f64,
    pub record_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team_id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Error envelope returned on non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_keeps_null_cursor() {
        let page: Paginated<Team> =
            serde_json::from_str(r#"{"limit": null, "next_cursor": null, "items": []}"#).unwrap();
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"limit": null, "next_cursor": null, "items": []})
        );
    }

    #[test]
    fn test_meeting_optional_payloads_omitted() {
        let json = serde_json::json!({
            "title": "Weekly sync",
            "recording_id": 42,
            "url": "https://fathom.video/calls/42",
            "created_at": "2025-01-02T10:00:00Z",
            "calendar_invitees_domains_type": "one_or_more_external",
            "calendar_invitees": [
                {"name": "Ada", "email": "ada@example.com", "is_external": true}
            ]
        });
        let meeting: Meeting = serde_json::from_value(json).unwrap();
        assert_eq!(
            meeting.calendar_invitees_domains_type,
            Some(DomainsType::OneOrMoreExternal)
        );

        let back = serde_json::to_value(&meeting).unwrap();
        assert!(back.get("transcript").is_none());
        assert!(back.get("default_summary").is_none());
        assert_eq!(back["calendar_invitees"][0]["email"], "ada@example.com");
    }

    #[test]
    fn test_transcript_entry_without_matched_email() {
        let entry: TranscriptEntry = serde_json::from_str(
            r#"{"speaker": {"display_name": "Grace"}, "text": "Hello", "timestamp": "00:00:05"}"#,
        )
        .unwrap();
        assert_eq!(entry.speaker.display_name, "Grace");
        assert!(entry.speaker.matched_calendar_invitee_email.is_none());
    }

    #[test]
    fn test_error_body_without_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": {"code": 7}}"#).unwrap();
        let detail = body.error.unwrap();
        assert_eq!(detail.code, Some(7));
        assert!(detail.message.is_none());
    }

    #[test]
    fn test_domains_type_wire_names() {
        assert_eq!(DomainsType::OnlyInternal.as_str(), "only_internal");
        let parsed: DomainsType = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(parsed, DomainsType::All);
        assert!(serde_json::from_str::<DomainsType>(r#""external""#).is_err());
    }
}
