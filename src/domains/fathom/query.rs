//! Query string construction for Fathom endpoints.
//!
//! Absent options are skipped entirely, scalars are sent as `key=value` and
//! list options are repeated as `key[]=value` in element order.

use super::FathomError;
use super::models::{DomainsType, MeetingType};

/// Ordered list of query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when a value is present.
    pub fn scalar<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Append one `key[]=item` pair per element.
    pub fn list(&mut self, key: &str, values: Option<&[String]>) -> &mut Self {
        for item in values.unwrap_or_default() {
            self.pairs.push((format!("{key}[]"), item.clone()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Form-encode the pairs (without a leading `?`).
    pub fn encode(&self) -> Result<String, FathomError> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Filters accepted by `GET /meetings`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub calendar_invitees: Option<Vec<String>>,
    pub calendar_invitees_domains: Option<Vec<String>>,
    pub calendar_invitees_domains_type: Option<DomainsType>,
    pub created_after: Option<String>,
    pub created_before: Option<String>,
    pub include_action_items: Option<bool>,
    pub include_crm_matches: Option<bool>,
    pub include_summary: Option<bool>,
    pub include_transcript: Option<bool>,
    pub meeting_type: Option<MeetingType>,
    pub recorded_by: Option<Vec<String>>,
    pub teams: Option<Vec<String>>,
}

impl MeetingsQuery {
    /// Paging first, then the remaining filters alphabetically.
    pub fn to_pairs(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .scalar("limit", self.limit)
            .scalar("cursor", self.cursor.as_deref())
            .list("calendar_invitees", self.calendar_invitees.as_deref())
            .list(
                "calendar_invitees_domains",
                self.calendar_invitees_domains.as_deref(),
            )
            .scalar(
                "calendar_invitees_domains_type",
                self.calendar_invitees_domains_type.map(DomainsType::as_str),
            )
            .scalar("created_after", self.created_after.as_deref())
            .scalar("created_before", self.created_before.as_deref())
            .scalar("include_action_items", self.include_action_items)
            .scalar("include_crm_matches", self.include_crm_matches)
            .scalar("include_summary", self.include_summary)
            .scalar("include_transcript", self.include_transcript)
            .scalar("meeting_type", self.meeting_type.map(MeetingType::as_str))
            .list("recorded_by", self.recorded_by.as_deref())
            .list("teams", self.teams.as_deref());
        query
    }
}

/// Query for the cursor-only listings (`/teams`, `/teams/{id}/members`).
pub fn cursor_query(cursor: Option<&str>) -> QueryPairs {
    let mut query = QueryPairs::new();
    query.scalar("cursor", cursor);
    query
}
