//! List meetings tool definition.
//!
//! Lists meetings visible to the caller's API key, optionally filtered by
//! invitees, recorder, team and creation date, and optionally expanded with
//! transcripts, summaries, action items and CRM matches.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::fathom::{DomainsType, FathomClient, FathomError, MeetingsQuery};
use crate::domains::tools::handlers::FathomTool;
use crate::domains::tools::validation::{Validate, check_datetime, check_emails, check_range};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list meetings tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListMeetingsParams {
    /// Email addresses of calendar invitees to filter by.
    #[schemars(description = "Email addresses of calendar invitees to filter by")]
    pub calendar_invitees: Option<Vec<String>>,

    /// Company domains to filter by.
    #[schemars(description = "Company domains to filter by")]
    pub calendar_invitees_domains: Option<Vec<String>>,

    /// Filter by whether the invitee list includes external email domains.
    #[schemars(
        description = "Filter by whether calendar invitee list includes external email domains"
    )]
    pub calendar_invitees_domains_type: Option<DomainsType>,

    #[schemars(description = "Filter to meetings created after this timestamp (ISO 8601)")]
    pub created_after: Option<String>,

    #[schemars(description = "Filter to meetings created before this timestamp (ISO 8601)")]
    pub created_before: Option<String>,

    #[schemars(description = "Include the transcript for each meeting")]
    pub include_transcript: Option<bool>,

    #[schemars(description = "Include the summary for each meeting")]
    pub include_summary: Option<bool>,

    #[schemars(description = "Include action items for each meeting")]
    pub include_action_items: Option<bool>,

    #[schemars(description = "Include CRM matches for each meeting")]
    pub include_crm_matches: Option<bool>,

    /// Maximum number of meetings to return (1-100).
    #[schemars(description = "Maximum number of meetings to return")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,

    #[schemars(description = "Cursor for pagination")]
    pub cursor: Option<String>,

    #[schemars(description = "Email addresses of users who recorded meetings")]
    pub recorded_by: Option<Vec<String>>,

    #[schemars(description = "Team names to filter by")]
    pub teams: Option<Vec<String>>,
}

impl Validate for ListMeetingsParams {
    fn validate(&self) -> Result<(), ToolError> {
        check_emails("calendar_invitees", self.calendar_invitees.as_deref())?;
        check_emails("recorded_by", self.recorded_by.as_deref())?;
        check_datetime("created_after", self.created_after.as_deref())?;
        check_datetime("created_before", self.created_before.as_deref())?;
        check_range("limit", self.limit.map(u64::from), 1, 100)
    }
}

impl From<ListMeetingsParams> for MeetingsQuery {
    fn from(params: ListMeetingsParams) -> Self {
        Self {
            limit: params.limit,
            cursor: params.cursor,
            calendar_invitees: params.calendar_invitees,
            calendar_invitees_domains: params.calendar_invitees_domains,
            calendar_invitees_domains_type: params.calendar_invitees_domains_type,
            created_after: params.created_after,
            created_before: params.created_before,
            include_action_items: params.include_action_items,
            include_crm_matches: params.include_crm_matches,
            include_summary: params.include_summary,
            include_transcript: params.include_transcript,
            meeting_type: None,
            recorded_by: params.recorded_by,
            teams: params.teams,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List meetings tool - paginated meetings with optional filters.
#[derive(Debug, Clone, Default)]
pub struct ListMeetingsTool;

#[async_trait::async_trait]
impl FathomTool for ListMeetingsTool {
    const NAME: &'static str = "list_meetings";
    const DESCRIPTION: &'static str = "List meetings with optional filters including calendar invitees, date ranges, and content options";

    type Params = ListMeetingsParams;
    type Output = Value;

    async fn call(
        &self,
        client: &FathomClient,
        params: ListMeetingsParams,
    ) -> Result<Value, FathomError> {
        client.list_meetings(&params.into()).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::Credential;
    use crate::core::config::Config;
    use crate::domains::tools::handlers::{invoke, parse_params, to_tool};
    use rmcp::model::JsonObject;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(value: serde_json::Value) -> Result<ListMeetingsParams, ToolError> {
        parse_params(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_all_fields_optional() {
        let params = parse(serde_json::json!({})).unwrap();
        assert!(params.limit.is_none());
        assert_eq!(MeetingsQuery::from(params), MeetingsQuery::default());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(parse(serde_json::json!({"limit": 1})).is_ok());
        assert!(parse(serde_json::json!({"limit": 100})).is_ok());
        assert!(parse(serde_json::json!({"limit": 0})).is_err());
        assert!(parse(serde_json::json!({"limit": 101})).is_err());
        assert!(parse(serde_json::json!({"limit": 2.5})).is_err());
        assert!(parse(serde_json::json!({"limit": "10"})).is_err());
    }

    #[test]
    fn test_rejects_malformed_email() {
        let err = parse(serde_json::json!({"calendar_invitees": ["ada@example.com", "ada"]}))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(parse(serde_json::json!({"recorded_by": ["bob"]})).is_err());
    }

    #[test]
    fn test_rejects_bad_timestamp_and_enum() {
        assert!(parse(serde_json::json!({"created_after": "last week"})).is_err());
        assert!(parse(serde_json::json!({"created_before": "2025-02-01T00:00:00Z"})).is_ok());
        assert!(parse(serde_json::json!({"calendar_invitees_domains_type": "external"})).is_err());
    }

    #[test]
    fn test_schema_lists_every_filter() {
        let tool = to_tool::<ListMeetingsTool>();
        let properties = tool.input_schema.get("properties").unwrap();
        for field in [
            "calendar_invitees",
            "calendar_invitees_domains",
            "calendar_invitees_domains_type",
            "created_after",
            "created_before",
            "include_transcript",
            "include_summary",
            "include_action_items",
            "include_crm_matches",
            "limit",
            "cursor",
            "recorded_by",
            "teams",
        ] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
        assert!(tool.input_schema.get("required").is_none());
    }

    #[tokio::test]
    async fn test_passes_page_through_unchanged() {
        let server = MockServer::start().await;
        let page = serde_json::json!({
            "limit": 5,
            "next_cursor": "cursor-2",
            "items": [{
                "title": "Quarterly review",
                "meeting_title": "Q1 review",
                "recording_id": 123,
                "url": "https://fathom.video/calls/123",
                "share_url": "https://fathom.video/share/abc",
                "created_at": "2025-03-01T10:00:00Z",
                "calendar_invitees": [{
                    "name": "Ada",
                    "email": "ada@example.com",
                    "email_domain": "example.com",
                    "is_external": false
                }],
                "recorded_by": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "email_domain": "example.com"
                }
            }]
        });
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.fathom.base_url = server.uri();
        let credential = Credential::new("Ttest-key-123456");
        let arguments: JsonObject = serde_json::json!({"limit": 5, "include_summary": false})
            .as_object()
            .cloned()
            .unwrap();

        let result = invoke::<ListMeetingsTool>(arguments, &config, Some(&credential))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(page));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/meetings");
        assert_eq!(requests[0].url.query(), Some("limit=5&include_summary=false"));
    }

    #[tokio::test]
    async fn test_unmodeled_and_null_fields_survive() {
        let server = MockServer::start().await;
        let page = serde_json::json!({
            "limit": 1,
            "next_cursor": null,
            "items": [{
                "title": null,
                "recording_id": 1,
                "url": "https://fathom.video/calls/1",
                "created_at": "2025-03-01T10:00:00Z",
                "share_url": null,
                "meeting_type": "external"
            }]
        });
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.fathom.base_url = server.uri();
        let credential = Credential::new("Ttest-key-123456");

        let result = invoke::<ListMeetingsTool>(JsonObject::new(), &config, Some(&credential))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(page));
    }

    #[tokio::test]
    async fn test_invalid_filters_never_reach_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.fathom.base_url = server.uri();
        let credential = Credential::new("Ttest-key-123456");
        let arguments: JsonObject = serde_json::json!({"limit": 500})
            .as_object()
            .cloned()
            .unwrap();

        let err = invoke::<ListMeetingsTool>(arguments, &config, Some(&credential))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
