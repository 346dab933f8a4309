//! Typed HTTP client for the Fathom external API.

use reqwest::{StatusCode, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::models::ApiErrorBody;
use super::query::{MeetingsQuery, QueryPairs, cursor_query};
use super::FathomError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.fathom.ai/external/v1";

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const USER_AGENT: &str = concat!("fathom-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Stateless Fathom client bound to one credential.
///
/// Every method performs exactly one GET and awaits it; there is no retry,
/// caching, or timeout beyond what `reqwest` applies by default.
///
/// Each method decodes the response body into the caller's choice of `T`.
/// Use `serde_json::Value` to keep the body exactly as received, or a type
/// from [`super::models`] for typed access.
#[derive(Clone)]
pub struct FathomClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for FathomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FathomClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FathomClient {
    /// Create a client for `base_url` authenticated with `api_key`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, FathomError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(FathomError::MissingApiKey);
        }

        let base_url =
            Url::parse(base_url).map_err(|e| FathomError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FathomError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// List meetings matching `query`.
    ///
    /// The body has the shape of `Paginated<Meeting>`.
    #[instrument(skip_all)]
    pub async fn list_meetings<T: DeserializeOwned>(
        &self,
        query: &MeetingsQuery,
    ) -> Result<T, FathomError> {
        self.get(&["meetings"], &query.to_pairs()).await
    }

    /// Fetch the summary of one recording, shaped like `Summary`.
    #[instrument(skip(self))]
    pub async fn get_summary<T: DeserializeOwned>(
        &self,
        recording_id: u64,
    ) -> Result<T, FathomError> {
        let id = recording_id.to_string();
        self.get(&["recordings", &id, "summary"], &QueryPairs::new())
            .await
    }

    /// Fetch the transcript of one recording, in upstream order.
    ///
    /// The body is an array of `TranscriptEntry`.
    #[instrument(skip(self))]
    pub async fn get_transcript<T: DeserializeOwned>(
        &self,
        recording_id: u64,
    ) -> Result<T, FathomError> {
        let id = recording_id.to_string();
        self.get(&["recordings", &id, "transcript"], &QueryPairs::new())
            .await
    }

    /// List teams (`Paginated<Team>`), continuing from `cursor` when given.
    #[instrument(skip(self))]
    pub async fn list_teams<T: DeserializeOwned>(
        &self,
        cursor: Option<&str>,
    ) -> Result<T, FathomError> {
        self.get(&["teams"], &cursor_query(cursor)).await
    }

    /// List the members of `team_id` (`Paginated<TeamMember>`), continuing
    /// from `cursor` when given.
    #[instrument(skip(self))]
    pub async fn list_team_members<T: DeserializeOwned>(
        &self,
        team_id: &str,
        cursor: Option<&str>,
    ) -> Result<T, FathomError> {
        self.get(&["teams", team_id, "members"], &cursor_query(cursor))
            .await
    }

    /// Resolve an endpoint below the base URL.
    fn endpoint(&self, segments: &[&str], query: &QueryPairs) -> Result<Url, FathomError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FathomError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.set_query(Some(&query.encode()?));
        }

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &QueryPairs,
    ) -> Result<T, FathomError> {
        let url = self.endpoint(segments, query)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = api_error(status, &body);
            warn!("Fathom API returned {}: {}", status.as_u16(), err);
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Build the typed error for a non-success response.
///
/// A JSON body is read as `{error: {code, message}}`; anything else falls
/// back to the status' reason phrase.
fn api_error(status: StatusCode, body: &str) -> FathomError {
    let fallback = format!("HTTP {}", status.as_u16());

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            let detail = parsed.error;
            let code = detail.as_ref().and_then(|d| d.code);
            let message = detail
                .and_then(|d| d.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(fallback);
            FathomError::api(message, status.as_u16(), code)
        }
        Err(_) => {
            let message = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or(fallback);
            FathomError::api(message, status.as_u16(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::fathom::models::{Meeting, Paginated, Team, TeamMember, TranscriptEntry};
    use serde_json::Value;
    use wiremock::matchers::{header as header_eq, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "Ttest-key-123456";

    fn client_for(server: &MockServer) -> FathomClient {
        FathomClient::new(&server.uri(), KEY).unwrap()
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = FathomClient::new(DEFAULT_BASE_URL, "").unwrap_err();
        assert!(matches!(err, FathomError::MissingApiKey));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = FathomClient::new("not a url", KEY).unwrap_err();
        assert!(matches!(err, FathomError::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = FathomClient::new(DEFAULT_BASE_URL, "Tsecret-value-xyz").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Tsecret-value-xyz"));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = FathomClient::new(DEFAULT_BASE_URL, KEY).unwrap();
        let url = client
            .endpoint(&["recordings", "7", "summary"], &QueryPairs::new())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.fathom.ai/external/v1/recordings/7/summary"
        );
    }

    #[test]
    fn test_endpoint_encodes_path_segment() {
        let client = FathomClient::new(DEFAULT_BASE_URL, KEY).unwrap();
        let url = client
            .endpoint(&["teams", "a/b", "members"], &QueryPairs::new())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.fathom.ai/external/v1/teams/a%2Fb/members"
        );
    }

    #[test]
    fn test_api_error_from_json_body() {
        let err = api_error(
            StatusCode::NOT_FOUND,
            r#"{"error":{"code":1002,"message":"Not found"}}"#,
        );
        match err {
            FathomError::Api {
                message,
                status,
                code,
            } => {
                assert_eq!(message, "Not found");
                assert_eq!(status, 404);
                assert_eq!(code, Some(1002));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_from_plain_body_uses_reason() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        match err {
            FathomError::Api { message, code, .. } => {
                assert_eq!(message, "Internal Server Error");
                assert_eq!(code, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_json_without_message() {
        let err = api_error(StatusCode::BAD_REQUEST, r#"{"detail":"bad"}"#);
        assert_eq!(err.to_string(), "Fathom API Error (400): HTTP 400");
    }

    #[tokio::test]
    async fn test_list_meetings_sends_query_and_headers() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "limit": 5,
            "next_cursor": "abc",
            "items": [{
                "title": "Kickoff",
                "recording_id": 1,
                "url": "https://fathom.video/calls/1",
                "created_at": "2025-03-01T09:00:00Z"
            }]
        });
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .and(query_param("limit", "5"))
            .and(query_param("include_summary", "false"))
            .and(header_eq("x-api-key", KEY))
            .and(header_eq("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let query = MeetingsQuery {
            limit: Some(5),
            include_summary: Some(false),
            ..Default::default()
        };
        let page: Paginated<Meeting> = client_for(&server).list_meetings(&query).await.unwrap();
        assert_eq!(page.limit, Some(5));
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
        assert_eq!(page.items[0].recording_id, 1);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("limit=5&include_summary=false"));
    }

    #[tokio::test]
    async fn test_list_meetings_without_filters_has_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": null, "next_cursor": null, "items": []
            })))
            .mount(&server)
            .await;

        let page: Paginated<Meeting> = client_for(&server)
            .list_meetings(&MeetingsQuery::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_transcript_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recordings/99/transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"speaker": {"display_name": "B"}, "text": "second", "timestamp": "00:00:09"},
                {"speaker": {"display_name": "A"}, "text": "first", "timestamp": "00:00:01"}
            ])))
            .mount(&server)
            .await;

        let transcript: Vec<TranscriptEntry> =
            client_for(&server).get_transcript(99).await.unwrap();
        let texts: Vec<_> = transcript.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_get_summary_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recordings/5/summary"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": 1002, "message": "Not found"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_summary::<Value>(5)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Fathom API Error (404): Not found");
    }

    #[tokio::test]
    async fn test_list_teams_forwards_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("cursor", "opaque-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": 10,
                "next_cursor": "opaque-2",
                "items": [{"id": "t1", "name": "Sales", "created_at": "2024-01-01T00:00:00Z"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page: Paginated<Team> = client_for(&server)
            .list_teams(Some("opaque-1"))
            .await
            .unwrap();
        assert_eq!(page.next_cursor.as_deref(), Some("opaque-2"));
        assert_eq!(page.items[0].name, "Sales");
    }

    #[tokio::test]
    async fn test_list_team_members_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/t-42/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": null,
                "next_cursor": null,
                "items": [{
                    "id": "m1",
                    "name": "Ada",
                    "email": "ada@example.com",
                    "team_id": "t-42",
                    "created_at": "2024-01-01T00:00:00Z"
                }]
            })))
            .mount(&server)
            .await;

        let page: Paginated<TeamMember> = client_for(&server)
            .list_team_members("t-42", None)
            .await
            .unwrap();
        assert_eq!(page.items[0].team_id, "t-42");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_teams::<Value>(None)
            .await
            .unwrap_err();
        assert!(matches!(err, FathomError::Decode(_)));
        assert!(!err.is_api_error());
    }

    #[tokio::test]
    async fn test_raw_body_kept_as_received() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "limit": 1,
            "next_cursor": null,
            "items": [{
                "title": null,
                "recording_id": 3,
                "share_url": null,
                "meeting_type": "external"
            }],
            "total": 1
        });
        Mock::given(method("GET"))
            .and(path("/meetings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let raw: Value = client_for(&server)
            .list_meetings(&MeetingsQuery::default())
            .await
            .unwrap();
        assert_eq!(raw, body);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = FathomClient::new("http://127.0.0.1:9", KEY).unwrap();
        let err = client.list_teams::<Value>(None).await.unwrap_err();
        assert!(matches!(err, FathomError::Transport(_)));
    }
}
