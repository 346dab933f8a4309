//! Get transcript tool definition.
//!
//! Returns the transcript of a recording with speaker information and
//! timestamps, in the order the API returns it.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::fathom::{FathomClient, FathomError};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::FathomTool;
use crate::domains::tools::validation::{Validate, check_range};

/// Parameters for the get transcript tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTranscriptParams {
    /// The recording ID of the meeting.
    #[schemars(description = "The recording ID of the meeting")]
    #[schemars(range(min = 1))]
    pub recording_id: u64,
}

impl Validate for GetTranscriptParams {
    fn validate(&self) -> Result<(), ToolError> {
        check_range("recording_id", Some(self.recording_id), 1, u64::MAX)
    }
}

/// Get transcript tool.
#[derive(Debug, Clone, Default)]
pub struct GetTranscriptTool;

#[async_trait::async_trait]
impl FathomTool for GetTranscriptTool {
    const NAME: &'static str = "get_transcript";
    const DESCRIPTION: &'static str = "Get meeting transcript by recording ID with speaker information and timestamps";

    type Params = GetTranscriptParams;
    type Output = Value;

    async fn call(
        &self,
        client: &FathomClient,
        params: GetTranscriptParams,
    ) -> Result<Value, FathomError> {
        client.get_transcript(params.recording_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::Credential;
    use crate::core::config::Config;
    use crate::domains::tools::handlers::invoke;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.fathom.base_url = server.uri();
        config
    }

    #[tokio::test]
    async fn test_returns_entries_in_upstream_order() {
        let server = MockServer::start().await;
        let transcript = serde_json::json!([
            {
                "speaker": {"display_name": "Ada", "matched_calendar_invitee_email": "ada@example.com"},
                "text": "Let's get started.",
                "timestamp": "00:00:02"
            },
            {
                "speaker": {"display_name": "Speaker 2"},
                "text": "Sounds good.",
                "timestamp": "00:00:05"
            }
        ]);
        Mock::given(method("GET"))
            .and(path("/recordings/7/transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_json(transcript.clone()))
            .mount(&server)
            .await;

        let credential = Credential::new("Ttest-key-123456");
        let arguments = serde_json::json!({"recording_id": 7})
            .as_object()
            .cloned()
            .unwrap();
        let result = invoke::<GetTranscriptTool>(arguments, &config_for(&server), Some(&credential))
            .await
            .unwrap();

        assert_eq!(result.structured_content, Some(transcript));
    }

    #[tokio::test]
    async fn test_negative_id_rejected_without_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let credential = Credential::new("Ttest-key-123456");
        let arguments = serde_json::json!({"recording_id": -1})
            .as_object()
            .cloned()
            .unwrap();
        let err = invoke::<GetTranscriptTool>(arguments, &config_for(&server), Some(&credential))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
