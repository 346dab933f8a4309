//! Get summary tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::fathom::{FathomClient, FathomError};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::FathomTool;
use crate::domains::tools::validation::{Validate, check_range};

/// Parameters for the get summary tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSummaryParams {
    /// The recording ID of the meeting.
    #[schemars(description = "The recording ID of the meeting")]
    #[schemars(range(min = 1))]
    pub recording_id: u64,
}

impl Validate for GetSummaryParams {
    fn validate(&self) -> Result<(), ToolError> {
        check_range("recording_id", Some(self.recording_id), 1, u64::MAX)
    }
}

/// Get summary tool - the rendered summary of one recording.
#[derive(Debug, Clone, Default)]
pub struct GetSummaryTool;

#[async_trait::async_trait]
impl FathomTool for GetSummaryTool {
    const NAME: &'static str = "get_summary";
    const DESCRIPTION: &'static str = "Get meeting summary by recording ID";

    type Params = GetSummaryParams;
    type Output = Value;

    async fn call(
        &self,
        client: &FathomClient,
        params: GetSummaryParams,
    ) -> Result<Value, FathomError> {
        client.get_summary(params.recording_id).await
    }
}
