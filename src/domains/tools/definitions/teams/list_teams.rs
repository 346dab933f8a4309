//! List teams tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::fathom::{FathomClient, FathomError};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::FathomTool;
use crate::domains::tools::validation::Validate;

/// Parameters for the list teams tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTeamsParams {
    /// Opaque cursor from a previous page.
    #[schemars(description = "Cursor for pagination")]
    pub cursor: Option<String>,
}

impl Validate for ListTeamsParams {
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// List teams tool - every team in the organization, one page at a time.
#[derive(Debug, Clone, Default)]
pub struct ListTeamsTool;

#[async_trait::async_trait]
impl FathomTool for ListTeamsTool {
    const NAME: &'static str = "list_teams";
    const DESCRIPTION: &'static str = "List all teams in the organization";

    type Params = ListTeamsParams;
    type Output = Value;

    async fn call(
        &self,
        client: &FathomClient,
        params: ListTeamsParams,
    ) -> Result<Value, FathomError> {
        client.list_teams(params.cursor.as_deref()).await
    }
}
