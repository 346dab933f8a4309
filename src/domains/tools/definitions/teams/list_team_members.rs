//! List team members tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::fathom::{FathomClient, FathomError};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::FathomTool;
use crate::domains::tools::validation::{Validate, check_non_empty};

/// Parameters for the list team members tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTeamMembersParams {
    #[schemars(description = "The ID of the team")]
    #[schemars(length(min = 1))]
    pub team_id: String,

    #[schemars(description = "Cursor for pagination")]
    pub cursor: Option<String>,
}

impl Validate for ListTeamMembersParams {
    fn validate(&self) -> Result<(), ToolError> {
        check_non_empty("team_id", &self.team_id)
    }
}

/// List team members tool.
#[derive(Debug, Clone, Default)]
pub struct ListTeamMembersTool;

#[async_trait::async_trait]
impl FathomTool for ListTeamMembersTool {
    const NAME: &'static str = "list_team_members";
    const DESCRIPTION: &'static str = "List team members for a specific team";

    type Params = ListTeamMembersParams;
    type Output = Value;

    async fn call(
        &self,
        client: &FathomClient,
        params: ListTeamMembersParams,
    ) -> Result<Value, FathomError> {
        client
            .list_team_members(&params.team_id, params.cursor.as_deref())
            .await
    }
}
