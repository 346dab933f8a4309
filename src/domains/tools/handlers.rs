//! Tool handlers module.
//!
//! Every Fathom tool follows the same path: parse and validate arguments,
//! require a credential, make one API call, then wrap the outcome in a tool
//! result. Tool definitions only supply the typed call through
//! [`FathomTool`]; this module owns the rest for both transports.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{error, info, instrument, warn};

use super::ToolError;
use super::definitions::common::{api_error_result, structured_result};
use super::validation::Validate;
use crate::core::auth::Credential;
use crate::core::config::Config;
use crate::domains::fathom::{FathomClient, FathomError};

/// A tool backed by exactly one Fathom API call.
#[async_trait::async_trait]
pub trait FathomTool: Default + Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Input parameters; their JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + Validate + Send + 'static;

    /// Value returned to the caller on success.
    type Output: Serialize + Send;

    /// Perform the API call.
    async fn call(
        &self,
        client: &FathomClient,
        params: Self::Params,
    ) -> Result<Self::Output, FathomError>;
}

/// Boxed entry point used by the registry's dispatch table.
pub type ToolHandlerFn = for<'a> fn(
    JsonObject,
    &'a Config,
    Option<&'a Credential>,
) -> BoxFuture<'a, Result<CallToolResult, ToolError>>;

/// Deserialize and validate tool arguments.
pub fn parse_params<P>(arguments: JsonObject) -> Result<P, ToolError>
where
    P: DeserializeOwned + Validate,
{
    let params: P = serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

/// Run tool `T` with `arguments` on behalf of `credential`.
///
/// Remote API rejections come back as an error-flagged result; validation,
/// credential, transport and timeout failures abort the call.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn invoke<T: FathomTool>(
    arguments: JsonObject,
    config: &Config,
    credential: Option<&Credential>,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = parse_params(arguments).inspect_err(|e| {
        warn!("Rejected arguments for {}: {}", T::NAME, e);
    })?;

    let credential = credential.ok_or(ToolError::MissingCredential)?;
    let client = match FathomClient::new(&config.fathom.base_url, credential.token()) {
        Ok(client) => client,
        Err(FathomError::MissingApiKey) => return Err(ToolError::MissingCredential),
        Err(e) => return Err(e.into()),
    };

    info!("Calling Fathom for {}", T::NAME);
    let tool = T::default();
    let outcome = tokio::time::timeout(
        config.server.request_timeout(),
        tool.call(&client, params),
    )
    .await
    .map_err(|_| ToolError::Timeout(config.server.request_timeout_secs))?;

    match outcome {
        Ok(output) => structured_result(&output),
        Err(err) if err.is_api_error() => Ok(api_error_result(&err)),
        Err(err) => {
            error!("{} failed: {}", T::NAME, err);
            Err(err.into())
        }
    }
}

/// Boxed [`invoke`] for the registry's dispatch table.
pub fn dispatch<'a, T: FathomTool>(
    arguments: JsonObject,
    config: &'a Config,
    credential: Option<&'a Credential>,
) -> BoxFuture<'a, Result<CallToolResult, ToolError>> {
    invoke::<T>(arguments, config, credential).boxed()
}

/// Tool metadata for `T`.
pub fn to_tool<T: FathomTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO transport.
///
/// Calls arriving this way use the configured standalone API key.
pub fn create_route<T, S>(config: Arc<Config>) -> ToolRoute<S>
where
    T: FathomTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let config = config.clone();
        async move {
            let credential = Credential::from_config(&config);
            invoke::<T>(args, &config, credential.as_ref())
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}
