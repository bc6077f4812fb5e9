//! Handler for the name normalization tool.

use std::sync::Arc;

use crate::cookbook::{CookbookApi, CookbookService};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject},
};
use serde::Deserialize;
use serde_json::json;

use super::{parse_arguments, rejected};

/// Request payload for the `normalize-name` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct NormalizeRequest {
    /// Free-form text to normalize.
    pub(crate) input: String,
}

/// Handle the `normalize-name` tool.
pub(crate) async fn handle_normalize(
    cookbook: &Arc<CookbookService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: NormalizeRequest = parse_arguments(arguments)?;
    let name = cookbook.normalize(&args.input).map_err(rejected)?;
    Ok(CallToolResult::structured(json!({ "msg": name })))
}
