//! Handler for the recipe summary tool.

use std::sync::Arc;

use crate::cookbook::{CookbookApi, CookbookService};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject},
};
use serde::Deserialize;

use super::{parse_arguments, rejected};

/// Request payload for the `recipe-summary` tool.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryRequest {
    /// Recipe to resolve, matched exactly.
    pub(crate) name: String,
}

/// Handle the `recipe-summary` tool, resolving the recipe into raw ingredients.
pub(crate) async fn handle_summary(
    cookbook: &Arc<CookbookService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: SummaryRequest = parse_arguments(arguments)?;
    let summary = cookbook.summary(&args.name).map_err(rejected)?;
    let payload = serde_json::to_value(&summary)
        .map_err(|err| McpError::internal_error(err.to_string(), None))?;
    Ok(CallToolResult::structured(payload))
}
