//! Handlers for registering and listing cookbook entries.

use std::sync::Arc;

use crate::cookbook::{CookbookApi, CookbookService, EntryPayload};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject},
};
use serde_json::json;

use super::{parse_arguments, rejected};

/// Handle the `add-entry` tool by validating and registering the supplied entry.
pub(crate) async fn handle_add_entry(
    cookbook: &Arc<CookbookService>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let payload: EntryPayload = parse_arguments(arguments)?;
    let name = payload.name.clone();
    let entry_type = payload.entry_type.clone();
    cookbook.insert_entry(payload).map_err(rejected)?;

    Ok(CallToolResult::structured(json!({
        "status": "ok",
        "name": name,
        "type": entry_type,
    })))
}

/// Handle the `list-entries` tool.
pub(crate) async fn handle_list_entries(
    cookbook: &Arc<CookbookService>,
) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::structured(
        json!({ "entries": cookbook.entries() }),
    ))
}
