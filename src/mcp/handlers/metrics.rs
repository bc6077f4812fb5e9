//! Handler for the metrics tool.

use std::sync::Arc;

use crate::cookbook::{CookbookApi, CookbookService};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use serde_json::json;

/// Handle the `metrics` tool, returning the current cookbook counters.
pub(crate) async fn handle_metrics(
    cookbook: &Arc<CookbookService>,
) -> Result<CallToolResult, McpError> {
    let snapshot = cookbook.metrics_snapshot();
    Ok(CallToolResult::structured(json!({
        "entriesInserted": snapshot.entries_inserted,
        "entriesRejected": snapshot.entries_rejected,
        "summariesResolved": snapshot.summaries_resolved,
        "summariesFailed": snapshot.summaries_failed,
        "registrySize": snapshot.registry_size,
    })))
}
