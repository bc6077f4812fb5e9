//! Formatting helpers shared across MCP handlers and resources.

use crate::cookbook::EntryListing;
use rmcp::model::ResourceContents;
use serde::Serialize;
use serde_json::{Value, json};

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Serialize a value to JSON, falling back to compact formatting on error.
pub(crate) fn serialize_json<T: Serialize>(value: &T, context_uri: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| {
        tracing::warn!(uri = context_uri, %error, "Failed to serialize JSON prettily");
        serde_json::to_string(value).unwrap_or_else(|_| "{}".into())
    })
}

/// Build JSON resource contents for MCP resource responses.
pub(crate) fn json_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(APPLICATION_JSON.into()),
        text,
        meta: None,
    }
}

/// Entries snapshot returned by the `entries` resource.
#[derive(Debug, Serialize)]
pub(crate) struct EntriesSnapshot {
    /// Number of registered entries.
    pub(crate) count: usize,
    /// Entries in insertion order.
    pub(crate) entries: Vec<EntryListing>,
}

impl EntriesSnapshot {
    pub(crate) fn new(entries: Vec<EntryListing>) -> Self {
        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Recommended tool flow returned by the `usage` resource.
pub(crate) fn usage_payload() -> Value {
    json!({
        "title": "Cookbook MCP Usage",
        "policy": [
            "Register ingredients before resolving recipes that use them.",
            "Entry names are unique and matched case-sensitively.",
            "Use normalize-name to clean handwritten names before add-entry.",
            "A recipe may reference entries added later; summaries fail until every reference resolves.",
        ],
        "flows": [
            {
                "name": "Build & Resolve",
                "steps": [
                    "add-entry({ type: 'ingredient', name, cookTime })",
                    "add-entry({ type: 'recipe', name, requiredItems: [{ name, quantity }] })",
                    "recipe-summary({ name })"
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_snapshot_counts_listings() {
        let snapshot = EntriesSnapshot::new(vec![
            EntryListing {
                name: "Egg".into(),
                entry_type: "ingredient",
            },
            EntryListing {
                name: "Pancake".into(),
                entry_type: "recipe",
            },
        ]);
        let body = serialize_json(&snapshot, "mcp://entries");
        let value: Value = serde_json::from_str(&body).expect("entries payload must be valid JSON");
        assert_eq!(value["count"], 2);
        assert_eq!(value["entries"][1]["type"], "recipe");
    }

    #[test]
    fn resource_contents_are_json() {
        let contents = json_resource_contents("mcp://usage", "{}".into());
        match contents {
            ResourceContents::TextResourceContents { mime_type, .. } => {
                assert_eq!(mime_type.as_deref(), Some(APPLICATION_JSON));
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }
}
