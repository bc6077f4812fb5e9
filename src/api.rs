//! HTTP surface for the cookbook.
//!
//! This module exposes a compact Axum router:
//!
//! - `POST /parse` – Normalize handwritten text into a display name. Accepts `{ "input": "..." }`
//!   and returns `{ "msg": "..." }`, or `400 this string is cooked` when nothing survives.
//! - `POST /entry` – Register an ingredient or recipe. Returns an empty `200` on success.
//! - `GET /summary?name=...` – Resolve a recipe into raw ingredients and total cook time.
//! - `GET /entries` – List registered entries in insertion order.
//! - `GET /metrics` – Observe insertion and resolution counters.
//! - `GET /commands` – Machine-readable command catalog for quick discovery by tools/hosts.
//!
//! Every rejection from the core maps to `400 Bad Request` with the error text as body, and so
//! do bodies or query strings that fail to decode. The MCP server shares the same
//! [`CookbookApi`], so behavior is identical across interfaces.

use crate::cookbook::{CookbookApi, CookbookError, EntryListing, EntryPayload, Summary};
use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Body returned by `POST /parse` when the input has no letters.
const COOKED_NAME: &str = "this string is cooked";

/// Build the HTTP router exposing the cookbook API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: CookbookApi + 'static,
{
    Router::new()
        .route("/parse", post(parse_name::<S>))
        .route("/entry", post(create_entry::<S>))
        .route("/summary", get(get_summary::<S>))
        .route("/entries", get(list_entries::<S>))
        .route("/metrics", get(get_metrics::<S>))
        .route("/commands", get(get_commands))
        .with_state(service)
}

/// Request body for the `POST /parse` endpoint.
#[derive(Deserialize)]
struct ParseRequest {
    /// Free-form text to normalize.
    input: String,
}

/// Success response for the `POST /parse` endpoint.
#[derive(Serialize)]
struct ParseResponse {
    msg: String,
}

/// Normalize a handwritten recipe name.
async fn parse_name<S>(
    State(service): State<Arc<S>>,
    request: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: CookbookApi,
{
    let Json(request) = request?;
    match service.normalize(&request.input) {
        Ok(msg) => Ok(Json(ParseResponse { msg }).into_response()),
        Err(err) => {
            tracing::debug!(error = %err, "Parse rejected");
            Ok((StatusCode::BAD_REQUEST, COOKED_NAME).into_response())
        }
    }
}

/// Register a new cookbook entry.
async fn create_entry<S>(
    State(service): State<Arc<S>>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<(), AppError>
where
    S: CookbookApi,
{
    let Json(payload) = payload?;
    service.insert_entry(payload)?;
    Ok(())
}

/// Query string for `GET /summary`.
#[derive(Deserialize)]
struct SummaryQuery {
    /// Recipe to resolve.
    name: String,
}

/// Resolve a recipe into its summary.
async fn get_summary<S>(
    State(service): State<Arc<S>>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<Summary>, AppError>
where
    S: CookbookApi,
{
    let Query(query) = query?;
    let summary = service.summary(&query.name)?;
    tracing::info!(
        name = %summary.name,
        cook_time = summary.cook_time,
        ingredients = summary.ingredients.len(),
        "Summary request completed"
    );
    Ok(Json(summary))
}

/// Response body for `GET /entries`.
#[derive(Serialize)]
struct EntriesResponse {
    entries: Vec<EntryListing>,
}

/// List registered entries.
async fn list_entries<S>(State(service): State<Arc<S>>) -> Json<EntriesResponse>
where
    S: CookbookApi,
{
    Json(EntriesResponse {
        entries: service.entries(),
    })
}

/// Return a concise metrics snapshot.
async fn get_metrics<S>(State(service): State<Arc<S>>) -> Json<MetricsResponse>
where
    S: CookbookApi,
{
    let snapshot = service.metrics_snapshot();
    Json(MetricsResponse {
        entries_inserted: snapshot.entries_inserted,
        entries_rejected: snapshot.entries_rejected,
        summaries_resolved: snapshot.summaries_resolved,
        summaries_failed: snapshot.summaries_failed,
        registry_size: snapshot.registry_size,
    })
}

/// Response body for `GET /metrics`.
#[derive(Serialize)]
struct MetricsResponse {
    entries_inserted: u64,
    entries_rejected: u64,
    summaries_resolved: u64,
    summaries_failed: u64,
    registry_size: u64,
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "parse",
                method: "POST",
                path: "/parse",
                description: "Normalize handwritten text into a Title Case recipe name. Response returns { \"msg\": string }.",
                request_example: Some(json!({ "input": "Riz@z RISO00tto!" })),
            },
            CommandDescriptor {
                name: "entry",
                method: "POST",
                path: "/entry",
                description: "Register an ingredient (with cookTime) or a recipe (with requiredItems). Names must be unique.",
                request_example: Some(json!({
                    "type": "recipe",
                    "name": "Pancake",
                    "requiredItems": [
                        { "name": "Egg", "quantity": 2 },
                        { "name": "Flour", "quantity": 1 }
                    ]
                })),
            },
            CommandDescriptor {
                name: "summary",
                method: "GET",
                path: "/summary?name={recipe}",
                description: "Resolve a recipe into aggregated raw ingredients and total cook time.",
                request_example: None,
            },
            CommandDescriptor {
                name: "entries",
                method: "GET",
                path: "/entries",
                description: "List registered entry names and types in insertion order.",
                request_example: None,
            },
            CommandDescriptor {
                name: "metrics",
                method: "GET",
                path: "/metrics",
                description: "Return insertion and resolution counters useful for observability dashboards.",
                request_example: None,
            },
        ],
    })
}

enum AppError {
    /// The cookbook refused the request.
    Rejected(CookbookError),
    /// Body or query string could not be decoded.
    Malformed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Rejected(err) => {
                tracing::debug!(kind = err.kind(), error = %err, "Request rejected");
                err.to_string()
            }
            Self::Malformed(reason) => {
                tracing::debug!(error = %reason, "Malformed request");
                reason
            }
        };
        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

impl From<CookbookError> for AppError {
    fn from(inner: CookbookError) -> Self {
        Self::Rejected(inner)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}
