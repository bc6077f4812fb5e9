//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    cookbook::{CookbookApi, CookbookService},
    mcp::{
        format::{EntriesSnapshot, json_resource_contents, serialize_json, usage_payload},
        handlers::{
            entries::{handle_add_entry, handle_list_entries},
            metrics::handle_metrics,
            names::handle_normalize,
            summary::handle_summary,
        },
        registry, schemas,
    },
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, ListResourcesResult, ListToolsResult,
        RawResource, ReadResourceRequestParam, ReadResourceResult, Resource, ServerCapabilities,
        ServerInfo, Tool, ToolAnnotations,
    },
};

const ENTRIES_URI: &str = "mcp://entries";
const USAGE_URI: &str = "mcp://usage";

/// MCP server implementation exposing cookbook operations.
#[derive(Clone)]
pub struct CookbookMcpServer {
    cookbook: Arc<CookbookService>,
    registry: Arc<registry::Registry>,
}

impl CookbookMcpServer {
    /// Create a new MCP server backed by the supplied cookbook.
    pub fn new(cookbook: Arc<CookbookService>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_resource(ENTRIES_URI, resource_entries);
        registry.register_resource(USAGE_URI, resource_usage);

        registry.register_tool("normalize-name", tool_normalize_name);
        registry.register_tool("add-entry", tool_add_entry);
        registry.register_tool("recipe-summary", tool_recipe_summary);
        registry.register_tool("list-entries", tool_list_entries);
        registry.register_tool("metrics", tool_metrics);

        Self {
            cookbook,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed("normalize-name"),
                title: Some("Normalize Name".to_string()),
                description: Some(Cow::Borrowed(
                    "Turn a handwritten recipe name into clean Title Case before registering it.",
                )),
                input_schema: Arc::new(schemas::normalize_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Normalize Name")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("add-entry"),
                title: Some("Add Entry".to_string()),
                description: Some(Cow::Borrowed(
                    "Register an ingredient with its cook time, or a recipe with its required items.",
                )),
                input_schema: Arc::new(schemas::add_entry_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Add Entry")
                        .destructive(false)
                        .idempotent(false)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("recipe-summary"),
                title: Some("Recipe Summary".to_string()),
                description: Some(Cow::Borrowed(
                    "Expand a recipe into every raw ingredient it needs and its total cook time.",
                )),
                input_schema: Arc::new(schemas::summary_input_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Recipe Summary")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("list-entries"),
                title: Some("List Entries".to_string()),
                description: Some(Cow::Borrowed(
                    "See which ingredients and recipes are registered before adding or resolving.",
                )),
                input_schema: Arc::new(schemas::empty_object_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("List Entries")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("metrics"),
                title: Some("Metrics Snapshot".to_string()),
                description: Some(Cow::Borrowed(
                    "Check insertion and resolution counters at a glance.",
                )),
                input_schema: Arc::new(schemas::empty_object_schema()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Metrics Snapshot")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
        ]
    }

    fn describe_resources(&self) -> Vec<Resource> {
        let mut entries = RawResource::new(ENTRIES_URI, "entries");
        entries.description = Some("Registered entry names and types in insertion order".into());

        let mut usage = RawResource::new(USAGE_URI, "usage");
        usage.description =
            Some("Recommended tool flow: add ingredients, add recipes, then resolve.".into());

        vec![entries.no_annotation(), usage.no_annotation()]
    }
}

fn resource_entries(
    server: &CookbookMcpServer,
    _request: ReadResourceRequestParam,
) -> registry::ResourceFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move {
        let payload = EntriesSnapshot::new(cookbook.entries());
        Ok(ReadResourceResult {
            contents: vec![json_resource_contents(
                ENTRIES_URI,
                serialize_json(&payload, ENTRIES_URI),
            )],
        })
    })
}

fn resource_usage(
    _server: &CookbookMcpServer,
    _request: ReadResourceRequestParam,
) -> registry::ResourceFuture {
    Box::pin(async move {
        Ok(ReadResourceResult {
            contents: vec![json_resource_contents(
                USAGE_URI,
                serialize_json(&usage_payload(), USAGE_URI),
            )],
        })
    })
}

fn tool_normalize_name(
    server: &CookbookMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move { handle_normalize(&cookbook, request.arguments).await })
}

fn tool_add_entry(
    server: &CookbookMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move { handle_add_entry(&cookbook, request.arguments).await })
}

fn tool_recipe_summary(
    server: &CookbookMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move { handle_summary(&cookbook, request.arguments).await })
}

fn tool_list_entries(
    server: &CookbookMcpServer,
    _request: CallToolRequestParam,
) -> registry::ToolFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move { handle_list_entries(&cookbook).await })
}

fn tool_metrics(
    server: &CookbookMcpServer,
    _request: CallToolRequestParam,
) -> registry::ToolFuture {
    let cookbook = server.cookbook.clone();
    Box::pin(async move { handle_metrics(&cookbook).await })
}

impl ServerHandler for CookbookMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "cookbook".to_string();
        implementation.title = Some("Cookbook MCP".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to build a cookbook of ingredients and recipes, then resolve any recipe into the raw ingredients and total cook time it needs.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = self.describe_resources();
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.resources.get(request.uri.as_str()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown resource URI: {}", request.uri),
                None,
            ))
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tools.get(request.name.as_ref()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }
}
