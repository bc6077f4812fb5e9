//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the cookbook tools and resources over stdio. This mode is
//! designed for editor/agent integrations and shares all runtime configuration with the HTTP
//! binary. Logs go to stderr so stdout stays reserved for the protocol.
use anyhow::{Context, Result};
use cookbook::{config, cookbook::CookbookService, logging, mcp::CookbookMcpServer};
use rmcp::{service::ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing(logging::ConsoleTarget::Stderr);
    let config = config::init_config().context("failed to load configuration")?;

    let cookbook = Arc::new(CookbookService::new(&config));
    let server = CookbookMcpServer::new(cookbook);

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
