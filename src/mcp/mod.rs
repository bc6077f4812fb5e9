//! Model Context Protocol (MCP) integration for the cookbook.
//!
//! This module wires the cookbook service into an MCP server so editors and agent hosts can
//! build and query a cookbook over stdio. The surface area consists of:
//!
//! - Tools: `normalize-name`, `add-entry`, `recipe-summary`, `list-entries`, and `metrics`.
//! - Resources: `mcp://entries` and `mcp://usage`.

mod format;
pub mod handlers;
mod registry;
mod schemas;
mod server;

pub use server::CookbookMcpServer;
