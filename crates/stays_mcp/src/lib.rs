//! Model Context Protocol (MCP) server for the stays demo.
//!
//! This crate exposes a single read-only query tool over a local mock
//! dataset plus a resource serving the prebuilt stays widget bundle.
//!
//! # Features
//!
//! - **Tools**: `explore_stays` filters and sorts mock stay records by city
//! - **Resources**: `ui://widget/stays.html` serves the inlined widget HTML
//!
//! # Usage
//!
//! ```no_run
//! use stays_mcp::{StaysRouter, ByteTransport, Server, RouterService};
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = StaysRouter::builder()
//!         .name("stays")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod resources;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use resources::{
    McpResource, ResourceInfo, ResourceRegistry, WidgetResource, WIDGET_MIME_TYPE, WIDGET_URI,
};
pub use server::{StaysRouter, StaysRouterBuilder};
pub use tools::{ExploreStaysTool, McpTool, ToolOutput, ToolRegistry};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
