//! Stays MCP server binary.

use anyhow::Result;
use std::env;
use std::sync::Arc;
use stays_mcp::{
    ByteTransport, ExploreStaysTool, ResourceRegistry, Router, RouterService, Server, StaysRouter,
    ToolRegistry, WidgetResource,
};
use tokio::io::{stdin, stdout};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the MCP transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting stays MCP server");

    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(match env::var("STAYS_DATA_PATH") {
        Ok(path) => ExploreStaysTool::with_data_path(path),
        Err(_) => ExploreStaysTool::new(),
    }));

    let mut resources = ResourceRegistry::new();
    resources.register(Arc::new(match env::var("STAYS_DIST_DIR") {
        Ok(dir) => WidgetResource::with_directory(dir),
        Err(_) => WidgetResource::new(),
    }));

    let router = StaysRouter::builder()
        .name("stays")
        .version(env!("CARGO_PKG_VERSION"))
        .tools(tools)
        .resources(resources)
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    // Create and run server with stdio transport
    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
