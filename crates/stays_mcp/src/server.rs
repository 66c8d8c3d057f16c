//! MCP server implementation.

use crate::{tools::ToolRegistry, ResourceInfo, ResourceRegistry};
use mcp_server::router::CapabilitiesBuilder;
use mcp_server::Router;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    protocol::ServerCapabilities,
    prompt::Prompt,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, info, instrument};

/// MCP router serving the stays demo tool and widget resource.
#[derive(Clone)]
pub struct StaysRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
    resources: ResourceRegistry,
}

impl StaysRouter {
    /// Creates a new router builder.
    pub fn builder() -> StaysRouterBuilder {
        StaysRouterBuilder::default()
    }
}

impl Router for StaysRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "Stays MCP Server v{}\n\n\
            This server powers a demo stays widget. Use explore_stays to browse mock stays \
            by city, filter by rating, and select an item for details. All data is local \
            mock JSON; no external calls.\n\n\
            Available tools: {}",
            self.version,
            self.tools
                .list()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new()
            .with_tools(false) // the tool table is static
            .with_resources(false, false) // so is the resource table
            .build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, args = ?arguments, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(output) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    // Summary first, then the structured payload as JSON text.
                    let structured = serde_json::to_string_pretty(&output.structured)
                        .unwrap_or_else(|_| output.structured.to_string());
                    Ok(vec![Content::text(output.summary), Content::text(structured)])
                }
                Err(e) => {
                    debug!(tool = %tool_name, error = %e, "Tool execution failed");
                    Err(ToolError::ExecutionError(e.to_string()))
                }
            }
        })
    }

    #[instrument(skip(self))]
    fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .list_all()
            .iter()
            .filter_map(wire_resource)
            .collect()
    }

    #[instrument(skip(self), fields(uri))]
    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        debug!(uri, "Reading resource");
        let resources = self.resources.clone();
        let uri = uri.to_string();

        Box::pin(async move {
            match resources.read(&uri).await {
                Ok(content) => {
                    info!(uri, "Resource read successfully");
                    Ok(content)
                }
                Err(e) => {
                    debug!(uri, error = %e, "Resource read failed");
                    Err(ResourceError::NotFound(e.to_string()))
                }
            }
        })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        // Prompts are not part of this server
        vec![]
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let prompt_name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt {} not found - this server serves no prompts",
                prompt_name
            )))
        })
    }
}

/// Converts registry resource info into the SDK's resource type through the
/// protocol wire shape. The SDK constructor restricts mime types, which would
/// reject the widget's `text/html+skybridge`.
fn wire_resource(info: &ResourceInfo) -> Option<Resource> {
    let mut wire = serde_json::Map::new();
    wire.insert("uri".to_string(), Value::String(info.uri.clone()));
    wire.insert("name".to_string(), Value::String(info.name.clone()));
    wire.insert(
        "description".to_string(),
        Value::String(info.description.clone()),
    );
    if let Some(mime_type) = &info.mime_type {
        wire.insert("mimeType".to_string(), Value::String(mime_type.clone()));
    }
    if let Some(meta) = &info.meta {
        wire.insert("_meta".to_string(), meta.clone());
    }

    match serde_json::from_value(Value::Object(wire)) {
        Ok(resource) => Some(resource),
        Err(e) => {
            debug!(uri = %info.uri, error = %e, "Skipping unlistable resource");
            None
        }
    }
}

/// Builder for the stays MCP router.
#[derive(Default)]
pub struct StaysRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
    resources: Option<ResourceRegistry>,
}

impl StaysRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Sets the resource registry.
    pub fn resources(mut self, resources: ResourceRegistry) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Builds the router, falling back to the default registries.
    pub fn build(self) -> StaysRouter {
        StaysRouter {
            name: self.name.unwrap_or_else(|| "stays".to_string()),
            version: self.version.unwrap_or_else(|| "0.1.0".to_string()),
            tools: self.tools.unwrap_or_default(),
            resources: self.resources.unwrap_or_default(),
        }
    }
}
