//! MCP resource system.
//!
//! Resources are data sources LLM clients can read. The stays demo serves a
//! single one: the prebuilt widget bundle at `ui://widget/stays.html`.

use crate::McpResult;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

mod widget;

pub use widget::{WidgetResource, WIDGET_MIME_TYPE, WIDGET_URI};

/// MCP resource that LLM clients can read.
#[async_trait]
pub trait McpResource: Send + Sync {
    /// URI pattern this resource handles (e.g. "ui://")
    fn uri_pattern(&self) -> &'static str;

    /// Resource description for the client
    fn description(&self) -> &'static str;

    /// Check if this resource handles the given URI
    fn matches(&self, uri: &str) -> bool {
        uri.starts_with(self.uri_pattern())
    }

    /// Read resource content
    async fn read(&self, uri: &str) -> McpResult<String>;

    /// List available resource instances (optional). Resource tables are
    /// static, so listing is synchronous.
    fn list(&self) -> Vec<ResourceInfo> {
        vec![]
    }
}

/// Information about a resource.
#[derive(Debug, Clone)]
pub struct ResourceInfo {
    /// Resource URI
    pub uri: String,
    /// Resource name
    pub name: String,
    /// Resource description
    pub description: String,
    /// MIME type (optional)
    pub mime_type: Option<String>,
    /// Static metadata for the hosting shell (optional)
    pub meta: Option<Value>,
}

/// Registry for MCP resources.
#[derive(Clone)]
pub struct ResourceRegistry {
    resources: Arc<Vec<Arc<dyn McpResource>>>,
}

impl ResourceRegistry {
    /// Creates an empty resource registry.
    pub fn new() -> Self {
        Self {
            resources: Arc::new(vec![]),
        }
    }

    /// Registers a resource.
    pub fn register(&mut self, resource: Arc<dyn McpResource>) {
        Arc::make_mut(&mut self.resources).push(resource);
    }

    /// Lists all registered resource handlers.
    pub fn list(&self) -> Vec<Arc<dyn McpResource>> {
        self.resources.as_ref().clone()
    }

    /// Lists all available resource instances.
    pub fn list_all(&self) -> Vec<ResourceInfo> {
        self.resources
            .as_ref()
            .iter()
            .flat_map(|resource| resource.list())
            .collect()
    }

    /// Reads a resource by URI.
    #[instrument(skip(self), fields(uri))]
    pub async fn read(&self, uri: &str) -> McpResult<String> {
        for resource in self.resources.as_ref() {
            if resource.matches(uri) {
                debug!(uri, pattern = %resource.uri_pattern(), "Resource matched");
                return resource.read(uri).await;
            }
        }

        Err(crate::McpError::ResourceNotFound(format!(
            "No resource handler for URI: {}",
            uri
        )))
    }
}

impl Default for ResourceRegistry {
    /// Registry with the widget resource registered against its default
    /// dist directory.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(WidgetResource::new()));
        registry
    }
}
