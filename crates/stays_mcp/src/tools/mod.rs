//! MCP tool system.
//!
//! Tools are functions LLM clients can call. Registration is static: the
//! registry is assembled once at startup and never mutated afterwards.

use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

mod explore_stays;

pub use explore_stays::ExploreStaysTool;

/// Output of a tool call.
///
/// Pairs a short human-readable summary with the structured payload, the
/// way the hosting shell expects tool responses.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// One-line summary for display (e.g. "Found 3 stays in paris.")
    pub summary: String,
    /// Structured JSON result
    pub structured: Value,
}

/// MCP tool that LLM clients can call.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as registered with the server
    fn name(&self) -> &str;

    /// Tool description for the LLM
    fn description(&self) -> &str;

    /// JSON schema describing the tool input
    fn input_schema(&self) -> Value;

    /// Execute the tool with the given input
    async fn execute(&self, input: Value) -> McpResult<ToolOutput>;
}

/// Registry for MCP tools.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<Vec<Arc<dyn McpTool>>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: Arc::new(vec![]),
        }
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        Arc::make_mut(&mut self.tools).push(tool);
    }

    /// Lists all registered tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.as_ref().clone()
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Executes a tool by name.
    #[instrument(skip(self, input), fields(tool = %name))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<ToolOutput> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        tool.execute(input).await
    }
}

impl Default for ToolRegistry {
    /// Registry with the demo tools registered against their default paths.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ExploreStaysTool::new()));
        registry
    }
}
