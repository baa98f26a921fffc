//! Tool Registry
//!
//! Manages tool registration, discovery, and execution.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use retiree_resources_config::ToolsConfig;
use retiree_resources_core::traits::{ToolFactory, ToolFactoryError};

use crate::mcp::{Tool, ToolError, ToolOutput, ToolSchema};

/// Tool executor trait
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool by name
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError>;

    /// List available tools, sorted by name
    fn list_tools(&self) -> Vec<ToolSchema>;

    /// Get tool schema by name
    fn get_tool(&self, name: &str) -> Option<ToolSchema>;
}

/// Tool registry
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    /// Overrides each tool's own timeout when set
    timeout_secs: Option<u64>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one execution timeout to every tool
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn register_boxed(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    fn timeout_for(&self, tool: &dyn Tool) -> u64 {
        self.timeout_secs.unwrap_or_else(|| tool.timeout_secs())
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    /// Validate arguments, then execute under the tool timeout
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::not_found(format!("Tool not found: {}", name)))?;

        tool.validate(&arguments)?;

        let timeout_secs = self.timeout_for(tool.as_ref());
        tracing::trace!(tool = name, timeout_secs, "Executing tool with timeout");

        match tokio::time::timeout(Duration::from_secs(timeout_secs), tool.execute(arguments)).await
        {
            Ok(result) => result,
            Err(_elapsed) => {
                tracing::warn!(tool = name, timeout_secs, "Tool execution timed out");
                Err(ToolError::timeout(name, timeout_secs))
            }
        }
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    fn get_tool(&self, name: &str) -> Option<ToolSchema> {
        self.tools.get(name).map(|t| t.schema())
    }
}

/// Build a registry from every tool the factory offers
///
/// Tools named in `config.disabled` are skipped and `config.timeout_secs`
/// applies to all of them.
pub fn create_registry_from_factory(
    factory: Arc<dyn ToolFactory>,
    config: &ToolsConfig,
) -> Result<ToolRegistry, ToolFactoryError> {
    let mut registry = ToolRegistry::new().with_timeout(config.timeout_secs);

    for tool in factory.create_all_tools()? {
        if config.is_enabled(tool.name()) {
            registry.register_boxed(tool);
        } else {
            tracing::info!(tool = tool.name(), "Tool disabled by configuration");
        }
    }

    tracing::info!(
        domain = factory.domain_name(),
        tool_count = registry.len(),
        timeout_secs = config.timeout_secs,
        "Created tool registry from factory"
    );

    Ok(registry)
}
