//! Tool factory trait
//!
//! Lets an orchestrator build the tool set of one specialist, or of all of
//! them, without knowing the concrete tool types.
//!
//! # Example
//!
//! ```ignore
//! use retiree_resources_core::traits::ToolFactory;
//!
//! let factory = SpecialistToolFactory::new();
//! let medicaid_tools = factory.create_tools_by_category("medicaid")?;
//! ```

use std::sync::Arc;

use super::Tool;

/// Error type for tool factory operations
#[derive(Debug, Clone)]
pub struct ToolFactoryError {
    pub message: String,
    /// Tool that caused the error, if any
    pub tool_name: Option<String>,
}

impl ToolFactoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tool_name: None,
        }
    }

    pub fn for_tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tool_name: Some(tool_name.into()),
        }
    }
}

impl std::fmt::Display for ToolFactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tool_name {
            Some(tool) => write!(f, "Tool '{}': {}", tool, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ToolFactoryError {}

/// Tool metadata for discovery
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Owning specialist id (e.g. "medicare", "local_resources")
    pub category: String,
}

/// Builds tools for one domain
pub trait ToolFactory: Send + Sync {
    /// Domain this factory serves
    fn domain_name(&self) -> &str;

    /// Metadata for every tool the factory can build, in a stable order
    fn available_tools(&self) -> Vec<ToolMetadata>;

    fn tool_metadata(&self, name: &str) -> Option<ToolMetadata> {
        self.available_tools().into_iter().find(|m| m.name == name)
    }

    /// Create a single tool by name
    fn create_tool(&self, name: &str) -> Result<Arc<dyn Tool>, ToolFactoryError>;

    fn create_all_tools(&self) -> Result<Vec<Arc<dyn Tool>>, ToolFactoryError> {
        self.available_tools()
            .iter()
            .map(|m| self.create_tool(&m.name))
            .collect()
    }

    fn create_tools_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Arc<dyn Tool>>, ToolFactoryError> {
        self.available_tools()
            .iter()
            .filter(|m| m.category == category)
            .map(|m| self.create_tool(&m.name))
            .collect()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.available_tools().iter().any(|m| m.name == name)
    }

    /// Distinct categories, sorted
    fn categories(&self) -> Vec<String> {
        let mut categories: Vec<_> = self
            .available_tools()
            .into_iter()
            .map(|m| m.category)
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
