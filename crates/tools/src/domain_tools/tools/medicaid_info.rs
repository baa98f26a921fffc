//! Florida Medicaid topic lookup tool

use std::sync::Arc;

use async_trait::async_trait;
use retiree_resources_core::TopicSource;
use serde_json::Value;

use crate::domain_tools::knowledge::medicaid_store;
use crate::domain_tools::resolver;
use crate::domain_tools::utils::required_str;
use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

pub const TOOL_NAME: &str = "get_medicaid_info";

pub struct MedicaidInfoTool {
    source: Arc<dyn TopicSource>,
}

impl MedicaidInfoTool {
    pub fn new() -> Self {
        Self::with_source(medicaid_store())
    }

    pub fn with_source(source: Arc<dyn TopicSource>) -> Self {
        Self { source }
    }
}

impl Default for MedicaidInfoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MedicaidInfoTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Get information about Florida Medicaid eligibility, applications, long-term care, home care, income and asset limits, and waiver programs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "topic",
                PropertySchema::string(
                    "Medicaid topic, e.g. \"eligibility\", \"application\", \"long term care\", \"waiver programs\"",
                ),
                true,
            ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let topic = required_str(&input, "topic")?;
        Ok(ToolOutput::text(resolver::lookup(self.source.as_ref(), &topic)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_substring_topic() {
        let output = MedicaidInfoTool::new()
            .execute(json!({ "topic": "what are the income limits?" }))
            .await
            .unwrap();
        assert!(output
            .as_text()
            .starts_with("Florida Medicaid Income Limits (2024):"));
    }

    #[tokio::test]
    async fn test_empty_topic_is_not_found() {
        let output = MedicaidInfoTool::new()
            .execute(json!({ "topic": "   " }))
            .await
            .unwrap();
        assert!(output.as_text().contains("not found in Medicaid knowledge base"));
    }
}
