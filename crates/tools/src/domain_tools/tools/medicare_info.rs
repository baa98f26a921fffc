//! Medicare topic lookup tool

use std::sync::Arc;

use async_trait::async_trait;
use retiree_resources_core::TopicSource;
use serde_json::Value;

use crate::domain_tools::knowledge::medicare_store;
use crate::domain_tools::resolver;
use crate::domain_tools::utils::required_str;
use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

pub const TOOL_NAME: &str = "get_medicare_info";

/// Answers Medicare questions from a topic source
pub struct MedicareInfoTool {
    source: Arc<dyn TopicSource>,
}

impl MedicareInfoTool {
    /// Backed by the bundled Medicare topics
    pub fn new() -> Self {
        Self::with_source(medicare_store())
    }

    pub fn with_source(source: Arc<dyn TopicSource>) -> Self {
        Self { source }
    }
}

impl Default for MedicareInfoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MedicareInfoTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Get information about Medicare Parts A/B/C/D, enrollment, costs, supplemental insurance and Florida-specific Medicare resources"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "topic",
                PropertySchema::string(
                    "Medicare topic, e.g. \"Part A\", \"Part D\", \"enrollment\", \"costs\", \"supplemental insurance\"",
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
    async fn test_part_b_verbatim() {
        let output = MedicareInfoTool::new()
            .execute(json!({ "topic": "Part B" }))
            .await
            .unwrap();
        let text = output.as_text();
        assert!(text.starts_with("Medicare Part B (Medical Insurance):\n"));
        assert_eq!(text, medicare_store().get("part b").unwrap());
    }

    #[tokio::test]
    async fn test_unknown_topic_falls_back() {
        let output = MedicareInfoTool::new()
            .execute(json!({ "topic": "dental implants" }))
            .await
            .unwrap();
        assert!(!output.is_error);
        let text = output.as_text();
        assert!(text.contains("not found in Medicare knowledge base"));
        assert!(text.contains("part a, part b, part c, part d, enrollment, costs"));
        assert!(text.ends_with("visit medicare.gov or call 1-800-MEDICARE."));
    }

    #[tokio::test]
    async fn test_missing_topic() {
        let err = MedicareInfoTool::new().execute(json!({})).await.unwrap_err();
        assert!(err.message.contains("topic"));
    }
}
