//! Medicare plan search tool

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain_tools::plans::{sample_plans, PlanDirectory};
use crate::domain_tools::utils::{optional_str, required_str};
use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

pub const TOOL_NAME: &str = "search_medicare_plans";

/// Lists sample Medicare plans for a Florida zip code
pub struct MedicarePlanSearchTool {
    plans: Arc<PlanDirectory>,
}

impl MedicarePlanSearchTool {
    pub fn new() -> Self {
        Self::with_plans(sample_plans())
    }

    pub fn with_plans(plans: Arc<PlanDirectory>) -> Self {
        Self { plans }
    }
}

impl Default for MedicarePlanSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MedicarePlanSearchTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Search for available Medicare plans in a Florida zip code"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "zip_code",
                    PropertySchema::string("Florida zip code, e.g. \"33101\""),
                    true,
                )
                .property(
                    "plan_type",
                    PropertySchema::enum_type(
                        "Type of plan to search for",
                        vec![
                            "all".to_string(),
                            "advantage".to_string(),
                            "supplement".to_string(),
                            "partd".to_string(),
                        ],
                    )
                    .with_default(json!("all")),
                    false,
                ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let zip_code = required_str(&input, "zip_code")?;
        let plan_type = optional_str(&input, "plan_type").unwrap_or_else(|| "all".to_string());

        Ok(ToolOutput::text(self.plans.describe(&zip_code, &plan_type)))
    }
}
