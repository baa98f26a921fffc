//! Medicaid eligibility screening tool

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain_tools::eligibility::{evaluate, EligibilityInput};
use crate::domain_tools::utils::{optional_bool, required_f64, required_i64};
use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

pub const TOOL_NAME: &str = "check_medicaid_eligibility";

/// Preliminary income/asset screening, never a final determination
#[derive(Default)]
pub struct MedicaidEligibilityTool;

impl MedicaidEligibilityTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for MedicaidEligibilityTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Check preliminary Florida Medicaid eligibility from monthly income, countable assets and age"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "monthly_income",
                    PropertySchema::number("Monthly income in dollars"),
                    true,
                )
                .property(
                    "assets",
                    PropertySchema::number("Total countable assets in dollars"),
                    true,
                )
                .property("age", PropertySchema::integer("Age of applicant"), true)
                .property(
                    "needs_long_term_care",
                    PropertySchema::boolean("Whether the applicant needs long-term care services")
                        .with_default(json!(false)),
                    false,
                ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let applicant = EligibilityInput {
            monthly_income: required_f64(&input, "monthly_income")?,
            assets: required_f64(&input, "assets")?,
            age: required_i64(&input, "age")?,
            needs_long_term_care: optional_bool(&input, "needs_long_term_care", false)?,
        };

        let result = evaluate(&applicant);
        tracing::debug!(
            classification = result.classification.as_str(),
            program = result.program.label(),
            "Eligibility evaluated"
        );

        Ok(ToolOutput::text(result.render()))
    }
}
