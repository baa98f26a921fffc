//! Local resource tools
//!
//! `get_local_resource` takes any resource type; the four `find_*` tools are
//! fixed-type shortcuts over the same directory.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain_tools::directory::{florida_directory, ResourceDirectory};
use crate::domain_tools::utils::{optional_str, required_str};
use crate::mcp::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

pub const TOOL_NAME: &str = "get_local_resource";

pub struct LocalResourceTool {
    directory: Arc<ResourceDirectory>,
}

impl LocalResourceTool {
    pub fn new() -> Self {
        Self::with_directory(florida_directory())
    }

    pub fn with_directory(directory: Arc<ResourceDirectory>) -> Self {
        Self { directory }
    }
}

impl Default for LocalResourceTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for LocalResourceTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Get local Florida resources for retirees by type and city"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "resource_type",
                    PropertySchema::string(
                        "Type of resource: healthcare, housing, transportation, senior center",
                    ),
                    true,
                )
                .property("city", PropertySchema::string("City name in Florida"), true)
                .property(
                    "zip_code",
                    PropertySchema::string("Optional zip code for more specific results"),
                    false,
                ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let resource_type = required_str(&input, "resource_type")?;
        let city = required_str(&input, "city")?;
        let zip_code = optional_str(&input, "zip_code");

        Ok(ToolOutput::text(self.directory.lookup(
            &city,
            &resource_type,
            zip_code.as_deref(),
        )))
    }
}

/// Fixed resource type behind a `find_*` tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceShortcut {
    HealthcareFacilities,
    Housing,
    Transportation,
    SeniorCenters,
}

impl ResourceShortcut {
    pub const ALL: [ResourceShortcut; 4] = [
        Self::HealthcareFacilities,
        Self::Housing,
        Self::Transportation,
        Self::SeniorCenters,
    ];

    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::HealthcareFacilities => "find_healthcare_facilities",
            Self::Housing => "find_housing_resources",
            Self::Transportation => "find_transportation_resources",
            Self::SeniorCenters => "find_senior_centers",
        }
    }

    /// Directory key this shortcut looks up
    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::HealthcareFacilities => "healthcare",
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::SeniorCenters => "senior center",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::HealthcareFacilities => "Find healthcare facilities in a Florida city",
            Self::Housing => "Find housing resources in a Florida city",
            Self::Transportation => "Find transportation resources in a Florida city",
            Self::SeniorCenters => "Find senior centers in a Florida city",
        }
    }

    /// Extra argument accepted for compatibility; it does not narrow results
    fn accepted_filter(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::HealthcareFacilities => Some((
                "facility_type",
                "Type of facility: hospital, clinic, specialist, all",
            )),
            Self::Housing => Some((
                "housing_type",
                "Type of housing: affordable, senior, assisted living, all",
            )),
            Self::Transportation | Self::SeniorCenters => None,
        }
    }
}

pub struct ResourceShortcutTool {
    shortcut: ResourceShortcut,
    directory: Arc<ResourceDirectory>,
}

impl ResourceShortcutTool {
    pub fn new(shortcut: ResourceShortcut) -> Self {
        Self::with_directory(shortcut, florida_directory())
    }

    pub fn with_directory(shortcut: ResourceShortcut, directory: Arc<ResourceDirectory>) -> Self {
        Self {
            shortcut,
            directory,
        }
    }

    pub fn shortcut(&self) -> ResourceShortcut {
        self.shortcut
    }
}

#[async_trait]
impl Tool for ResourceShortcutTool {
    fn name(&self) -> &str {
        self.shortcut.tool_name()
    }

    fn description(&self) -> &str {
        self.shortcut.description()
    }

    fn schema(&self) -> ToolSchema {
        let mut input_schema = InputSchema::object().property(
            "city",
            PropertySchema::string("City name in Florida"),
            true,
        );
        if let Some((name, description)) = self.shortcut.accepted_filter() {
            input_schema = input_schema.property(
                name,
                PropertySchema::string(description).with_default(serde_json::json!("all")),
                false,
            );
        }

        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema,
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let city = required_str(&input, "city")?;
        Ok(ToolOutput::text(self.directory.lookup(
            &city,
            self.shortcut.resource_type(),
            None,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_local_resource() {
        let output = LocalResourceTool::new()
            .execute(json!({ "resource_type": "Senior Center", "city": "Miami", "zip_code": "33139" }))
            .await
            .unwrap();
        let text = output.as_text();
        assert!(text.starts_with("Senior Center Resources in Miami:"));
        assert!(text.contains("Zip code provided: 33139"));
    }

    #[tokio::test]
    async fn test_shortcut_matches_generic_tool() {
        for shortcut in ResourceShortcut::ALL {
            let via_shortcut = ResourceShortcutTool::new(shortcut)
                .execute(json!({ "city": "tampa" }))
                .await
                .unwrap();
            let via_generic = LocalResourceTool::new()
                .execute(json!({ "resource_type": shortcut.resource_type(), "city": "tampa" }))
                .await
                .unwrap();
            assert_eq!(via_shortcut, via_generic);
        }
    }

    #[tokio::test]
    async fn test_filter_argument_ignored() {
        let tool = ResourceShortcutTool::new(ResourceShortcut::HealthcareFacilities);
        assert!(tool.schema().input_schema.has_property("facility_type"));

        let filtered = tool
            .execute(json!({ "city": "Orlando", "facility_type": "hospital" }))
            .await
            .unwrap();
        let unfiltered = tool.execute(json!({ "city": "Orlando" })).await.unwrap();
        assert_eq!(filtered, unfiltered);
    }

    #[test]
    fn test_shortcut_schemas() {
        let senior = ResourceShortcutTool::new(ResourceShortcut::SeniorCenters).schema();
        assert_eq!(senior.name, "find_senior_centers");
        assert_eq!(senior.required(), &["city".to_string()]);
        assert_eq!(senior.input_schema.properties.len(), 1);
    }
}
