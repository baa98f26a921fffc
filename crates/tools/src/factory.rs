//! Specialist Tool Factory
//!
//! Builds the nine lookup tools and groups them by the specialist that owns
//! them, so an orchestrator can hand each sub-agent only its own tools.
//!
//! # Example
//!
//! ```ignore
//! use retiree_resources_tools::factory::SpecialistToolFactory;
//! use retiree_resources_tools::registry::create_registry_from_factory;
//!
//! let factory = Arc::new(SpecialistToolFactory::new());
//! let medicaid_tools = factory.create_tools_by_category("medicaid")?;
//! let registry = create_registry_from_factory(factory, &settings.tools)?;
//! ```

use std::sync::Arc;

use retiree_resources_config::ToolsConfig;
use retiree_resources_core::traits::{Tool, ToolFactory, ToolFactoryError, ToolMetadata};
use retiree_resources_core::{Specialist, TopicSource};

use crate::domain_tools::{
    self, florida_directory, medicaid_store, medicare_store, names, sample_plans, PlanDirectory,
    ResourceDirectory, ResourceShortcut,
};
use crate::registry::{create_registry_from_factory, ToolRegistry};

pub const DOMAIN_NAME: &str = "florida_retiree_resources";

/// (name, display name, owning specialist), in listing order
const CATALOG: [(&str, &str, Specialist); 9] = [
    (names::GET_MEDICARE_INFO, "Medicare Information", Specialist::Medicare),
    (names::SEARCH_MEDICARE_PLANS, "Medicare Plan Search", Specialist::Medicare),
    (names::GET_MEDICAID_INFO, "Medicaid Information", Specialist::Medicaid),
    (
        names::CHECK_MEDICAID_ELIGIBILITY,
        "Medicaid Eligibility Check",
        Specialist::Medicaid,
    ),
    (names::GET_LOCAL_RESOURCE, "Local Resources", Specialist::LocalResources),
    (
        names::FIND_HEALTHCARE_FACILITIES,
        "Healthcare Facilities",
        Specialist::LocalResources,
    ),
    (
        names::FIND_HOUSING_RESOURCES,
        "Housing Resources",
        Specialist::LocalResources,
    ),
    (
        names::FIND_TRANSPORTATION_RESOURCES,
        "Transportation Resources",
        Specialist::LocalResources,
    ),
    (names::FIND_SENIOR_CENTERS, "Senior Centers", Specialist::LocalResources),
];

/// Specialist that owns a tool
pub fn specialist_for_tool(name: &str) -> Option<Specialist> {
    CATALOG
        .iter()
        .find(|(tool, _, _)| *tool == name)
        .map(|(_, _, specialist)| *specialist)
}

/// Tool names owned by a specialist, in listing order
pub fn tools_for_specialist(specialist: Specialist) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|(_, _, owner)| *owner == specialist)
        .map(|(name, _, _)| *name)
        .collect()
}

/// Factory over the lookup data sources
///
/// Defaults to the bundled stores; any source can be swapped for another
/// [`TopicSource`] without touching the tools.
pub struct SpecialistToolFactory {
    medicare: Arc<dyn TopicSource>,
    medicaid: Arc<dyn TopicSource>,
    directory: Arc<ResourceDirectory>,
    plans: Arc<PlanDirectory>,
}

impl SpecialistToolFactory {
    pub fn new() -> Self {
        Self {
            medicare: medicare_store(),
            medicaid: medicaid_store(),
            directory: florida_directory(),
            plans: sample_plans(),
        }
    }

    pub fn with_medicare_source(mut self, source: Arc<dyn TopicSource>) -> Self {
        self.medicare = source;
        self
    }

    pub fn with_medicaid_source(mut self, source: Arc<dyn TopicSource>) -> Self {
        self.medicaid = source;
        self
    }

    pub fn with_directory(mut self, directory: Arc<ResourceDirectory>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_plans(mut self, plans: Arc<PlanDirectory>) -> Self {
        self.plans = plans;
        self
    }

    fn shortcut(&self, shortcut: ResourceShortcut) -> Arc<dyn Tool> {
        Arc::new(domain_tools::ResourceShortcutTool::with_directory(
            shortcut,
            self.directory.clone(),
        ))
    }
}

impl Default for SpecialistToolFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolFactory for SpecialistToolFactory {
    fn domain_name(&self) -> &str {
        DOMAIN_NAME
    }

    fn available_tools(&self) -> Vec<ToolMetadata> {
        CATALOG
            .iter()
            .map(|(name, display_name, specialist)| {
                // Description comes from the tool itself so the two never drift
                let description = self
                    .create_tool(name)
                    .map(|t| t.description().to_string())
                    .unwrap_or_default();
                ToolMetadata {
                    name: name.to_string(),
                    display_name: display_name.to_string(),
                    description,
                    category: specialist.as_str().to_string(),
                }
            })
            .collect()
    }

    fn create_tool(&self, name: &str) -> Result<Arc<dyn Tool>, ToolFactoryError> {
        let tool: Arc<dyn Tool> = match name {
            names::GET_MEDICARE_INFO => Arc::new(domain_tools::MedicareInfoTool::with_source(
                self.medicare.clone(),
            )),
            names::SEARCH_MEDICARE_PLANS => Arc::new(
                domain_tools::MedicarePlanSearchTool::with_plans(self.plans.clone()),
            ),
            names::GET_MEDICAID_INFO => Arc::new(domain_tools::MedicaidInfoTool::with_source(
                self.medicaid.clone(),
            )),
            names::CHECK_MEDICAID_ELIGIBILITY => {
                Arc::new(domain_tools::MedicaidEligibilityTool::new())
            }
            names::GET_LOCAL_RESOURCE => Arc::new(
                domain_tools::LocalResourceTool::with_directory(self.directory.clone()),
            ),
            names::FIND_HEALTHCARE_FACILITIES => {
                self.shortcut(ResourceShortcut::HealthcareFacilities)
            }
            names::FIND_HOUSING_RESOURCES => self.shortcut(ResourceShortcut::Housing),
            names::FIND_TRANSPORTATION_RESOURCES => {
                self.shortcut(ResourceShortcut::Transportation)
            }
            names::FIND_SENIOR_CENTERS => self.shortcut(ResourceShortcut::SeniorCenters),
            _ => {
                return Err(ToolFactoryError::for_tool(
                    name,
                    format!("No implementation for tool '{}'", name),
                ))
            }
        };
        Ok(tool)
    }
}

/// Registry over the bundled data, honoring the tool configuration
pub fn create_default_registry(config: &ToolsConfig) -> Result<ToolRegistry, ToolFactoryError> {
    create_registry_from_factory(Arc::new(SpecialistToolFactory::new()), config)
}
