//! Lookup tools for Florida retirees
//!
//! Medicare and Medicaid topic lookups, local resource directory, Medicare
//! plan search and a preliminary Medicaid eligibility screen, exposed as
//! MCP-style tools grouped by specialist.

pub mod domain_tools;
pub mod factory;
pub mod mcp;
pub mod registry;

pub use domain_tools::{
    // Lookup data
    florida_directory, medicaid_store, medicare_store, sample_plans, KnowledgeStore,
    PlanDirectory, ResourceDirectory,
    // Eligibility
    evaluate, EligibilityClassification, EligibilityInput, EligibilityResult, ProgramType,
    ThresholdPair,
    // Tool implementations
    LocalResourceTool, MedicaidEligibilityTool, MedicaidInfoTool, MedicarePlanSearchTool,
    MedicareInfoTool, ResourceShortcut, ResourceShortcutTool,
};
pub use factory::{
    create_default_registry, specialist_for_tool, tools_for_specialist, SpecialistToolFactory,
};
pub use mcp::{ContentBlock, ErrorCode, InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};
pub use registry::{create_registry_from_factory, ToolExecutor, ToolRegistry};
