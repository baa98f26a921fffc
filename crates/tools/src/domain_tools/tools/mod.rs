//! Tool implementations
//!
//! One module per tool family. Names here are the dispatch names the
//! orchestrator calls.

mod eligibility_check;
mod local_resource;
mod medicaid_info;
mod medicare_info;
mod plan_search;

pub use eligibility_check::MedicaidEligibilityTool;
pub use local_resource::{LocalResourceTool, ResourceShortcut, ResourceShortcutTool};
pub use medicaid_info::MedicaidInfoTool;
pub use medicare_info::MedicareInfoTool;
pub use plan_search::MedicarePlanSearchTool;

/// Dispatch names
pub mod names {
    pub use super::eligibility_check::TOOL_NAME as CHECK_MEDICAID_ELIGIBILITY;
    pub use super::local_resource::TOOL_NAME as GET_LOCAL_RESOURCE;
    pub use super::medicaid_info::TOOL_NAME as GET_MEDICAID_INFO;
    pub use super::medicare_info::TOOL_NAME as GET_MEDICARE_INFO;
    pub use super::plan_search::TOOL_NAME as SEARCH_MEDICARE_PLANS;

    pub const FIND_HEALTHCARE_FACILITIES: &str = "find_healthcare_facilities";
    pub const FIND_HOUSING_RESOURCES: &str = "find_housing_resources";
    pub const FIND_TRANSPORTATION_RESOURCES: &str = "find_transportation_resources";
    pub const FIND_SENIOR_CENTERS: &str = "find_senior_centers";
}
