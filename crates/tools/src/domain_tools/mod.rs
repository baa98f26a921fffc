//! Domain Tools
//!
//! Lookup logic behind the retiree resource tools.
//!
//! This module is organized into:
//! - `resolver`: exact-then-substring key matching shared by every lookup
//! - `knowledge`: Medicare and Medicaid topic stores
//! - `directory`: city → resource type → contacts
//! - `plans`: sample Medicare plans by zip code
//! - `eligibility`: Medicaid threshold evaluator
//! - `tools`: tool implementations

pub mod directory;
pub mod eligibility;
pub mod knowledge;
pub mod plans;
pub mod resolver;
mod tools;
mod utils;

pub use directory::{florida_directory, CityListing, DirectoryResolution, ResourceDirectory};
pub use eligibility::{
    evaluate, EligibilityClassification, EligibilityInput, EligibilityResult, ProgramType,
    ThresholdPair,
};
pub use knowledge::{medicaid_store, medicare_store, KnowledgeEntry, KnowledgeStore};
pub use plans::{sample_plans, MedicarePlan, PlanDirectory, PlanSearch};
pub use resolver::{KeyMatch, MatchKind, Resolution};
pub use utils::{format_usd, title_case};

pub use tools::{
    names, LocalResourceTool, MedicaidEligibilityTool, MedicaidInfoTool, MedicarePlanSearchTool,
    MedicareInfoTool, ResourceShortcut, ResourceShortcutTool,
};
