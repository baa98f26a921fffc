//! Centralized constants
//!
//! Single source of truth for policy thresholds and the referral contacts
//! quoted in tool responses. Tools read these instead of repeating literals.

/// Florida Medicaid eligibility thresholds (2024 policy values, USD)
pub mod eligibility {
    /// Minimum age for the aged Medicaid programs
    pub const MIN_AGE: i64 = 65;

    /// Standard Aged/Disabled (SSI-related) monthly income limit
    pub const STANDARD_INCOME_LIMIT: f64 = 1215.0;

    /// Standard countable asset limit (individual)
    pub const STANDARD_ASSET_LIMIT: f64 = 2000.0;

    /// Long-Term Care (nursing home) monthly income limit
    pub const LTC_INCOME_LIMIT: f64 = 2829.0;

    /// Long-Term Care countable asset limit (individual)
    pub const LTC_ASSET_LIMIT: f64 = 2000.0;
}

/// Authoritative referral contacts
pub mod contacts {
    pub const MEDICARE_SITE: &str = "medicare.gov";
    pub const MEDICARE_PHONE: &str = "1-800-MEDICARE";
    pub const MEDICARE_PLAN_COMPARE: &str = "medicare.gov/plan-compare";

    pub const ACCESS_FLORIDA_SITE: &str = "myflorida.com/accessflorida";
    pub const ACCESS_FLORIDA_PHONE: &str = "1-866-762-2237";

    /// Elder Helpline / Area Agency on Aging / SHIP
    pub const AREA_AGENCY_ON_AGING_PHONE: &str = "1-800-963-5337";
    pub const ELDER_AFFAIRS_SITE: &str = "elderaffairs.org";
}

/// Timeouts (seconds)
pub mod timeouts {
    /// Default tool execution timeout
    pub const TOOL_DEFAULT_SECS: u64 = 30;

    /// Upper bound accepted for a configured tool timeout
    pub const TOOL_MAX_SECS: u64 = 300;

    /// Request timeout for the HTTP surface
    pub const HTTP_REQUEST_SECS: u64 = 30;
}
