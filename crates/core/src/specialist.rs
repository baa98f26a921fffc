//! Specialist routing targets
//!
//! The coordinator delegates each question to one of three specialists. Every
//! tool belongs to exactly one of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialist {
    /// Medicare Parts A/B/C/D, enrollment, costs, plans, supplemental insurance
    Medicare,
    /// Florida Medicaid eligibility, applications, long-term care, waivers
    Medicaid,
    /// Healthcare, housing, transportation and senior centers by city
    LocalResources,
}

impl Specialist {
    pub const ALL: [Specialist; 3] = [Self::Medicare, Self::Medicaid, Self::LocalResources];

    /// Stable id, also used as the tool factory category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medicare => "medicare",
            Self::Medicaid => "medicaid",
            Self::LocalResources => "local_resources",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Medicare => "Medicare Specialist",
            Self::Medicaid => "Medicaid Specialist",
            Self::LocalResources => "Local Resources Specialist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Medicare => {
                "Questions about Medicare Parts A/B/C/D, enrollment, costs, plans and supplemental insurance"
            }
            Self::Medicaid => {
                "Questions about Florida Medicaid eligibility, applications, long-term care and waiver programs"
            }
            Self::LocalResources => {
                "Finding healthcare facilities, housing, transportation and senior centers in Florida cities"
            }
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialist {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|sp| sp.as_str() == normalized)
            .ok_or_else(|| Error::UnknownSpecialist(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_ids() {
        for specialist in Specialist::ALL {
            assert_eq!(specialist.as_str().parse::<Specialist>().unwrap(), specialist);
        }
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!("Local Resources".parse::<Specialist>().unwrap(), Specialist::LocalResources);
        assert_eq!(" MEDICAID ".parse::<Specialist>().unwrap(), Specialist::Medicaid);
        assert!("dental".parse::<Specialist>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Specialist::LocalResources).unwrap();
        assert_eq!(json, "\"local_resources\"");
    }
}
