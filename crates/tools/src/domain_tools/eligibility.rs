//! Preliminary Florida Medicaid eligibility
//!
//! Pure threshold comparison: an age gate, then income and assets checked
//! (inclusively) against the limit pair for the selected program. Inputs are
//! not range-checked; negative amounts flow through the comparison unchanged.

use serde::{Deserialize, Serialize};

use retiree_resources_config::{contacts, eligibility as limits};

use super::utils::format_usd;

/// Medicaid program the thresholds come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Standard,
    LongTermCare,
}

impl ProgramType {
    pub fn from_long_term_care(needs_long_term_care: bool) -> Self {
        if needs_long_term_care {
            Self::LongTermCare
        } else {
            Self::Standard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Aged/Disabled",
            Self::LongTermCare => "Long-Term Care",
        }
    }

    pub fn thresholds(&self) -> ThresholdPair {
        match self {
            Self::Standard => ThresholdPair::STANDARD,
            Self::LongTermCare => ThresholdPair::LONG_TERM_CARE,
        }
    }
}

/// Monthly income and countable asset limits (USD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub income_limit: f64,
    pub asset_limit: f64,
}

impl ThresholdPair {
    pub const STANDARD: Self = Self {
        income_limit: limits::STANDARD_INCOME_LIMIT,
        asset_limit: limits::STANDARD_ASSET_LIMIT,
    };

    pub const LONG_TERM_CARE: Self = Self {
        income_limit: limits::LTC_INCOME_LIMIT,
        asset_limit: limits::LTC_ASSET_LIMIT,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityClassification {
    Eligible,
    BothExceed,
    IncomeExceeds,
    AssetsExceed,
    AgeIneligible,
}

impl EligibilityClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::BothExceed => "both-exceed",
            Self::IncomeExceeds => "income-exceeds",
            Self::AssetsExceed => "assets-exceed",
            Self::AgeIneligible => "age-ineligible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_income: f64,
    pub assets: f64,
    pub age: i64,
    #[serde(default)]
    pub needs_long_term_care: bool,
}

impl EligibilityInput {
    pub fn evaluate(&self) -> EligibilityResult {
        evaluate(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub classification: EligibilityClassification,
    pub program: ProgramType,
    /// Limits for `program`; carried even when the age gate short-circuits
    pub thresholds: ThresholdPair,
    pub input: EligibilityInput,
}

impl EligibilityResult {
    pub fn income_eligible(&self) -> bool {
        self.input.monthly_income <= self.thresholds.income_limit
    }

    pub fn asset_eligible(&self) -> bool {
        self.input.assets <= self.thresholds.asset_limit
    }

    /// User-facing assessment text
    pub fn render(&self) -> String {
        let (verdict, suggestion) = match self.classification {
            EligibilityClassification::AgeIneligible => {
                return format!(
                    "Age requirement: Must be {} or older for aged Medicaid programs. \
                     Other Medicaid categories may be available. Contact ADRC for assessment.",
                    limits::MIN_AGE
                );
            }
            EligibilityClassification::Eligible => (
                "✅ Preliminary assessment: May be eligible",
                format!(
                    "Note: This is NOT a final determination. \
                     Functional needs and other factors are also considered.\n\
                     Next steps: Apply at {} or call {}",
                    contacts::ACCESS_FLORIDA_SITE,
                    contacts::ACCESS_FLORIDA_PHONE
                ),
            ),
            EligibilityClassification::BothExceed => (
                "❌ Preliminary assessment: May not meet income AND asset requirements",
                "Consider: Spousal impoverishment protections, asset planning \
                 (consult elder law attorney), or other programs"
                    .to_string(),
            ),
            EligibilityClassification::IncomeExceeds => (
                "⚠️ Income may exceed limit",
                "Consider: Qualified Income Trust (QIT) for long-term care, or other programs"
                    .to_string(),
            ),
            EligibilityClassification::AssetsExceed => (
                "⚠️ Assets may exceed limit",
                "Consider: Asset planning strategies (consult elder law attorney), \
                 or spend-down options"
                    .to_string(),
            ),
        };

        format!(
            "Preliminary {} Medicaid Eligibility Assessment:\n\n\
             Income: ${}/month (Limit: ${}/month)\n\
             Assets: ${} (Limit: ${})\n\n\
             {}\n{}\n\n\
             ⚠️ IMPORTANT: This is a preliminary assessment only. \
             Final eligibility is determined by the state.",
            self.program.label(),
            format_usd(self.input.monthly_income, 2),
            format_usd(self.thresholds.income_limit, 0),
            format_usd(self.input.assets, 2),
            format_usd(self.thresholds.asset_limit, 0),
            verdict,
            suggestion
        )
    }
}

/// Classify an applicant against the fixed Florida thresholds
pub fn evaluate(input: &EligibilityInput) -> EligibilityResult {
    let program = ProgramType::from_long_term_care(input.needs_long_term_care);
    let thresholds = program.thresholds();

    let classification = if input.age < limits::MIN_AGE {
        EligibilityClassification::AgeIneligible
    } else {
        let income_ok = input.monthly_income <= thresholds.income_limit;
        let assets_ok = input.assets <= thresholds.asset_limit;
        match (income_ok, assets_ok) {
            (true, true) => EligibilityClassification::Eligible,
            (false, false) => EligibilityClassification::BothExceed,
            (false, true) => EligibilityClassification::IncomeExceeds,
            (true, false) => EligibilityClassification::AssetsExceed,
        }
    };

    EligibilityResult {
        classification,
        program,
        thresholds,
        input: *input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(monthly_income: f64, assets: f64, age: i64, ltc: bool) -> EligibilityInput {
        EligibilityInput {
            monthly_income,
            assets,
            age,
            needs_long_term_care: ltc,
        }
    }

    #[test]
    fn test_boundary_is_eligible() {
        let result = evaluate(&input(1215.0, 2000.0, 70, false));
        assert_eq!(result.classification, EligibilityClassification::Eligible);
        assert!(result.income_eligible());
        assert!(result.asset_eligible());
    }

    #[test]
    fn test_income_flips_just_past_limit() {
        let at = evaluate(&input(1215.0, 500.0, 70, false));
        let above = evaluate(&input(1215.01, 500.0, 70, false));
        assert!(at.income_eligible());
        assert!(!above.income_eligible());
        assert_eq!(above.classification, EligibilityClassification::IncomeExceeds);
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(
            evaluate(&input(1300.0, 1500.0, 70, false)).classification,
            EligibilityClassification::IncomeExceeds
        );
        assert_eq!(
            evaluate(&input(1000.0, 2500.0, 70, false)).classification,
            EligibilityClassification::AssetsExceed
        );
        assert_eq!(
            evaluate(&input(3000.0, 2500.0, 70, true)).classification,
            EligibilityClassification::BothExceed
        );
        assert_eq!(
            evaluate(&input(2500.0, 1000.0, 80, true)).classification,
            EligibilityClassification::Eligible
        );
    }

    #[test]
    fn test_age_gate_precedes_finances() {
        let result = evaluate(&input(0.0, 0.0, 64, false));
        assert_eq!(result.classification, EligibilityClassification::AgeIneligible);
        assert_eq!(result.thresholds, ThresholdPair::STANDARD);

        let result = evaluate(&input(0.0, 0.0, 64, true));
        assert_eq!(result.thresholds, ThresholdPair::LONG_TERM_CARE);
        assert!(result.render().starts_with("Age requirement: Must be 65 or older"));
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let result = evaluate(&input(-100.0, -5.0, 65, false));
        assert_eq!(result.classification, EligibilityClassification::Eligible);
    }

    #[test]
    fn test_render_income_exceeds() {
        let text = evaluate(&input(1300.0, 1500.0, 70, false)).render();
        assert!(text.starts_with(
            "Preliminary Standard Aged/Disabled Medicaid Eligibility Assessment:\n\n"
        ));
        assert!(text.contains("Income: $1,300.00/month (Limit: $1,215/month)\n"));
        assert!(text.contains("Assets: $1,500.00 (Limit: $2,000)\n\n"));
        assert!(text.contains("⚠️ Income may exceed limit\n"));
        assert!(text.contains("Qualified Income Trust"));
        assert!(text.ends_with("Final eligibility is determined by the state."));
    }

    #[test]
    fn test_render_eligible_long_term_care() {
        let text = evaluate(&input(2829.0, 2000.0, 66, true)).render();
        assert!(text.starts_with("Preliminary Long-Term Care Medicaid Eligibility Assessment:"));
        assert!(text.contains("(Limit: $2,829/month)"));
        assert!(text.contains("✅ Preliminary assessment: May be eligible\n"));
        assert!(text.contains("Next steps: Apply at myflorida.com/accessflorida or call 1-866-762-2237"));
    }

    #[test]
    fn test_classification_serde() {
        let json = serde_json::to_string(&EligibilityClassification::AgeIneligible).unwrap();
        assert_eq!(json, "\"age-ineligible\"");
        assert_eq!(EligibilityClassification::BothExceed.as_str(), "both-exceed");
    }
}
