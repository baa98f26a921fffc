//! Sample Medicare plan listings by zip code

use std::sync::Arc;

use once_cell::sync::Lazy;
use retiree_resources_config::contacts;

use super::utils::title_case;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicarePlan {
    pub name: String,
    /// "advantage", "supplement" or "partd"
    pub plan_type: String,
    pub premium: String,
    pub rating: String,
}

impl MedicarePlan {
    pub fn new(name: &str, plan_type: &str, premium: &str, rating: &str) -> Self {
        Self {
            name: name.to_string(),
            plan_type: plan_type.to_string(),
            premium: premium.to_string(),
            rating: rating.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct ZipListing {
    zip: String,
    area: String,
    plans: Vec<MedicarePlan>,
}

/// Outcome of a plan search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSearch<'a> {
    Found(Vec<&'a MedicarePlan>),
    NoMatchingPlans,
    UnknownZip,
}

#[derive(Debug, Clone, Default)]
pub struct PlanDirectory {
    listings: Vec<ZipListing>,
}

impl PlanDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zip(mut self, zip: &str, area: &str, plans: Vec<MedicarePlan>) -> Self {
        self.listings.push(ZipListing {
            zip: zip.to_string(),
            area: area.to_string(),
            plans,
        });
        self
    }

    /// Known zips with their area name, in listing order
    pub fn zip_codes(&self) -> Vec<(&str, &str)> {
        self.listings
            .iter()
            .map(|l| (l.zip.as_str(), l.area.as_str()))
            .collect()
    }

    /// Plans for a zip; any `plan_type` other than "all" keeps types containing it
    pub fn search(&self, zip_code: &str, plan_type: &str) -> PlanSearch<'_> {
        let zip = zip_code.trim();
        let Some(listing) = self.listings.iter().find(|l| l.zip == zip) else {
            return PlanSearch::UnknownZip;
        };

        let filter = plan_type.to_lowercase();
        let plans: Vec<&MedicarePlan> = listing
            .plans
            .iter()
            .filter(|p| filter == "all" || p.plan_type.to_lowercase().contains(&filter))
            .collect();

        if plans.is_empty() {
            PlanSearch::NoMatchingPlans
        } else {
            PlanSearch::Found(plans)
        }
    }

    /// Render a search as user-facing text
    pub fn describe(&self, zip_code: &str, plan_type: &str) -> String {
        match self.search(zip_code, plan_type) {
            PlanSearch::UnknownZip => {
                let samples: Vec<String> = self
                    .zip_codes()
                    .into_iter()
                    .map(|(zip, area)| format!("{} ({})", zip, area))
                    .collect();
                format!(
                    "Plans for zip code {} not found in database. \
                     To find plans in your area, visit {} or call {}. \
                     Available sample zip codes: {}.",
                    zip_code,
                    contacts::MEDICARE_PLAN_COMPARE,
                    contacts::MEDICARE_PHONE,
                    samples.join(", ")
                )
            }
            PlanSearch::NoMatchingPlans => {
                format!("No {} plans found for zip code {}.", plan_type, zip_code)
            }
            PlanSearch::Found(plans) => {
                let mut text = format!("Available Medicare Plans in {}:\n\n", zip_code);
                for plan in plans {
                    text.push_str(&format!(
                        "- {} ({})\n  Premium: {}/month\n  Rating: {}\n\n",
                        plan.name,
                        title_case(&plan.plan_type),
                        plan.premium,
                        plan.rating
                    ));
                }
                text.push_str(&format!(
                    "Note: This is sample data. For real-time plan information, visit {}",
                    contacts::MEDICARE_PLAN_COMPARE
                ));
                text
            }
        }
    }
}

static SAMPLE_PLANS: Lazy<Arc<PlanDirectory>> = Lazy::new(|| {
    Arc::new(
        PlanDirectory::new()
            .with_zip(
                "33101",
                "Miami",
                vec![
                    MedicarePlan::new("Humana Gold Plus HMO", "advantage", "$0", "4.5 stars"),
                    MedicarePlan::new(
                        "UnitedHealthcare Medicare Advantage",
                        "advantage",
                        "$15",
                        "4.0 stars",
                    ),
                    MedicarePlan::new(
                        "AARP Medicare Supplement Plan G",
                        "supplement",
                        "$150",
                        "4.2 stars",
                    ),
                ],
            )
            .with_zip(
                "32801",
                "Orlando",
                vec![
                    MedicarePlan::new(
                        "Blue Cross Blue Shield Medicare Advantage",
                        "advantage",
                        "$0",
                        "4.3 stars",
                    ),
                    MedicarePlan::new("Humana Medicare Advantage", "advantage", "$25", "4.1 stars"),
                ],
            )
            .with_zip(
                "33601",
                "Tampa",
                vec![
                    MedicarePlan::new("WellCare Medicare Advantage", "advantage", "$0", "4.0 stars"),
                    MedicarePlan::new("Aetna Medicare Advantage", "advantage", "$20", "4.4 stars"),
                ],
            ),
    )
});

/// Bundled sample plans for Miami, Orlando and Tampa
pub fn sample_plans() -> Arc<PlanDirectory> {
    Arc::clone(&SAMPLE_PLANS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_plans_for_miami() {
        match sample_plans().search(" 33101 ", "ALL") {
            PlanSearch::Found(plans) => assert_eq!(plans.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_filter_by_type() {
        match sample_plans().search("33101", "Supplement") {
            PlanSearch::Found(plans) => {
                assert_eq!(plans.len(), 1);
                assert_eq!(plans[0].name, "AARP Medicare Supplement Plan G");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sample_plans().search("32801", "partd"), PlanSearch::NoMatchingPlans);
    }

    #[test]
    fn test_unknown_zip_text() {
        let text = sample_plans().describe("90210", "all");
        assert_eq!(
            text,
            "Plans for zip code 90210 not found in database. \
             To find plans in your area, visit medicare.gov/plan-compare or call 1-800-MEDICARE. \
             Available sample zip codes: 33101 (Miami), 32801 (Orlando), 33601 (Tampa)."
        );
    }

    #[test]
    fn test_listing_text() {
        let text = sample_plans().describe("33601", "advantage");
        assert!(text.starts_with("Available Medicare Plans in 33601:\n\n"));
        assert!(text.contains("- WellCare Medicare Advantage (Advantage)\n  Premium: $0/month\n  Rating: 4.0 stars\n\n"));
        assert!(text.ends_with("visit medicare.gov/plan-compare"));
    }

    #[test]
    fn test_no_matching_text() {
        assert_eq!(
            sample_plans().describe("33601", "supplement"),
            "No supplement plans found for zip code 33601."
        );
    }
}
