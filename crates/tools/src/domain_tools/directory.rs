//! Local resource directory
//!
//! City → resource type → contact lines. Cities resolve by exact match only;
//! resource types use the shared exact-then-substring policy within the city.

use std::sync::Arc;

use once_cell::sync::Lazy;
use retiree_resources_config::contacts;

use super::resolver::{self, MatchKind};
use super::utils::title_case;

/// Contact lines for one resource type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCategory {
    pub key: String,
    pub contacts: Vec<String>,
}

/// All categories for one city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityListing {
    pub key: String,
    pub categories: Vec<ResourceCategory>,
}

impl CityListing {
    pub fn new(key: &str) -> Self {
        Self {
            key: resolver::normalize(key),
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, key: &str, contacts: &[&str]) -> Self {
        self.categories.push(ResourceCategory {
            key: resolver::normalize(key),
            contacts: contacts.iter().map(|c| c.to_string()).collect(),
        });
        self
    }

    pub fn category_keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    fn category(&self, key: &str) -> Option<&ResourceCategory> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Outcome of a city-then-type lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryResolution<'a> {
    Found {
        city: &'a str,
        resource_type: &'a str,
        kind: MatchKind,
        contacts: &'a [String],
    },
    CityNotFound {
        available: Vec<&'a str>,
    },
    ResourceTypeNotFound {
        city: &'a str,
        available: Vec<&'a str>,
    },
}

/// Two-level resource directory
#[derive(Debug, Clone, Default)]
pub struct ResourceDirectory {
    cities: Vec<CityListing>,
}

impl ResourceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: CityListing) -> Self {
        self.cities.push(city);
        self
    }

    pub fn city_keys(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn city(&self, key: &str) -> Option<&CityListing> {
        self.cities.iter().find(|c| c.key == key)
    }

    pub fn resolve_city_then_type(&self, city: &str, resource_type: &str) -> DirectoryResolution<'_> {
        let city_keys = self.city_keys();
        let Some(listing) = resolver::match_exact(&city_keys, city).and_then(|key| self.city(key))
        else {
            return DirectoryResolution::CityNotFound {
                available: city_keys,
            };
        };

        let type_keys = listing.category_keys();
        match resolver::match_key(&type_keys, resource_type)
            .and_then(|m| listing.category(m.key).map(|category| (m.kind, category)))
        {
            Some((kind, category)) => DirectoryResolution::Found {
                city: &listing.key,
                resource_type: &category.key,
                kind,
                contacts: &category.contacts,
            },
            None => DirectoryResolution::ResourceTypeNotFound {
                city: &listing.key,
                available: type_keys,
            },
        }
    }

    /// Render the lookup as user-facing text
    pub fn lookup(&self, city: &str, resource_type: &str, zip_code: Option<&str>) -> String {
        match self.resolve_city_then_type(city, resource_type) {
            DirectoryResolution::Found {
                city,
                resource_type,
                kind,
                contacts: entries,
            } => {
                tracing::debug!(city, resource_type, ?kind, "Local resources resolved");

                let mut text = format!(
                    "{} Resources in {}:\n\n",
                    title_case(resource_type),
                    title_case(city)
                );
                for (i, entry) in entries.iter().enumerate() {
                    text.push_str(&format!("{}. {}\n", i + 1, entry));
                }

                let zip = zip_code
                    .map(str::trim)
                    .filter(|z| !z.is_empty())
                    .unwrap_or("Not specified");
                text.push_str(&format!("\nZip code provided: {}\n", zip));
                text.push_str(&format!(
                    "\nFor additional resources, contact:\n\
                     - Florida Department of Elder Affairs: {}\n\
                     - Area Agency on Aging: {}\n\
                     - Local ADRC (Aging and Disability Resource Center)",
                    contacts::ELDER_AFFAIRS_SITE,
                    contacts::AREA_AGENCY_ON_AGING_PHONE
                ));
                text
            }
            DirectoryResolution::CityNotFound { available } => {
                tracing::debug!(city, "City not in directory");
                let cities: Vec<String> = available.iter().map(|c| title_case(c)).collect();
                format!(
                    "Resources for {} not found in database. Available cities: {}. \
                     For resources in other areas, contact your local Area Agency on Aging: {}",
                    city.trim(),
                    cities.join(", "),
                    contacts::AREA_AGENCY_ON_AGING_PHONE
                )
            }
            DirectoryResolution::ResourceTypeNotFound {
                city: city_key,
                available,
            } => {
                tracing::debug!(city = city_key, resource_type, "Resource type not listed");
                format!(
                    "{} resources not found for {}. Available resource types: {}. \
                     Contact local Area Agency on Aging for more information: {}",
                    resource_type.trim(),
                    title_case(city_key),
                    available.join(", "),
                    contacts::AREA_AGENCY_ON_AGING_PHONE
                )
            }
        }
    }
}

static FLORIDA_DIRECTORY: Lazy<Arc<ResourceDirectory>> =
    Lazy::new(|| Arc::new(florida_cities()));

/// Bundled directory for Miami, Orlando and Tampa
pub fn florida_directory() -> Arc<ResourceDirectory> {
    Arc::clone(&FLORIDA_DIRECTORY)
}

fn florida_cities() -> ResourceDirectory {
    ResourceDirectory::new()
        .with_city(
            CityListing::new("miami")
                .with_category(
                    "healthcare",
                    &[
                        "Jackson Memorial Hospital - Senior Services: (305) 585-1111",
                        "Miami-Dade Elder Services: (305) 671-7200",
                        "Community Health of South Florida: (305) 253-5100",
                    ],
                )
                .with_category(
                    "housing",
                    &[
                        "Miami-Dade Housing Authority: (305) 403-6000",
                        "Elderly Housing Development: (305) 375-4000",
                        "Section 8 Housing Vouchers: Apply at miamidade.gov/housing",
                    ],
                )
                .with_category(
                    "transportation",
                    &[
                        "Miami-Dade Transit Senior Discount: (305) 891-3131",
                        "Special Transportation Services (STS): (305) 891-3131",
                        "Elderly Transportation Program: Contact local senior centers",
                    ],
                )
                .with_category(
                    "senior center",
                    &[
                        "Miami Beach Senior Center: (305) 673-7700",
                        "Coral Gables Senior Center: (305) 460-5600",
                        "North Miami Senior Center: (305) 895-9800",
                    ],
                ),
        )
        .with_city(
            CityListing::new("orlando")
                .with_category(
                    "healthcare",
                    &[
                        "Orlando Health Senior Services: (321) 841-5111",
                        "AdventHealth Senior Care: (407) 303-5600",
                        "Orange County Health Department: (407) 858-1400",
                    ],
                )
                .with_category(
                    "housing",
                    &[
                        "Orlando Housing Authority: (407) 895-3300",
                        "Orange County Housing Authority: (407) 895-3300",
                        "Affordable Senior Housing Directory: Contact (407) 836-6500",
                    ],
                )
                .with_category(
                    "transportation",
                    &[
                        "Lynx Senior Discount: (407) 841-2279",
                        "Access Lynx (Paratransit): (407) 841-2279",
                        "Senior Transportation Services: Contact local senior centers",
                    ],
                )
                .with_category(
                    "senior center",
                    &[
                        "Orlando Senior Center: (407) 246-4483",
                        "Winter Park Senior Center: (407) 599-3337",
                        "Kissimmee Senior Center: (407) 870-7700",
                    ],
                ),
        )
        .with_city(
            CityListing::new("tampa")
                .with_category(
                    "healthcare",
                    &[
                        "Tampa General Hospital Senior Services: (813) 844-7000",
                        "BayCare Senior Care: (813) 871-2000",
                        "Hillsborough County Health Department: (813) 307-8000",
                    ],
                )
                .with_category(
                    "housing",
                    &[
                        "Tampa Housing Authority: (813) 253-0551",
                        "Hillsborough County Housing Authority: (813) 672-5400",
                        "Senior Housing Resources: (813) 272-5040",
                    ],
                )
                .with_category(
                    "transportation",
                    &[
                        "HART Senior Discount: (813) 254-4278",
                        "HART Plus (Paratransit): (813) 254-4278",
                        "Senior Transportation Network: Contact (813) 272-5040",
                    ],
                )
                .with_category(
                    "senior center",
                    &[
                        "Tampa Senior Center: (813) 274-8181",
                        "Hyde Park Senior Center: (813) 251-2177",
                        "North Tampa Senior Center: (813) 975-2121",
                    ],
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_exact_only() {
        let directory = florida_directory();
        assert!(matches!(
            directory.resolve_city_then_type("Miami Beach", "housing"),
            DirectoryResolution::CityNotFound { .. }
        ));
        assert!(matches!(
            directory.resolve_city_then_type("  TAMPA ", "housing"),
            DirectoryResolution::Found { city: "tampa", .. }
        ));
    }

    #[test]
    fn test_resource_type_substring() {
        let directory = florida_directory();
        match directory.resolve_city_then_type("orlando", "senior") {
            DirectoryResolution::Found {
                resource_type,
                kind,
                contacts,
                ..
            } => {
                assert_eq!(resource_type, "senior center");
                assert_eq!(kind, MatchKind::Substring);
                assert_eq!(contacts[0], "Orlando Senior Center: (407) 246-4483");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lookup_formats_numbered_list() {
        let text = florida_directory().lookup("Miami", "Senior Center", None);
        assert!(text.starts_with("Senior Center Resources in Miami:\n\n"));
        assert!(text.contains("1. Miami Beach Senior Center: (305) 673-7700\n"));
        assert!(text.contains("2. Coral Gables Senior Center: (305) 460-5600\n"));
        assert!(text.contains("3. North Miami Senior Center: (305) 895-9800\n"));
        assert!(text.contains("\nZip code provided: Not specified\n"));
        assert!(text.ends_with("- Local ADRC (Aging and Disability Resource Center)"));
    }

    #[test]
    fn test_lookup_with_zip() {
        let text = florida_directory().lookup("tampa", "housing", Some("33601"));
        assert!(text.contains("Zip code provided: 33601"));

        let text = florida_directory().lookup("tampa", "housing", Some("  "));
        assert!(text.contains("Zip code provided: Not specified"));
    }

    #[test]
    fn test_city_not_found_message() {
        let text = florida_directory().lookup("Jacksonville", "healthcare", None);
        assert_eq!(
            text,
            "Resources for Jacksonville not found in database. Available cities: Miami, Orlando, Tampa. \
             For resources in other areas, contact your local Area Agency on Aging: 1-800-963-5337"
        );
    }

    #[test]
    fn test_resource_type_not_found_message() {
        let text = florida_directory().lookup("miami", "legal aid", None);
        assert_eq!(
            text,
            "legal aid resources not found for Miami. \
             Available resource types: healthcare, housing, transportation, senior center. \
             Contact local Area Agency on Aging for more information: 1-800-963-5337"
        );
    }

    #[test]
    fn test_empty_resource_type_not_found() {
        assert!(matches!(
            florida_directory().resolve_city_then_type("miami", " "),
            DirectoryResolution::ResourceTypeNotFound { city: "miami", .. }
        ));
    }
}
