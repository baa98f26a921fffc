//! Knowledge stores
//!
//! Immutable topic → text mappings, one per domain. Entries keep their
//! declaration order because substring matching tests keys in that order.

mod medicaid;
mod medicare;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use retiree_resources_core::TopicSource;

use super::resolver::{self, normalize, Resolution};

pub use medicaid::medicaid_entries;
pub use medicare::medicare_entries;

/// One topic and its canned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub key: String,
    pub text: String,
}

/// Ordered, case-insensitive topic store
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    name: String,
    referral: String,
    entries: Vec<KnowledgeEntry>,
    index: HashMap<String, usize>,
}

impl KnowledgeStore {
    pub fn new(name: impl Into<String>, referral: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            referral: referral.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append an entry; a repeated key replaces the text in place
    pub fn with_entry(mut self, key: &str, text: impl Into<String>) -> Self {
        let key = normalize(key);
        let text = text.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].text = text,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(KnowledgeEntry { key, text });
            }
        }
        self
    }

    pub fn with_entries<'a, I>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        entries
            .into_iter()
            .fold(self, |store, (key, text)| store.with_entry(key, text))
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn resolve(&self, input: &str) -> Resolution<'_> {
        resolver::resolve(self, input)
    }

    /// Entry text for the input, or the fallback listing every topic
    pub fn lookup(&self, input: &str) -> String {
        resolver::lookup(self, input)
    }
}

impl TopicSource for KnowledgeStore {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn referral(&self) -> &str {
        &self.referral
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].text.as_str())
    }
}

static MEDICARE_STORE: Lazy<Arc<KnowledgeStore>> = Lazy::new(|| {
    let referral = format!(
        "For detailed information, visit {} or call {}.",
        retiree_resources_config::contacts::MEDICARE_SITE,
        retiree_resources_config::contacts::MEDICARE_PHONE
    );
    Arc::new(KnowledgeStore::new("Medicare", referral).with_entries(medicare_entries()))
});

static MEDICAID_STORE: Lazy<Arc<KnowledgeStore>> = Lazy::new(|| {
    let referral = format!(
        "For detailed information, visit {} or call {}.",
        retiree_resources_config::contacts::ACCESS_FLORIDA_SITE,
        retiree_resources_config::contacts::ACCESS_FLORIDA_PHONE
    );
    Arc::new(KnowledgeStore::new("Medicaid", referral).with_entries(medicaid_entries()))
});

/// Bundled Medicare topics
pub fn medicare_store() -> Arc<KnowledgeStore> {
    Arc::clone(&MEDICARE_STORE)
}

/// Bundled Florida Medicaid topics
pub fn medicaid_store() -> Arc<KnowledgeStore> {
    Arc::clone(&MEDICAID_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_tools::resolver::MatchKind;

    #[test]
    fn test_medicare_key_order() {
        let store = medicare_store();
        assert_eq!(
            store.keys(),
            vec![
                "part a",
                "part b",
                "part c",
                "part d",
                "enrollment",
                "costs",
                "supplemental insurance",
                "florida specific",
            ]
        );
    }

    #[test]
    fn test_medicaid_key_order() {
        let store = medicaid_store();
        assert_eq!(
            store.keys(),
            vec![
                "eligibility",
                "application",
                "long term care",
                "nursing home",
                "home care",
                "income limits",
                "asset limits",
                "waiver programs",
                "florida specific",
            ]
        );
    }

    #[test]
    fn test_every_key_resolves_exactly() {
        for store in [medicare_store(), medicaid_store()] {
            for entry in store.entries() {
                assert_eq!(
                    store.resolve(&entry.key),
                    Resolution::Found {
                        key: entry.key.as_str(),
                        kind: MatchKind::Exact,
                        text: entry.text.as_str(),
                    }
                );
                assert_eq!(store.lookup(&entry.key.to_uppercase()), entry.text);
            }
        }
    }

    #[test]
    fn test_builder_normalizes_and_replaces() {
        let store = KnowledgeStore::new("Test", "Call us.")
            .with_entry(" Alpha ", "first")
            .with_entry("beta", "second")
            .with_entry("ALPHA", "replaced");

        assert_eq!(store.keys(), vec!["alpha", "beta"]);
        assert_eq!(store.get("alpha"), Some("replaced"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_fallback_lists_keys_and_referral() {
        let store = medicaid_store();
        let text = store.lookup("dental");
        assert!(text.starts_with("Information about 'dental' not found in Medicaid knowledge base."));
        assert!(text.contains("eligibility, application, long term care"));
        assert!(text.ends_with("visit myflorida.com/accessflorida or call 1-866-762-2237."));
    }

    #[test]
    fn test_substring_order_medicaid() {
        let store = medicaid_store();
        // "care" is inside "long term care" before "home care"
        match store.resolve("care") {
            Resolution::Found { key, kind, .. } => {
                assert_eq!(key, "long term care");
                assert_eq!(kind, MatchKind::Substring);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
