//! Lookup resolution
//!
//! Shared matching policy for every keyed lookup: normalize the input, try an
//! exact key, then the first key (in source order) that contains or is
//! contained by the input. Resolution never fails; a miss is a value.

use retiree_resources_core::TopicSource;

/// Lowercase and trim
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// How a key was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
}

/// A resolved key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'a> {
    pub key: &'a str,
    pub kind: MatchKind,
}

/// Exact-only match against lowercase keys
pub fn match_exact<'a>(keys: &[&'a str], input: &str) -> Option<&'a str> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }
    keys.iter().copied().find(|key| *key == needle)
}

/// Exact match, then substring fallback in key order
///
/// Keys must already be lowercase. Empty input never matches, since the empty
/// string is a substring of every key.
pub fn match_key<'a>(keys: &[&'a str], input: &str) -> Option<KeyMatch<'a>> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }

    if let Some(key) = keys.iter().copied().find(|key| *key == needle) {
        return Some(KeyMatch {
            key,
            kind: MatchKind::Exact,
        });
    }

    keys.iter()
        .copied()
        .find(|key| needle.contains(key) || key.contains(needle.as_str()))
        .map(|key| KeyMatch {
            key,
            kind: MatchKind::Substring,
        })
}

/// Outcome of resolving free text against a [`TopicSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found {
        key: &'a str,
        kind: MatchKind,
        text: &'a str,
    },
    NotFound {
        available: Vec<&'a str>,
    },
}

impl Resolution<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Resolve input against a topic source
pub fn resolve<'a, S>(source: &'a S, input: &str) -> Resolution<'a>
where
    S: TopicSource + ?Sized,
{
    let keys = source.keys();
    match match_key(&keys, input).and_then(|m| source.get(m.key).map(|text| (m, text))) {
        Some((m, text)) => Resolution::Found {
            key: m.key,
            kind: m.kind,
            text,
        },
        None => Resolution::NotFound { available: keys },
    }
}

/// Resolve and render: the entry text, or the enumerated fallback
pub fn lookup<S>(source: &S, input: &str) -> String
where
    S: TopicSource + ?Sized,
{
    match resolve(source, input) {
        Resolution::Found { key, kind, text } => {
            tracing::debug!(source = source.source_name(), key, ?kind, "Topic resolved");
            text.to_string()
        }
        Resolution::NotFound { available } => {
            tracing::debug!(source = source.source_name(), input, "Topic not found");
            format!(
                "Information about '{}' not found in {} knowledge base. \
                 Available topics include: {}. {}",
                input,
                source.source_name(),
                available.join(", "),
                source.referral()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 4] = ["part a", "part b", "costs", "florida specific"];

    #[test]
    fn test_exact_match_wins() {
        let m = match_key(&KEYS, "  COSTS ").unwrap();
        assert_eq!(m.key, "costs");
        assert_eq!(m.kind, MatchKind::Exact);
    }

    #[test]
    fn test_input_contains_key() {
        let m = match_key(&KEYS, "what are the costs of part b").unwrap();
        // "part b" precedes "costs" in key order
        assert_eq!(m.key, "part b");
        assert_eq!(m.kind, MatchKind::Substring);
    }

    #[test]
    fn test_key_contains_input() {
        let m = match_key(&KEYS, "florida").unwrap();
        assert_eq!(m.key, "florida specific");

        // first key in order wins when several contain the input
        assert_eq!(match_key(&KEYS, "part").unwrap().key, "part a");
    }

    #[test]
    fn test_empty_input_never_matches() {
        assert!(match_key(&KEYS, "").is_none());
        assert!(match_key(&KEYS, "   ").is_none());
        assert!(match_exact(&KEYS, " ").is_none());
    }

    #[test]
    fn test_no_match() {
        assert!(match_key(&KEYS, "dental").is_none());
    }

    #[test]
    fn test_exact_only() {
        assert_eq!(match_exact(&KEYS, "Part A"), Some("part a"));
        assert_eq!(match_exact(&KEYS, "part"), None);
    }
}
