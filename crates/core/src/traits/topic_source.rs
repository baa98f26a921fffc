//! Topic data source
//!
//! Abstraction over the key → text data a lookup resolves against. The
//! bundled stores are static, but anything that can list its keys in a fixed
//! priority order and fetch text by key can sit behind the same matching and
//! formatting rules.

/// Read-only keyed text source
pub trait TopicSource: Send + Sync {
    /// Human-readable name of the source (e.g. "Medicare")
    fn source_name(&self) -> &str;

    /// Where to send the user when nothing matches (site and phone)
    fn referral(&self) -> &str;

    /// Keys in match-priority order; substring matching tests them in this order
    fn keys(&self) -> Vec<&str>;

    /// Text for an exact (already normalized) key
    fn get(&self, key: &str) -> Option<&str>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
