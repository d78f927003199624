use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// Fingerprint of one (correct, submitted) pair.
///
/// Each input is length-prefixed before hashing, so no choice of content can
/// make two different pairs hash the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(correct_code: &str, submitted_code: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((correct_code.len() as u64).to_le_bytes());
        hasher.update(correct_code);
        hasher.update((submitted_code.len() as u64).to_le_bytes());
        hasher.update(submitted_code);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-lifetime memo of extracted feedback. Clones share one map.
#[derive(Clone, Default)]
pub struct ComparisonCache {
    entries: Arc<DashMap<CacheKey, String>>,
}

impl ComparisonCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    // Overwrites any earlier value for the key
    pub fn put(&self, key: CacheKey, feedback: String) {
        self.entries.insert(key, feedback);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_deterministic_hex() {
        let a = CacheKey::new("print(1)", "print(2)");
        let b = CacheKey::new("print(1)", "print(2)");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn key_is_order_sensitive() {
        assert_ne!(CacheKey::new("a", "b"), CacheKey::new("b", "a"));
    }

    #[test]
    fn shifted_boundary_does_not_collide() {
        assert_ne!(CacheKey::new("ab", "c"), CacheKey::new("a", "bc"));
        assert_ne!(CacheKey::new("", "abc"), CacheKey::new("abc", ""));
        assert_ne!(
            CacheKey::new("x\u{0}\u{0}", "y"),
            CacheKey::new("x", "\u{0}\u{0}y")
        );
    }

    #[test]
    fn get_before_put_is_absent() {
        let cache = ComparisonCache::new();
        assert!(cache.get(&CacheKey::new("a", "b")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn put_then_get_and_overwrite() {
        let cache = ComparisonCache::new();
        let key = CacheKey::new("a", "b");

        cache.put(key.clone(), "first".to_string());
        assert_eq!(cache.get(&key).as_deref(), Some("first"));

        cache.put(key.clone(), "second".to_string());
        assert_eq!(cache.get(&key).as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let cache = ComparisonCache::new();
        let other = cache.clone();
        other.put(CacheKey::new("a", "b"), "shared".to_string());
        assert_eq!(cache.get(&CacheKey::new("a", "b")).as_deref(), Some("shared"));
    }
}
