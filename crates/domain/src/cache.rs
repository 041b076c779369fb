//! Cache keys for resolved prompts
//!
//! Hosts cache node outputs keyed by their inputs. Output produced under the
//! random policy must never be served from cache.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Cache identity of a resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Output may differ on every run; never reuse it.
    AlwaysStale,
    /// Hash of everything the output depends on.
    Content(u64),
}

impl CacheKey {
    /// Hashes a value into a content key.
    #[must_use]
    pub fn content_of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Self::Content(hasher.finish())
    }

    /// Whether output cached under `self` can be reused for `other`.
    /// A stale key never matches, not even itself.
    #[must_use]
    pub fn reusable_for(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Content(a), Self::Content(b)) => a == b,
            _ => false,
        }
    }
}
