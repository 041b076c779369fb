//! Cache keys for host-side output caching.

use promptflow_domain::{CacheKey, PromptRequest};

/// Cache key for a prompt composition.
///
/// Returns [`CacheKey::AlwaysStale`] when any field uses the random policy
/// or the payload cannot be parsed, otherwise a hash of all inputs.
#[must_use]
pub fn compose_cache_key(
    payload: &str,
    seed: u64,
    trigger_words: &str,
    input_prompt: &str,
) -> CacheKey {
    match PromptRequest::from_json(payload) {
        Ok(request) if !request.has_random_field() => {
            CacheKey::content_of(&(payload, seed, trigger_words, input_prompt))
        }
        _ => CacheKey::AlwaysStale,
    }
}

/// Cache key for a variation preview.
#[must_use]
pub fn preview_cache_key(prompt: &str, seed: u64) -> CacheKey {
    CacheKey::content_of(&(prompt, seed))
}
