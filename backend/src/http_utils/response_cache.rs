//! In-process cache for listing responses, keyed by a digest of the request.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedResponse {
    body: String,
    inserted_at: Instant,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CachedResponse>,
}

impl ResponseCache {
    pub fn get(&self, key: &str, ttl: Duration, now: Instant) -> Option<String> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.inserted_at) > ttl {
            return None;
        }
        Some(entry.body.clone())
    }

    pub fn insert(&mut self, key: String, body: String, now: Instant) {
        self.entries.insert(key, CachedResponse { body, inserted_at: now });
    }

    /// Drops entries older than `ttl`.
    pub fn evict_expired(&mut self, ttl: Duration, now: Instant) {
        self.entries.retain(|_, e| now.duration_since(e.inserted_at) <= ttl);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn request_cache_key(url: &str, params: &[(String, String)]) -> String {
    let mut canonical = url.to_string();
    for (k, v) in params {
        canonical.push('\n');
        canonical.push_str(k);
        canonical.push('=');
        canonical.push_str(v);
    }
    sha256::digest(canonical)
}

pub fn shared_response_cache() -> &'static Mutex<ResponseCache> {
    static CACHE: OnceLock<Mutex<ResponseCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(ResponseCache::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_after_ttl() {
        let mut cache = ResponseCache::default();
        let t0 = Instant::now();
        cache.insert("k".to_string(), "{}".to_string(), t0);
        let ttl = Duration::from_secs(60);
        assert_eq!(cache.get("k", ttl, t0 + Duration::from_secs(10)), Some("{}".to_string()));
        assert_eq!(cache.get("k", ttl, t0 + Duration::from_secs(61)), None);
        cache.evict_expired(ttl, t0 + Duration::from_secs(61));
        assert!(cache.is_empty());
    }

    #[test]
    fn key_depends_on_params() {
        let a = request_cache_key("http://x/jobs", &[("workType".to_string(), "Full time".to_string())]);
        let b = request_cache_key("http://x/jobs", &[("workType".to_string(), "Part time".to_string())]);
        assert_ne!(a, b);
        assert_eq!(a, request_cache_key("http://x/jobs", &[("workType".to_string(), "Full time".to_string())]));
    }
}
