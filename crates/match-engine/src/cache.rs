//! Bounded in-memory cache of analysis results.
//!
//! Keys are content hashes over (resume text, JD text, ontology version), so
//! a repeat of the same documents against the same ontology is served
//! without recomputation. Expiry is explicit and caller-controlled; there is
//! no background eviction. At capacity the oldest entry is dropped.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use shared_types::AnalysisResult;

/// Default number of cached results.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: AnalysisResult,
    cached_at: DateTime<Utc>,
}

/// Content-keyed result cache. Insertion order doubles as age order, so
/// eviction always removes the oldest entry.
#[derive(Debug)]
pub struct AnalysisCache {
    entries: IndexMap<String, CacheEntry>,
    capacity: usize,
    ttl: Option<Duration>,
}

impl AnalysisCache {
    /// A cache with the given capacity and optional time-to-live. A `None`
    /// TTL means entries never expire (they can still be evicted).
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Content hash identifying one (resume, JD, ontology-version) triple.
    pub fn content_key(resume_text: &str, jd_text: &str, ontology_version: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(resume_text.as_bytes());
        hasher.update([0u8]);
        hasher.update(jd_text.as_bytes());
        hasher.update([0u8]);
        hasher.update(ontology_version.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Fetch a fresh entry, dropping it first if it has expired by `now`.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<&AnalysisResult> {
        if let Some(ttl) = self.ttl {
            let expired = self
                .entries
                .get(key)
                .is_some_and(|entry| now - entry.cached_at > ttl);
            if expired {
                self.entries.shift_remove(key);
            }
        }
        self.entries.get(key).map(|entry| &entry.result)
    }

    /// Serve from cache or run `compute` exactly once and cache its output.
    /// A failed computation caches nothing.
    pub fn get_or_insert_with<E, F>(
        &mut self,
        key: &str,
        now: DateTime<Utc>,
        compute: F,
    ) -> Result<AnalysisResult, E>
    where
        F: FnOnce() -> Result<AnalysisResult, E>,
    {
        if let Some(result) = self.get(key, now) {
            return Ok(result.clone());
        }

        let result = compute()?;
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                result: result.clone(),
                cached_at: now,
            },
        );
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, None)
    }
}
