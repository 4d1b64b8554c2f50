use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Result;
use crate::reference::{LookupOutcome, ReferenceSource};

/// Default expiry for cached lookups.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct CacheEntry {
    stored_at: Instant,
    outcome: LookupOutcome,
}

/// Memoizing wrapper around any reference source.
///
/// Entries are memoized pure-function results with a time-based expiry,
/// never authoritative state; skipping the cache changes nothing but
/// latency. Transport errors are not cached.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: RefCell<HashMap<String, CacheEntry>>,
}

impl<S: ReferenceSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl(inner: S) -> Self {
        Self::new(inner, DEFAULT_CACHE_TTL)
    }

    fn key(name: &str, amount: f64, unit: &str) -> String {
        format!("{}:{}:{}", name.to_lowercase(), amount, unit.to_lowercase())
    }
}

impl<S: ReferenceSource> ReferenceSource for CachedSource<S> {
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome> {
        let key = Self::key(name, amount, unit);

        if let Some(entry) = self.entries.borrow().get(&key) {
            if entry.stored_at.elapsed() < self.ttl {
                debug!(key = %key, "reference cache hit");
                return Ok(entry.outcome.clone());
            }
        }

        let outcome = self.inner.lookup(name, amount, unit)?;
        self.entries.borrow_mut().insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                outcome: outcome.clone(),
            },
        );
        Ok(outcome)
    }
}
