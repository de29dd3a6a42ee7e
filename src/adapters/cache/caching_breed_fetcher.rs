//! Memoizing wrapper for BreedFetcher.
//!
//! Caches successful `get_sub_breeds` lookups by normalized breed name to
//! lessen the load on the underlying data source, and records how many times
//! the delegate was actually invoked. Failed lookups are never cached: a
//! later call for the same name goes back to the delegate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::normalize_breed_name;
use crate::domain::ports::BreedFetcher;

/// Caching breed fetcher decorator.
///
/// Wraps any [`BreedFetcher`] implementation with an unbounded in-memory
/// map from normalized breed name to sub-breed list. Entries are written
/// once, on the first successful lookup, and live as long as the decorator;
/// there is no eviction and no expiry. The decorator implements the port
/// itself, so it can stand anywhere a fetcher is expected.
pub struct CachingBreedFetcher<F: BreedFetcher> {
    inner: Arc<F>,
    /// Cache keyed by normalized breed name -> sub-breed list.
    cache: RwLock<HashMap<String, Vec<String>>>,
    /// Delegate invocations actually attempted (cache misses only).
    calls_made: AtomicU64,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Create a new caching fetcher around the given delegate.
    ///
    /// The cache starts empty and the call counter at zero; separate
    /// instances wrapping the same delegate share nothing.
    pub fn new(inner: Arc<F>) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of calls made to the wrapped fetcher so far.
    ///
    /// Counts every delegate invocation attempt, successful or not. Cache
    /// hits and rejected (invalid) names do not count.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl<F: BreedFetcher + 'static> BreedFetcher for CachingBreedFetcher<F> {
    async fn get_sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        // Reject before touching the cache or the counter.
        let Some(key) = normalize_breed_name(breed) else {
            return Err(BreedError::invalid_name());
        };

        if let Some(hit) = self.cache.read().await.get(&key) {
            return Ok(hit.clone());
        }

        // Cache miss: the attempt counts even if the delegate fails.
        self.calls_made.fetch_add(1, Ordering::Relaxed);
        let sub_breeds = self.inner.get_sub_breeds(&key).await?;

        // The lock is not held across the delegate call, so a concurrent
        // caller may have populated the key meanwhile; the first write wins
        // and this caller still returns its own freshly fetched list.
        self.cache
            .write()
            .await
            .entry(key)
            .or_insert_with(|| sub_breeds.clone());

        Ok(sub_breeds)
    }
}
