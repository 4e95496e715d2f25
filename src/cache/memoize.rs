// ABOUTME: TTL memoization wrapper for async fetch functions keyed by fetcher and canonical arguments
// ABOUTME: Hits return the stored value without invoking the fetch; failures are never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::memory::InMemoryCache;
use super::{CacheConfig, CacheKey, CacheProvider, CacheTtlConfig, FetcherKind};
use nalssi_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, warn};

/// Memoizes async fetches in an injected cache
///
/// Concurrent misses on the same key are not deduplicated: each caller
/// runs the fetch and the last write wins.
#[derive(Clone)]
pub struct Memoizer<C: CacheProvider = InMemoryCache> {
    cache: C,
    ttl: CacheTtlConfig,
}

impl Memoizer<InMemoryCache> {
    /// Build a memoizer over a fresh in-memory cache
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be created
    pub async fn in_memory(config: CacheConfig) -> AppResult<Self> {
        let ttl = config.ttl;
        let cache = InMemoryCache::new(config).await?;
        Ok(Self::new(cache, ttl))
    }
}

impl<C: CacheProvider> Memoizer<C> {
    /// Wrap an existing cache
    #[must_use]
    pub const fn new(cache: C, ttl: CacheTtlConfig) -> Self {
        Self { cache, ttl }
    }

    /// Return the cached value for `(kind, args)` or run `fetch` and store its result
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged (nothing is stored), or a
    /// serialization error if the arguments cannot be keyed. A stored
    /// entry that no longer decodes is dropped and fetched again.
    pub async fn memoize<A, T, F, Fut>(&self, kind: FetcherKind, args: &A, fetch: F) -> AppResult<T>
    where
        A: Serialize + ?Sized + Sync,
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<T>> + Send,
    {
        let key = CacheKey::new(kind, args)?;

        match self.cache.get::<T>(&key).await {
            Ok(Some(hit)) => {
                debug!(fetcher = kind.name(), key = %key, "Cache hit");
                return Ok(hit);
            }
            Ok(None) => debug!(fetcher = kind.name(), key = %key, "Cache miss"),
            Err(e) => {
                // Non-finite floats are stored as null and cannot be read back
                warn!(
                    fetcher = kind.name(),
                    key = %key,
                    error = %e,
                    "Dropping undecodable cache entry"
                );
                if let Err(e) = self.cache.invalidate(&key).await {
                    warn!(fetcher = kind.name(), error = %e, "Failed to drop cache entry");
                }
            }
        }

        let value = fetch().await?;

        if let Err(e) = self.cache.set(&key, &value, self.ttl.ttl_for(kind)).await {
            warn!(fetcher = kind.name(), error = %e, "Failed to store fetched value");
        }
        Ok(value)
    }

    /// Drop every entry stored for one fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the pattern
    pub async fn invalidate_fetcher(&self, kind: FetcherKind) -> AppResult<u64> {
        let removed = self.cache.invalidate_pattern(&kind.pattern()).await?;
        debug!(fetcher = kind.name(), removed, "Invalidated fetcher entries");
        Ok(removed)
    }

    /// TTL configuration in use
    #[must_use]
    pub const fn ttl_config(&self) -> &CacheTtlConfig {
        &self.ttl
    }

    /// Underlying cache backend
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}
