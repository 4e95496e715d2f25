// ABOUTME: Cache abstraction for memoized upstream fetches keyed by fetcher name and arguments
// ABOUTME: Pluggable backend trait with an LRU-bounded in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory cache implementation
pub mod memory;
/// TTL memoization of async fetches
pub mod memoize;

pub use memoize::Memoizer;

use nalssi_core::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, FETCHER_KEY_PREFIX,
    TTL_AIR_QUALITY_SECS, TTL_FORECAST_SECS, TTL_LIFE_INDEX_SECS, TTL_WEATHER_SECS,
};
use nalssi_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Cache provider trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use nalssi_mcp_server::cache::{CacheConfig, CacheKey, CacheProvider, FetcherKind};
/// use nalssi_mcp_server::cache::memory::InMemoryCache;
/// use serde_json::json;
/// use std::time::Duration;
/// # async fn example() -> Result<(), nalssi_core::errors::AppError> {
///
/// let config = CacheConfig {
///     enable_background_cleanup: false,
///     ..Default::default()
/// };
/// let cache = InMemoryCache::new(config).await?;
///
/// let key = CacheKey::new(FetcherKind::Weather, &json!({"location": "서울"}))?;
/// cache.set(&key, &21.5_f64, Duration::from_secs(300)).await?;
///
/// let cached: Option<f64> = cache.get(&key).await?;
/// assert_eq!(cached, Some(21.5));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve an unexpired value
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Remove all cache entries matching a glob pattern (e.g., `fetcher:weather:*`)
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid
    async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64>;

    /// Check if an unexpired entry exists
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    async fn exists(&self, key: &CacheKey) -> AppResult<bool>;

    /// Remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>>;

    /// Verify cache backend is healthy
    ///
    /// # Errors
    ///
    /// Returns an error if health check fails
    async fn health_check(&self) -> AppResult<()>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// Cleanup interval for expired entries
    pub cleanup_interval: Duration,
    /// Enable background cleanup task (tests usually disable it)
    pub enable_background_cleanup: bool,
    /// TTL per fetcher kind
    pub ttl: CacheTtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
            ttl: CacheTtlConfig::default(),
        }
    }
}

/// Cache TTL configuration for each fetcher kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtlConfig {
    /// Current weather TTL in seconds (default: 5 minutes)
    pub weather_secs: u64,
    /// Hourly forecast TTL in seconds (default: 5 minutes)
    pub forecast_secs: u64,
    /// Air quality TTL in seconds (default: 10 minutes)
    pub air_quality_secs: u64,
    /// Life index TTL in seconds (default: 1 hour)
    pub life_index_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            weather_secs: TTL_WEATHER_SECS,
            forecast_secs: TTL_FORECAST_SECS,
            air_quality_secs: TTL_AIR_QUALITY_SECS,
            life_index_secs: TTL_LIFE_INDEX_SECS,
        }
    }
}

impl CacheTtlConfig {
    /// TTL for a fetcher kind
    #[must_use]
    pub const fn ttl_for(&self, kind: FetcherKind) -> Duration {
        Duration::from_secs(match kind {
            FetcherKind::Weather => self.weather_secs,
            FetcherKind::Forecast => self.forecast_secs,
            FetcherKind::AirQuality => self.air_quality_secs,
            FetcherKind::LifeIndex => self.life_index_secs,
        })
    }
}

/// Upstream fetchers that are memoized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetcherKind {
    /// Current weather observation
    Weather,
    /// Hourly forecast
    Forecast,
    /// PM10 and PM2.5 readings
    AirQuality,
    /// UV and pollen readings
    LifeIndex,
}

impl FetcherKind {
    /// Name used in cache keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Forecast => "forecast",
            Self::AirQuality => "air_quality",
            Self::LifeIndex => "life_index",
        }
    }

    /// Default TTL for this fetcher
    #[must_use]
    pub fn recommended_ttl(self) -> Duration {
        CacheTtlConfig::default().ttl_for(self)
    }

    /// Glob pattern matching every entry of this fetcher
    #[must_use]
    pub fn pattern(self) -> String {
        format!("{FETCHER_KEY_PREFIX}:{}:*", self.name())
    }
}

impl fmt::Display for FetcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured cache key: fetcher identity plus canonical JSON of the call arguments
///
/// Arguments are serialized through `serde_json::Value`, whose object maps are
/// key-sorted, so two argument values that serialize to the same JSON share a
/// key regardless of field order or object identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Fetcher identity
    pub fetcher: FetcherKind,
    /// Canonical JSON of the arguments
    pub args: String,
}

impl CacheKey {
    /// Derive a key from a fetcher and its arguments
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the arguments cannot be represented as JSON
    pub fn new<A: Serialize + ?Sized>(fetcher: FetcherKind, args: &A) -> AppResult<Self> {
        let canonical = serde_json::to_value(args)?;
        Ok(Self {
            fetcher,
            args: canonical.to_string(),
        })
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FETCHER_KEY_PREFIX}:{}:{}", self.fetcher, self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_is_independent_of_field_order() {
        let a = CacheKey::new(FetcherKind::Weather, &json!({"location": "서울", "day": 0})).unwrap();
        let b = CacheKey::new(FetcherKind::Weather, &json!({"day": 0, "location": "서울"})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), r#"fetcher:weather:{"day":0,"location":"서울"}"#);
    }

    #[test]
    fn different_fetchers_never_share_keys() {
        let weather = CacheKey::new(FetcherKind::Weather, "서울").unwrap();
        let air = CacheKey::new(FetcherKind::AirQuality, "서울").unwrap();
        assert_ne!(weather.to_string(), air.to_string());
    }

    #[test]
    fn ttl_per_fetcher() {
        let ttl = CacheTtlConfig::default();
        assert_eq!(ttl.ttl_for(FetcherKind::Weather), Duration::from_secs(300));
        assert_eq!(ttl.ttl_for(FetcherKind::AirQuality), Duration::from_secs(600));
        assert_eq!(ttl.ttl_for(FetcherKind::LifeIndex), Duration::from_secs(3600));
    }
}
