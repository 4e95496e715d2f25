// ABOUTME: Environment-based server configuration for the cache, data sources, and default location
// ABOUTME: Unset or unparsable variables fall back to compiled defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::{CacheConfig, CacheTtlConfig};
use nalssi_core::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, TTL_AIR_QUALITY_SECS,
    TTL_FORECAST_SECS, TTL_LIFE_INDEX_SECS, TTL_WEATHER_SECS,
};
use nalssi_core::constants::defaults;
use nalssi_intelligence::IntelligenceConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Cache sizing and per-fetcher TTLs
    pub cache: CacheConfig,
    /// JSON fixture of per-location snapshots; `None` serves the neutral default
    pub snapshot_file: Option<PathBuf>,
    /// Location used when a tool call omits one
    pub default_location: String,
    /// Scoring weights and margins
    pub intelligence: IntelligenceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            snapshot_file: None,
            default_location: defaults::LOCATION.to_owned(),
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache: CacheConfig::from_env(),
            snapshot_file: env::var("NALSSI_SNAPSHOT_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            default_location: env::var("NALSSI_DEFAULT_LOCATION")
                .ok()
                .filter(|location| !location.trim().is_empty())
                .unwrap_or_else(|| defaults::LOCATION.to_owned()),
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl CacheConfig {
    /// Load cache configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_entries: env_or("CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES),
            cleanup_interval: Duration::from_secs(env_or(
                "CACHE_CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            )),
            enable_background_cleanup: true,
            ttl: CacheTtlConfig::from_env(),
        }
    }
}

impl CacheTtlConfig {
    /// Load cache TTL configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            weather_secs: env_or("CACHE_TTL_WEATHER_SECS", TTL_WEATHER_SECS),
            forecast_secs: env_or("CACHE_TTL_FORECAST_SECS", TTL_FORECAST_SECS),
            air_quality_secs: env_or("CACHE_TTL_AIR_QUALITY_SECS", TTL_AIR_QUALITY_SECS),
            life_index_secs: env_or("CACHE_TTL_LIFE_INDEX_SECS", TTL_LIFE_INDEX_SECS),
        }
    }
}
