// ABOUTME: Cache-related constants for TTL, capacity, and cleanup intervals
// ABOUTME: One TTL per upstream fetcher kind, overridable from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum cache entries for in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;

/// Current weather observation TTL (5 minutes)
pub const TTL_WEATHER_SECS: u64 = 300;

/// Hourly forecast TTL (5 minutes)
pub const TTL_FORECAST_SECS: u64 = 300;

/// Air quality measurement TTL (10 minutes), stations publish hourly
pub const TTL_AIR_QUALITY_SECS: u64 = 600;

/// Derived life index TTL (1 hour)
pub const TTL_LIFE_INDEX_SECS: u64 = 3_600;

/// Cache key prefix for memoized fetchers
pub const FETCHER_KEY_PREFIX: &str = "fetcher";
