// ABOUTME: Tests for environment-driven configuration of the server, cache, and scoring weights
// ABOUTME: Runs serially because the process environment is shared between tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use nalssi_intelligence::IntelligenceConfig;
use nalssi_mcp_server::config::ServerConfig;
use serial_test::serial;

const VARS: [&str; 8] = [
    "NALSSI_SNAPSHOT_FILE",
    "NALSSI_DEFAULT_LOCATION",
    "CACHE_MAX_ENTRIES",
    "CACHE_CLEANUP_INTERVAL_SECS",
    "CACHE_TTL_WEATHER_SECS",
    "CACHE_TTL_AIR_QUALITY_SECS",
    "NALSSI_COMMUTE_WEIGHT_CAR",
    "NALSSI_COMPARISON_MARGIN",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env();

    assert_eq!(config.default_location, "서울");
    assert!(config.snapshot_file.is_none());
    assert_eq!(config.cache.max_entries, 10_000);
    assert_eq!(config.cache.cleanup_interval, Duration::from_secs(300));
    assert_eq!(config.cache.ttl.weather_secs, 300);
    assert_eq!(config.cache.ttl.air_quality_secs, 600);
    assert_eq!(config.cache.ttl.life_index_secs, 3_600);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("NALSSI_SNAPSHOT_FILE", "/tmp/snapshots.json");
    env::set_var("NALSSI_DEFAULT_LOCATION", "부산");
    env::set_var("CACHE_MAX_ENTRIES", "64");
    env::set_var("CACHE_TTL_WEATHER_SECS", "30");

    let config = ServerConfig::from_env();
    clear_env();

    assert_eq!(config.snapshot_file, Some(PathBuf::from("/tmp/snapshots.json")));
    assert_eq!(config.default_location, "부산");
    assert_eq!(config.cache.max_entries, 64);
    assert_eq!(config.cache.ttl.weather_secs, 30);
    assert_eq!(config.cache.ttl.forecast_secs, 300);
}

#[test]
#[serial]
fn test_unparsable_cache_values_fall_back() {
    clear_env();
    env::set_var("CACHE_MAX_ENTRIES", "lots");
    env::set_var("NALSSI_DEFAULT_LOCATION", "   ");

    let config = ServerConfig::from_env();
    clear_env();

    assert_eq!(config.cache.max_entries, 10_000);
    assert_eq!(config.default_location, "서울");
}

#[test]
#[serial]
fn test_scoring_weights_are_validated() {
    clear_env();
    env::set_var("NALSSI_COMPARISON_MARGIN", "15");
    let config = IntelligenceConfig::from_env().unwrap();
    assert_eq!(config.comparison_margin, 15);

    env::set_var("NALSSI_COMMUTE_WEIGHT_CAR", "0.9");
    let unbalanced = IntelligenceConfig::from_env();
    clear_env();
    assert!(unbalanced.is_err());
}
