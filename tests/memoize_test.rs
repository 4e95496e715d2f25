// ABOUTME: Integration tests for TTL memoization of upstream fetches
// ABOUTME: Covers hits within the TTL, expiry, per-argument keys, uncached failures, undecodable entries, and invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use nalssi_core::errors::AppError;
use nalssi_core::models::WeatherSnapshot;
use nalssi_mcp_server::cache::{CacheConfig, CacheTtlConfig, FetcherKind, Memoizer};
use serde_json::json;
use tokio::time;

async fn memoizer(ttl: CacheTtlConfig) -> Result<Memoizer> {
    let config = CacheConfig {
        max_entries: 100,
        enable_background_cleanup: false,
        ttl,
        ..Default::default()
    };
    Ok(Memoizer::in_memory(config).await?)
}

async fn counted_fetch(calls: &Arc<AtomicUsize>, value: f64) -> Result<f64, AppError> {
    calls.fetch_add(1, Ordering::SeqCst);
    Ok(value)
}

async fn failing_fetch(calls: &Arc<AtomicUsize>) -> Result<f64, AppError> {
    calls.fetch_add(1, Ordering::SeqCst);
    Err(AppError::external_service("upstream timeout"))
}

#[tokio::test]
async fn test_second_call_within_ttl_is_served_from_cache() -> Result<()> {
    let memo = memoizer(CacheTtlConfig::default()).await?;
    let calls = Arc::new(AtomicUsize::new(0));
    let args = json!({"location": "서울"});

    let first = memo
        .memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 21.5))
        .await?;
    let second = memo
        .memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 99.0))
        .await?;

    assert_eq!(first, 21.5);
    assert_eq!(second, 21.5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_expired_entry_is_fetched_again() -> Result<()> {
    let ttl = CacheTtlConfig {
        weather_secs: 1,
        ..CacheTtlConfig::default()
    };
    let memo = memoizer(ttl).await?;
    let calls = Arc::new(AtomicUsize::new(0));
    let args = json!({"location": "부산"});

    memo.memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 18.0))
        .await?;
    time::sleep(Duration::from_millis(1100)).await;
    let refreshed = memo
        .memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 19.0))
        .await?;

    assert_eq!(refreshed, 19.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_distinct_arguments_and_fetchers_do_not_share_entries() -> Result<()> {
    let memo = memoizer(CacheTtlConfig::default()).await?;
    let calls = Arc::new(AtomicUsize::new(0));

    memo.memoize(FetcherKind::Weather, &json!({"location": "서울"}), || {
        counted_fetch(&calls, 1.0)
    })
    .await?;
    memo.memoize(FetcherKind::Weather, &json!({"location": "제주"}), || {
        counted_fetch(&calls, 2.0)
    })
    .await?;
    let air = memo
        .memoize(FetcherKind::AirQuality, &json!({"location": "서울"}), || {
            counted_fetch(&calls, 3.0)
        })
        .await?;

    assert_eq!(air, 3.0);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn test_failures_are_not_cached() -> Result<()> {
    let memo = memoizer(CacheTtlConfig::default()).await?;
    let calls = Arc::new(AtomicUsize::new(0));
    let args = json!({"location": "서울"});

    let failed: Result<f64, AppError> = memo
        .memoize(FetcherKind::Forecast, &args, || failing_fetch(&calls))
        .await;
    assert!(failed.is_err());

    let recovered = memo
        .memoize(FetcherKind::Forecast, &args, || counted_fetch(&calls, 7.0))
        .await?;
    assert_eq!(recovered, 7.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_invalidate_fetcher_only_drops_that_fetcher() -> Result<()> {
    let memo = memoizer(CacheTtlConfig::default()).await?;
    let calls = Arc::new(AtomicUsize::new(0));
    let args = json!({"location": "서울"});

    memo.memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 1.0))
        .await?;
    memo.memoize(FetcherKind::LifeIndex, &args, || counted_fetch(&calls, 2.0))
        .await?;

    let removed = memo.invalidate_fetcher(FetcherKind::Weather).await?;
    assert_eq!(removed, 1);

    memo.memoize(FetcherKind::Weather, &args, || counted_fetch(&calls, 1.0))
        .await?;
    memo.memoize(FetcherKind::LifeIndex, &args, || counted_fetch(&calls, 2.0))
        .await?;
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn test_non_finite_reading_is_refetched_instead_of_failing() -> Result<()> {
    let memo = memoizer(CacheTtlConfig::default()).await?;
    let calls = Arc::new(AtomicUsize::new(0));
    let args = json!({"location": "서울"});
    let fetch = || {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, AppError>(WeatherSnapshot::new(f64::INFINITY, 50.0, 2.0, 0.0))
        }
    };

    let first = memo.memoize(FetcherKind::Weather, &args, fetch).await?;
    let second = memo.memoize(FetcherKind::Weather, &args, fetch).await?;

    assert!(first.temperature.is_infinite());
    assert!(second.temperature.is_infinite());
    assert_eq!(second.humidity, 50.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}
