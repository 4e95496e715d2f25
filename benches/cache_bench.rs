// ABOUTME: Criterion benchmarks for the TTL memoization cache
// ABOUTME: Measures key derivation, memoized hits and misses, and fetcher invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for cache operations.
//!
//! A hit must stay far cheaper than any upstream round trip; misses here
//! use an immediate fetch so they measure only the bookkeeping overhead.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nalssi_core::errors::AppResult;
use nalssi_core::models::WeatherSnapshot;
use nalssi_mcp_server::cache::{CacheConfig, CacheKey, FetcherKind, Memoizer};
use serde_json::json;
use tokio::runtime::Runtime;

/// Cache configuration without background cleanup
fn bench_config() -> CacheConfig {
    CacheConfig {
        max_entries: 10_000,
        enable_background_cleanup: false,
        ..Default::default()
    }
}

async fn fetch_weather() -> AppResult<WeatherSnapshot> {
    Ok(WeatherSnapshot::new(21.0, 45.0, 2.0, 10.0))
}

fn bench_cache_key(c: &mut Criterion) {
    let args = json!({"source": "fixture", "location": "서울특별시 강남구"});
    c.bench_function("cache_key", |b| {
        b.iter(|| CacheKey::new(FetcherKind::Weather, black_box(&args)).unwrap());
    });
}

fn bench_memoize(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("memoize");
    let memo = rt.block_on(Memoizer::in_memory(bench_config())).unwrap();

    rt.block_on(async {
        for i in 0..1000 {
            let args = json!({"location": format!("loc-{i}")});
            let _ = memo.memoize(FetcherKind::Weather, &args, fetch_weather).await;
        }
    });

    group.bench_function("hit", |b| {
        let mut index = 0_usize;
        b.iter(|| {
            let args = json!({"location": format!("loc-{}", index % 1000)});
            index = index.wrapping_add(1);
            rt.block_on(memo.memoize(FetcherKind::Weather, black_box(&args), fetch_weather))
                .unwrap()
        });
    });

    // Forecast keys are never populated, so every call misses and stores
    group.bench_function("miss", |b| {
        let mut index = 0_usize;
        b.iter(|| {
            let args = json!({"location": format!("miss-{index}")});
            index = index.wrapping_add(1);
            rt.block_on(memo.memoize(FetcherKind::Forecast, black_box(&args), fetch_weather))
                .unwrap()
        });
    });

    group.finish();
}

fn bench_invalidate_fetcher(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("invalidate_fetcher_100", |b| {
        b.iter_batched(
            || {
                rt.block_on(async {
                    let memo = Memoizer::in_memory(bench_config()).await.unwrap();
                    for i in 0..100 {
                        let args = json!({"location": format!("loc-{i}")});
                        let _ = memo.memoize(FetcherKind::AirQuality, &args, fetch_weather).await;
                    }
                    memo
                })
            },
            |memo| rt.block_on(memo.invalidate_fetcher(FetcherKind::AirQuality)).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_cache_key, bench_memoize, bench_invalidate_fetcher);
criterion_main!(benches);
