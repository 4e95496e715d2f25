// ABOUTME: Criterion benchmarks for the lifestyle index scoring engine
// ABOUTME: Measures single scorers, the 18-activity aggregate, composites, and best-time ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for scoring.
//!
//! Scorers are pure functions over one observation, so these numbers bound
//! the per-call cost of every tool once the source has answered.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, Sky, WeatherSnapshot};
use nalssi_intelligence::composite::{aggregate, best_time, commute};
use nalssi_intelligence::config::IntelligenceConfig;
use nalssi_intelligence::outfit::comprehensive;
use nalssi_intelligence::{Activity, Conditions};

/// Weather profiles that exercise different scorer branches
#[derive(Debug, Clone, Copy)]
enum Profile {
    Mild,
    Stormy,
    Hazy,
}

impl Profile {
    const fn name(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Stormy => "stormy",
            Self::Hazy => "hazy",
        }
    }

    fn conditions(self) -> Conditions {
        let day = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let (weather, air) = match self {
            Self::Mild => (
                WeatherSnapshot::new(21.0, 45.0, 2.0, 10.0).with_uv_index(5),
                AirQualitySnapshot::from_values(25.0, 12.0),
            ),
            Self::Stormy => (
                WeatherSnapshot::new(17.0, 90.0, 12.0, 90.0).with_sky(Sky::Thunderstorm),
                AirQualitySnapshot::from_values(15.0, 8.0),
            ),
            Self::Hazy => (
                WeatherSnapshot::new(26.0, 60.0, 1.0, 0.0).with_uv_index(8),
                AirQualitySnapshot::from_values(140.0, 82.0),
            ),
        };
        Conditions::new(weather, air, day)
    }
}

fn bench_single_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorer");
    let conditions = Profile::Mild.conditions();

    for activity in [Activity::Laundry, Activity::Hiking, Activity::Camping, Activity::Fishing] {
        group.bench_with_input(
            BenchmarkId::from_parameter(activity.label()),
            &activity,
            |b, activity| b.iter(|| activity.score(black_box(&conditions))),
        );
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for profile in [Profile::Mild, Profile::Stormy, Profile::Hazy] {
        let conditions = profile.conditions();
        group.bench_with_input(
            BenchmarkId::from_parameter(profile.name()),
            &conditions,
            |b, conditions| b.iter(|| aggregate(black_box(conditions))),
        );
    }

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    let config = IntelligenceConfig::default();
    let conditions = Profile::Mild.conditions();

    group.bench_function("commute", |b| {
        b.iter(|| commute(black_box(&conditions), &config.commute));
    });
    group.bench_function("should_i_go_out", |b| {
        b.iter(|| comprehensive(black_box(&conditions), &config.outing));
    });

    group.finish();
}

fn bench_best_time(c: &mut Criterion) {
    let forecasts: Vec<HourlyForecast> = (0..24)
        .map(|hour| {
            let temp = 12.0 + f64::from(hour % 12);
            let rain = f64::from((hour * 7) % 100);
            HourlyForecast::new(hour, temp, rain, Sky::PartlyCloudy)
        })
        .collect();

    c.bench_function("best_time_24h", |b| {
        b.iter(|| best_time(black_box(&forecasts), "빨래"));
    });
}

criterion_group!(
    benches,
    bench_single_scorers,
    bench_aggregate,
    bench_composites,
    bench_best_time
);
criterion_main!(benches);
