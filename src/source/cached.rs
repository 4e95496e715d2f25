// ABOUTME: Memoizing weather source wrapping another source with per-fetcher TTLs
// ABOUTME: Cache keys combine the inner source name and the location; errors pass through uncached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeatherSource;
use crate::cache::memory::InMemoryCache;
use crate::cache::{CacheProvider, FetcherKind, Memoizer};
use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, LifeIndexReadings, WeatherSnapshot};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct FetchArgs<'a> {
    source: &'static str,
    location: &'a str,
}

/// Weather source that memoizes every fetch of an inner source
pub struct CachedSource<C: CacheProvider = InMemoryCache> {
    inner: Arc<dyn WeatherSource>,
    memoizer: Memoizer<C>,
}

impl<C: CacheProvider> CachedSource<C> {
    /// Put a memoizer in front of a source
    #[must_use]
    pub fn new(inner: Arc<dyn WeatherSource>, memoizer: Memoizer<C>) -> Self {
        Self { inner, memoizer }
    }

    /// The memoizer, for invalidation
    #[must_use]
    pub const fn memoizer(&self) -> &Memoizer<C> {
        &self.memoizer
    }

    fn args<'a>(&self, location: &'a str) -> FetchArgs<'a> {
        FetchArgs {
            source: self.inner.name(),
            location: location.trim(),
        }
    }
}

#[async_trait]
impl<C: CacheProvider + 'static> WeatherSource for CachedSource<C> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn current_weather(&self, location: &str) -> AppResult<WeatherSnapshot> {
        self.memoizer
            .memoize(FetcherKind::Weather, &self.args(location), || {
                self.inner.current_weather(location)
            })
            .await
    }

    async fn air_quality(&self, location: &str) -> AppResult<AirQualitySnapshot> {
        self.memoizer
            .memoize(FetcherKind::AirQuality, &self.args(location), || {
                self.inner.air_quality(location)
            })
            .await
    }

    async fn hourly_forecast(&self, location: &str) -> AppResult<Vec<HourlyForecast>> {
        self.memoizer
            .memoize(FetcherKind::Forecast, &self.args(location), || {
                self.inner.hourly_forecast(location)
            })
            .await
    }

    async fn life_index(&self, location: &str) -> AppResult<LifeIndexReadings> {
        self.memoizer
            .memoize(FetcherKind::LifeIndex, &self.args(location), || {
                self.inner.life_index(location)
            })
            .await
    }
}
