// ABOUTME: Source that answers every location with the neutral default snapshot
// ABOUTME: Used when no snapshot file is configured and as the fallback in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeatherSource;
use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, LifeIndexReadings, WeatherSnapshot};

/// Neutral default observations for any location
///
/// 20°C, 50% humidity, 2 m/s wind, no rain, clear sky, PM2.5 25 and PM10 40.
/// The forecast is empty, so planners report that no hourly data exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

#[async_trait]
impl WeatherSource for DefaultSource {
    fn name(&self) -> &'static str {
        "default"
    }

    async fn current_weather(&self, _location: &str) -> AppResult<WeatherSnapshot> {
        Ok(WeatherSnapshot::default())
    }

    async fn air_quality(&self, _location: &str) -> AppResult<AirQualitySnapshot> {
        Ok(AirQualitySnapshot::default())
    }

    async fn hourly_forecast(&self, _location: &str) -> AppResult<Vec<HourlyForecast>> {
        Ok(Vec::new())
    }

    async fn life_index(&self, _location: &str) -> AppResult<LifeIndexReadings> {
        Ok(LifeIndexReadings::default())
    }
}
