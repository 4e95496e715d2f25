// ABOUTME: Weather data source abstraction resolving a location to weather, air, forecast, and life index snapshots
// ABOUTME: Fetch failures degrade to the neutral default snapshot before anything is scored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weather Sources
//!
//! A [`WeatherSource`] answers four questions per location. Scorers never
//! see a fetch error: the `*_or_default` helpers log the failure and hand
//! back the neutral default instead.
//!
//! - [`FixtureSource`]: per-location snapshots loaded from a JSON file
//! - [`DefaultSource`]: always the neutral default
//! - [`CachedSource`]: TTL memoization in front of any other source

/// Memoizing wrapper
pub mod cached;
/// Neutral default source
pub mod default;
/// JSON file backed source
pub mod fixture;

pub use cached::CachedSource;
pub use default::DefaultSource;
pub use fixture::FixtureSource;

use async_trait::async_trait;
use chrono::NaiveDate;
use nalssi_core::errors::{AppError, AppResult, ErrorCode};
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, LifeIndexReadings, WeatherSnapshot};
use nalssi_intelligence::Conditions;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors raised while resolving a location to observations
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source knows nothing about the location
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The location exists but lacks this reading
    #[error("no {reading} reading for {location}")]
    MissingReading {
        /// Location queried
        location: String,
        /// Reading that is absent
        reading: &'static str,
    },

    /// Snapshot file could not be read
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Snapshot file is not valid JSON for the expected shape
    #[error("malformed snapshot file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<SourceError> for AppError {
    fn from(error: SourceError) -> Self {
        let code = match &error {
            SourceError::UnknownLocation(_) => ErrorCode::ResourceNotFound,
            SourceError::MissingReading { .. } => ErrorCode::ResourceUnavailable,
            SourceError::Io { .. } => ErrorCode::StorageError,
            SourceError::Parse(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string())
    }
}

/// Upstream provider of observations for a location
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Source name used in logs and cache keys
    fn name(&self) -> &'static str;

    /// Current weather observation
    async fn current_weather(&self, location: &str) -> AppResult<WeatherSnapshot>;

    /// PM10 and PM2.5 readings
    async fn air_quality(&self, location: &str) -> AppResult<AirQualitySnapshot>;

    /// Hourly forecast starting at the current hour
    async fn hourly_forecast(&self, location: &str) -> AppResult<Vec<HourlyForecast>>;

    /// Published UV and pollen readings
    async fn life_index(&self, location: &str) -> AppResult<LifeIndexReadings>;
}

fn or_default<T: Default>(result: AppResult<T>, source: &str, location: &str, reading: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!(
            source,
            location,
            reading,
            error = %e,
            "Fetch failed, falling back to neutral default"
        );
        T::default()
    })
}

/// Current weather, or the neutral default on failure
pub async fn weather_or_default(source: &dyn WeatherSource, location: &str) -> WeatherSnapshot {
    or_default(source.current_weather(location).await, source.name(), location, "weather")
}

/// Air quality, or the neutral default on failure
pub async fn air_or_default(source: &dyn WeatherSource, location: &str) -> AirQualitySnapshot {
    or_default(source.air_quality(location).await, source.name(), location, "air_quality")
}

/// Hourly forecast, or an empty forecast on failure
pub async fn forecast_or_default(source: &dyn WeatherSource, location: &str) -> Vec<HourlyForecast> {
    or_default(source.hourly_forecast(location).await, source.name(), location, "forecast")
}

/// Life index readings, or no readings on failure
pub async fn life_index_or_default(source: &dyn WeatherSource, location: &str) -> LifeIndexReadings {
    or_default(source.life_index(location).await, source.name(), location, "life_index")
}

/// Weather and air quality for a location bundled for scoring
pub async fn conditions(source: &dyn WeatherSource, location: &str, date: NaiveDate) -> Conditions {
    let (weather, air) = tokio::join!(
        weather_or_default(source, location),
        air_or_default(source, location)
    );
    Conditions::new(weather, air, date)
}
