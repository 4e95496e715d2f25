// ABOUTME: File-backed weather source reading per-location snapshots from a JSON document
// ABOUTME: Snapshots are normalized on load so scorers receive clamped values and derived grades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Snapshot file layout:
//!
//! ```json
//! {
//!   "서울": {
//!     "weather": { "temperature": 21.0, "humidity": 40.0, "wind_speed": 2.5, "rain_probability": 10.0, "sky": "맑음" },
//!     "air_quality": { "pm10_value": 35.0, "pm25_value": 18.0 },
//!     "forecast": [ { "hour": 9, "temperature": 18.0, "rain_probability": 0.0, "sky": "맑음" } ],
//!     "life_index": { "uv_index": 6.0 }
//!   }
//! }
//! ```

use super::{SourceError, WeatherSource};
use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, LifeIndexReadings, WeatherSnapshot};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// Observations recorded for one location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationFixture {
    /// Current weather
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    /// Air quality
    #[serde(default)]
    pub air_quality: Option<AirQualitySnapshot>,
    /// Hourly forecast
    #[serde(default)]
    pub forecast: Vec<HourlyForecast>,
    /// Life index readings
    #[serde(default)]
    pub life_index: Option<LifeIndexReadings>,
}

impl LocationFixture {
    fn normalized(mut self) -> Self {
        self.weather = self.weather.map(WeatherSnapshot::normalized);
        self.air_quality = self.air_quality.map(AirQualitySnapshot::normalized);
        self
    }
}

/// Weather source backed by an in-memory map of location fixtures
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    locations: Arc<HashMap<String, LocationFixture>>,
}

impl FixtureSource {
    /// Build from already parsed fixtures
    #[must_use]
    pub fn new(locations: HashMap<String, LocationFixture>) -> Self {
        let locations = locations
            .into_iter()
            .map(|(name, fixture)| (name.trim().to_owned(), fixture.normalized()))
            .collect();
        Self {
            locations: Arc::new(locations),
        }
    }

    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the document does not match the layout
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let locations: HashMap<String, LocationFixture> = serde_json::from_str(text)?;
        Ok(Self::new(locations))
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read, or
    /// `SourceError::Parse` if its content is malformed
    pub async fn from_path(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let source = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            locations = source.locations.len(),
            "Loaded snapshot file"
        );
        Ok(source)
    }

    /// Known location names
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    fn fixture(&self, location: &str) -> Result<&LocationFixture, SourceError> {
        self.locations
            .get(location.trim())
            .ok_or_else(|| SourceError::UnknownLocation(location.to_owned()))
    }

    fn reading<T: Copy>(
        &self,
        location: &str,
        reading: &'static str,
        pick: impl FnOnce(&LocationFixture) -> Option<T>,
    ) -> Result<T, SourceError> {
        pick(self.fixture(location)?).ok_or_else(|| SourceError::MissingReading {
            location: location.to_owned(),
            reading,
        })
    }
}

#[async_trait]
impl WeatherSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn current_weather(&self, location: &str) -> AppResult<WeatherSnapshot> {
        Ok(self.reading(location, "weather", |f| f.weather)?)
    }

    async fn air_quality(&self, location: &str) -> AppResult<AirQualitySnapshot> {
        Ok(self.reading(location, "air_quality", |f| f.air_quality)?)
    }

    async fn hourly_forecast(&self, location: &str) -> AppResult<Vec<HourlyForecast>> {
        Ok(self.fixture(location)?.forecast.clone())
    }

    async fn life_index(&self, location: &str) -> AppResult<LifeIndexReadings> {
        Ok(self.reading(location, "life_index", |f| f.life_index)?)
    }
}
