// ABOUTME: Integration tests for weather sources: snapshot files, memoization, and default fallback
// ABOUTME: Uses temporary snapshot files and a counting source to observe upstream calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use nalssi_core::errors::{AppError, AppResult, ErrorCode};
use nalssi_core::models::{
    AirGrade, AirQualitySnapshot, HourlyForecast, LifeIndexReadings, Sky, WeatherSnapshot,
};
use nalssi_mcp_server::cache::{CacheConfig, Memoizer};
use nalssi_mcp_server::source::{self, CachedSource, FixtureSource, WeatherSource};
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
  "서울": {
    "weather": { "temperature": 21.0, "humidity": 40.0, "wind_speed": 2.5, "rain_probability": 10.0, "sky": "맑음" },
    "air_quality": { "pm10_value": 35.0, "pm25_value": 40.0 },
    "forecast": [ { "hour": 9, "temperature": 18.0, "rain_probability": 0.0, "sky": "맑음" } ],
    "life_index": { "uv_index": 6.0 }
  },
  "제주": {
    "weather": { "temperature": 23.0, "humidity": 140.0, "rain_probability_tomorrow": -5.0, "wind_speed": -4.0, "rain_probability": 20.0, "sky": "흐림" }
  }
}"#;

fn may_20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

/// Source counting every upstream fetch
#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl WeatherSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn current_weather(&self, _location: &str) -> AppResult<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(WeatherSnapshot::new(15.0, 55.0, 1.0, 0.0))
    }

    async fn air_quality(&self, _location: &str) -> AppResult<AirQualitySnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::external_service("air quality API down"))
    }

    async fn hourly_forecast(&self, _location: &str) -> AppResult<Vec<HourlyForecast>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![HourlyForecast::new(12, 16.0, 10.0, Sky::Clear)])
    }

    async fn life_index(&self, _location: &str) -> AppResult<LifeIndexReadings> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LifeIndexReadings::default())
    }
}

#[tokio::test]
async fn test_snapshot_file_is_loaded_and_normalized() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(SNAPSHOT.as_bytes())?;

    let fixture = FixtureSource::from_path(file.path()).await?;
    let mut names: Vec<&str> = fixture.locations().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["서울", "제주"]);

    let seoul_air = fixture.air_quality("서울").await?;
    assert_eq!(seoul_air.pm25_grade, AirGrade::Bad);

    let jeju = fixture.current_weather(" 제주 ").await?;
    assert_eq!(jeju.humidity, 100.0);
    assert_eq!(jeju.wind_speed, 0.0);
    assert_eq!(jeju.rain_probability_tomorrow, Some(0.0));

    let forecast = fixture.hourly_forecast("서울").await?;
    assert_eq!(forecast.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_and_unknown_location_are_errors() {
    let missing = FixtureSource::from_path(Path::new("/nonexistent/snapshot.json")).await;
    assert!(missing.is_err());

    let fixture = FixtureSource::from_json(SNAPSHOT).unwrap();
    let unknown = fixture.current_weather("평양").await.unwrap_err();
    assert_eq!(unknown.code, ErrorCode::ResourceNotFound);

    let absent = fixture.air_quality("제주").await.unwrap_err();
    assert_eq!(absent.code, ErrorCode::ResourceUnavailable);
}

#[tokio::test]
async fn test_failed_readings_fall_back_to_defaults() {
    let fixture = FixtureSource::from_json(SNAPSHOT).unwrap();

    let conditions = source::conditions(&fixture, "제주", may_20()).await;
    assert_eq!(conditions.air, AirQualitySnapshot::default());
    assert_eq!(conditions.weather.sky, Sky::Overcast);

    let nowhere = source::conditions(&fixture, "평양", may_20()).await;
    assert_eq!(nowhere.weather, WeatherSnapshot::default());
    assert!(source::forecast_or_default(&fixture, "평양").await.is_empty());
}

#[tokio::test]
async fn test_cached_source_fetches_each_reading_once() -> Result<()> {
    let counting = Arc::new(CountingSource::default());
    let config = CacheConfig {
        enable_background_cleanup: false,
        ..Default::default()
    };
    let cached = CachedSource::new(counting.clone(), Memoizer::in_memory(config).await?);

    cached.current_weather("서울").await?;
    cached.current_weather(" 서울 ").await?;
    cached.hourly_forecast("서울").await?;
    cached.hourly_forecast("서울").await?;
    assert_eq!(counting.calls.load(Ordering::SeqCst), 2);

    // failures reach the upstream every time
    assert!(cached.air_quality("서울").await.is_err());
    assert!(cached.air_quality("서울").await.is_err());
    assert_eq!(counting.calls.load(Ordering::SeqCst), 4);

    cached.current_weather("부산").await?;
    assert_eq!(counting.calls.load(Ordering::SeqCst), 5);
    Ok(())
}
