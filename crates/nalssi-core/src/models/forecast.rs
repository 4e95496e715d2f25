// ABOUTME: Hourly forecast entries and optional life index readings from upstream services
// ABOUTME: Used by the best-time planner and the UV/pollen life indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sky::Sky;
use serde::{Deserialize, Serialize};

/// One hourly forecast slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Temperature (°C)
    pub temperature: f64,
    /// Rain probability (%)
    pub rain_probability: f64,
    /// Sky condition
    #[serde(default)]
    pub sky: Sky,
    /// Wind speed (m/s)
    #[serde(default)]
    pub wind_speed: f64,
    /// Relative humidity (%)
    #[serde(default)]
    pub humidity: Option<f64>,
}

impl HourlyForecast {
    /// Create a forecast slot
    #[must_use]
    pub const fn new(hour: u32, temperature: f64, rain_probability: f64, sky: Sky) -> Self {
        Self {
            hour,
            temperature,
            rain_probability,
            sky,
            wind_speed: 0.0,
            humidity: None,
        }
    }

    /// Set the wind speed
    #[must_use]
    pub const fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    /// Display label such as `09:00`
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{:02}:00", self.hour % 24)
    }
}

/// Life index readings published by the upstream life index service
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LifeIndexReadings {
    /// Measured UV index
    #[serde(default)]
    pub uv_index: Option<f64>,
    /// Pollen risk level (0 low .. 3 very high)
    #[serde(default)]
    pub pollen_level: Option<u8>,
}
