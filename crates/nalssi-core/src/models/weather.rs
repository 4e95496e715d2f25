// ABOUTME: Current weather snapshot with clamped percentages and optional daily range and UV
// ABOUTME: Accessors resolve absent readings to the documented neutral defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sky::Sky;
use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// Normalized weather observation
///
/// Humidity and rain probabilities are kept in `[0, 100]` and wind speed is
/// never negative. Temperature is unbounded; extreme readings are valid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Rain probability for today (%)
    pub rain_probability: f64,
    /// Rain probability for tomorrow (%), defaults to today's
    #[serde(default)]
    pub rain_probability_tomorrow: Option<f64>,
    /// Sky condition
    #[serde(default)]
    pub sky: Sky,
    /// Forecast daily minimum (°C)
    #[serde(default)]
    pub temp_min: Option<f64>,
    /// Forecast daily maximum (°C)
    #[serde(default)]
    pub temp_max: Option<f64>,
    /// UV index, 5 when unavailable
    #[serde(default)]
    pub uv_index: Option<u8>,
    /// Yesterday's temperature at the same hour (°C)
    #[serde(default)]
    pub yesterday_temperature: Option<f64>,
}

impl WeatherSnapshot {
    /// Create a snapshot from the four core readings, clamping them into range
    #[must_use]
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, rain_probability: f64) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            rain_probability,
            rain_probability_tomorrow: None,
            sky: Sky::Clear,
            temp_min: None,
            temp_max: None,
            uv_index: None,
            yesterday_temperature: None,
        }
        .normalized()
    }

    /// Set the sky condition
    #[must_use]
    pub const fn with_sky(mut self, sky: Sky) -> Self {
        self.sky = sky;
        self
    }

    /// Set the forecast daily range
    #[must_use]
    pub const fn with_daily_range(mut self, temp_min: f64, temp_max: f64) -> Self {
        self.temp_min = Some(temp_min);
        self.temp_max = Some(temp_max);
        self
    }

    /// Set the UV index
    #[must_use]
    pub const fn with_uv_index(mut self, uv_index: u8) -> Self {
        self.uv_index = Some(uv_index);
        self
    }

    /// Set tomorrow's rain probability
    #[must_use]
    pub fn with_rain_tomorrow(mut self, rain_probability: f64) -> Self {
        self.rain_probability_tomorrow = Some(clamp_percent(rain_probability));
        self
    }

    /// Set yesterday's temperature
    #[must_use]
    pub const fn with_yesterday_temperature(mut self, temperature: f64) -> Self {
        self.yesterday_temperature = Some(temperature);
        self
    }

    /// Enforce the producer invariants on a deserialized snapshot
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.humidity = clamp_percent(self.humidity);
        self.rain_probability = clamp_percent(self.rain_probability);
        self.rain_probability_tomorrow = self.rain_probability_tomorrow.map(clamp_percent);
        self.wind_speed = if self.wind_speed.is_nan() {
            0.0
        } else {
            self.wind_speed.max(0.0)
        };
        self
    }

    /// Tomorrow's rain probability, falling back to today's
    #[must_use]
    pub fn rain_tomorrow(&self) -> f64 {
        self.rain_probability_tomorrow
            .unwrap_or(self.rain_probability)
    }

    /// UV index, falling back to the neutral default
    #[must_use]
    pub fn uv(&self) -> u8 {
        self.uv_index.unwrap_or(defaults::UV_INDEX)
    }

    /// Daily swing when both extremes are known
    #[must_use]
    pub fn daily_swing(&self) -> Option<f64> {
        match (self.temp_min, self.temp_max) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }

    /// Daily swing, substituting the placeholder when the range is unknown
    #[must_use]
    pub fn daily_swing_or_default(&self) -> f64 {
        self.daily_swing().unwrap_or(defaults::DAILY_SWING)
    }

    /// Forecast minimum, or an estimate below the current reading
    #[must_use]
    pub fn temp_min_or_estimate(&self) -> f64 {
        self.temp_min
            .unwrap_or(self.temperature - defaults::TEMP_MIN_OFFSET)
    }

    /// Snapshot for tomorrow built from today's readings and tomorrow's rain odds
    #[must_use]
    pub fn tomorrow(&self) -> Self {
        let rain = self.rain_tomorrow();
        Self {
            rain_probability: rain,
            rain_probability_tomorrow: Some(rain),
            yesterday_temperature: Some(self.temperature),
            ..*self
        }
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self::new(
            defaults::TEMPERATURE,
            defaults::HUMIDITY,
            defaults::WIND_SPEED,
            defaults::RAIN_PROBABILITY,
        )
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_invariants_are_enforced() {
        let weather = WeatherSnapshot::new(-45.0, 140.0, -3.0, -10.0);
        assert!((weather.temperature + 45.0).abs() < f64::EPSILON);
        assert!((weather.humidity - 100.0).abs() < f64::EPSILON);
        assert!(weather.wind_speed.abs() < f64::EPSILON);
        assert!(weather.rain_probability.abs() < f64::EPSILON);
    }

    #[test]
    fn absent_fields_resolve_to_defaults() {
        let weather = WeatherSnapshot::new(20.0, 50.0, 2.0, 35.0);
        assert_eq!(weather.uv(), 5);
        assert!((weather.rain_tomorrow() - 35.0).abs() < f64::EPSILON);
        assert_eq!(weather.daily_swing(), None);
        assert!((weather.daily_swing_or_default() - 8.0).abs() < f64::EPSILON);
        assert!((weather.temp_min_or_estimate() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn daily_range_gives_swing() {
        let weather = WeatherSnapshot::default().with_daily_range(3.0, 17.0);
        assert_eq!(weather.daily_swing(), Some(14.0));
    }

    #[test]
    fn deserialized_snapshot_defaults_optional_fields() {
        let json = r#"{"temperature":12.5,"humidity":61,"wind_speed":3.2,"rain_probability":20,"sky":"구름많음"}"#;
        let weather: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(weather.sky, Sky::PartlyCloudy);
        assert_eq!(weather.temp_min, None);
        assert_eq!(weather.uv_index, None);
    }
}
