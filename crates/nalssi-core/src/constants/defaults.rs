// ABOUTME: Neutral defaults substituted when an upstream reading is absent
// ABOUTME: Chosen so that a defaulted field never triggers a penalty on its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Temperature (°C)
pub const TEMPERATURE: f64 = 20.0;
/// Relative humidity (%)
pub const HUMIDITY: f64 = 50.0;
/// Wind speed (m/s)
pub const WIND_SPEED: f64 = 2.0;
/// Rain probability (%)
pub const RAIN_PROBABILITY: f64 = 0.0;
/// UV index when no measurement exists
pub const UV_INDEX: u8 = 5;
/// PM2.5 (µg/m³)
pub const PM25_VALUE: f64 = 25.0;
/// PM10 (µg/m³)
pub const PM10_VALUE: f64 = 40.0;

/// Daily temperature swing assumed when min/max are unknown (°C)
pub const DAILY_SWING: f64 = 8.0;
/// Minimum temperature estimate offset from the current reading (°C)
pub const TEMP_MIN_OFFSET: f64 = 5.0;
/// PM10 assumed by sleep scoring when the measurement failed
pub const PM10_SLEEP_FALLBACK: f64 = 50.0;

/// Location used when a request does not name one
pub const LOCATION: &str = "서울";
