// ABOUTME: Normalized weather, air quality, and forecast snapshots consumed by every scorer
// ABOUTME: Producers clamp percentages and wind; absent readings stay optional with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sky condition enumeration parsed from upstream codes or text
pub mod sky;

/// Air quality readings and grades
pub mod air;

/// Current weather observation
pub mod weather;

/// Hourly forecast entries and life index readings
pub mod forecast;

pub use air::{AirGrade, AirQualitySnapshot};
pub use forecast::{HourlyForecast, LifeIndexReadings};
pub use sky::Sky;
pub use weather::WeatherSnapshot;
