// ABOUTME: Evaluation context, snapshot field accessors, comparisons, and rung predicates
// ABOUTME: Absent or sentinel readings resolve to None and never satisfy a comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::season::Season;
use chrono::{Datelike, NaiveDate};
use nalssi_core::constants::defaults;
use nalssi_core::models::{AirGrade, AirQualitySnapshot, Sky, WeatherSnapshot};

/// Skies with rain falling
pub const RAINY: &[Sky] = &[Sky::Rain, Sky::Sleet];

/// Skies with snow falling
pub const SNOWY: &[Sky] = &[Sky::Snow, Sky::Sleet];

/// Everything a scorer may read: the snapshots plus the calendar date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Weather observation
    pub weather: WeatherSnapshot,
    /// Air quality observation
    pub air: AirQualitySnapshot,
    /// Calendar date used by month-dependent rules
    pub date: NaiveDate,
    season_override: Option<Season>,
}

impl Conditions {
    /// Bundle snapshots with the evaluation date
    #[must_use]
    pub const fn new(weather: WeatherSnapshot, air: AirQualitySnapshot, date: NaiveDate) -> Self {
        Self {
            weather,
            air,
            date,
            season_override: None,
        }
    }

    /// Force a season instead of deriving it from the date
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season_override = Some(season);
        self
    }

    /// Calendar month (1-12)
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Explicit season, or the meteorological season of the date
    #[must_use]
    pub fn season(&self) -> Season {
        self.season_override
            .unwrap_or_else(|| Season::from_month(self.month()))
    }
}

/// Estimate an AQI figure from a PM2.5 reading (piecewise linear)
#[must_use]
pub fn estimate_aqi(pm25: f64) -> f64 {
    if pm25 <= 15.0 {
        pm25 * 3.0
    } else if pm25 <= 35.0 {
        (pm25 - 15.0).mul_add(2.5, 50.0)
    } else if pm25 <= 75.0 {
        (pm25 - 35.0).mul_add(1.25, 100.0)
    } else {
        150.0 + (pm25 - 75.0)
    }
}

/// Numeric inputs a rung can compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Current temperature (°C)
    Temperature,
    /// Relative humidity (%)
    Humidity,
    /// Wind speed (m/s)
    WindSpeed,
    /// Today's rain probability (%)
    RainProbability,
    /// Tomorrow's rain probability, falling back to today's (%)
    RainProbabilityTomorrow,
    /// UV index, 5 when unavailable
    UvIndex,
    /// PM2.5 reading; None for the sentinel
    Pm25,
    /// PM10 reading; None for the sentinel
    Pm10,
    /// PM10 reading with the sentinel replaced by a moderate value
    Pm10OrFallback,
    /// Daily max minus min; None when either is unknown
    DailySwing,
    /// Daily swing with the 8°C placeholder for an unknown range
    DailySwingOrDefault,
    /// Absolute change from yesterday's temperature; None when unknown
    YesterdayDelta,
    /// Forecast minimum, or current temperature minus 5
    TempMinOrEstimate,
    /// AQI estimated from PM2.5; None for the sentinel
    EstimatedAqi,
    /// Temperature plus a tenth of the humidity
    HeatIndex,
}

impl Field {
    /// Read the field from the conditions
    #[must_use]
    pub fn value(self, c: &Conditions) -> Option<f64> {
        let w = &c.weather;
        match self {
            Self::Temperature => Some(w.temperature),
            Self::Humidity => Some(w.humidity),
            Self::WindSpeed => Some(w.wind_speed),
            Self::RainProbability => Some(w.rain_probability),
            Self::RainProbabilityTomorrow => Some(w.rain_tomorrow()),
            Self::UvIndex => Some(f64::from(w.uv())),
            Self::Pm25 => c.air.pm25(),
            Self::Pm10 => c.air.pm10(),
            Self::Pm10OrFallback => Some(c.air.pm10().unwrap_or(defaults::PM10_SLEEP_FALLBACK)),
            Self::DailySwing => w.daily_swing(),
            Self::DailySwingOrDefault => Some(w.daily_swing_or_default()),
            Self::YesterdayDelta => w
                .yesterday_temperature
                .map(|yesterday| (w.temperature - yesterday).abs()),
            Self::TempMinOrEstimate => Some(w.temp_min_or_estimate()),
            Self::EstimatedAqi => c.air.pm25().map(estimate_aqi),
            Self::HeatIndex => Some(w.temperature + w.humidity / 10.0),
        }
    }
}

/// Comparison applied to a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmp {
    /// `value >= bound`
    AtLeast(f64),
    /// `value > bound`
    Above(f64),
    /// `value < bound`
    Below(f64),
    /// `value <= bound`
    AtMost(f64),
    /// `low <= value <= high`
    Between(f64, f64),
    /// `low <= value < high`
    From(f64, f64),
}

impl Cmp {
    /// Whether `value` satisfies the comparison
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::AtLeast(bound) => value >= bound,
            Self::Above(bound) => value > bound,
            Self::Below(bound) => value < bound,
            Self::AtMost(bound) => value <= bound,
            Self::Between(low, high) => (low..=high).contains(&value),
            Self::From(low, high) => (low..high).contains(&value),
        }
    }
}

/// Rung predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum When {
    /// Unconditional (the last rung of a ladder with a fallback)
    Always,
    /// Field comparison; absent values never match
    Is(Field, Cmp),
    /// Sky is one of the listed conditions
    Sky(&'static [Sky]),
    /// PM2.5 grade is one of the listed grades
    Pm25(&'static [AirGrade]),
    /// PM10 grade is one of the listed grades
    Pm10(&'static [AirGrade]),
    /// Calendar month is one of the listed months
    Month(&'static [u32]),
    /// Season is one of the listed seasons
    Season(&'static [Season]),
    /// Every predicate holds
    All(&'static [When]),
    /// At least one predicate holds
    Any(&'static [When]),
}

impl When {
    /// Evaluate the predicate
    #[must_use]
    pub fn holds(&self, c: &Conditions) -> bool {
        match self {
            Self::Always => true,
            Self::Is(field, cmp) => field.value(c).is_some_and(|v| cmp.holds(v)),
            Self::Sky(skies) => skies.contains(&c.weather.sky),
            Self::Pm25(grades) => grades.contains(&c.air.pm25_grade),
            Self::Pm10(grades) => grades.contains(&c.air.pm10_grade),
            Self::Month(months) => months.contains(&c.month()),
            Self::Season(seasons) => seasons.contains(&c.season()),
            Self::All(all) => all.iter().all(|p| p.holds(c)),
            Self::Any(any) => any.iter().any(|p| p.holds(c)),
        }
    }
}
