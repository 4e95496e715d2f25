// ABOUTME: Air quality snapshot with PM10/PM2.5 readings and their Korean grades
// ABOUTME: A negative reading is the unavailable sentinel and always grades as Unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{air, defaults};
use crate::grade::{GradeStep, GradeTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AirGrade {
    /// 좋음
    Good,
    /// 보통
    Moderate,
    /// 나쁨
    Bad,
    /// 매우나쁨
    VeryBad,
    /// Measurement unavailable
    #[default]
    Unknown,
}

const PM10_GRADES: GradeTable<AirGrade> = GradeTable::new(
    &[
        GradeStep::new(air::PM10_VERY_BAD_MIN, AirGrade::VeryBad),
        GradeStep::new(air::PM10_BAD_MIN, AirGrade::Bad),
        GradeStep::new(air::PM10_MODERATE_MIN, AirGrade::Moderate),
    ],
    AirGrade::Good,
);

const PM25_GRADES: GradeTable<AirGrade> = GradeTable::new(
    &[
        GradeStep::new(air::PM25_VERY_BAD_MIN, AirGrade::VeryBad),
        GradeStep::new(air::PM25_BAD_MIN, AirGrade::Bad),
        GradeStep::new(air::PM25_MODERATE_MIN, AirGrade::Moderate),
    ],
    AirGrade::Good,
);

impl AirGrade {
    /// Korean display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "좋음",
            Self::Moderate => "보통",
            Self::Bad => "나쁨",
            Self::VeryBad => "매우나쁨",
            Self::Unknown => "알수없음",
        }
    }

    /// Parse a Korean label; anything unrecognized is Unknown
    #[must_use]
    pub fn from_label(text: &str) -> Self {
        match text.trim() {
            "좋음" => Self::Good,
            "보통" => Self::Moderate,
            "나쁨" => Self::Bad,
            "매우나쁨" => Self::VeryBad,
            _ => Self::Unknown,
        }
    }

    /// Grade a PM10 reading
    #[must_use]
    pub fn from_pm10(value: f64) -> Self {
        if is_sentinel(value) {
            Self::Unknown
        } else {
            PM10_GRADES.bucket(value)
        }
    }

    /// Grade a PM2.5 reading
    #[must_use]
    pub fn from_pm25(value: f64) -> Self {
        if is_sentinel(value) {
            Self::Unknown
        } else {
            PM25_GRADES.bucket(value)
        }
    }

    /// 나쁨 or 매우나쁨
    #[must_use]
    pub const fn is_bad(self) -> bool {
        matches!(self, Self::Bad | Self::VeryBad)
    }
}

impl From<String> for AirGrade {
    fn from(text: String) -> Self {
        Self::from_label(&text)
    }
}

impl From<AirGrade> for &'static str {
    fn from(grade: AirGrade) -> Self {
        grade.label()
    }
}

impl fmt::Display for AirGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_sentinel(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

/// Particulate matter readings (µg/m³) with derived grades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// PM10 reading, -1 when unavailable
    pub pm10_value: f64,
    /// PM10 grade
    #[serde(default)]
    pub pm10_grade: AirGrade,
    /// PM2.5 reading, -1 when unavailable
    pub pm25_value: f64,
    /// PM2.5 grade
    #[serde(default)]
    pub pm25_grade: AirGrade,
}

impl AirQualitySnapshot {
    /// Build from raw readings, deriving both grades
    #[must_use]
    pub fn from_values(pm10_value: f64, pm25_value: f64) -> Self {
        Self {
            pm10_value,
            pm10_grade: AirGrade::from_pm10(pm10_value),
            pm25_value,
            pm25_grade: AirGrade::from_pm25(pm25_value),
        }
    }

    /// Both measurements failed
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            pm10_value: air::UNAVAILABLE,
            pm10_grade: AirGrade::Unknown,
            pm25_value: air::UNAVAILABLE,
            pm25_grade: AirGrade::Unknown,
        }
    }

    /// Re-derive grades from values; sentinel values force Unknown
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_values(self.pm10_value, self.pm25_value)
    }

    /// PM2.5 reading when available
    #[must_use]
    pub fn pm25(&self) -> Option<f64> {
        (!is_sentinel(self.pm25_value)).then_some(self.pm25_value)
    }

    /// PM10 reading when available
    #[must_use]
    pub fn pm10(&self) -> Option<f64> {
        (!is_sentinel(self.pm10_value)).then_some(self.pm10_value)
    }
}

impl Default for AirQualitySnapshot {
    fn default() -> Self {
        Self::from_values(defaults::PM10_VALUE, defaults::PM25_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_thresholds() {
        assert_eq!(AirGrade::from_pm10(30.0), AirGrade::Good);
        assert_eq!(AirGrade::from_pm10(31.0), AirGrade::Moderate);
        assert_eq!(AirGrade::from_pm10(81.0), AirGrade::Bad);
        assert_eq!(AirGrade::from_pm10(151.0), AirGrade::VeryBad);
        assert_eq!(AirGrade::from_pm25(15.0), AirGrade::Good);
        assert_eq!(AirGrade::from_pm25(35.0), AirGrade::Moderate);
        assert_eq!(AirGrade::from_pm25(36.0), AirGrade::Bad);
        assert_eq!(AirGrade::from_pm25(90.0), AirGrade::VeryBad);
    }

    #[test]
    fn sentinel_is_unknown_not_good() {
        let air = AirQualitySnapshot::from_values(-1.0, -1.0);
        assert_eq!(air.pm10_grade, AirGrade::Unknown);
        assert_eq!(air.pm25_grade, AirGrade::Unknown);
        assert_eq!(air.pm25(), None);

        let zero = AirQualitySnapshot::from_values(0.0, 0.0);
        assert_eq!(zero.pm25_grade, AirGrade::Good);
        assert_eq!(zero.pm25(), Some(0.0));
    }

    #[test]
    fn default_is_moderate() {
        let air = AirQualitySnapshot::default();
        assert_eq!(air.pm25_grade, AirGrade::Moderate);
        assert_eq!(air.pm10_grade, AirGrade::Moderate);
    }
}
