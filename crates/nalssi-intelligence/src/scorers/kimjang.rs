// ABOUTME: Kimjang (winter kimchi making) timing index, offered October through January
// ABOUTME: Cold but not freezing days without precipitation score best
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use crate::season::{SeasonGate, SeasonGated};
use nalssi_core::constants::defaults;
use nalssi_core::grade::{GradeStep, GradeTable};
use serde::Serialize;

use Cmp::{Above, AtLeast, AtMost};
use Field::{RainProbability, TempMinOrEstimate, Temperature, WindSpeed};

/// Months in which the index is offered
pub const GATE: SeasonGate = SeasonGate {
    months: &[10, 11, 12, 1],
    message: "김장지수는 10월~1월에만 제공됩니다.",
    tips: &["김장 적기: 보통 11월 중순~12월 초"],
};

/// Kimjang index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "kimjang",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, AtMost(0.0)), 10.0)
                    .factor("평균기온 {temp}°C (최적)")
                    .tip("배추 절이기 최적 온도"),
                Rung::new(When::Is(Temperature, AtMost(4.0)), 5.0)
                    .factor("평균기온 {temp}°C (적합)"),
                Rung::new(When::Is(Temperature, AtMost(8.0)), -10.0)
                    .factor("평균기온 {temp}°C (다소 높음)")
                    .tip("서늘한 곳에서 작업하세요"),
                Rung::new(When::Is(Temperature, AtMost(12.0)), -25.0)
                    .factor("평균기온 {temp}°C (높음)")
                    .tip("김장 미루는 것 추천"),
                Rung::new(When::Always, -50.0).factor("평균기온 {temp}°C (부적합)"),
            ],
        },
        Check {
            name: "temp_min",
            rungs: &[
                Rung::new(When::Is(TempMinOrEstimate, AtMost(-5.0)), -15.0)
                    .factor("최저 {temp_min}°C (혹한)")
                    .tip("야외 작업 시 동상 주의"),
                Rung::new(When::Is(TempMinOrEstimate, AtMost(0.0)), 5.0)
                    .factor("최저 {temp_min}°C (적합)"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -40.0)
                    .factor("강수확률 {rain}%")
                    .tip("비/눈 오는 날 김장 비추천"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -20.0),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, Above(10.0)), -15.0)
                    .factor("강풍 {wind}m/s")
                    .tip("실내 작업 권장"),
                Rung::new(When::Is(WindSpeed, Above(5.0)), -5.0),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(85.0, GradeLabel::new("최적", "김장하기 딱 좋은 날씨!")),
            GradeStep::new(70.0, GradeLabel::new("좋음", "김장하기 좋은 날")),
            GradeStep::new(50.0, GradeLabel::new("보통", "김장 가능")),
            GradeStep::new(30.0, GradeLabel::new("별로", "김장 미루는 것 추천")),
        ],
        GradeLabel::new("부적합", "김장 하지 마세요"),
    ),
    default_factor: "김장하기 무난한 날씨",
    default_tip: "서늘한 곳에서 작업하세요",
};

const GENERAL_TIPS: &[&str] = &[
    "배추 20포기 기준 소금 3kg",
    "절이는 시간: 8-10시간",
    "양념 재료: 무채, 쪽파, 젓갈, 고춧가루",
    "김장 후 3일간 실온 숙성 후 냉장",
];

/// Temperatures the score was based on, with estimates filled in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KimjangWeather {
    /// Current temperature (°C)
    pub temperature: f64,
    /// Forecast or estimated minimum (°C)
    pub temp_min: f64,
    /// Forecast or estimated maximum (°C)
    pub temp_max: f64,
    /// Rain probability (%)
    pub rain_probability: f64,
}

/// Kimjang result with general preparation tips
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KimjangReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Preparation tips independent of the weather
    pub general_tips: Vec<&'static str>,
    /// Inputs used for scoring
    pub weather_summary: KimjangWeather,
}

/// Score kimjang conditions when in season
#[must_use]
pub fn kimjang(c: &Conditions) -> SeasonGated<KimjangReport> {
    GATE.run(c.date, || {
        let w = &c.weather;
        KimjangReport {
            result: TABLE.evaluate(c),
            general_tips: GENERAL_TIPS.to_vec(),
            weather_summary: KimjangWeather {
                temperature: w.temperature,
                temp_min: w.temp_min_or_estimate(),
                temp_max: w
                    .temp_max
                    .unwrap_or(w.temperature + defaults::TEMP_MIN_OFFSET),
                rain_probability: w.rain_probability,
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn on(month: u32, weather: WeatherSnapshot) -> Conditions {
        Conditions::new(
            weather,
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, month, 20).unwrap(),
        )
    }

    #[test]
    fn unavailable_in_summer() {
        let gated = kimjang(&on(7, WeatherSnapshot::new(2.0, 50.0, 2.0, 0.0)));
        assert!(!gated.is_available());
    }

    #[test]
    fn cold_dry_november_day_is_optimal() {
        let gated = kimjang(&on(11, WeatherSnapshot::new(2.0, 50.0, 2.0, 0.0)));
        let report = gated.available().unwrap();
        // estimated minimum -3 earns the bonus
        assert_eq!(report.result.score, 100);
        assert_eq!(report.result.grade, "최적");
        assert!((report.weather_summary.temp_min + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_minimum_is_a_real_reading() {
        let weather = WeatherSnapshot::new(6.0, 50.0, 2.0, 0.0).with_daily_range(0.0, 9.0);
        let report = kimjang(&on(12, weather)).available().cloned().unwrap();
        assert_eq!(report.result.breakdown["temp_min"], 5.0);
        assert_eq!(report.result.score, 95);
    }
}
