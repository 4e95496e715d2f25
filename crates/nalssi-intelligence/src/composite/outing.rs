// ABOUTME: Outing score as a weighted average of temperature, precipitation, air, and wind sub-scores
// ABOUTME: Sub-scores come from small value ladders; the weighted sum is truncated, not rounded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::OutingWeights;
use crate::engine::{format_number, Conditions};
use crate::result::GradeLabel;
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;
use serde::Serialize;

const GRADES: GradeTable<GradeLabel> = GradeTable::new(
    &[
        GradeStep::new(80.0, GradeLabel::new("좋음", "외출하기 좋은 날이에요!")),
        GradeStep::new(60.0, GradeLabel::new("보통", "외출 가능하지만 주의사항이 있어요.")),
        GradeStep::new(40.0, GradeLabel::new("나쁨", "가능하면 외출을 자제하세요.")),
    ],
    GradeLabel::new("매우나쁨", "외출을 삼가세요!"),
);

const DEFAULT_FACTOR: &str = "외출하기 무난한 날씨";

/// Sub-scores before weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutingDetail {
    /// Temperature comfort
    pub temperature: u8,
    /// Precipitation
    pub precipitation: u8,
    /// Air quality
    pub air_quality: u8,
    /// Wind
    pub wind: u8,
}

/// Outing suitability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutingReport {
    /// Truncated weighted average
    pub score: u8,
    /// Grade
    pub grade: &'static str,
    /// Headline message
    pub message: &'static str,
    /// Conditions that lowered a sub-score
    pub factors: Vec<String>,
    /// Unweighted sub-scores
    pub detail_scores: OutingDetail,
}

/// Korean description of a temperature
#[must_use]
pub fn temperature_description(temp: f64) -> &'static str {
    const BANDS: GradeTable<&str> = GradeTable::new(
        &[
            GradeStep::new(35.0, "폭염"),
            GradeStep::new(30.0, "무더움"),
            GradeStep::new(25.0, "더움"),
            GradeStep::new(20.0, "따뜻함"),
            GradeStep::new(15.0, "선선함"),
            GradeStep::new(10.0, "쌀쌀함"),
            GradeStep::new(5.0, "추움"),
            GradeStep::new(0.0, "매우 추움"),
        ],
        "영하",
    );
    BANDS.bucket(temp)
}

fn temperature_score(temp: f64) -> u8 {
    let within = |low: f64, high: f64| (low..=high).contains(&temp);
    if within(15.0, 25.0) {
        100
    } else if (10.0..15.0).contains(&temp) || (temp > 25.0 && temp <= 30.0) {
        80
    } else if (5.0..10.0).contains(&temp) || (temp > 30.0 && temp <= 35.0) {
        60
    } else if (0.0..5.0).contains(&temp) || (temp > 35.0 && temp <= 38.0) {
        40
    } else {
        20
    }
}

fn precipitation_score(c: &Conditions, factors: &mut Vec<String>) -> u8 {
    if let Some(kind) = c.weather.sky.precipitation() {
        factors.push(format!("강수: {kind}"));
        return 30;
    }
    let rain = c.weather.rain_probability;
    let text = || format!("강수확률 {}%", format_number(rain));
    if rain >= 80.0 {
        factors.push(text());
        40
    } else if rain >= 60.0 {
        factors.push(text());
        60
    } else if rain >= 40.0 {
        80
    } else {
        100
    }
}

fn air_score(c: &Conditions, factors: &mut Vec<String>) -> u8 {
    let air = &c.air;
    let (score, label, value) = match (air.pm25_grade, air.pm10_grade) {
        (AirGrade::VeryBad, _) => (20, "초미세먼지 매우나쁨", air.pm25_value),
        (AirGrade::Bad, _) => (50, "초미세먼지 나쁨", air.pm25_value),
        (_, AirGrade::VeryBad) => (30, "미세먼지 매우나쁨", air.pm10_value),
        (_, AirGrade::Bad) => (60, "미세먼지 나쁨", air.pm10_value),
        _ => return 100,
    };
    factors.push(format!("{label} ({}μg/m³)", format_number(value)));
    score
}

fn wind_score(c: &Conditions, factors: &mut Vec<String>) -> u8 {
    let wind = c.weather.wind_speed;
    if wind >= 10.0 {
        factors.push(format!("강풍 {}m/s", format_number(wind)));
        40
    } else if wind >= 7.0 {
        factors.push(format!("바람 {}m/s", format_number(wind)));
        60
    } else if wind >= 5.0 {
        80
    } else {
        100
    }
}

/// Score going out
#[must_use]
pub fn outing_score(c: &Conditions, weights: &OutingWeights) -> OutingReport {
    let mut factors = Vec::new();
    let temp = c.weather.temperature;

    let temperature = temperature_score(temp);
    if temperature < 80 {
        factors.push(format!(
            "기온 {}°C ({})",
            format_number(temp),
            temperature_description(temp)
        ));
    }
    let precipitation = precipitation_score(c, &mut factors);
    let air_quality = air_score(c, &mut factors);
    let wind = wind_score(c, &mut factors);

    let weighted = f64::from(temperature).mul_add(
        weights.temperature,
        f64::from(precipitation).mul_add(
            weights.rain,
            f64::from(air_quality).mul_add(weights.air, f64::from(wind) * weights.wind),
        ),
    );
    // absorb float noise before truncating
    let score = (weighted + 1e-9).floor().clamp(0.0, 100.0) as u8;
    let label = GRADES.bucket(f64::from(score));
    if factors.is_empty() {
        factors.push(DEFAULT_FACTOR.to_owned());
    }

    OutingReport {
        score,
        grade: label.grade,
        message: label.message,
        factors,
        detail_scores: OutingDetail {
            temperature,
            precipitation,
            air_quality,
            wind,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, Sky, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap())
    }

    #[test]
    fn perfect_day_scores_full() {
        let c = at(
            WeatherSnapshot::new(20.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
        );
        let report = outing_score(&c, &OutingWeights::default());
        assert_eq!(report.score, 100);
        assert_eq!(report.grade, "좋음");
        assert_eq!(report.factors, vec![DEFAULT_FACTOR.to_owned()]);
    }

    #[test]
    fn weighted_sum_is_truncated() {
        // 60 * .25 + 30 * .30 + 50 * .30 + 100 * .15 = 54
        let c = at(
            WeatherSnapshot::new(7.0, 50.0, 2.0, 90.0).with_sky(Sky::Rain),
            AirQualitySnapshot::from_values(60.0, 40.0),
        );
        let report = outing_score(&c, &OutingWeights::default());
        assert_eq!(report.detail_scores.precipitation, 30);
        assert_eq!(report.detail_scores.air_quality, 50);
        assert_eq!(report.score, 54);
        assert_eq!(report.grade, "나쁨");
        assert!(report.factors.contains(&"강수: 비".to_owned()));
        assert!(report.factors[0].contains("추움"));
    }

    #[test]
    fn fractional_average_truncates_down() {
        // 20 * .25 + 40 * .30 + 100 * .30 + 100 * .15 = 62
        let c = at(
            WeatherSnapshot::new(-3.0, 50.0, 2.0, 85.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
        );
        assert_eq!(outing_score(&c, &OutingWeights::default()).score, 62);

        let weights = OutingWeights {
            temperature: 0.33,
            rain: 0.33,
            air: 0.33,
            wind: 0.01,
        };
        let c = at(
            WeatherSnapshot::new(12.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
        );
        // 80 * .33 + 100 * .33 + 100 * .33 + 100 * .01 = 93.4
        assert_eq!(outing_score(&c, &weights).score, 93);
    }

    #[test]
    fn temperature_descriptions() {
        assert_eq!(temperature_description(36.0), "폭염");
        assert_eq!(temperature_description(0.0), "매우 추움");
        assert_eq!(temperature_description(-0.5), "영하");
    }
}
