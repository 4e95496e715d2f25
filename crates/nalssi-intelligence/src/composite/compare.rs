// ABOUTME: Head-to-head comparison of two named activities on the same snapshot
// ABOUTME: Differences under the configured margin are reported as a tie
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity::Activity;
use crate::engine::{format_number, Conditions};
use serde::Serialize;

const UNSUPPORTED_SCORE: u8 = 50;
const UNSUPPORTED_GRADE: &str = "알수없음";
const TIE: &str = "비슷해요";

/// One side of the comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedActivity {
    /// Name as requested
    pub name: String,
    /// Score, 50 for unsupported names
    pub score: u8,
    /// Grade, 알수없음 for unsupported names
    pub grade: &'static str,
    /// Grade message or the unsupported notice
    pub message: String,
}

/// Comparison verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// First activity
    pub first: ComparedActivity,
    /// Second activity
    pub second: ComparedActivity,
    /// Winning name, or 비슷해요 on a tie
    pub winner: String,
    /// Absolute score difference
    pub score_difference: u8,
    /// Verdict sentence
    pub recommendation: String,
    /// Current temperature and rain probability
    pub weather_summary: String,
}

fn score_named(c: &Conditions, name: &str) -> ComparedActivity {
    let scored = Activity::from_name(name).and_then(|activity| activity.score(c));
    match scored {
        Some(result) => ComparedActivity {
            name: name.to_owned(),
            score: result.score,
            grade: result.grade,
            message: result.message.to_owned(),
        },
        None => ComparedActivity {
            name: name.to_owned(),
            score: UNSUPPORTED_SCORE,
            grade: UNSUPPORTED_GRADE,
            message: format!("{name}은 지원하지 않는 활동입니다"),
        },
    }
}

/// Compare two activities by name (Korean label or English key)
#[must_use]
pub fn compare(c: &Conditions, first: &str, second: &str, margin: u8) -> Comparison {
    let first = score_named(c, first);
    let second = score_named(c, second);
    let diff = i16::from(first.score) - i16::from(second.score);
    let score_difference = diff.unsigned_abs() as u8;

    let (winner, recommendation) = if score_difference < margin {
        (TIE.to_owned(), "둘 다 괜찮아요! 더 하고 싶은 걸 하세요.".to_owned())
    } else if diff > 0 {
        (
            first.name.clone(),
            format!("오늘은 {}이 {score_difference}점 더 좋아요!", first.name),
        )
    } else {
        (
            second.name.clone(),
            format!("오늘은 {}가 {score_difference}점 더 좋아요!", second.name),
        )
    };

    Comparison {
        weather_summary: format!(
            "현재 {}°C, 강수확률 {}%",
            format_number(c.weather.temperature),
            format_number(c.weather.rain_probability)
        ),
        first,
        second,
        winner,
        score_difference,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, Sky, WeatherSnapshot};

    fn conditions(weather: WeatherSnapshot) -> Conditions {
        Conditions::new(
            weather,
            AirQualitySnapshot::from_values(20.0, 10.0),
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
        )
    }

    #[test]
    fn unsupported_names_score_fifty() {
        let c = conditions(WeatherSnapshot::default());
        let result = compare(&c, "스카이다이빙", "번지점프", 10);
        assert_eq!(result.first.score, 50);
        assert_eq!(result.first.grade, "알수없음");
        assert_eq!(result.winner, "비슷해요");
        assert_eq!(result.score_difference, 0);
    }

    #[test]
    fn lightning_makes_picnic_win_over_camping() {
        let weather = WeatherSnapshot::new(20.0, 50.0, 2.0, 0.0).with_sky(Sky::Thunderstorm);
        let result = compare(&conditions(weather), "캠핑", "피크닉", 10);
        assert_eq!(result.first.score, 0);
        assert_eq!(result.winner, "피크닉");
        assert!(result.recommendation.starts_with("오늘은 피크닉가"));
        assert_eq!(result.score_difference, result.second.score);
    }
}
