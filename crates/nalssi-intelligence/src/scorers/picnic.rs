// ABOUTME: Han river and park picnic suitability with chimaek timing
// ABOUTME: Wind matters more than usual because mats and tents blow away
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;
use serde::Serialize;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

/// Picnic index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "picnic",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -50.0)
                    .factor("강수확률 {rain}%")
                    .tip("실내 카페 추천"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -25.0)
                    .factor("강수확률 {rain}%")
                    .tip("돗자리 대신 벤치 이용"),
                Rung::new(When::Is(RainProbability, AtLeast(10.0)), -10.0),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(10.0)), -35.0)
                    .factor("기온 {temp}°C (추움)")
                    .tip("따뜻한 음료 준비"),
                Rung::new(When::Is(Temperature, Below(15.0)), -20.0).tip("담요 챙기세요"),
                Rung::new(When::Is(Temperature, Above(32.0)), -30.0)
                    .factor("기온 {temp}°C (폭염)")
                    .tip("그늘 텐트 필수, 저녁 시간 추천"),
                Rung::new(When::Is(Temperature, Above(28.0)), -15.0).tip("양산/그늘막 챙기세요"),
                Rung::new(When::Is(Temperature, Between(20.0, 26.0)), 10.0)
                    .factor("기온 {temp}°C (최적)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), -40.0).factor("미세먼지 {pm25_grade}"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), -25.0).factor("미세먼지 {pm25_grade}"),
                Rung::new(When::Pm25(&[AirGrade::Good]), 5.0),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, Above(8.0)), -25.0)
                    .factor("강풍 {wind}m/s")
                    .tip("텐트/돗자리 고정 필수"),
                Rung::new(When::Is(WindSpeed, Above(5.0)), -10.0).tip("돗자리 모서리 고정"),
                Rung::new(
                    When::All(&[
                        When::Is(WindSpeed, Below(1.0)),
                        When::Is(Temperature, Above(25.0)),
                    ]),
                    -10.0,
                )
                .tip("바람 없어서 더울 수 있어요"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[Rung::new(When::Is(Humidity, Above(80.0)), -15.0)
                .factor("습도 {humidity}%")
                .tip("끈적끈적할 수 있어요")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(85.0, GradeLabel::new("최적", "피크닉 완벽한 날!")),
            GradeStep::new(70.0, GradeLabel::new("좋음", "피크닉하기 좋은 날")),
            GradeStep::new(50.0, GradeLabel::new("보통", "피크닉 가능")),
            GradeStep::new(30.0, GradeLabel::new("별로", "피크닉 비추천")),
        ],
        GradeLabel::new("금지", "피크닉 하지 마세요"),
    ),
    default_factor: "피크닉하기 무난한 날씨",
    default_tip: "돗자리, 음료, 간식 챙기세요",
};

const RIVER_PARKS: &[&str] = &["여의도한강공원", "반포한강공원", "뚝섬한강공원", "망원한강공원"];
const SHADED_PARKS: &[&str] = &["올림픽공원", "서울숲"];

/// Picnic result with spots and the best chicken-and-beer window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PicnicReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Suggested parks
    pub recommended_spots: Vec<&'static str>,
    /// Suggested time for chimaek
    pub chimaek_time: &'static str,
}

/// Score picnic conditions
#[must_use]
pub fn picnic(c: &Conditions) -> PicnicReport {
    let result = TABLE.evaluate(c);
    let recommended_spots = match result.score {
        70.. => RIVER_PARKS.to_vec(),
        50..=69 => SHADED_PARKS.to_vec(),
        _ => Vec::new(),
    };
    let chimaek_time = if result.score < 60 {
        "오늘은 실내 추천"
    } else if c.weather.temperature > 25.0 {
        "오후 5-7시 (해질녘)"
    } else {
        "오후 3-6시"
    };
    PicnicReport {
        result,
        recommended_spots,
        chimaek_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(weather: WeatherSnapshot) -> Conditions {
        Conditions::new(
            weather,
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
        )
    }

    #[test]
    fn warm_still_day_suggests_sunset_chimaek() {
        let report = picnic(&at(WeatherSnapshot::new(26.0, 50.0, 0.5, 0.0)));
        // 100 + 10 (temperature) - 10 (no breeze while warm)
        assert_eq!(report.result.score, 100);
        assert_eq!(report.chimaek_time, "오후 5-7시 (해질녘)");
        assert_eq!(report.recommended_spots, RIVER_PARKS.to_vec());
    }

    #[test]
    fn rainy_cold_day_stays_inside() {
        let report = picnic(&at(WeatherSnapshot::new(8.0, 50.0, 2.0, 60.0)));
        assert_eq!(report.result.score, 15);
        assert_eq!(report.result.grade, "금지");
        assert!(report.recommended_spots.is_empty());
        assert_eq!(report.chimaek_time, "오늘은 실내 추천");
    }
}
