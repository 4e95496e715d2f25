// ABOUTME: Hiking suitability with mountain suggestions around Seoul
// ABOUTME: Rain and fine dust raise warnings; mild temperatures and clean air earn bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;
use serde::Serialize;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Humidity, RainProbability, Temperature, UvIndex, WindSpeed};

/// Hiking index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "hiking",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(60.0)), -50.0)
                    .factor("강수확률 {rain}%")
                    .warning("비 예보! 등산 자제"),
                Rung::new(When::Is(RainProbability, AtLeast(40.0)), -30.0)
                    .factor("강수확률 {rain}%")
                    .warning("우비 필수"),
                Rung::new(When::Is(RainProbability, AtLeast(20.0)), -10.0)
                    .tip("가벼운 우비 챙기세요"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -30.0)
                    .factor("기온 {temp}°C (혹한)")
                    .warning("동상 위험! 방한 철저히")
                    .tip("핫팩, 보온병 필수"),
                Rung::new(When::Is(Temperature, Below(5.0)), -15.0)
                    .factor("기온 {temp}°C (추움)")
                    .tip("방한 장비 필수"),
                Rung::new(When::Is(Temperature, Above(30.0)), -35.0)
                    .factor("기온 {temp}°C (폭염)")
                    .warning("열사병 위험! 이른 아침만 추천")
                    .tip("새벽 등산 추천 (5-8시)"),
                Rung::new(When::Is(Temperature, Above(28.0)), -20.0)
                    .factor("기온 {temp}°C (더움)")
                    .tip("물 충분히, 그늘 코스 추천"),
                Rung::new(When::Is(Temperature, Between(15.0, 22.0)), 10.0)
                    .factor("기온 {temp}°C (최적)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), -40.0)
                    .factor("미세먼지 {pm25_grade}")
                    .warning("야외 운동 금지!"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), -25.0)
                    .factor("미세먼지 {pm25_grade}")
                    .warning("마스크 착용 등산"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), -5.0),
                Rung::new(When::Pm25(&[AirGrade::Good]), 5.0).factor("미세먼지 좋음"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, Above(15.0)), -30.0)
                    .factor("강풍 {wind}m/s")
                    .warning("정상부 강풍 주의!"),
                Rung::new(When::Is(WindSpeed, Above(10.0)), -15.0)
                    .factor("바람 {wind}m/s")
                    .tip("바람막이 필수"),
                Rung::new(When::Is(WindSpeed, Between(3.0, 7.0)), 5.0).tip("시원한 바람이 불어요"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Above(80.0)), -15.0)
                    .factor("습도 {humidity}%")
                    .tip("땀이 잘 안 마르니 여벌 옷 챙기세요"),
                Rung::new(When::Is(Humidity, Between(40.0, 60.0)), 5.0),
            ],
        },
        Check {
            name: "uv",
            rungs: &[Rung::new(When::Is(UvIndex, AtLeast(8.0)), -10.0).tip("선크림, 모자 필수!")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(85.0, GradeLabel::new("최적", "등산하기 완벽한 날씨!")),
            GradeStep::new(70.0, GradeLabel::new("좋음", "등산하기 좋은 날")),
            GradeStep::new(50.0, GradeLabel::new("보통", "등산 가능하지만 주의사항 있음")),
            GradeStep::new(30.0, GradeLabel::new("주의", "등산 시 주의 필요")),
        ],
        GradeLabel::new("위험", "등산 자제 권고"),
    ),
    default_factor: "등산하기 무난한 날씨",
    default_tip: "등산화 착용, 물 1L 이상 준비",
};

const FULL_COURSES: &[&str] = &["북한산", "관악산", "도봉산", "수락산"];
const LIGHT_COURSES: &[&str] = &["인왕산", "안산", "아차산"];

/// Hiking result with suggested mountains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HikingReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Mountains suited to the score; lower peaks on middling days
    pub recommended_mountains: Vec<&'static str>,
}

/// Score hiking conditions
#[must_use]
pub fn hiking(c: &Conditions) -> HikingReport {
    let result = TABLE.evaluate(c);
    let recommended_mountains = match result.score {
        70.. => FULL_COURSES.to_vec(),
        50..=69 => LIGHT_COURSES.to_vec(),
        _ => Vec::new(),
    };
    HikingReport {
        result,
        recommended_mountains,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(rain: f64) -> Conditions {
        Conditions::new(
            WeatherSnapshot::new(10.0, 70.0, 1.0, rain).with_uv_index(3),
            AirQualitySnapshot::from_values(30.0, 20.0),
            NaiveDate::from_ymd_opt(2025, 10, 11).unwrap(),
        )
    }

    #[test]
    fn heavy_rain_costs_fifty_points() {
        let dry = hiking(&at(0.0));
        let wet = hiking(&at(70.0));
        assert_eq!(dry.result.score, 95);
        assert_eq!(dry.result.score - wet.result.score, 50);
        assert!(wet.result.warnings.iter().any(|w| w.contains("비 예보")));
    }

    #[test]
    fn mountains_follow_score() {
        let dry = hiking(&at(0.0));
        assert_eq!(dry.recommended_mountains[0], "북한산");
        let wet = hiking(&at(70.0));
        assert!(wet.recommended_mountains.len() <= LIGHT_COURSES.len());
    }
}
