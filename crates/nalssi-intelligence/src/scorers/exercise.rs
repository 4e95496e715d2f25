// ABOUTME: Outdoor exercise suitability with heat, respiratory, and hydration guidance
// ABOUTME: Suggests exercise types and a time window from the score and temperature
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

/// Exercise index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "exercise",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(-5.0)), -50.0)
                    .factor("기온 {temp}°C (혹한)")
                    .warning("저체온증 위험! 실내 운동 권장")
                    .tip("운동 시 방한 장비 필수"),
                Rung::new(When::Is(Temperature, Below(5.0)), -25.0)
                    .factor("기온 {temp}°C (추움)")
                    .tip("워밍업 충분히, 방한 레이어링"),
                Rung::new(When::Is(Temperature, Above(35.0)), -60.0)
                    .factor("기온 {temp}°C (극심한 폭염)")
                    .warning("열사병 위험! 야외 운동 금지"),
                Rung::new(When::Is(Temperature, Above(30.0)), -35.0)
                    .factor("기온 {temp}°C (폭염)")
                    .warning("열사병 주의! 이른 아침/저녁만 추천")
                    .tip("물 500ml/30분 섭취, 그늘에서 휴식"),
                Rung::new(When::Is(Temperature, Above(28.0)), -20.0)
                    .factor("기온 {temp}°C (더움)")
                    .tip("수분 보충 자주, 강도 낮추기"),
                Rung::new(When::Is(Temperature, Between(15.0, 22.0)), 10.0)
                    .factor("기온 {temp}°C (최적)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), -50.0)
                    .factor("미세먼지 {pm25_grade}")
                    .warning("야외 운동 금지! 실내 운동만"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), -30.0)
                    .factor("미세먼지 {pm25_grade}")
                    .warning("격렬한 운동 피하기")
                    .tip("가벼운 운동만, 호흡 깊게 하지 않기"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), -5.0),
                Rung::new(When::Pm25(&[AirGrade::Good]), 10.0).factor("미세먼지 좋음 (호흡 최적)"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(60.0)), -40.0)
                    .factor("강수확률 {rain}%")
                    .warning("비 예보! 실내 운동 권장"),
                Rung::new(When::Is(RainProbability, AtLeast(40.0)), -25.0)
                    .factor("강수확률 {rain}%")
                    .tip("우비/방수 재킷 준비"),
                Rung::new(When::Is(RainProbability, AtLeast(20.0)), -10.0),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Above(85.0)), -25.0)
                    .factor("습도 {humidity}% (매우 높음)")
                    .tip("땀이 안 마름, 탈수 주의")
                    .warning("열사병 위험 증가"),
                Rung::new(When::Is(Humidity, Above(70.0)), -15.0)
                    .factor("습도 {humidity}%")
                    .tip("수분 보충 자주"),
                Rung::new(When::Is(Humidity, Between(40.0, 60.0)), 5.0)
                    .factor("습도 {humidity}% (최적)"),
                Rung::new(When::Is(Humidity, Below(30.0)), -10.0)
                    .tip("호흡기 건조 주의, 물 자주 마시기"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, Above(15.0)), -25.0)
                    .factor("강풍 {wind}m/s")
                    .warning("강풍! 자전거/러닝 위험"),
                Rung::new(When::Is(WindSpeed, Above(10.0)), -15.0).tip("바람 고려하여 코스 조정"),
                Rung::new(When::Is(WindSpeed, Between(2.0, 5.0)), 5.0).tip("시원한 바람이 도움됨"),
            ],
        },
        Check {
            name: "uv",
            rungs: &[
                Rung::new(When::Is(UvIndex, AtLeast(8.0)), -15.0)
                    .factor("자외선 {uv} (매우높음)")
                    .tip("선크림 SPF50+, 모자 필수")
                    .warning("11-15시 야외 운동 피하기"),
                Rung::new(When::Is(UvIndex, AtLeast(6.0)), -5.0).tip("선크림, 선글라스 권장"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(85.0, GradeLabel::new("최적", "야외 운동 완벽한 날!")),
            GradeStep::new(70.0, GradeLabel::new("좋음", "야외 운동하기 좋은 날")),
            GradeStep::new(50.0, GradeLabel::new("보통", "가벼운 운동 추천")),
            GradeStep::new(30.0, GradeLabel::new("주의", "운동 시 주의 필요")),
        ],
        GradeLabel::new("위험", "야외 운동 자제, 실내 추천"),
    ),
    default_factor: "운동하기 무난한 날씨",
    default_tip: "즐거운 운동 되세요!",
};

/// Heat and respiratory risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthNotes {
    /// 높음 / 보통 / 낮음
    pub heat_risk: &'static str,
    /// 높음 / 보통 / 낮음
    pub respiratory_risk: &'static str,
}

/// Exercise result with suggestions and health guidance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Suggested exercise types
    pub recommended_exercises: Vec<&'static str>,
    /// Suggested time window
    pub best_time: &'static str,
    /// Water intake for one hour of exercise
    pub hydration: &'static str,
    /// Risk levels
    pub health_notes: HealthNotes,
}

fn exercises_for(score: u8, temperature: f64) -> &'static [&'static str] {
    match score {
        70.. if temperature > 25.0 => &["수영", "새벽 러닝", "저녁 자전거"],
        70.. if temperature < 10.0 => &["빠른 걷기", "러닝", "등산"],
        70.. => &["러닝", "자전거", "등산", "테니스"],
        50..=69 => &["걷기", "가벼운 조깅", "스트레칭"],
        _ => &["실내 헬스", "요가", "홈트레이닝"],
    }
}

fn best_time_for(c: &Conditions) -> &'static str {
    let w = &c.weather;
    if w.temperature > 28.0 {
        "05:00-08:00 또는 19:00-21:00"
    } else if w.temperature < 5.0 {
        "12:00-15:00 (가장 따뜻한 시간)"
    } else if w.uv() >= 6 {
        "07:00-10:00 또는 17:00-19:00"
    } else {
        "언제든 좋아요!"
    }
}

fn hydration_for(c: &Conditions) -> &'static str {
    let w = &c.weather;
    if w.temperature > 30.0 || w.humidity > 70.0 {
        "1L 이상/시간"
    } else if w.temperature > 25.0 {
        "750ml/시간"
    } else {
        "500ml/시간"
    }
}

fn health_notes_for(c: &Conditions) -> HealthNotes {
    let w = &c.weather;
    let heat_risk = if w.temperature > 30.0 || (w.temperature > 25.0 && w.humidity > 70.0) {
        "높음"
    } else if w.temperature > 25.0 {
        "보통"
    } else {
        "낮음"
    };
    let respiratory_risk = match c.air.pm25_grade {
        AirGrade::Bad | AirGrade::VeryBad => "높음",
        AirGrade::Moderate => "보통",
        AirGrade::Good | AirGrade::Unknown => "낮음",
    };
    HealthNotes {
        heat_risk,
        respiratory_risk,
    }
}

/// Score outdoor exercise conditions
#[must_use]
pub fn exercise(c: &Conditions) -> ExerciseReport {
    let result = TABLE.evaluate(c);
    ExerciseReport {
        recommended_exercises: exercises_for(result.score, c.weather.temperature).to_vec(),
        best_time: best_time_for(c),
        hydration: hydration_for(c),
        health_notes: health_notes_for(c),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap())
    }

    #[test]
    fn heatwave_moves_exercise_indoors() {
        let report = exercise(&at(
            WeatherSnapshot::new(36.0, 75.0, 1.0, 0.0),
            AirQualitySnapshot::default(),
        ));
        assert!(report.result.warnings.iter().any(|w| w.contains("열사병")));
        assert_eq!(report.hydration, "1L 이상/시간");
        assert_eq!(report.health_notes.heat_risk, "높음");
        assert_eq!(report.recommended_exercises[0], "실내 헬스");
    }

    #[test]
    fn mild_clean_day_suggests_running() {
        let report = exercise(&at(
            WeatherSnapshot::new(18.0, 50.0, 3.0, 0.0).with_uv_index(3),
            AirQualitySnapshot::from_values(20.0, 10.0),
        ));
        assert_eq!(report.result.score, 100);
        assert_eq!(report.best_time, "언제든 좋아요!");
        assert_eq!(report.health_notes.respiratory_risk, "낮음");
        assert!(report.recommended_exercises.contains(&"테니스"));
    }
}
