// ABOUTME: Sleep condition index from bedroom-relevant humidity, temperature, and PM10
// ABOUTME: Accumulates from zero; an unavailable PM10 reading counts as a moderate 50
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{format_number, Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use serde::Serialize;

use Cmp::{Above, AtMost, Below, Between, From};
use Field::{Humidity, Pm10OrFallback, Temperature};

/// Sleep condition table
pub const TABLE: ScoreTable = ScoreTable {
    name: "sleep",
    polarity: Polarity::Goodness(0.0),
    guards: &[],
    checks: &[
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Between(40.0, 60.0)), 40.0)
                    .factor("습도 {humidity}% (수면 최적)"),
                Rung::new(When::Is(Humidity, From(30.0, 40.0)), 20.0)
                    .factor("습도 {humidity}% (다소 건조)")
                    .tip("실내가 건조합니다. 가습기 사용을 권장합니다."),
                Rung::new(
                    When::All(&[When::Is(Humidity, Above(60.0)), When::Is(Humidity, AtMost(70.0))]),
                    20.0,
                )
                .factor("습도 {humidity}% (다소 습함)")
                .tip("습도가 다소 높습니다. 환기를 권장합니다."),
                Rung::new(When::Is(Humidity, Below(30.0)), 0.0)
                    .factor("습도 {humidity}% (매우 건조)")
                    .tip("매우 건조합니다. 가습기 필수, 물 자주 마시기."),
                Rung::new(When::Always, 0.0)
                    .factor("습도 {humidity}% (매우 습함)")
                    .tip("습도가 너무 높습니다. 제습기 또는 에어컨 사용 권장."),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Between(18.0, 22.0)), 40.0)
                    .factor("기온 {temp}도 (수면 최적)"),
                Rung::new(When::Is(Temperature, From(15.0, 18.0)), 20.0)
                    .factor("기온 {temp}도 (다소 쌀쌀)")
                    .tip("다소 쌀쌀합니다. 따뜻한 이불을 준비하세요."),
                Rung::new(
                    When::All(&[
                        When::Is(Temperature, Above(22.0)),
                        When::Is(Temperature, AtMost(25.0)),
                    ]),
                    20.0,
                )
                .factor("기온 {temp}도 (약간 따뜻)")
                .tip("약간 따뜻합니다. 시원한 잠옷과 얇은 이불 권장."),
                Rung::new(When::Is(Temperature, Below(15.0)), 0.0)
                    .factor("기온 {temp}도 (추움)")
                    .tip("춥습니다. 난방 및 두꺼운 이불 필요."),
                Rung::new(When::Always, 0.0)
                    .factor("기온 {temp}도 (더움)")
                    .tip("덥습니다. 에어컨 또는 선풍기 사용, 수분 보충 후 취침."),
            ],
        },
        Check {
            name: "fine_dust",
            rungs: &[
                Rung::new(When::Is(Pm10OrFallback, Below(30.0)), 20.0).factor("미세먼지 좋음"),
                Rung::new(When::Is(Pm10OrFallback, Below(80.0)), 10.0)
                    .tip("미세먼지 보통. 취침 전 환기 후 창문 닫기."),
                Rung::new(When::Always, 0.0)
                    .factor("미세먼지 나쁨")
                    .tip("미세먼지 나쁨. 공기청정기 가동 권장."),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("좋음", "숙면하기 좋은 밤입니다")),
            GradeStep::new(60.0, GradeLabel::new("보통", "무난한 수면 환경입니다")),
            GradeStep::new(40.0, GradeLabel::new("주의", "수면 환경 조절이 필요합니다")),
            GradeStep::new(20.0, GradeLabel::new("나쁨", "숙면이 어려운 환경입니다")),
        ],
        GradeLabel::new("매우나쁨", "침실 환경을 적극적으로 조절하세요"),
    ),
    default_factor: "쾌적한 수면 환경",
    default_tip: "쾌적한 수면 환경입니다. 좋은 밤 되세요!",
};

/// Reference ranges next to the current readings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimalConditions {
    /// Recommended bedroom temperature
    pub optimal_temperature: &'static str,
    /// Recommended bedroom humidity
    pub optimal_humidity: &'static str,
    /// Current temperature
    pub current_temperature: String,
    /// Current humidity
    pub current_humidity: String,
}

/// Sleep result with reference ranges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Reference ranges
    pub optimal_conditions: OptimalConditions,
}

/// Score tonight's sleep conditions
#[must_use]
pub fn sleep(c: &Conditions) -> SleepReport {
    SleepReport {
        result: TABLE.evaluate(c),
        optimal_conditions: OptimalConditions {
            optimal_temperature: "18-22도",
            optimal_humidity: "40-60%",
            current_temperature: format!("{}도", format_number(c.weather.temperature)),
            current_humidity: format!("{}%", format_number(c.weather.humidity)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 9, 20).unwrap())
    }

    #[test]
    fn ideal_bedroom_scores_full_marks() {
        let report = sleep(&at(
            WeatherSnapshot::new(20.0, 50.0, 1.0, 0.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
        ));
        assert_eq!(report.result.score, 100);
        assert_eq!(report.result.recommendations, vec!["쾌적한 수면 환경입니다. 좋은 밤 되세요!".to_owned()]);
        assert_eq!(report.optimal_conditions.current_temperature, "20도");
    }

    #[test]
    fn missing_pm10_counts_as_moderate() {
        let report = sleep(&at(
            WeatherSnapshot::new(20.0, 50.0, 1.0, 0.0),
            AirQualitySnapshot::unavailable(),
        ));
        assert_eq!(report.result.score, 90);
        assert_eq!(report.result.breakdown["fine_dust"], 10.0);
    }

    #[test]
    fn hot_humid_night_scores_low() {
        let report = sleep(&at(
            WeatherSnapshot::new(28.0, 85.0, 1.0, 0.0),
            AirQualitySnapshot::default(),
        ));
        assert_eq!(report.result.score, 10);
        assert_eq!(report.result.grade, "매우나쁨");
        assert_eq!(report.result.recommendations.len(), 3);
    }
}
