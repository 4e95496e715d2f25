// ABOUTME: Laundry drying suitability for balcony drying
// ABOUTME: Rain dominates; humidity, temperature, wind, and fine dust adjust the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;

use Cmp::{Above, AtLeast, AtMost, Below, Between};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

/// Laundry index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "laundry",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(70.0)), -60.0)
                    .factor("강수확률 {rain}% (빨래 금지)"),
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -40.0)
                    .factor("강수확률 {rain}% (위험)"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -20.0)
                    .factor("강수확률 {rain}% (주의)")
                    .tip("오전에 빨래하고 오후 2시 전에 걷으세요"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, AtLeast(85.0)), -35.0)
                    .factor("습도 {humidity}% (건조 불가)")
                    .tip("제습기/건조기 사용 권장"),
                Rung::new(When::Is(Humidity, AtLeast(70.0)), -25.0)
                    .factor("습도 {humidity}% (건조 느림)"),
                Rung::new(When::Is(Humidity, AtLeast(60.0)), -10.0).factor("습도 {humidity}%"),
                Rung::new(When::Is(Humidity, AtMost(40.0)), 5.0)
                    .factor("습도 {humidity}% (건조 최적)"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(5.0)), -25.0)
                    .factor("기온 {temp}°C (동파 주의)")
                    .tip("실내 건조 권장"),
                Rung::new(When::Is(Temperature, Below(10.0)), -15.0)
                    .factor("기온 {temp}°C (건조 느림)"),
                Rung::new(When::Is(Temperature, Between(15.0, 25.0)), 5.0)
                    .factor("기온 {temp}°C (최적)"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, Below(1.0)), -10.0).factor("바람 없음 (건조 느림)"),
                Rung::new(When::Is(WindSpeed, Above(10.0)), -15.0)
                    .factor("강풍 {wind}m/s (빨래 날아감)")
                    .tip("빨래집게 필수!"),
                Rung::new(When::Is(WindSpeed, Between(2.0, 5.0)), 5.0)
                    .factor("바람 {wind}m/s (최적)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[Rung::new(When::Pm25(&[AirGrade::Bad, AirGrade::VeryBad]), -20.0)
                .factor("미세먼지 {pm25_grade}")
                .tip("실내 건조 권장 (미세먼지)")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("매우좋음", "빨래하기 완벽한 날!")),
            GradeStep::new(60.0, GradeLabel::new("좋음", "빨래하기 좋은 날")),
            GradeStep::new(40.0, GradeLabel::new("보통", "빨래 가능하지만 주의 필요")),
            GradeStep::new(20.0, GradeLabel::new("나쁨", "빨래 비추천")),
        ],
        GradeLabel::new("매우나쁨", "빨래 금지! 실내 건조하세요"),
    ),
    default_factor: "빨래 건조 조건 양호",
    default_tip: "오후 2시 전에 걷는 것이 좋아요",
};

/// Score laundry drying conditions
#[must_use]
pub fn laundry(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
    }

    #[test]
    fn dry_breezy_day_is_top_grade() {
        let result = laundry(&at(
            WeatherSnapshot::new(20.0, 35.0, 3.0, 5.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
        ));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, "매우좋음");
        assert!(result.factors.iter().any(|f| f.contains("건조 최적")));
        assert_eq!(result.recommendations, vec!["오후 2시 전에 걷는 것이 좋아요".to_owned()]);
    }

    #[test]
    fn humid_rainy_day_stacks_deductions() {
        let result = laundry(&at(
            WeatherSnapshot::new(8.0, 90.0, 0.5, 75.0),
            AirQualitySnapshot::default(),
        ));
        // 100 - 60 - 35 - 15 - 10
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, "매우나쁨");
        assert_eq!(result.breakdown["rain"], -60.0);
        assert_eq!(result.breakdown["humidity"], -35.0);
    }
}
