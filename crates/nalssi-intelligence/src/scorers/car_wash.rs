// ABOUTME: Car wash suitability weighing today's and tomorrow's rain odds
// ABOUTME: Spring yellow dust and freezing temperatures also cut the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;

use Cmp::{Above, AtLeast, Below};
use Field::{Pm25, RainProbability, RainProbabilityTomorrow, Temperature};

/// Car wash index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "car_wash",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain_today",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -50.0)
                    .factor("오늘 강수확률 {rain}%"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -25.0)
                    .factor("오늘 강수확률 {rain}%"),
            ],
        },
        Check {
            name: "rain_tomorrow",
            rungs: &[
                Rung::new(When::Is(RainProbabilityTomorrow, AtLeast(70.0)), -40.0)
                    .factor("내일 강수확률 {rain_tomorrow}%")
                    .tip("내일 비 오면 헛수고!"),
                Rung::new(When::Is(RainProbabilityTomorrow, AtLeast(50.0)), -25.0)
                    .factor("내일 강수확률 {rain_tomorrow}%"),
                Rung::new(When::Is(RainProbabilityTomorrow, AtLeast(30.0)), -10.0),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), -35.0)
                    .factor("미세먼지 {pm25_grade}")
                    .tip("세차해도 금방 더러워져요"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), -20.0).factor("미세먼지 {pm25_grade}"),
                Rung::new(When::Pm25(&[AirGrade::Good]), 5.0).factor("미세먼지 좋음"),
            ],
        },
        Check {
            name: "yellow_dust",
            rungs: &[Rung::new(
                When::All(&[When::Month(&[3, 4, 5]), When::Is(Pm25, Above(50.0))]),
                -20.0,
            )
            .factor("황사 가능성")
            .tip("봄철 황사 주의")],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -30.0)
                    .factor("기온 {temp}°C")
                    .tip("세차 후 물기 동결 주의!"),
                Rung::new(When::Is(Temperature, Below(5.0)), -15.0).tip("물기 빨리 닦아주세요"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("최적", "세차하기 완벽한 날!")),
            GradeStep::new(60.0, GradeLabel::new("좋음", "세차하기 좋은 날")),
            GradeStep::new(40.0, GradeLabel::new("보통", "세차해도 되지만...")),
            GradeStep::new(20.0, GradeLabel::new("비추", "세차 미루세요")),
        ],
        GradeLabel::new("금지", "세차하지 마세요!"),
    ),
    default_factor: "세차하기 무난한 날씨",
    default_tip: "오전 세차 후 드라이브 추천!",
};

/// Score car wash conditions
#[must_use]
pub fn car_wash(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    #[test]
    fn tomorrow_rain_spoils_the_wash() {
        let weather = WeatherSnapshot::new(15.0, 50.0, 2.0, 0.0).with_rain_tomorrow(80.0);
        let c = Conditions::new(
            weather,
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        );
        let result = car_wash(&c);
        assert_eq!(result.score, 60);
        assert!(result.recommendations.iter().any(|t| t.contains("헛수고")));
    }

    #[test]
    fn yellow_dust_only_in_spring() {
        let weather = WeatherSnapshot::new(15.0, 50.0, 2.0, 0.0);
        let air = AirQualitySnapshot::from_values(90.0, 60.0);
        let spring = Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let autumn = Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(car_wash(&autumn).score - car_wash(&spring).score, 20);
    }
}
