// ABOUTME: Migraine risk from approaching low pressure, humidity, daily swing, and overcast skies
// ABOUTME: Graded on the published score, so the top grade means lowest risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, RiskGrading, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::Sky;

use Cmp::Above;
use Field::{DailySwingOrDefault, Humidity, RainProbability};

/// Migraine risk table
pub const TABLE: ScoreTable = ScoreTable {
    name: "migraine",
    polarity: Polarity::Risk(RiskGrading::OnScore),
    guards: &[],
    checks: &[
        Check {
            name: "low_pressure",
            rungs: &[Rung::new(When::Is(RainProbability, Above(60.0)), 40.0)
                .factor("저기압 접근 (강수확률 {rain}%): 기압 하락으로 편두통 유발 가능")],
        },
        Check {
            name: "humidity",
            rungs: &[Rung::new(When::Is(Humidity, Above(70.0)), 20.0)
                .factor("높은 습도 ({humidity}%): 두통 악화 요인")],
        },
        Check {
            name: "daily_swing",
            rungs: &[Rung::new(When::Is(DailySwingOrDefault, Above(10.0)), 20.0)
                .factor("큰 일교차 ({swing}도): 혈관 수축/확장 반복")],
        },
        Check {
            name: "sky",
            rungs: &[Rung::new(
                When::Sky(&[Sky::Overcast, Sky::Rain, Sky::Snow, Sky::Shower]),
                20.0,
            )
            .factor("흐린 날씨 ({sky}): 저기압 영향")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(
                80.0,
                GradeLabel::new("좋음", "편두통 위험이 낮은 날씨입니다. 평소처럼 활동하세요."),
            ),
            GradeStep::new(
                60.0,
                GradeLabel::new("보통", "편두통에 민감하신 분은 진통제를 미리 준비하세요."),
            ),
            GradeStep::new(
                40.0,
                GradeLabel::new(
                    "주의",
                    "편두통 위험 주의. 충분한 수분 섭취와 규칙적인 식사를 권장합니다.",
                ),
            ),
            GradeStep::new(
                20.0,
                GradeLabel::new("나쁨", "편두통 위험 높음. 격렬한 활동을 피하고 휴식을 취하세요."),
            ),
        ],
        GradeLabel::new(
            "매우나쁨",
            "편두통 위험 매우 높음. 가능하면 조용하고 어두운 곳에서 휴식하세요. 필요시 약 복용.",
        ),
    ),
    default_factor: "편두통 유발 요인 없음",
    default_tip: "규칙적인 수면과 식사를 유지하세요",
};

/// Score migraine risk; the published score is `100 - risk`
#[must_use]
pub fn migraine(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
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
            NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
        )
    }

    #[test]
    fn rainy_humid_day_is_high_risk() {
        let weather = WeatherSnapshot::new(24.0, 85.0, 2.0, 80.0)
            .with_sky(Sky::Rain)
            .with_daily_range(20.0, 27.0);
        let result = migraine(&at(weather));
        assert_eq!(result.risk, Some(80));
        assert_eq!(result.score, 20);
        assert_eq!(result.grade, "나쁨");
        assert_eq!(result.factors.len(), 3);
    }

    #[test]
    fn unknown_range_uses_placeholder_swing() {
        let result = migraine(&at(WeatherSnapshot::new(24.0, 50.0, 2.0, 0.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, "좋음");
        assert_eq!(result.factors, vec!["편두통 유발 요인 없음".to_owned()]);
    }
}
