// ABOUTME: Joint pain risk from daily temperature swing, humidity, and low pressure
// ABOUTME: Graded on the published score, so the top grade means kindest to joints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, RiskGrading, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};

use Cmp::Above;
use Field::{DailySwingOrDefault, Humidity, RainProbability};

/// Joint pain risk table
pub const TABLE: ScoreTable = ScoreTable {
    name: "joint_pain",
    polarity: Polarity::Risk(RiskGrading::OnScore),
    guards: &[],
    checks: &[
        Check {
            name: "daily_swing",
            rungs: &[Rung::new(When::Is(DailySwingOrDefault, Above(10.0)), 30.0)
                .factor("큰 일교차 ({swing}도): 관절 온도 변화 스트레스")],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Above(70.0)), 30.0)
                    .factor("높은 습도 ({humidity}%): 관절 주변 조직 부종 가능"),
                Rung::new(When::Is(Humidity, Above(60.0)), 20.0)
                    .factor("다소 높은 습도 ({humidity}%): 관절 불편감 증가"),
            ],
        },
        Check {
            name: "low_pressure",
            rungs: &[Rung::new(When::Is(RainProbability, Above(50.0)), 20.0)
                .factor("저기압 접근 (강수확률 {rain}%): 관절 내 압력 변화")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(
                80.0,
                GradeLabel::new("좋음", "관절에 좋은 날씨입니다. 가벼운 운동을 권장합니다."),
            ),
            GradeStep::new(60.0, GradeLabel::new("보통", "관절 상태 양호. 무리한 활동은 피하세요.")),
            GradeStep::new(
                40.0,
                GradeLabel::new("주의", "관절통 주의. 보온에 신경 쓰고 스트레칭을 자주 하세요."),
            ),
            GradeStep::new(
                20.0,
                GradeLabel::new(
                    "나쁨",
                    "관절통 위험 높음. 따뜻하게 하고 무리한 활동을 피하세요. 온찜질 권장.",
                ),
            ),
        ],
        GradeLabel::new(
            "매우나쁨",
            "관절통 위험 매우 높음. 보온 필수, 관절 보호대 착용 권장. 필요시 진통제 준비.",
        ),
    ),
    default_factor: "관절통 유발 요인 없음",
    default_tip: "가벼운 스트레칭으로 관절을 풀어주세요",
};

/// Score joint pain risk; the published score is `100 - risk`
#[must_use]
pub fn joint_pain(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    #[test]
    fn damp_swinging_day_hurts() {
        let weather = WeatherSnapshot::new(12.0, 75.0, 2.0, 60.0).with_daily_range(4.0, 17.0);
        let c = Conditions::new(
            weather,
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
        );
        let result = joint_pain(&c);
        assert_eq!(result.risk, Some(80));
        assert_eq!(result.score, 20);
        assert_eq!(result.grade, "나쁨");
        assert!(result.factors[0].contains("13도"));
    }
}
