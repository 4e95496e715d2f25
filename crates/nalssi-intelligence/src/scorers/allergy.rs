// ABOUTME: Allergy risk from fine dust, seasonal pollen, spring yellow dust, and dry air
// ABOUTME: Season comes from the date unless the caller pins one explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, RiskGrading, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use crate::season::Season;
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;
use serde::Serialize;

use Cmp::{AtLeast, Below};
use Field::{Humidity, WindSpeed};

const SPRING: When = When::Season(&[Season::Spring]);

const HIGH_DUST: When = When::All(&[
    SPRING,
    When::Is(WindSpeed, AtLeast(6.0)),
    When::Is(Humidity, Below(40.0)),
]);

/// Allergy risk table
pub const TABLE: ScoreTable = ScoreTable {
    name: "allergy",
    polarity: Polarity::Risk(RiskGrading::OnRisk),
    guards: &[],
    checks: &[
        Check {
            name: "fine_dust",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), 40.0)
                    .factor("초미세먼지 매우나쁨 ({pm25}㎍/㎥)")
                    .tip("외출 자제, 마스크 필수 (KF94)"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), 30.0)
                    .factor("초미세먼지 나쁨 ({pm25}㎍/㎥)")
                    .tip("마스크 착용 권장"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), 15.0)
                    .factor("초미세먼지 보통 ({pm25}㎍/㎥)"),
                Rung::new(When::Pm25(&[AirGrade::Good]), 5.0).factor("초미세먼지 좋음"),
                Rung::new(When::Always, 5.0).factor("초미세먼지 측정값 없음"),
            ],
        },
        Check {
            name: "pollen",
            rungs: &[
                Rung::new(SPRING, 25.0)
                    .factor("봄철 수목 꽃가루 시즌")
                    .tip("화분증 주의, 외출 후 세안/양치"),
                Rung::new(When::Season(&[Season::Autumn]), 22.0)
                    .factor("가을철 잡초 꽃가루 시즌")
                    .tip("잡초 꽃가루 주의"),
                Rung::new(When::Season(&[Season::Summer]), 10.0).factor("잔디 꽃가루 (약함)"),
                Rung::new(When::Always, 5.0).factor("꽃가루 시즌 아님"),
            ],
        },
        Check {
            name: "yellow_dust",
            rungs: &[
                Rung::new(HIGH_DUST, 20.0)
                    .factor("황사 가능성 높음")
                    .tip("외출 시 보안경, 마스크 착용"),
                Rung::new(When::All(&[SPRING, When::Is(WindSpeed, AtLeast(4.0))]), 12.0)
                    .factor("황사 주의"),
                Rung::new(SPRING, 5.0),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Below(30.0)), 10.0)
                    .factor("매우 건조: 알레르기 증상 악화")
                    .tip("가습기 사용, 물 자주 마시기"),
                Rung::new(When::Is(Humidity, Below(40.0)), 6.0).factor("건조함"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("매우높음", "알레르기 환자는 외출 자제")),
            GradeStep::new(60.0, GradeLabel::new("높음", "알레르기 약 복용, 마스크 착용")),
            GradeStep::new(40.0, GradeLabel::new("보통", "민감군 주의 필요")),
            GradeStep::new(20.0, GradeLabel::new("낮음", "대부분 양호")),
        ],
        GradeLabel::new("매우낮음", "알레르기 걱정 없음"),
    ),
    default_factor: "알레르기 유발 요인 적음",
    default_tip: "외출 후 손 씻기",
};

/// Allergy result with the season and its main allergens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllergyReport {
    /// Uniform score result; `risk` carries the raw risk
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Season the pollen check used
    pub season: Season,
    /// Allergens in the air this season
    pub main_allergens: Vec<&'static str>,
}

fn allergens(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &["삼나무", "소나무", "자작나무", "참나무"],
        Season::Autumn => &["돼지풀", "쑥", "환삼덩굴"],
        Season::Summer => &["잔디"],
        Season::Winter => &[],
    }
}

/// Score allergy risk; the published score is `100 - risk`
#[must_use]
pub fn allergy(c: &Conditions) -> AllergyReport {
    let season = c.season();
    let mut main_allergens = allergens(season).to_vec();
    if HIGH_DUST.holds(c) {
        main_allergens.push("황사(모래먼지)");
    }
    AllergyReport {
        result: TABLE.evaluate(c),
        season,
        main_allergens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    #[test]
    fn windy_dry_spring_day_adds_yellow_dust() {
        let c = Conditions::new(
            WeatherSnapshot::new(15.0, 25.0, 7.0, 0.0),
            AirQualitySnapshot::from_values(90.0, 40.0),
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        );
        let report = allergy(&c);
        // 30 + 25 + 20 + 10
        assert_eq!(report.result.risk, Some(85));
        assert_eq!(report.result.score, 15);
        assert_eq!(report.result.grade, "매우높음");
        assert_eq!(report.season, Season::Spring);
        assert!(report.main_allergens.contains(&"황사(모래먼지)"));
    }

    #[test]
    fn explicit_season_overrides_date() {
        let c = Conditions::new(
            WeatherSnapshot::new(15.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::unavailable(),
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        )
        .with_season(Season::Winter);
        let report = allergy(&c);
        assert_eq!(report.result.risk, Some(10));
        assert_eq!(report.result.grade, "매우낮음");
        assert!(report.main_allergens.is_empty());
    }
}
