// ABOUTME: Camping index with a lightning disqualifier ahead of wind, rain, and temperature checks
// ABOUTME: Thunderstorms force score zero and an evacuation instruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Guard, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::{AirGrade, Sky};

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

/// Lightning disqualifier
pub const LIGHTNING: Guard = Guard {
    when: When::Sky(&[Sky::Thunderstorm]),
    factors: &["낙뢰 위험: 캠핑 절대 금지"],
    recommendations: &["즉시 실내로 대피하세요", "차량 내부가 텐트보다 안전합니다"],
    warnings: &["낙뢰는 치명적입니다! 야외 활동 즉시 중단"],
};

/// Camping index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "camping",
    polarity: Polarity::Goodness(100.0),
    guards: &[LIGHTNING],
    checks: &[
        Check {
            name: "storm_risk",
            rungs: &[Rung::new(
                When::All(&[
                    When::Is(RainProbability, AtLeast(70.0)),
                    When::Sky(&[Sky::Overcast, Sky::Rain, Sky::Sleet]),
                ]),
                0.0,
            )
            .factor("뇌우 가능성 있음: 캠핑 주의")
            .warning("갑작스러운 낙뢰 대비 필요, 실내 대피 계획 수립")],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(15.0)), -50.0)
                    .factor("강풍 ({wind}m/s): 텐트 설치 위험, 화재 위험")
                    .warning("강풍 시 텐트 파손/비산 위험! 캠핑 자제 권고")
                    .tip("바람막이 설치 필수, 텐트 고정 철저히"),
                Rung::new(When::Is(WindSpeed, AtLeast(10.0)), -30.0)
                    .factor("바람 강함 ({wind}m/s): 텐트 고정 주의")
                    .tip("텐트 팩 깊이 박기, 가이라인 필수"),
                Rung::new(When::Is(WindSpeed, AtLeast(7.0)), -15.0)
                    .factor("바람 있음 ({wind}m/s)")
                    .tip("텐트 고정 확인"),
                Rung::new(When::Is(WindSpeed, AtLeast(5.0)), -5.0).factor("약한 바람 ({wind}m/s)"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(
                    When::Any(&[
                        When::Is(RainProbability, AtLeast(80.0)),
                        When::Sky(&[Sky::Rain, Sky::Snow, Sky::Sleet]),
                    ]),
                    -40.0,
                )
                .factor("강수 예상 (강수확률 {rain}%): 캠핑 부적합")
                .warning("비/눈 예보 시 캠핑 취소 또는 대피 준비")
                .tip("방수 타프 필수, 침수 위험 지역 피하기"),
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -25.0)
                    .factor("비 가능성 (강수확률 {rain}%)")
                    .tip("타프 설치, 우비 준비"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -10.0)
                    .factor("강수 주의 (강수확률 {rain}%)")
                    .tip("방수 장비 점검"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -30.0)
                    .factor("영하 ({temp}도): 동계 캠핑 장비 필수")
                    .warning("저체온증 위험! 동계용 침낭(-20도 이상) 필요")
                    .tip("핫팩, 난로, 따뜻한 음료 준비"),
                Rung::new(When::Is(Temperature, Below(5.0)), -20.0)
                    .factor("추움 ({temp}도): 방한 장비 필요")
                    .tip("동계 침낭, 두꺼운 매트 권장"),
                Rung::new(When::Is(Temperature, Below(10.0)), -10.0)
                    .factor("쌀쌀함 ({temp}도)")
                    .tip("긴 옷, 여분의 담요 준비"),
                Rung::new(When::Is(Temperature, Above(32.0)), -25.0)
                    .factor("무더위 ({temp}도): 열사병 주의")
                    .warning("폭염 시 그늘 확보, 수분 섭취 필수")
                    .tip("그늘진 사이트 선택, 선풍기/부채 준비"),
                Rung::new(When::Is(Temperature, Above(28.0)), -10.0)
                    .factor("더움 ({temp}도)")
                    .tip("통풍 좋은 텐트, 시원한 음료 준비"),
                Rung::new(When::Is(Temperature, Between(15.0, 25.0)), 5.0)
                    .factor("쾌적한 기온 ({temp}도): 캠핑 최적"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, AtLeast(85.0)), -10.0)
                    .factor("높은 습도 ({humidity}%): 결로 발생, 장비 젖음")
                    .tip("텐트 환기, 제습제 준비"),
                Rung::new(When::Is(Humidity, AtLeast(75.0)), -5.0).factor("습도 높음 ({humidity}%)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[Rung::new(When::Pm25(&[AirGrade::Bad, AirGrade::VeryBad]), -15.0)
                .factor("미세먼지 {pm25_grade}: 야외 활동 불리")
                .tip("마스크 준비, 텐트 내 공기청정기 고려")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "최적", "캠핑하기 좋은 날씨입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "캠핑 가능한 날씨입니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "캠핑 시 주의가 필요합니다")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "캠핑을 미루는 것이 좋습니다")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "캠핑 금지"),
    ),
    default_factor: "캠핑 조건 양호",
    default_tip: "캠핑하기 좋은 날씨입니다! 즐거운 캠핑 되세요.",
};

/// Score camping conditions
#[must_use]
pub fn camping(c: &Conditions) -> ScoreResult {
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
            AirQualitySnapshot::from_values(20.0, 10.0),
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
        )
    }

    #[test]
    fn lightning_overrides_perfect_weather() {
        let weather = WeatherSnapshot::new(20.0, 50.0, 0.0, 0.0).with_sky(Sky::Thunderstorm);
        let result = camping(&at(weather));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, "매우나쁨");
        assert_eq!(result.grade_kr, Some("위험"));
        assert!(result.has_warnings());
        assert!(result.recommendations.iter().any(|r| r.contains("실내로 대피")));
    }

    #[test]
    fn pleasant_evening_scores_full() {
        let result = camping(&at(WeatherSnapshot::new(20.0, 50.0, 2.0, 0.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade_kr, Some("최적"));
    }

    #[test]
    fn storm_risk_warns_without_points() {
        let weather = WeatherSnapshot::new(20.0, 50.0, 2.0, 75.0).with_sky(Sky::Overcast);
        let result = camping(&at(weather));
        assert_eq!(result.breakdown["storm_risk"], 0.0);
        assert_eq!(result.score, 80);
        assert!(result.warnings[0].contains("낙뢰"));
    }
}
