// ABOUTME: Drive index for road trip safety: precipitation, ice, visibility, wind, and extremes
// ABOUTME: Snow stacks on top of the rain check because it is the more dangerous surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When, SNOWY};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::{AirGrade, Sky};

use Cmp::{Above, AtLeast, AtMost};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

const FREEZING: When = When::Is(Temperature, AtMost(0.0));

/// Drive index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "drive",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain",
            rungs: &[
                Rung::new(
                    When::Any(&[
                        When::Is(RainProbability, AtLeast(80.0)),
                        When::Sky(&[Sky::Rain, Sky::Sleet, Sky::Shower]),
                    ]),
                    -40.0,
                )
                .factor("강수 예상 (강수확률 {rain}%): 제동거리 증가, 시야 저하")
                .warning("비 오는 날 운전: 제동거리 1.5배 증가, 감속 운행 필수")
                .tip("와이퍼 상태 점검, 서행 운전"),
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -25.0)
                    .factor("비 가능성 (강수확률 {rain}%)")
                    .tip("우산 및 와이퍼 점검"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -10.0)
                    .factor("강수 주의 (강수확률 {rain}%)"),
            ],
        },
        Check {
            name: "snow",
            rungs: &[Rung::new(When::Sky(SNOWY), -50.0)
                .factor("적설 예상: 미끄럼 사고 위험 매우 높음")
                .warning("눈길 운전: 급제동/급가속 금지, 차간거리 2배 유지")
                .tip("스노우 체인 또는 스노우 타이어 필수")],
        },
        Check {
            name: "road_ice",
            rungs: &[
                Rung::new(
                    When::All(&[
                        FREEZING,
                        When::Any(&[
                            When::Is(RainProbability, Above(0.0)),
                            When::Is(Humidity, AtLeast(80.0)),
                        ]),
                    ]),
                    -35.0,
                )
                .factor("결빙 위험 (기온 {temp}도, 습도 {humidity}%)")
                .warning("블랙아이스 주의! 교량/터널 출입구/그늘진 도로 특히 위험")
                .tip("새벽/야간 운전 자제, 급제동 금지"),
                Rung::new(FREEZING, -20.0)
                    .factor("영하 기온 ({temp}도): 도로 결빙 가능")
                    .tip("급제동/급가속 자제"),
                Rung::new(
                    When::All(&[
                        When::Is(Temperature, AtMost(4.0)),
                        When::Is(Humidity, AtLeast(80.0)),
                    ]),
                    -15.0,
                )
                .factor("결빙 주의 (기온 {temp}도, 습도 높음)"),
            ],
        },
        Check {
            name: "visibility",
            rungs: &[
                Rung::new(
                    When::Any(&[
                        When::Sky(&[Sky::Fog]),
                        When::All(&[
                            When::Sky(&[Sky::Overcast]),
                            When::Is(Humidity, AtLeast(95.0)),
                        ]),
                    ]),
                    -30.0,
                )
                .factor("안개/저시정: 시야 확보 어려움")
                .warning("안개 시 전조등 켜고 서행, 비상등 금지")
                .tip("안개등 사용, 차간거리 충분히 확보"),
                Rung::new(
                    When::All(&[
                        When::Is(Humidity, AtLeast(90.0)),
                        When::Sky(&[Sky::Overcast, Sky::PartlyCloudy]),
                    ]),
                    -15.0,
                )
                .factor("시정 저하 가능성 (높은 습도)"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(15.0)), -25.0)
                    .factor("강풍 ({wind}m/s): 차량 흔들림 심각")
                    .warning("강풍 시 대형 차량/트레일러 전복 위험, 핸들 꽉 잡기")
                    .tip("고속도로 대신 국도 이용 권장"),
                Rung::new(When::Is(WindSpeed, AtLeast(10.0)), -15.0)
                    .factor("바람 강함 ({wind}m/s): 차선 이탈 주의")
                    .tip("급핸들 조작 자제, 옆차선 대형차 주의"),
                Rung::new(When::Is(WindSpeed, AtLeast(7.0)), -5.0).factor("바람 있음 ({wind}m/s)"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, AtLeast(35.0)), -15.0)
                    .factor("폭염 ({temp}도): 타이어 펑크/과열 위험")
                    .tip("타이어 공기압 점검, 냉각수 확인"),
                Rung::new(When::Is(Temperature, AtMost(-10.0)), -15.0)
                    .factor("혹한 ({temp}도): 배터리/시동 문제 가능")
                    .tip("배터리 상태 점검, 예열 충분히"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[Rung::new(When::Pm10(&[AirGrade::Bad, AirGrade::VeryBad]), -15.0)
                .factor("미세먼지 {pm10_grade}: 시야 저하")
                .tip("외기 차단, 에어컨 내부순환 모드")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "매우좋음", "드라이브하기 좋은 날씨입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "무난한 드라이브 날씨입니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "운전 시 주의가 필요합니다")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "장거리 운전은 미루세요")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "운전을 자제하세요"),
    ),
    default_factor: "도로 주행 조건 양호",
    default_tip: "쾌적한 드라이브 날씨입니다. 안전 운전하세요!",
};

/// Score road trip conditions
#[must_use]
pub fn drive(c: &Conditions) -> ScoreResult {
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
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        )
    }

    #[test]
    fn sleet_counts_as_rain_and_snow() {
        let weather = WeatherSnapshot::new(1.0, 70.0, 2.0, 60.0).with_sky(Sky::Sleet);
        let result = drive(&at(weather));
        // 100 - 40 - 50
        assert_eq!(result.score, 10);
        assert_eq!(result.grade, "매우나쁨");
        assert_eq!(result.grade_kr, Some("위험"));
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn calm_day_is_top_grade() {
        let result = drive(&at(WeatherSnapshot::new(18.0, 50.0, 2.0, 0.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade_kr, Some("매우좋음"));
        assert_eq!(result.factors, vec!["도로 주행 조건 양호".to_owned()]);
    }

    #[test]
    fn freezing_and_damp_warns_about_black_ice() {
        let result = drive(&at(WeatherSnapshot::new(-2.0, 60.0, 2.0, 10.0)));
        assert_eq!(result.score, 65);
        assert!(result.warnings[0].contains("블랙아이스"));
    }
}
