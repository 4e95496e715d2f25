// ABOUTME: Running index with an estimated-AQI disqualifier and a heat index ladder
// ABOUTME: Temperature and humidity combine into a simple heat index for heatstroke risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Guard, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{EstimatedAqi, HeatIndex, Humidity, RainProbability, Temperature, UvIndex, WindSpeed};

/// Estimated AQI above which outdoor running is refused
pub const AQI_CEILING: f64 = 150.0;

/// Hazardous air disqualifier
pub const HAZARDOUS_AIR: Guard = Guard {
    when: When::Any(&[
        When::Is(EstimatedAqi, Above(AQI_CEILING)),
        When::Pm25(&[AirGrade::VeryBad]),
    ]),
    factors: &["미세먼지 매우나쁨 (PM2.5: {pm25}ug/m3): 야외 운동 금지"],
    recommendations: &["실내 러닝머신 또는 홈트레이닝으로 대체하세요"],
    warnings: &["EPA 기준 AQI 150 초과! 야외 격렬한 운동 시 폐 손상 위험"],
};

/// Running index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "running",
    polarity: Polarity::Goodness(100.0),
    guards: &[HAZARDOUS_AIR],
    checks: &[
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(
                    When::Any(&[When::Pm25(&[AirGrade::Bad]), When::Is(EstimatedAqi, Above(100.0))]),
                    -30.0,
                )
                .factor("미세먼지 나쁨 (PM2.5: {pm25}ug/m3): 운동 강도 낮추기")
                .warning("호흡량 증가로 미세먼지 흡입 증가, 가벼운 조깅만 권장")
                .tip("마스크 착용 러닝 또는 실내 운동 권장"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), -10.0)
                    .factor("미세먼지 보통 (PM2.5: {pm25}ug/m3)")
                    .tip("장시간 러닝 피하기"),
                Rung::new(When::Pm25(&[AirGrade::Good]), 0.0)
                    .factor("미세먼지 좋음 (PM2.5: {pm25}ug/m3): 호흡 쾌적"),
            ],
        },
        Check {
            name: "heat",
            rungs: &[
                Rung::new(
                    When::Any(&[When::Is(Temperature, Above(32.0)), When::Is(HeatIndex, Above(40.0))]),
                    -40.0,
                )
                .factor("폭염 ({temp}도, 습도 {humidity}%): 열사병 위험 매우 높음")
                .warning("열사병 위험! 야외 러닝 절대 자제, 실내 운동 권장"),
                Rung::new(
                    When::Any(&[When::Is(Temperature, Above(28.0)), When::Is(HeatIndex, Above(35.0))]),
                    -25.0,
                )
                .factor("더움 ({temp}도, 습도 {humidity}%): 열사병 주의")
                .warning("충분한 수분 섭취, 이른 아침/저녁 시간 선택")
                .tip("10-15분마다 물 마시기, 그늘 코스 선택"),
                Rung::new(When::Is(Temperature, Above(25.0)), -15.0)
                    .factor("다소 더움 ({temp}도)")
                    .tip("수분 보충 자주, 강도 조절"),
                Rung::new(When::Is(Temperature, Below(0.0)), -20.0)
                    .factor("영하 ({temp}도): 동상, 호흡기 자극")
                    .warning("찬 공기 흡입 시 기관지 자극 주의")
                    .tip("넥워머로 호흡기 보호, 레이어드 착용"),
                Rung::new(When::Is(Temperature, Below(5.0)), -10.0)
                    .factor("추움 ({temp}도)")
                    .tip("워밍업 충분히, 보온 레이어"),
                Rung::new(When::Is(Temperature, Between(10.0, 18.0)), 10.0)
                    .factor("최적 기온 ({temp}도): 러닝 최고의 컨디션"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, AtLeast(80.0)), -15.0)
                    .factor("높은 습도 ({humidity}%): 땀 증발 어려움")
                    .tip("속건 소재 착용, 페이스 조절"),
                Rung::new(When::Is(Humidity, AtLeast(70.0)), -10.0).factor("습도 높음 ({humidity}%)"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(70.0)), -20.0)
                    .factor("비 예상 (강수확률 {rain}%): 미끄럼 주의")
                    .tip("트레일 러닝 자제, 방수 재킷 착용"),
                Rung::new(When::Is(RainProbability, AtLeast(40.0)), -10.0)
                    .factor("비 가능성 (강수확률 {rain}%)"),
            ],
        },
        Check {
            name: "uv",
            rungs: &[
                Rung::new(When::Is(UvIndex, AtLeast(8.0)), -10.0)
                    .factor("자외선 매우 높음 (지수 {uv})")
                    .warning("강한 자외선! 11-15시 피하기")
                    .tip("선크림 SPF50+, 모자, 선글라스"),
                Rung::new(When::Is(UvIndex, AtLeast(6.0)), -5.0)
                    .factor("자외선 높음 (지수 {uv})")
                    .tip("선크림, 모자 권장"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(10.0)), -15.0)
                    .factor("강풍 ({wind}m/s): 러닝 저항 증가")
                    .tip("바람 등지고 출발, 마무리는 맞바람으로"),
                Rung::new(When::Is(WindSpeed, AtLeast(6.0)), -5.0).factor("바람 있음 ({wind}m/s)"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "최적", "달리기 좋은 날씨입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "가볍게 달리기 괜찮습니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "강도를 낮춰 달리세요")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "실내 운동을 권장합니다")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "야외 러닝 금지"),
    ),
    default_factor: "러닝 조건 최적",
    default_tip: "러닝하기 완벽한 날씨입니다! 즐거운 러닝 되세요.",
};

/// Score outdoor running conditions
#[must_use]
pub fn running(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
}
