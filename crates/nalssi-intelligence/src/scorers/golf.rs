// ABOUTME: Golf index weighing wind against ball flight plus rain, temperature, UV, and humidity
// ABOUTME: Optional fine dust penalty applies only when the PM2.5 grade is known to be bad
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When, RAINY};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::AirGrade;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Humidity, RainProbability, Temperature, UvIndex, WindSpeed};

/// Golf index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "golf",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(12.0)), -40.0)
                    .factor("강풍 ({wind}m/s): 정상적인 플레이 불가")
                    .warning("강풍으로 볼 컨트롤 불가능! 골프 취소 권장"),
                Rung::new(When::Is(WindSpeed, AtLeast(9.0)), -30.0)
                    .factor("강한 바람 ({wind}m/s): 볼 궤적 큰 편차")
                    .warning("클럽 선택 2-3클럽 조정 필요")
                    .tip("낮은 탄도 샷 구사, 바람 방향 필수 확인"),
                Rung::new(When::Is(WindSpeed, AtLeast(6.0)), -20.0)
                    .factor("바람 있음 ({wind}m/s): 볼 편차 발생")
                    .tip("풍향 고려하여 에임 조정"),
                Rung::new(When::Is(WindSpeed, AtLeast(4.0)), -10.0)
                    .factor("약한 바람 ({wind}m/s)")
                    .tip("바람 방향 체크 습관화"),
                Rung::new(When::Is(WindSpeed, Below(2.0)), 0.0).factor("무풍: 최적의 샷 컨디션"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(
                    When::Any(&[When::Is(RainProbability, AtLeast(80.0)), When::Sky(RAINY)]),
                    -40.0,
                )
                .factor("비 예상 (강수확률 {rain}%): 플레이 불리")
                .warning("비 오면 그립 미끄러움, 비거리 10-15% 감소")
                .tip("우산, 타월 여분 준비, 레인 글러브 착용"),
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -25.0)
                    .factor("비 가능성 (강수확률 {rain}%)")
                    .tip("우비, 방수 모자 준비"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -10.0)
                    .factor("강수 주의 (강수확률 {rain}%)"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(10.0)), -25.0)
                    .factor("추움 ({temp}도): 볼 압축률 저하, 비거리 감소")
                    .warning("추위로 근육 경직 주의, 워밍업 필수")
                    .tip("핫팩, 따뜻한 음료, 레이어드 착용"),
                Rung::new(When::Is(Temperature, Below(15.0)), -15.0)
                    .factor("쌀쌀함 ({temp}도)")
                    .tip("워밍업 충분히, 방풍 자켓"),
                Rung::new(When::Is(Temperature, Above(32.0)), -25.0)
                    .factor("폭염 ({temp}도): 체력 소모 심각")
                    .warning("열사병 주의! 수분 섭취 필수")
                    .tip("쿨링 타월, 전해질 음료, 그늘 휴식"),
                Rung::new(When::Is(Temperature, Above(28.0)), -10.0)
                    .factor("더움 ({temp}도)")
                    .tip("수분 보충 자주, 양산/모자 착용"),
                Rung::new(When::Is(Temperature, Between(18.0, 26.0)), 5.0)
                    .factor("쾌적한 기온 ({temp}도): 골프 최적 컨디션"),
            ],
        },
        Check {
            name: "uv",
            rungs: &[
                Rung::new(When::Is(UvIndex, AtLeast(8.0)), -15.0)
                    .factor("자외선 매우 높음 (지수 {uv})")
                    .warning("강한 자외선! 피부/눈 보호 필수")
                    .tip("선크림 SPF50+, 선글라스, 모자 필수"),
                Rung::new(When::Is(UvIndex, AtLeast(6.0)), -10.0)
                    .factor("자외선 높음 (지수 {uv})")
                    .tip("선크림, 모자 착용 권장"),
                Rung::new(When::Is(UvIndex, AtLeast(3.0)), -5.0).factor("자외선 보통 (지수 {uv})"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, AtLeast(80.0)), -10.0)
                    .factor("높은 습도 ({humidity}%): 그립 미끄러움")
                    .tip("그립 타월 자주 사용, 글러브 여분 준비"),
                Rung::new(When::Is(Humidity, AtLeast(70.0)), -5.0).factor("습도 높음 ({humidity}%)"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[Rung::new(When::Pm25(&[AirGrade::Bad, AirGrade::VeryBad]), -15.0)
                .factor("미세먼지 {pm25_grade}: 호흡기 주의")
                .tip("마스크 준비, 격렬한 움직임 자제")],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "최적", "라운딩하기 좋은 날씨입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "무난한 라운딩 날씨입니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "라운딩 시 주의가 필요합니다")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "라운딩을 미루는 것이 좋습니다")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "라운딩 취소를 권장합니다"),
    ),
    default_factor: "골프 조건 최적",
    default_tip: "골프하기 완벽한 날씨입니다! 좋은 스코어 기대하세요.",
};

/// Score golf conditions
#[must_use]
pub fn golf(c: &Conditions) -> ScoreResult {
    TABLE.evaluate(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(weather: WeatherSnapshot, air: AirQualitySnapshot) -> Conditions {
        Conditions::new(weather, air, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap())
    }

    #[test]
    fn calm_mild_day_is_ideal() {
        let weather = WeatherSnapshot::new(22.0, 50.0, 1.0, 0.0).with_uv_index(2);
        let result = golf(&at(weather, AirQualitySnapshot::from_values(20.0, 10.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.breakdown["wind"], 0.0);
        assert!(result.factors.iter().any(|f| f.starts_with("무풍")));
        assert_eq!(result.recommendations[0], "골프하기 완벽한 날씨입니다! 좋은 스코어 기대하세요.");
    }

    #[test]
    fn strong_wind_and_dust_stack() {
        let weather = WeatherSnapshot::new(22.0, 50.0, 12.0, 0.0).with_uv_index(2);
        let result = golf(&at(weather, AirQualitySnapshot::from_values(100.0, 50.0)));
        // 100 - 40 + 5 - 15
        assert_eq!(result.score, 50);
        assert_eq!(result.grade_kr, Some("보통"));
    }

    #[test]
    fn unknown_dust_is_not_penalized() {
        let weather = WeatherSnapshot::new(22.0, 50.0, 1.0, 0.0).with_uv_index(2);
        let result = golf(&at(weather, AirQualitySnapshot::unavailable()));
        assert_eq!(result.breakdown["air_quality"], 0.0);
    }
}
