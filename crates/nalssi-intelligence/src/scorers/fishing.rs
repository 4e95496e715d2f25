// ABOUTME: Fishing index starting from a neutral 70 and rewarding falling pressure and cloud cover
// ABOUTME: Storm-force wind disqualifies the outing before any other rule runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Guard, Polarity, Rung, ScoreTable, When, RAINY};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::Sky;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{RainProbability, Temperature, WindSpeed};

/// Storm-force wind disqualifier
pub const STORM_WIND: Guard = Guard {
    when: When::Is(WindSpeed, AtLeast(14.0)),
    factors: &["폭풍급 바람 ({wind}m/s): 낚시 금지"],
    recommendations: &["낚시 취소하세요. 안전이 최우선입니다."],
    warnings: &["풍랑주의보급 바람! 선박 출항 금지, 갯바위 위험"],
};

/// Fishing index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "fishing",
    polarity: Polarity::Goodness(70.0),
    guards: &[STORM_WIND],
    checks: &[
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(10.0)), -35.0)
                    .factor("강풍 ({wind}m/s): 소형 선박 위험")
                    .warning("소형 선박 조업 주의보급, 갯바위 낚시 위험")
                    .tip("방파제 또는 민물 낚시 권장"),
                Rung::new(When::Is(WindSpeed, AtLeast(7.0)), -20.0)
                    .factor("바람 강함 ({wind}m/s): 캐스팅 어려움")
                    .tip("바람 방향 고려하여 포인트 선정"),
                Rung::new(When::Is(WindSpeed, AtLeast(5.0)), -10.0)
                    .factor("약간의 바람 ({wind}m/s)"),
                Rung::new(When::Is(WindSpeed, Below(2.0)), -5.0)
                    .factor("무풍: 수면 정적, 입질 저조 가능"),
            ],
        },
        Check {
            name: "pressure",
            rungs: &[
                Rung::new(When::Is(RainProbability, Between(40.0, 70.0)), 10.0)
                    .factor("기압 하강 중 (강수확률 {rain}%): 물고기 활성 증가!")
                    .tip("입질 좋은 타이밍, 적극적으로 노려보세요"),
                Rung::new(When::Is(RainProbability, Above(70.0)), -10.0)
                    .factor("비 예상 (강수확률 {rain}%): 장비 보호 필요")
                    .tip("우비, 방수 가방 필수"),
            ],
        },
        Check {
            name: "sky",
            rungs: &[
                Rung::new(When::Sky(&[Sky::Overcast, Sky::PartlyCloudy]), 10.0)
                    .factor("흐린 하늘 ({sky}): 포식어 활동 증가")
                    .tip("루어 낚시 적합, 큰 물고기 기대"),
                Rung::new(When::Sky(&[Sky::Clear]), 5.0)
                    .factor("맑은 날씨: 쾌적한 낚시 환경")
                    .tip("자외선 차단, 그늘 확보"),
                Rung::new(When::Sky(&[Sky::Shower]), -15.0)
                    .factor("소나기 예상: 급작스러운 비 주의")
                    .warning("갑작스러운 소나기 대비 대피처 확인"),
                Rung::new(When::Sky(RAINY), -5.0)
                    .factor("가벼운 비: 오히려 입질 좋을 수 있음")
                    .tip("방수 장비 착용, 미끼 효과 기대"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -25.0)
                    .factor("영하 ({temp}도): 혹한 낚시")
                    .warning("동상 주의! 방한 철저히")
                    .tip("핫팩, 보온병, 방한장갑 필수"),
                Rung::new(When::Is(Temperature, Below(5.0)), -15.0)
                    .factor("추움 ({temp}도): 어류 활동 저하")
                    .tip("깊은 수심 노리기, 저활성 미끼 사용"),
                Rung::new(When::Is(Temperature, Above(30.0)), -15.0)
                    .factor("무더위 ({temp}도): 열사병 주의")
                    .warning("그늘 확보, 수분 섭취 필수")
                    .tip("이른 아침 또는 저녁 낚시 권장"),
                Rung::new(When::Is(Temperature, Above(25.0)), -5.0)
                    .factor("더움 ({temp}도)")
                    .tip("얕은 수심 그늘진 곳 탐색"),
                Rung::new(When::Is(Temperature, Between(15.0, 22.0)), 5.0)
                    .factor("쾌적한 기온 ({temp}도): 최적의 낚시 컨디션"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "최적", "낚시하기 좋은 날입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "무난한 낚시 날씨입니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "낚시 시 주의가 필요합니다")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "낚시를 미루는 것이 좋습니다")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "낚시 금지"),
    ),
    default_factor: "낚시 조건 양호",
    default_tip: "낚시하기 좋은 날입니다! 대어를 기대하세요.",
};

/// Score fishing conditions
#[must_use]
pub fn fishing(c: &Conditions) -> ScoreResult {
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
            NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
        )
    }

    #[test]
    fn storm_wind_disqualifies() {
        let result = fishing(&at(WeatherSnapshot::new(18.0, 50.0, 14.0, 50.0)));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade_kr, Some("위험"));
        assert_eq!(result.factors, vec!["폭풍급 바람 (14m/s): 낚시 금지".to_owned()]);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn overcast_pressure_drop_is_ideal() {
        let weather = WeatherSnapshot::new(18.0, 60.0, 3.0, 50.0).with_sky(Sky::Overcast);
        let result = fishing(&at(weather));
        // 70 + 10 + 10 + 5
        assert_eq!(result.score, 95);
        assert_eq!(result.grade_kr, Some("최적"));
    }

    #[test]
    fn shower_costs_more_than_light_rain() {
        let shower = fishing(&at(WeatherSnapshot::new(18.0, 60.0, 3.0, 0.0).with_sky(Sky::Shower)));
        let rain = fishing(&at(WeatherSnapshot::new(18.0, 60.0, 3.0, 0.0).with_sky(Sky::Rain)));
        assert_eq!(shower.score, 60);
        assert_eq!(rain.score, 70);
        assert!(shower.has_warnings());
    }
}
