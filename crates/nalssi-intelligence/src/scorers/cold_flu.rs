// ABOUTME: Cold and flu risk from temperature, humidity, temperature swings, and cold wind
// ABOUTME: Risk accumulates from zero; prevention advice is tiered by the final risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{
    clamp_score, Check, Cmp, Conditions, Field, Polarity, RiskGrading, Rung, ScoreTable, When,
};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};

use Cmp::{AtLeast, Below, From};
use Field::{DailySwing, Humidity, Temperature, WindSpeed, YesterdayDelta};

const COLD: When = When::Is(Temperature, Below(10.0));

/// Cold and flu risk table
pub const TABLE: ScoreTable = ScoreTable {
    name: "cold_flu",
    polarity: Polarity::Risk(RiskGrading::OnRisk),
    guards: &[],
    checks: &[
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(-10.0)), 25.0)
                    .factor("극저온 ({temp}°C): 실내 밀집 환경 증가"),
                Rung::new(When::Is(Temperature, Below(0.0)), 35.0)
                    .factor("한파 ({temp}°C): 바이러스 전파 최적 온도대"),
                Rung::new(When::Is(Temperature, Below(5.0)), 32.0)
                    .factor("영하권 ({temp}°C): 바이러스 생존력 강화"),
                Rung::new(When::Is(Temperature, Below(10.0)), 30.0)
                    .factor("쌀쌀함 ({temp}°C): 바이러스 안정성 높음"),
                Rung::new(When::Is(Temperature, Below(15.0)), 22.0)
                    .factor("선선함 ({temp}°C): 환기 부족 주의"),
                Rung::new(When::Is(Temperature, Below(20.0)), 15.0)
                    .factor("온화함 ({temp}°C): 적정 환기 권장"),
                Rung::new(When::Is(Temperature, Below(25.0)), 8.0)
                    .factor("쾌적 ({temp}°C): 양호한 조건"),
                Rung::new(When::Always, 5.0).factor("따뜻함 ({temp}°C): 바이러스 활동 저하"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Below(30.0)), 30.0)
                    .factor("매우 건조 ({humidity}%): 에어로졸 전파 위험 최대")
                    .tip("가습기 사용 권장 (40-60% 유지)"),
                Rung::new(When::Is(Humidity, Below(40.0)), 25.0)
                    .factor("건조 ({humidity}%): 바이러스 에어로졸 안정화")
                    .tip("실내 습도 관리 필요"),
                Rung::new(When::Is(Humidity, From(40.0, 60.0)), 5.0)
                    .factor("적정 습도 ({humidity}%): 호흡기 방어 최적"),
                Rung::new(When::Is(Humidity, From(60.0, 80.0)), 10.0)
                    .factor("높은 습도 ({humidity}%): 환기 필요"),
                Rung::new(When::Always, 15.0).factor("과습 ({humidity}%): 곰팡이 주의, 환기 필수"),
            ],
        },
        Check {
            name: "daily_swing",
            rungs: &[
                Rung::new(When::Is(DailySwing, AtLeast(15.0)), 20.0)
                    .factor("극심한 일교차 ({swing}°C): 면역력 저하 위험")
                    .tip("체온 조절 의류 필수"),
                Rung::new(When::Is(DailySwing, AtLeast(12.0)), 16.0)
                    .factor("큰 일교차 ({swing}°C): 건강 주의"),
                Rung::new(When::Is(DailySwing, AtLeast(10.0)), 12.0)
                    .factor("일교차 주의 ({swing}°C)"),
                Rung::new(When::Is(DailySwing, AtLeast(7.0)), 6.0)
                    .factor("보통 일교차 ({swing}°C)"),
                Rung::new(When::Is(DailySwing, AtLeast(f64::NEG_INFINITY)), 0.0),
                Rung::new(When::Is(YesterdayDelta, AtLeast(8.0)), 18.0)
                    .factor("급격한 기온 변화 ({delta}°C 차이)")
                    .tip("따뜻하게 입고 면역력 관리"),
                Rung::new(When::Is(YesterdayDelta, AtLeast(5.0)), 12.0)
                    .factor("기온 변화 ({delta}°C 차이)"),
                Rung::new(When::Is(YesterdayDelta, AtLeast(0.0)), 3.0),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::All(&[COLD, When::Is(WindSpeed, AtLeast(7.0))]), 15.0)
                    .factor("강한 찬바람 ({wind}m/s): 점막 건조 위험")
                    .tip("마스크/목도리로 호흡기 보호"),
                Rung::new(When::All(&[COLD, When::Is(WindSpeed, AtLeast(5.0))]), 12.0)
                    .factor("찬바람 ({wind}m/s): 체감온도 급락"),
                Rung::new(When::All(&[COLD, When::Is(WindSpeed, AtLeast(3.0))]), 7.0)
                    .factor("바람 ({wind}m/s)"),
                Rung::new(COLD, 2.0),
                Rung::capped(When::Always, WindSpeed, 8.0),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(
                80.0,
                GradeLabel::new("매우높음", "감기/독감 위험이 매우 높습니다. 외출 자제하고 따뜻하게!"),
            ),
            GradeStep::new(60.0, GradeLabel::new("높음", "감기 조심하세요! 손씻기, 마스크 착용 권장")),
            GradeStep::new(40.0, GradeLabel::new("보통", "일반적인 건강 관리로 충분합니다")),
            GradeStep::new(20.0, GradeLabel::new("낮음", "감기 위험이 낮습니다")),
        ],
        GradeLabel::new("매우낮음", "감기 걱정 없는 쾌적한 날씨입니다"),
    ),
    default_factor: "감기 위험 요인 없음",
    default_tip: "규칙적인 생활로 면역력을 유지하세요",
};

const PREVENTION_TIERS: &[(u8, &[&str])] = &[
    (
        40,
        &["손 자주 씻기 (20초 이상)", "실내 환기 (2시간마다 10분)", "충분한 수분 섭취"],
    ),
    (60, &["비타민 C, D 섭취 권장"]),
    (80, &["사람 많은 곳 피하기", "충분한 수면 (7-8시간)"]),
];

/// Score cold and flu risk; the published score is `100 - risk`
#[must_use]
pub fn cold_flu(c: &Conditions) -> ScoreResult {
    let mut tally = TABLE.tally(c);
    let risk = clamp_score(tally.raw);
    for (threshold, tips) in PREVENTION_TIERS {
        if risk >= *threshold {
            for tip in *tips {
                if !tally.recommendations.iter().any(|existing| existing == tip) {
                    tally.recommendations.push((*tip).to_owned());
                }
            }
        }
    }
    TABLE.finish(tally)
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
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn dry_freezing_wind_is_very_high_risk() {
        let weather = WeatherSnapshot::new(-5.0, 25.0, 8.0, 0.0).with_daily_range(-10.0, 6.0);
        let result = cold_flu(&at(weather));
        // 35 + 30 + 20 + 15
        assert_eq!(result.risk, Some(100));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, "매우높음");
        assert!(result.recommendations.iter().any(|r| r == "사람 많은 곳 피하기"));
        assert!(result.recommendations.iter().any(|r| r == "가습기 사용 권장 (40-60% 유지)"));
    }

    #[test]
    fn yesterday_delta_used_without_range() {
        let weather = WeatherSnapshot::new(22.0, 50.0, 2.0, 0.0).with_yesterday_temperature(12.0);
        let result = cold_flu(&at(weather));
        // 8 + 5 + 18 + 2 (capped wind on a warm day)
        assert_eq!(result.risk, Some(33));
        assert_eq!(result.score, 67);
        assert_eq!(result.grade, "낮음");
        assert!(result.factors.iter().any(|f| f.contains("10.0°C 차이")));
    }

    #[test]
    fn no_swing_data_adds_nothing() {
        let result = cold_flu(&at(WeatherSnapshot::new(22.0, 50.0, 2.0, 0.0)));
        assert_eq!(result.breakdown["daily_swing"], 0.0);
        assert_eq!(result.risk, Some(15));
        assert_eq!(result.grade, "매우낮음");
    }
}
