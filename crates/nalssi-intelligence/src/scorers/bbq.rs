// ABOUTME: Barbecue index focused on fire safety: wind first, then rain, temperature, and humidity
// ABOUTME: Very dry air is penalized because sparks spread faster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When, RAINY};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};

use Cmp::{Above, AtLeast, AtMost, Below, Between};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

/// Barbecue index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "bbq",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(12.0)), -50.0)
                    .factor("강풍 ({wind}m/s): 화재 위험 매우 높음")
                    .warning("강풍 시 바베큐 금지! 불씨 비산으로 화재 발생 위험")
                    .tip("실내 그릴 또는 다른 날로 연기"),
                Rung::new(When::Is(WindSpeed, AtLeast(8.0)), -35.0)
                    .factor("바람 강함 ({wind}m/s): 화재 주의")
                    .warning("바람막이 설치 필수, 불꽃 관리 철저히")
                    .tip("바람막이 설치, 소화기 준비"),
                Rung::new(When::Is(WindSpeed, AtLeast(5.0)), -20.0)
                    .factor("바람 있음 ({wind}m/s): 불꽃 흔들림")
                    .tip("그릴 뚜껑 활용, 바람 방향 고려"),
                Rung::new(When::Is(WindSpeed, AtLeast(3.0)), -10.0).factor("약한 바람 ({wind}m/s)"),
                Rung::new(When::Always, 0.0).factor("무풍: 그릴 온도 유지 최적"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(
                    When::Any(&[When::Is(RainProbability, AtLeast(80.0)), When::Sky(RAINY)]),
                    -40.0,
                )
                .factor("비 예상 (강수확률 {rain}%): 바베큐 부적합")
                .warning("비 오면 그릴 운용 어려움, 화상 위험 증가")
                .tip("지붕 있는 장소 또는 다른 날로 연기"),
                Rung::new(When::Is(RainProbability, AtLeast(50.0)), -25.0)
                    .factor("비 가능성 (강수확률 {rain}%)")
                    .tip("타프/차양막 준비, 그릴 커버"),
                Rung::new(When::Is(RainProbability, AtLeast(30.0)), -10.0)
                    .factor("강수 주의 (강수확률 {rain}%)")
                    .tip("우비, 그릴 커버 준비"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(5.0)), -20.0)
                    .factor("추움 ({temp}도): 야외 활동 불편")
                    .tip("핫팩, 난로 준비, 따뜻한 음료"),
                Rung::new(When::Is(Temperature, Below(10.0)), -10.0)
                    .factor("쌀쌀함 ({temp}도)")
                    .tip("겉옷 준비, 그릴 옆에서 따뜻하게"),
                Rung::new(When::Is(Temperature, Above(35.0)), -20.0)
                    .factor("폭염 ({temp}도): 열사병 + 화기 위험")
                    .warning("폭염 + 화기 사용으로 열사병 위험 급증")
                    .tip("그늘 확보, 충분한 수분, 저녁 시간 권장"),
                Rung::new(When::Is(Temperature, Above(30.0)), -10.0)
                    .factor("더움 ({temp}도)")
                    .tip("그늘막 설치, 시원한 음료 준비"),
                Rung::new(When::Is(Temperature, Between(18.0, 28.0)), 10.0)
                    .factor("쾌적한 기온 ({temp}도): 바베큐 최적"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, AtLeast(85.0)), -10.0)
                    .factor("높은 습도 ({humidity}%): 착화 어려울 수 있음")
                    .tip("점화제 충분히 준비"),
                Rung::new(When::Is(Humidity, AtMost(30.0)), -5.0)
                    .factor("매우 건조 ({humidity}%): 화재 확산 주의")
                    .warning("건조한 날씨에 화재 확산 빠름, 물 준비 필수"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::aliased("좋음", "최적", "바베큐하기 좋은 날씨입니다")),
            GradeStep::new(60.0, GradeLabel::aliased("보통", "좋음", "바베큐 가능한 날씨입니다")),
            GradeStep::new(40.0, GradeLabel::aliased("주의", "보통", "화기 사용에 주의하세요")),
            GradeStep::new(20.0, GradeLabel::aliased("나쁨", "주의", "바베큐를 미루는 것이 좋습니다")),
        ],
        GradeLabel::aliased("매우나쁨", "위험", "야외 화기 사용 금지"),
    ),
    default_factor: "바베큐 조건 최적",
    default_tip: "바베큐하기 완벽한 날씨입니다! 맛있는 고기 드세요.",
};

/// Score outdoor barbecue conditions
#[must_use]
pub fn bbq(c: &Conditions) -> ScoreResult {
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
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    #[test]
    fn calm_warm_evening_is_ideal() {
        let result = bbq(&at(WeatherSnapshot::new(24.0, 50.0, 1.0, 0.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.factors[0], "무풍: 그릴 온도 유지 최적");
    }

    #[test]
    fn gale_and_dry_air_warn_about_fire() {
        let result = bbq(&at(WeatherSnapshot::new(24.0, 25.0, 12.0, 0.0)));
        // 100 - 50 + 10 - 5
        assert_eq!(result.score, 55);
        assert_eq!(result.grade, "주의");
        assert_eq!(result.warnings.len(), 2);
    }
}
