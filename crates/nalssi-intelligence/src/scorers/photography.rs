// ABOUTME: Photography index from sky clarity, rain odds, and air clarity via humidity
// ABOUTME: Always lists golden and blue hour windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::Sky;
use serde::Serialize;

use Cmp::{Above, AtMost, Below, Between, From};
use Field::{Humidity, RainProbability};

/// Photography index table
pub const TABLE: ScoreTable = ScoreTable {
    name: "photography",
    polarity: Polarity::Goodness(0.0),
    guards: &[],
    checks: &[
        Check {
            name: "sky",
            rungs: &[
                Rung::new(When::Sky(&[Sky::Clear]), 50.0).factor("맑은 하늘 - 선명한 사진 촬영 최적"),
                Rung::new(When::Sky(&[Sky::PartlyCloudy]), 30.0)
                    .factor("구름 많음 - 드라마틱한 하늘 연출 가능"),
                Rung::new(When::Sky(&[Sky::Overcast]), 10.0)
                    .factor("흐림 - 소프트 라이팅, 인물사진 적합"),
                Rung::new(When::Always, 5.0).factor("{sky} - 촬영 조건 불리"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, Below(20.0)), 30.0).factor("강수 걱정 없음"),
                Rung::new(When::Is(RainProbability, Below(40.0)), 20.0).factor("비 가능성 낮음"),
                Rung::new(When::Is(RainProbability, Below(60.0)), 10.0)
                    .factor("비 올 수 있음 - 방수 커버 준비")
                    .tip("카메라 방수 커버를 챙기세요"),
                Rung::new(When::Always, 0.0)
                    .factor("비 예상 - 실내 촬영 권장")
                    .tip("실내 촬영 권장"),
            ],
        },
        Check {
            name: "humidity",
            rungs: &[
                Rung::new(When::Is(Humidity, Between(40.0, 70.0)), 20.0)
                    .factor("적정 습도 - 공기 선명도 좋음"),
                Rung::new(
                    When::Any(&[
                        When::Is(Humidity, From(30.0, 40.0)),
                        When::All(&[When::Is(Humidity, Above(70.0)), When::Is(Humidity, AtMost(80.0))]),
                    ]),
                    10.0,
                )
                .factor("습도 보통"),
                Rung::new(When::Is(Humidity, Below(30.0)), 0.0)
                    .factor("건조함 - 먼지 주의")
                    .tip("렌즈 먼지를 자주 닦아주세요"),
                Rung::new(When::Always, 0.0)
                    .factor("습함 - 렌즈 김 서림 주의")
                    .tip("렌즈 김 서림에 대비해 극세사 천을 챙기세요"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("좋음", "야외 촬영 적합")),
            GradeStep::new(60.0, GradeLabel::new("보통", "야외 촬영 적합")),
            GradeStep::new(40.0, GradeLabel::new("주의", "촬영 가능하나 주의 필요")),
            GradeStep::new(20.0, GradeLabel::new("나쁨", "실내 촬영 권장")),
        ],
        GradeLabel::new("매우나쁨", "실내 촬영 권장"),
    ),
    default_factor: "촬영하기 무난한 날씨",
    default_tip: "골든아워를 노려보세요",
};

const BEST_TIMES: &[&str] = &[
    "일출 후 1시간 (골든아워): 따뜻한 색감, 긴 그림자",
    "일몰 전 1시간 (골든아워): 황금빛 조명, 드라마틱한 하늘",
    "블루아워 (일몰 직후): 파란빛 하늘, 도시 야경",
];

/// Photography result with the best light windows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotographyReport {
    /// Uniform score result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Golden and blue hour windows
    pub best_times: Vec<&'static str>,
}

/// Score photography conditions
#[must_use]
pub fn photography(c: &Conditions) -> PhotographyReport {
    PhotographyReport {
        result: TABLE.evaluate(c),
        best_times: BEST_TIMES.to_vec(),
    }
}
