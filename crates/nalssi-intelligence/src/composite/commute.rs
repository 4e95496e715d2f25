// ABOUTME: Commute index scoring car, transit, and walk/bike modes from one snapshot
// ABOUTME: Headline score is the configured weighted average; recommended mode is the raw argmax
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CommuteWeights;
use crate::engine::{
    clamp_score, Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When, RAINY, SNOWY,
};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::{AirGrade, Sky};
use serde::Serialize;
use std::collections::BTreeMap;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Humidity, RainProbability, Temperature, WindSpeed};

const MODE_GRADES: GradeTable<GradeLabel> = GradeTable::new(
    &[
        GradeStep::new(80.0, GradeLabel::new("좋음", "출퇴근하기 좋은 날씨입니다")),
        GradeStep::new(60.0, GradeLabel::new("보통", "무난한 출퇴근이 가능합니다")),
        GradeStep::new(40.0, GradeLabel::new("주의", "출퇴근 시 주의가 필요합니다")),
        GradeStep::new(20.0, GradeLabel::new("나쁨", "출퇴근이 힘든 날씨입니다")),
    ],
    GradeLabel::new("매우나쁨", "가능하면 재택/휴가를 권장합니다"),
);

const HEAVY_RAIN: When = When::Is(RainProbability, AtLeast(80.0));
const LIKELY_RAIN: When = When::Is(RainProbability, AtLeast(50.0));

/// Car and taxi sub-score
pub const CAR: ScoreTable = ScoreTable {
    name: "commute_car",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "precipitation",
            rungs: &[
                Rung::new(When::Sky(SNOWY), -35.0).factor("적설: 미끄럼 주의"),
                Rung::new(When::Any(&[HEAVY_RAIN, When::Sky(RAINY)]), -25.0)
                    .factor("비: 제동거리 증가"),
                Rung::new(LIKELY_RAIN, -15.0).factor("비 가능성: 시야 주의"),
            ],
        },
        Check {
            name: "visibility",
            rungs: &[Rung::new(
                When::Any(&[
                    When::Sky(&[Sky::Fog]),
                    When::All(&[When::Sky(&[Sky::Overcast]), When::Is(Humidity, AtLeast(90.0))]),
                ]),
                -20.0,
            )
            .factor("안개/저시정: 서행 운전")],
        },
        Check {
            name: "road_ice",
            rungs: &[
                Rung::new(
                    When::All(&[
                        When::Is(Temperature, Between(0.0, 4.0)),
                        When::Is(Humidity, AtLeast(80.0)),
                    ]),
                    -25.0,
                )
                .factor("결빙 위험: 블랙아이스 주의")
                .warning("블랙아이스 위험: 다리 위, 터널 출입구 서행"),
                Rung::new(When::Is(Temperature, Below(0.0)), -20.0).factor("영하: 노면 결빙 가능"),
            ],
        },
    ],
    grades: MODE_GRADES,
    default_factor: "운전하기 무난한 날씨",
    default_tip: "안전 운전하세요",
};

/// Bus and subway sub-score, including waiting at the stop
pub const TRANSIT: ScoreTable = ScoreTable {
    name: "commute_transit",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(-5.0)), -30.0)
                    .factor("혹한: 정류장 대기 고통"),
                Rung::new(When::Is(Temperature, Below(0.0)), -20.0).factor("추위: 따뜻하게 입기"),
                Rung::new(When::Is(Temperature, Below(5.0)), -12.0).factor("쌀쌀함: 외투 필수"),
                Rung::new(When::Is(Temperature, Above(33.0)), -30.0)
                    .factor("폭염: 정류장 대기 위험"),
                Rung::new(When::Is(Temperature, Above(30.0)), -20.0).factor("무더위: 수분 보충"),
                Rung::new(When::Is(Temperature, Above(28.0)), -10.0).factor("더위 주의"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(8.0)), -25.0)
                    .factor("강풍: 정류장 대기 힘듦"),
                Rung::new(When::Is(WindSpeed, AtLeast(6.0)), -15.0)
                    .factor("바람: 체감온도 하락"),
                Rung::new(When::Is(WindSpeed, AtLeast(4.0)), -5.0),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Any(&[HEAVY_RAIN, When::Sky(RAINY)]), -20.0)
                    .factor("비: 우산 필요"),
                Rung::new(LIKELY_RAIN, -10.0).factor("비 가능성"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::Bad, AirGrade::VeryBad]), -15.0)
                    .factor("미세먼지 {pm25_grade}: 마스크 필수"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), -5.0),
            ],
        },
    ],
    grades: MODE_GRADES,
    default_factor: "대중교통 이용에 무난한 날씨",
    default_tip: "평소대로 이용하세요",
};

/// Walking and cycling sub-score
pub const WALK_BIKE: ScoreTable = ScoreTable {
    name: "commute_walk_bike",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -35.0).factor("영하: 도보 고통"),
                Rung::new(When::Is(Temperature, Below(5.0)), -25.0).factor("추위: 따뜻하게"),
                Rung::new(When::Is(Temperature, Below(10.0)), -15.0).factor("쌀쌀함"),
                Rung::new(When::Is(Temperature, Above(33.0)), -40.0).factor("폭염: 도보 자제"),
                Rung::new(When::Is(Temperature, Above(30.0)), -30.0)
                    .factor("무더위: 열사병 주의"),
                Rung::new(When::Is(Temperature, Above(28.0)), -15.0).factor("더위 주의"),
            ],
        },
        Check {
            name: "wind",
            rungs: &[
                Rung::new(When::Is(WindSpeed, AtLeast(10.0)), -35.0).factor("강풍: 자전거 위험"),
                Rung::new(When::Is(WindSpeed, AtLeast(7.0)), -25.0).factor("강풍: 도보도 힘듦"),
                Rung::new(When::Is(WindSpeed, AtLeast(5.0)), -15.0).factor("바람: 자전거 힘듦"),
            ],
        },
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Any(&[HEAVY_RAIN, When::Sky(RAINY)]), -40.0)
                    .factor("비: 도보/자전거 비추천"),
                Rung::new(LIKELY_RAIN, -20.0).factor("비 가능성"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Pm25(&[AirGrade::VeryBad]), -35.0)
                    .factor("미세먼지 매우나쁨: 절대 자제"),
                Rung::new(When::Pm25(&[AirGrade::Bad]), -25.0).factor("미세먼지 나쁨: 자제 권장"),
                Rung::new(When::Pm25(&[AirGrade::Moderate]), -8.0),
            ],
        },
    ],
    grades: MODE_GRADES,
    default_factor: "걷기 좋은 날씨",
    default_tip: "가볍게 걸어보세요",
};

/// Transport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteMode {
    /// Car or taxi
    Car,
    /// Bus or subway
    Transit,
    /// Walking or cycling
    WalkBike,
}

impl CommuteMode {
    /// Modes in tie-break order
    pub const ALL: [Self; 3] = [Self::Car, Self::Transit, Self::WalkBike];

    /// Korean label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "자가용",
            Self::Transit => "대중교통",
            Self::WalkBike => "도보/자전거",
        }
    }

    const fn table(self) -> &'static ScoreTable {
        match self {
            Self::Car => &CAR,
            Self::Transit => &TRANSIT,
            Self::WalkBike => &WALK_BIKE,
        }
    }

    const fn weight(self, weights: &CommuteWeights) -> f64 {
        match self {
            Self::Car => weights.car,
            Self::Transit => weights.transit,
            Self::WalkBike => weights.walk_bike,
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Transit => "transit",
            Self::WalkBike => "walk_bike",
        }
    }
}

/// Per-mode detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeReport {
    /// Sub-score
    pub score: u8,
    /// Grade of the sub-score
    pub grade: &'static str,
    /// Conditions affecting this mode
    pub factors: Vec<String>,
}

/// Commute result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommuteReport {
    /// Headline result from the weighted average
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Mode with the highest sub-score
    pub recommended_mode: CommuteMode,
    /// Korean label of the recommended mode
    pub recommended_mode_kr: &'static str,
    /// Detail per mode
    pub by_mode: BTreeMap<&'static str, ModeReport>,
    /// Time-of-day advice
    pub time_tips: Vec<&'static str>,
}

fn time_tips(c: &Conditions) -> Vec<&'static str> {
    let w = &c.weather;
    let mut tips = Vec::new();
    if w.temperature < 5.0 {
        tips.push("아침: 체감온도 더 낮음, 따뜻하게");
    }
    if w.temperature > 28.0 {
        tips.push("오후: 폭염 피크, 수분 보충");
    }
    if w.rain_probability >= 50.0 {
        tips.push("우산 필수, 여유있게 출발");
    }
    tips
}

/// Score the commute across all three modes
#[must_use]
pub fn commute(c: &Conditions, weights: &CommuteWeights) -> CommuteReport {
    let results: Vec<(CommuteMode, ScoreResult)> = CommuteMode::ALL
        .iter()
        .map(|mode| (*mode, mode.table().evaluate(c)))
        .collect();

    let overall: f64 = results
        .iter()
        .map(|(mode, result)| f64::from(result.score) * mode.weight(weights))
        .sum();
    let score = clamp_score(overall);

    // first maximum wins
    let recommended_mode = results
        .iter()
        .fold(None::<(CommuteMode, u8)>, |best, (mode, result)| match best {
            Some((_, top)) if top >= result.score => best,
            _ => Some((*mode, result.score)),
        })
        .map_or(CommuteMode::Car, |(mode, _)| mode);

    let mut factors = Vec::new();
    let mut warnings = Vec::new();
    for (_, result) in &results {
        warnings.extend(result.warnings.iter().cloned());
    }
    let by_mode = results
        .into_iter()
        .map(|(mode, result)| {
            let mode_factors: Vec<String> = result
                .factors
                .into_iter()
                .filter(|f| f.as_str() != mode.table().default_factor)
                .collect();
            factors.extend(
                mode_factors
                    .iter()
                    .map(|f| format!("{}: {f}", mode.label())),
            );
            (
                mode.key(),
                ModeReport {
                    score: result.score,
                    grade: result.grade,
                    factors: mode_factors,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    let label = MODE_GRADES.bucket(f64::from(score));
    let tips = time_tips(c);
    let breakdown = by_mode
        .iter()
        .map(|(key, mode)| (*key, f64::from(mode.score)))
        .collect();

    CommuteReport {
        result: ScoreResult {
            score,
            grade: label.grade,
            grade_kr: None,
            message: label.message,
            risk: None,
            factors: if factors.is_empty() {
                vec!["모든 교통수단 이용에 무난한 날씨".to_owned()]
            } else {
                factors
            },
            recommendations: if tips.is_empty() {
                vec![format!("{} 이용을 추천합니다", recommended_mode.label())]
            } else {
                tips.iter().map(|tip| (*tip).to_owned()).collect()
            },
            warnings,
            breakdown,
        },
        recommended_mode,
        recommended_mode_kr: recommended_mode.label(),
        by_mode,
        time_tips: tips,
    }
}
