// ABOUTME: Life weather indices: UV, heat, pollen, and food poisoning risk
// ABOUTME: Live readings are preferred; seasonal estimates fill gaps and are flagged as estimated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Life Indices
//!
//! Heat and pollen are only published during part of the year and come back
//! as [`SeasonGated::Unavailable`] outside it. UV and food poisoning are
//! always available; when no reading exists they fall back to a month-based
//! estimate and set `estimated`.

use crate::season::{SeasonGate, SeasonGated};
use chrono::{Datelike, NaiveDate};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::{LifeIndexReadings, WeatherSnapshot};
use serde::Serialize;

/// Grade and the advice shown with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexGrade {
    /// Grade name
    pub grade: &'static str,
    /// What to do about it
    pub advice: &'static str,
}

const fn grade(grade: &'static str, advice: &'static str) -> IndexGrade {
    IndexGrade { grade, advice }
}

const UV_GRADES: GradeTable<IndexGrade> = GradeTable::new(
    &[
        GradeStep::new(11.0, grade("위험", "외출 자제, 실내 활동 권장")),
        GradeStep::new(8.0, grade("매우높음", "오전 10시~오후 3시 외출 자제")),
        GradeStep::new(6.0, grade("높음", "모자, 선글라스, 선크림 필수")),
        GradeStep::new(3.0, grade("보통", "장시간 외출 시 선크림 권장")),
    ],
    grade("낮음", "자외선 걱정 없음"),
);

const HEAT_GRADES: GradeTable<IndexGrade> = GradeTable::new(
    &[
        GradeStep::new(38.0, grade("위험", "모든 야외활동 중단")),
        GradeStep::new(35.0, grade("경고", "아침/저녁에만 외출")),
        GradeStep::new(33.0, grade("주의", "장시간 야외활동 자제")),
        GradeStep::new(29.0, grade("관심", "수분 섭취 권장")),
    ],
    grade("보통", "쾌적한 날씨"),
);

const POLLEN_GRADES: GradeTable<IndexGrade> = GradeTable::new(
    &[
        GradeStep::new(3.0, grade("매우높음", "외출 자제, 마스크 필수, 창문 닫기")),
        GradeStep::new(2.0, grade("높음", "야외활동 자제, 마스크 착용")),
        GradeStep::new(1.0, grade("보통", "알레르기 민감자 주의")),
    ],
    grade("낮음", "꽃가루 걱정 없음"),
);

const FOOD_GRADES: GradeTable<IndexGrade> = GradeTable::new(
    &[
        GradeStep::new(86.0, grade("위험", "도시락 금지, 음식 즉시 냉장")),
        GradeStep::new(71.0, grade("경고", "조리 후 2시간 내 섭취")),
        GradeStep::new(55.0, grade("주의", "음식 보관 주의")),
        GradeStep::new(35.0, grade("관심", "일반적인 주의")),
    ],
    grade("낮음", "식중독 걱정 적음"),
);

/// Heat index season
pub const HEAT_GATE: SeasonGate = SeasonGate {
    months: &[5, 6, 7, 8, 9],
    message: "체감온도는 여름철(5-9월)에만 제공됩니다.",
    tips: &[],
};

/// Pollen season (tree pollen in spring, weeds in late summer and autumn)
pub const POLLEN_GATE: SeasonGate = SeasonGate {
    months: &[4, 5, 6, 8, 9, 10],
    message: "꽃가루 정보는 봄(4-6월)과 가을(8-10월)에만 제공됩니다.",
    tips: &[],
};

const TREE_POLLEN_MONTHS: [u32; 3] = [4, 5, 6];
const DEFAULT_POLLEN_LEVEL: u8 = 1;

/// UV index
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvIndex {
    /// Index value
    pub value: f64,
    /// Grade and advice
    #[serde(flatten)]
    pub grade: IndexGrade,
    /// Value is a seasonal estimate
    pub estimated: bool,
}

/// Apparent temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatIndex {
    /// Air temperature
    pub temperature: f64,
    /// Relative humidity
    pub humidity: f64,
    /// Apparent temperature, one decimal
    pub heat_index: f64,
    /// Grade and advice
    #[serde(flatten)]
    pub grade: IndexGrade,
}

/// Pollen risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollenIndex {
    /// 소나무/참나무 or 잡초류
    pub pollen_type: &'static str,
    /// Risk level 0-3
    pub pollen_index: u8,
    /// Grade and advice
    #[serde(flatten)]
    pub grade: IndexGrade,
    /// Level was not measured
    pub estimated: bool,
}

/// Food poisoning risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodPoisoningIndex {
    /// 0-100
    pub index: u8,
    /// Grade and advice
    #[serde(flatten)]
    pub grade: IndexGrade,
    /// Computed from the month instead of the weather
    pub estimated: bool,
}

/// Every life index for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeIndices {
    /// UV
    pub uv: UvIndex,
    /// Apparent temperature (May to September)
    pub heat: SeasonGated<HeatIndex>,
    /// Pollen (April to June, August to October)
    pub pollen: SeasonGated<PollenIndex>,
    /// Food poisoning
    pub food_poisoning: FoodPoisoningIndex,
}

/// UV from a reading, or a month estimate
#[must_use]
pub fn uv_index(reading: Option<f64>, date: NaiveDate) -> UvIndex {
    let (value, estimated) = match reading.filter(|v| v.is_finite() && *v >= 0.0) {
        Some(value) => (value, false),
        None => {
            let estimate = match date.month() {
                6..=8 => 8.0,
                4 | 5 | 9 | 10 => 5.0,
                _ => 2.0,
            };
            (estimate, true)
        }
    };
    UvIndex {
        value,
        grade: UV_GRADES.bucket(value),
        estimated,
    }
}

/// Apparent temperature, only raised above 27°C
#[must_use]
pub fn apparent_temperature(temperature: f64, humidity: f64) -> f64 {
    if temperature >= 27.0 {
        (0.5 * (humidity - 50.0)).mul_add(0.1, temperature)
    } else {
        temperature
    }
}

/// Heat index in season
#[must_use]
pub fn heat_index(weather: &WeatherSnapshot, date: NaiveDate) -> SeasonGated<HeatIndex> {
    HEAT_GATE.run(date, || {
        let value = apparent_temperature(weather.temperature, weather.humidity);
        HeatIndex {
            temperature: weather.temperature,
            humidity: weather.humidity,
            heat_index: (value * 10.0).round() / 10.0,
            grade: HEAT_GRADES.bucket(value),
        }
    })
}

/// Pollen risk in season
#[must_use]
pub fn pollen_index(level: Option<u8>, date: NaiveDate) -> SeasonGated<PollenIndex> {
    POLLEN_GATE.run(date, || {
        let pollen_type = if TREE_POLLEN_MONTHS.contains(&date.month()) {
            "소나무/참나무"
        } else {
            "잡초류"
        };
        let pollen_index = level.unwrap_or(DEFAULT_POLLEN_LEVEL);
        PollenIndex {
            pollen_type,
            pollen_index,
            grade: POLLEN_GRADES.bucket(f64::from(pollen_index)),
            estimated: level.is_none(),
        }
    })
}

/// Food poisoning risk from temperature and humidity
#[must_use]
pub fn food_poisoning_risk(temperature: f64, humidity: f64) -> u8 {
    const TEMPERATURE: GradeTable<u8> = GradeTable::new(
        &[
            GradeStep::new(35.0, 50),
            GradeStep::new(30.0, 40),
            GradeStep::new(25.0, 30),
            GradeStep::new(20.0, 20),
            GradeStep::new(15.0, 10),
        ],
        0,
    );
    const HUMIDITY: GradeTable<u8> = GradeTable::new(
        &[
            GradeStep::new(80.0, 40),
            GradeStep::new(70.0, 30),
            GradeStep::new(60.0, 20),
            GradeStep::new(50.0, 10),
        ],
        0,
    );
    TEMPERATURE.bucket(temperature) + HUMIDITY.bucket(humidity)
}

/// Food poisoning index from the weather, or a month estimate
#[must_use]
pub fn food_poisoning(weather: Option<&WeatherSnapshot>, date: NaiveDate) -> FoodPoisoningIndex {
    let (index, estimated) = weather.map_or_else(
        || {
            let estimate = match date.month() {
                6..=8 => 70,
                5 | 9 => 50,
                _ => 30,
            };
            (estimate, true)
        },
        |w| (food_poisoning_risk(w.temperature, w.humidity), false),
    );
    FoodPoisoningIndex {
        index,
        grade: FOOD_GRADES.bucket(f64::from(index)),
        estimated,
    }
}

/// All life indices for a date
///
/// Without a weather snapshot the heat index uses the neutral default
/// snapshot and food poisoning falls back to its month estimate.
#[must_use]
pub fn life_indices(
    readings: &LifeIndexReadings,
    weather: Option<&WeatherSnapshot>,
    date: NaiveDate,
) -> LifeIndices {
    let fallback = WeatherSnapshot::default();
    LifeIndices {
        uv: uv_index(readings.uv_index, date),
        heat: heat_index(weather.unwrap_or(&fallback), date),
        pollen: pollen_index(readings.pollen_level, date),
        food_poisoning: food_poisoning(weather, date),
    }
}
