// ABOUTME: Date course recommendation scored from rain, temperature, and fine dust
// ABOUTME: Bad weather forces the weather-proof food style; the hour of day picks the itinerary shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity::Activity;
use crate::catalog::{DateCourse, DateStyle, SpotCatalog};
use crate::engine::{format_number, Check, Cmp, Conditions, Field, Polarity, Rung, ScoreTable, When};
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::{GradeStep, GradeTable};
use serde::Serialize;

use Cmp::{Above, AtLeast, Below, Between};
use Field::{Pm25, RainProbability, Temperature};

/// Number of courses returned
pub const COURSE_COUNT: usize = 3;

const INDOOR_RAIN: f64 = 70.0;
const INDOOR_PM25: f64 = 75.0;

/// Date suitability table
pub const TABLE: ScoreTable = ScoreTable {
    name: "date_course",
    polarity: Polarity::Goodness(100.0),
    guards: &[],
    checks: &[
        Check {
            name: "rain",
            rungs: &[
                Rung::new(When::Is(RainProbability, AtLeast(INDOOR_RAIN)), -40.0)
                    .factor("강수확률 {rain}%: 실내 데이트 추천"),
                Rung::new(When::Is(RainProbability, AtLeast(40.0)), -20.0)
                    .factor("강수확률 {rain}%: 우산 준비"),
            ],
        },
        Check {
            name: "temperature",
            rungs: &[
                Rung::new(When::Is(Temperature, Below(0.0)), -25.0)
                    .factor("영하 {temp}°C: 따뜻한 실내 추천"),
                Rung::new(When::Is(Temperature, Below(5.0)), -15.0)
                    .factor("추위 {temp}°C: 방한 필수"),
                Rung::new(When::Is(Temperature, Between(15.0, 25.0)), 10.0)
                    .factor("쾌적한 {temp}°C: 야외 활동 최적"),
                Rung::new(When::Is(Temperature, Above(30.0)), -20.0)
                    .factor("더위 {temp}°C: 실내 또는 저녁 추천"),
            ],
        },
        Check {
            name: "air_quality",
            rungs: &[
                Rung::new(When::Is(Pm25, Above(INDOOR_PM25)), -30.0)
                    .factor("미세먼지 나쁨: 실내 데이트 권장")
                    .warning("야외 활동 자제, 마스크 필수"),
                Rung::new(When::Is(Pm25, Above(35.0)), -15.0)
                    .factor("미세먼지 보통: 장시간 야외 주의"),
            ],
        },
    ],
    grades: GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("최적", "데이트하기 완벽한 날씨!")),
            GradeStep::new(60.0, GradeLabel::new("좋음", "데이트하기 좋은 날씨입니다.")),
            GradeStep::new(40.0, GradeLabel::new("보통", "데이트 가능하지만 주의사항 있음")),
        ],
        GradeLabel::new("주의", "실내 데이트를 추천합니다."),
    ),
    default_factor: "데이트하기 무난한 날씨",
    default_tip: "편한 신발을 챙기세요",
};

/// A course with a weather note attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedCourse {
    /// Catalog entry
    #[serde(flatten)]
    pub course: DateCourse,
    /// Short weather caveat
    pub weather_note: &'static str,
}

/// Han river picnic suggestion on fair days
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HangangTip {
    /// Headline
    pub recommendation: &'static str,
    /// First picnic spots of the catalog
    pub best_spots: Vec<&'static str>,
    /// Evening chicken and beer window
    pub chimaek_time: &'static str,
}

/// Date course recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateCourseReport {
    /// Suitability result
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Style actually used, possibly forced to food
    pub style: DateStyle,
    /// Up to three courses
    pub recommended_courses: Vec<RecommendedCourse>,
    /// Itinerary shape for the current hour
    pub time_recommendation: &'static str,
    /// Present on fair days only
    pub hangang_tip: Option<HangangTip>,
    /// "{sky}, {temp}°C, 강수확률 {rain}%"
    pub weather_summary: String,
}

fn weather_note(c: &Conditions) -> &'static str {
    if c.weather.rain_probability >= 50.0 {
        "비 예보로 대안 고려"
    } else if c.weather.temperature < 5.0 {
        "추위 대비 필수"
    } else {
        "날씨 적합"
    }
}

/// Itinerary shape for an hour of day
#[must_use]
pub const fn time_recommendation(hour: u32) -> &'static str {
    if hour < 12 {
        "오전 브런치 → 산책 → 점심"
    } else if hour < 17 {
        "오후 카페 → 산책 → 저녁"
    } else {
        "저녁 맛집 → 야경 → 카페"
    }
}

fn needs_indoor(c: &Conditions) -> bool {
    c.weather.rain_probability >= INDOOR_RAIN || c.air.pm25().is_some_and(|pm| pm > INDOOR_PM25)
}

/// Recommend date courses for the requested style at the given hour
#[must_use]
pub fn date_course(
    catalog: &dyn SpotCatalog,
    c: &Conditions,
    style: DateStyle,
    hour: u32,
) -> DateCourseReport {
    let result = TABLE.evaluate(c);
    let style = if needs_indoor(c) { DateStyle::Food } else { style };
    let note = weather_note(c);

    let recommended_courses = catalog
        .date_courses(style)
        .iter()
        .take(COURSE_COUNT)
        .map(|course| RecommendedCourse {
            course: *course,
            weather_note: note,
        })
        .collect();

    let temp = c.weather.temperature;
    let rain = c.weather.rain_probability;
    let hangang_tip = (result.score >= 70 && (10.0..=28.0).contains(&temp) && rain < 30.0)
        .then(|| HangangTip {
            recommendation: "한강 피크닉 추천!",
            best_spots: catalog
                .spots(Activity::Picnic)
                .iter()
                .take(3)
                .map(|spot| spot.name)
                .collect(),
            chimaek_time: "17:00-21:00 치맥 타임",
        });

    DateCourseReport {
        weather_summary: format!(
            "{}, {}°C, 강수확률 {}%",
            c.weather.sky.label(),
            format_number(temp),
            format_number(rain)
        ),
        result,
        style,
        recommended_courses,
        time_recommendation: time_recommendation(hour),
        hangang_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SeoulCatalog;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn at(temp: f64, rain: f64, pm25: f64) -> Conditions {
        Conditions::new(
            WeatherSnapshot::new(temp, 50.0, 2.0, rain),
            AirQualitySnapshot::from_values(30.0, pm25),
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        )
    }

    #[test]
    fn fair_day_keeps_style_and_offers_hangang() {
        let report = date_course(&SeoulCatalog, &at(20.0, 10.0, 10.0), DateStyle::Active, 14);
        assert_eq!(report.result.score, 100);
        assert_eq!(report.result.grade, "최적");
        assert_eq!(report.style, DateStyle::Active);
        assert_eq!(report.time_recommendation, "오후 카페 → 산책 → 저녁");
        let tip = report.hangang_tip.unwrap();
        assert_eq!(tip.best_spots.len(), 3);
        assert_eq!(tip.best_spots[0], "여의도 한강공원");
        assert!(report.recommended_courses.iter().all(|c| c.weather_note == "날씨 적합"));
        assert_eq!(report.weather_summary, "맑음, 20°C, 강수확률 10%");
    }

    #[test]
    fn heavy_rain_forces_food_style() {
        let report = date_course(&SeoulCatalog, &at(20.0, 80.0, 10.0), DateStyle::Romantic, 19);
        assert_eq!(report.style, DateStyle::Food);
        assert_eq!(report.result.score, 70);
        assert!(report.hangang_tip.is_none());
        assert_eq!(report.time_recommendation, "저녁 맛집 → 야경 → 카페");
        assert!(report
            .recommended_courses
            .iter()
            .all(|c| c.weather_note == "비 예보로 대안 고려"));
    }

    #[test]
    fn dusty_day_warns_and_goes_indoors() {
        let report = date_course(&SeoulCatalog, &at(8.0, 0.0, 90.0), DateStyle::Cultural, 9);
        assert_eq!(report.style, DateStyle::Food);
        assert_eq!(report.result.score, 70);
        assert_eq!(report.result.warnings, vec!["야외 활동 자제, 마스크 필수".to_owned()]);
        assert_eq!(report.result.breakdown["air_quality"], -30.0);
    }

    #[test]
    fn unavailable_dust_is_neutral() {
        let c = Conditions::new(
            WeatherSnapshot::new(12.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::unavailable(),
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        );
        let report = date_course(&SeoulCatalog, &c, DateStyle::Romantic, 9);
        assert_eq!(report.result.score, 100);
        assert_eq!(report.style, DateStyle::Romantic);
        assert!(report.recommended_courses.len() <= COURSE_COUNT);
    }
}
