// ABOUTME: Best time of day for an activity from the hourly forecast
// ABOUTME: Each hour gets a small additive score; hours are then grouped into morning, afternoon, evening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::engine::{clamp_score, format_number};
use nalssi_core::grade::{GradeStep, GradeTable};
use nalssi_core::models::{HourlyForecast, Sky};
use serde::Serialize;
use std::ops::Range;

/// Hours of forecast considered
pub const HORIZON_HOURS: usize = 12;

const NO_DATA: &str = "정보없음";
const DEFAULT_FACTOR: &str = "양호";

const SLOT_GRADES: GradeTable<&str> = GradeTable::new(
    &[
        GradeStep::new(80.0, "최적"),
        GradeStep::new(60.0, "좋음"),
        GradeStep::new(40.0, "보통"),
    ],
    "나쁨",
);

/// Temperature preference used for each hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// 등산, 운동
    Workout,
    /// 빨래
    Laundry,
    /// 외출, 피크닉 and anything else
    General,
}

impl PlanKind {
    /// Map a Korean activity name
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "등산" | "운동" => Self::Workout,
            "빨래" => Self::Laundry,
            _ => Self::General,
        }
    }
}

/// Score for one forecast hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// "HH:00"
    pub time: String,
    /// Hour of day
    #[serde(skip)]
    pub hour: u32,
    /// 0-100
    pub score: u8,
    /// 최적 / 좋음 / 보통 / 나쁨
    pub grade: &'static str,
    /// "{temp}°C, {sky}"
    pub weather: String,
    /// Adjustments applied, 양호 when none
    pub factors: Vec<String>,
}

/// Highest scoring hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSlot {
    /// "HH:00" or 정보없음
    pub time: String,
    /// Score of that hour
    pub score: u8,
    /// Weather at that hour
    pub weather: String,
    /// "{time}이 가장 좋아요! ({score}점)"
    pub recommendation: String,
}

/// Lowest scoring hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvoidSlot {
    /// "HH:00" or 정보없음
    pub time: String,
    /// Score of that hour
    pub score: u8,
    /// "{time}은 피하세요 ({score}점)"
    pub reason: String,
}

/// Part of the day with the best average
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPeriod {
    /// 아침 / 오후 / 저녁
    pub period: &'static str,
    /// Rounded average score
    pub avg_score: u8,
    /// "{period}이 전반적으로 좋아요 (평균 {n}점)"
    pub recommendation: String,
}

/// Best-time analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestTimeReport {
    /// Requested activity name
    pub activity: String,
    /// Best hour
    pub best_time: BestSlot,
    /// Best part of the day
    pub best_period: BestPeriod,
    /// Worst hour
    pub avoid_time: AvoidSlot,
    /// Every scored hour in forecast order
    pub hourly_analysis: Vec<TimeSlot>,
}

fn score_hour(forecast: &HourlyForecast, kind: PlanKind) -> TimeSlot {
    let mut score = 100.0;
    let mut factors = Vec::new();
    let temp = forecast.temperature;
    let rain = forecast.rain_probability;
    let t = format_number(temp);

    if rain >= 60.0 {
        score -= 50.0;
        factors.push(format!("비 {}%", format_number(rain)));
    } else if rain >= 30.0 {
        score -= 25.0;
        factors.push(format!("비 가능성 {}%", format_number(rain)));
    }

    match kind {
        PlanKind::Workout => {
            if !(0.0..=30.0).contains(&temp) {
                score -= 30.0;
                factors.push(format!("기온 {t}°C"));
            } else if (15.0..=22.0).contains(&temp) {
                score += 10.0;
                factors.push(format!("기온 최적 {t}°C"));
            }
        }
        PlanKind::Laundry => {
            if temp < 5.0 {
                score -= 20.0;
                factors.push(format!("기온 {t}°C (건조 느림)"));
            } else if temp >= 15.0 {
                score += 10.0;
                factors.push(format!("기온 {t}°C (건조 최적)"));
            }
        }
        PlanKind::General => {
            if !(-5.0..=33.0).contains(&temp) {
                score -= 40.0;
                factors.push(format!("기온 {t}°C"));
            } else if (18.0..=25.0).contains(&temp) {
                score += 10.0;
            }
        }
    }

    match forecast.sky {
        Sky::Clear => score += 5.0,
        Sky::Overcast => score -= 10.0,
        _ => {}
    }

    if forecast.wind_speed > 10.0 {
        score -= 15.0;
        factors.push(format!("바람 {}m/s", format_number(forecast.wind_speed)));
    }

    let score = clamp_score(score);
    if factors.is_empty() {
        factors.push(DEFAULT_FACTOR.to_owned());
    }
    TimeSlot {
        time: forecast.time_label(),
        hour: forecast.hour,
        score,
        grade: SLOT_GRADES.bucket(f64::from(score)),
        weather: format!("{t}°C, {}", forecast.sky.label()),
        factors,
    }
}

fn average(slots: &[&TimeSlot]) -> f64 {
    if slots.is_empty() {
        return 0.0;
    }
    let total: u32 = slots.iter().map(|slot| u32::from(slot.score)).sum();
    f64::from(total) / slots.len() as f64
}

fn best_period(slots: &[TimeSlot]) -> BestPeriod {
    let part = |range: Range<u32>| {
        let members: Vec<&TimeSlot> = slots.iter().filter(|s| range.contains(&s.hour)).collect();
        average(&members)
    };
    let periods = [("아침", part(0..12)), ("오후", part(12..18)), ("저녁", part(18..24))];

    let (period, avg) = periods
        .iter()
        .copied()
        .fold(periods[0], |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });
    let avg_score = avg.round().clamp(0.0, 100.0) as u8;
    BestPeriod {
        period,
        avg_score,
        recommendation: format!("{period}이 전반적으로 좋아요 (평균 {avg_score}점)"),
    }
}

/// Rank the next hours for an activity
///
/// Only the first [`HORIZON_HOURS`] entries are considered. Ties resolve to
/// the earliest hour for both the best and the worst slot.
#[must_use]
pub fn best_time(forecasts: &[HourlyForecast], activity: &str) -> BestTimeReport {
    let kind = PlanKind::from_name(activity);
    let slots: Vec<TimeSlot> = forecasts
        .iter()
        .take(HORIZON_HOURS)
        .map(|forecast| score_hour(forecast, kind))
        .collect();

    let best = slots
        .iter()
        .fold(None::<&TimeSlot>, |acc, slot| match acc {
            Some(top) if top.score >= slot.score => Some(top),
            _ => Some(slot),
        });
    let worst = slots
        .iter()
        .fold(None::<&TimeSlot>, |acc, slot| match acc {
            Some(low) if low.score <= slot.score => Some(low),
            _ => Some(slot),
        });

    let (best_time, best_score, best_weather) = best.map_or_else(
        || (NO_DATA.to_owned(), 0, String::new()),
        |slot| (slot.time.clone(), slot.score, slot.weather.clone()),
    );
    let (worst_time, worst_score) =
        worst.map_or_else(|| (NO_DATA.to_owned(), 0), |slot| (slot.time.clone(), slot.score));

    BestTimeReport {
        activity: activity.to_owned(),
        best_time: BestSlot {
            recommendation: format!("{best_time}이 가장 좋아요! ({best_score}점)"),
            time: best_time,
            score: best_score,
            weather: best_weather,
        },
        best_period: best_period(&slots),
        avoid_time: AvoidSlot {
            reason: format!("{worst_time}은 피하세요 ({worst_score}점)"),
            time: worst_time,
            score: worst_score,
        },
        hourly_analysis: slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(hour: u32, temp: f64, rain: f64, sky: Sky) -> HourlyForecast {
        HourlyForecast::new(hour, temp, rain, sky)
    }

    #[test]
    fn empty_forecast_reports_no_data() {
        let report = best_time(&[], "외출");
        assert_eq!(report.best_time.time, NO_DATA);
        assert_eq!(report.best_time.score, 0);
        assert_eq!(report.avoid_time.time, NO_DATA);
        assert_eq!(report.best_period.period, "아침");
        assert_eq!(report.best_period.avg_score, 0);
        assert!(report.hourly_analysis.is_empty());
    }

    #[test]
    fn picks_dry_afternoon_over_rainy_morning() {
        let forecasts = [
            hour(9, 12.0, 70.0, Sky::Rain),
            hour(13, 20.0, 0.0, Sky::Clear),
            hour(19, 16.0, 20.0, Sky::Overcast),
        ];
        let report = best_time(&forecasts, "외출");
        // 100 + 10 + 5, clamped
        assert_eq!(report.best_time.time, "13:00");
        assert_eq!(report.best_time.score, 100);
        assert_eq!(report.best_time.recommendation, "13:00이 가장 좋아요! (100점)");
        assert_eq!(report.avoid_time.time, "09:00");
        assert_eq!(report.avoid_time.score, 50);
        assert_eq!(report.best_period.period, "오후");
        assert_eq!(report.hourly_analysis[0].factors, vec!["비 70%".to_owned()]);
        assert_eq!(report.hourly_analysis[1].factors, vec![DEFAULT_FACTOR.to_owned()]);
        assert_eq!(report.hourly_analysis[2].score, 90);
        assert_eq!(report.hourly_analysis[1].weather, "20°C, 맑음");
    }

    #[test]
    fn laundry_prefers_warm_hours() {
        let forecasts = [
            hour(8, 3.0, 0.0, Sky::PartlyCloudy),
            hour(14, 18.0, 0.0, Sky::PartlyCloudy),
        ];
        let report = best_time(&forecasts, "빨래");
        assert_eq!(report.hourly_analysis[0].score, 80);
        assert_eq!(report.hourly_analysis[0].factors[0], "기온 3°C (건조 느림)");
        assert_eq!(report.hourly_analysis[1].score, 100);
        assert_eq!(report.best_time.time, "14:00");
    }

    #[test]
    fn only_first_twelve_hours_count() {
        let mut forecasts: Vec<HourlyForecast> =
            (0..12).map(|h| hour(h, 10.0, 80.0, Sky::Rain)).collect();
        forecasts.push(hour(12, 20.0, 0.0, Sky::Clear));
        let report = best_time(&forecasts, "운동");
        assert_eq!(report.hourly_analysis.len(), HORIZON_HOURS);
        assert_eq!(report.best_time.time, "00:00");
        assert_eq!(report.best_time.score, 50);
    }

    #[test]
    fn names_map_to_kinds() {
        assert_eq!(PlanKind::from_name("등산"), PlanKind::Workout);
        assert_eq!(PlanKind::from_name("빨래"), PlanKind::Laundry);
        assert_eq!(PlanKind::from_name("피크닉"), PlanKind::General);
    }
}
