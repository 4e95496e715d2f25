// ABOUTME: Aggregator fanning out every activity scorer over one snapshot in parallel
// ABOUTME: Best activity is the first strictly highest score in registry order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity::Activity;
use crate::engine::Conditions;
use crate::result::ScoreResult;
use nalssi_core::models::AirGrade;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One activity's result inside the aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    /// Activity key
    pub activity: Activity,
    /// Korean label
    pub name: &'static str,
    /// Score result
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// Headline of the best-scoring activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestActivity {
    /// Activity key
    pub activity: Activity,
    /// Korean label
    pub name: &'static str,
    /// Its score
    pub score: u8,
    /// Its grade message
    pub message: &'static str,
}

/// Inputs echoed back with the aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSummary {
    /// Temperature (°C)
    pub temperature: f64,
    /// Humidity (%)
    pub humidity: f64,
    /// Rain probability (%)
    pub rain_probability: f64,
    /// PM2.5 grade
    pub pm25_grade: AirGrade,
}

/// Every activity scored against one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    /// Inputs the scores were computed from
    pub weather_summary: WeatherSummary,
    /// Results in registry order; out-of-season activities are omitted
    pub activities: Vec<ActivityEntry>,
    /// First activity holding the top score, even when that score is zero;
    /// absent only when no activity was scored
    pub best_activity: Option<BestActivity>,
}

impl AggregateReport {
    /// Result for one activity
    #[must_use]
    pub fn get(&self, activity: Activity) -> Option<&ScoreResult> {
        self.activities
            .iter()
            .find(|entry| entry.activity == activity)
            .map(|entry| &entry.result)
    }

    /// Score for one activity, 0 when it was not scored
    #[must_use]
    pub fn score_of(&self, activity: Activity) -> u8 {
        self.get(activity).map_or(0, |result| result.score)
    }
}

/// Score every activity in `activities` against the same conditions
#[must_use]
pub fn aggregate_over(c: &Conditions, activities: &[Activity]) -> AggregateReport {
    let scored: Vec<(Activity, Option<ScoreResult>)> = activities
        .par_iter()
        .map(|activity| (*activity, activity.score(c)))
        .collect();

    let entries: Vec<ActivityEntry> = scored
        .into_iter()
        .filter_map(|(activity, result)| {
            result.map(|result| ActivityEntry {
                activity,
                name: activity.label(),
                result,
            })
        })
        .collect();

    // the earlier entry survives ties
    let best = entries
        .iter()
        .fold(None::<&ActivityEntry>, |best, entry| match best {
            Some(top) if top.result.score >= entry.result.score => best,
            _ => Some(entry),
        });
    let best_activity = best.map(|entry| BestActivity {
        activity: entry.activity,
        name: entry.name,
        score: entry.result.score,
        message: entry.result.message,
    });
    debug!(
        scored = entries.len(),
        best = best_activity.as_ref().map(|b| b.activity.key()),
        "aggregated activities"
    );

    AggregateReport {
        weather_summary: WeatherSummary {
            temperature: c.weather.temperature,
            humidity: c.weather.humidity,
            rain_probability: c.weather.rain_probability,
            pm25_grade: c.air.pm25_grade,
        },
        activities: entries,
        best_activity,
    }
}

/// Score every registered activity
#[must_use]
pub fn aggregate(c: &Conditions) -> AggregateReport {
    aggregate_over(c, &Activity::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nalssi_core::models::{AirQualitySnapshot, WeatherSnapshot};

    fn on(month: u32) -> Conditions {
        Conditions::new(
            WeatherSnapshot::new(18.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::from_values(20.0, 10.0),
            NaiveDate::from_ymd_opt(2025, month, 12).unwrap(),
        )
    }

    #[test]
    fn out_of_season_activities_are_omitted() {
        let summer = aggregate(&on(7));
        assert_eq!(summer.activities.len(), Activity::ALL.len() - 1);
        assert!(summer.get(Activity::Kimjang).is_none());

        let winter = aggregate(&on(11));
        assert_eq!(winter.activities.len(), Activity::ALL.len());
    }

    #[test]
    fn results_follow_registry_order() {
        let report = aggregate(&on(5));
        let order: Vec<Activity> = report.activities.iter().map(|e| e.activity).collect();
        let expected: Vec<Activity> = Activity::ALL
            .into_iter()
            .filter(|a| *a != Activity::Kimjang)
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn best_activity_prefers_first_on_tie() {
        let report = aggregate(&on(5));
        let best = report.best_activity.unwrap();
        let top = report.activities.iter().map(|e| e.result.score).max().unwrap();
        let first = report
            .activities
            .iter()
            .find(|e| e.result.score == top)
            .unwrap();
        assert_eq!(best.activity, first.activity);
        assert_eq!(best.score, top);
    }

    #[test]
    fn zero_scores_still_name_a_best_activity() {
        let hazy = Conditions::new(
            WeatherSnapshot::new(18.0, 50.0, 2.0, 0.0),
            AirQualitySnapshot::from_values(150.0, 90.0),
            NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
        );
        let report = aggregate_over(&hazy, &[Activity::Running]);
        let best = report.best_activity.unwrap();
        assert_eq!(best.activity, Activity::Running);
        assert_eq!(best.score, 0);

        assert!(aggregate_over(&hazy, &[]).best_activity.is_none());
    }
}
