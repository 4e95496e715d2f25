// ABOUTME: Property tests for score bounds, non-empty advice, and grade ordering across every table
// ABOUTME: Random snapshots over the full sensor ranges must yield scores in 0-100 for scorers and composites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nalssi_core::models::{AirQualitySnapshot, Sky, WeatherSnapshot};
use nalssi_intelligence::composite::{commute, date_course, outing_score};
use nalssi_intelligence::engine::ScoreTable;
use nalssi_intelligence::outfit::comprehensive;
use nalssi_intelligence::scorers::{
    allergy, bbq, camping, car_wash, cold_flu, drive, exercise, fishing, golf, hiking, joint_pain,
    kimjang, laundry, migraine, photography, picnic, running, sleep,
};
use nalssi_intelligence::{Activity, Conditions, IntelligenceConfig};
use proptest::prelude::*;

const TABLES: [&ScoreTable; 22] = [
    &allergy::TABLE,
    &bbq::TABLE,
    &camping::TABLE,
    &car_wash::TABLE,
    &cold_flu::TABLE,
    &drive::TABLE,
    &exercise::TABLE,
    &fishing::TABLE,
    &golf::TABLE,
    &hiking::TABLE,
    &joint_pain::TABLE,
    &kimjang::TABLE,
    &laundry::TABLE,
    &migraine::TABLE,
    &photography::TABLE,
    &picnic::TABLE,
    &running::TABLE,
    &sleep::TABLE,
    &commute::CAR,
    &commute::TRANSIT,
    &commute::WALK_BIKE,
    &date_course::TABLE,
];

/// PM reading or the -1 "unavailable" marker
fn pm(max: f64) -> impl Strategy<Value = f64> {
    prop_oneof![1 => Just(-1.0), 9 => 0.0..=max]
}

prop_compose! {
    fn conditions()(
        temp in -40.0f64..=50.0,
        humidity in 0.0f64..=100.0,
        wind in 0.0f64..=40.0,
        rain in 0.0f64..=100.0,
        pm10 in pm(300.0),
        pm25 in pm(200.0),
        sky in prop::sample::select(Sky::ALL.to_vec()),
        month in 1u32..=12,
    ) -> Conditions {
        Conditions::new(
            WeatherSnapshot::new(temp, humidity, wind, rain).with_sky(sky),
            AirQualitySnapshot::from_values(pm10, pm25),
            NaiveDate::from_ymd_opt(2025, month, 15).unwrap(),
        )
    }
}

proptest! {
    #[test]
    fn scores_stay_in_range_with_advice(c in conditions()) {
        for activity in Activity::ALL {
            if let Some(result) = activity.score(&c) {
                prop_assert!(result.score <= 100, "{} scored {}", activity.key(), result.score);
                prop_assert!(!result.factors.is_empty(), "{} has no factors", activity.key());
                prop_assert!(
                    !result.recommendations.is_empty(),
                    "{} has no recommendations",
                    activity.key()
                );
            }
        }
    }

    #[test]
    fn composites_stay_in_range(c in conditions()) {
        let config = IntelligenceConfig::default();

        let report = commute(&c, &config.commute);
        prop_assert!(report.result.score <= 100);
        prop_assert!(report.by_mode.values().all(|mode| mode.score <= 100));

        prop_assert!(outing_score(&c, &config.outing).score <= 100);
        prop_assert!(comprehensive(&c, &config.outing).outing_score.score <= 100);
    }

    #[test]
    fn higher_scores_never_get_worse_grades(low in 0u8..=100, high in 0u8..=100) {
        prop_assume!(low <= high);
        for table in TABLES {
            prop_assert!(
                table.standing(high) <= table.standing(low),
                "{} ranks {} below {}",
                table.name,
                high,
                low
            );
        }
    }
}
