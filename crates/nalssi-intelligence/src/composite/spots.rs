// ABOUTME: Place recommendations sized by how good the weather is for the activity
// ABOUTME: Better scores surface more spots from the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity::Activity;
use crate::catalog::{Spot, SpotCatalog};
use crate::engine::Conditions;
use nalssi_core::grade::{GradeStep, GradeTable};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
struct Tier {
    count: usize,
    template: &'static str,
}

impl Tier {
    const fn new(count: usize, template: &'static str) -> Self {
        Self { count, template }
    }

    fn message(self, name: &str) -> String {
        self.template.replace("{name}", name)
    }
}

const TIERS: GradeTable<Tier> = GradeTable::new(
    &[
        GradeStep::new(80.0, Tier::new(5, "{name}하기 최적의 날씨!")),
        GradeStep::new(60.0, Tier::new(3, "{name}하기 좋은 날씨입니다.")),
        GradeStep::new(40.0, Tier::new(2, "{name} 가능하지만 주의사항 확인")),
    ],
    Tier::new(1, "오늘은 {name}에 적합하지 않아요."),
);

/// Spots for one activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySpots {
    /// Activity
    pub activity: Activity,
    /// Korean name
    pub activity_name: &'static str,
    /// Score the count was derived from
    pub weather_score: u8,
    /// Headline
    pub recommendation: String,
    /// Spots, best first
    pub spots: Vec<Spot>,
    /// Size of the full list
    pub total_available: usize,
}

/// Spots for an activity given its weather score
///
/// Returns `None` when the catalog has no places for the activity.
#[must_use]
pub fn activity_spots(
    catalog: &dyn SpotCatalog,
    activity: Activity,
    weather_score: u8,
) -> Option<ActivitySpots> {
    let all = catalog.spots(activity);
    if all.is_empty() {
        return None;
    }
    let tier = TIERS.bucket(f64::from(weather_score));
    let name = activity.label();
    Some(ActivitySpots {
        activity,
        activity_name: name,
        weather_score,
        recommendation: tier.message(name),
        spots: all.iter().take(tier.count).copied().collect(),
        total_available: all.len(),
    })
}

/// Spots for one activity inside a multi-activity listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotGroup {
    /// Activity
    pub activity: Activity,
    /// Korean name
    pub name: &'static str,
    /// Spots, best first
    pub spots: Vec<Spot>,
    /// Size of the full list
    pub total: usize,
}

/// Spot listing keyed off a coarse weather score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotListing {
    /// 100 minus rain and temperature penalties
    pub weather_score: u8,
    /// One group per listed activity
    pub activities: Vec<SpotGroup>,
}

/// Coarse weather score used for spot listings
#[must_use]
pub fn listing_score(c: &Conditions) -> u8 {
    let mut score: u8 = 100;
    if c.weather.rain_probability >= 50.0 {
        score -= 30;
    }
    let temp = c.weather.temperature;
    if !(0.0..=35.0).contains(&temp) {
        score -= 20;
    }
    score
}

/// Spots for one activity, or for every activity that has spots
///
/// Fair weather (score 70 or more) lists more places per activity.
#[must_use]
pub fn recommended_spots(
    catalog: &dyn SpotCatalog,
    c: &Conditions,
    activity: Option<Activity>,
) -> SpotListing {
    let weather_score = listing_score(c);
    let fair = weather_score >= 70;
    let (targets, count): (Vec<Activity>, usize) = match activity {
        Some(one) => (vec![one], if fair { 5 } else { 3 }),
        None => (Activity::WITH_SPOTS.to_vec(), if fair { 3 } else { 2 }),
    };

    let activities = targets
        .into_iter()
        .filter_map(|activity| {
            let all = catalog.spots(activity);
            (!all.is_empty()).then(|| SpotGroup {
                activity,
                name: activity.label(),
                spots: all.iter().take(count).copied().collect(),
                total: all.len(),
            })
        })
        .collect();

    SpotListing {
        weather_score,
        activities,
    }
}
