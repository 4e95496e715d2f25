// ABOUTME: Weekend planner comparing today's and tomorrow's aggregates for outdoor chores
// ABOUTME: Tomorrow's snapshot reuses today's readings with tomorrow's rain probability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::aggregate::{aggregate, AggregateReport};
use crate::activity::Activity;
use crate::engine::Conditions;
use chrono::Days;
use serde::Serialize;

/// Today versus tomorrow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekendReport {
    /// Today's aggregate
    pub today: AggregateReport,
    /// Tomorrow's aggregate
    pub tomorrow: AggregateReport,
    /// One line per activity whose scores differ by more than the margin
    pub comparison: Vec<String>,
}

/// Conditions for the following day
#[must_use]
pub fn tomorrow_of(c: &Conditions) -> Conditions {
    let date = c.date.checked_add_days(Days::new(1)).unwrap_or(c.date);
    Conditions::new(c.weather.tomorrow(), c.air, date)
}

/// Compare today and tomorrow
#[must_use]
pub fn weekend(c: &Conditions, margin: u8) -> WeekendReport {
    let today = aggregate(c);
    let tomorrow = aggregate(&tomorrow_of(c));
    let margin = u16::from(margin);

    let comparison = Activity::WEEKEND
        .into_iter()
        .filter_map(|activity| {
            let t = today.score_of(activity);
            let m = tomorrow.score_of(activity);
            if u16::from(t) > u16::from(m) + margin {
                Some(format!("{}: 오늘이 더 좋아요 ({t} vs {m})", activity.label()))
            } else if u16::from(m) > u16::from(t) + margin {
                Some(format!("{}: 내일이 더 좋아요 ({m} vs {t})", activity.label()))
            } else {
                None
            }
        })
        .collect();

    WeekendReport {
        today,
        tomorrow,
        comparison,
    }
}
