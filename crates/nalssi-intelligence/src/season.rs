// ABOUTME: Calendar seasons and month-based availability gates for seasonal indices
// ABOUTME: A gated-off index yields an explicit Unavailable variant instead of a degraded score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Meteorological season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Season {
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Autumn,
    /// December to February
    Winter,
}

impl Season {
    /// Season of a calendar month
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Parse a Korean or English season name
    #[must_use]
    pub fn from_label(text: &str) -> Option<Self> {
        match text.trim() {
            "봄" | "spring" => Some(Self::Spring),
            "여름" | "summer" => Some(Self::Summer),
            "가을" | "autumn" | "fall" => Some(Self::Autumn),
            "겨울" | "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// Korean label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "봄",
            Self::Summer => "여름",
            Self::Autumn => "가을",
            Self::Winter => "겨울",
        }
    }
}

impl From<Season> for &'static str {
    fn from(season: Season) -> Self {
        season.label()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a season-gated index
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonGated<T> {
    /// The index is in season and was computed
    Available(T),
    /// The index is not offered on this date
    Unavailable {
        /// Explanation shown to the user
        message: &'static str,
        /// Advice that still applies out of season
        tips: Vec<&'static str>,
        /// Months in which the index is offered
        available_months: &'static [u32],
    },
}

impl<T> SeasonGated<T> {
    /// Whether the index was computed
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The computed value, if any
    #[must_use]
    pub const fn available(&self) -> Option<&T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Months during which an index is offered
#[derive(Debug, Clone, Copy)]
pub struct SeasonGate {
    /// Offered months (1-12)
    pub months: &'static [u32],
    /// Message for out-of-season requests
    pub message: &'static str,
    /// Tips returned with the unavailable result
    pub tips: &'static [&'static str],
}

impl SeasonGate {
    /// Whether the date falls inside the gate
    #[must_use]
    pub fn is_open(&self, date: NaiveDate) -> bool {
        self.months.contains(&date.month())
    }

    /// Compute the index when open, otherwise return the unavailable variant
    pub fn run<T>(&self, date: NaiveDate, compute: impl FnOnce() -> T) -> SeasonGated<T> {
        if self.is_open(date) {
            SeasonGated::Available(compute())
        } else {
            SeasonGated::Unavailable {
                message: self.message,
                tips: self.tips.to_vec(),
                available_months: self.months,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATE: SeasonGate = SeasonGate {
        months: &[10, 11, 12, 1],
        message: "제철 아님",
        tips: &["11월 중순"],
    };

    #[test]
    fn gate_closed_outside_months() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let result = GATE.run(date, || 42);
        assert!(!result.is_available());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["available_months"][0], 10);
    }

    #[test]
    fn gate_open_inside_months() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(GATE.run(date, || 42).available(), Some(&42));
    }

    #[test]
    fn seasons_by_month() {
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_label("가을"), Some(Season::Autumn));
    }
}
