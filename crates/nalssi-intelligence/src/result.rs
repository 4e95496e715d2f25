// ABOUTME: Uniform score result returned by every weighted factor scorer and guard
// ABOUTME: Higher score is always better; risk scorers also expose the raw risk value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::BTreeMap;

/// Grade label plus the message shown with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeLabel {
    /// Grade name
    pub grade: &'static str,
    /// Headline message for the grade
    pub message: &'static str,
    /// Alternative activity-flavored label, when the index defines one
    pub grade_kr: Option<&'static str>,
}

impl GradeLabel {
    /// Label with a message
    #[must_use]
    pub const fn new(grade: &'static str, message: &'static str) -> Self {
        Self {
            grade,
            message,
            grade_kr: None,
        }
    }

    /// Label with an activity-flavored alias
    #[must_use]
    pub const fn aliased(grade: &'static str, grade_kr: &'static str, message: &'static str) -> Self {
        Self {
            grade,
            message,
            grade_kr: Some(grade_kr),
        }
    }
}

/// Result of one scorer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// 0-100, higher is better
    pub score: u8,
    /// Grade resolved from the grade table
    pub grade: &'static str,
    /// Activity-flavored grade alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_kr: Option<&'static str>,
    /// Headline message
    pub message: &'static str,
    /// Accumulated risk for inverted scorers (100 - score)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<u8>,
    /// Conditions that affected the score, never empty
    pub factors: Vec<String>,
    /// Actionable advice, never empty
    pub recommendations: Vec<String>,
    /// Safety-critical hazards
    pub warnings: Vec<String>,
    /// Points contributed by each check
    pub breakdown: BTreeMap<&'static str, f64>,
}

impl ScoreResult {
    /// Whether any warning was raised
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
