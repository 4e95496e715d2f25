// ABOUTME: Score tables, check ladders, guards, and the evaluator that turns them into results
// ABOUTME: First matching rung per check wins; guards short-circuit before any accumulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::condition::{Conditions, Field, When};
use super::template::render;
use crate::result::{GradeLabel, ScoreResult};
use nalssi_core::grade::GradeTable;
use std::collections::BTreeMap;
use tracing::trace;

/// Points applied by a rung
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Fixed delta
    Points(f64),
    /// The field value itself, capped (absent value contributes nothing)
    FieldCapped(Field, f64),
}

impl Effect {
    fn points(self, c: &Conditions) -> f64 {
        match self {
            Self::Points(points) => points,
            Self::FieldCapped(field, cap) => field.value(c).map_or(0.0, |v| v.min(cap)),
        }
    }
}

/// One rung of a check ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    when: When,
    effect: Effect,
    factor: Option<&'static str>,
    tip: Option<&'static str>,
    warning: Option<&'static str>,
}

impl Rung {
    /// Rung applying a fixed delta
    #[must_use]
    pub const fn new(when: When, points: f64) -> Self {
        Self {
            when,
            effect: Effect::Points(points),
            factor: None,
            tip: None,
            warning: None,
        }
    }

    /// Rung applying `min(field, cap)`
    #[must_use]
    pub const fn capped(when: When, field: Field, cap: f64) -> Self {
        Self {
            when,
            effect: Effect::FieldCapped(field, cap),
            factor: None,
            tip: None,
            warning: None,
        }
    }

    /// Factor text template
    #[must_use]
    pub const fn factor(mut self, text: &'static str) -> Self {
        self.factor = Some(text);
        self
    }

    /// Recommendation text template
    #[must_use]
    pub const fn tip(mut self, text: &'static str) -> Self {
        self.tip = Some(text);
        self
    }

    /// Warning text template
    #[must_use]
    pub const fn warning(mut self, text: &'static str) -> Self {
        self.warning = Some(text);
        self
    }
}

/// An independently evaluated condition ladder
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// Key used in the breakdown
    pub name: &'static str,
    /// Rungs from most to least severe
    pub rungs: &'static [Rung],
}

/// Hazard that disqualifies the activity outright
#[derive(Debug, Clone, Copy)]
pub struct Guard {
    /// Hazard predicate
    pub when: When,
    /// Factor templates
    pub factors: &'static [&'static str],
    /// Recommendation templates
    pub recommendations: &'static [&'static str],
    /// Warning templates
    pub warnings: &'static [&'static str],
}

/// How the grade of a risk scorer is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskGrading {
    /// Grade table is keyed on the risk value (top bucket = highest risk)
    OnRisk,
    /// Grade table is keyed on the published score
    OnScore,
}

/// Direction of accumulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polarity {
    /// Start from the baseline; deltas move the score directly
    Goodness(f64),
    /// Accumulate risk from zero; published score is `100 - risk`
    Risk(RiskGrading),
}

/// Accumulated, unclamped evaluation state
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    /// Baseline plus all deltas (or total risk), before clamping
    pub raw: f64,
    /// Rendered factors
    pub factors: Vec<String>,
    /// Rendered recommendations
    pub recommendations: Vec<String>,
    /// Rendered warnings
    pub warnings: Vec<String>,
    /// Points per check
    pub breakdown: BTreeMap<&'static str, f64>,
}

/// A complete weighted factor scorer
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    /// Index name for logging
    pub name: &'static str,
    /// Accumulation direction
    pub polarity: Polarity,
    /// Hazards checked before anything else
    pub guards: &'static [Guard],
    /// Ordered checks
    pub checks: &'static [Check],
    /// Grade table
    pub grades: GradeTable<GradeLabel>,
    /// Factor used when no check produced one
    pub default_factor: &'static str,
    /// Recommendation used when no check produced one
    pub default_tip: &'static str,
}

impl ScoreTable {
    /// Run guards, then the weighted checks
    #[must_use]
    pub fn evaluate(&self, c: &Conditions) -> ScoreResult {
        if let Some(guard) = self.guards.iter().find(|guard| guard.when.holds(c)) {
            trace!(index = self.name, "disqualifier triggered");
            return self.disqualified(guard, c);
        }
        let tally = self.tally(c);
        self.finish(tally)
    }

    /// Accumulate every check without clamping
    #[must_use]
    pub fn tally(&self, c: &Conditions) -> Tally {
        let mut tally = Tally {
            raw: match self.polarity {
                Polarity::Goodness(baseline) => baseline,
                Polarity::Risk(_) => 0.0,
            },
            factors: Vec::new(),
            recommendations: Vec::new(),
            warnings: Vec::new(),
            breakdown: BTreeMap::new(),
        };

        for check in self.checks {
            let applied = check.rungs.iter().find(|rung| rung.when.holds(c));
            let points = applied.map_or(0.0, |rung| rung.effect.points(c));
            if let Some(rung) = applied {
                push_rendered(&mut tally.factors, rung.factor, c);
                push_rendered(&mut tally.recommendations, rung.tip, c);
                push_rendered(&mut tally.warnings, rung.warning, c);
            }
            tally.raw += points;
            *tally.breakdown.entry(check.name).or_insert(0.0) += points;
        }
        tally
    }

    /// Clamp, grade, and fill defaults
    #[must_use]
    pub fn finish(&self, tally: Tally) -> ScoreResult {
        let clamped = clamp_score(tally.raw);
        let (score, risk) = match self.polarity {
            Polarity::Goodness(_) => (clamped, None),
            Polarity::Risk(_) => (100 - clamped, Some(clamped)),
        };
        let label = self.label_for(score);

        ScoreResult {
            score,
            grade: label.grade,
            grade_kr: label.grade_kr,
            message: label.message,
            risk,
            factors: or_default(tally.factors, self.default_factor),
            recommendations: or_default(tally.recommendations, self.default_tip),
            warnings: tally.warnings,
            breakdown: tally.breakdown,
        }
    }

    /// Grade label for a published score
    #[must_use]
    pub fn label_for(&self, score: u8) -> GradeLabel {
        match self.polarity {
            Polarity::Risk(RiskGrading::OnRisk) => self.grades.bucket(f64::from(100 - score)),
            Polarity::Goodness(_) | Polarity::Risk(RiskGrading::OnScore) => {
                self.grades.bucket(f64::from(score))
            }
        }
    }

    /// Position of the grade for a published score, 0 being the most favorable
    #[must_use]
    pub fn standing(&self, score: u8) -> usize {
        match self.polarity {
            Polarity::Risk(RiskGrading::OnRisk) => {
                self.grades.len() - 1 - self.grades.rank(f64::from(100 - score))
            }
            Polarity::Goodness(_) | Polarity::Risk(RiskGrading::OnScore) => {
                self.grades.rank(f64::from(score))
            }
        }
    }

    fn disqualified(&self, guard: &Guard, c: &Conditions) -> ScoreResult {
        let label = match self.polarity {
            Polarity::Risk(RiskGrading::OnRisk) => self.grades.best(),
            Polarity::Goodness(_) | Polarity::Risk(RiskGrading::OnScore) => self.grades.worst(),
        };
        let render_all = |texts: &[&'static str]| -> Vec<String> {
            texts.iter().map(|text| render(text, c)).collect()
        };

        ScoreResult {
            score: 0,
            grade: label.grade,
            grade_kr: label.grade_kr,
            message: label.message,
            risk: matches!(self.polarity, Polarity::Risk(_)).then_some(100),
            factors: or_default(render_all(guard.factors), self.default_factor),
            recommendations: or_default(render_all(guard.recommendations), self.default_tip),
            warnings: render_all(guard.warnings),
            breakdown: BTreeMap::new(),
        }
    }
}

fn push_rendered(list: &mut Vec<String>, template: Option<&'static str>, c: &Conditions) {
    if let Some(text) = template {
        list.push(render(text, c));
    }
}

fn or_default(list: Vec<String>, fallback: &'static str) -> Vec<String> {
    if list.is_empty() {
        vec![fallback.to_owned()]
    } else {
        list
    }
}

/// Round and clamp a raw accumulation into `[0, 100]`
#[must_use]
pub(crate) fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cmp;
    use chrono::NaiveDate;
    use nalssi_core::grade::GradeStep;
    use nalssi_core::models::{AirQualitySnapshot, Sky, WeatherSnapshot};

    const GRADES: GradeTable<GradeLabel> = GradeTable::new(
        &[
            GradeStep::new(80.0, GradeLabel::new("좋음", "good")),
            GradeStep::new(40.0, GradeLabel::new("보통", "fair")),
        ],
        GradeLabel::new("나쁨", "poor"),
    );

    const TABLE: ScoreTable = ScoreTable {
        name: "test",
        polarity: Polarity::Goodness(100.0),
        guards: &[Guard {
            when: When::Sky(&[Sky::Thunderstorm]),
            factors: &["낙뢰"],
            recommendations: &["대피"],
            warnings: &["위험"],
        }],
        checks: &[
            Check {
                name: "rain",
                rungs: &[
                    Rung::new(When::Is(Field::RainProbability, Cmp::AtLeast(60.0)), -50.0)
                        .factor("비 {rain}%")
                        .warning("비 예보"),
                    Rung::new(When::Is(Field::RainProbability, Cmp::AtLeast(30.0)), -20.0)
                        .factor("비 가능성 {rain}%"),
                ],
            },
            Check {
                name: "temperature",
                rungs: &[Rung::new(When::Is(Field::Temperature, Cmp::Between(15.0, 22.0)), 10.0)
                    .factor("기온 {temp}°C (최적)")],
            },
        ],
        grades: GRADES,
        default_factor: "양호",
        default_tip: "즐기세요",
    };

    fn conditions(weather: WeatherSnapshot) -> Conditions {
        Conditions::new(
            weather,
            AirQualitySnapshot::default(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    #[test]
    fn only_most_severe_rung_applies() {
        let result = TABLE.evaluate(&conditions(WeatherSnapshot::new(30.0, 50.0, 1.0, 70.0)));
        assert_eq!(result.score, 50);
        assert_eq!(result.factors, vec!["비 70%".to_owned()]);
        assert_eq!(result.warnings, vec!["비 예보".to_owned()]);
        assert_eq!(result.breakdown["rain"], -50.0);
        assert_eq!(result.breakdown["temperature"], 0.0);
    }

    #[test]
    fn clamps_and_fills_defaults() {
        let result = TABLE.evaluate(&conditions(WeatherSnapshot::new(18.0, 50.0, 1.0, 0.0)));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, "좋음");
        assert_eq!(result.recommendations, vec!["즐기세요".to_owned()]);
        assert_eq!(result.factors, vec!["기온 18°C (최적)".to_owned()]);
    }

    #[test]
    fn guard_short_circuits() {
        let weather = WeatherSnapshot::new(18.0, 50.0, 0.0, 0.0).with_sky(Sky::Thunderstorm);
        let result = TABLE.evaluate(&conditions(weather));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, "나쁨");
        assert_eq!(result.warnings, vec!["위험".to_owned()]);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn risk_polarity_inverts() {
        const RISK: ScoreTable = ScoreTable {
            polarity: Polarity::Risk(RiskGrading::OnRisk),
            guards: &[],
            ..TABLE
        };
        let result = RISK.evaluate(&conditions(WeatherSnapshot::new(18.0, 50.0, 1.0, 0.0)));
        assert_eq!(result.risk, Some(10));
        assert_eq!(result.score, 90);
        assert_eq!(RISK.standing(90), 0);
        assert_eq!(RISK.standing(10), 2);
    }

    #[test]
    fn clamp_rounds_and_bounds() {
        assert_eq!(clamp_score(-20.0), 0);
        assert_eq!(clamp_score(130.0), 100);
        assert_eq!(clamp_score(49.6), 50);
        assert_eq!(clamp_score(f64::NAN), 0);
    }
}
