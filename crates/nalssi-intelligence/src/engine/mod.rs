// ABOUTME: Generic weighted factor scorer evaluating per-activity data tables
// ABOUTME: Guards run first, then each check applies at most one rung, then clamp and grade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weighted Factor Engine
//!
//! Every activity index is a [`ScoreTable`]: a baseline, an ordered list of
//! [`Check`]s and a grade table. A check is a ladder of [`Rung`]s ordered from
//! most to least severe; the first rung whose predicate holds contributes its
//! points and text, and the rest of the ladder is skipped. Checks are
//! independent of each other and always all evaluated.
//!
//! Predicates read snapshot fields through [`Field`], which returns `None`
//! for absent or sentinel readings. A comparison against `None` never holds,
//! so a missing measurement is neutral rather than penalizing.

mod condition;
mod table;
mod template;

pub use condition::{estimate_aqi, Cmp, Conditions, Field, When, RAINY, SNOWY};
pub(crate) use table::clamp_score;
pub use table::{Check, Effect, Guard, Polarity, RiskGrading, Rung, ScoreTable, Tally};
pub use template::{format_number, render};
