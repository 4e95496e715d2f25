// ABOUTME: Grade bucketer mapping a numeric value onto an ordered label via threshold lookup
// ABOUTME: Tables are descending (threshold, label) pairs with a floor label covering the rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Grade Tables
//!
//! A `GradeTable` is a descending list of lower bounds. The first step whose
//! bound is `<=` the value wins, so a value sitting exactly on a boundary
//! lands in the higher bucket. Every table carries a floor label, which makes
//! lookup total: there is no "undefined" outcome for any input, including
//! `NaN`.
//!
//! ```rust
//! use nalssi_core::grade::{GradeStep, GradeTable};
//!
//! const UV: GradeTable<&str> = GradeTable::new(
//!     &[
//!         GradeStep::new(11.0, "위험"),
//!         GradeStep::new(8.0, "매우높음"),
//!         GradeStep::new(6.0, "높음"),
//!         GradeStep::new(3.0, "보통"),
//!     ],
//!     "낮음",
//! );
//!
//! assert_eq!(UV.bucket(8.0), "매우높음");
//! assert_eq!(UV.bucket(2.9), "낮음");
//! ```

use std::iter;

/// One rung of a grade table: values `>= min` receive `label`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeStep<L> {
    /// Inclusive lower bound
    pub min: f64,
    /// Label assigned to values at or above `min`
    pub label: L,
}

impl<L> GradeStep<L> {
    /// Create a new step
    #[must_use]
    pub const fn new(min: f64, label: L) -> Self {
        Self { min, label }
    }
}

/// Descending threshold table with a floor label
#[derive(Debug, Clone, Copy)]
pub struct GradeTable<L: 'static> {
    steps: &'static [GradeStep<L>],
    floor: L,
}

impl<L: Copy> GradeTable<L> {
    /// Create a table from descending steps and the label for everything below them
    #[must_use]
    pub const fn new(steps: &'static [GradeStep<L>], floor: L) -> Self {
        Self { steps, floor }
    }

    /// Resolve the label for `value`
    #[must_use]
    pub fn bucket(&self, value: f64) -> L {
        self.steps
            .iter()
            .find(|step| value >= step.min)
            .map_or(self.floor, |step| step.label)
    }

    /// Position of the bucket for `value`, 0 being the top bucket
    #[must_use]
    pub fn rank(&self, value: f64) -> usize {
        self.steps
            .iter()
            .position(|step| value >= step.min)
            .unwrap_or(self.steps.len())
    }

    /// Label of the top bucket
    #[must_use]
    pub fn best(&self) -> L {
        self.steps.first().map_or(self.floor, |step| step.label)
    }

    /// Label of the bottom bucket
    #[must_use]
    pub const fn worst(&self) -> L {
        self.floor
    }

    /// Number of buckets including the floor
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len() + 1
    }

    /// Tables always have at least the floor bucket
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether the bounds are strictly descending
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.steps.windows(2).all(|pair| pair[0].min > pair[1].min)
    }

    /// All labels from best to worst
    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.steps
            .iter()
            .map(|step| step.label)
            .chain(iter::once(self.floor))
    }
}
