// ABOUTME: Composite indices built on top of the per-activity scorers
// ABOUTME: Commute, outing, aggregation, comparisons, planning, and place recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Composite Indices
//!
//! Composites either combine several score tables (commute, aggregate,
//! compare, weekend) or apply a small dedicated model (outing, best time,
//! date course, spots). None of them reach outside the snapshot they are
//! given; places come from an injected [`SpotCatalog`](crate::catalog::SpotCatalog).

/// All-activity aggregation and best activity
pub mod aggregate;
/// Best hour of the day for an activity
pub mod best_time;
/// Commute modes and weighted commute score
pub mod commute;
/// Head-to-head activity comparison
pub mod compare;
/// Date course recommendation
pub mod date_course;
/// Outing score
pub mod outing;
/// Place recommendations
pub mod spots;
/// Today versus tomorrow
pub mod weekend;

pub use aggregate::{aggregate, aggregate_over, AggregateReport, BestActivity};
pub use best_time::{best_time, BestTimeReport, PlanKind};
pub use commute::{commute, CommuteMode, CommuteReport};
pub use compare::{compare, Comparison};
pub use date_course::{date_course, DateCourseReport};
pub use outing::{outing_score, OutingReport};
pub use spots::{activity_spots, recommended_spots, ActivitySpots, SpotListing};
pub use weekend::{weekend, WeekendReport};
