// ABOUTME: Concrete activity and health indices, one score table per module
// ABOUTME: Each module exposes its TABLE plus a scoring function returning a result or report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Allergy risk
pub mod allergy;
/// Barbecue
pub mod bbq;
/// Camping
pub mod camping;
/// Car wash
pub mod car_wash;
/// Cold and flu risk
pub mod cold_flu;
/// Driving
pub mod drive;
/// Outdoor exercise
pub mod exercise;
/// Fishing
pub mod fishing;
/// Golf
pub mod golf;
/// Hiking
pub mod hiking;
/// Joint pain risk
pub mod joint_pain;
/// Kimjang, season gated
pub mod kimjang;
/// Laundry drying
pub mod laundry;
/// Migraine risk
pub mod migraine;
/// Photography
pub mod photography;
/// Picnic
pub mod picnic;
/// Running
pub mod running;
/// Sleep quality
pub mod sleep;

pub use allergy::{allergy, AllergyReport};
pub use bbq::bbq;
pub use camping::camping;
pub use car_wash::car_wash;
pub use cold_flu::cold_flu;
pub use drive::drive;
pub use exercise::{exercise, ExerciseReport};
pub use fishing::fishing;
pub use golf::golf;
pub use hiking::{hiking, HikingReport};
pub use joint_pain::joint_pain;
pub use kimjang::{kimjang, KimjangReport};
pub use laundry::laundry;
pub use migraine::migraine;
pub use photography::{photography, PhotographyReport};
pub use picnic::{picnic, PicnicReport};
pub use running::running;
pub use sleep::{sleep, SleepReport};
