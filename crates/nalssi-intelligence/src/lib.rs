// ABOUTME: Weather lifestyle index engine turning weather and air snapshots into scored advice
// ABOUTME: Data-driven scorers, disqualifier guards, season gates, composites, and life indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nalssi Intelligence
//!
//! Pure, synchronous scoring over a [`Conditions`](engine::Conditions)
//! snapshot. Nothing here performs I/O: data sources, caching, and the
//! JSON-RPC surface live in the server crate.
//!
//! ## Modules
//!
//! - **engine**: the weighted factor evaluator shared by every table
//! - **scorers**: one score table per activity or health index
//! - **composite**: commute, outing, aggregation, comparison, and planning
//! - **life**: UV, heat, pollen, and food poisoning indices
//! - **outfit**: clothing advice by temperature band
//! - **catalog**: places and date courses behind the `SpotCatalog` trait
//! - **config**: composite weights and margins

/// Activity registry and name resolution
pub mod activity;

/// Place and date course catalog
pub mod catalog;

/// Composite indices
pub mod composite;

/// Composite weights and margins
pub mod config;

/// Weighted factor engine
pub mod engine;

/// Life weather indices
pub mod life;

/// Clothing advice
pub mod outfit;

/// Uniform score result
pub mod result;

/// Activity and health scorers
pub mod scorers;

/// Seasons and month gates
pub mod season;

pub use activity::Activity;
pub use catalog::{DateStyle, SeoulCatalog, SpotCatalog};
pub use config::IntelligenceConfig;
pub use engine::Conditions;
pub use result::ScoreResult;
pub use season::{Season, SeasonGated};
