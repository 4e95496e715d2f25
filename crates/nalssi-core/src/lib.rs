// ABOUTME: Core types and constants for the Nalssi weather lifestyle index server
// ABOUTME: Foundation crate with error handling, snapshot models, grade tables, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nalssi Core
//!
//! Foundation crate providing shared types and constants for the Nalssi
//! weather lifestyle index platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Cache TTLs, air quality thresholds, and neutral defaults
//! - **grade**: Threshold tables mapping a numeric value to an ordered label
//! - **models**: Weather, air quality, and forecast snapshots

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Descending threshold tables (the grade bucketer)
pub mod grade;

/// Normalized weather and air quality snapshots
pub mod models;
