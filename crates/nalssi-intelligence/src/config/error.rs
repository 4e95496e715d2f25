// ABOUTME: Errors raised while loading or validating the composite scoring configuration
// ABOUTME: Each variant names the weight group, margin, or variable that was rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A single weight outside `[0, 1]`
    #[error("{group} weight {value} is outside 0.0..=1.0")]
    WeightOutOfRange {
        /// Weight group (`commute` or `outing`)
        group: &'static str,
        /// Offending value
        value: f64,
    },

    /// A weight group whose members do not add up to 1
    #[error("{group} weights sum to {sum:.3}, expected 1.0")]
    UnbalancedWeights {
        /// Weight group (`commute` or `outing`)
        group: &'static str,
        /// Actual total
        sum: f64,
    },

    /// A score margin above 100 points
    #[error("{name} is {value}, at most 100 points allowed")]
    MarginTooLarge {
        /// Margin name
        name: &'static str,
        /// Offending value
        value: u8,
    },

    /// An environment variable that is set but cannot be parsed
    #[error("cannot parse {var}={value}")]
    Parse {
        /// Variable name
        var: String,
        /// Raw value
        value: String,
    },

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}
