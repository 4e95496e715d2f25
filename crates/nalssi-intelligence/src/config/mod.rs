// ABOUTME: Scoring configuration for composite weights and comparison margins
// ABOUTME: Defaults reproduce the tuned product values; environment overrides are validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! Only the composite layer is configurable. Per-activity threshold tables
//! are product-tuned constants and live next to their scorers.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Weights combining the three commute modes into the headline score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommuteWeights {
    /// Car or taxi (0.0-1.0)
    pub car: f64,
    /// Bus or subway (0.0-1.0)
    pub transit: f64,
    /// Walking or cycling (0.0-1.0)
    pub walk_bike: f64,
}

impl Default for CommuteWeights {
    fn default() -> Self {
        Self {
            car: 0.40,
            transit: 0.35,
            walk_bike: 0.25,
        }
    }
}

/// Weights combining the four outing sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutingWeights {
    /// Temperature comfort (0.0-1.0)
    pub temperature: f64,
    /// Precipitation (0.0-1.0)
    pub rain: f64,
    /// Fine dust (0.0-1.0)
    pub air: f64,
    /// Wind (0.0-1.0)
    pub wind: f64,
}

impl Default for OutingWeights {
    fn default() -> Self {
        Self {
            temperature: 0.25,
            rain: 0.30,
            air: 0.30,
            wind: 0.15,
        }
    }
}

/// Composite scoring configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Commute mode weights
    pub commute: CommuteWeights,
    /// Outing sub-score weights
    pub outing: OutingWeights,
    /// Score difference below which two activities tie
    pub comparison_margin: u8,
    /// Score difference required to prefer today or tomorrow
    pub weekend_margin: u8,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            commute: CommuteWeights::default(),
            outing: OutingWeights::default(),
            comparison_margin: 10,
            weekend_margin: 10,
        }
    }
}

impl IntelligenceConfig {
    /// Load from environment, falling back to defaults for unset variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            commute: CommuteWeights {
                car: parse_env("NALSSI_COMMUTE_WEIGHT_CAR", defaults.commute.car)?,
                transit: parse_env("NALSSI_COMMUTE_WEIGHT_TRANSIT", defaults.commute.transit)?,
                walk_bike: parse_env("NALSSI_COMMUTE_WEIGHT_WALK", defaults.commute.walk_bike)?,
            },
            outing: defaults.outing,
            comparison_margin: parse_env("NALSSI_COMPARISON_MARGIN", defaults.comparison_margin)?,
            weekend_margin: parse_env("NALSSI_WEEKEND_MARGIN", defaults.weekend_margin)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check weights are within `[0, 1]`, each group sums to 1, and margins fit a score
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking commute weights first
    pub fn validate(&self) -> Result<(), ConfigError> {
        let groups: [(&'static str, &[f64]); 2] = [
            (
                "commute",
                &[self.commute.car, self.commute.transit, self.commute.walk_bike],
            ),
            (
                "outing",
                &[
                    self.outing.temperature,
                    self.outing.rain,
                    self.outing.air,
                    self.outing.wind,
                ],
            ),
        ];

        for (group, weights) in groups {
            if let Some(&value) = weights.iter().find(|w| !(0.0..=1.0).contains(*w)) {
                return Err(ConfigError::WeightOutOfRange { group, value });
            }
            let sum: f64 = weights.iter().sum();
            if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(ConfigError::UnbalancedWeights { group, sum });
            }
        }

        for (name, value) in [
            ("comparison_margin", self.comparison_margin),
            ("weekend_margin", self.weekend_margin),
        ] {
            if value > 100 {
                return Err(ConfigError::MarginTooLarge { name, value });
            }
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse {
                var: name.to_owned(),
                value: raw.clone(),
            }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unbalanced_weights() {
        let mut config = IntelligenceConfig::default();
        config.commute.car = 0.6;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnbalancedWeights { group: "commute", .. })
        ));
    }

    #[test]
    fn rejects_negative_weight() {
        let mut config = IntelligenceConfig::default();
        config.outing.wind = -0.15;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WeightOutOfRange { group: "outing", .. })
        ));
    }
}
