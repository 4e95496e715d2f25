// ABOUTME: Logging configuration and structured logging setup for the stdio server
// ABOUTME: Configures log levels and formatters; output goes to stderr so stdout stays a clean JSON-RPC stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Stdout belongs to the JSON-RPC stream, so every layer writes to stderr.

use anyhow::Result;
use nalssi_core::constants::service::SERVICE_NAME;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level even under a narrower `RUST_LOG`
const OWN_TARGETS: [&str; 3] = ["nalssi_mcp_server", "nalssi_intelligence", "nalssi_core"];

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable multi-field lines
    #[default]
    Pretty,
    /// Single-line events without targets
    Compact,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            Some(v) if v.eq_ignore_ascii_case("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Optional event metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogFeatures {
    /// Source file and line
    pub location: bool,
    /// Thread ids and names
    pub thread: bool,
    /// Span open and close events
    pub spans: bool,
}

impl LogFeatures {
    /// Everything on
    pub const ALL: Self = Self {
        location: true,
        thread: true,
        spans: true,
    };

    fn span_events(self) -> FmtSpan {
        if self.spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter expression (`info`, `nalssi_mcp_server::cache=debug`, ...)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional metadata on each event
    pub features: LogFeatures,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Service version attached to the startup event
    pub service_version: String,
    /// Deployment environment; `production` turns every feature on
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
            features: LogFeatures::default(),
            service_name: SERVICE_NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_*` and `SERVICE_*`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables keep their defaults
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let features = if environment == "production" {
            LogFeatures::ALL
        } else {
            LogFeatures {
                location: lookup("LOG_INCLUDE_LOCATION").is_some(),
                thread: lookup("LOG_INCLUDE_THREAD").is_some(),
                spans: lookup("LOG_INCLUDE_SPANS").is_some(),
            }
        };

        Self {
            level: lookup("RUST_LOG")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.level),
            format: LogFormat::parse(lookup("LOG_FORMAT").as_deref()),
            features,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: lookup("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Directives pinning the workspace crates to the configured level
    fn own_directives(&self) -> Vec<Directive> {
        let fallback: Directive = Level::INFO.into();
        OWN_TARGETS
            .iter()
            .map(|target| {
                format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| fallback.clone())
            })
            .collect()
    }

    /// Install the global subscriber and log the startup event
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = self
            .own_directives()
            .into_iter()
            .fold(EnvFilter::new(&self.level), EnvFilter::add_directive);
        let registry = tracing_subscriber::registry().with(filter);
        let features = self.features;

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_file(features.location)
                    .with_line_number(features.location)
                    .with_thread_ids(features.thread)
                    .with_thread_names(features.thread)
                    .with_span_events(features.span_events())
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_ansi(false)
                    .with_file(features.location)
                    .with_line_number(features.location)
                    .with_thread_ids(features.thread)
                    .with_thread_names(features.thread)
                    .with_span_events(features.span_events())
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            log.location = features.location,
            log.thread = features.thread,
            log.spans = features.spans,
            "Nalssi MCP server starting up"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> LoggingConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        LoggingConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" COMPACT ")), LogFormat::Compact);
        assert_eq!(LogFormat::parse(Some("fancy")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config(&[]);
        assert_eq!(config.service_name, "nalssi-mcp-server");
        assert_eq!(config.level, "info");
        assert_eq!(config.features, LogFeatures::default());
    }

    #[test]
    fn production_turns_on_every_feature() {
        let config = config(&[("ENVIRONMENT", "production"), ("RUST_LOG", "debug")]);
        assert_eq!(config.features, LogFeatures::ALL);
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn individual_features_follow_their_variables() {
        let config = config(&[("LOG_INCLUDE_SPANS", "1"), ("RUST_LOG", "  ")]);
        assert!(config.features.spans);
        assert!(!config.features.location);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn own_targets_get_a_directive_each() {
        assert_eq!(config(&[]).own_directives().len(), OWN_TARGETS.len());
    }
}
