// ABOUTME: Defines the McpTool trait and ToolCapabilities for the pluggable tools architecture.
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Capabilities
//!
//! All tools implement the `McpTool` trait which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags describing which observations a tool reads
//! - Async execution with context

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::mcp::schema::JsonSchema;
use nalssi_core::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u16 {
        /// Tool reads the current weather observation
        const READS_WEATHER = 0b0000_0001;
        /// Tool reads PM10 and PM2.5 readings
        const READS_AIR_QUALITY = 0b0000_0010;
        /// Tool reads the hourly forecast
        const READS_FORECAST = 0b0000_0100;
        /// Tool reads published life index readings
        const READS_LIFE_INDEX = 0b0000_1000;
        /// Tool returns an unavailable result outside its months
        const SEASON_GATED = 0b0001_0000;
        /// Tool combines several scorers
        const COMPOSITE = 0b0010_0000;
        /// Tool lists places from the spot catalog
        const USES_CATALOG = 0b0100_0000;
    }
}

impl ToolCapabilities {
    /// Weather and air quality, the inputs of every activity scorer
    pub const CONDITIONS: Self = Self::READS_WEATHER.union(Self::READS_AIR_QUALITY);

    /// Check if tool reads any upstream observation
    #[must_use]
    pub const fn reads_observations(self) -> bool {
        self.intersects(
            Self::READS_WEATHER
                .union(Self::READS_AIR_QUALITY)
                .union(Self::READS_FORECAST)
                .union(Self::READS_LIFE_INDEX),
        )
    }

    /// Check if tool can answer "unavailable" for the current month
    #[must_use]
    pub const fn is_season_gated(self) -> bool {
        self.contains(Self::SEASON_GATED)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ").to_lowercase()
        }
    }
}

/// The main trait that all MCP tools must implement.
///
/// Tools are `Send + Sync` so the registry can share them across tasks;
/// `name()` returns `&'static str` for allocation-free lookup.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `is_good_for_laundry`)
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering and logging
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for malformed arguments or unknown names.
    /// Upstream fetch failures never surface here; they degrade to defaults.
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
