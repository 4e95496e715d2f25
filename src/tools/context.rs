// ABOUTME: Defines ToolExecutionContext which provides tools with access to resources and the request clock.
// ABOUTME: Resolves the location argument and loads observations with default fallback.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! Every tool call gets a context holding the shared resources, a request
//! id for log correlation, and the evaluation time. The time is captured
//! once per call in Korean Standard Time so season-gated scorers and the
//! date course planner see a single consistent clock.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use nalssi_core::models::{AirQualitySnapshot, HourlyForecast, LifeIndexReadings, WeatherSnapshot};
use nalssi_intelligence::Conditions;
use serde_json::Value;
use uuid::Uuid;

use crate::mcp::resources::ServerResources;
use crate::source;

/// Korea Standard Time offset from UTC
const KST_OFFSET_HOURS: i64 = 9;

fn kst_now() -> NaiveDateTime {
    let utc = Utc::now().naive_utc();
    utc.checked_add_signed(TimeDelta::hours(KST_OFFSET_HOURS))
        .unwrap_or(utc)
}

/// Context provided to every tool execution.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Shared server resources
    pub resources: Arc<ServerResources>,
    /// Request identifier for log correlation
    pub request_id: Uuid,
    /// Evaluation time (Korea Standard Time)
    pub now: NaiveDateTime,
}

impl ToolExecutionContext {
    /// Context evaluated at the current time
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self::at(resources, kst_now())
    }

    /// Context evaluated at a fixed time
    #[must_use]
    pub fn at(resources: Arc<ServerResources>, now: NaiveDateTime) -> Self {
        Self {
            resources,
            request_id: Uuid::new_v4(),
            now,
        }
    }

    /// Evaluation date
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Evaluation hour (0-23)
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.now.hour()
    }

    /// The `location` argument, or the configured default
    #[must_use]
    pub fn location(&self, args: &Value) -> String {
        args.get("location")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|location| !location.is_empty())
            .unwrap_or(self.resources.default_location.as_str())
            .to_owned()
    }

    /// Weather and air quality for the location at the evaluation date
    pub async fn conditions(&self, location: &str) -> Conditions {
        source::conditions(self.resources.source.as_ref(), location, self.today()).await
    }

    /// Current weather, neutral default on failure
    pub async fn weather(&self, location: &str) -> WeatherSnapshot {
        source::weather_or_default(self.resources.source.as_ref(), location).await
    }

    /// Air quality, neutral default on failure
    pub async fn air_quality(&self, location: &str) -> AirQualitySnapshot {
        source::air_or_default(self.resources.source.as_ref(), location).await
    }

    /// Hourly forecast, empty on failure
    pub async fn forecast(&self, location: &str) -> Vec<HourlyForecast> {
        source::forecast_or_default(self.resources.source.as_ref(), location).await
    }

    /// Life index readings, none on failure
    pub async fn life_index(&self, location: &str) -> LifeIndexReadings {
        source::life_index_or_default(self.resources.source.as_ref(), location).await
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("now", &self.now)
            .field("default_location", &self.resources.default_location)
            .finish_non_exhaustive()
    }
}
