// ABOUTME: Observation tools returning the normalized weather and air quality snapshots
// ABOUTME: Implements get_weather and get_air_quality_info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use serde_json::{json, Value};

use super::location_property;
use crate::mcp::schema::JsonSchema;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Hourly slots included with the current weather
const FORECAST_HOURS: usize = 12;

/// Current weather plus the next hours of forecast
pub struct GetWeatherTool;

#[async_trait]
impl McpTool for GetWeatherTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    fn description(&self) -> &'static str {
        "현재 날씨와 12시간 예보를 조회합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_WEATHER | ToolCapabilities::READS_FORECAST
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let (weather, forecast) = tokio::join!(ctx.weather(&location), ctx.forecast(&location));
        let hourly: Vec<_> = forecast.into_iter().take(FORECAST_HOURS).collect();

        Ok(ToolResult::ok(json!({
            "location": location,
            "current_weather": weather,
            "sky": weather.sky.label(),
            "hourly_forecast": hourly,
            "evaluated_at": ctx.now.format("%Y-%m-%d %H:%M").to_string(),
        })))
    }
}

/// PM10 and PM2.5 readings with grades
pub struct GetAirQualityTool;

#[async_trait]
impl McpTool for GetAirQualityTool {
    fn name(&self) -> &'static str {
        "get_air_quality_info"
    }

    fn description(&self) -> &'static str {
        "실시간 미세먼지(PM10)와 초미세먼지(PM2.5) 수치 및 등급을 조회합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_AIR_QUALITY
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let air = ctx.air_quality(&location).await;

        Ok(ToolResult::ok(json!({
            "location": location,
            "pm10": { "value": air.pm10(), "grade": air.pm10_grade },
            "pm25": { "value": air.pm25(), "grade": air.pm25_grade },
        })))
    }
}
