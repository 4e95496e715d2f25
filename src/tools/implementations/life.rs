// ABOUTME: Life weather index tools for UV, food poisoning, and the combined indices
// ABOUTME: Falls back to month estimates when live readings are unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_core::models::WeatherSnapshot;
use nalssi_intelligence::life::{food_poisoning, life_indices, uv_index};
use serde_json::Value;
use tracing::warn;

use super::location_property;
use crate::mcp::schema::JsonSchema;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Current weather, or `None` so indices switch to their month estimates
async fn live_weather(ctx: &ToolExecutionContext, location: &str) -> Option<WeatherSnapshot> {
    match ctx.resources.source.current_weather(location).await {
        Ok(weather) => Some(weather.normalized()),
        Err(e) => {
            warn!(location, error = %e, "Weather unavailable, using month estimate");
            None
        }
    }
}

/// UV index
pub struct GetUvInfoTool;

#[async_trait]
impl McpTool for GetUvInfoTool {
    fn name(&self) -> &'static str {
        "get_uv_info"
    }

    fn description(&self) -> &'static str {
        "자외선 지수와 차단 요령을 알려줍니다. 측정값이 없으면 계절 추정치를 사용합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_LIFE_INDEX
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let readings = ctx.life_index(&location).await;
        let uv = uv_index(readings.uv_index, ctx.today());
        Ok(ToolResult::for_location(&location, &uv)?)
    }
}

/// Food poisoning risk
pub struct GetFoodSafetyIndexTool;

#[async_trait]
impl McpTool for GetFoodSafetyIndexTool {
    fn name(&self) -> &'static str {
        "get_food_safety_index"
    }

    fn description(&self) -> &'static str {
        "기온과 습도로 식중독 지수를 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_WEATHER
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let weather = live_weather(ctx, &location).await;
        let index = food_poisoning(weather.as_ref(), ctx.today());
        Ok(ToolResult::for_location(&location, &index)?)
    }
}

/// UV, apparent temperature, pollen, and food poisoning together
pub struct GetLifeIndicesTool;

#[async_trait]
impl McpTool for GetLifeIndicesTool {
    fn name(&self) -> &'static str {
        "get_life_indices"
    }

    fn description(&self) -> &'static str {
        "자외선, 체감온도(5-9월), 꽃가루(봄·가을), 식중독 지수를 한 번에 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_WEATHER
            | ToolCapabilities::READS_LIFE_INDEX
            | ToolCapabilities::SEASON_GATED
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let (readings, weather) =
            tokio::join!(ctx.life_index(&location), live_weather(ctx, &location));
        let indices = life_indices(&readings, weather.as_ref(), ctx.today());
        Ok(ToolResult::for_location(&location, &indices)?)
    }
}
