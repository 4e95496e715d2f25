// ABOUTME: Composite planning tools combining several scorers or the hourly forecast
// ABOUTME: Implements commute, outing, outfit, all-activity, weekend, best-time, and comparison tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_intelligence::composite::{aggregate, best_time, commute, compare, outing_score, weekend};
use nalssi_intelligence::outfit::{comprehensive, outfit};
use serde_json::Value;

use super::{location_property, number_arg, string_arg};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

const DEFAULT_PLAN_ACTIVITY: &str = "외출";
const DEFAULT_FIRST_ACTIVITY: &str = "캠핑";
const DEFAULT_SECOND_ACTIVITY: &str = "피크닉";

// ============================================================================
// GetCommuteIndexTool
// ============================================================================

/// Commute index by transport mode
pub struct GetCommuteIndexTool;

#[async_trait]
impl McpTool for GetCommuteIndexTool {
    fn name(&self) -> &'static str {
        "get_commute_index"
    }

    fn description(&self) -> &'static str {
        "자가용, 대중교통, 도보/자전거별 출퇴근 지수와 추천 교통수단을 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = commute(&conditions, &ctx.resources.intelligence.commute);
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

// ============================================================================
// ShouldIGoOutTool
// ============================================================================

/// Outing suitability with clothing advice
pub struct ShouldIGoOutTool;

#[async_trait]
impl McpTool for ShouldIGoOutTool {
    fn name(&self) -> &'static str {
        "should_i_go_out"
    }

    fn description(&self) -> &'static str {
        "기온, 강수, 미세먼지, 바람으로 외출 적합도(0-100)와 옷차림을 종합 판단합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = comprehensive(&conditions, &ctx.resources.intelligence.outing);
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

// ============================================================================
// GetOutingScoreTool
// ============================================================================

/// Outing score with per-factor detail
pub struct GetOutingScoreTool;

#[async_trait]
impl McpTool for GetOutingScoreTool {
    fn name(&self) -> &'static str {
        "get_outing_score"
    }

    fn description(&self) -> &'static str {
        "외출 점수와 기온, 강수, 미세먼지, 바람별 세부 점수를 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = outing_score(&conditions, &ctx.resources.intelligence.outing);
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

// ============================================================================
// GetOutfitRecommendationTool
// ============================================================================

/// Clothing advice by temperature band
pub struct GetOutfitRecommendationTool;

#[async_trait]
impl McpTool for GetOutfitRecommendationTool {
    fn name(&self) -> &'static str {
        "get_outfit_recommendation"
    }

    fn description(&self) -> &'static str {
        "기온대별 옷차림을 추천하고 비, 눈, 바람에 맞는 소품을 더해 줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "temperature",
                PropertySchema::new("number", "관측값 대신 사용할 기온(°C)"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let temperature = number_arg(self.name(), &args, "temperature")?;
        let mut conditions = ctx.conditions(&location).await;
        if let Some(temperature) = temperature {
            conditions.weather.temperature = temperature;
        }
        Ok(ToolResult::for_location(&location, &outfit(&conditions))?)
    }
}

// ============================================================================
// GetAllActivityRecommendationsTool
// ============================================================================

/// Every activity scored at once with the best pick
pub struct GetAllActivityRecommendationsTool;

#[async_trait]
impl McpTool for GetAllActivityRecommendationsTool {
    fn name(&self) -> &'static str {
        "get_all_activity_recommendations"
    }

    fn description(&self) -> &'static str {
        "모든 활동 지수를 한 번에 계산하고 오늘 가장 좋은 활동을 추천합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE | ToolCapabilities::SEASON_GATED
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        Ok(ToolResult::for_location(&location, &aggregate(&conditions))?)
    }
}

// ============================================================================
// GetWeekendRecommendationsTool
// ============================================================================

/// Today versus tomorrow for weekend activities
pub struct GetWeekendRecommendationsTool;

#[async_trait]
impl McpTool for GetWeekendRecommendationsTool {
    fn name(&self) -> &'static str {
        "get_weekend_recommendations"
    }

    fn description(&self) -> &'static str {
        "오늘과 내일의 활동 지수를 비교해 빨래, 등산, 피크닉, 세차하기 더 좋은 날을 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = weekend(&conditions, ctx.resources.intelligence.weekend_margin);
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

// ============================================================================
// GetBestTimeForActivityTool
// ============================================================================

/// Best and worst hours for an activity over the next twelve hours
pub struct GetBestTimeForActivityTool;

#[async_trait]
impl McpTool for GetBestTimeForActivityTool {
    fn name(&self) -> &'static str {
        "get_best_time_for_activity"
    }

    fn description(&self) -> &'static str {
        "시간별 예보로 활동하기 가장 좋은 시간과 피해야 할 시간을 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "activity",
                PropertySchema::new("string", "활동 이름 (예: 외출, 등산, 운동, 빨래). 기본값 외출"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_FORECAST
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let activity = string_arg(&args, "activity").unwrap_or(DEFAULT_PLAN_ACTIVITY);
        let forecast = ctx.forecast(&location).await;
        Ok(ToolResult::for_location(&location, &best_time(&forecast, activity))?)
    }
}

// ============================================================================
// CompareActivitiesTool
// ============================================================================

/// Head-to-head comparison of two activities
pub struct CompareActivitiesTool;

#[async_trait]
impl McpTool for CompareActivitiesTool {
    fn name(&self) -> &'static str {
        "compare_activities"
    }

    fn description(&self) -> &'static str {
        "두 활동의 지수를 비교해 오늘 더 좋은 활동을 알려줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "activity1",
                PropertySchema::new("string", "첫 번째 활동 (기본값 캠핑)"),
            ),
            (
                "activity2",
                PropertySchema::new("string", "두 번째 활동 (기본값 피크닉)"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::COMPOSITE
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let first = string_arg(&args, "activity1").unwrap_or(DEFAULT_FIRST_ACTIVITY);
        let second = string_arg(&args, "activity2").unwrap_or(DEFAULT_SECOND_ACTIVITY);
        let conditions = ctx.conditions(&location).await;
        let report = compare(
            &conditions,
            first,
            second,
            ctx.resources.intelligence.comparison_margin,
        );
        Ok(ToolResult::for_location(&location, &report)?)
    }
}
