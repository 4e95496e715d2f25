// ABOUTME: Place recommendation tools backed by the static spot catalog
// ABOUTME: Implements get_date_course, get_activity_spots, and get_recommended_spots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nalssi_core::errors::{AppResult, ToolError};
use nalssi_intelligence::composite::{activity_spots, date_course, recommended_spots};
use nalssi_intelligence::DateStyle;
use serde_json::Value;

use super::{activity_arg, location_property, number_arg, string_arg};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Activity value meaning "every activity with spots"
const ALL_ACTIVITIES: &str = "all";

fn style_arg(tool: &str, args: &Value) -> Result<DateStyle, ToolError> {
    string_arg(args, "style").map_or(Ok(DateStyle::default()), |style| {
        DateStyle::from_name(style).ok_or_else(|| {
            ToolError::invalid_parameter(tool, "style", format!("unknown date style '{style}'"))
        })
    })
}

fn hour_arg(tool: &str, args: &Value, fallback: u32) -> Result<u32, ToolError> {
    match number_arg(tool, args, "hour")? {
        None => Ok(fallback),
        Some(hour) if hour.fract() == 0.0 && (0.0..24.0).contains(&hour) => {
            // Range checked above
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let hour = hour as u32;
            Ok(hour)
        }
        Some(_) => Err(ToolError::invalid_parameter(
            tool,
            "hour",
            "expected a whole hour between 0 and 23",
        )),
    }
}

/// Weather-aware date course
pub struct GetDateCourseTool;

#[async_trait]
impl McpTool for GetDateCourseTool {
    fn name(&self) -> &'static str {
        "get_date_course"
    }

    fn description(&self) -> &'static str {
        "날씨와 시간대에 맞는 데이트 코스를 추천합니다. 비가 오거나 초미세먼지가 나쁘면 실내 코스로 바뀝니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "style",
                PropertySchema::new("string", "데이트 스타일 (기본값 romantic)").one_of([
                    "romantic", "active", "cultural", "food", "로맨틱", "액티브", "문화", "맛집",
                ]),
            ),
            (
                "hour",
                PropertySchema::new("integer", "기준 시각 (0-23). 생략하면 현재 시각"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::USES_CATALOG
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let style = style_arg(self.name(), &args)?;
        let hour = hour_arg(self.name(), &args, ctx.hour())?;
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = date_course(ctx.resources.catalog.as_ref(), &conditions, style, hour);
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

/// Places for one activity, sized by its score
pub struct GetActivitySpotsTool;

#[async_trait]
impl McpTool for GetActivitySpotsTool {
    fn name(&self) -> &'static str {
        "get_activity_spots"
    }

    fn description(&self) -> &'static str {
        "활동 지수에 따라 추천 장소를 알려줍니다. 날씨가 좋을수록 더 많은 장소를 추천합니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "activity",
                PropertySchema::new("string", "활동 이름 (예: 등산, 캠핑, 낚시, 골프, 피크닉)"),
            ),
        ])
        .with_required(&["activity"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CONDITIONS | ToolCapabilities::USES_CATALOG
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let name = string_arg(&args, "activity")
            .ok_or_else(|| ToolError::missing_parameter(self.name(), "activity"))?;
        let activity = activity_arg(self.name(), "activity", name)?;
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;

        let Some(result) = activity.score(&conditions) else {
            return Err(ToolError::invalid_parameter(
                self.name(),
                "activity",
                format!("'{name}' is out of season"),
            )
            .into());
        };
        let spots = activity_spots(ctx.resources.catalog.as_ref(), activity, result.score)
            .ok_or_else(|| {
                ToolError::invalid_parameter(
                    self.name(),
                    "activity",
                    format!("no places are listed for '{name}'"),
                )
            })?;
        Ok(ToolResult::for_location(&location, &spots)?)
    }
}

/// Places for one or every activity under a coarse weather score
pub struct GetRecommendedSpotsTool;

#[async_trait]
impl McpTool for GetRecommendedSpotsTool {
    fn name(&self) -> &'static str {
        "get_recommended_spots"
    }

    fn description(&self) -> &'static str {
        "활동별 추천 장소 목록을 알려줍니다. activity를 생략하거나 all이면 모든 활동의 장소를 보여줍니다"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([
            location_property(),
            (
                "activity",
                PropertySchema::new("string", "활동 이름 또는 all (기본값 all)"),
            ),
        ])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_WEATHER | ToolCapabilities::USES_CATALOG
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let activity = match string_arg(&args, "activity") {
            None | Some(ALL_ACTIVITIES) => None,
            Some(name) => Some(activity_arg(self.name(), "activity", name)?),
        };
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let listing = recommended_spots(ctx.resources.catalog.as_ref(), &conditions, activity);
        Ok(ToolResult::for_location(&location, &listing)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn style_defaults_to_romantic() {
        assert_eq!(style_arg("t", &json!({})).unwrap(), DateStyle::Romantic);
        assert_eq!(style_arg("t", &json!({"style": "맛집"})).unwrap(), DateStyle::Food);
        assert!(style_arg("t", &json!({"style": "spicy"})).is_err());
    }

    #[test]
    fn hour_must_be_a_clock_hour() {
        assert_eq!(hour_arg("t", &json!({}), 9).unwrap(), 9);
        assert_eq!(hour_arg("t", &json!({"hour": 18}), 9).unwrap(), 18);
        assert!(hour_arg("t", &json!({"hour": 24}), 9).is_err());
        assert!(hour_arg("t", &json!({"hour": 7.5}), 9).is_err());
    }

    #[test]
    fn date_course_schema_lists_every_style() {
        let schema = GetDateCourseTool.input_schema();
        let properties = schema.properties.unwrap();
        let styles = properties["style"].allowed.clone().unwrap();
        assert_eq!(styles.len(), 8);
        assert!(styles
            .iter()
            .all(|style| DateStyle::from_name(style).is_some()));
        assert!(properties["hour"].allowed.is_none());
    }
}
