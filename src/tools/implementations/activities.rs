// ABOUTME: One MCP tool per activity or health index, each returning the scorer's enriched report
// ABOUTME: Tool names follow the is_good_for_* and get_*_risk conventions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nalssi_core::errors::AppResult;
use nalssi_intelligence::{scorers, Activity, Conditions};
use serde_json::Value;
use tracing::debug;

use super::location_property;
use crate::mcp::schema::JsonSchema;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Tool scoring a single activity for a location
pub struct ActivityIndexTool {
    activity: Activity,
    name: &'static str,
    description: &'static str,
}

impl ActivityIndexTool {
    /// Tool for one activity
    #[must_use]
    pub const fn new(activity: Activity, name: &'static str, description: &'static str) -> Self {
        Self {
            activity,
            name,
            description,
        }
    }

    /// Activity scored by this tool
    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }
}

/// Tool name and description for every activity
pub const ACTIVITY_TOOLS: [(Activity, &str, &str); 18] = [
    (Activity::Laundry, "is_good_for_laundry", "빨래하기 좋은 날인지 습도, 강수, 바람, 미세먼지로 판단합니다"),
    (Activity::Hiking, "is_good_for_hiking", "등산하기 좋은 날인지 판단하고 추천 산을 알려줍니다"),
    (Activity::Picnic, "is_good_for_picnic", "피크닉 지수와 추천 장소, 치맥 시간을 알려줍니다"),
    (Activity::CarWash, "is_good_for_car_wash", "세차하기 좋은 날인지 오늘과 내일 강수확률로 판단합니다"),
    (Activity::Kimjang, "is_good_for_kimjang", "김장하기 좋은 날인지 판단합니다 (10월~1월)"),
    (Activity::Exercise, "is_good_for_exercise", "야외 운동 지수와 추천 운동, 수분 섭취 안내를 제공합니다"),
    (Activity::ColdFlu, "get_cold_flu_risk", "일교차, 습도, 기온으로 감기 위험도를 알려줍니다"),
    (Activity::Allergy, "get_allergy_risk", "계절별 알레르기 위험도와 주요 알레르기원을 알려줍니다"),
    (Activity::Migraine, "get_migraine_risk", "기압 변화와 습도로 편두통 위험도를 알려줍니다"),
    (Activity::Sleep, "get_sleep_quality_index", "오늘 밤 수면 환경 지수를 알려줍니다"),
    (Activity::Photography, "get_photography_index", "사진 촬영하기 좋은 날과 골든아워를 알려줍니다"),
    (Activity::JointPain, "get_joint_pain_risk", "습도와 기온으로 관절통 위험도를 알려줍니다"),
    (Activity::Drive, "get_drive_index", "드라이브하기 좋은 날인지 판단합니다"),
    (Activity::Camping, "get_camping_index", "캠핑 지수를 알려줍니다. 뇌우 시 즉시 0점입니다"),
    (Activity::Fishing, "get_fishing_index", "낚시하기 좋은 날인지 바람과 강수로 판단합니다"),
    (Activity::Golf, "get_golf_index", "골프 라운딩 지수를 알려줍니다"),
    (Activity::Running, "get_running_index", "러닝 지수를 알려줍니다. 초미세먼지가 매우 나쁘면 0점입니다"),
    (Activity::Bbq, "get_bbq_index", "바베큐하기 좋은 날인지 판단합니다"),
];

/// Build every activity tool
#[must_use]
pub fn all_tools() -> Vec<ActivityIndexTool> {
    ACTIVITY_TOOLS
        .iter()
        .map(|&(activity, name, description)| ActivityIndexTool::new(activity, name, description))
        .collect()
}

/// Full report of a scorer, including its activity-specific fields
///
/// # Errors
///
/// Returns a serialization error if the report cannot be converted to JSON
pub fn activity_report(activity: Activity, c: &Conditions) -> Result<Value, serde_json::Error> {
    match activity {
        Activity::Laundry => serde_json::to_value(scorers::laundry(c)),
        Activity::Hiking => serde_json::to_value(scorers::hiking(c)),
        Activity::Picnic => serde_json::to_value(scorers::picnic(c)),
        Activity::CarWash => serde_json::to_value(scorers::car_wash(c)),
        Activity::Kimjang => serde_json::to_value(scorers::kimjang(c)),
        Activity::Exercise => serde_json::to_value(scorers::exercise(c)),
        Activity::ColdFlu => serde_json::to_value(scorers::cold_flu(c)),
        Activity::Allergy => serde_json::to_value(scorers::allergy(c)),
        Activity::Migraine => serde_json::to_value(scorers::migraine(c)),
        Activity::Sleep => serde_json::to_value(scorers::sleep(c)),
        Activity::Photography => serde_json::to_value(scorers::photography(c)),
        Activity::JointPain => serde_json::to_value(scorers::joint_pain(c)),
        Activity::Drive => serde_json::to_value(scorers::drive(c)),
        Activity::Camping => serde_json::to_value(scorers::camping(c)),
        Activity::Fishing => serde_json::to_value(scorers::fishing(c)),
        Activity::Golf => serde_json::to_value(scorers::golf(c)),
        Activity::Running => serde_json::to_value(scorers::running(c)),
        Activity::Bbq => serde_json::to_value(scorers::bbq(c)),
    }
}

#[async_trait]
impl McpTool for ActivityIndexTool {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object([location_property()])
    }

    fn capabilities(&self) -> ToolCapabilities {
        match self.activity {
            Activity::Kimjang => ToolCapabilities::CONDITIONS | ToolCapabilities::SEASON_GATED,
            Activity::Hiking | Activity::Picnic => {
                ToolCapabilities::CONDITIONS | ToolCapabilities::USES_CATALOG
            }
            _ => ToolCapabilities::CONDITIONS,
        }
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let location = ctx.location(&args);
        let conditions = ctx.conditions(&location).await;
        let report = activity_report(self.activity, &conditions)?;
        debug!(
            request_id = %ctx.request_id,
            activity = self.activity.key(),
            score = ?report.get("score"),
            "Scored activity"
        );
        Ok(ToolResult::for_location(&location, &report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_activity_has_exactly_one_tool() {
        let activities: HashSet<Activity> = ACTIVITY_TOOLS.iter().map(|(a, _, _)| *a).collect();
        assert_eq!(activities.len(), Activity::ALL.len());
        let names: HashSet<&str> = ACTIVITY_TOOLS.iter().map(|(_, n, _)| *n).collect();
        assert_eq!(names.len(), ACTIVITY_TOOLS.len());
    }
}
