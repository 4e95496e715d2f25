// ABOUTME: Module containing all MCP tool implementations organized by category.
// ABOUTME: Shared argument helpers for location, activity, and style parameters live here.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `weather` - raw observations (current weather, air quality)
//! - `activities` - one tool per activity or health index
//! - `planning` - commute, outing, outfit, aggregation, weekend, best time, comparison
//! - `places` - date courses and activity spots
//! - `life` - UV, food poisoning, and the combined life indices

/// Activity and health index tools
pub mod activities;
/// Life weather index tools
pub mod life;
/// Place recommendation tools
pub mod places;
/// Composite planning tools
pub mod planning;
/// Observation tools
pub mod weather;

use crate::mcp::schema::PropertySchema;
use nalssi_core::errors::ToolError;
use nalssi_intelligence::Activity;
use serde_json::Value;

/// The `location` property every tool accepts
pub(crate) fn location_property() -> (&'static str, PropertySchema) {
    (
        "location",
        PropertySchema::new("string", "지역명 (예: 서울, 강남구, 부산, 제주). 생략하면 기본 지역"),
    )
}

/// Optional string argument, trimmed; empty strings count as absent
pub(crate) fn string_arg<'a>(args: &'a Value, name: &str) -> Option<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Optional numeric argument; present but non-numeric values are rejected
pub(crate) fn number_arg(tool: &str, args: &Value, name: &str) -> Result<Option<f64>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ToolError::invalid_parameter(tool, name, "expected a number")),
    }
}

/// Resolve an activity name, or fail naming the parameter
pub(crate) fn activity_arg(tool: &str, name: &str, value: &str) -> Result<Activity, ToolError> {
    Activity::from_name(value).ok_or_else(|| {
        ToolError::invalid_parameter(tool, name, format!("unknown activity '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_arg_ignores_blank_values() {
        let args = json!({"activity": "  ", "style": " food "});
        assert_eq!(string_arg(&args, "activity"), None);
        assert_eq!(string_arg(&args, "style"), Some("food"));
        assert_eq!(string_arg(&args, "missing"), None);
    }

    #[test]
    fn number_arg_rejects_strings() {
        let args = json!({"temperature": "hot", "hour": 14});
        assert!(number_arg("t", &args, "temperature").is_err());
        assert_eq!(number_arg("t", &args, "hour").unwrap(), Some(14.0));
        assert_eq!(number_arg("t", &args, "missing").unwrap(), None);
    }
}
