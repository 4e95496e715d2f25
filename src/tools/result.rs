// ABOUTME: Defines ToolResult returned by tool execution
// ABOUTME: Serializes scorer reports into JSON content tagged with the queried location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::Value;

/// Result returned by tool execution.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The result value to return to the client
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a simple successful result with just content
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Create a result from a serializable value
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the value cannot be converted to JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }

    /// Serialize a report and record the location it was computed for
    ///
    /// Non-object reports are nested under `result`.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the report cannot be converted to JSON
    pub fn for_location<T: Serialize>(location: &str, report: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(report)?;
        let mut object = match value {
            Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("result".to_owned(), other);
                map
            }
        };
        object.insert("location".to_owned(), Value::String(location.to_owned()));
        Ok(Self::ok(Value::Object(object)))
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_is_added_to_object_reports() {
        let result = ToolResult::for_location("부산", &json!({"score": 80})).unwrap();
        assert_eq!(result.content["location"], "부산");
        assert_eq!(result.content["score"], 80);
        assert!(!result.is_error);
    }

    #[test]
    fn scalar_reports_are_nested() {
        let result = ToolResult::for_location("서울", &42).unwrap();
        assert_eq!(result.content["result"], 42);
    }
}
