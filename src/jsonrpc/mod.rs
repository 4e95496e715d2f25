// ABOUTME: JSON-RPC 2.0 request, response, and error types for the stdio MCP transport
// ABOUTME: Maps application errors onto JSON-RPC error objects with structured data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON-RPC 2.0 Foundation
//!
//! ```rust
//! use nalssi_mcp_server::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
//! # use serde_json::json;
//!
//! let request = JsonRpcRequest::new("tools/list", None);
//! let response = JsonRpcResponse::success(request.id.clone(), json!({"tools": []}));
//! assert!(response.is_success());
//!
//! let error_response = JsonRpcResponse::error(request.id, -32601, "Method not found");
//! assert!(error_response.is_error());
//! ```

use nalssi_core::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// JSON-RPC 2.0 version string
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Optional parameters for the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier (absent for notifications)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 Response
///
/// Exactly one of `result` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Result of the method call (mutually exclusive with error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error information (mutually exclusive with result)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Request identifier for correlation
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 Error Object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Additional error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request with id 1
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self::with_id(method, params, Value::Number(1.into()))
    }

    /// Create a new request with a specific ID
    #[must_use]
    pub fn with_id(method: impl Into<String>, params: Option<Value>, id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: Some(id),
        }
    }

    /// Create a notification (no ID, no response expected)
    #[must_use]
    pub fn notification(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            method: method.into(),
            params,
            id: None,
        }
    }

    /// Whether the request expects no response
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

impl JsonRpcResponse {
    /// Create a success response
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::failure(id, JsonRpcError::new(code, message))
    }

    /// Create an error response from an application error
    #[must_use]
    pub fn from_app_error(id: Option<Value>, error: &AppError) -> Self {
        Self::failure(id, JsonRpcError::from(error))
    }

    fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Check if this is a success response
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Check if this is an error response
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl JsonRpcError {
    /// Create a new error
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// A line that is not valid JSON
    #[must_use]
    pub fn parse_error(detail: impl fmt::Display) -> Self {
        Self::new(error_codes::PARSE_ERROR, format!("Parse error: {detail}"))
    }

    /// A request that does not speak JSON-RPC 2.0
    #[must_use]
    pub fn unsupported_version(got: &str) -> Self {
        Self::new(
            error_codes::INVALID_REQUEST,
            format!("Invalid JSON-RPC version: got '{got}', expected '{JSONRPC_VERSION}'"),
        )
    }

    /// A method this server does not route
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )
    }

    /// Wrap into a response for `id`
    #[must_use]
    pub fn into_response(self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::failure(id, self)
    }
}

impl From<&AppError> for JsonRpcError {
    fn from(error: &AppError) -> Self {
        let mut data = json!({ "error_code": error.code });
        if let Some(details) = &error.details {
            data["details"] = details.clone();
        }
        Self {
            code: error.code.jsonrpc_code(),
            message: error.message.clone(),
            data: Some(data),
        }
    }
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    /// Parse error - Invalid JSON
    pub const PARSE_ERROR: i32 = -32700;

    /// Invalid Request - Invalid JSON-RPC
    pub const INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid params
    pub const INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalssi_core::errors::ErrorCode;

    #[test]
    fn notification_has_no_id() {
        let request = JsonRpcRequest::notification("notifications/initialized", None);
        assert!(request.is_notification());
        let text = serde_json::to_string(&request).unwrap();
        assert!(!text.contains("\"id\""));
    }

    #[test]
    fn protocol_errors_carry_standard_codes() {
        let parse = JsonRpcError::parse_error("expected value").into_response(None);
        assert_eq!(parse.error.unwrap().code, error_codes::PARSE_ERROR);

        let version = JsonRpcError::unsupported_version("1.0");
        assert_eq!(version.code, error_codes::INVALID_REQUEST);
        assert!(version.message.contains("'1.0'"));

        let unknown = JsonRpcError::method_not_found("resources/list").into_response(Some(json!(3)));
        assert!(unknown.is_error());
        assert_eq!(unknown.id, Some(json!(3)));
    }

    #[test]
    fn app_error_maps_to_jsonrpc_code() {
        let error = AppError::invalid_input("bad activity");
        let response = JsonRpcResponse::from_app_error(Some(json!(7)), &error);
        let rpc_error = response.error.unwrap();
        assert_eq!(rpc_error.code, error_codes::INVALID_PARAMS);
        assert_eq!(rpc_error.data.unwrap()["error_code"], json!(ErrorCode::InvalidInput));
    }
}
