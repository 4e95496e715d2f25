// ABOUTME: End-to-end tests of the JSON-RPC server over an in-memory snapshot source
// ABOUTME: Exercises initialize, tools/list, tools/call, error mapping, and the line-delimited transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use nalssi_intelligence::{IntelligenceConfig, SeoulCatalog};
use nalssi_mcp_server::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use nalssi_mcp_server::mcp::resources::ServerResources;
use nalssi_mcp_server::mcp::McpServer;
use nalssi_mcp_server::source::FixtureSource;
use nalssi_mcp_server::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::{json, Value};
use tokio::io::BufReader;

const SNAPSHOT: &str = r#"{
  "서울": {
    "weather": { "temperature": 20.0, "humidity": 35.0, "wind_speed": 3.0, "rain_probability": 5.0, "sky": "맑음" },
    "air_quality": { "pm10_value": 20.0, "pm25_value": 10.0 },
    "forecast": [
      { "hour": 9, "temperature": 14.0, "rain_probability": 0.0, "sky": "맑음" },
      { "hour": 12, "temperature": 20.0, "rain_probability": 10.0, "sky": "맑음" },
      { "hour": 15, "temperature": 22.0, "rain_probability": 80.0, "sky": "비" }
    ],
    "life_index": { "uv_index": 7.0 }
  }
}"#;

fn resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        Arc::new(FixtureSource::from_json(SNAPSHOT).unwrap()),
        Arc::new(SeoulCatalog),
        IntelligenceConfig::default(),
        "서울",
    ))
}

fn server() -> McpServer {
    McpServer::new(Arc::new(ToolRegistry::with_builtin_tools()), resources())
}

async fn call(server: &McpServer, name: &str, arguments: Value) -> JsonRpcResponse {
    let request = JsonRpcRequest::with_id(
        "tools/call",
        Some(json!({ "name": name, "arguments": arguments })),
        json!(1),
    );
    server.handle_request(request).await.unwrap()
}

fn structured(response: &JsonRpcResponse) -> &Value {
    &response.result.as_ref().unwrap()["structuredContent"]
}

#[tokio::test]
async fn test_initialize_advertises_tools() {
    let server = server();
    let response = server
        .handle_request(JsonRpcRequest::with_id("initialize", None, json!(0)))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "nalssi-mcp-server");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_tools_list_is_complete_and_sorted() {
    let server = server();
    let response = server
        .handle_request(JsonRpcRequest::with_id("tools/list", None, json!(2)))
        .await
        .unwrap();

    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), server.registry().len());
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"should_i_go_out"));
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
}

#[tokio::test]
async fn test_laundry_call_returns_text_and_structured_content() {
    let server = server();
    let response = call(&server, "is_good_for_laundry", json!({"location": "서울"})).await;

    let result = response.result.as_ref().unwrap();
    assert_eq!(result["isError"], false);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("score"));

    let content = structured(&response);
    assert_eq!(content["location"], "서울");
    assert!(content["score"].as_u64().unwrap() >= 80);
}

#[tokio::test]
async fn test_unknown_location_scores_the_neutral_default() {
    let server = server();
    let response = call(&server, "get_camping_index", json!({"location": "평양"})).await;

    assert!(response.is_success());
    let content = structured(&response);
    assert_eq!(content["location"], "평양");
    assert!(content["score"].as_u64().unwrap() <= 100);
}

#[tokio::test]
async fn test_best_time_uses_the_forecast() {
    let server = server();
    let response = call(&server, "get_best_time_for_activity", json!({})).await;

    let content = structured(&response);
    assert_eq!(content["location"], "서울");
    assert_eq!(content["best_time"]["time"], "09:00");
    assert_eq!(content["avoid_time"]["time"], "15:00");
}

#[tokio::test]
async fn test_compare_defaults_to_camping_and_picnic() {
    let server = server();
    let response = call(&server, "compare_activities", json!({})).await;

    assert!(response.is_success());
    let text = structured(&response).to_string();
    assert!(text.contains("캠핑"));
    assert!(text.contains("피크닉"));
}

#[tokio::test]
async fn test_argument_errors_map_to_invalid_params() {
    let server = server();

    let missing = call(&server, "get_activity_spots", json!({})).await;
    assert_eq!(missing.error.unwrap().code, error_codes::INVALID_PARAMS);

    let unknown = call(&server, "get_activity_spots", json!({"activity": "스카이다이빙"})).await;
    assert_eq!(unknown.error.unwrap().code, error_codes::INVALID_PARAMS);

    let bad_style = call(&server, "get_date_course", json!({"style": "spicy"})).await;
    assert_eq!(bad_style.error.unwrap().code, error_codes::INVALID_PARAMS);

    let bad_temp = call(
        &server,
        "get_outfit_recommendation",
        json!({"temperature": "warm"}),
    )
    .await;
    assert_eq!(bad_temp.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_tool_and_method_are_not_found() {
    let server = server();

    let tool = call(&server, "make_coffee", json!({})).await;
    assert_eq!(tool.error.unwrap().code, error_codes::METHOD_NOT_FOUND);

    let method = server
        .handle_request(JsonRpcRequest::with_id("resources/list", None, json!(3)))
        .await
        .unwrap();
    assert_eq!(method.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_kimjang_is_unavailable_in_may() -> Result<()> {
    let registry = ToolRegistry::with_builtin_tools();
    let may = NaiveDate::from_ymd_opt(2025, 5, 20)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let context = ToolExecutionContext::at(resources(), may);

    let result = registry
        .execute("is_good_for_kimjang", json!({}), &context)
        .await?;
    assert_eq!(result.content["status"], "unavailable");

    let november = NaiveDate::from_ymd_opt(2025, 11, 20)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let context = ToolExecutionContext::at(resources(), november);
    let result = registry
        .execute("is_good_for_kimjang", json!({}), &context)
        .await?;
    assert_eq!(result.content["status"], "available");
    Ok(())
}

#[tokio::test]
async fn test_line_transport_answers_requests_and_skips_notifications() -> Result<()> {
    let server = server();
    let input = [
        r#"{"jsonrpc":"2.0","method":"initialize","id":1}"#,
        "",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "not json",
        r#"{"jsonrpc":"1.0","method":"ping","id":2}"#,
        r#"{"jsonrpc":"2.0","method":"ping","id":3}"#,
    ]
    .join("\n");

    let mut output = Vec::new();
    server
        .run(BufReader::new(input.as_bytes()), &mut output)
        .await?;

    let responses: Vec<Value> = String::from_utf8(output)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(responses[2]["error"]["code"], error_codes::INVALID_REQUEST);
    assert_eq!(responses[3]["result"], json!({}));
    Ok(())
}
