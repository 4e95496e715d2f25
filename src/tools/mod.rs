// ABOUTME: Pluggable MCP tool architecture: trait, registry, execution context, and implementations
// ABOUTME: Every tool resolves a location, loads observations, and serializes a scorer report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Tools implement [`McpTool`] and are collected in a [`ToolRegistry`] at
//! startup. The server builds a fresh [`ToolExecutionContext`] per call.

/// Per-call execution context
pub mod context;
/// Tool implementations by category
pub mod implementations;
/// Tool registry
pub mod registry;
/// Tool execution result
pub mod result;
/// Tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
