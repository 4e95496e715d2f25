// ABOUTME: Main library entry point for the Nalssi weather lifestyle index server
// ABOUTME: Wires weather sources, the TTL memoization cache, and MCP tools over stdio JSON-RPC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nalssi MCP Server
//!
//! A Model Context Protocol server that turns Korean weather and air quality
//! observations into lifestyle indices: laundry, hiking, camping, commute,
//! outfit, date courses, and more. Scoring lives in `nalssi-intelligence`;
//! this crate supplies the observation sources, the TTL cache in front of
//! them, and the stdio tool server.
//!
//! ## Architecture
//!
//! - **Source**: resolves a location to weather, air quality, forecast, and life index readings
//! - **Cache**: memoizes source fetches per fetcher and arguments with a TTL
//! - **Tools**: one MCP tool per index, collected in a registry
//! - **MCP**: JSON-RPC routing and the stdio transport
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nalssi_mcp_server::config::ServerConfig;
//! use nalssi_mcp_server::errors::AppResult;
//! use nalssi_mcp_server::mcp::{resources::ServerResources, McpServer};
//! use nalssi_mcp_server::tools::ToolRegistry;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env();
//!     let resources = Arc::new(ServerResources::from_config(&config).await?);
//!     let registry = Arc::new(ToolRegistry::with_builtin_tools());
//!     McpServer::new(registry, resources).run_stdio().await
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary (src/bin/) and integration tests (tests/).

/// Cache abstraction layer and fetch memoization
pub mod cache;

/// Environment-driven server configuration
pub mod config;

/// Unified JSON-RPC 2.0 foundation
pub mod jsonrpc;

/// Production logging and structured output
pub mod logging;

/// Model Context Protocol server implementation
pub mod mcp;

/// Weather observation sources
pub mod source;

/// MCP tools and their registry
pub mod tools;

/// Unified error handling with standard error codes
pub use nalssi_core::errors;
