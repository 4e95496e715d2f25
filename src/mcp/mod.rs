// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: Protocol schema types, shared resources, and the stdio JSON-RPC server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared server resources
pub mod resources;
/// MCP protocol schema types
pub mod schema;
/// Request routing and stdio transport
pub mod server;

pub use server::McpServer;
