// ABOUTME: Stdio MCP server binary serving Korean weather lifestyle indices
// ABOUTME: Loads configuration from the environment and command line, then serves JSON-RPC on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nalssi MCP Server Binary
//!
//! Reads one JSON-RPC message per line from stdin and writes responses to
//! stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use nalssi_intelligence::IntelligenceConfig;
use nalssi_mcp_server::{
    config::ServerConfig,
    logging,
    mcp::{resources::ServerResources, McpServer},
    tools::ToolRegistry,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line arguments for the stdio server
#[derive(Parser)]
#[command(name = "nalssi-mcp-server")]
#[command(about = "Nalssi - Korean weather lifestyle index server for LLMs")]
pub struct Args {
    /// JSON file with per-location weather snapshots
    #[arg(long)]
    snapshot_file: Option<PathBuf>,

    /// Location used when a tool call omits one
    #[arg(long)]
    default_location: Option<String>,

    /// Print the registered tool names and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let registry = Arc::new(ToolRegistry::with_builtin_tools());
    if args.list_tools {
        for name in registry.tool_names() {
            println!("{name}");
        }
        return Ok(());
    }

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env();
    config.intelligence = IntelligenceConfig::from_env()?;
    if let Some(path) = args.snapshot_file {
        config.snapshot_file = Some(path);
    }
    if let Some(location) = args.default_location {
        config.default_location = location;
    }

    info!(
        snapshot_file = ?config.snapshot_file,
        default_location = %config.default_location,
        cache_max_entries = config.cache.max_entries,
        "Starting Nalssi MCP server"
    );

    let resources = Arc::new(ServerResources::from_config(&config).await?);
    let server = McpServer::new(registry, resources);
    server.run_stdio().await?;

    info!("Nalssi MCP server stopped");
    Ok(())
}
