// ABOUTME: Application constants organized by domain (cache, air quality, defaults)
// ABOUTME: Hand-authored thresholds shared by the models and the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache TTLs and capacity defaults
pub mod cache;

/// Air quality grade thresholds and sentinel
pub mod air;

/// Neutral snapshot defaults substituted for absent readings
pub mod defaults;

/// Service identity
pub mod service {
    /// Service name used in logs and the `initialize` handshake
    pub const SERVICE_NAME: &str = "nalssi-mcp-server";
    /// Protocol version advertised by the stdio server
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}
