// ABOUTME: Shared server resources handed to every tool execution
// ABOUTME: Bundles the weather source, spot catalog, scoring configuration, and default location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::Memoizer;
use crate::config::ServerConfig;
use crate::source::{CachedSource, DefaultSource, FixtureSource, WeatherSource};
use nalssi_core::errors::AppResult;
use nalssi_intelligence::{IntelligenceConfig, SeoulCatalog, SpotCatalog};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Centralized resource container shared by all tools
pub struct ServerResources {
    /// Observation source, memoized when built from configuration
    pub source: Arc<dyn WeatherSource>,
    /// Place and date course catalog
    pub catalog: Arc<dyn SpotCatalog>,
    /// Composite weights and margins
    pub intelligence: IntelligenceConfig,
    /// Location used when a call omits one
    pub default_location: String,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        source: Arc<dyn WeatherSource>,
        catalog: Arc<dyn SpotCatalog>,
        intelligence: IntelligenceConfig,
        default_location: impl Into<String>,
    ) -> Self {
        Self {
            source,
            catalog,
            intelligence,
            default_location: default_location.into(),
        }
    }

    /// Build the production resource set: fixture or default source behind the TTL cache
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot file cannot be loaded or the cache cannot start
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let inner: Arc<dyn WeatherSource> = match &config.snapshot_file {
            Some(path) => Arc::new(FixtureSource::from_path(path).await?),
            None => Arc::new(DefaultSource),
        };
        info!(
            source = inner.name(),
            max_entries = config.cache.max_entries,
            "Initializing memoized weather source"
        );

        let memoizer = Memoizer::in_memory(config.cache.clone()).await?;
        let source: Arc<dyn WeatherSource> = Arc::new(CachedSource::new(inner, memoizer));

        Ok(Self::new(
            source,
            Arc::new(SeoulCatalog),
            config.intelligence,
            config.default_location.clone(),
        ))
    }
}

impl fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerResources")
            .field("source", &self.source.name())
            .field("intelligence", &self.intelligence)
            .field("default_location", &self.default_location)
            .finish_non_exhaustive()
    }
}
