// ABOUTME: Central registry for MCP tools with capability-based filtering and execution.
// ABOUTME: Registers the built-in weather, activity, planning, place, and life index tools by category.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for MCP tools, providing:
//! - Tool registration and lookup
//! - Capability-based filtering
//! - Schema generation for MCP tools/list responses

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use nalssi_core::errors::{AppResult, ToolError};
use tracing::{debug, info, warn};

use crate::mcp::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::implementations::{activities, life, places, planning, weather};
use super::result::ToolResult;
use super::traits::{McpTool, ToolCapabilities};

/// Central registry for MCP tools.
///
/// The registry is built once at startup and then used immutably for
/// lookups. Tools are `Arc`-wrapped so they can be shared across tasks.
///
/// # Example
///
/// ```
/// use nalssi_mcp_server::tools::registry::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// registry.register_builtin_tools();
/// assert!(registry.contains("is_good_for_laundry"));
/// ```
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn McpTool>>,
    /// Tool categories for organization
    categories: HashMap<String, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Registry holding every built-in tool
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Register a tool and categorize it
    pub fn register_with_category(&mut self, tool: Arc<dyn McpTool>, category: &str) {
        let name = tool.name().to_owned();
        if self.register(tool) {
            self.categories
                .entry(category.to_owned())
                .or_default()
                .push(name);
        }
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// List tool names in a specific category
    #[must_use]
    pub fn tools_in_category(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// List all categories
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Schemas of every tool, sorted by name so tools/list is stable
    #[must_use]
    pub fn all_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&Arc<dyn McpTool>> {
        self.tools
            .values()
            .filter(|tool| tool.capabilities().contains(required))
            .collect()
    }

    /// Names of tools that can answer "unavailable" outside their season
    #[must_use]
    pub fn season_gated_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .tools
            .iter()
            .filter(|(_, tool)| tool.capabilities().is_season_gated())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not found or rejects its arguments
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        debug!(
            request_id = %context.request_id,
            tool = name,
            "Executing tool"
        );
        tool.execute(args, context).await
    }

    /// Register all built-in tools
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        self.register_weather_tools();
        self.register_activity_tools();
        self.register_planning_tools();
        self.register_place_tools();
        self.register_life_tools();

        info!("Registered {} built-in tools", self.len());
    }

    fn register_weather_tools(&mut self) {
        self.register_with_category(Arc::new(weather::GetWeatherTool), "weather");
        self.register_with_category(Arc::new(weather::GetAirQualityTool), "weather");
        debug!(
            "Registered weather tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    fn register_activity_tools(&mut self) {
        for tool in activities::all_tools() {
            self.register_with_category(Arc::new(tool), "activities");
        }
        debug!(
            "Registered activity tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    fn register_planning_tools(&mut self) {
        let tools: [Arc<dyn McpTool>; 8] = [
            Arc::new(planning::GetCommuteIndexTool),
            Arc::new(planning::ShouldIGoOutTool),
            Arc::new(planning::GetOutingScoreTool),
            Arc::new(planning::GetOutfitRecommendationTool),
            Arc::new(planning::GetAllActivityRecommendationsTool),
            Arc::new(planning::GetWeekendRecommendationsTool),
            Arc::new(planning::GetBestTimeForActivityTool),
            Arc::new(planning::CompareActivitiesTool),
        ];
        for tool in tools {
            self.register_with_category(tool, "planning");
        }
        debug!(
            "Registered planning tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    fn register_place_tools(&mut self) {
        self.register_with_category(Arc::new(places::GetDateCourseTool), "places");
        self.register_with_category(Arc::new(places::GetActivitySpotsTool), "places");
        self.register_with_category(Arc::new(places::GetRecommendedSpotsTool), "places");
        debug!(
            "Registered place tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    fn register_life_tools(&mut self) {
        self.register_with_category(Arc::new(life::GetUvInfoTool), "life");
        self.register_with_category(Arc::new(life::GetFoodSafetyIndexTool), "life");
        self.register_with_category(Arc::new(life::GetLifeIndicesTool), "life");
        debug!(
            "Registered life index tools (registry now has {} tools)",
            self.tools.len()
        );
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("categories", &self.categories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tools_are_categorized() {
        let registry = ToolRegistry::with_builtin_tools();
        assert_eq!(registry.len(), 2 + 18 + 8 + 3 + 3);
        assert_eq!(registry.tools_in_category("places").len(), 3);
        assert!(registry.contains("get_best_time_for_activity"));
        assert!(registry.season_gated_tools().contains(&"is_good_for_kimjang"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        assert!(registry.register(Arc::new(weather::GetWeatherTool)));
        assert!(!registry.register(Arc::new(weather::GetWeatherTool)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn schemas_are_sorted_by_name() {
        let registry = ToolRegistry::with_builtin_tools();
        let names: Vec<String> = registry.all_schemas().into_iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
