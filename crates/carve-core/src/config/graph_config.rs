//! Dependency graph configuration.

use serde::{Deserialize, Serialize};

/// Configuration for module classification and cycle reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// A module with fan-in above this is a hub. Default: 3.
    pub hub_fan_in: Option<u32>,
    /// A module with fan-out above this is a god module. Default: 5.
    pub god_fan_out: Option<u32>,
    /// Maximum break suggestions per cycle group. Default: 3.
    pub max_break_suggestions: Option<usize>,
}

impl GraphConfig {
    pub fn effective_hub_fan_in(&self) -> u32 {
        self.hub_fan_in.unwrap_or(3)
    }

    pub fn effective_god_fan_out(&self) -> u32 {
        self.god_fan_out.unwrap_or(5)
    }

    pub fn effective_max_break_suggestions(&self) -> usize {
        self.max_break_suggestions.unwrap_or(3)
    }
}
