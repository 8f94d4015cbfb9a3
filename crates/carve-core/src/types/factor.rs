//! The eight complexity factors scored per candidate boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A factor contributing to a boundary's extraction complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityFactor {
    EntityCount,
    CrossBoundaryReferences,
    SharedTables,
    NativeQueries,
    ExternalIntegrations,
    TransactionalDependencies,
    SharedState,
    FrameworkCost,
}

impl ComplexityFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityCount => "entity_count",
            Self::CrossBoundaryReferences => "cross_boundary_references",
            Self::SharedTables => "shared_tables",
            Self::NativeQueries => "native_queries",
            Self::ExternalIntegrations => "external_integrations",
            Self::TransactionalDependencies => "transactional_dependencies",
            Self::SharedState => "shared_state",
            Self::FrameworkCost => "framework_cost",
        }
    }

    pub fn all() -> &'static [ComplexityFactor] {
        &[
            Self::EntityCount,
            Self::CrossBoundaryReferences,
            Self::SharedTables,
            Self::NativeQueries,
            Self::ExternalIntegrations,
            Self::TransactionalDependencies,
            Self::SharedState,
            Self::FrameworkCost,
        ]
    }

    /// Lower bounds of buckets 2..=5. A value equal to a bound lands in the
    /// higher bucket.
    pub fn default_thresholds(&self) -> [u32; 4] {
        match self {
            Self::EntityCount => [4, 8, 13, 21],
            Self::CrossBoundaryReferences => [1, 4, 9, 16],
            Self::SharedTables => [1, 2, 4, 7],
            Self::NativeQueries => [1, 4, 9, 16],
            Self::ExternalIntegrations => [1, 2, 4, 7],
            Self::TransactionalDependencies => [1, 2, 4, 7],
            Self::SharedState => [1, 2, 4, 7],
            // Supplied as a 1-5 level, so bucket == level.
            Self::FrameworkCost => [2, 3, 4, 5],
        }
    }

    pub fn default_weight(&self) -> u32 {
        match self {
            Self::CrossBoundaryReferences => 2,
            Self::SharedTables | Self::TransactionalDependencies => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for ComplexityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
