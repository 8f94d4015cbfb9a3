//! Complexity scoring configuration.

use serde::{Deserialize, Serialize};

use crate::types::ComplexityFactor;

/// Largest accepted factor weight. Eight factors at bucket 5 stay far below `u32::MAX`.
pub const MAX_FACTOR_WEIGHT: u32 = 1000;

/// Bucket thresholds and weight override for one factor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FactorPolicy {
    /// Ascending lower bounds of buckets 2..=5.
    pub thresholds: Option<[u32; 4]>,
    /// Multiplier applied to the bucket, at most `MAX_FACTOR_WEIGHT`. Zero disables the factor.
    pub weight: Option<u32>,
}

/// Per-factor policy for the eight complexity factors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplexityConfig {
    pub entity_count: FactorPolicy,
    pub cross_boundary_references: FactorPolicy,
    pub shared_tables: FactorPolicy,
    pub native_queries: FactorPolicy,
    pub external_integrations: FactorPolicy,
    pub transactional_dependencies: FactorPolicy,
    pub shared_state: FactorPolicy,
    pub framework_cost: FactorPolicy,
}

impl ComplexityConfig {
    pub fn policy(&self, factor: ComplexityFactor) -> &FactorPolicy {
        match factor {
            ComplexityFactor::EntityCount => &self.entity_count,
            ComplexityFactor::CrossBoundaryReferences => &self.cross_boundary_references,
            ComplexityFactor::SharedTables => &self.shared_tables,
            ComplexityFactor::NativeQueries => &self.native_queries,
            ComplexityFactor::ExternalIntegrations => &self.external_integrations,
            ComplexityFactor::TransactionalDependencies => &self.transactional_dependencies,
            ComplexityFactor::SharedState => &self.shared_state,
            ComplexityFactor::FrameworkCost => &self.framework_cost,
        }
    }

    pub fn policy_mut(&mut self, factor: ComplexityFactor) -> &mut FactorPolicy {
        match factor {
            ComplexityFactor::EntityCount => &mut self.entity_count,
            ComplexityFactor::CrossBoundaryReferences => &mut self.cross_boundary_references,
            ComplexityFactor::SharedTables => &mut self.shared_tables,
            ComplexityFactor::NativeQueries => &mut self.native_queries,
            ComplexityFactor::ExternalIntegrations => &mut self.external_integrations,
            ComplexityFactor::TransactionalDependencies => &mut self.transactional_dependencies,
            ComplexityFactor::SharedState => &mut self.shared_state,
            ComplexityFactor::FrameworkCost => &mut self.framework_cost,
        }
    }

    /// Returns the effective bucket thresholds for `factor`.
    pub fn effective_thresholds(&self, factor: ComplexityFactor) -> [u32; 4] {
        self.policy(factor)
            .thresholds
            .unwrap_or_else(|| factor.default_thresholds())
    }

    /// Returns the effective weight for `factor`.
    pub fn effective_weight(&self, factor: ComplexityFactor) -> u32 {
        self.policy(factor)
            .weight
            .unwrap_or_else(|| factor.default_weight())
    }
}
