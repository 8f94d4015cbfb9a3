//! Complexity scoring types.

use carve_core::types::ComplexityFactor;
use serde::{Deserialize, Serialize};

/// Raw factor values for one boundary, before bucketing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorInputs {
    pub boundary: String,
    pub entity_count: u32,
    pub cross_boundary_references: u32,
    pub shared_tables: u32,
    pub native_queries: u32,
    pub external_integrations: u32,
    pub transactional_dependencies: u32,
    pub shared_state: u32,
    pub framework_cost: u32,
}

impl FactorInputs {
    pub fn value(&self, factor: ComplexityFactor) -> u32 {
        match factor {
            ComplexityFactor::EntityCount => self.entity_count,
            ComplexityFactor::CrossBoundaryReferences => self.cross_boundary_references,
            ComplexityFactor::SharedTables => self.shared_tables,
            ComplexityFactor::NativeQueries => self.native_queries,
            ComplexityFactor::ExternalIntegrations => self.external_integrations,
            ComplexityFactor::TransactionalDependencies => self.transactional_dependencies,
            ComplexityFactor::SharedState => self.shared_state,
            ComplexityFactor::FrameworkCost => self.framework_cost,
        }
    }
}

/// One factor's contribution to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: ComplexityFactor,
    pub value: u32,
    /// 1..=5
    pub bucket: u8,
    pub weight: u32,
    pub weighted: u32,
}

/// How hard a boundary is to extract, banded by its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionDifficulty {
    Low,
    Medium,
    High,
    Hard,
}

impl ExtractionDifficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Hard => "hard",
        }
    }
}

/// Complexity score of one boundary with its per-factor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryComplexity {
    pub boundary: String,
    /// In `ComplexityFactor::all()` order.
    pub factors: Vec<FactorScore>,
    pub score: u32,
    pub difficulty: ExtractionDifficulty,
}
