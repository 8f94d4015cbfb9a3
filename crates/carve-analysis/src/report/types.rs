//! The assessment result and its summary.

use serde::{Deserialize, Serialize};

use crate::complexity::BoundaryComplexity;
use crate::coupling::BoundaryCoupling;
use crate::effort::EffortEstimate;
use crate::graph::GraphReport;
use crate::planner::MigrationPlan;
use crate::risk::RiskEntry;
use crate::viability::{Verdict, ViabilityVerdict};

/// Coupling and complexity of one candidate boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryAssessment {
    pub coupling: BoundaryCoupling,
    pub complexity: BoundaryComplexity,
}

impl BoundaryAssessment {
    pub fn id(&self) -> &str {
        &self.coupling.boundary
    }
}

/// Headline numbers of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub module_count: u32,
    pub entity_count: u32,
    pub boundary_count: u32,
    /// Boundaries were derived one per module rather than supplied.
    pub derived_boundaries: bool,
    pub cross_boundary_edges: u32,
    pub cross_boundary_percent: f64,
    pub mean_instability: f64,
    pub total_complexity: u32,
    pub circular_groups: u32,
    pub verdict: Verdict,
    pub risk_count: u32,
    pub critical_risk_count: u32,
}

/// Everything one assessment run produced.
///
/// Immutable once assembled: fields are private and read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub(crate) schema_version: u32,
    /// xxh3-64 of the canonical fact model JSON, hex.
    pub(crate) fingerprint: String,
    pub(crate) summary: AssessmentSummary,
    pub(crate) graph: GraphReport,
    /// In boundary id order.
    pub(crate) boundaries: Vec<BoundaryAssessment>,
    /// Synchronous dependency cycles between boundaries, as boundary ids.
    pub(crate) boundary_cycles: Vec<Vec<String>>,
    pub(crate) viability: ViabilityVerdict,
    pub(crate) effort: EffortEstimate,
    pub(crate) migration_plan: MigrationPlan,
    pub(crate) risks: Vec<RiskEntry>,
}

impl AssessmentResult {
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn summary(&self) -> &AssessmentSummary {
        &self.summary
    }

    pub fn graph(&self) -> &GraphReport {
        &self.graph
    }

    pub fn boundaries(&self) -> &[BoundaryAssessment] {
        &self.boundaries
    }

    pub fn boundary(&self, id: &str) -> Option<&BoundaryAssessment> {
        self.boundaries.iter().find(|b| b.id() == id)
    }

    pub fn boundary_cycles(&self) -> &[Vec<String>] {
        &self.boundary_cycles
    }

    pub fn viability(&self) -> &ViabilityVerdict {
        &self.viability
    }

    pub fn verdict(&self) -> Verdict {
        self.viability.verdict
    }

    pub fn effort(&self) -> &EffortEstimate {
        &self.effort
    }

    pub fn migration_plan(&self) -> &MigrationPlan {
        &self.migration_plan
    }

    pub fn risks(&self) -> &[RiskEntry] {
        &self.risks
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
