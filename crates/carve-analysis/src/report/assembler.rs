//! Pure aggregation of stage outputs into an `AssessmentResult`.

use super::types::{AssessmentResult, AssessmentSummary, BoundaryAssessment};
use crate::complexity::BoundaryComplexity;
use crate::coupling::BoundaryCoupling;
use crate::effort::EffortEstimate;
use crate::graph::GraphReport;
use crate::planner::MigrationPlan;
use crate::risk::RiskEntry;
use crate::viability::ViabilityVerdict;

/// Stage outputs handed to the assembler.
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub schema_version: u32,
    pub fingerprint: String,
    pub derived_boundaries: bool,
    pub cross_boundary_edges: u32,
    pub graph: GraphReport,
    /// Parallel to `complexities`, both in boundary id order.
    pub couplings: Vec<BoundaryCoupling>,
    pub complexities: Vec<BoundaryComplexity>,
    pub boundary_cycles: Vec<Vec<String>>,
    pub viability: ViabilityVerdict,
    pub effort: EffortEstimate,
    pub migration_plan: MigrationPlan,
    pub risks: Vec<RiskEntry>,
}

pub fn assemble_report(parts: ReportParts) -> AssessmentResult {
    let input = &parts.viability.input;
    let summary = AssessmentSummary {
        module_count: input.module_count,
        entity_count: input.entity_count,
        boundary_count: input.boundary_count,
        derived_boundaries: parts.derived_boundaries,
        cross_boundary_edges: parts.cross_boundary_edges,
        cross_boundary_percent: input.cross_boundary_percent,
        mean_instability: input.mean_instability,
        total_complexity: parts.effort.total_complexity,
        circular_groups: parts.graph.cycles.len() as u32,
        verdict: parts.viability.verdict,
        risk_count: parts.risks.len() as u32,
        critical_risk_count: parts.risks.iter().filter(|r| r.is_critical()).count() as u32,
    };

    let boundaries = parts
        .couplings
        .into_iter()
        .zip(parts.complexities)
        .map(|(coupling, complexity)| BoundaryAssessment {
            coupling,
            complexity,
        })
        .collect();

    AssessmentResult {
        schema_version: parts.schema_version,
        fingerprint: parts.fingerprint,
        summary,
        graph: parts.graph,
        boundaries,
        boundary_cycles: parts.boundary_cycles,
        viability: parts.viability,
        effort: parts.effort,
        migration_plan: parts.migration_plan,
        risks: parts.risks,
    }
}
