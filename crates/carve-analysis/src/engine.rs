//! Pipeline entry point: fact model in, assessment result out.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use carve_core::config::CarveConfig;
use carve_core::errors::{AssessmentError, EngineResult};
use carve_core::tracing::metrics;

use crate::boundaries::BoundaryAssignment;
use crate::complexity::{
    compute_complexity, gather_factor_inputs, spanning_transactions, BoundaryComplexity,
    ExtractionBands,
};
use crate::coupling::{compute_boundary_coupling, BoundaryCoupling, ZoneBands};
use crate::effort::{estimate_effort, EffortSignals};
use crate::facts::{FactIndex, FactModel};
use crate::graph::{build_dependency_graphs, BoundaryGraph, CrossBoundaryEdge};
use crate::planner::plan_migration;
use crate::report::{assemble_report, AssessmentResult, ReportParts};
use crate::risk::{build_risk_register, RiskInputs};
use crate::viability::{ViabilityGate, ViabilityInput};

/// Run every stage over `facts` and assemble the result.
///
/// Deterministic: the same facts and configuration always produce an
/// identical result.
pub fn assess(facts: &FactModel, config: &CarveConfig) -> EngineResult<AssessmentResult> {
    let span = assess_span();
    let _guard = span.enter();
    span.record(metrics::MODULE_COUNT, facts.modules.len() as u64);
    span.record(metrics::ENTITY_COUNT, facts.entities.len() as u64);
    let started = Instant::now();

    let index = FactIndex::build(facts)?;
    let fingerprint = facts.fingerprint()?;

    let graph_started = Instant::now();
    let graphs = build_dependency_graphs(&index, &config.graph)?;
    span.record(metrics::GRAPH_BUILD_TIME, graph_started.elapsed().as_micros() as u64);
    span.record(metrics::CYCLE_COUNT, graphs.report.cycles.len() as u64);

    let assignment = BoundaryAssignment::resolve(&index)?;
    span.record(metrics::BOUNDARY_COUNT, assignment.len() as u64);

    let crossing = graphs.entities.cross_boundary(&assignment)?;
    let boundary_graph = BoundaryGraph::build(assignment.len(), &crossing);

    let zones = ZoneBands::from_config(&config.coupling);
    let couplings =
        compute_boundary_coupling(&index, &assignment, &crossing, &boundary_graph, zones)?;
    let spanning = spanning_transactions(&index, &assignment);
    let factor_inputs = gather_factor_inputs(&index, &assignment, &couplings, &spanning);
    let bands = ExtractionBands::with_hard_score(config.viability.effective_hard_extraction_score());
    let complexities = compute_complexity(&factor_inputs, &config.complexity, bands)?;
    tracing::debug!(
        cross_boundary_edges = crossing.len(),
        spanning_transactions = spanning.len(),
        "boundary metrics computed"
    );

    let boundary_cycles: Vec<Vec<String>> = boundary_graph
        .cycles()
        .iter()
        .map(|members| {
            members
                .iter()
                .map(|&b| assignment.boundaries()[b].id.clone())
                .collect()
        })
        .collect();

    let risks = build_risk_register(
        &index,
        RiskInputs {
            supplied: &facts.risks,
            module_cycles: &graphs.report.cycles,
            spanning_transactions: &spanning,
            boundary_cycles: &boundary_cycles,
            complexities: &complexities,
        },
    );

    let viability_input = ViabilityInput {
        module_count: facts.modules.len() as u32,
        entity_count: facts.entities.len() as u32,
        boundary_count: assignment.len() as u32,
        complexity_scores: complexities.iter().map(|c| c.score).collect(),
        mean_instability: mean_instability(&couplings),
        cross_boundary_percent: cross_boundary_percent(&assignment, &crossing),
        independent_deployment_signal: facts.signals.wants_independent_deployment(),
        team_count: facts.signals.team_count,
        critical_risks: risks
            .iter()
            .filter(|r| r.is_critical())
            .map(|r| r.id.clone())
            .collect(),
    };
    let viability = ViabilityGate::new(&config.viability).evaluate(viability_input);
    span.record(metrics::VERDICT, viability.verdict.as_str());

    let migration_plan = plan_migration(
        assignment.boundaries(),
        &couplings,
        &complexities,
        &boundary_graph,
        &config.planner,
    )?;

    let total_complexity = sum_scores(&complexities)?;
    let signals = EffortSignals {
        multi_writer_tables: !index.multi_writer_tables().is_empty(),
        circular_dependencies: !graphs.report.cycles.is_empty(),
        distributed_transactions: !spanning.is_empty()
            || couplings.iter().any(|c| c.transactional_edges > 0),
        shared_state: assignment.boundaries().iter().any(|b| b.shared_state > 0),
        single_team: facts.signals.team_count == Some(1),
    };
    let effort = estimate_effort(total_complexity, signals, &config.effort);

    let result = assemble_report(ReportParts {
        schema_version: facts.schema_version,
        fingerprint,
        derived_boundaries: assignment.is_derived(),
        cross_boundary_edges: crossing.len() as u32,
        graph: graphs.report,
        couplings,
        complexities,
        boundary_cycles,
        viability,
        effort,
        migration_plan,
        risks,
    });

    span.record(metrics::ASSESSMENT_TIME, started.elapsed().as_micros() as u64);
    tracing::info!(
        verdict = %result.verdict(),
        boundaries = result.boundaries().len(),
        risks = result.risks().len(),
        "assessment complete"
    );
    Ok(result)
}

/// The pipeline span. Every field named in `metrics` is declared empty and
/// recorded as its stage completes.
fn assess_span() -> tracing::Span {
    tracing::info_span!(
        "assess",
        module_count = tracing::field::Empty,
        entity_count = tracing::field::Empty,
        boundary_count = tracing::field::Empty,
        cycle_count = tracing::field::Empty,
        graph_build_time = tracing::field::Empty,
        verdict = tracing::field::Empty,
        assessment_time = tracing::field::Empty,
    )
}

/// Load a JSON fact model from `path` and assess it.
pub fn assess_path(path: &Path, config: &CarveConfig) -> EngineResult<AssessmentResult> {
    let facts = FactModel::from_path(path)?;
    assess(&facts, config)
}

/// Sum of every boundary's score; `DegenerateMetric` on the boundary whose
/// score overflows the running total.
fn sum_scores(complexities: &[BoundaryComplexity]) -> EngineResult<u32> {
    complexities.iter().try_fold(0u32, |total, c| {
        total
            .checked_add(c.score)
            .ok_or_else(|| AssessmentError::DegenerateMetric {
                boundary: c.boundary.clone(),
                metric: "total_complexity".to_string(),
                detail: format!("sum of scores exceeds {}", u32::MAX),
            })
    })
}

/// Mean instability across boundaries; 0 with no boundaries.
fn mean_instability(couplings: &[BoundaryCoupling]) -> f64 {
    if couplings.is_empty() {
        return 0.0;
    }
    couplings.iter().map(|c| c.instability).sum::<f64>() / couplings.len() as f64
}

/// Assigned entities incident to any cross-boundary edge, as a percentage of
/// all assigned entities.
fn cross_boundary_percent(assignment: &BoundaryAssignment, crossing: &[CrossBoundaryEdge]) -> f64 {
    let assigned = assignment.assigned_entity_count();
    if assigned == 0 {
        return 0.0;
    }
    let incident: BTreeSet<&str> = crossing
        .iter()
        .flat_map(|c| [c.edge.source.as_str(), c.edge.target.as_str()])
        .collect();
    incident.len() as f64 / assigned as f64 * 100.0
}
