//! Per-boundary priority score.

use carve_core::config::PlannerConfig;
use carve_core::errors::{AssessmentError, EngineResult};

use super::types::PriorityFactors;
use crate::complexity::BoundaryComplexity;
use crate::coupling::BoundaryCoupling;
use crate::facts::CandidateBoundary;

/// 1.0 with no synchronous dependencies, 0.5 with one or two, 0.0 with three or more.
pub fn deployability_factor(synchronous_dependencies: usize) -> f64 {
    match synchronous_dependencies {
        0 => 1.0,
        1 | 2 => 0.5,
        _ => 0.0,
    }
}

/// `w_c·(n/score) + w_x/(refs+1) + w_i/(inbound+1) + w_d·deployability + w_b·value`
///
/// Fails with `DegenerateMetric` when the complexity score is zero (every
/// factor weight disabled) or the result is not finite.
pub fn compute_priority(
    boundary: &CandidateBoundary,
    coupling: &BoundaryCoupling,
    complexity: &BoundaryComplexity,
    config: &PlannerConfig,
) -> EngineResult<PriorityFactors> {
    if complexity.score == 0 {
        return Err(AssessmentError::DegenerateMetric {
            boundary: boundary.id.clone(),
            metric: "priority".to_string(),
            detail: "complexity score is zero; every factor weight is disabled".to_string(),
        });
    }

    let inbound = coupling.inbound_boundaries.len() as u32;
    let synchronous = coupling.synchronous_dependencies.len() as u32;
    let deployability = deployability_factor(synchronous as usize);

    let complexity_term = config.effective_complexity_weight()
        * (config.effective_complexity_numerator() / f64::from(complexity.score));
    let cross_reference_term = config.effective_cross_reference_weight()
        * (1.0 / f64::from(coupling.cross_boundary_references + 1));
    let inbound_term = config.effective_inbound_weight() * (1.0 / f64::from(inbound + 1));
    let deployability_term = config.effective_deployability_weight() * deployability;
    let business_value_term =
        config.effective_business_value_weight() * f64::from(boundary.business_value);

    let priority =
        complexity_term + cross_reference_term + inbound_term + deployability_term + business_value_term;
    if !priority.is_finite() {
        return Err(AssessmentError::DegenerateMetric {
            boundary: boundary.id.clone(),
            metric: "priority".to_string(),
            detail: format!("evaluated to {priority}"),
        });
    }

    Ok(PriorityFactors {
        complexity_score: complexity.score,
        cross_boundary_references: coupling.cross_boundary_references,
        inbound_dependencies: inbound,
        synchronous_dependencies: synchronous,
        deployability,
        business_value: boundary.business_value,
        complexity_term,
        cross_reference_term,
        inbound_term,
        deployability_term,
        business_value_term,
        priority,
    })
}
