//! Extraction order: priority-ranked, dependency-respecting, cycle-breaking.

use std::cmp::Ordering;

use carve_core::config::PlannerConfig;
use carve_core::errors::EngineResult;
use rayon::prelude::*;

use super::priority::compute_priority;
use super::types::{MigrationPlan, PlanStep, PriorityFactors};
use crate::complexity::BoundaryComplexity;
use crate::coupling::BoundaryCoupling;
use crate::facts::CandidateBoundary;
use crate::graph::BoundaryGraph;

/// Order boundaries for extraction.
///
/// Boundaries are ranked by priority (descending), then complexity score
/// (ascending), then id. The order is built by repeatedly placing the
/// best-ranked boundary whose synchronous dependencies are all placed. When
/// none is ready, a synchronous cycle blocks progress: the lowest-complexity
/// member of that cycle is placed early and flagged `cycle_break`, and the
/// cycle's remaining members are flagged `requires_shim`.
///
/// All slices are indexed by boundary position and must be the same length.
pub fn plan_migration(
    boundaries: &[CandidateBoundary],
    couplings: &[BoundaryCoupling],
    complexities: &[BoundaryComplexity],
    graph: &BoundaryGraph,
    config: &PlannerConfig,
) -> EngineResult<MigrationPlan> {
    let n = boundaries.len();
    debug_assert_eq!(couplings.len(), n);
    debug_assert_eq!(complexities.len(), n);

    let results: Vec<EngineResult<PriorityFactors>> = (0..n)
        .into_par_iter()
        .map(|i| compute_priority(&boundaries[i], &couplings[i], &complexities[i], config))
        .collect();
    let factors: Vec<PriorityFactors> = results.into_iter().collect::<EngineResult<_>>()?;

    let mut ranked: Vec<usize> = (0..n).collect();
    ranked.sort_by(|&a, &b| rank_order(&factors, boundaries, a, b));
    let mut priority_rank = vec![0u32; n];
    for (rank, &i) in ranked.iter().enumerate() {
        priority_rank[i] = rank as u32 + 1;
    }

    let mut placed = vec![false; n];
    let mut cycle_break = vec![false; n];
    let mut requires_shim = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    while order.len() < n {
        let ready = ranked.iter().copied().find(|&i| {
            !placed[i]
                && graph
                    .synchronous_dependencies(i)
                    .iter()
                    .all(|&d| placed[d])
        });

        let next = match ready {
            Some(i) => i,
            None => {
                let breaker = pick_cycle_breaker(&placed, &factors, boundaries, graph);
                cycle_break[breaker] = true;
                if let Some(c) = graph.cycle_of(breaker) {
                    for &member in &graph.cycles()[c] {
                        if member != breaker && !placed[member] {
                            requires_shim[member] = true;
                        }
                    }
                }
                tracing::info!(
                    boundary = %boundaries[breaker].id,
                    "synchronous cycle broken by early extraction"
                );
                breaker
            }
        };
        placed[next] = true;
        order.push(next);
    }

    let steps = order
        .into_iter()
        .enumerate()
        .map(|(position, i)| PlanStep {
            position: position as u32 + 1,
            boundary: boundaries[i].id.clone(),
            priority_rank: priority_rank[i],
            factors: factors[i].clone(),
            depends_on: graph
                .synchronous_dependencies(i)
                .iter()
                .map(|&d| boundaries[d].id.clone())
                .collect(),
            cycle_break: cycle_break[i],
            requires_shim: requires_shim[i] && !cycle_break[i],
        })
        .collect();

    Ok(MigrationPlan { steps })
}

fn rank_order(
    factors: &[PriorityFactors],
    boundaries: &[CandidateBoundary],
    a: usize,
    b: usize,
) -> Ordering {
    factors[b]
        .priority
        .total_cmp(&factors[a].priority)
        .then(factors[a].complexity_score.cmp(&factors[b].complexity_score))
        .then_with(|| boundaries[a].id.cmp(&boundaries[b].id))
}

/// An unplaced cycle member whose outstanding dependencies all lie inside its
/// own cycle, choosing the lowest complexity score, then id.
///
/// When no boundary is ready, the unplaced subgraph has a strongly connected
/// sink component of size > 1, so such a member always exists.
fn pick_cycle_breaker(
    placed: &[bool],
    factors: &[PriorityFactors],
    boundaries: &[CandidateBoundary],
    graph: &BoundaryGraph,
) -> usize {
    let candidates = (0..placed.len()).filter(|&i| {
        !placed[i]
            && graph.cycle_of(i).is_some_and(|c| {
                graph
                    .synchronous_dependencies(i)
                    .iter()
                    .all(|&d| placed[d] || graph.cycle_of(d) == Some(c))
            })
    });

    let best = candidates.min_by(|&a, &b| {
        factors[a]
            .complexity_score
            .cmp(&factors[b].complexity_score)
            .then_with(|| boundaries[a].id.cmp(&boundaries[b].id))
    });

    // Unreachable for a graph built by `BoundaryGraph::build`; fall back to
    // the first unplaced boundary rather than looping.
    best.or_else(|| placed.iter().position(|p| !p)).unwrap_or(0)
}
