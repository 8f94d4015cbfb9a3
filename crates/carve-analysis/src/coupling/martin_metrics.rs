//! Robert C. Martin coupling metrics computation per candidate boundary.

use std::collections::BTreeSet;

use carve_core::errors::{AssessmentError, EngineResult};
use rayon::prelude::*;

use super::types::BoundaryCoupling;
use super::zones::ZoneBands;
use crate::boundaries::BoundaryAssignment;
use crate::facts::{EdgeKind, FactIndex};
use crate::graph::{BoundaryGraph, CrossBoundaryEdge};

/// Compute Martin metrics for every boundary, in boundary id order.
///
/// Fails with `EmptyBoundary` for the first boundary owning no entities.
pub fn compute_boundary_coupling(
    index: &FactIndex<'_>,
    assignment: &BoundaryAssignment,
    crossing: &[CrossBoundaryEdge],
    boundary_graph: &BoundaryGraph,
    zones: ZoneBands,
) -> EngineResult<Vec<BoundaryCoupling>> {
    if let Some(empty) = assignment.boundaries().iter().find(|b| b.entities.is_empty()) {
        return Err(AssessmentError::EmptyBoundary {
            boundary: empty.id.clone(),
        });
    }

    // Incident cross-boundary edges per boundary.
    let mut incident: Vec<Vec<&CrossBoundaryEdge>> = vec![Vec::new(); assignment.len()];
    for edge in crossing {
        incident[edge.source_boundary].push(edge);
        incident[edge.target_boundary].push(edge);
    }

    let results: Vec<EngineResult<BoundaryCoupling>> = incident
        .par_iter()
        .enumerate()
        .map(|(i, edges)| boundary_metrics(index, assignment, boundary_graph, zones, i, edges))
        .collect();
    results.into_iter().collect()
}

fn boundary_metrics(
    index: &FactIndex<'_>,
    assignment: &BoundaryAssignment,
    boundary_graph: &BoundaryGraph,
    zones: ZoneBands,
    i: usize,
    edges: &[&CrossBoundaryEdge],
) -> EngineResult<BoundaryCoupling> {
    let boundary = &assignment.boundaries()[i];

    let mut afferent: BTreeSet<&str> = BTreeSet::new();
    let mut efferent: BTreeSet<&str> = BTreeSet::new();
    let mut pairs: BTreeSet<(&str, &str)> = BTreeSet::new();
    let mut transactional: BTreeSet<(&str, &str)> = BTreeSet::new();

    for crossing in edges {
        let edge = &crossing.edge;
        if crossing.target_boundary == i {
            afferent.insert(edge.source.as_str());
        }
        if crossing.source_boundary == i {
            efferent.insert(edge.target.as_str());
        }
        pairs.insert((edge.source.as_str(), edge.target.as_str()));
        if edge.kind == EdgeKind::TransactionalDependency {
            transactional.insert((edge.source.as_str(), edge.target.as_str()));
        }
    }

    let ca = afferent.len() as u32;
    let ce = efferent.len() as u32;

    // I = Ce / (Ca + Ce), 0 if both are 0
    let instability = if ca + ce == 0 {
        0.0
    } else {
        ce as f64 / (ca + ce) as f64
    };

    let entity_count = boundary.entities.len() as u32;
    let abstract_entities = boundary
        .entities
        .iter()
        .filter_map(|e| index.entity(e))
        .filter(|e| e.is_abstract)
        .count() as u32;
    let abstractness = abstract_entities as f64 / entity_count as f64;

    // D = |A + I - 1|
    let distance = (abstractness + instability - 1.0).abs();

    for (metric, value) in [
        ("instability", instability),
        ("abstractness", abstractness),
        ("distance", distance),
    ] {
        if !value.is_finite() {
            return Err(AssessmentError::DegenerateMetric {
                boundary: boundary.id.clone(),
                metric: metric.to_string(),
                detail: format!("evaluated to {value}"),
            });
        }
    }

    let names = |set: &BTreeSet<usize>| -> Vec<String> {
        set.iter()
            .map(|&b| assignment.boundaries()[b].id.clone())
            .collect()
    };

    Ok(BoundaryCoupling {
        boundary: boundary.id.clone(),
        entity_count,
        abstract_entities,
        ca,
        ce,
        instability,
        abstractness,
        distance,
        zone: zones.classify(instability, abstractness, distance),
        cross_boundary_references: pairs.len() as u32,
        transactional_edges: transactional.len() as u32,
        inbound_boundaries: names(boundary_graph.inbound(i)),
        synchronous_dependencies: names(boundary_graph.synchronous_dependencies(i)),
    })
}
