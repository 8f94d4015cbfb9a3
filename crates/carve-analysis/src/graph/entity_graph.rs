//! Entity-level graph of classified edges.

use std::collections::BTreeSet;

use carve_core::errors::{AssessmentError, EngineResult};

use super::types::{CrossBoundaryEdge, EntityEdge};
use crate::boundaries::BoundaryAssignment;
use crate::facts::{EdgeKind, FactIndex};

/// Partition edge facts into entity edges and module edges.
///
/// Fails with `MalformedFactModel` when an endpoint is unknown or an edge
/// mixes an entity endpoint with a module endpoint.
pub fn split_edge_facts(
    index: &FactIndex<'_>,
) -> EngineResult<(Vec<EntityEdge>, Vec<(String, String)>)> {
    let mut entity_edges = Vec::new();
    let mut module_edges = Vec::new();

    for edge in &index.facts().edges {
        let unknown: Vec<String> = [&edge.source, &edge.target]
            .into_iter()
            .filter(|id| !index.is_entity(id) && !index.is_module(id))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(AssessmentError::malformed(
                format!(
                    "edge {} -> {} references unknown node id(s) {}",
                    edge.source,
                    edge.target,
                    unknown.join(", ")
                ),
                unknown,
            ));
        }

        match (index.is_entity(&edge.source), index.is_entity(&edge.target)) {
            (true, true) => entity_edges.push(EntityEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
                kind: edge.kind,
                asynchronous: edge.asynchronous,
            }),
            (false, false) => module_edges.push((edge.source.clone(), edge.target.clone())),
            _ => {
                return Err(AssessmentError::malformed(
                    format!(
                        "edge {} -> {} mixes an entity endpoint with a module endpoint",
                        edge.source, edge.target
                    ),
                    vec![edge.source.clone(), edge.target.clone()],
                ));
            }
        }
    }
    Ok((entity_edges, module_edges))
}

/// Classified entity edges, deduplicated and sorted.
#[derive(Debug, Clone, Default)]
pub struct EntityGraph {
    edges: Vec<EntityEdge>,
}

impl EntityGraph {
    /// Explicit edges plus one read-only reference per foreign-key reference
    /// not already covered by an explicit edge for the same pair.
    pub fn build(index: &FactIndex<'_>, explicit: Vec<EntityEdge>) -> Self {
        let covered: BTreeSet<(&str, &str)> = explicit
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();

        let mut implied = Vec::new();
        for entity in &index.facts().entities {
            for target in &entity.references {
                if !covered.contains(&(entity.id.as_str(), target.as_str())) {
                    implied.push(EntityEdge {
                        source: entity.id.clone(),
                        target: target.clone(),
                        kind: EdgeKind::ReadOnlyReference,
                        asynchronous: false,
                    });
                }
            }
        }

        let mut edges = explicit;
        edges.extend(implied);
        edges.sort();
        edges.dedup();
        Self { edges }
    }

    pub fn edges(&self) -> &[EntityEdge] {
        &self.edges
    }

    /// Edges whose endpoints fall in different boundaries.
    ///
    /// Fails with `UnresolvedReference` on the first edge (in sorted order)
    /// touching an entity that no boundary owns.
    pub fn cross_boundary(
        &self,
        assignment: &BoundaryAssignment,
    ) -> EngineResult<Vec<CrossBoundaryEdge>> {
        let mut crossing = Vec::new();
        for edge in &self.edges {
            let source_boundary = resolve_owner(assignment, edge, &edge.source)?;
            let target_boundary = resolve_owner(assignment, edge, &edge.target)?;
            if source_boundary != target_boundary {
                crossing.push(CrossBoundaryEdge {
                    edge: edge.clone(),
                    source_boundary,
                    target_boundary,
                });
            }
        }
        Ok(crossing)
    }
}

fn resolve_owner(
    assignment: &BoundaryAssignment,
    edge: &EntityEdge,
    entity: &str,
) -> EngineResult<usize> {
    assignment
        .owner_of(entity)
        .ok_or_else(|| AssessmentError::UnresolvedReference {
            from: edge.source.clone(),
            to: edge.target.clone(),
            entity: entity.to_string(),
        })
}
