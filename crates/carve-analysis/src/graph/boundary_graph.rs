//! Boundary-level dependency graph derived from cross-boundary edges.

use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::CrossBoundaryEdge;

/// Dependencies between candidate boundaries. Node `i` is boundary `i` of the
/// resolved assignment. Graph edges are synchronous dependencies only.
#[derive(Debug, Clone, Default)]
pub struct BoundaryGraph {
    graph: DiGraph<usize, ()>,
    synchronous: Vec<BTreeSet<usize>>,
    inbound: Vec<BTreeSet<usize>>,
    cycles: Vec<Vec<usize>>,
    cycle_of: Vec<Option<usize>>,
}

impl BoundaryGraph {
    pub fn build(boundary_count: usize, crossing: &[CrossBoundaryEdge]) -> Self {
        let mut graph = DiGraph::with_capacity(boundary_count, crossing.len());
        for i in 0..boundary_count {
            graph.add_node(i);
        }

        let mut synchronous = vec![BTreeSet::new(); boundary_count];
        let mut inbound = vec![BTreeSet::new(); boundary_count];
        for edge in crossing {
            let (from, to) = (edge.source_boundary, edge.target_boundary);
            inbound[to].insert(from);
            if edge.edge.is_synchronous() {
                synchronous[from].insert(to);
                graph.update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
            }
        }

        let mut cycles: Vec<Vec<usize>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut members: Vec<usize> = scc.into_iter().map(NodeIndex::index).collect();
                members.sort_unstable();
                members
            })
            .collect();
        cycles.sort();

        let mut cycle_of = vec![None; boundary_count];
        for (c, members) in cycles.iter().enumerate() {
            for &m in members {
                cycle_of[m] = Some(c);
            }
        }

        Self {
            graph,
            synchronous,
            inbound,
            cycles,
            cycle_of,
        }
    }

    pub fn boundary_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Boundaries `boundary` calls synchronously.
    pub fn synchronous_dependencies(&self, boundary: usize) -> &BTreeSet<usize> {
        &self.synchronous[boundary]
    }

    /// Boundaries with any edge into `boundary`.
    pub fn inbound(&self, boundary: usize) -> &BTreeSet<usize> {
        &self.inbound[boundary]
    }

    /// Synchronous dependency cycles, each sorted, sorted among themselves.
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    pub fn cycle_of(&self, boundary: usize) -> Option<usize> {
        self.cycle_of[boundary]
    }
}
