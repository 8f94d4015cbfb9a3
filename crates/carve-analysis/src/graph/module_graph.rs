//! Module-level dependency graph on petgraph.

use std::collections::{BTreeMap, BTreeSet};

use carve_core::config::GraphConfig;
use carve_core::types::FxHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use super::classify::classify_module;
use super::types::{CycleGroup, GraphReport, ModuleNode};
use crate::facts::FactIndex;

/// Directed module graph. Parallel edges are collapsed, so neighbour counts
/// are counts of distinct modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    graph: DiGraph<String, ()>,
    nodes: FxHashMap<String, NodeIndex>,
    external: BTreeMap<String, Vec<String>>,
}

impl ModuleGraph {
    /// Nodes are inserted in id order so traversal order is input-order independent.
    pub fn build(index: &FactIndex<'_>, module_edges: &[(String, String)]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = FxHashMap::default();

        let mut ids: Vec<&str> = index.facts().modules.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        for id in ids {
            nodes.insert(id.to_string(), graph.add_node(id.to_string()));
        }

        let mut external: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for module in &index.facts().modules {
            let from = nodes[module.id.as_str()];
            let mut unknown = BTreeSet::new();
            for dep in &module.dependencies {
                match nodes.get(dep.as_str()) {
                    Some(&to) => {
                        graph.update_edge(from, to, ());
                    }
                    None => {
                        unknown.insert(dep.clone());
                    }
                }
            }
            if !unknown.is_empty() {
                external.insert(module.id.clone(), unknown.into_iter().collect());
            }
        }

        for (source, target) in module_edges {
            if let (Some(&from), Some(&to)) = (nodes.get(source), nodes.get(target)) {
                graph.update_edge(from, to, ());
            }
        }

        Self {
            graph,
            nodes,
            external,
        }
    }

    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get(id).copied()
    }

    pub fn module_id(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Distinct modules depending on `node`, excluding itself.
    pub fn fan_in(&self, node: NodeIndex) -> u32 {
        self.distinct_neighbors(node, Direction::Incoming)
    }

    /// Distinct modules `node` depends on, excluding itself.
    pub fn fan_out(&self, node: NodeIndex) -> u32 {
        self.distinct_neighbors(node, Direction::Outgoing)
    }

    pub fn has_self_loop(&self, node: NodeIndex) -> bool {
        self.graph.contains_edge(node, node)
    }

    pub fn depends_on(&self, from: &str, to: &str) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    pub fn external_dependencies(&self, id: &str) -> &[String] {
        self.external.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn distinct_neighbors(&self, node: NodeIndex, direction: Direction) -> u32 {
        self.graph
            .neighbors_directed(node, direction)
            .filter(|&n| n != node)
            .count() as u32
    }

    /// Annotate every module with fan-in/out, tags and cycle membership.
    pub fn report(
        &self,
        index: &FactIndex<'_>,
        cycles: &[CycleGroup],
        config: &GraphConfig,
    ) -> GraphReport {
        let circular: BTreeSet<&str> = cycles
            .iter()
            .flat_map(|c| c.members.iter().map(String::as_str))
            .collect();

        let mut modules: Vec<ModuleNode> = self
            .graph
            .node_indices()
            .map(|node| {
                let id = self.module_id(node);
                let fan_in = self.fan_in(node);
                let fan_out = self.fan_out(node);
                let fact = index.module(id);
                ModuleNode {
                    id: id.to_string(),
                    fan_in,
                    fan_out,
                    tags: classify_module(fan_in, fan_out, config),
                    circular: circular.contains(id),
                    external_dependencies: self.external_dependencies(id).to_vec(),
                    entity_count: fact.map_or(0, |m| m.entity_count),
                    estimated_size: fact.map_or(0, |m| m.estimated_size),
                }
            })
            .collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));

        GraphReport {
            modules,
            cycles: cycles.to_vec(),
        }
    }
}
