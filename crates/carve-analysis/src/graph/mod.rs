//! Dependency Graph Builder: module graph, entity graph, boundary graph.
//!
//! Module graph: declared dependencies plus module-level edge facts, with
//! fan-in/fan-out classification and Tarjan SCC cycle detection.
//! Entity graph: classified edge facts and foreign-key references, which
//! can be restricted to cross-boundary pairs once boundaries are assigned.
//! Boundary graph: synchronous dependencies between candidate boundaries.

pub mod boundary_graph;
pub mod classify;
pub mod cycles;
pub mod entity_graph;
pub mod module_graph;
pub mod types;

pub use boundary_graph::BoundaryGraph;
pub use classify::classify_module;
pub use cycles::detect_cycles;
pub use entity_graph::{split_edge_facts, EntityGraph};
pub use module_graph::ModuleGraph;
pub use types::*;

use carve_core::config::GraphConfig;
use carve_core::errors::EngineResult;

use crate::facts::FactIndex;

/// Module and entity graphs plus the serializable graph report.
#[derive(Debug, Clone)]
pub struct DependencyGraphs {
    pub modules: ModuleGraph,
    pub entities: EntityGraph,
    pub report: GraphReport,
}

/// Build both graphs from a validated fact model.
pub fn build_dependency_graphs(
    index: &FactIndex<'_>,
    config: &GraphConfig,
) -> EngineResult<DependencyGraphs> {
    let (entity_edges, module_edges) = split_edge_facts(index)?;
    let modules = ModuleGraph::build(index, &module_edges);
    let entities = EntityGraph::build(index, entity_edges);

    let cycles = detect_cycles(&modules, config.effective_max_break_suggestions());
    let report = modules.report(index, &cycles, config);

    tracing::debug!(
        modules = report.modules.len(),
        entity_edges = entities.edges().len(),
        cycles = cycles.len(),
        "dependency graphs built"
    );

    Ok(DependencyGraphs {
        modules,
        entities,
        report,
    })
}
