//! Cycle detection via Tarjan's SCC, with cycle-breaking suggestions.

use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

use super::module_graph::ModuleGraph;
use super::types::{CycleBreakSuggestion, CycleGroup};

/// Every SCC with more than one module, plus modules depending on themselves.
/// Groups are sorted by their first member; members are sorted within a group.
pub fn detect_cycles(graph: &ModuleGraph, max_suggestions: usize) -> Vec<CycleGroup> {
    let mut groups: Vec<CycleGroup> = tarjan_scc(graph.graph())
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.has_self_loop(scc[0]))
        .map(|scc| cycle_group(graph, &scc, max_suggestions))
        .collect();
    groups.sort_by(|a, b| a.members.cmp(&b.members));
    groups
}

fn cycle_group(graph: &ModuleGraph, scc: &[NodeIndex], max_suggestions: usize) -> CycleGroup {
    let members: BTreeSet<NodeIndex> = scc.iter().copied().collect();

    let mut suggestions: Vec<CycleBreakSuggestion> = Vec::new();
    for &from in &members {
        for to in graph.graph().neighbors(from) {
            if members.contains(&to) {
                suggestions.push(CycleBreakSuggestion {
                    from: graph.module_id(from).to_string(),
                    to: graph.module_id(to).to_string(),
                    impact_score: graph.fan_in(from) + graph.fan_out(to),
                });
            }
        }
    }
    suggestions.sort_by(|a, b| {
        a.impact_score
            .cmp(&b.impact_score)
            .then_with(|| a.from.cmp(&b.from))
            .then_with(|| a.to.cmp(&b.to))
    });
    suggestions.dedup();
    suggestions.truncate(max_suggestions);

    let mut ids: Vec<String> = members
        .iter()
        .map(|&n| graph.module_id(n).to_string())
        .collect();
    ids.sort();

    CycleGroup {
        members: ids,
        break_suggestions: suggestions,
    }
}
