//! Graph types: module classification, cycle groups, entity edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::facts::EdgeKind;

/// Structural role of a module in the module graph. Not mutually exclusive:
/// a module can be both a hub and a god module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleTag {
    /// Many modules depend on it.
    Hub,
    /// It depends on many modules.
    God,
    /// Depended upon, depends on nothing.
    Leaf,
    /// Disconnected.
    Island,
}

impl ModuleTag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::God => "god",
            Self::Leaf => "leaf",
            Self::Island => "island",
        }
    }
}

impl fmt::Display for ModuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A module annotated with its graph metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleNode {
    pub id: String,
    /// Distinct modules depending on this one.
    pub fan_in: u32,
    /// Distinct modules this one depends on.
    pub fan_out: u32,
    pub tags: Vec<ModuleTag>,
    pub circular: bool,
    /// Declared dependencies that match no known module.
    pub external_dependencies: Vec<String>,
    pub entity_count: u32,
    pub estimated_size: u64,
}

/// A detected dependency cycle (strongly connected component with >1 node,
/// or a module depending on itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleGroup {
    /// Modules participating in the cycle, sorted.
    pub members: Vec<String>,
    /// Suggested edges to break to eliminate the cycle, easiest first.
    pub break_suggestions: Vec<CycleBreakSuggestion>,
}

/// A suggestion for breaking a dependency cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleBreakSuggestion {
    pub from: String,
    pub to: String,
    /// fan_in(from) + fan_out(to); lower = fewer modules disturbed.
    pub impact_score: u32,
}

/// Serializable view of the module graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    /// Sorted by module id.
    pub modules: Vec<ModuleNode>,
    pub cycles: Vec<CycleGroup>,
}

impl GraphReport {
    pub fn module(&self, id: &str) -> Option<&ModuleNode> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn circular_modules(&self) -> impl Iterator<Item = &ModuleNode> {
        self.modules.iter().filter(|m| m.circular)
    }
}

/// A classified edge between two entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub asynchronous: bool,
}

impl EntityEdge {
    /// Anything not explicitly asynchronous is a synchronous call at runtime.
    pub fn is_synchronous(&self) -> bool {
        !self.asynchronous
    }
}

/// An entity edge whose endpoints live in different candidate boundaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrossBoundaryEdge {
    pub edge: EntityEdge,
    /// Index into the resolved boundary list.
    pub source_boundary: usize,
    pub target_boundary: usize,
}
