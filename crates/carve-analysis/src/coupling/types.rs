//! Coupling analysis types: Martin metrics and zones.

use serde::{Deserialize, Serialize};

/// Robert C. Martin coupling metrics for a single candidate boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCoupling {
    pub boundary: String,
    pub entity_count: u32,
    pub abstract_entities: u32,
    /// Afferent coupling: distinct external entities with an edge into this boundary.
    pub ca: u32,
    /// Efferent coupling: distinct external entities this boundary has edges into.
    pub ce: u32,
    /// Instability: Ce / (Ca + Ce). Range [0, 1]. 0 when isolated.
    pub instability: f64,
    /// Abstractness: abstract entities / entities. Range [0, 1].
    pub abstractness: f64,
    /// Distance from main sequence: |A + I - 1|. Range [0, 1]. 0 = ideal.
    pub distance: f64,
    pub zone: ZoneClassification,
    /// Distinct cross-boundary entity edges incident to this boundary.
    pub cross_boundary_references: u32,
    /// Incident cross-boundary edges classified as transactional dependencies.
    pub transactional_edges: u32,
    /// Boundaries with any edge into this one, sorted.
    pub inbound_boundaries: Vec<String>,
    /// Boundaries this one calls synchronously, sorted.
    pub synchronous_dependencies: Vec<String>,
}

/// Zone classification on the (I, A) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification {
    /// Low I, low A: concrete and heavily depended upon. Hard to change.
    ZoneOfPain,
    /// High I, high A: abstract but nobody uses it.
    ZoneOfUselessness,
    /// Near the main sequence line (A + I ≈ 1). Balanced.
    MainSequence,
}

impl ZoneClassification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZoneOfPain => "zone_of_pain",
            Self::ZoneOfUselessness => "zone_of_uselessness",
            Self::MainSequence => "main_sequence",
        }
    }
}

impl std::fmt::Display for ZoneClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
