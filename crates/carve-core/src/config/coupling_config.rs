//! Coupling zone configuration.

use serde::{Deserialize, Serialize};

/// Where the main sequence and the two problem zones sit on the (I, A) plane.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CouplingConfig {
    /// A boundary with `|A + I - 1|` at or below this is on the main sequence. Default: 0.3.
    pub main_sequence_distance: Option<f64>,
    /// I and A both below this is the zone of pain, both above it the zone of
    /// uselessness. Default: 0.5.
    pub zone_cut: Option<f64>,
}

impl CouplingConfig {
    pub fn effective_main_sequence_distance(&self) -> f64 {
        self.main_sequence_distance.unwrap_or(0.3)
    }

    pub fn effective_zone_cut(&self) -> f64 {
        self.zone_cut.unwrap_or(0.5)
    }
}
