//! Viability gate configuration.

use serde::{Deserialize, Serialize};

/// Thresholds for the four-outcome viability gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViabilityConfig {
    /// Systems with at most this many modules are not decomposed. Default: 3.
    pub trivial_module_count: Option<u32>,
    /// Systems with at most this many entities are not decomposed. Default: 15.
    pub trivial_entity_count: Option<u32>,
    /// At most this many candidate boundaries means no decomposition. Default: 2.
    pub trivial_boundary_count: Option<u32>,
    /// If every boundary scores below this, decomposition is not worth it. Default: 15.
    pub min_complexity_score: Option<u32>,
    /// Cross-boundary entity percentage above which the system is too entangled. Default: 60.0.
    pub max_cross_boundary_percent: Option<f64>,
    /// Boundary count range for the modular-monolith recommendation. Default: 4..=8.
    pub modular_monolith_min_boundaries: Option<u32>,
    pub modular_monolith_max_boundaries: Option<u32>,
    /// Mean instability band considered "moderate coupling". Default: [0.3, 0.7].
    pub moderate_instability_low: Option<f64>,
    pub moderate_instability_high: Option<f64>,
    /// Score at which a boundary counts as a hard extraction. Default: 41.
    pub hard_extraction_score: Option<u32>,
}

impl ViabilityConfig {
    pub fn effective_trivial_module_count(&self) -> u32 {
        self.trivial_module_count.unwrap_or(3)
    }

    pub fn effective_trivial_entity_count(&self) -> u32 {
        self.trivial_entity_count.unwrap_or(15)
    }

    pub fn effective_trivial_boundary_count(&self) -> u32 {
        self.trivial_boundary_count.unwrap_or(2)
    }

    pub fn effective_min_complexity_score(&self) -> u32 {
        self.min_complexity_score.unwrap_or(15)
    }

    pub fn effective_max_cross_boundary_percent(&self) -> f64 {
        self.max_cross_boundary_percent.unwrap_or(60.0)
    }

    pub fn effective_modular_monolith_range(&self) -> (u32, u32) {
        (
            self.modular_monolith_min_boundaries.unwrap_or(4),
            self.modular_monolith_max_boundaries.unwrap_or(8),
        )
    }

    pub fn effective_moderate_instability(&self) -> (f64, f64) {
        (
            self.moderate_instability_low.unwrap_or(0.3),
            self.moderate_instability_high.unwrap_or(0.7),
        )
    }

    pub fn effective_hard_extraction_score(&self) -> u32 {
        self.hard_extraction_score.unwrap_or(41)
    }
}
