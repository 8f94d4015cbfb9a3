//! Placement of a boundary on the (instability, abstractness) plane.

use carve_core::config::CouplingConfig;

use super::types::ZoneClassification;

/// Configured zone limits, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBands {
    pub main_sequence_distance: f64,
    pub zone_cut: f64,
}

impl ZoneBands {
    pub fn from_config(config: &CouplingConfig) -> Self {
        Self {
            main_sequence_distance: config.effective_main_sequence_distance(),
            zone_cut: config.effective_zone_cut(),
        }
    }

    /// A boundary close enough to `A + I = 1` is on the main sequence whatever
    /// its corner. Otherwise a concrete, stable boundary (both below the cut)
    /// is painful to extract and an abstract one nobody depends on (both above)
    /// is useless. Mixed positions count as main sequence.
    pub fn classify(
        &self,
        instability: f64,
        abstractness: f64,
        distance: f64,
    ) -> ZoneClassification {
        let cut = self.zone_cut;
        if distance <= self.main_sequence_distance {
            ZoneClassification::MainSequence
        } else if instability < cut && abstractness < cut {
            ZoneClassification::ZoneOfPain
        } else if instability > cut && abstractness > cut {
            ZoneClassification::ZoneOfUselessness
        } else {
            ZoneClassification::MainSequence
        }
    }
}

impl Default for ZoneBands {
    fn default() -> Self {
        Self::from_config(&CouplingConfig::default())
    }
}
