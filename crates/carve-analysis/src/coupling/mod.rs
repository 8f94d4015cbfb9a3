//! Coupling Analysis: Robert C. Martin metrics at boundary granularity.
//!
//! Computes Ca (afferent), Ce (efferent), I (instability), A (abstractness),
//! D (distance from main sequence) and the zone on the (I, A) plane for every
//! candidate boundary, counting distinct external entities.

pub mod martin_metrics;
pub mod types;
pub mod zones;

pub use martin_metrics::compute_boundary_coupling;
pub use types::*;
pub use zones::ZoneBands;
