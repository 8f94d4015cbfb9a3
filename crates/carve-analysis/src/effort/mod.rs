//! Effort Estimator: total complexity to a range of engineering weeks.

pub mod estimate;

pub use estimate::{estimate_effort, AppliedMultiplier, EffortEstimate, EffortSignals};
