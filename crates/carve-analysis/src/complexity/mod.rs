//! Complexity Calculator: eight weighted, bucketed factors per boundary.
//!
//! Each factor value is bucketed 1-5 by four ascending thresholds, multiplied
//! by its weight, and the weighted buckets are summed into an integer score.
//! Thresholds and weights come from `ComplexityConfig`.

pub mod inputs;
pub mod scoring;
pub mod types;

pub use inputs::{gather_factor_inputs, spanning_transactions, SpanningTransaction};
pub use scoring::{bucket, compute_complexity, score_boundary, ExtractionBands};
pub use types::*;
