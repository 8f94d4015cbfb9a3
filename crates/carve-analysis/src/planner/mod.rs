//! Migration Order Planner: priority scores and a dependency-respecting
//! extraction order.

pub mod ordering;
pub mod priority;
pub mod types;

pub use ordering::plan_migration;
pub use priority::{compute_priority, deployability_factor};
pub use types::*;
