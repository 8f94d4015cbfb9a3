//! Configuration system for Carve.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.
//!
//! Every bucket table, threshold and weight the engine uses is policy, not
//! a constant: each section exposes `effective_*` accessors that fall back
//! to the compiled defaults.

pub mod carve_config;
pub mod complexity_config;
pub mod coupling_config;
pub mod effort_config;
pub mod graph_config;
pub mod planner_config;
pub mod viability_config;

pub use carve_config::{CarveConfig, CliOverrides};
pub use complexity_config::{ComplexityConfig, FactorPolicy, MAX_FACTOR_WEIGHT};
pub use coupling_config::CouplingConfig;
pub use effort_config::{EffortBracket, EffortConfig};
pub use graph_config::GraphConfig;
pub use planner_config::PlannerConfig;
pub use viability_config::ViabilityConfig;
