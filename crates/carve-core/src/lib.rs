//! carve-core: shared foundations for the Carve decomposition assessment engine.
//!
//! - Config: TOML-based, layered resolution (CLI > env > project > user > defaults)
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Tracing: `tracing-subscriber` setup driven by `CARVE_LOG`
//! - Types: collection re-exports and the complexity factor vocabulary

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
