//! Observability for Carve.
//! `tracing` crate with `EnvFilter`, per-stage log levels.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
