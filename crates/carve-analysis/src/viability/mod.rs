//! Viability Gate: should this system be split into services at all?
//!
//! Four terminal outcomes evaluated in strict precedence order; the first
//! matching rule wins.

pub mod gate;
pub mod types;

pub use gate::ViabilityGate;
pub use types::*;
