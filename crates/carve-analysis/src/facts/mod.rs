//! Fact Model: the structural description of a codebase, supplied by an
//! external scanner. Loaded from JSON, validated and indexed before any
//! computation runs.

pub mod index;
pub mod loader;
pub mod types;

pub use index::FactIndex;
pub use types::*;
