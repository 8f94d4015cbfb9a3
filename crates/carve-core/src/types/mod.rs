//! Shared data types: collection re-exports and the complexity factor vocabulary.

pub mod collections;
pub mod factor;

pub use collections::{BTreeMap, BTreeSet, FxHashMap};
pub use factor::ComplexityFactor;
