//! Re-exports of the collection types used across the engine.
//!
//! Fx maps for internal indexes; B-tree collections for anything whose
//! iteration order reaches the serialized result.

pub use rustc_hash::FxHashMap;
pub use std::collections::{BTreeMap, BTreeSet};
