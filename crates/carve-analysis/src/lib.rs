//! carve-analysis: the decomposition assessment engine.
//!
//! Ingests a fact model describing a codebase (modules, entities, tables,
//! edges, transactions, candidate boundaries) and produces coupling metrics,
//! per-boundary complexity scores, a viability verdict, an effort estimate
//! and a dependency-respecting migration order.
//!
//! Every stage is a pure function over immutable inputs; identical input
//! always yields an identical [`report::AssessmentResult`].

pub mod boundaries;
pub mod complexity;
pub mod coupling;
pub mod effort;
pub mod engine;
pub mod facts;
pub mod graph;
pub mod planner;
pub mod report;
pub mod risk;
pub mod viability;

pub use engine::{assess, assess_path};
pub use facts::FactModel;
pub use report::AssessmentResult;
