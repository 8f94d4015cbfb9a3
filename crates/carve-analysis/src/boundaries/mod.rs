//! Candidate boundary resolution.
//!
//! Grouping entities into boundaries is an external judgement; the engine
//! takes the grouping as supplied, or derives one boundary per owning module
//! when none is supplied.

pub mod assignment;

pub use assignment::BoundaryAssignment;
