//! Migration plan types.

use serde::{Deserialize, Serialize};

/// The terms of a boundary's priority score, kept for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityFactors {
    pub complexity_score: u32,
    pub cross_boundary_references: u32,
    /// Distinct boundaries with edges into this one.
    pub inbound_dependencies: u32,
    /// Distinct boundaries this one calls synchronously.
    pub synchronous_dependencies: u32,
    /// 1.0 (none), 0.5 (1-2) or 0.0 (3+) synchronous dependencies.
    pub deployability: f64,
    pub business_value: u8,
    pub complexity_term: f64,
    pub cross_reference_term: f64,
    pub inbound_term: f64,
    pub deployability_term: f64,
    pub business_value_term: f64,
    pub priority: f64,
}

/// One extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// 1-based position in the extraction order.
    pub position: u32,
    pub boundary: String,
    /// 1-based position by priority alone, before dependency adjustment.
    pub priority_rank: u32,
    pub factors: PriorityFactors,
    /// Boundaries this one calls synchronously.
    pub depends_on: Vec<String>,
    /// Placed ahead of a synchronous dependency to break a cycle.
    pub cycle_break: bool,
    /// Member of a broken cycle; needs a compatibility shim during migration.
    pub requires_shim: bool,
}

/// Ordered extraction plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationPlan {
    pub steps: Vec<PlanStep>,
}

impl MigrationPlan {
    /// Boundary ids in extraction order.
    pub fn order(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.boundary.as_str()).collect()
    }

    /// 0-based index of `boundary` in the order.
    pub fn position_of(&self, boundary: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.boundary == boundary)
    }

    pub fn step(&self, boundary: &str) -> Option<&PlanStep> {
        self.steps.iter().find(|s| s.boundary == boundary)
    }
}
