//! Migration planner configuration.

use serde::{Deserialize, Serialize};

/// Weights of the five priority terms.
///
/// `priority = complexity_weight * (complexity_numerator / score)
///           + cross_reference_weight / (cross_refs + 1)
///           + inbound_weight / (inbound + 1)
///           + deployability_weight * deployability
///           + business_value_weight * business_value`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    /// Default: 30.0.
    pub complexity_weight: Option<f64>,
    /// Default: 100.0.
    pub complexity_numerator: Option<f64>,
    /// Default: 25.0.
    pub cross_reference_weight: Option<f64>,
    /// Default: 20.0.
    pub inbound_weight: Option<f64>,
    /// Default: 15.0.
    pub deployability_weight: Option<f64>,
    /// Default: 10.0.
    pub business_value_weight: Option<f64>,
}

impl PlannerConfig {
    pub fn effective_complexity_weight(&self) -> f64 {
        self.complexity_weight.unwrap_or(30.0)
    }

    pub fn effective_complexity_numerator(&self) -> f64 {
        self.complexity_numerator.unwrap_or(100.0)
    }

    pub fn effective_cross_reference_weight(&self) -> f64 {
        self.cross_reference_weight.unwrap_or(25.0)
    }

    pub fn effective_inbound_weight(&self) -> f64 {
        self.inbound_weight.unwrap_or(20.0)
    }

    pub fn effective_deployability_weight(&self) -> f64 {
        self.deployability_weight.unwrap_or(15.0)
    }

    pub fn effective_business_value_weight(&self) -> f64 {
        self.business_value_weight.unwrap_or(10.0)
    }

    /// All weights paired with their config key, for validation.
    pub(crate) fn named_values(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("planner.complexity_weight", self.complexity_weight),
            ("planner.complexity_numerator", self.complexity_numerator),
            ("planner.cross_reference_weight", self.cross_reference_weight),
            ("planner.inbound_weight", self.inbound_weight),
            ("planner.deployability_weight", self.deployability_weight),
            ("planner.business_value_weight", self.business_value_weight),
        ]
    }
}
