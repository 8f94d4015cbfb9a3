//! Viability gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    DoNotDecompose,
    ModularMonolithRecommended,
    ProceedWithCaution,
    Proceed,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DoNotDecompose => "DoNotDecompose",
            Self::ModularMonolithRecommended => "ModularMonolithRecommended",
            Self::ProceedWithCaution => "ProceedWithCaution",
            Self::Proceed => "Proceed",
        }
    }

    /// Precedence rank of the rule producing this verdict (1 = checked first).
    pub fn rule(&self) -> u8 {
        match self {
            Self::DoNotDecompose => 1,
            Self::ModularMonolithRecommended => 2,
            Self::ProceedWithCaution => 3,
            Self::Proceed => 4,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate, system-wide inputs of the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityInput {
    pub module_count: u32,
    pub entity_count: u32,
    pub boundary_count: u32,
    /// In boundary id order.
    pub complexity_scores: Vec<u32>,
    /// Mean instability across boundaries; 0 with no boundaries.
    pub mean_instability: f64,
    /// Share of assigned entities incident to a cross-boundary edge, 0-100.
    pub cross_boundary_percent: f64,
    pub independent_deployment_signal: bool,
    pub team_count: Option<u32>,
    /// Ids of critical risk register entries.
    pub critical_risks: Vec<String>,
}

/// The gate's decision with everything that led to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViabilityVerdict {
    pub verdict: Verdict,
    pub rule: u8,
    /// Every condition of the matched rule that held.
    pub reasons: Vec<String>,
    pub input: ViabilityInput,
}
