//! Risk register types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a risk entry. Ordered: low < medium < high < critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a risk came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Supplied,
    MultiWriterTable,
    CircularModuleDependency,
    DistributedTransaction,
    SynchronousBoundaryCycle,
    HardExtraction,
}

/// One entry of the risk register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub id: String,
    pub severity: RiskSeverity,
    pub category: RiskCategory,
    pub description: String,
    /// Ids of the modules, tables, boundaries or transactions concerned.
    pub subjects: Vec<String>,
}

impl RiskEntry {
    pub fn is_critical(&self) -> bool {
        self.severity == RiskSeverity::Critical
    }
}
