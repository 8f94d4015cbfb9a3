//! Effort estimate configuration.

use serde::{Deserialize, Serialize};

/// One row of the score-to-effort lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffortBracket {
    /// Inclusive upper bound on the summed complexity score. `None` = unbounded.
    pub max_total_score: Option<u32>,
    pub low_weeks: f64,
    pub high_weeks: f64,
}

impl EffortBracket {
    fn new(max_total_score: Option<u32>, low_weeks: f64, high_weeks: f64) -> Self {
        Self {
            max_total_score,
            low_weeks,
            high_weeks,
        }
    }
}

/// Lookup table and compounding multipliers for the effort estimate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EffortConfig {
    /// Ascending brackets; the first whose bound covers the total wins.
    pub brackets: Option<Vec<EffortBracket>>,
    /// Default: 1.3.
    pub multi_writer_multiplier: Option<f64>,
    /// Default: 1.2.
    pub circular_dependency_multiplier: Option<f64>,
    /// Default: 1.25.
    pub distributed_transaction_multiplier: Option<f64>,
    /// Default: 1.15.
    pub shared_state_multiplier: Option<f64>,
    /// Default: 1.2.
    pub single_team_multiplier: Option<f64>,
}

impl EffortConfig {
    pub fn default_brackets() -> Vec<EffortBracket> {
        vec![
            EffortBracket::new(Some(60), 2.0, 4.0),
            EffortBracket::new(Some(120), 4.0, 12.0),
            EffortBracket::new(Some(200), 12.0, 26.0),
            EffortBracket::new(Some(320), 26.0, 52.0),
            EffortBracket::new(None, 52.0, 104.0),
        ]
    }

    pub fn effective_brackets(&self) -> Vec<EffortBracket> {
        self.brackets.clone().unwrap_or_else(Self::default_brackets)
    }

    pub fn effective_multi_writer_multiplier(&self) -> f64 {
        self.multi_writer_multiplier.unwrap_or(1.3)
    }

    pub fn effective_circular_dependency_multiplier(&self) -> f64 {
        self.circular_dependency_multiplier.unwrap_or(1.2)
    }

    pub fn effective_distributed_transaction_multiplier(&self) -> f64 {
        self.distributed_transaction_multiplier.unwrap_or(1.25)
    }

    pub fn effective_shared_state_multiplier(&self) -> f64 {
        self.shared_state_multiplier.unwrap_or(1.15)
    }

    pub fn effective_single_team_multiplier(&self) -> f64 {
        self.single_team_multiplier.unwrap_or(1.2)
    }

    pub(crate) fn named_multipliers(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("effort.multi_writer_multiplier", self.multi_writer_multiplier),
            ("effort.circular_dependency_multiplier", self.circular_dependency_multiplier),
            ("effort.distributed_transaction_multiplier", self.distributed_transaction_multiplier),
            ("effort.shared_state_multiplier", self.shared_state_multiplier),
            ("effort.single_team_multiplier", self.single_team_multiplier),
        ]
    }
}
