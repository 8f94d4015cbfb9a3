//! Base effort lookup and compounding multipliers.

use carve_core::config::{EffortBracket, EffortConfig};
use serde::{Deserialize, Serialize};

/// Whole-system conditions that inflate the base estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffortSignals {
    pub multi_writer_tables: bool,
    pub circular_dependencies: bool,
    pub distributed_transactions: bool,
    pub shared_state: bool,
    pub single_team: bool,
}

/// A multiplier that applied, with the condition that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedMultiplier {
    pub name: String,
    pub factor: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortEstimate {
    /// Sum of every boundary's complexity score.
    pub total_complexity: u32,
    pub base_low_weeks: f64,
    pub base_high_weeks: f64,
    pub multipliers: Vec<AppliedMultiplier>,
    /// Product of the applied multipliers; 1.0 when none apply.
    pub combined_multiplier: f64,
    pub low_weeks: f64,
    pub high_weeks: f64,
}

/// Look up the base range for `total_complexity` and compound every
/// multiplier whose signal is present.
pub fn estimate_effort(
    total_complexity: u32,
    signals: EffortSignals,
    config: &EffortConfig,
) -> EffortEstimate {
    let brackets = config.effective_brackets();
    let (base_low_weeks, base_high_weeks) = base_range(total_complexity, &brackets);

    let candidates = [
        (
            signals.multi_writer_tables,
            "multi_writer_tables",
            config.effective_multi_writer_multiplier(),
            "tables are written by more than one module",
        ),
        (
            signals.circular_dependencies,
            "circular_dependencies",
            config.effective_circular_dependency_multiplier(),
            "module graph contains dependency cycles",
        ),
        (
            signals.distributed_transactions,
            "distributed_transactions",
            config.effective_distributed_transaction_multiplier(),
            "transactions span more than one boundary",
        ),
        (
            signals.shared_state,
            "shared_state",
            config.effective_shared_state_multiplier(),
            "boundaries hold shared in-process state",
        ),
        (
            signals.single_team,
            "single_team",
            config.effective_single_team_multiplier(),
            "a single team owns the whole migration",
        ),
    ];

    let multipliers: Vec<AppliedMultiplier> = candidates
        .into_iter()
        .filter(|(present, ..)| *present)
        .map(|(_, name, factor, reason)| AppliedMultiplier {
            name: name.to_string(),
            factor,
            reason: reason.to_string(),
        })
        .collect();

    let combined_multiplier: f64 = multipliers.iter().map(|m| m.factor).product();

    EffortEstimate {
        total_complexity,
        base_low_weeks,
        base_high_weeks,
        multipliers,
        combined_multiplier,
        low_weeks: base_low_weeks * combined_multiplier,
        high_weeks: base_high_weeks * combined_multiplier,
    }
}

/// First bracket whose bound covers `total`; the last bracket otherwise.
fn base_range(total: u32, brackets: &[EffortBracket]) -> (f64, f64) {
    brackets
        .iter()
        .find(|b| b.max_total_score.map_or(true, |max| total <= max))
        .or_else(|| brackets.last())
        .map(|b| (b.low_weeks, b.high_weeks))
        .unwrap_or((0.0, 0.0))
}
