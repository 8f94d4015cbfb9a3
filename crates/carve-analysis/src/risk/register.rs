//! Risk register construction.

use crate::complexity::{BoundaryComplexity, ExtractionDifficulty, SpanningTransaction};
use crate::facts::{FactIndex, SuppliedRisk};
use crate::graph::CycleGroup;

use super::types::{RiskCategory, RiskEntry, RiskSeverity};

/// Upstream results the register derives entries from.
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs<'a> {
    pub supplied: &'a [SuppliedRisk],
    pub module_cycles: &'a [CycleGroup],
    pub spanning_transactions: &'a [SpanningTransaction],
    /// Synchronous cycles between boundaries, as boundary ids.
    pub boundary_cycles: &'a [Vec<String>],
    pub complexities: &'a [BoundaryComplexity],
}

/// Supplied and derived risks, sorted by severity (critical first), then id.
pub fn build_risk_register(index: &FactIndex<'_>, inputs: RiskInputs<'_>) -> Vec<RiskEntry> {
    let mut register: Vec<RiskEntry> = inputs
        .supplied
        .iter()
        .map(|risk| RiskEntry {
            id: risk.id.clone(),
            severity: risk.severity,
            category: RiskCategory::Supplied,
            description: risk.description.clone(),
            subjects: risk.subject.iter().cloned().collect(),
        })
        .collect();

    for table in index.multi_writer_tables() {
        let writers: Vec<String> = index
            .table(table)
            .map(|t| t.writers().into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        let description = if writers.len() > 1 {
            format!(
                "table {table} is written by {} modules: {}",
                writers.len(),
                writers.join(", ")
            )
        } else {
            format!("table {table} is flagged as written from multiple places")
        };
        let mut subjects = vec![table.to_string()];
        subjects.extend(writers);
        register.push(RiskEntry {
            id: format!("multi-writer:{table}"),
            severity: RiskSeverity::High,
            category: RiskCategory::MultiWriterTable,
            description,
            subjects,
        });
    }

    for cycle in inputs.module_cycles {
        register.push(RiskEntry {
            id: format!("circular:{}", cycle.members.join("+")),
            severity: RiskSeverity::Medium,
            category: RiskCategory::CircularModuleDependency,
            description: format!(
                "modules {} depend on each other circularly",
                cycle.members.join(", ")
            ),
            subjects: cycle.members.clone(),
        });
    }

    for tx in inputs.spanning_transactions {
        register.push(RiskEntry {
            id: format!("distributed-tx:{}", tx.id),
            severity: RiskSeverity::High,
            category: RiskCategory::DistributedTransaction,
            description: format!(
                "transaction {} spans boundaries {} and would become distributed",
                tx.id,
                tx.boundaries.join(", ")
            ),
            subjects: tx.boundaries.clone(),
        });
    }

    for members in inputs.boundary_cycles {
        register.push(RiskEntry {
            id: format!("sync-cycle:{}", members.join("+")),
            severity: RiskSeverity::Critical,
            category: RiskCategory::SynchronousBoundaryCycle,
            description: format!(
                "boundaries {} call each other synchronously; extraction needs a compatibility shim",
                members.join(", ")
            ),
            subjects: members.clone(),
        });
    }

    for complexity in inputs
        .complexities
        .iter()
        .filter(|c| c.difficulty == ExtractionDifficulty::Hard)
    {
        register.push(RiskEntry {
            id: format!("hard-extraction:{}", complexity.boundary),
            severity: RiskSeverity::High,
            category: RiskCategory::HardExtraction,
            description: format!(
                "boundary {} scores {} and is a hard extraction",
                complexity.boundary, complexity.score
            ),
            subjects: vec![complexity.boundary.clone()],
        });
    }

    register.sort_by(|a, b| b.severity.cmp(&a.severity).then_with(|| a.id.cmp(&b.id)));
    register
}
