//! Gathering raw factor values from the fact model and coupling results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::FactorInputs;
use crate::boundaries::BoundaryAssignment;
use crate::coupling::BoundaryCoupling;
use crate::facts::FactIndex;

/// A transaction touching entities in more than one boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTransaction {
    pub id: String,
    /// Boundary indexes, ascending.
    #[serde(skip)]
    pub boundary_indexes: Vec<usize>,
    pub boundaries: Vec<String>,
}

/// Transactions whose owned entities fall in two or more boundaries.
/// Entities outside every boundary are ignored here.
pub fn spanning_transactions(
    index: &FactIndex<'_>,
    assignment: &BoundaryAssignment,
) -> Vec<SpanningTransaction> {
    let mut spanning: Vec<SpanningTransaction> = index
        .facts()
        .transactions
        .iter()
        .filter_map(|tx| {
            let owners: BTreeSet<usize> = tx
                .entities
                .iter()
                .filter_map(|e| assignment.owner_of(e))
                .collect();
            (owners.len() > 1).then(|| SpanningTransaction {
                id: tx.id.clone(),
                boundaries: owners
                    .iter()
                    .map(|&b| assignment.boundaries()[b].id.clone())
                    .collect(),
                boundary_indexes: owners.into_iter().collect(),
            })
        })
        .collect();
    spanning.sort_by(|a, b| a.id.cmp(&b.id));
    spanning
}

/// Raw factor values for every boundary, in boundary order.
pub fn gather_factor_inputs(
    index: &FactIndex<'_>,
    assignment: &BoundaryAssignment,
    couplings: &[BoundaryCoupling],
    spanning: &[SpanningTransaction],
) -> Vec<FactorInputs> {
    let multi_writer = index.multi_writer_tables();

    assignment
        .boundaries()
        .iter()
        .zip(couplings)
        .enumerate()
        .map(|(i, (boundary, coupling))| {
            let shared_tables = assignment
                .tables_of(i)
                .iter()
                .filter(|t| assignment.claim_count(t) > 1 || multi_writer.contains(t.as_str()))
                .count() as u32;
            let spanning_count = spanning
                .iter()
                .filter(|tx| tx.boundary_indexes.contains(&i))
                .count() as u32;

            FactorInputs {
                boundary: boundary.id.clone(),
                entity_count: coupling.entity_count,
                cross_boundary_references: coupling.cross_boundary_references,
                shared_tables,
                native_queries: boundary.native_queries,
                external_integrations: boundary.external_integrations,
                transactional_dependencies: spanning_count + coupling.transactional_edges,
                shared_state: boundary.shared_state,
                framework_cost: boundary.framework_cost,
            }
        })
        .collect()
}
