//! Entity → boundary ownership and table claims.

use std::collections::{BTreeMap, BTreeSet};

use carve_core::errors::{AssessmentError, EngineResult};
use carve_core::types::FxHashMap;

use crate::facts::{CandidateBoundary, FactIndex};

/// Resolved candidate boundaries, sorted by id, with ownership lookups.
#[derive(Debug, Clone)]
pub struct BoundaryAssignment {
    boundaries: Vec<CandidateBoundary>,
    owner: FxHashMap<String, usize>,
    /// Per boundary: declared tables plus tables mapped by owned entities.
    tables: Vec<BTreeSet<String>>,
    /// Table id → indexes of the boundaries claiming it.
    claims: BTreeMap<String, BTreeSet<usize>>,
    derived: bool,
}

impl BoundaryAssignment {
    /// Use the supplied boundaries, or derive one per module owning entities.
    pub fn resolve(index: &FactIndex<'_>) -> EngineResult<Self> {
        let facts = index.facts();
        let (mut boundaries, derived) = if facts.boundaries.is_empty() {
            (derive_from_modules(index), true)
        } else {
            (facts.boundaries.clone(), false)
        };
        boundaries.sort_by(|a, b| a.id.cmp(&b.id));

        let mut owner: FxHashMap<String, usize> = FxHashMap::default();
        for (i, boundary) in boundaries.iter().enumerate() {
            if boundary.id.trim().is_empty() {
                return Err(AssessmentError::malformed(
                    format!("candidate boundary at position {i} has a blank id"),
                    Vec::new(),
                ));
            }
            if i > 0 && boundaries[i - 1].id == boundary.id {
                return Err(AssessmentError::malformed(
                    format!("duplicate candidate boundary id {}", boundary.id),
                    vec![boundary.id.clone()],
                ));
            }
            if !(1..=5).contains(&boundary.framework_cost) {
                return Err(AssessmentError::malformed(
                    format!(
                        "boundary {} has framework_cost {} outside 1..=5",
                        boundary.id, boundary.framework_cost
                    ),
                    vec![boundary.id.clone()],
                ));
            }
            if boundary.business_value > 2 {
                return Err(AssessmentError::malformed(
                    format!(
                        "boundary {} has business_value {} outside 0..=2",
                        boundary.id, boundary.business_value
                    ),
                    vec![boundary.id.clone()],
                ));
            }
            if let Some(missing) = boundary.tables.iter().find(|t| !index.is_table(t)) {
                return Err(AssessmentError::malformed(
                    format!("boundary {} owns unknown table {missing}", boundary.id),
                    vec![boundary.id.clone(), missing.clone()],
                ));
            }
            for entity in &boundary.entities {
                if !index.is_entity(entity) {
                    return Err(AssessmentError::malformed(
                        format!("boundary {} owns unknown entity {entity}", boundary.id),
                        vec![boundary.id.clone(), entity.clone()],
                    ));
                }
                if let Some(&other) = owner.get(entity) {
                    return Err(AssessmentError::malformed(
                        format!(
                            "entity {entity} is owned by both {} and {}",
                            boundaries[other].id, boundary.id
                        ),
                        vec![entity.clone(), boundaries[other].id.clone(), boundary.id.clone()],
                    ));
                }
                owner.insert(entity.clone(), i);
            }
        }

        let tables: Vec<BTreeSet<String>> = boundaries
            .iter()
            .map(|b| {
                let mut set = b.tables.clone();
                for entity in b.entities.iter().filter_map(|e| index.entity(e)) {
                    set.extend(entity.tables.iter().cloned());
                }
                set
            })
            .collect();

        let mut claims: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for (i, set) in tables.iter().enumerate() {
            for table in set {
                claims.entry(table.clone()).or_default().insert(i);
            }
        }

        let unassigned = facts
            .entities
            .iter()
            .filter(|e| !owner.contains_key(&e.id))
            .count();
        if unassigned > 0 {
            tracing::debug!(unassigned, "entities not owned by any candidate boundary");
        }

        Ok(Self {
            boundaries,
            owner,
            tables,
            claims,
            derived,
        })
    }

    pub fn boundaries(&self) -> &[CandidateBoundary] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Whether the boundaries were derived from modules rather than supplied.
    pub fn is_derived(&self) -> bool {
        self.derived
    }

    /// Index of the boundary owning `entity`.
    pub fn owner_of(&self, entity: &str) -> Option<usize> {
        self.owner.get(entity).copied()
    }

    pub fn assigned_entity_count(&self) -> usize {
        self.owner.len()
    }

    pub fn tables_of(&self, boundary: usize) -> &BTreeSet<String> {
        &self.tables[boundary]
    }

    /// Number of boundaries claiming `table`.
    pub fn claim_count(&self, table: &str) -> usize {
        self.claims.get(table).map_or(0, BTreeSet::len)
    }
}

/// One boundary per module that owns at least one entity; id = module id.
fn derive_from_modules(index: &FactIndex<'_>) -> Vec<CandidateBoundary> {
    let mut grouped: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for entity in &index.facts().entities {
        if let Some(ref module) = entity.module {
            grouped
                .entry(module.as_str())
                .or_default()
                .insert(entity.id.clone());
        }
    }
    grouped
        .into_iter()
        .map(|(module, entities)| CandidateBoundary::new(module, entities))
        .collect()
}
