//! Validated lookup index over a fact model.

use std::collections::BTreeSet;

use carve_core::errors::{AssessmentError, EngineResult};
use carve_core::types::FxHashMap;

use super::types::{EntityFact, FactModel, ModuleFact, TableFact};

/// Id lookups over a fact model that has passed structural validation.
///
/// Building the index is where `MalformedFactModel` is raised for duplicate
/// or blank ids and for references to unknown modules, entities or tables.
/// Edge endpoints are checked later by the graph builder.
#[derive(Debug)]
pub struct FactIndex<'a> {
    facts: &'a FactModel,
    modules: FxHashMap<&'a str, usize>,
    entities: FxHashMap<&'a str, usize>,
    tables: FxHashMap<&'a str, usize>,
}

impl<'a> FactIndex<'a> {
    pub fn build(facts: &'a FactModel) -> EngineResult<Self> {
        facts.check_schema_version()?;

        let modules = index_ids("module", facts.modules.iter().map(|m| m.id.as_str()))?;
        let entities = index_ids("entity", facts.entities.iter().map(|e| e.id.as_str()))?;
        let tables = index_ids("table", facts.tables.iter().map(|t| t.id.as_str()))?;

        let mut ambiguous: Vec<String> = entities
            .keys()
            .filter(|id| modules.contains_key(*id))
            .map(|id| id.to_string())
            .collect();
        if !ambiguous.is_empty() {
            ambiguous.sort();
            return Err(AssessmentError::malformed(
                "ids used for both a module and an entity make edges ambiguous",
                ambiguous,
            ));
        }

        let index = Self {
            facts,
            modules,
            entities,
            tables,
        };
        index.check_references()?;
        Ok(index)
    }

    fn check_references(&self) -> EngineResult<()> {
        for entity in &self.facts.entities {
            if let Some(ref module) = entity.module {
                if !self.is_module(module) {
                    return Err(AssessmentError::malformed(
                        format!("entity {} belongs to unknown module {module}", entity.id),
                        vec![entity.id.clone(), module.clone()],
                    ));
                }
            }
            if let Some(missing) = entity.references.iter().find(|r| !self.is_entity(r)) {
                return Err(AssessmentError::malformed(
                    format!("entity {} references unknown entity {missing}", entity.id),
                    vec![entity.id.clone(), missing.clone()],
                ));
            }
            if let Some(missing) = entity.tables.iter().find(|t| !self.is_table(t)) {
                return Err(AssessmentError::malformed(
                    format!("entity {} maps to unknown table {missing}", entity.id),
                    vec![entity.id.clone(), missing.clone()],
                ));
            }
        }

        for table in &self.facts.tables {
            if let Some(access) = table.access.iter().find(|a| !self.is_module(&a.module)) {
                return Err(AssessmentError::malformed(
                    format!("table {} is accessed by unknown module {}", table.id, access.module),
                    vec![table.id.clone(), access.module.clone()],
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for tx in &self.facts.transactions {
            if !seen.insert(tx.id.as_str()) {
                return Err(AssessmentError::malformed(
                    format!("duplicate transaction id {}", tx.id),
                    vec![tx.id.clone()],
                ));
            }
            if let Some(missing) = tx.entities.iter().find(|e| !self.is_entity(e)) {
                return Err(AssessmentError::malformed(
                    format!("transaction {} touches unknown entity {missing}", tx.id),
                    vec![tx.id.clone(), missing.clone()],
                ));
            }
        }
        Ok(())
    }

    pub fn facts(&self) -> &'a FactModel {
        self.facts
    }

    pub fn is_module(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    pub fn is_entity(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn is_table(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    pub fn module(&self, id: &str) -> Option<&'a ModuleFact> {
        self.modules.get(id).map(|&i| &self.facts.modules[i])
    }

    pub fn entity(&self, id: &str) -> Option<&'a EntityFact> {
        self.entities.get(id).map(|&i| &self.facts.entities[i])
    }

    pub fn table(&self, id: &str) -> Option<&'a TableFact> {
        self.tables.get(id).map(|&i| &self.facts.tables[i])
    }

    /// Ids of multi-writer tables, sorted.
    pub fn multi_writer_tables(&self) -> BTreeSet<&'a str> {
        self.facts
            .tables
            .iter()
            .filter(|t| t.is_multi_writer())
            .map(|t| t.id.as_str())
            .collect()
    }
}

fn index_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> EngineResult<FxHashMap<&'a str, usize>> {
    let mut map = FxHashMap::default();
    for (i, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(AssessmentError::malformed(
                format!("{kind} at position {i} has a blank id"),
                Vec::new(),
            ));
        }
        if map.insert(id, i).is_some() {
            return Err(AssessmentError::malformed(
                format!("duplicate {kind} id {id}"),
                vec![id.to_string()],
            ));
        }
    }
    Ok(map)
}
