//! Fact Model types: the input contract.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::risk::RiskSeverity;

/// Fact model schema version understood by this engine.
pub const SCHEMA_VERSION: u32 = 1;

/// The complete, externally supplied description of the system under assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FactModel {
    pub schema_version: u32,
    pub modules: Vec<ModuleFact>,
    pub entities: Vec<EntityFact>,
    #[serde(default)]
    pub tables: Vec<TableFact>,
    #[serde(default)]
    pub edges: Vec<EdgeFact>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    /// Candidate grouping of entities. Derived per module when empty.
    #[serde(default)]
    pub boundaries: Vec<CandidateBoundary>,
    #[serde(default)]
    pub signals: DeploymentSignals,
    #[serde(default)]
    pub risks: Vec<SuppliedRisk>,
}

/// A code module (package, namespace, project) discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleFact {
    pub id: String,
    /// Declared dependencies. Ids that match no module are treated as external.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub entity_count: u32,
    /// Estimated size in lines of code.
    #[serde(default)]
    pub estimated_size: u64,
}

/// A domain entity (aggregate, model class, record type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntityFact {
    pub id: String,
    #[serde(default)]
    pub module: Option<String>,
    /// Foreign-key-like references to other entities.
    #[serde(default)]
    pub references: BTreeSet<String>,
    #[serde(default)]
    pub tables: BTreeSet<String>,
    /// Abstract or interface-like entity; feeds abstractness.
    #[serde(default)]
    pub is_abstract: bool,
}

/// A persistent table and the modules that touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableFact {
    pub id: String,
    #[serde(default)]
    pub access: Vec<TableAccess>,
    /// Scanner-side multi-writer detection result.
    #[serde(default)]
    pub multi_writer: bool,
}

impl TableFact {
    /// Distinct modules with write access.
    pub fn writers(&self) -> BTreeSet<&str> {
        self.access
            .iter()
            .filter(|a| a.mode.is_write())
            .map(|a| a.module.as_str())
            .collect()
    }

    /// Written by more than one module, or flagged so by the scanner.
    pub fn is_multi_writer(&self) -> bool {
        self.multi_writer || self.writers().len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableAccess {
    pub module: String,
    pub mode: AccessMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    Read,
    Write,
    ReadWrite,
}

impl AccessMode {
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// A directed dependency between two entities or two modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EdgeFact {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    /// Mediated by messaging rather than a synchronous call.
    #[serde(default)]
    pub asynchronous: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    ReadOnlyReference,
    WriteDependency,
    TransactionalDependency,
    QueryJoin,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnlyReference => "read-only-reference",
            Self::WriteDependency => "write-dependency",
            Self::TransactionalDependency => "transactional-dependency",
            Self::QueryJoin => "query-join",
        }
    }
}

/// A set of entities touched in one atomic unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransactionRecord {
    pub id: String,
    pub entities: BTreeSet<String>,
}

/// A proposed independently deployable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CandidateBoundary {
    pub id: String,
    #[serde(default)]
    pub entities: BTreeSet<String>,
    #[serde(default)]
    pub tables: BTreeSet<String>,
    /// Stored procedures and hand-written native queries.
    #[serde(default)]
    pub native_queries: u32,
    #[serde(default)]
    pub external_integrations: u32,
    /// Shared in-process state instances (static caches, singletons, sessions).
    #[serde(default)]
    pub shared_state: u32,
    /// Framework/migration cost level, 1 (trivial) to 5 (rewrite).
    #[serde(default = "default_framework_cost")]
    pub framework_cost: u32,
    /// 0 = low, 1 = medium, 2 = high.
    #[serde(default)]
    pub business_value: u8,
}

fn default_framework_cost() -> u32 {
    1
}

impl CandidateBoundary {
    /// A boundary with default signals owning `entities`.
    pub fn new(id: impl Into<String>, entities: BTreeSet<String>) -> Self {
        Self {
            id: id.into(),
            entities,
            tables: BTreeSet::new(),
            native_queries: 0,
            external_integrations: 0,
            shared_state: 0,
            framework_cost: default_framework_cost(),
            business_value: 0,
        }
    }
}

/// Optional organisational signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DeploymentSignals {
    pub team_count: Option<u32>,
    pub independent_deployment: Option<bool>,
    pub divergent_release_cadence: Option<bool>,
}

impl DeploymentSignals {
    pub fn wants_independent_deployment(&self) -> bool {
        self.independent_deployment == Some(true) || self.divergent_release_cadence == Some(true)
    }
}

/// A risk recorded upstream (architecture review, incident history).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SuppliedRisk {
    pub id: String,
    pub severity: RiskSeverity,
    pub description: String,
    #[serde(default)]
    pub subject: Option<String>,
}
