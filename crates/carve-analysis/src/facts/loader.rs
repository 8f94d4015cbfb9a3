//! JSON loading, canonical serialization and fingerprinting of fact models.

use std::path::Path;

use carve_core::errors::{AssessmentError, EngineResult};
use xxhash_rust::xxh3::xxh3_64;

use super::types::{FactModel, SCHEMA_VERSION};

impl FactModel {
    /// Parse a fact model from JSON. Unknown fields are ignored; missing
    /// required fields and unsupported schema versions are malformed input.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let model: FactModel = serde_json::from_str(json).map_err(|e| {
            AssessmentError::malformed(format!("invalid fact model JSON: {e}"), Vec::new())
        })?;
        model.check_schema_version()?;
        Ok(model)
    }

    /// Read and parse a fact model file.
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AssessmentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn check_schema_version(&self) -> EngineResult<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(AssessmentError::malformed(
                format!(
                    "unsupported schema_version {} (expected {SCHEMA_VERSION})",
                    self.schema_version
                ),
                Vec::new(),
            ));
        }
        Ok(())
    }

    /// Canonical JSON form: field order fixed by the type, collections as supplied.
    pub fn to_canonical_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| {
            AssessmentError::malformed(format!("fact model is not serializable: {e}"), Vec::new())
        })
    }

    /// xxh3-64 of the canonical JSON, hex encoded. Equal inputs, equal fingerprints.
    pub fn fingerprint(&self) -> EngineResult<String> {
        let canonical = self.to_canonical_json()?;
        Ok(format!("{:016x}", xxh3_64(canonical.as_bytes())))
    }

    /// JSON Schema of the input contract.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(FactModel);
        serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
    }
}
