//! Assessment engine errors.
//!
//! Every variant names the offending identifier(s). None of them are
//! transient: the engine performs no I/O apart from the optional file loader,
//! so re-running only helps after the fact model has been corrected.

use std::path::PathBuf;

use super::error_code::{self, CarveErrorCode};

/// Errors raised while validating a fact model or computing an assessment.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// Structural input error: unresolved ids, duplicates, missing fields.
    #[error("Malformed fact model: {message}")]
    MalformedFactModel { message: String, ids: Vec<String> },

    #[error("Candidate boundary {boundary} owns no entities")]
    EmptyBoundary { boundary: String },

    #[error("Edge {from} -> {to} references entity {entity}, which no candidate boundary owns")]
    UnresolvedReference {
        from: String,
        to: String,
        entity: String,
    },

    #[error("Degenerate {metric} for boundary {boundary}: {detail}")]
    DegenerateMetric {
        boundary: String,
        metric: String,
        detail: String,
    },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AssessmentError {
    pub fn malformed(message: impl Into<String>, ids: Vec<String>) -> Self {
        Self::MalformedFactModel {
            message: message.into(),
            ids,
        }
    }

    /// Identifiers the error points at, for callers that want to highlight them.
    pub fn offending_ids(&self) -> Vec<String> {
        match self {
            Self::MalformedFactModel { ids, .. } => ids.clone(),
            Self::EmptyBoundary { boundary } => vec![boundary.clone()],
            Self::UnresolvedReference { from, to, entity } => {
                let mut ids = vec![entity.clone()];
                for id in [from, to] {
                    if !ids.contains(id) {
                        ids.push(id.clone());
                    }
                }
                ids
            }
            Self::DegenerateMetric { boundary, .. } => vec![boundary.clone()],
            Self::Io { path, .. } => vec![path.display().to_string()],
        }
    }
}

impl CarveErrorCode for AssessmentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedFactModel { .. } => error_code::MALFORMED_FACT_MODEL,
            Self::EmptyBoundary { .. } => error_code::EMPTY_BOUNDARY,
            Self::UnresolvedReference { .. } => error_code::UNRESOLVED_REFERENCE,
            Self::DegenerateMetric { .. } => error_code::DEGENERATE_METRIC,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, AssessmentError>;
