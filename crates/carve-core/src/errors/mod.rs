//! Error handling for Carve.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod assessment_error;
pub mod config_error;
pub mod error_code;

pub use assessment_error::{AssessmentError, EngineResult};
pub use config_error::ConfigError;
pub use error_code::CarveErrorCode;
