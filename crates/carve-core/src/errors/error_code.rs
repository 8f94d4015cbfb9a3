//! CarveErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code next to its human-readable message.
pub trait CarveErrorCode {
    /// Returns the error code string (e.g., "EMPTY_BOUNDARY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_FACT_MODEL: &str = "MALFORMED_FACT_MODEL";
pub const EMPTY_BOUNDARY: &str = "EMPTY_BOUNDARY";
pub const UNRESOLVED_REFERENCE: &str = "UNRESOLVED_REFERENCE";
pub const DEGENERATE_METRIC: &str = "DEGENERATE_METRIC";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
