//! Assessment Report Assembler: one immutable result per run.

pub mod assembler;
pub mod types;

pub use assembler::{assemble_report, ReportParts};
pub use types::*;
