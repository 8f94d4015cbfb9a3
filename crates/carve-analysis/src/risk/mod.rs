//! Risk register: supplied risks plus risks derived from the assessment.

pub mod register;
pub mod types;

pub use register::{build_risk_register, RiskInputs};
pub use types::*;
