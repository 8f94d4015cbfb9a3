//! Structured span field definitions.
//!
//! Standard field names used in tracing spans across the assessment stages,
//! so log queries can rely on one vocabulary.

/// Number of modules in the fact model.
pub const MODULE_COUNT: &str = "module_count";

/// Number of entities in the fact model.
pub const ENTITY_COUNT: &str = "entity_count";

/// Number of candidate boundaries under assessment.
pub const BOUNDARY_COUNT: &str = "boundary_count";

/// Number of circular-dependency groups found in the module graph.
pub const CYCLE_COUNT: &str = "cycle_count";

/// Graph Builder: construction time in microseconds.
pub const GRAPH_BUILD_TIME: &str = "graph_build_time";

/// Viability Gate: verdict emitted.
pub const VERDICT: &str = "verdict";

/// Whole pipeline: assessment time in microseconds.
pub const ASSESSMENT_TIME: &str = "assessment_time";

/// Every field above, in declaration order.
pub const ALL: &[&str] = &[
    MODULE_COUNT,
    ENTITY_COUNT,
    BOUNDARY_COUNT,
    CYCLE_COUNT,
    GRAPH_BUILD_TIME,
    VERDICT,
    ASSESSMENT_TIME,
];
