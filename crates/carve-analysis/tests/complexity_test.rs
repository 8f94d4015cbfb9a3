//! Complexity calculator tests: factor gathering, bucketing, weights, bands.

use carve_analysis::boundaries::BoundaryAssignment;
use carve_analysis::complexity::{
    compute_complexity, gather_factor_inputs, spanning_transactions, BoundaryComplexity,
    ExtractionBands, ExtractionDifficulty, FactorInputs,
};
use carve_analysis::coupling::{compute_boundary_coupling, ZoneBands};
use carve_analysis::facts::{FactIndex, FactModel};
use carve_analysis::graph::{build_dependency_graphs, BoundaryGraph};
use carve_core::config::{CarveConfig, ComplexityConfig, FactorPolicy};
use carve_core::errors::{AssessmentError, CarveErrorCode};
use carve_core::types::ComplexityFactor;
use serde_json::json;

fn ledger() -> FactModel {
    let value = json!({
        "schema_version": 1,
        "modules": [{ "id": "accounts" }, { "id": "payments" }, { "id": "reports" }],
        "entities": [
            { "id": "account", "module": "accounts", "tables": ["ledger"] },
            { "id": "entry", "module": "accounts", "tables": ["ledger"] },
            { "id": "payment", "module": "payments", "tables": ["ledger"] },
            { "id": "refund", "module": "payments", "references": ["entry"] },
            { "id": "report", "module": "reports", "tables": ["audit_log"] }
        ],
        "tables": [
            { "id": "ledger", "access": [
                { "module": "accounts", "mode": "read-write" },
                { "module": "payments", "mode": "write" },
                { "module": "reports", "mode": "read" }
            ] },
            { "id": "rates", "access": [{ "module": "accounts", "mode": "read" }] },
            { "id": "audit_log", "multi_writer": true }
        ],
        "edges": [
            { "source": "payment", "target": "account", "kind": "transactional-dependency" }
        ],
        "transactions": [
            { "id": "t1", "entities": ["account", "payment"] },
            { "id": "t2", "entities": ["entry", "refund"] },
            { "id": "t3", "entities": ["account", "entry"] }
        ],
        "boundaries": [
            { "id": "accounts", "entities": ["account", "entry"], "tables": ["rates"] },
            { "id": "payments", "entities": ["payment", "refund"],
              "native_queries": 9, "external_integrations": 2, "framework_cost": 3 },
            { "id": "reports", "entities": ["report"], "shared_state": 4 }
        ]
    });
    FactModel::from_json_str(&value.to_string()).unwrap()
}

fn factor_inputs(model: &FactModel) -> Vec<FactorInputs> {
    let index = FactIndex::build(model).unwrap();
    let graphs = build_dependency_graphs(&index, &Default::default()).unwrap();
    let assignment = BoundaryAssignment::resolve(&index).unwrap();
    let crossing = graphs.entities.cross_boundary(&assignment).unwrap();
    let boundary_graph = BoundaryGraph::build(assignment.len(), &crossing);
    let zones = ZoneBands::default();
    let couplings =
        compute_boundary_coupling(&index, &assignment, &crossing, &boundary_graph, zones)
            .unwrap();
    let spanning = spanning_transactions(&index, &assignment);
    gather_factor_inputs(&index, &assignment, &couplings, &spanning)
}

fn score(model: &FactModel, config: &ComplexityConfig, hard: u32) -> Vec<BoundaryComplexity> {
    compute_complexity(&factor_inputs(model), config, ExtractionBands::with_hard_score(hard))
        .unwrap()
}

fn scores(result: &[BoundaryComplexity]) -> Vec<(&str, u32)> {
    result.iter().map(|c| (c.boundary.as_str(), c.score)).collect()
}

#[test]
fn test_factor_inputs_gathered_from_facts() {
    let inputs = factor_inputs(&ledger());
    let (accounts, payments, reports) = (&inputs[0], &inputs[1], &inputs[2]);

    // ledger is claimed by two boundaries; rates only by accounts
    assert_eq!(accounts.shared_tables, 1);
    // two spanning transactions plus one transactional edge
    assert_eq!(accounts.transactional_dependencies, 3);
    assert_eq!(accounts.cross_boundary_references, 2);

    assert_eq!(payments.native_queries, 9);
    assert_eq!(payments.external_integrations, 2);
    assert_eq!(payments.framework_cost, 3);
    assert_eq!(payments.transactional_dependencies, 3);

    // audit_log carries the scanner's multi-writer hint
    assert_eq!(reports.shared_tables, 1);
    assert_eq!(reports.shared_state, 4);
    assert_eq!(reports.transactional_dependencies, 0);
    assert_eq!(reports.entity_count, 1);
}

#[test]
fn test_spanning_transactions_ignore_internal_ones() {
    let model = ledger();
    let index = FactIndex::build(&model).unwrap();
    let assignment = BoundaryAssignment::resolve(&index).unwrap();
    let spanning = spanning_transactions(&index, &assignment);
    let ids: Vec<&str> = spanning.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
    assert_eq!(spanning[0].boundaries, vec!["accounts", "payments"]);
}

#[test]
fn test_default_scores_and_difficulty() {
    let result = score(&ledger(), &ComplexityConfig::default(), 41);
    assert_eq!(scores(&result), vec![("accounts", 24), ("payments", 31), ("reports", 19)]);
    assert_eq!(result[0].difficulty, ExtractionDifficulty::Medium);
    assert_eq!(result[1].difficulty, ExtractionDifficulty::High);
    assert_eq!(result[2].difficulty, ExtractionDifficulty::Low);
}

#[test]
fn test_breakdown_lists_every_factor_in_order() {
    let result = score(&ledger(), &ComplexityConfig::default(), 41);
    let payments = &result[1];
    let factors: Vec<ComplexityFactor> = payments.factors.iter().map(|f| f.factor).collect();
    assert_eq!(factors, ComplexityFactor::all());

    let native = &payments.factors[3];
    assert_eq!(native.factor, ComplexityFactor::NativeQueries);
    assert_eq!((native.value, native.bucket, native.weight, native.weighted), (9, 4, 1, 4));

    let tx = &payments.factors[5];
    assert_eq!((tx.value, tx.bucket, tx.weight, tx.weighted), (3, 3, 3, 9));

    let sum: u32 = payments.factors.iter().map(|f| f.weighted).sum();
    assert_eq!(sum, payments.score);
}

#[test]
fn test_weights_are_injectable() {
    let config = ComplexityConfig {
        shared_tables: FactorPolicy {
            thresholds: None,
            weight: Some(0),
        },
        ..Default::default()
    };
    let result = score(&ledger(), &config, 41);
    // Each boundary loses 2 * 3 from shared_tables
    assert_eq!(scores(&result), vec![("accounts", 18), ("payments", 25), ("reports", 13)]);
}

#[test]
fn test_thresholds_are_injectable() {
    let config = CarveConfig::from_toml(
        r#"
[complexity.shared_state]
thresholds = [10, 20, 30, 40]
"#,
    )
    .unwrap();
    let result = score(&ledger(), &config.complexity, 41);
    // shared_state 4 drops from bucket 4 to bucket 1
    assert_eq!(result[2].score, 16);
}

#[test]
fn test_hard_extraction_follows_configured_score() {
    let result = score(&ledger(), &ComplexityConfig::default(), 30);
    assert_eq!(result[1].difficulty, ExtractionDifficulty::Hard);
    assert_eq!(result[0].difficulty, ExtractionDifficulty::Medium);
}

#[test]
fn test_minimum_score_with_default_policy() {
    let value = json!({
        "schema_version": 1,
        "modules": [],
        "entities": [{ "id": "solo" }],
        "boundaries": [{ "id": "tiny", "entities": ["solo"] }]
    });
    let model = FactModel::from_json_str(&value.to_string()).unwrap();
    let result = score(&model, &ComplexityConfig::default(), 41);
    assert_eq!(result[0].score, 13);
    assert!(result[0].factors.iter().all(|f| f.bucket == 1));
}

#[test]
fn test_overflowing_weight_is_degenerate_metric() {
    let config = ComplexityConfig {
        entity_count: FactorPolicy {
            thresholds: None,
            weight: Some(4_000_000_000),
        },
        ..Default::default()
    };
    let err = compute_complexity(
        &factor_inputs(&ledger()),
        &config,
        ExtractionBands::with_hard_score(41),
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "DEGENERATE_METRIC");
    match err {
        AssessmentError::DegenerateMetric { boundary, metric, .. } => {
            assert_eq!(boundary, "accounts");
            assert_eq!(metric, "complexity");
        }
        other => panic!("expected DegenerateMetric, got {other:?}"),
    }
}

#[test]
fn test_large_weight_within_range_does_not_wrap() {
    let config = ComplexityConfig {
        entity_count: FactorPolicy {
            thresholds: None,
            weight: Some(1_000_000_000),
        },
        ..Default::default()
    };
    let result = score(&ledger(), &config, 41);
    for boundary in &result {
        let entity = &boundary.factors[0];
        assert_eq!(entity.weighted, u32::from(entity.bucket) * 1_000_000_000);
        assert!(boundary.score >= entity.weighted);
    }
}
