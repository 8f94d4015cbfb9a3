//! Viability gate tests: rule precedence and auditability.

use carve_analysis::viability::{Verdict, ViabilityGate, ViabilityInput};
use carve_core::config::ViabilityConfig;

/// An input that clears rule 1 and misses rules 2 and 3.
fn healthy() -> ViabilityInput {
    ViabilityInput {
        module_count: 12,
        entity_count: 60,
        boundary_count: 10,
        complexity_scores: vec![18, 22, 25, 30, 19, 21, 24, 26, 20, 23],
        mean_instability: 0.5,
        cross_boundary_percent: 35.0,
        independent_deployment_signal: false,
        team_count: Some(4),
        critical_risks: Vec::new(),
    }
}

fn evaluate(input: ViabilityInput) -> carve_analysis::viability::ViabilityVerdict {
    let config = ViabilityConfig::default();
    ViabilityGate::new(&config).evaluate(input)
}

#[test]
fn test_proceed_when_nothing_blocks() {
    let verdict = evaluate(healthy());
    assert_eq!(verdict.verdict, Verdict::Proceed);
    assert_eq!(verdict.rule, 4);
}

#[test]
fn test_small_system_does_not_decompose() {
    let verdict = evaluate(ViabilityInput {
        module_count: 2,
        entity_count: 10,
        boundary_count: 1,
        complexity_scores: vec![14],
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::DoNotDecompose);
    assert_eq!(verdict.rule, 1);
    // Every triggering condition is recorded
    assert_eq!(verdict.reasons.len(), 4);
}

#[test]
fn test_rule_one_beats_hard_scores() {
    let verdict = evaluate(ViabilityInput {
        module_count: 3,
        complexity_scores: vec![55, 60, 48],
        critical_risks: vec!["sync-cycle:a+b".to_string()],
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::DoNotDecompose);
    assert_eq!(verdict.reasons, vec!["3 modules (<= 3)"]);
}

#[test]
fn test_each_trivial_condition_triggers_rule_one() {
    let cases = [
        ViabilityInput { entity_count: 15, ..healthy() },
        ViabilityInput { boundary_count: 2, ..healthy() },
        ViabilityInput { complexity_scores: vec![14, 13, 14], ..healthy() },
        ViabilityInput { cross_boundary_percent: 60.5, ..healthy() },
    ];
    for input in cases {
        let verdict = evaluate(input);
        assert_eq!(verdict.verdict, Verdict::DoNotDecompose, "{:?}", verdict.reasons);
        assert_eq!(verdict.reasons.len(), 1);
    }
}

#[test]
fn test_cross_boundary_percent_at_limit_is_allowed() {
    let verdict = evaluate(ViabilityInput {
        cross_boundary_percent: 60.0,
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::Proceed);
}

#[test]
fn test_modular_monolith_for_moderate_mid_sized_systems() {
    let verdict = evaluate(ViabilityInput {
        boundary_count: 6,
        mean_instability: 0.45,
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::ModularMonolithRecommended);
    assert_eq!(verdict.rule, 2);
    assert_eq!(verdict.reasons.len(), 3);
}

#[test]
fn test_modular_monolith_band_edges_are_inclusive() {
    for (boundaries, instability) in [(4, 0.3), (8, 0.7)] {
        let verdict = evaluate(ViabilityInput {
            boundary_count: boundaries,
            mean_instability: instability,
            ..healthy()
        });
        assert_eq!(verdict.verdict, Verdict::ModularMonolithRecommended);
    }
}

#[test]
fn test_deployment_signal_skips_modular_monolith() {
    let verdict = evaluate(ViabilityInput {
        boundary_count: 6,
        independent_deployment_signal: true,
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::Proceed);
}

#[test]
fn test_extreme_instability_skips_modular_monolith() {
    let verdict = evaluate(ViabilityInput {
        boundary_count: 6,
        mean_instability: 0.9,
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::Proceed);
}

#[test]
fn test_hard_boundary_means_caution() {
    let verdict = evaluate(ViabilityInput {
        complexity_scores: vec![18, 41, 25],
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::ProceedWithCaution);
    assert_eq!(verdict.rule, 3);
}

#[test]
fn test_critical_risk_means_caution() {
    let verdict = evaluate(ViabilityInput {
        critical_risks: vec!["sync-cycle:billing+orders".to_string()],
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::ProceedWithCaution);
    assert_eq!(verdict.reasons, vec!["critical risk sync-cycle:billing+orders"]);
}

#[test]
fn test_modular_monolith_beats_caution() {
    let verdict = evaluate(ViabilityInput {
        boundary_count: 5,
        complexity_scores: vec![50, 20, 20, 20, 20],
        ..healthy()
    });
    assert_eq!(verdict.verdict, Verdict::ModularMonolithRecommended);
}

#[test]
fn test_thresholds_are_configurable() {
    let config = ViabilityConfig {
        trivial_entity_count: Some(100),
        ..Default::default()
    };
    let verdict = ViabilityGate::new(&config).evaluate(healthy());
    assert_eq!(verdict.verdict, Verdict::DoNotDecompose);
}

#[test]
fn test_input_snapshot_is_kept() {
    let input = healthy();
    let verdict = evaluate(input.clone());
    assert_eq!(verdict.input, input);
}
