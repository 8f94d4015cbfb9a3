//! Migration order planner tests: priority score, dependency order, cycle breaks.

use carve_analysis::planner::MigrationPlan;
use carve_analysis::{assess, FactModel};
use carve_core::config::CarveConfig;
use carve_core::errors::AssessmentError;
use serde_json::json;

/// Three boundaries; `orders` calls `catalog` and `customers` synchronously.
fn shop(customer_calls_back_synchronously: bool, orders_value: u8) -> FactModel {
    let asynchronous = !customer_calls_back_synchronously;
    let value = json!({
        "schema_version": 1,
        "modules": [{ "id": "catalog" }, { "id": "customers" }, { "id": "orders" }],
        "entities": [
            { "id": "product", "module": "catalog", "references": ["category"] },
            { "id": "category", "module": "catalog", "is_abstract": true },
            { "id": "customer", "module": "customers", "references": ["address"] },
            { "id": "address", "module": "customers" },
            { "id": "order", "module": "orders", "references": ["customer"] },
            { "id": "order_line", "module": "orders", "references": ["order", "product"] }
        ],
        "edges": [
            { "source": "order", "target": "customer", "kind": "write-dependency" },
            { "source": "customer", "target": "order", "kind": "read-only-reference",
              "asynchronous": asynchronous }
        ],
        "boundaries": [
            { "id": "catalog", "entities": ["product", "category"] },
            { "id": "customers", "entities": ["customer", "address"] },
            { "id": "orders", "entities": ["order", "order_line"], "business_value": orders_value }
        ]
    });
    FactModel::from_json_str(&value.to_string()).unwrap()
}

fn plan(model: &FactModel) -> MigrationPlan {
    assess(model, &CarveConfig::default())
        .unwrap()
        .migration_plan()
        .clone()
}

#[test]
fn test_priority_terms() {
    let plan = plan(&shop(false, 0));
    let catalog = &plan.step("catalog").unwrap().factors;

    assert_eq!(catalog.complexity_score, 15);
    assert_eq!(catalog.complexity_term, 200.0);
    assert_eq!(catalog.cross_reference_term, 12.5);
    assert_eq!(catalog.inbound_term, 10.0);
    assert_eq!(catalog.deployability, 1.0);
    assert_eq!(catalog.deployability_term, 15.0);
    assert_eq!(catalog.business_value_term, 0.0);
    assert_eq!(catalog.priority, 237.5);

    let orders = &plan.step("orders").unwrap().factors;
    assert_eq!(orders.synchronous_dependencies, 2);
    assert_eq!(orders.deployability, 0.5);
    assert_eq!(orders.priority, 223.75);
}

#[test]
fn test_order_follows_priority_when_unconstrained() {
    let plan = plan(&shop(false, 0));
    assert_eq!(plan.order(), vec!["catalog", "customers", "orders"]);
    let ranks: Vec<u32> = plan.steps.iter().map(|s| s.priority_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert!(plan.steps.iter().all(|s| !s.cycle_break && !s.requires_shim));
}

#[test]
fn test_dependencies_outrank_priority() {
    let plan = plan(&shop(false, 2));
    let orders = plan.step("orders").unwrap();

    // Highest priority, but both of its synchronous dependencies go first
    assert_eq!(orders.factors.priority, 243.75);
    assert_eq!(orders.priority_rank, 1);
    assert_eq!(orders.position, 3);
    assert_eq!(orders.depends_on, vec!["catalog", "customers"]);
    assert_eq!(plan.order(), vec!["catalog", "customers", "orders"]);
}

#[test]
fn test_synchronous_cycle_is_broken_at_lowest_complexity() {
    let plan = plan(&shop(true, 0));
    assert_eq!(plan.order(), vec!["catalog", "customers", "orders"]);

    let customers = plan.step("customers").unwrap();
    assert!(customers.cycle_break);
    assert!(!customers.requires_shim);
    assert_eq!(customers.depends_on, vec!["orders"]);

    let orders = plan.step("orders").unwrap();
    assert!(!orders.cycle_break);
    assert!(orders.requires_shim);

    assert!(!plan.step("catalog").unwrap().cycle_break);
}

#[test]
fn test_synchronous_cycle_is_a_critical_risk() {
    let result = assess(&shop(true, 0), &CarveConfig::default()).unwrap();
    assert_eq!(
        result.boundary_cycles().to_vec(),
        vec![vec!["customers".to_string(), "orders".to_string()]]
    );
    let first = &result.risks()[0];
    assert_eq!(first.id, "sync-cycle:customers+orders");
    assert!(first.is_critical());
}

#[test]
fn test_order_respects_every_unflagged_dependency() {
    for model in [shop(false, 0), shop(false, 2), shop(true, 2)] {
        let plan = plan(&model);
        for step in &plan.steps {
            for dep in &step.depends_on {
                let before = plan.position_of(dep).unwrap() < plan.position_of(&step.boundary).unwrap();
                assert!(before || step.cycle_break, "{} placed before {dep}", step.boundary);
            }
        }
    }
}

#[test]
fn test_planner_weights_are_configurable() {
    let config = CarveConfig::from_toml(
        r#"
[planner]
complexity_weight = 0.0
cross_reference_weight = 100.0
"#,
    )
    .unwrap();
    let result = assess(&shop(false, 0), &config).unwrap();
    let catalog = &result.migration_plan().step("catalog").unwrap().factors;
    assert_eq!(catalog.complexity_term, 0.0);
    assert_eq!(catalog.cross_reference_term, 50.0);
    assert_eq!(catalog.priority, 75.0);
}

#[test]
fn test_zero_complexity_score_is_degenerate() {
    let mut toml = String::new();
    for factor in [
        "entity_count",
        "cross_boundary_references",
        "shared_tables",
        "native_queries",
        "external_integrations",
        "transactional_dependencies",
        "shared_state",
        "framework_cost",
    ] {
        toml.push_str(&format!("[complexity.{factor}]\nweight = 0\n\n"));
    }
    let config = CarveConfig::from_toml(&toml).unwrap();

    let err = assess(&shop(false, 0), &config).unwrap_err();
    match err {
        AssessmentError::DegenerateMetric { boundary, metric, .. } => {
            assert_eq!(boundary, "catalog");
            assert_eq!(metric, "priority");
        }
        other => panic!("expected DegenerateMetric, got {other:?}"),
    }
}
