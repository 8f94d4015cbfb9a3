//! End-to-end tests for the `carve` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/facts")
        .join(name)
}

const CARVE_ENV_VARS: &[&str] = &[
    "CARVE_LOG",
    "CARVE_HUB_FAN_IN",
    "CARVE_GOD_FAN_OUT",
    "CARVE_TRIVIAL_ENTITY_COUNT",
    "CARVE_MIN_COMPLEXITY_SCORE",
    "CARVE_HARD_EXTRACTION_SCORE",
    "CARVE_MAX_CROSS_BOUNDARY_PERCENT",
];

/// `carve` run from an empty directory with HOME pointed at it, so neither a
/// project nor a user config is picked up.
fn carve(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("carve").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    for var in CARVE_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn run_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "carve failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn small_monolith_is_not_worth_splitting() {
    let dir = TempDir::new().unwrap();
    let json = run_json(carve(&dir).arg(fixture("small-monolith.json")));
    assert_eq!(json["summary"]["verdict"], "DoNotDecompose");
    assert_eq!(json["summary"]["module_count"], 2);
}

#[test]
fn marketplace_proceeds_with_caution() {
    let dir = TempDir::new().unwrap();
    let json = run_json(carve(&dir).arg(fixture("marketplace.json")));
    assert_eq!(json["summary"]["verdict"], "ProceedWithCaution");
    assert_eq!(json["summary"]["boundary_count"], 6);
    let steps = json["migration_plan"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["boundary"], "notifications");
}

#[test]
fn verdict_does_not_affect_exit_code() {
    let dir = TempDir::new().unwrap();
    carve(&dir)
        .arg(fixture("small-monolith.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("DoNotDecompose"));
}

#[test]
fn pretty_flag_indents_output() {
    let dir = TempDir::new().unwrap();
    carve(&dir)
        .arg(fixture("small-monolith.json"))
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \""));
}

#[test]
fn min_entities_override_changes_verdict() {
    let dir = TempDir::new().unwrap();
    let json = run_json(
        carve(&dir)
            .arg(fixture("marketplace.json"))
            .args(["--min-entities", "20"]),
    );
    assert_eq!(json["summary"]["verdict"], "DoNotDecompose");
    let reasons = json["viability"]["reasons"].as_array().unwrap();
    assert!(reasons.iter().any(|r| r == "17 entities (<= 20)"));
}

#[test]
fn project_config_is_read_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("carve.toml"),
        "[viability]\ntrivial_entity_count = 20\n",
    )
    .unwrap();
    let json = run_json(carve(&dir).arg(fixture("marketplace.json")));
    assert_eq!(json["summary"]["verdict"], "DoNotDecompose");
}

#[test]
fn explicit_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("strict.toml");
    std::fs::write(&config, "[viability]\ntrivial_entity_count = 20\n").unwrap();
    let json = run_json(
        carve(&dir)
            .arg(fixture("marketplace.json"))
            .arg("--config")
            .arg(&config),
    );
    assert_eq!(json["summary"]["verdict"], "DoNotDecompose");
}

#[test]
fn missing_facts_file_fails_with_io_error() {
    let dir = TempDir::new().unwrap();
    carve(&dir)
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("IO_ERROR"));
}

#[test]
fn malformed_json_fails_with_malformed_fact_model() {
    let dir = TempDir::new().unwrap();
    let facts = dir.path().join("broken.json");
    std::fs::write(&facts, "{ \"schema_version\": 1, \"modules\": [").unwrap();
    carve(&dir)
        .arg(&facts)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MALFORMED_FACT_MODEL"));
}

#[test]
fn empty_boundary_is_reported() {
    let dir = TempDir::new().unwrap();
    let facts = dir.path().join("ghost.json");
    let model = serde_json::json!({
        "schema_version": 1,
        "modules": [{ "id": "core" }],
        "entities": [{ "id": "user", "module": "core" }],
        "boundaries": [
            { "id": "users", "entities": ["user"] },
            { "id": "ghost", "entities": [] }
        ]
    });
    std::fs::write(&facts, model.to_string()).unwrap();
    carve(&dir)
        .arg(&facts)
        .assert()
        .failure()
        .stderr(predicate::str::contains("EMPTY_BOUNDARY").and(predicate::str::contains("ghost")));
}

#[test]
fn edge_to_unowned_entity_is_unresolved_reference() {
    let dir = TempDir::new().unwrap();
    let facts = dir.path().join("orphan.json");
    let model = serde_json::json!({
        "schema_version": 1,
        "modules": [{ "id": "core" }],
        "entities": [
            { "id": "user", "module": "core" },
            { "id": "audit_entry", "module": "core" }
        ],
        "edges": [
            { "source": "user", "target": "audit_entry", "kind": "write-dependency" }
        ],
        "boundaries": [{ "id": "users", "entities": ["user"] }]
    });
    std::fs::write(&facts, model.to_string()).unwrap();
    carve(&dir)
        .arg(&facts)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("[UNRESOLVED_REFERENCE]")
                .and(predicate::str::contains("audit_entry")),
        );
}

#[test]
fn invalid_config_file_fails_with_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[viability\n").unwrap();
    carve(&dir)
        .arg(fixture("small-monolith.json"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_ERROR"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    carve(&dir)
        .arg(fixture("small-monolith.json"))
        .args(["--config", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_ERROR"));
}

#[test]
fn print_schema_describes_fact_model() {
    let dir = TempDir::new().unwrap();
    let json = run_json(carve(&dir).arg("--print-schema"));
    assert_eq!(json["title"], "FactModel");
    assert!(json["properties"]["boundaries"].is_object());
}

#[test]
fn facts_argument_is_required() {
    let dir = TempDir::new().unwrap();
    carve(&dir).assert().failure();
}
