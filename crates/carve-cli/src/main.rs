//! Carve CLI: read a fact model, print the assessment.
//!
//! Exit status is non-zero on any engine or configuration error and zero
//! otherwise, whatever the verdict.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use carve_analysis::{assess, FactModel};
use carve_core::config::CarveConfig;
use carve_core::errors::{AssessmentError, CarveErrorCode, ConfigError};
use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let args = Cli::parse();
    carve_core::tracing::init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    if args.print_schema {
        let schema = serde_json::to_string_pretty(&FactModel::json_schema())?;
        println!("{schema}");
        return Ok(());
    }

    let facts_path = args
        .facts
        .as_deref()
        .context("a fact model path is required")?;
    let config = load_config(args)?;

    let facts = FactModel::from_path(facts_path)?;
    tracing::info!(
        path = %facts_path.display(),
        modules = facts.modules.len(),
        entities = facts.entities.len(),
        "fact model loaded"
    );

    let result = assess(&facts, &config)?;
    let json = if args.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn load_config(args: &Cli) -> Result<CarveConfig> {
    let overrides = args.overrides();
    let config = match args.config {
        Some(ref path) => CarveConfig::load_file(path, Some(&overrides))?,
        None => {
            let root = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
            CarveConfig::load(&root, Some(&overrides))?
        }
    };
    Ok(config)
}

/// Coded message for engine and config errors, the plain chain otherwise.
fn describe(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<AssessmentError>() {
        e.coded_string()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.coded_string()
    } else {
        format!("{err:#}")
    }
}
