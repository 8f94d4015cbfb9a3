//! Command-line interface definition.

use std::path::PathBuf;

use carve_core::config::CliOverrides;
use clap::Parser;

/// Carve - decomposition assessment for large codebases
#[derive(Parser, Debug)]
#[command(
    name = "carve",
    version,
    about = "Assess whether a codebase should be split into services",
    long_about = "Reads a JSON fact model produced by a source scanner and prints an assessment:\n\
                  coupling metrics, complexity scores, a viability verdict, an effort estimate\n\
                  and a dependency-respecting extraction order.\n\n\
                  The assessment is written to stdout as JSON; logs go to stderr (CARVE_LOG)."
)]
pub struct Cli {
    /// Fact model JSON file
    #[arg(value_name = "FACTS", required_unless_present = "print_schema")]
    pub facts: Option<PathBuf>,

    /// Configuration file; replaces the project carve.toml and user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pub pretty: bool,

    /// Complexity score from which a boundary counts as a hard extraction
    #[arg(long, value_name = "N")]
    pub hard_extraction_score: Option<u32>,

    /// Decomposition is not considered unless the system has more than N entities
    #[arg(long, value_name = "N")]
    pub min_entities: Option<u32>,

    /// Print the JSON Schema of the fact model and exit
    #[arg(long, conflicts_with = "facts")]
    pub print_schema: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            hard_extraction_score: self.hard_extraction_score,
            trivial_entity_count: self.min_entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_path_is_required_without_schema_flag() {
        assert!(Cli::try_parse_from(["carve"]).is_err());
        assert!(Cli::try_parse_from(["carve", "--print-schema"]).is_ok());
    }

    #[test]
    fn schema_flag_conflicts_with_facts() {
        assert!(Cli::try_parse_from(["carve", "facts.json", "--print-schema"]).is_err());
    }

    #[test]
    fn overrides_map_to_config_fields() {
        let cli = Cli::try_parse_from([
            "carve",
            "facts.json",
            "--hard-extraction-score",
            "50",
            "--min-entities",
            "40",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.hard_extraction_score, Some(50));
        assert_eq!(overrides.trivial_entity_count, Some(40));
        assert_eq!(cli.facts, Some(PathBuf::from("facts.json")));
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        assert!(Cli::try_parse_from(["carve", "f.json", "--min-entities", "many"]).is_err());
    }
}
