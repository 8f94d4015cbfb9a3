//! Top-level Carve configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::complexity_config::MAX_FACTOR_WEIGHT;
use super::{
    ComplexityConfig, CouplingConfig, EffortConfig, GraphConfig, PlannerConfig, ViabilityConfig,
};
use crate::errors::ConfigError;
use crate::types::ComplexityFactor;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CARVE_*`)
/// 3. Project config (`carve.toml` in project root)
/// 4. User config (`~/.carve/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarveConfig {
    pub graph: GraphConfig,
    pub coupling: CouplingConfig,
    pub complexity: ComplexityConfig,
    pub viability: ViabilityConfig,
    pub planner: PlannerConfig,
    pub effort: EffortConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub hard_extraction_score: Option<u32>,
    pub trivial_entity_count: Option<u32>,
}

impl CarveConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Project config
        let project_config_path = root.join("carve.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from one explicit TOML file, then apply env and CLI layers.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CarveConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CarveConfig) -> Result<(), ConfigError> {
        for &factor in ComplexityFactor::all() {
            let policy = config.complexity.policy(factor);
            if let Some(thresholds) = policy.thresholds {
                if thresholds.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("complexity.{factor}.thresholds"),
                        message: "must be strictly ascending".to_string(),
                    });
                }
            }
            if let Some(weight) = policy.weight {
                if weight > MAX_FACTOR_WEIGHT {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("complexity.{factor}.weight"),
                        message: format!("must not exceed {MAX_FACTOR_WEIGHT}"),
                    });
                }
            }
        }

        let coupling = &config.coupling;
        for (field, value) in [
            ("coupling.main_sequence_distance", coupling.main_sequence_distance),
            ("coupling.zone_cut", coupling.zone_cut),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        let viability = &config.viability;
        if let Some(pct) = viability.max_cross_boundary_percent {
            if !(0.0..=100.0).contains(&pct) {
                return Err(ConfigError::ValidationFailed {
                    field: "viability.max_cross_boundary_percent".to_string(),
                    message: "must be between 0.0 and 100.0".to_string(),
                });
            }
        }
        let (low, high) = viability.effective_moderate_instability();
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low > high {
            return Err(ConfigError::ValidationFailed {
                field: "viability.moderate_instability_low".to_string(),
                message: "instability band must satisfy 0.0 <= low <= high <= 1.0".to_string(),
            });
        }
        let (min, max) = viability.effective_modular_monolith_range();
        if min > max {
            return Err(ConfigError::ValidationFailed {
                field: "viability.modular_monolith_min_boundaries".to_string(),
                message: "must not exceed modular_monolith_max_boundaries".to_string(),
            });
        }

        for (field, value) in config.planner.named_values() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite, non-negative number".to_string(),
                    });
                }
            }
        }

        for (field, value) in config.effort.named_multipliers() {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite, positive number".to_string(),
                    });
                }
            }
        }
        if let Some(ref brackets) = config.effort.brackets {
            if brackets.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "effort.brackets".to_string(),
                    message: "must contain at least one bracket".to_string(),
                });
            }
            for bracket in brackets {
                if !bracket.low_weeks.is_finite()
                    || !bracket.high_weeks.is_finite()
                    || bracket.low_weeks < 0.0
                    || bracket.low_weeks > bracket.high_weeks
                {
                    return Err(ConfigError::ValidationFailed {
                        field: "effort.brackets".to_string(),
                        message: "each bracket needs 0 <= low_weeks <= high_weeks".to_string(),
                    });
                }
            }
            let bounds: Vec<u32> = brackets.iter().filter_map(|b| b.max_total_score).collect();
            if bounds.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ConfigError::ValidationFailed {
                    field: "effort.brackets".to_string(),
                    message: "max_total_score bounds must be strictly ascending".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.carve/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".carve").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CarveConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CarveConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CarveConfig, other: &CarveConfig) {
        // Graph
        if other.graph.hub_fan_in.is_some() {
            base.graph.hub_fan_in = other.graph.hub_fan_in;
        }
        if other.graph.god_fan_out.is_some() {
            base.graph.god_fan_out = other.graph.god_fan_out;
        }
        if other.graph.max_break_suggestions.is_some() {
            base.graph.max_break_suggestions = other.graph.max_break_suggestions;
        }

        // Coupling
        if other.coupling.main_sequence_distance.is_some() {
            base.coupling.main_sequence_distance = other.coupling.main_sequence_distance;
        }
        if other.coupling.zone_cut.is_some() {
            base.coupling.zone_cut = other.coupling.zone_cut;
        }

        // Complexity
        for &factor in ComplexityFactor::all() {
            let theirs = other.complexity.policy(factor);
            let ours = base.complexity.policy_mut(factor);
            if theirs.thresholds.is_some() {
                ours.thresholds = theirs.thresholds;
            }
            if theirs.weight.is_some() {
                ours.weight = theirs.weight;
            }
        }

        // Viability
        let (b, o) = (&mut base.viability, &other.viability);
        if o.trivial_module_count.is_some() {
            b.trivial_module_count = o.trivial_module_count;
        }
        if o.trivial_entity_count.is_some() {
            b.trivial_entity_count = o.trivial_entity_count;
        }
        if o.trivial_boundary_count.is_some() {
            b.trivial_boundary_count = o.trivial_boundary_count;
        }
        if o.min_complexity_score.is_some() {
            b.min_complexity_score = o.min_complexity_score;
        }
        if o.max_cross_boundary_percent.is_some() {
            b.max_cross_boundary_percent = o.max_cross_boundary_percent;
        }
        if o.modular_monolith_min_boundaries.is_some() {
            b.modular_monolith_min_boundaries = o.modular_monolith_min_boundaries;
        }
        if o.modular_monolith_max_boundaries.is_some() {
            b.modular_monolith_max_boundaries = o.modular_monolith_max_boundaries;
        }
        if o.moderate_instability_low.is_some() {
            b.moderate_instability_low = o.moderate_instability_low;
        }
        if o.moderate_instability_high.is_some() {
            b.moderate_instability_high = o.moderate_instability_high;
        }
        if o.hard_extraction_score.is_some() {
            b.hard_extraction_score = o.hard_extraction_score;
        }

        // Planner
        let (b, o) = (&mut base.planner, &other.planner);
        if o.complexity_weight.is_some() {
            b.complexity_weight = o.complexity_weight;
        }
        if o.complexity_numerator.is_some() {
            b.complexity_numerator = o.complexity_numerator;
        }
        if o.cross_reference_weight.is_some() {
            b.cross_reference_weight = o.cross_reference_weight;
        }
        if o.inbound_weight.is_some() {
            b.inbound_weight = o.inbound_weight;
        }
        if o.deployability_weight.is_some() {
            b.deployability_weight = o.deployability_weight;
        }
        if o.business_value_weight.is_some() {
            b.business_value_weight = o.business_value_weight;
        }

        // Effort
        let (b, o) = (&mut base.effort, &other.effort);
        if o.brackets.is_some() {
            b.brackets = o.brackets.clone();
        }
        if o.multi_writer_multiplier.is_some() {
            b.multi_writer_multiplier = o.multi_writer_multiplier;
        }
        if o.circular_dependency_multiplier.is_some() {
            b.circular_dependency_multiplier = o.circular_dependency_multiplier;
        }
        if o.distributed_transaction_multiplier.is_some() {
            b.distributed_transaction_multiplier = o.distributed_transaction_multiplier;
        }
        if o.shared_state_multiplier.is_some() {
            b.shared_state_multiplier = o.shared_state_multiplier;
        }
        if o.single_team_multiplier.is_some() {
            b.single_team_multiplier = o.single_team_multiplier;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CARVE_HARD_EXTRACTION_SCORE`, `CARVE_HUB_FAN_IN`, etc.
    fn apply_env_overrides(config: &mut CarveConfig) {
        if let Some(v) = env_parse::<u32>("CARVE_HUB_FAN_IN") {
            config.graph.hub_fan_in = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CARVE_GOD_FAN_OUT") {
            config.graph.god_fan_out = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CARVE_TRIVIAL_ENTITY_COUNT") {
            config.viability.trivial_entity_count = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CARVE_MIN_COMPLEXITY_SCORE") {
            config.viability.min_complexity_score = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CARVE_HARD_EXTRACTION_SCORE") {
            config.viability.hard_extraction_score = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CARVE_MAX_CROSS_BOUNDARY_PERCENT") {
            config.viability.max_cross_boundary_percent = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CarveConfig, cli: &CliOverrides) {
        if let Some(v) = cli.hard_extraction_score {
            config.viability.hard_extraction_score = Some(v);
        }
        if let Some(v) = cli.trivial_entity_count {
            config.viability.trivial_entity_count = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
