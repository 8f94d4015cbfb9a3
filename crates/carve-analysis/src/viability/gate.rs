//! Precedence-ordered viability decision.

use carve_core::config::ViabilityConfig;

use super::types::{Verdict, ViabilityInput, ViabilityVerdict};

/// Pure decision function over `ViabilityInput`.
#[derive(Debug, Clone, Copy)]
pub struct ViabilityGate<'a> {
    config: &'a ViabilityConfig,
}

impl<'a> ViabilityGate<'a> {
    pub fn new(config: &'a ViabilityConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, input: ViabilityInput) -> ViabilityVerdict {
        let (verdict, reasons) = if let Some(reasons) = self.do_not_decompose(&input) {
            (Verdict::DoNotDecompose, reasons)
        } else if let Some(reasons) = self.modular_monolith(&input) {
            (Verdict::ModularMonolithRecommended, reasons)
        } else if let Some(reasons) = self.proceed_with_caution(&input) {
            (Verdict::ProceedWithCaution, reasons)
        } else {
            (
                Verdict::Proceed,
                vec!["no rule blocks or qualifies decomposition".to_string()],
            )
        };

        tracing::debug!(verdict = %verdict, reasons = reasons.len(), "viability gate evaluated");

        ViabilityVerdict {
            verdict,
            rule: verdict.rule(),
            reasons,
            input,
        }
    }

    /// Rule 1: the system is too small, too simple or too entangled.
    fn do_not_decompose(&self, input: &ViabilityInput) -> Option<Vec<String>> {
        let cfg = self.config;
        let mut reasons = Vec::new();

        let max_modules = cfg.effective_trivial_module_count();
        if input.module_count <= max_modules {
            reasons.push(format!("{} modules (<= {max_modules})", input.module_count));
        }
        let max_entities = cfg.effective_trivial_entity_count();
        if input.entity_count <= max_entities {
            reasons.push(format!("{} entities (<= {max_entities})", input.entity_count));
        }
        let max_boundaries = cfg.effective_trivial_boundary_count();
        if input.boundary_count <= max_boundaries {
            reasons.push(format!(
                "{} candidate boundaries (<= {max_boundaries})",
                input.boundary_count
            ));
        }
        let min_score = cfg.effective_min_complexity_score();
        if input.complexity_scores.iter().all(|&s| s < min_score) {
            reasons.push(format!("every complexity score is below {min_score}"));
        }
        let max_pct = cfg.effective_max_cross_boundary_percent();
        if input.cross_boundary_percent > max_pct {
            reasons.push(format!(
                "{:.1}% of entities have cross-boundary references (> {max_pct}%)",
                input.cross_boundary_percent
            ));
        }

        (!reasons.is_empty()).then_some(reasons)
    }

    /// Rule 2: a handful of moderately coupled boundaries and no need to deploy apart.
    fn modular_monolith(&self, input: &ViabilityInput) -> Option<Vec<String>> {
        let (min, max) = self.config.effective_modular_monolith_range();
        let (low, high) = self.config.effective_moderate_instability();

        let in_range = (min..=max).contains(&input.boundary_count);
        let moderate = (low..=high).contains(&input.mean_instability);
        if in_range && moderate && !input.independent_deployment_signal {
            Some(vec![
                format!("{} candidate boundaries (within {min}-{max})", input.boundary_count),
                format!(
                    "mean instability {:.2} is moderate (within {low}-{high})",
                    input.mean_instability
                ),
                "no independent deployment signal".to_string(),
            ])
        } else {
            None
        }
    }

    /// Rule 3: decomposition is warranted but something is hard or critical.
    fn proceed_with_caution(&self, input: &ViabilityInput) -> Option<Vec<String>> {
        let hard = self.config.effective_hard_extraction_score();
        let mut reasons = Vec::new();

        let hard_count = input.complexity_scores.iter().filter(|&&s| s >= hard).count();
        if hard_count > 0 {
            reasons.push(format!("{hard_count} boundary(ies) score >= {hard} (hard extraction)"));
        }
        for risk in &input.critical_risks {
            reasons.push(format!("critical risk {risk}"));
        }

        (!reasons.is_empty()).then_some(reasons)
    }
}
