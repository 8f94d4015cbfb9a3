//! Bucketing and weighted scoring.

use carve_core::config::ComplexityConfig;
use carve_core::errors::{AssessmentError, EngineResult};
use carve_core::types::ComplexityFactor;
use rayon::prelude::*;

use super::types::{BoundaryComplexity, ExtractionDifficulty, FactorInputs, FactorScore};

/// Score bands for extraction difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionBands {
    pub medium_from: u32,
    pub high_from: u32,
    pub hard_from: u32,
}

impl ExtractionBands {
    /// Medium from 21, high from 31, hard from the configured hard-extraction score.
    pub fn with_hard_score(hard_from: u32) -> Self {
        Self {
            medium_from: 21,
            high_from: 31,
            hard_from,
        }
    }

    pub fn classify(&self, score: u32) -> ExtractionDifficulty {
        if score >= self.hard_from {
            ExtractionDifficulty::Hard
        } else if score >= self.high_from {
            ExtractionDifficulty::High
        } else if score >= self.medium_from {
            ExtractionDifficulty::Medium
        } else {
            ExtractionDifficulty::Low
        }
    }
}

/// Bucket 1..=5: one plus the number of thresholds the value reaches.
/// A value equal to a threshold lands in the higher bucket.
pub fn bucket(value: u32, thresholds: &[u32; 4]) -> u8 {
    1 + thresholds.iter().filter(|&&t| value >= t).count() as u8
}

/// Weighted bucket sum over the eight factors.
///
/// Fails with `DegenerateMetric` when a weighted bucket or the sum overflows `u32`.
pub fn score_boundary(
    inputs: &FactorInputs,
    config: &ComplexityConfig,
    bands: ExtractionBands,
) -> EngineResult<BoundaryComplexity> {
    let mut factors = Vec::with_capacity(ComplexityFactor::all().len());
    let mut score: u32 = 0;
    for &factor in ComplexityFactor::all() {
        let value = inputs.value(factor);
        let bucket = bucket(value, &config.effective_thresholds(factor));
        let weight = config.effective_weight(factor);
        let weighted = u32::from(bucket)
            .checked_mul(weight)
            .ok_or_else(|| overflow(inputs, format!("{factor} bucket {bucket} x weight {weight}")))?;
        score = score
            .checked_add(weighted)
            .ok_or_else(|| overflow(inputs, format!("sum exceeds {} at {factor}", u32::MAX)))?;
        factors.push(FactorScore {
            factor,
            value,
            bucket,
            weight,
            weighted,
        });
    }

    Ok(BoundaryComplexity {
        boundary: inputs.boundary.clone(),
        factors,
        score,
        difficulty: bands.classify(score),
    })
}

fn overflow(inputs: &FactorInputs, detail: String) -> AssessmentError {
    AssessmentError::DegenerateMetric {
        boundary: inputs.boundary.clone(),
        metric: "complexity".to_string(),
        detail: format!("overflow: {detail}"),
    }
}

/// Score every boundary; output order follows `inputs`. The first failing
/// boundary in that order wins.
pub fn compute_complexity(
    inputs: &[FactorInputs],
    config: &ComplexityConfig,
    bands: ExtractionBands,
) -> EngineResult<Vec<BoundaryComplexity>> {
    let results: Vec<EngineResult<BoundaryComplexity>> = inputs
        .par_iter()
        .map(|i| score_boundary(i, config, bands))
        .collect();
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_resolve_upward() {
        let thresholds = [4, 8, 13, 21];
        assert_eq!(bucket(0, &thresholds), 1);
        assert_eq!(bucket(3, &thresholds), 1);
        assert_eq!(bucket(4, &thresholds), 2);
        assert_eq!(bucket(12, &thresholds), 3);
        assert_eq!(bucket(13, &thresholds), 4);
        assert_eq!(bucket(21, &thresholds), 5);
        assert_eq!(bucket(u32::MAX, &thresholds), 5);
    }

    #[test]
    fn framework_cost_level_maps_to_same_bucket() {
        let thresholds = ComplexityFactor::FrameworkCost.default_thresholds();
        for level in 1..=5 {
            assert_eq!(u32::from(bucket(level, &thresholds)), level);
        }
    }

    #[test]
    fn minimal_boundary_scores_sum_of_weights() {
        let inputs = FactorInputs {
            boundary: "billing".into(),
            entity_count: 1,
            framework_cost: 1,
            ..Default::default()
        };
        let bands = ExtractionBands::with_hard_score(41);
        let result = score_boundary(&inputs, &ComplexityConfig::default(), bands).unwrap();
        assert_eq!(result.score, 13);
        assert_eq!(result.difficulty, ExtractionDifficulty::Low);
        assert!(result.factors.iter().all(|f| f.bucket == 1));
    }

    #[test]
    fn oversized_weight_is_degenerate_not_wrapped() {
        let mut config = ComplexityConfig::default();
        config.shared_state.weight = Some(u32::MAX);
        let inputs = FactorInputs {
            boundary: "billing".into(),
            entity_count: 1,
            shared_state: 2,
            framework_cost: 1,
            ..Default::default()
        };
        let bands = ExtractionBands::with_hard_score(41);
        let err = score_boundary(&inputs, &config, bands).unwrap_err();
        match err {
            AssessmentError::DegenerateMetric { boundary, metric, .. } => {
                assert_eq!(boundary, "billing");
                assert_eq!(metric, "complexity");
            }
            other => panic!("expected DegenerateMetric, got {other:?}"),
        }
    }

    #[test]
    fn difficulty_bands() {
        let bands = ExtractionBands::with_hard_score(41);
        assert_eq!(bands.classify(20), ExtractionDifficulty::Low);
        assert_eq!(bands.classify(21), ExtractionDifficulty::Medium);
        assert_eq!(bands.classify(31), ExtractionDifficulty::High);
        assert_eq!(bands.classify(40), ExtractionDifficulty::High);
        assert_eq!(bands.classify(41), ExtractionDifficulty::Hard);
    }
}
