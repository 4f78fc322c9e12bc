//! InferenceReport - the pipeline's output record.

use serde::{Deserialize, Serialize};

use crate::domain::explanation::{ExplanationSet, Insight};
use crate::domain::features::FeatureVector;
use crate::domain::foundation::RiskBucket;
use crate::domain::physiology::PhysiologyProjection;
use crate::domain::risk::{RiskBreakdown, SubsystemRisk};

/// Output record returned to callers.
///
/// ```json
/// {"outputs": {...}, "explanations": [...], "insight": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceReport {
    pub outputs: OutputValues,
    pub explanations: ExplanationSet,
    pub insight: Insight,
}

/// Projections and risk, rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValues {
    pub cortisol_load: f64,
    pub cycle_variability_days: f64,
    pub bone_loss_pct_per_month: f64,
    pub risk_score: f64,
    pub risk_overall: RiskBucket,
    pub risk_breakdown: RiskBreakdownOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdownOutput {
    pub cortisol: SubsystemRisk,
    pub cycle: SubsystemRisk,
    pub bone: SubsystemRisk,
}

impl OutputValues {
    /// Rounds unrounded stage outputs. Buckets are kept from the unrounded scores.
    pub fn from_stages(projection: &PhysiologyProjection, breakdown: &RiskBreakdown) -> Self {
        let rounded = |risk: SubsystemRisk| SubsystemRisk {
            score: round_to(risk.score, 3),
            bucket: risk.bucket,
        };

        Self {
            cortisol_load: round_to(projection.cortisol_load, 1),
            cycle_variability_days: round_to(projection.cycle_variability_days, 2),
            bone_loss_pct_per_month: round_to(projection.bone_loss_pct_per_month, 2),
            risk_score: round_to(breakdown.risk_score, 2),
            risk_overall: breakdown.risk_overall,
            risk_breakdown: RiskBreakdownOutput {
                cortisol: rounded(breakdown.cortisol),
                cycle: rounded(breakdown.cycle),
                bone: rounded(breakdown.bone),
            },
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Every intermediate stage output of one run, unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTrace {
    pub features: FeatureVector,
    pub projection: PhysiologyProjection,
    pub breakdown: RiskBreakdown,
    pub explanations: ExplanationSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_handles_each_precision() {
        assert_eq!(round_to(34.800000000000004, 1), 34.8);
        assert_eq!(round_to(6.8100000000000005, 2), 6.81);
        assert_eq!(round_to(0.57965, 2), 0.58);
        assert_eq!(round_to(0.6809999999999999, 3), 0.681);
    }
}
