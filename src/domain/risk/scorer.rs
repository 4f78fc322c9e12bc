//! Risk Scorer - projections onto the common 0-1 risk scale.

use tracing::debug;

use super::breakdown::{RiskBreakdown, SubsystemRisk};
use crate::config::ConstantsTable;
use crate::domain::foundation::Subsystem;
use crate::domain::physiology::PhysiologyProjection;

/// Normalizes each projection, buckets it, and combines the subsystem
/// scores into the aggregate.
///
/// Subsystem and aggregate buckets share `BucketThresholds::bucket_for`.
/// Subsystem weights were checked to sum to one when the constants loaded.
pub fn score_risks(projection: &PhysiologyProjection, constants: &ConstantsTable) -> RiskBreakdown {
    let thresholds = &constants.bucket_thresholds;
    let weights = &constants.subsystem_weights;

    let risk_for = |subsystem: Subsystem| {
        let score = constants
            .normalization
            .normalize(subsystem, projection.value(subsystem));
        SubsystemRisk {
            score,
            bucket: thresholds.bucket_for(score),
        }
    };

    let cortisol = risk_for(Subsystem::Cortisol);
    let cycle = risk_for(Subsystem::Cycle);
    let bone = risk_for(Subsystem::Bone);

    let risk_score = (weights.weight_for(Subsystem::Cortisol) * cortisol.score
        + weights.weight_for(Subsystem::Cycle) * cycle.score
        + weights.weight_for(Subsystem::Bone) * bone.score)
        .clamp(0.0, 1.0);

    let breakdown = RiskBreakdown {
        cortisol,
        cycle,
        bone,
        risk_score,
        risk_overall: thresholds.bucket_for(risk_score),
    };

    debug!(
        cortisol = %breakdown.cortisol.bucket,
        cycle = %breakdown.cycle.bucket,
        bone = %breakdown.bone.bucket,
        risk_score,
        risk_overall = %breakdown.risk_overall,
        "Scored subsystem risks"
    );

    breakdown
}
