//! Explanation Generator - ranked drivers behind elevated risk.

use std::cmp::Ordering;

use super::statement::{DriverStatement, ExplanationSet};
use crate::config::ConstantsTable;
use crate::domain::features::{Feature, FeatureVector};
use crate::domain::physiology::{equation_terms, PhysiologyProjection};
use crate::domain::risk::RiskBreakdown;
use crate::domain::foundation::Subsystem;

/// Explains every Moderate or High subsystem by its largest equation terms.
///
/// A term's magnitude is its share of the subsystem's normalization span, so
/// magnitudes compare across subsystems. Terms below
/// `explanation.min_contribution` are dropped and at most
/// `explanation.max_drivers_per_subsystem` are kept per subsystem. Low
/// subsystems contribute no statements.
///
/// # Ordering
///
/// 1. Bucket, High before Moderate
/// 2. Contribution magnitude, descending
/// 3. Configured subsystem priority
/// 4. Feature declaration order
pub fn explain(
    features: &FeatureVector,
    projection: &PhysiologyProjection,
    breakdown: &RiskBreakdown,
    constants: &ConstantsTable,
) -> ExplanationSet {
    let settings = &constants.explanation;

    let mut statements: Vec<DriverStatement> = breakdown
        .elevated()
        .into_iter()
        .flat_map(|subsystem| {
            let bucket = breakdown.subsystem(subsystem).bucket;
            let projected = projection.value(subsystem);
            ranked_drivers(subsystem, features, constants)
                .into_iter()
                .take(settings.max_drivers_per_subsystem)
                .map(move |(feature, contribution)| {
                    DriverStatement::new(subsystem, bucket, feature, contribution, projected)
                })
        })
        .collect();

    statements.sort_by(|a, b| {
        b.bucket
            .cmp(&a.bucket)
            .then_with(|| descending_magnitude(a.contribution, b.contribution))
            .then_with(|| {
                settings
                    .priority_rank(a.subsystem)
                    .cmp(&settings.priority_rank(b.subsystem))
            })
            .then_with(|| a.factor.cmp(&b.factor))
    });

    ExplanationSet::new(statements)
}

/// Significant terms of one subsystem's equation on the 0-1 risk scale,
/// largest first.
pub(crate) fn ranked_drivers(
    subsystem: Subsystem,
    features: &FeatureVector,
    constants: &ConstantsTable,
) -> Vec<(Feature, f64)> {
    let span = constants.normalization.span(subsystem);
    let min_contribution = constants.explanation.min_contribution;

    let mut drivers: Vec<(Feature, f64)> = equation_terms(subsystem, features, constants)
        .contributions
        .into_iter()
        .map(|c| (c.feature, c.value / span))
        .filter(|(_, scaled)| *scaled != 0.0 && scaled.abs() >= min_contribution)
        .collect();

    drivers.sort_by(|a, b| descending_magnitude(a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    drivers
}

fn descending_magnitude(a: f64, b: f64) -> Ordering {
    b.abs().total_cmp(&a.abs())
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
