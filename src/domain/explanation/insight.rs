//! Insight - the focus subsystem summary presented alongside explanations.

use serde::{Deserialize, Serialize};

use super::generator::ranked_drivers;
use crate::config::ConstantsTable;
use crate::domain::features::FeatureVector;
use crate::domain::foundation::{RiskBucket, Subsystem};
use crate::domain::physiology::PhysiologyProjection;
use crate::domain::risk::RiskBreakdown;

/// Upper bound on suggested next steps.
pub const MAX_NEXT_STEPS: usize = 3;

/// Label/value pair for a headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricChip {
    pub label: String,
    pub value: String,
}

impl MetricChip {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Per-subsystem card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCard {
    pub subsystem: Subsystem,
    pub title: String,
    pub score: f64,
    pub bucket: RiskBucket,
    pub driver: Option<String>,
}

/// Summary centered on the highest-risk subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub focus: Subsystem,
    pub headline: String,
    pub primary_driver: Option<String>,
    pub chips: Vec<MetricChip>,
    pub risk_cards: Vec<RiskCard>,
    pub next_steps: Vec<String>,
}

impl Insight {
    /// Headline followed by the primary driver, if any.
    pub fn current_insight(&self) -> String {
        match &self.primary_driver {
            Some(driver) => format!("{} {}", self.headline, driver),
            None => self.headline.clone(),
        }
    }
}

/// Builds the insight for a scored run.
///
/// The focus is the subsystem with the highest score; configured priority
/// breaks ties.
pub fn build_insight(
    features: &FeatureVector,
    projection: &PhysiologyProjection,
    breakdown: &RiskBreakdown,
    constants: &ConstantsTable,
) -> Insight {
    let settings = &constants.explanation;
    let focus = Subsystem::ALL
        .into_iter()
        .min_by(|a, b| {
            breakdown
                .subsystem(*b)
                .score
                .total_cmp(&breakdown.subsystem(*a).score)
                .then_with(|| settings.priority_rank(*a).cmp(&settings.priority_rank(*b)))
        })
        .unwrap_or(Subsystem::Cortisol);

    let primary_driver = |subsystem: Subsystem| {
        ranked_drivers(subsystem, features, constants)
            .into_iter()
            .find(|(_, contribution)| *contribution > 0.0)
            .map(|(feature, _)| format!("Primary driver: {}.", feature.label()))
    };

    let risk_cards = Subsystem::ALL
        .into_iter()
        .map(|subsystem| {
            let risk = breakdown.subsystem(subsystem);
            RiskCard {
                subsystem,
                title: subsystem.display_name().to_string(),
                score: risk.score,
                bucket: risk.bucket,
                driver: primary_driver(subsystem),
            }
        })
        .collect();

    Insight {
        focus,
        headline: headline(focus, projection, constants),
        primary_driver: primary_driver(focus),
        chips: vec![
            focus_chip(focus, projection),
            MetricChip::new("Overall Risk", breakdown.risk_overall.label()),
            MetricChip::new("Risk Score", format!("{:.2}", breakdown.risk_score)),
        ],
        risk_cards,
        next_steps: mitigations(focus)
            .iter()
            .take(MAX_NEXT_STEPS)
            .map(|step| step.to_string())
            .collect(),
    }
}

fn headline(focus: Subsystem, projection: &PhysiologyProjection, constants: &ConstantsTable) -> String {
    match focus {
        Subsystem::Cortisol => {
            let pct = 100.0 * projection.cortisol_load / constants.normalization.cortisol_max;
            format!(
                "Projected cortisol load is {:.0}% of the stress-hormone scale.",
                pct
            )
        }
        Subsystem::Cycle => format!(
            "Cycle length may shift by ±{:.2} days from baseline.",
            projection.cycle_variability_days
        ),
        Subsystem::Bone => format!(
            "Bone density may decline by {:.2}% per month.",
            projection.bone_loss_pct_per_month
        ),
    }
}

fn focus_chip(focus: Subsystem, projection: &PhysiologyProjection) -> MetricChip {
    match focus {
        Subsystem::Cortisol => MetricChip::new(
            "Cortisol Load",
            format!("{:.0}/100", projection.cortisol_load),
        ),
        Subsystem::Cycle => MetricChip::new(
            "Cycle Variability",
            format!("±{:.2} days", projection.cycle_variability_days),
        ),
        Subsystem::Bone => MetricChip::new(
            "Bone Loss Rate",
            format!("{:.2}% / month", projection.bone_loss_pct_per_month),
        ),
    }
}

/// Suggested countermeasures for a subsystem.
pub fn mitigations(subsystem: Subsystem) -> &'static [&'static str] {
    match subsystem {
        Subsystem::Cortisol => &[
            "Protect an 8-hour sleep window for the next three nights",
            "Schedule a structured decompression block after high-workload shifts",
            "Review crew workload with the flight surgeon",
        ],
        Subsystem::Cycle => &[
            "Log cycle symptoms daily to track deviation from baseline",
            "Add short stress-downshift sessions (breathing, light exercise)",
            "Keep light exposure and meal timing on a consistent schedule",
        ],
        Subsystem::Bone => &[
            "Maintain daily resistive exercise on the advanced resistive device",
            "Confirm calcium and vitamin D intake targets",
            "Review bone density countermeasures with the medical team",
        ],
    }
}
