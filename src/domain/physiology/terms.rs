//! Closed-form physiology equations, expanded into per-feature terms.
//!
//! Each equation is written as a baseline plus a list of additive
//! contributions. Multiplicative adjustments (cortisol sensitivity, the age
//! multiplier on bone loss) are expanded into extra terms attributed to the
//! feature that drives them, so the terms always sum to the unclamped value.

use serde::{Deserialize, Serialize};

use crate::config::ConstantsTable;
use crate::domain::features::{Feature, FeatureVector};
use crate::domain::foundation::Subsystem;

/// One feature's additive share of a subsystem projection, in projection units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub subsystem: Subsystem,
    pub feature: Feature,
    pub value: f64,
}

/// Baseline and feature contributions of one subsystem's equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemTerms {
    pub subsystem: Subsystem,
    pub baseline: f64,
    pub contributions: Vec<Contribution>,
}

impl SubsystemTerms {
    fn new(subsystem: Subsystem, baseline: f64) -> Self {
        Self {
            subsystem,
            baseline,
            contributions: Vec::new(),
        }
    }

    fn push(&mut self, feature: Feature, value: f64) {
        self.contributions.push(Contribution {
            subsystem: self.subsystem,
            feature,
            value,
        });
    }

    /// Baseline plus every contribution, before range clamping.
    pub fn total(&self) -> f64 {
        self.baseline + self.contributions.iter().map(|c| c.value).sum::<f64>()
    }

    /// The projection value, clamped to the subsystem's physical range.
    pub fn projected(&self) -> f64 {
        let total = self.total();
        match self.subsystem {
            Subsystem::Cortisol => total.clamp(0.0, 100.0),
            Subsystem::Cycle | Subsystem::Bone => total.max(0.0),
        }
    }

    /// Contribution of a single feature, if it appears in this equation.
    pub fn contribution_of(&self, feature: Feature) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.feature == feature)
            .map(|c| c.value)
    }
}

/// `(baseline + w_rad·dose + w_iso·isolation + w_ss·composite)
///  × (1 + s_h·hormonal + s_sd·sleep_disorder)`
pub fn cortisol_terms(features: &FeatureVector, constants: &ConstantsTable) -> SubsystemTerms {
    let w = &constants.weights;
    let s = &constants.sensitivity;
    let mut terms = SubsystemTerms::new(Subsystem::Cortisol, constants.baseline_cortisol);

    terms.push(Feature::RadiationDose, w.cortisol_radiation * features.radiation_dose);
    terms.push(Feature::IsolationLoad, w.cortisol_isolation * features.isolation_load);
    terms.push(
        Feature::StressSleepComposite,
        w.cortisol_stress_sleep * features.stress_sleep_composite,
    );

    let raw = terms.total();
    terms.push(
        Feature::HormonalCondition,
        raw * s.hormonal_condition * features.hormonal_condition,
    );
    terms.push(Feature::SleepDisorder, raw * s.sleep_disorder * features.sleep_disorder);
    terms
}

/// Baseline variability plus environmental and history terms, in days.
pub fn cycle_terms(features: &FeatureVector, constants: &ConstantsTable) -> SubsystemTerms {
    let w = &constants.weights;
    let mut terms = SubsystemTerms::new(Subsystem::Cycle, constants.baseline_cycle_days);

    terms.push(
        Feature::StressSleepComposite,
        w.cycle_stress_sleep * features.stress_sleep_composite,
    );
    terms.push(Feature::IsolationLoad, w.cycle_isolation * features.isolation_load);
    terms.push(Feature::RadiationDose, w.cycle_radiation * features.radiation_dose);
    terms.push(
        Feature::CycleIrregularity,
        w.cycle_irregularity_history * features.cycle_irregularity,
    );
    terms.push(
        Feature::HormonalCondition,
        w.cycle_hormonal_condition * features.hormonal_condition,
    );
    terms.push(
        Feature::CycleBaselineDeviation,
        w.cycle_baseline_deviation * features.cycle_baseline_deviation,
    );
    terms
}

/// Unloading-driven bone loss, scaled by the age multiplier, in %/month.
pub fn bone_terms(features: &FeatureVector, constants: &ConstantsTable) -> SubsystemTerms {
    let w = &constants.weights;
    let mut terms = SubsystemTerms::new(Subsystem::Bone, constants.baseline_bone_loss);

    terms.push(
        Feature::MicrogravityExposure,
        w.bone_microgravity * features.microgravity_exposure,
    );
    // Radiation damage to bone only matters while the skeleton is unloaded.
    terms.push(
        Feature::RadiationDose,
        w.bone_radiation * features.radiation_dose * features.microgravity_exposure,
    );
    terms.push(Feature::SleepDisruption, w.bone_sleep * features.sleep_disruption_index);
    terms.push(Feature::Stress, w.bone_stress * features.stress_index);
    terms.push(
        Feature::BoneDensityConcern,
        w.bone_density_concerns * features.bone_density_concern,
    );
    terms.push(Feature::BaselineBoneDensity, w.bone_bmd_offset * features.bmd_offset);

    let raw = terms.total();
    terms.push(Feature::AgeBand, raw * (features.age_multiplier - 1.0));
    terms
}

/// Equation terms for any subsystem.
pub fn equation_terms(
    subsystem: Subsystem,
    features: &FeatureVector,
    constants: &ConstantsTable,
) -> SubsystemTerms {
    match subsystem {
        Subsystem::Cortisol => cortisol_terms(features, constants),
        Subsystem::Cycle => cycle_terms(features, constants),
        Subsystem::Bone => bone_terms(features, constants),
    }
}
