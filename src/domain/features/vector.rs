//! Engineered feature vector.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::clamp::ClampEvent;

/// Flat, normalized features consumed by the physiology stage.
///
/// Every field is finite. Unit-interval fields are documented as `0-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Days in microgravity, within [0, 1100]
    pub mission_duration_days: f64,
    /// Duration relative to the reference mission, within [0, max_duration_fraction]
    pub duration_fraction: f64,
    /// 0-1 ramp reaching 1 after the microgravity onset period
    pub microgravity_exposure: f64,
    /// 0-1 encoded radiation level
    pub radiation_factor: f64,
    /// Radiation factor scaled by mission duration
    pub radiation_dose: f64,
    /// 0-1
    pub isolation_index: f64,
    /// Isolation index scaled by mission duration
    pub isolation_load: f64,
    /// 0-1
    pub stress_index: f64,
    /// 0-1
    pub sleep_disruption_index: f64,
    /// Weighted combination of stress and sleep disruption
    pub stress_sleep_composite: f64,
    /// 0-1 relative deviation of the baseline cycle from the population mean
    pub cycle_baseline_deviation: f64,
    /// -1..1 relative BMD below the population mean (negative = above)
    pub bmd_offset: f64,
    /// 0-1
    pub cycle_irregularity: f64,
    /// 0-1
    pub bone_density_concern: f64,
    /// 0-1
    pub sleep_disorder: f64,
    /// 0 or 1
    pub hormonal_condition: f64,
    /// Bone loss multiplier for the age band (> 0)
    pub age_multiplier: f64,

    /// Clamp corrections applied while building this vector
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clamp_events: Vec<ClampEvent>,
}

impl FeatureVector {
    /// Returns true if any raw input was clamped.
    pub fn was_clamped(&self) -> bool {
        !self.clamp_events.is_empty()
    }

    /// Feature values that explanations attribute contributions to, in
    /// `Feature` order. `AgeBand` is absent; it scales the bone equation.
    pub fn values(&self) -> [(Feature, f64); 12] {
        [
            (Feature::MicrogravityExposure, self.microgravity_exposure),
            (Feature::RadiationDose, self.radiation_dose),
            (Feature::IsolationLoad, self.isolation_load),
            (Feature::StressSleepComposite, self.stress_sleep_composite),
            (Feature::SleepDisruption, self.sleep_disruption_index),
            (Feature::Stress, self.stress_index),
            (Feature::CycleIrregularity, self.cycle_irregularity),
            (Feature::HormonalCondition, self.hormonal_condition),
            (Feature::CycleBaselineDeviation, self.cycle_baseline_deviation),
            (Feature::BoneDensityConcern, self.bone_density_concern),
            (Feature::BaselineBoneDensity, self.bmd_offset),
            (Feature::SleepDisorder, self.sleep_disorder),
        ]
    }
}

/// Contributing mission or health factor named in explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    MicrogravityExposure,
    RadiationDose,
    IsolationLoad,
    StressSleepComposite,
    SleepDisruption,
    Stress,
    CycleIrregularity,
    HormonalCondition,
    CycleBaselineDeviation,
    BoneDensityConcern,
    BaselineBoneDensity,
    SleepDisorder,
    AgeBand,
}

impl Feature {
    /// Human-readable factor name.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::MicrogravityExposure => "microgravity exposure duration",
            Feature::RadiationDose => "cumulative radiation exposure",
            Feature::IsolationLoad => "isolation duration",
            Feature::StressSleepComposite => "combined stress and sleep disruption",
            Feature::SleepDisruption => "sleep disruption",
            Feature::Stress => "workload stress",
            Feature::CycleIrregularity => "cycle irregularity history",
            Feature::HormonalCondition => "prior hormonal conditions",
            Feature::CycleBaselineDeviation => "atypical baseline cycle length",
            Feature::BoneDensityConcern => "pre-flight bone density concerns",
            Feature::BaselineBoneDensity => "baseline bone mineral density",
            Feature::SleepDisorder => "sleep disorder history",
            Feature::AgeBand => "age band",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
