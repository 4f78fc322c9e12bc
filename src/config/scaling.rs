//! Feature engineering scale factors and population-average defaults

use serde::{Deserialize, Serialize};

use super::error::{non_negative, positive, unit_interval, ValidationError};

/// Scale factors used to derive composite features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureScaling {
    /// Mission length (days) at which duration-scaled exposures reach 1.0
    pub reference_mission_days: f64,
    /// Upper bound on the duration fraction for very long missions
    pub max_duration_fraction: f64,
    /// Days of microgravity until bone unloading reaches full effect
    pub microgravity_onset_days: f64,
    /// Weight of the stress index in the stress-sleep composite
    pub composite_stress_weight: f64,
    /// Weight of the sleep disruption index in the stress-sleep composite
    pub composite_sleep_weight: f64,
    /// Sleep hours over 72h considered fully rested (8h per night)
    pub optimal_sleep_hours_72h: f64,
}

impl FeatureScaling {
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("scaling.reference_mission_days", self.reference_mission_days)?;
        positive("scaling.max_duration_fraction", self.max_duration_fraction)?;
        positive("scaling.microgravity_onset_days", self.microgravity_onset_days)?;
        non_negative("scaling.composite_stress_weight", self.composite_stress_weight)?;
        non_negative("scaling.composite_sleep_weight", self.composite_sleep_weight)?;
        positive("scaling.optimal_sleep_hours_72h", self.optimal_sleep_hours_72h)?;
        Ok(())
    }
}

impl Default for FeatureScaling {
    fn default() -> Self {
        Self {
            reference_mission_days: 180.0,
            max_duration_fraction: 1.5,
            microgravity_onset_days: 30.0,
            composite_stress_weight: 0.5,
            composite_sleep_weight: 0.5,
            optimal_sleep_hours_72h: 24.0,
        }
    }
}

/// Population-average values used when an optional input is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationDefaults {
    pub isolation_index: f64,
    pub stress_index: f64,
    pub sleep_disruption_index: f64,
    /// Average menstrual cycle length in days
    pub cycle_length_days: f64,
    /// Average bone mineral density in g/cm²
    pub bmd: f64,
}

impl PopulationDefaults {
    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("population.isolation_index", self.isolation_index)?;
        unit_interval("population.stress_index", self.stress_index)?;
        unit_interval("population.sleep_disruption_index", self.sleep_disruption_index)?;
        positive("population.cycle_length_days", self.cycle_length_days)?;
        positive("population.bmd", self.bmd)?;
        Ok(())
    }
}

impl Default for PopulationDefaults {
    fn default() -> Self {
        Self {
            isolation_index: 0.5,
            stress_index: 0.5,
            sleep_disruption_index: 0.3,
            cycle_length_days: 28.0,
            bmd: 1.0,
        }
    }
}
