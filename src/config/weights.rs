//! Equation coefficients and subsystem weights

use serde::{Deserialize, Serialize};

use super::error::{non_negative, ValidationError};
use crate::domain::foundation::Subsystem;

/// Tolerance used when checking that subsystem weights sum to one.
pub const SUBSYSTEM_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Per-factor coefficients of the physiology equations.
///
/// These are the `weight_*` tunables. Every coefficient is required and must be
/// non-negative so that each equation stays monotonic in its stress factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Cortisol load points per unit of duration-scaled radiation dose
    pub cortisol_radiation: f64,
    /// Cortisol load points per unit of duration-scaled isolation
    pub cortisol_isolation: f64,
    /// Cortisol load points per unit of the stress-sleep composite
    pub cortisol_stress_sleep: f64,

    /// Cycle variability days per unit of the stress-sleep composite
    pub cycle_stress_sleep: f64,
    pub cycle_isolation: f64,
    pub cycle_radiation: f64,
    /// Days added at a `severe` irregularity history
    pub cycle_irregularity_history: f64,
    /// Days added when a prior hormonal condition is reported
    pub cycle_hormonal_condition: f64,
    /// Days per unit of relative deviation from the population cycle length
    pub cycle_baseline_deviation: f64,

    /// Bone loss %/month at full microgravity exposure
    pub bone_microgravity: f64,
    /// Bone loss %/month per unit of radiation dose under microgravity
    pub bone_radiation: f64,
    pub bone_sleep: f64,
    pub bone_stress: f64,
    pub bone_density_concerns: f64,
    /// Bone loss %/month per unit of relative BMD below the population mean
    pub bone_bmd_offset: f64,
}

impl FactorWeights {
    fn entries(&self) -> [(&'static str, f64); 15] {
        [
            ("weights.cortisol_radiation", self.cortisol_radiation),
            ("weights.cortisol_isolation", self.cortisol_isolation),
            ("weights.cortisol_stress_sleep", self.cortisol_stress_sleep),
            ("weights.cycle_stress_sleep", self.cycle_stress_sleep),
            ("weights.cycle_isolation", self.cycle_isolation),
            ("weights.cycle_radiation", self.cycle_radiation),
            ("weights.cycle_irregularity_history", self.cycle_irregularity_history),
            ("weights.cycle_hormonal_condition", self.cycle_hormonal_condition),
            ("weights.cycle_baseline_deviation", self.cycle_baseline_deviation),
            ("weights.bone_microgravity", self.bone_microgravity),
            ("weights.bone_radiation", self.bone_radiation),
            ("weights.bone_sleep", self.bone_sleep),
            ("weights.bone_stress", self.bone_stress),
            ("weights.bone_density_concerns", self.bone_density_concerns),
            ("weights.bone_bmd_offset", self.bone_bmd_offset),
        ]
    }

    /// Validate that every coefficient is finite and non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.entries()
            .into_iter()
            .try_for_each(|(key, value)| non_negative(key, value))
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            cortisol_radiation: 8.0,
            cortisol_isolation: 12.0,
            cortisol_stress_sleep: 24.0,
            cycle_stress_sleep: 8.0,
            cycle_isolation: 2.5,
            cycle_radiation: 1.5,
            cycle_irregularity_history: 3.0,
            cycle_hormonal_condition: 1.5,
            cycle_baseline_deviation: 4.0,
            bone_microgravity: 1.2,
            bone_radiation: 0.5,
            bone_sleep: 0.25,
            bone_stress: 0.3,
            bone_density_concerns: 0.3,
            bone_bmd_offset: 1.5,
        }
    }
}

/// Multiplicative sensitivity of cortisol load to individual history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityWeights {
    /// Fractional increase when a prior hormonal condition is reported
    pub hormonal_condition: f64,
    /// Fractional increase at a fully weighted sleep disorder
    pub sleep_disorder: f64,
}

impl SensitivityWeights {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("sensitivity.hormonal_condition", self.hormonal_condition)?;
        non_negative("sensitivity.sleep_disorder", self.sleep_disorder)?;
        Ok(())
    }
}

impl Default for SensitivityWeights {
    fn default() -> Self {
        Self {
            hormonal_condition: 0.12,
            sleep_disorder: 0.08,
        }
    }
}

/// Weights combining subsystem scores into the aggregate risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemWeights {
    pub cortisol: f64,
    pub cycle: f64,
    pub bone: f64,
}

impl SubsystemWeights {
    /// Weight applied to a subsystem's score
    pub fn weight_for(&self, subsystem: Subsystem) -> f64 {
        match subsystem {
            Subsystem::Cortisol => self.cortisol,
            Subsystem::Cycle => self.cycle,
            Subsystem::Bone => self.bone,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cortisol + self.cycle + self.bone
    }

    /// Validate weights are non-negative and sum to one
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("subsystem_weights.cortisol", self.cortisol)?;
        non_negative("subsystem_weights.cycle", self.cycle)?;
        non_negative("subsystem_weights.bone", self.bone)?;

        let sum = self.sum();
        if (sum - 1.0).abs() > SUBSYSTEM_WEIGHT_TOLERANCE {
            return Err(ValidationError::SubsystemWeightsSum { sum });
        }
        Ok(())
    }
}

impl Default for SubsystemWeights {
    fn default() -> Self {
        Self {
            cortisol: 0.45,
            cycle: 0.30,
            bone: 0.25,
        }
    }
}
