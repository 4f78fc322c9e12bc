//! Physiological projections and the closed-form simulation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::terms::{bone_terms, cortisol_terms, cycle_terms};
use crate::config::ConstantsTable;
use crate::domain::features::FeatureVector;
use crate::domain::foundation::Subsystem;

/// Projected physiological state for one mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysiologyProjection {
    /// Stress-hormone burden, 0-100
    pub cortisol_load: f64,
    /// Absolute deviation of cycle length from baseline, in days (>= 0)
    pub cycle_variability_days: f64,
    /// Monthly bone mineral density loss in percent (>= 0)
    pub bone_loss_pct_per_month: f64,
}

impl PhysiologyProjection {
    /// Projection value for a subsystem.
    pub fn value(&self, subsystem: Subsystem) -> f64 {
        match subsystem {
            Subsystem::Cortisol => self.cortisol_load,
            Subsystem::Cycle => self.cycle_variability_days,
            Subsystem::Bone => self.bone_loss_pct_per_month,
        }
    }

    /// First subsystem whose value is NaN or infinite, if any.
    pub fn non_finite_subsystem(&self) -> Option<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .find(|s| !self.value(*s).is_finite())
    }

    /// First subsystem whose value lies outside its physical range, if any.
    ///
    /// Cortisol load must stay within 0-100; cycle variability and bone loss
    /// must not be negative. Non-finite values are out of range too.
    pub fn out_of_range_subsystem(&self) -> Option<Subsystem> {
        Subsystem::ALL.into_iter().find(|s| {
            let value = self.value(*s);
            match s {
                Subsystem::Cortisol => !(0.0..=100.0).contains(&value),
                Subsystem::Cycle | Subsystem::Bone => !value.is_finite() || value < 0.0,
            }
        })
    }

    /// Returns true if every value lies in its physical range.
    pub fn is_within_range(&self) -> bool {
        self.out_of_range_subsystem().is_none()
    }
}

/// Evaluates the closed-form equations for every subsystem.
///
/// Pure and continuous in every feature; each output is clamped to its
/// physical range.
pub fn simulate(features: &FeatureVector, constants: &ConstantsTable) -> PhysiologyProjection {
    let projection = PhysiologyProjection {
        cortisol_load: cortisol_terms(features, constants).projected(),
        cycle_variability_days: cycle_terms(features, constants).projected(),
        bone_loss_pct_per_month: bone_terms(features, constants).projected(),
    };

    debug!(
        cortisol_load = projection.cortisol_load,
        cycle_variability_days = projection.cycle_variability_days,
        bone_loss_pct_per_month = projection.bone_loss_pct_per_month,
        "Simulated physiology"
    );

    projection
}
