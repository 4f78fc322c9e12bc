//! Mapping of physiological projections onto the common 0-1 risk scale

use serde::{Deserialize, Serialize};

use super::error::{non_negative, positive, ValidationError};
use crate::domain::foundation::Subsystem;

/// Per-subsystem scale used to normalize projections into [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskNormalization {
    /// Cortisol load at which the cortisol score saturates
    pub cortisol_max: f64,
    /// Cycle variability (days) at which the cycle score saturates
    pub cycle_cap_days: f64,
    /// Bone loss (%/month) mapped to a score of zero
    pub bone_floor_pct: f64,
    /// Bone loss (%/month) at which the bone score saturates
    pub bone_cap_pct: f64,
}

impl RiskNormalization {
    /// Normalize a projection value to [0, 1]. Monotonic non-decreasing.
    pub fn normalize(&self, subsystem: Subsystem, value: f64) -> f64 {
        let (floor, span) = self.floor_and_span(subsystem);
        ((value - floor) / span).clamp(0.0, 1.0)
    }

    /// Width of the projection range covering the whole risk scale.
    pub fn span(&self, subsystem: Subsystem) -> f64 {
        self.floor_and_span(subsystem).1
    }

    fn floor_and_span(&self, subsystem: Subsystem) -> (f64, f64) {
        match subsystem {
            Subsystem::Cortisol => (0.0, self.cortisol_max),
            Subsystem::Cycle => (0.0, self.cycle_cap_days),
            Subsystem::Bone => (self.bone_floor_pct, self.bone_cap_pct - self.bone_floor_pct),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("normalization.cortisol_max", self.cortisol_max)?;
        positive("normalization.cycle_cap_days", self.cycle_cap_days)?;
        non_negative("normalization.bone_floor_pct", self.bone_floor_pct)?;
        non_negative("normalization.bone_cap_pct", self.bone_cap_pct)?;
        if self.bone_cap_pct <= self.bone_floor_pct {
            return Err(ValidationError::EmptyNormalizationSpan {
                key: "normalization.bone_cap_pct",
            });
        }
        Ok(())
    }
}

impl Default for RiskNormalization {
    fn default() -> Self {
        Self {
            cortisol_max: 100.0,
            cycle_cap_days: 10.0,
            bone_floor_pct: 0.2,
            bone_cap_pct: 2.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cortisol_is_divided_by_scale_max() {
        let n = RiskNormalization::default();
        assert!((n.normalize(Subsystem::Cortisol, 34.8) - 0.348).abs() < 1e-12);
    }

    #[test]
    fn cycle_is_capped_at_ten_days() {
        let n = RiskNormalization::default();
        assert!((n.normalize(Subsystem::Cycle, 6.81) - 0.681).abs() < 1e-12);
        assert_eq!(n.normalize(Subsystem::Cycle, 14.0), 1.0);
    }

    #[test]
    fn bone_is_normalized_within_floor_and_cap() {
        let n = RiskNormalization::default();
        assert!((n.normalize(Subsystem::Bone, 1.95) - 0.875).abs() < 1e-12);
        assert_eq!(n.normalize(Subsystem::Bone, 0.1), 0.0);
        assert_eq!(n.normalize(Subsystem::Bone, 3.0), 1.0);
    }

    #[test]
    fn span_reports_scale_width() {
        let n = RiskNormalization::default();
        assert_eq!(n.span(Subsystem::Cortisol), 100.0);
        assert_eq!(n.span(Subsystem::Cycle), 10.0);
        assert!((n.span(Subsystem::Bone) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bone_cap_must_exceed_floor() {
        let n = RiskNormalization {
            bone_floor_pct: 1.0,
            bone_cap_pct: 1.0,
            ..Default::default()
        };
        assert_eq!(
            n.validate(),
            Err(ValidationError::EmptyNormalizationSpan {
                key: "normalization.bone_cap_pct"
            })
        );
    }

    #[test]
    fn zero_cortisol_scale_is_rejected() {
        let n = RiskNormalization {
            cortisol_max: 0.0,
            ..Default::default()
        };
        assert!(n.validate().is_err());
    }
}
