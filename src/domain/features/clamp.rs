//! Declared input domains and the clamp audit trail.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::InputValidationError;

/// Record of an out-of-domain input corrected to its nearest bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampEvent {
    pub field: String,
    pub original: f64,
    pub clamped: f64,
}

/// Closed interval a raw numeric field must fall within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDomain {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldDomain {
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Clamp `value` into the domain, recording an audit event if it moved.
    ///
    /// # Errors
    ///
    /// NaN and infinities cannot be clamped meaningfully and are rejected.
    pub fn resolve(
        &self,
        value: f64,
        audit: &mut Vec<ClampEvent>,
    ) -> Result<f64, InputValidationError> {
        if !value.is_finite() {
            return Err(InputValidationError::non_finite(self.field));
        }

        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            warn!(
                field = self.field,
                original = value,
                clamped,
                "Clamped out-of-domain input"
            );
            audit.push(ClampEvent {
                field: self.field.to_string(),
                original: value,
                clamped,
            });
        }
        Ok(clamped)
    }

    /// Resolve an optional field, falling back to `default` when absent.
    pub fn resolve_or(
        &self,
        value: Option<f64>,
        default: f64,
        audit: &mut Vec<ClampEvent>,
    ) -> Result<f64, InputValidationError> {
        match value {
            Some(value) => self.resolve(value, audit),
            None => Ok(default),
        }
    }
}

pub const MICROGRAVITY_DURATION_DAYS: FieldDomain =
    FieldDomain::new("mission.microgravity_duration_days", 0.0, 1100.0);
pub const ISOLATION_INDEX: FieldDomain = FieldDomain::new("mission.isolation_index", 0.0, 1.0);
pub const STRESS_INDEX: FieldDomain = FieldDomain::new("mission.stress_index", 0.0, 1.0);
pub const SLEEP_DISRUPTION_INDEX: FieldDomain =
    FieldDomain::new("mission.sleep_disruption_index", 0.0, 1.0);
pub const SLEEP_HOURS_LAST_72H: FieldDomain =
    FieldDomain::new("mission.sleep_hours_last_72h", 0.0, 72.0);
pub const BASELINE_CYCLE_DAYS: FieldDomain =
    FieldDomain::new("history.baseline_cycle_days", 15.0, 60.0);
pub const BASELINE_BMD: FieldDomain = FieldDomain::new("history.baseline_bmd", 0.4, 1.8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_domain_value_passes_without_audit() {
        let mut audit = Vec::new();
        assert_eq!(STRESS_INDEX.resolve(0.4, &mut audit), Ok(0.4));
        assert!(audit.is_empty());
    }

    #[test]
    fn out_of_domain_value_is_clamped_and_audited() {
        let mut audit = Vec::new();
        assert_eq!(STRESS_INDEX.resolve(1.7, &mut audit), Ok(1.0));
        assert_eq!(
            audit,
            vec![ClampEvent {
                field: "mission.stress_index".to_string(),
                original: 1.7,
                clamped: 1.0,
            }]
        );
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let mut audit = Vec::new();
        assert_eq!(MICROGRAVITY_DURATION_DAYS.resolve(-3.0, &mut audit), Ok(0.0));
        assert_eq!(audit.len(), 1);
    }

    #[test]
    fn nan_is_rejected() {
        let mut audit = Vec::new();
        assert_eq!(
            ISOLATION_INDEX.resolve(f64::NAN, &mut audit),
            Err(InputValidationError::NonFinite {
                field: "mission.isolation_index"
            })
        );
    }

    #[test]
    fn absent_value_uses_default_without_audit() {
        let mut audit = Vec::new();
        assert_eq!(BASELINE_BMD.resolve_or(None, 1.0, &mut audit), Ok(1.0));
        assert!(audit.is_empty());
    }
}
