//! Explanation generator settings

use serde::{Deserialize, Serialize};

use super::error::{unit_interval, ValidationError};
use crate::domain::foundation::Subsystem;

/// Controls which contributors become driver statements and how ties break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationSettings {
    /// Smallest contribution (on the 0-1 risk scale) worth a statement
    #[serde(default = "default_min_contribution")]
    pub min_contribution: f64,

    /// Upper bound on statements per flagged subsystem
    #[serde(default = "default_max_drivers")]
    pub max_drivers_per_subsystem: usize,

    /// Tie-break order, highest priority first
    #[serde(default = "default_priority")]
    pub subsystem_priority: Vec<Subsystem>,
}

impl ExplanationSettings {
    /// Position of a subsystem in the priority order (0 = highest)
    pub fn priority_rank(&self, subsystem: Subsystem) -> usize {
        self.subsystem_priority
            .iter()
            .position(|s| *s == subsystem)
            .unwrap_or(Subsystem::ALL.len())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("explanation.min_contribution", self.min_contribution)?;
        if self.max_drivers_per_subsystem == 0 {
            return Err(ValidationError::NotPositive {
                key: "explanation.max_drivers_per_subsystem",
                value: 0.0,
            });
        }

        let is_permutation = self.subsystem_priority.len() == Subsystem::ALL.len()
            && Subsystem::ALL
                .iter()
                .all(|s| self.subsystem_priority.contains(s));
        if !is_permutation {
            return Err(ValidationError::InvalidSubsystemPriority);
        }
        Ok(())
    }
}

impl Default for ExplanationSettings {
    fn default() -> Self {
        Self {
            min_contribution: default_min_contribution(),
            max_drivers_per_subsystem: default_max_drivers(),
            subsystem_priority: default_priority(),
        }
    }
}

fn default_min_contribution() -> f64 {
    0.05
}

fn default_max_drivers() -> usize {
    3
}

fn default_priority() -> Vec<Subsystem> {
    Subsystem::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_priority_is_cortisol_cycle_bone() {
        let settings = ExplanationSettings::default();
        assert_eq!(settings.priority_rank(Subsystem::Cortisol), 0);
        assert_eq!(settings.priority_rank(Subsystem::Cycle), 1);
        assert_eq!(settings.priority_rank(Subsystem::Bone), 2);
    }

    #[test]
    fn configured_priority_overrides_default() {
        let json = r#"{ "subsystem_priority": ["bone", "cortisol", "cycle"] }"#;
        let settings: ExplanationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.priority_rank(Subsystem::Bone), 0);
        assert_eq!(settings.min_contribution, 0.05);
        assert_eq!(settings.max_drivers_per_subsystem, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn duplicate_priority_entries_are_rejected() {
        let settings = ExplanationSettings {
            subsystem_priority: vec![Subsystem::Bone, Subsystem::Bone, Subsystem::Cycle],
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::InvalidSubsystemPriority)
        );
    }

    #[test]
    fn short_priority_list_is_rejected() {
        let settings = ExplanationSettings {
            subsystem_priority: vec![Subsystem::Cortisol],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_driver_cap_is_rejected() {
        let settings = ExplanationSettings {
            max_drivers_per_subsystem: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::NotPositive {
                key: "explanation.max_drivers_per_subsystem",
                value: 0.0
            })
        );
    }

    #[test]
    fn min_contribution_above_one_is_rejected() {
        let settings = ExplanationSettings {
            min_contribution: 1.2,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ValidationError::OutsideUnitInterval {
                key: "explanation.min_contribution",
                value: 1.2
            })
        );

        let negative = ExplanationSettings {
            min_contribution: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }
}
