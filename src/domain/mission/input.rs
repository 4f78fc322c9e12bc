//! Raw mission input record.

use serde::{Deserialize, Serialize};

use super::levels::{AgeBand, BoneDensityConcern, CycleIrregularity, RadiationLevel, SleepDisorder};
use crate::domain::foundation::InputValidationError;

/// One inference request: mission conditions plus individual health history.
///
/// Fields are optional at the type level so that the feature builder, not the
/// decoder, decides between a documented default and a `MissingField` error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionInput {
    pub mission: MissionConditions,
    #[serde(default)]
    pub history: HealthHistory,
}

impl MissionInput {
    /// Decodes a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `InputValidationError::Malformed` for wrong types or unknown
    /// categorical values.
    pub fn from_json(raw: &str) -> Result<Self, InputValidationError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Environmental conditions of the mission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionConditions {
    /// Required.
    #[serde(default)]
    pub radiation_level: Option<RadiationLevel>,
    /// Required. Days spent in microgravity.
    #[serde(default)]
    pub microgravity_duration_days: Option<f64>,
    /// 0-1 isolation / confinement intensity
    #[serde(default)]
    pub isolation_index: Option<f64>,
    /// 0-1 workload / psychological stress
    #[serde(default)]
    pub stress_index: Option<f64>,
    /// 0-1 sleep disruption; takes precedence over `sleep_hours_last_72h`
    #[serde(default)]
    pub sleep_disruption_index: Option<f64>,
    #[serde(default)]
    pub sleep_hours_last_72h: Option<f64>,
}

/// Individual health history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthHistory {
    #[serde(default)]
    pub baseline_cycle_days: Option<f64>,
    /// Baseline bone mineral density in g/cm²
    #[serde(default)]
    pub baseline_bmd: Option<f64>,
    #[serde(default)]
    pub age_band: Option<AgeBand>,
    /// PCOS, endometriosis or similar
    #[serde(default)]
    pub prior_hormonal_conditions: Option<bool>,
    #[serde(default)]
    pub cycle_irregularity_history: Option<CycleIrregularity>,
    #[serde(default)]
    pub bone_density_concerns: Option<BoneDensityConcern>,
    #[serde(default)]
    pub sleep_disorders: Option<SleepDisorder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_nested_record() {
        let input = MissionInput::from_json(
            r#"{
                "mission": {
                    "radiation_level": "moderate",
                    "microgravity_duration_days": 180,
                    "isolation_index": 0.6,
                    "stress_index": 0.5,
                    "sleep_disruption_index": 0.4
                },
                "history": {
                    "baseline_cycle_days": 28,
                    "baseline_bmd": 1.0,
                    "age_band": "30_39",
                    "sleep_disorders": "circadian"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(input.mission.radiation_level, Some(RadiationLevel::Moderate));
        assert_eq!(input.mission.microgravity_duration_days, Some(180.0));
        assert_eq!(input.history.baseline_cycle_days, Some(28.0));
        assert_eq!(input.history.age_band, Some(AgeBand::From30To39));
        assert_eq!(input.history.sleep_disorders, Some(SleepDisorder::Circadian));
        assert_eq!(input.history.prior_hormonal_conditions, None);
    }

    #[test]
    fn history_block_is_optional() {
        let input = MissionInput::from_json(r#"{ "mission": { "radiation_level": "low" } }"#).unwrap();
        assert_eq!(input.history, HealthHistory::default());
    }

    #[test]
    fn wrong_type_is_malformed() {
        let result = MissionInput::from_json(
            r#"{ "mission": { "radiation_level": "low", "stress_index": "very" } }"#,
        );
        assert!(matches!(result, Err(InputValidationError::Malformed(_))));
    }

    #[test]
    fn unknown_category_is_malformed() {
        let result = MissionInput::from_json(
            r#"{ "mission": { "radiation_level": "low" }, "history": { "bone_density_concerns": "extreme" } }"#,
        );
        assert!(matches!(result, Err(InputValidationError::Malformed(_))));
    }

    #[test]
    fn missing_mission_block_is_malformed() {
        let result = MissionInput::from_json(r#"{ "history": {} }"#);
        assert!(matches!(result, Err(InputValidationError::Malformed(_))));
    }
}
