//! Feature Builder - raw mission input to engineered features.

use tracing::debug;

use super::clamp::{
    ClampEvent, BASELINE_BMD, BASELINE_CYCLE_DAYS, ISOLATION_INDEX, MICROGRAVITY_DURATION_DAYS,
    SLEEP_DISRUPTION_INDEX, SLEEP_HOURS_LAST_72H, STRESS_INDEX,
};
use super::vector::FeatureVector;
use crate::config::ConstantsTable;
use crate::domain::foundation::InputValidationError;
use crate::domain::mission::MissionInput;

/// Builds the feature vector for one inference request.
///
/// Out-of-domain numbers are clamped and recorded in `clamp_events`; absent
/// optional fields take the population defaults from `constants`. The result
/// depends only on the arguments.
///
/// # Errors
///
/// - `MissingField` if `radiation_level` or `microgravity_duration_days` is absent
/// - `NonFinite` if any numeric field is NaN or infinite
pub fn build_features(
    input: &MissionInput,
    constants: &ConstantsTable,
) -> Result<FeatureVector, InputValidationError> {
    let mission = &input.mission;
    let history = &input.history;
    let scaling = &constants.scaling;
    let population = &constants.population;
    let encodings = &constants.encodings;
    let mut audit: Vec<ClampEvent> = Vec::new();

    let radiation_level = mission
        .radiation_level
        .ok_or_else(|| InputValidationError::missing_field("mission.radiation_level"))?;
    let duration_days = mission
        .microgravity_duration_days
        .ok_or_else(|| InputValidationError::missing_field("mission.microgravity_duration_days"))
        .and_then(|days| MICROGRAVITY_DURATION_DAYS.resolve(days, &mut audit))?;

    let isolation_index =
        ISOLATION_INDEX.resolve_or(mission.isolation_index, population.isolation_index, &mut audit)?;
    let stress_index =
        STRESS_INDEX.resolve_or(mission.stress_index, population.stress_index, &mut audit)?;
    let sleep_disruption_index = resolve_sleep_disruption(input, constants, &mut audit)?;

    let baseline_cycle = BASELINE_CYCLE_DAYS.resolve_or(
        history.baseline_cycle_days,
        population.cycle_length_days,
        &mut audit,
    )?;
    let baseline_bmd = BASELINE_BMD.resolve_or(history.baseline_bmd, population.bmd, &mut audit)?;

    let duration_fraction =
        (duration_days / scaling.reference_mission_days).clamp(0.0, scaling.max_duration_fraction);
    let microgravity_exposure = (duration_days / scaling.microgravity_onset_days).clamp(0.0, 1.0);

    let radiation_factor = encodings.radiation.factor(radiation_level);
    let radiation_dose = radiation_factor * duration_fraction;
    let isolation_load = isolation_index * duration_fraction;
    let stress_sleep_composite = scaling.composite_stress_weight * stress_index
        + scaling.composite_sleep_weight * sleep_disruption_index;

    let cycle_baseline_deviation = ((baseline_cycle - population.cycle_length_days).abs()
        / population.cycle_length_days)
        .clamp(0.0, 1.0);
    let bmd_offset = ((population.bmd - baseline_bmd) / population.bmd).clamp(-1.0, 1.0);

    let features = FeatureVector {
        mission_duration_days: duration_days,
        duration_fraction,
        microgravity_exposure,
        radiation_factor,
        radiation_dose,
        isolation_index,
        isolation_load,
        stress_index,
        sleep_disruption_index,
        stress_sleep_composite,
        cycle_baseline_deviation,
        bmd_offset,
        cycle_irregularity: encodings
            .cycle_irregularity
            .factor(history.cycle_irregularity_history.unwrap_or_default()),
        bone_density_concern: encodings
            .bone_density_concerns
            .factor(history.bone_density_concerns.unwrap_or_default()),
        sleep_disorder: encodings
            .sleep_disorders
            .factor(history.sleep_disorders.unwrap_or_default()),
        hormonal_condition: if history.prior_hormonal_conditions.unwrap_or(false) {
            1.0
        } else {
            0.0
        },
        age_multiplier: encodings.age_band.multiplier(history.age_band),
        clamp_events: audit,
    };

    debug!(
        duration_days,
        radiation_dose,
        isolation_load,
        stress_sleep_composite,
        clamp_count = features.clamp_events.len(),
        "Built feature vector"
    );

    Ok(features)
}

/// Sleep disruption index, else the deficit implied by recent sleep hours,
/// else the population default.
fn resolve_sleep_disruption(
    input: &MissionInput,
    constants: &ConstantsTable,
    audit: &mut Vec<ClampEvent>,
) -> Result<f64, InputValidationError> {
    let mission = &input.mission;
    if let Some(index) = mission.sleep_disruption_index {
        return SLEEP_DISRUPTION_INDEX.resolve(index, audit);
    }

    match mission.sleep_hours_last_72h {
        Some(hours) => {
            let hours = SLEEP_HOURS_LAST_72H.resolve(hours, audit)?;
            let optimal = constants.scaling.optimal_sleep_hours_72h;
            Ok(((optimal - hours) / optimal).clamp(0.0, 1.0))
        }
        None => Ok(constants.population.sleep_disruption_index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mission::{
        AgeBand, BoneDensityConcern, HealthHistory, MissionConditions, RadiationLevel,
        SleepDisorder,
    };
    use crate::domain::test_support::worked_input;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn worked_example_features() {
        let features = build_features(&worked_input(), &ConstantsTable::default()).unwrap();

        assert!(close(features.duration_fraction, 1.0));
        assert!(close(features.microgravity_exposure, 1.0));
        assert!(close(features.radiation_dose, 0.6));
        assert!(close(features.isolation_load, 0.6));
        assert!(close(features.stress_sleep_composite, 0.45));
        assert!(close(features.cycle_baseline_deviation, 0.0));
        assert!(close(features.bmd_offset, 0.0));
        assert_eq!(features.hormonal_condition, 0.0);
        assert_eq!(features.age_multiplier, 1.0);
        assert!(!features.was_clamped());
    }

    #[test]
    fn missing_radiation_level_is_rejected() {
        let mut input = worked_input();
        input.mission.radiation_level = None;
        assert_eq!(
            build_features(&input, &ConstantsTable::default()),
            Err(InputValidationError::MissingField {
                field: "mission.radiation_level"
            })
        );
    }

    #[test]
    fn missing_duration_is_rejected() {
        let mut input = worked_input();
        input.mission.microgravity_duration_days = None;
        assert_eq!(
            build_features(&input, &ConstantsTable::default()),
            Err(InputValidationError::MissingField {
                field: "mission.microgravity_duration_days"
            })
        );
    }

    #[test]
    fn absent_optional_fields_use_population_defaults() {
        let input = MissionInput {
            mission: MissionConditions {
                radiation_level: Some(RadiationLevel::Low),
                microgravity_duration_days: Some(90.0),
                ..Default::default()
            },
            history: HealthHistory::default(),
        };
        let features = build_features(&input, &ConstantsTable::default()).unwrap();

        assert_eq!(features.isolation_index, 0.5);
        assert_eq!(features.stress_index, 0.5);
        assert_eq!(features.sleep_disruption_index, 0.3);
        assert_eq!(features.cycle_baseline_deviation, 0.0);
        assert_eq!(features.bmd_offset, 0.0);
        assert!(close(features.duration_fraction, 0.5));
    }

    #[test]
    fn out_of_range_inputs_are_clamped_and_recorded() {
        let mut input = worked_input();
        input.mission.stress_index = Some(1.8);
        input.mission.microgravity_duration_days = Some(5000.0);
        let features = build_features(&input, &ConstantsTable::default()).unwrap();

        assert_eq!(features.stress_index, 1.0);
        assert_eq!(features.mission_duration_days, 1100.0);
        assert!(close(features.duration_fraction, 1.5));
        let fields: Vec<&str> = features.clamp_events.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["mission.microgravity_duration_days", "mission.stress_index"]
        );
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut input = worked_input();
        input.mission.isolation_index = Some(f64::INFINITY);
        assert_eq!(
            build_features(&input, &ConstantsTable::default()),
            Err(InputValidationError::NonFinite {
                field: "mission.isolation_index"
            })
        );
    }

    #[test]
    fn sleep_hours_derive_disruption_when_index_absent() {
        let mut input = worked_input();
        input.mission.sleep_disruption_index = None;
        input.mission.sleep_hours_last_72h = Some(18.0);
        let features = build_features(&input, &ConstantsTable::default()).unwrap();
        assert!(close(features.sleep_disruption_index, 0.25));

        input.mission.sleep_hours_last_72h = Some(30.0);
        let features = build_features(&input, &ConstantsTable::default()).unwrap();
        assert_eq!(features.sleep_disruption_index, 0.0);
    }

    #[test]
    fn sleep_disruption_index_takes_precedence_over_hours() {
        let mut input = worked_input();
        input.mission.sleep_hours_last_72h = Some(0.0);
        let features = build_features(&input, &ConstantsTable::default()).unwrap();
        assert!(close(features.sleep_disruption_index, 0.4));
    }

    #[test]
    fn history_adjustments_are_encoded() {
        let mut input = worked_input();
        input.history = HealthHistory {
            baseline_cycle_days: Some(35.0),
            baseline_bmd: Some(0.8),
            age_band: Some(AgeBand::Over50),
            prior_hormonal_conditions: Some(true),
            cycle_irregularity_history: None,
            bone_density_concerns: Some(BoneDensityConcern::Some),
            sleep_disorders: Some(SleepDisorder::Insomnia),
        };
        let features = build_features(&input, &ConstantsTable::default()).unwrap();

        assert!(close(features.cycle_baseline_deviation, 0.25));
        assert!(close(features.bmd_offset, 0.2));
        assert_eq!(features.age_multiplier, 1.25);
        assert_eq!(features.hormonal_condition, 1.0);
        assert_eq!(features.bone_density_concern, 0.5);
        assert_eq!(features.sleep_disorder, 0.8);
        assert_eq!(features.cycle_irregularity, 0.0);
    }

    #[test]
    fn above_average_bone_density_gives_negative_offset() {
        let mut input = worked_input();
        input.history.baseline_bmd = Some(1.3);
        let features = build_features(&input, &ConstantsTable::default()).unwrap();
        assert!(close(features.bmd_offset, -0.3));
    }
}
