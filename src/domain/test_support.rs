//! Shared fixtures for unit tests.

use crate::config::ConstantsTable;
use crate::domain::features::{build_features, FeatureVector};
use crate::domain::mission::{HealthHistory, MissionConditions, MissionInput, RadiationLevel};
use crate::domain::physiology::{simulate, PhysiologyProjection};

/// Moderate radiation, 180 days, isolation 0.6, stress 0.5, sleep disruption 0.4,
/// population-average cycle and bone density.
pub fn worked_input() -> MissionInput {
    MissionInput {
        mission: MissionConditions {
            radiation_level: Some(RadiationLevel::Moderate),
            microgravity_duration_days: Some(180.0),
            isolation_index: Some(0.6),
            stress_index: Some(0.5),
            sleep_disruption_index: Some(0.4),
            sleep_hours_last_72h: None,
        },
        history: HealthHistory {
            baseline_cycle_days: Some(28.0),
            baseline_bmd: Some(1.0),
            ..Default::default()
        },
    }
}

pub fn worked_features() -> FeatureVector {
    build_features(&worked_input(), &ConstantsTable::default()).unwrap()
}

pub fn worked_projection() -> PhysiologyProjection {
    simulate(&worked_features(), &ConstantsTable::default())
}
