//! Categorical mission and health-history inputs.

use serde::{Deserialize, Serialize};

/// Ambient radiation exposure level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiationLevel {
    Low,
    #[serde(alias = "medium")]
    Moderate,
    High,
}

impl RadiationLevel {
    pub const ALL: [RadiationLevel; 3] =
        [RadiationLevel::Low, RadiationLevel::Moderate, RadiationLevel::High];
}

/// Self-reported history of menstrual cycle irregularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleIrregularity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

/// Pre-flight bone density concerns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoneDensityConcern {
    #[default]
    None,
    Some,
    High,
}

/// Diagnosed sleep disorders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepDisorder {
    #[default]
    None,
    Insomnia,
    Circadian,
    Other,
}

/// Age band of the crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "under_30")]
    Under30,
    #[serde(rename = "30_39")]
    From30To39,
    #[serde(rename = "40_49")]
    From40To49,
    #[serde(rename = "50_plus")]
    Over50,
}
