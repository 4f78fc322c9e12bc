//! Numeric encodings for categorical mission and history inputs

use serde::{Deserialize, Serialize};

use super::error::{positive, unit_interval, ValidationError};
use crate::domain::mission::{
    AgeBand, BoneDensityConcern, CycleIrregularity, RadiationLevel, SleepDisorder,
};

/// Lookup tables turning categorical inputs into 0-1 factors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalEncodings {
    pub radiation: RadiationEncoding,
    pub cycle_irregularity: CycleIrregularityEncoding,
    pub bone_density_concerns: BoneConcernEncoding,
    pub sleep_disorders: SleepDisorderEncoding,
    pub age_band: AgeBandMultipliers,
}

impl CategoricalEncodings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.radiation.validate()?;
        self.cycle_irregularity.validate()?;
        self.bone_density_concerns.validate()?;
        self.sleep_disorders.validate()?;
        self.age_band.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationEncoding {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl RadiationEncoding {
    pub fn factor(&self, level: RadiationLevel) -> f64 {
        match level {
            RadiationLevel::Low => self.low,
            RadiationLevel::Moderate => self.moderate,
            RadiationLevel::High => self.high,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("encodings.radiation.low", self.low)?;
        unit_interval("encodings.radiation.moderate", self.moderate)?;
        unit_interval("encodings.radiation.high", self.high)?;
        // More radiation must never encode as less exposure.
        if self.low > self.moderate || self.moderate > self.high {
            return Err(ValidationError::RadiationEncodingNotMonotonic);
        }
        Ok(())
    }
}

impl Default for RadiationEncoding {
    fn default() -> Self {
        Self {
            low: 0.3,
            moderate: 0.6,
            high: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleIrregularityEncoding {
    pub none: f64,
    pub mild: f64,
    pub moderate: f64,
    pub severe: f64,
}

impl CycleIrregularityEncoding {
    pub fn factor(&self, history: CycleIrregularity) -> f64 {
        match history {
            CycleIrregularity::None => self.none,
            CycleIrregularity::Mild => self.mild,
            CycleIrregularity::Moderate => self.moderate,
            CycleIrregularity::Severe => self.severe,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("encodings.cycle_irregularity.none", self.none)?;
        unit_interval("encodings.cycle_irregularity.mild", self.mild)?;
        unit_interval("encodings.cycle_irregularity.moderate", self.moderate)?;
        unit_interval("encodings.cycle_irregularity.severe", self.severe)?;
        Ok(())
    }
}

impl Default for CycleIrregularityEncoding {
    fn default() -> Self {
        Self {
            none: 0.0,
            mild: 0.33,
            moderate: 0.66,
            severe: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoneConcernEncoding {
    pub none: f64,
    pub some: f64,
    pub high: f64,
}

impl BoneConcernEncoding {
    pub fn factor(&self, concern: BoneDensityConcern) -> f64 {
        match concern {
            BoneDensityConcern::None => self.none,
            BoneDensityConcern::Some => self.some,
            BoneDensityConcern::High => self.high,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("encodings.bone_density_concerns.none", self.none)?;
        unit_interval("encodings.bone_density_concerns.some", self.some)?;
        unit_interval("encodings.bone_density_concerns.high", self.high)?;
        Ok(())
    }
}

impl Default for BoneConcernEncoding {
    fn default() -> Self {
        Self {
            none: 0.0,
            some: 0.5,
            high: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepDisorderEncoding {
    pub none: f64,
    pub insomnia: f64,
    pub circadian: f64,
    pub other: f64,
}

impl SleepDisorderEncoding {
    pub fn factor(&self, disorder: SleepDisorder) -> f64 {
        match disorder {
            SleepDisorder::None => self.none,
            SleepDisorder::Insomnia => self.insomnia,
            SleepDisorder::Circadian => self.circadian,
            SleepDisorder::Other => self.other,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("encodings.sleep_disorders.none", self.none)?;
        unit_interval("encodings.sleep_disorders.insomnia", self.insomnia)?;
        unit_interval("encodings.sleep_disorders.circadian", self.circadian)?;
        unit_interval("encodings.sleep_disorders.other", self.other)?;
        Ok(())
    }
}

impl Default for SleepDisorderEncoding {
    fn default() -> Self {
        Self {
            none: 0.0,
            insomnia: 0.8,
            circadian: 0.7,
            other: 0.5,
        }
    }
}

/// Bone loss multipliers per age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeBandMultipliers {
    pub under_30: f64,
    #[serde(rename = "30_39")]
    pub from_30_to_39: f64,
    #[serde(rename = "40_49")]
    pub from_40_to_49: f64,
    #[serde(rename = "50_plus")]
    pub over_50: f64,
    /// Used when no age band is reported
    pub unspecified: f64,
}

impl AgeBandMultipliers {
    pub fn multiplier(&self, band: Option<AgeBand>) -> f64 {
        match band {
            Some(AgeBand::Under30) => self.under_30,
            Some(AgeBand::From30To39) => self.from_30_to_39,
            Some(AgeBand::From40To49) => self.from_40_to_49,
            Some(AgeBand::Over50) => self.over_50,
            None => self.unspecified,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        positive("encodings.age_band.under_30", self.under_30)?;
        positive("encodings.age_band.30_39", self.from_30_to_39)?;
        positive("encodings.age_band.40_49", self.from_40_to_49)?;
        positive("encodings.age_band.50_plus", self.over_50)?;
        positive("encodings.age_band.unspecified", self.unspecified)?;
        Ok(())
    }
}

impl Default for AgeBandMultipliers {
    fn default() -> Self {
        Self {
            under_30: 1.0,
            from_30_to_39: 1.0,
            from_40_to_49: 1.1,
            over_50: 1.25,
            unspecified: 1.0,
        }
    }
}
