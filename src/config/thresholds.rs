//! Risk bucket thresholds

use serde::{Deserialize, Serialize};

use super::error::{unit_interval, ValidationError};
use crate::domain::foundation::RiskBucket;

/// Cut points splitting the [0, 1] score range into Low / Moderate / High.
///
/// Serialized as a two-element array `[low_high, moderate_high]`:
/// `[0, low_high)` is Low, `[low_high, moderate_high)` is Moderate and
/// `[moderate_high, 1]` is High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct BucketThresholds {
    pub low_high: f64,
    pub moderate_high: f64,
}

impl BucketThresholds {
    pub fn new(low_high: f64, moderate_high: f64) -> Self {
        Self {
            low_high,
            moderate_high,
        }
    }

    /// Bucket for a normalized score.
    ///
    /// This is the only threshold function; subsystem and aggregate buckets
    /// both go through it.
    pub fn bucket_for(&self, score: f64) -> RiskBucket {
        if score < self.low_high {
            RiskBucket::Low
        } else if score < self.moderate_high {
            RiskBucket::Moderate
        } else {
            RiskBucket::High
        }
    }

    /// Validate both cut points lie in [0, 1] and increase strictly
    pub fn validate(&self) -> Result<(), ValidationError> {
        unit_interval("bucket_thresholds.low_high", self.low_high)?;
        unit_interval("bucket_thresholds.moderate_high", self.moderate_high)?;
        if self.low_high >= self.moderate_high {
            return Err(ValidationError::ThresholdsNotIncreasing {
                low_high: self.low_high,
                moderate_high: self.moderate_high,
            });
        }
        Ok(())
    }
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self::new(0.35, 0.70)
    }
}

impl From<[f64; 2]> for BucketThresholds {
    fn from([low_high, moderate_high]: [f64; 2]) -> Self {
        Self::new(low_high, moderate_high)
    }
}

impl From<BucketThresholds> for [f64; 2] {
    fn from(thresholds: BucketThresholds) -> Self {
        [thresholds.low_high, thresholds.moderate_high]
    }
}
