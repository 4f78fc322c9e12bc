//! Constants store error types

use thiserror::Error;

/// Errors that can occur while loading the constants table
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Constants loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Constants validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised when a constant lies outside its documented domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Constant '{key}' must be a finite number")]
    NotFinite { key: &'static str },

    #[error("Constant '{key}' must not be negative, got {value}")]
    Negative { key: &'static str, value: f64 },

    #[error("Constant '{key}' must be greater than zero, got {value}")]
    NotPositive { key: &'static str, value: f64 },

    #[error("Constant '{key}' must lie within [0, 1], got {value}")]
    OutsideUnitInterval { key: &'static str, value: f64 },

    #[error("Bucket thresholds must be strictly increasing, got [{low_high}, {moderate_high}]")]
    ThresholdsNotIncreasing { low_high: f64, moderate_high: f64 },

    #[error("Subsystem weights must sum to 1, got {sum}")]
    SubsystemWeightsSum { sum: f64 },

    #[error("Radiation encodings must not decrease from low to high")]
    RadiationEncodingNotMonotonic,

    #[error("Normalization cap '{key}' must exceed its floor")]
    EmptyNormalizationSpan { key: &'static str },

    #[error("Subsystem priority must list cortisol, cycle and bone exactly once")]
    InvalidSubsystemPriority,
}

pub(crate) fn finite(key: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { key })
    }
}

pub(crate) fn non_negative(key: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(key, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { key, value });
    }
    Ok(())
}

pub(crate) fn positive(key: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(key, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { key, value });
    }
    Ok(())
}

pub(crate) fn unit_interval(key: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(key, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutsideUnitInterval { key, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_rejects_negative_values() {
        assert_eq!(
            non_negative("weights.cortisol_radiation", -0.5),
            Err(ValidationError::Negative {
                key: "weights.cortisol_radiation",
                value: -0.5
            })
        );
        assert!(non_negative("weights.cortisol_radiation", 0.0).is_ok());
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(finite("baseline_cortisol", f64::NAN).is_err());
        assert!(finite("baseline_cortisol", f64::INFINITY).is_err());
        assert!(positive("scaling.reference_mission_days", f64::NAN).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(matches!(
            positive("normalization.cortisol_max", 0.0),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn unit_interval_accepts_bounds() {
        assert!(unit_interval("population.stress_index", 0.0).is_ok());
        assert!(unit_interval("population.stress_index", 1.0).is_ok());
        assert!(unit_interval("population.stress_index", 1.01).is_err());
    }

    #[test]
    fn validation_error_displays_key_and_value() {
        let err = ValidationError::OutsideUnitInterval {
            key: "bucket_thresholds",
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Constant 'bucket_thresholds' must lie within [0, 1], got 1.5"
        );
    }
}
