//! Constants store and runtime configuration
//!
//! This module loads the table of tunable numeric parameters (baselines,
//! equation weights, bucket thresholds, subsystem weights) used by every
//! pipeline stage. Tables are loaded with the `config` crate from JSON, TOML
//! or YAML, validated once, and then shared read-only.
//!
//! # Example
//!
//! ```no_run
//! use iunoia_core::config::{load_constants, ConstantsSource};
//! use std::path::Path;
//!
//! let constants = load_constants(ConstantsSource::File(Path::new("data/constants.json")))
//!     .expect("Invalid constants");
//!
//! println!("Cortisol baseline: {}", constants.baseline_cortisol);
//! ```

mod constants;
mod encodings;
mod error;
mod explanation;
mod logging;
mod normalization;
mod scaling;
mod thresholds;
mod weights;

pub use constants::{load_constants, ConstantsSource, ConstantsTable};
pub use encodings::{
    AgeBandMultipliers, BoneConcernEncoding, CategoricalEncodings, CycleIrregularityEncoding,
    RadiationEncoding, SleepDisorderEncoding,
};
pub use error::{ConfigError, ValidationError};
pub use explanation::ExplanationSettings;
pub use logging::{init_tracing, LoggingConfig};
pub use normalization::RiskNormalization;
pub use scaling::{FeatureScaling, PopulationDefaults};
pub use thresholds::BucketThresholds;
pub use weights::{FactorWeights, SensitivityWeights, SubsystemWeights, SUBSYSTEM_WEIGHT_TOLERANCE};
