//! The constants table and its loaders

use std::fmt;
use std::path::Path;

use config::builder::{ConfigBuilder, DefaultState};
use config::FileFormat;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::encodings::CategoricalEncodings;
use super::error::{non_negative, ConfigError, ValidationError};
use super::explanation::ExplanationSettings;
use super::normalization::RiskNormalization;
use super::scaling::{FeatureScaling, PopulationDefaults};
use super::thresholds::BucketThresholds;
use super::weights::{FactorWeights, SensitivityWeights, SubsystemWeights};

/// Immutable table of tunables shared read-only by every pipeline stage.
///
/// The baselines, `weights`, `bucket_thresholds` and `subsystem_weights` are
/// required. The remaining sections fall back to documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantsTable {
    /// Cortisol load with no environmental stress
    pub baseline_cortisol: f64,
    /// Cycle variability (days) with no environmental stress
    pub baseline_cycle_days: f64,
    /// Bone loss (%/month) with no environmental stress
    pub baseline_bone_loss: f64,

    pub weights: FactorWeights,
    pub bucket_thresholds: BucketThresholds,
    pub subsystem_weights: SubsystemWeights,

    #[serde(default)]
    pub sensitivity: SensitivityWeights,
    #[serde(default)]
    pub normalization: RiskNormalization,
    #[serde(default)]
    pub scaling: FeatureScaling,
    #[serde(default)]
    pub population: PopulationDefaults,
    #[serde(default)]
    pub encodings: CategoricalEncodings,
    #[serde(default)]
    pub explanation: ExplanationSettings,
}

impl ConstantsTable {
    /// Load constants from an optional file, then apply environment overrides.
    ///
    /// Without a file the built-in defaults are the base layer.
    ///
    /// # Environment Variable Format
    ///
    /// - `IUNOIA__BASELINE_CORTISOL=14` -> `baseline_cortisol = 14`
    /// - `IUNOIA__WEIGHTS__BONE_MICROGRAVITY=1.1` -> `weights.bone_microgravity = 1.1`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required key is missing, a value cannot be
    /// parsed, or the merged table fails validation.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let builder = match path {
            Some(path) => config::Config::builder().add_source(config::File::from(path)),
            None => config::Config::builder()
                .add_source(config::Config::try_from(&ConstantsTable::default())?),
        };

        let table = deserialize(builder.add_source(
            config::Environment::with_prefix("IUNOIA")
                .separator("__")
                .try_parsing(true),
        ))?;
        table.validate()?;

        info!(
            file = ?path,
            baseline_cortisol = table.baseline_cortisol,
            "Loaded constants table with environment overrides"
        );
        Ok(table)
    }

    /// Validate every value against its documented domain
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("baseline_cortisol", self.baseline_cortisol)?;
        non_negative("baseline_cycle_days", self.baseline_cycle_days)?;
        non_negative("baseline_bone_loss", self.baseline_bone_loss)?;
        self.weights.validate()?;
        self.bucket_thresholds.validate()?;
        self.subsystem_weights.validate()?;
        self.sensitivity.validate()?;
        self.normalization.validate()?;
        self.scaling.validate()?;
        self.population.validate()?;
        self.encodings.validate()?;
        self.explanation.validate()?;
        Ok(())
    }
}

impl Default for ConstantsTable {
    /// Built-in calibration, identical to `data/constants.json`
    fn default() -> Self {
        Self {
            baseline_cortisol: 12.0,
            baseline_cycle_days: 0.81,
            baseline_bone_loss: 0.2,
            weights: FactorWeights::default(),
            bucket_thresholds: BucketThresholds::default(),
            subsystem_weights: SubsystemWeights::default(),
            sensitivity: SensitivityWeights::default(),
            normalization: RiskNormalization::default(),
            scaling: FeatureScaling::default(),
            population: PopulationDefaults::default(),
            encodings: CategoricalEncodings::default(),
            explanation: ExplanationSettings::default(),
        }
    }
}

/// Where a constants table comes from
#[derive(Debug, Clone, Copy)]
pub enum ConstantsSource<'a> {
    /// File on disk; format inferred from the extension (json, toml, yaml)
    File(&'a Path),
    Json(&'a str),
    Toml(&'a str),
    /// In-code calibration
    Builtin,
}

impl fmt::Display for ConstantsSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantsSource::File(path) => write!(f, "file:{}", path.display()),
            ConstantsSource::Json(_) => write!(f, "inline-json"),
            ConstantsSource::Toml(_) => write!(f, "inline-toml"),
            ConstantsSource::Builtin => write!(f, "builtin"),
        }
    }
}

/// Load and validate a constants table.
///
/// # Errors
///
/// - `ConfigError::Load` if the source cannot be read or a required key is
///   missing or mistyped
/// - `ConfigError::Validation` if a value is outside its documented domain,
///   including subsystem weights that do not sum to one
pub fn load_constants(source: ConstantsSource<'_>) -> Result<ConstantsTable, ConfigError> {
    let table = match source {
        ConstantsSource::Builtin => ConstantsTable::default(),
        ConstantsSource::File(path) => {
            deserialize(config::Config::builder().add_source(config::File::from(path)))?
        }
        ConstantsSource::Json(raw) => deserialize(
            config::Config::builder().add_source(config::File::from_str(raw, FileFormat::Json)),
        )?,
        ConstantsSource::Toml(raw) => deserialize(
            config::Config::builder().add_source(config::File::from_str(raw, FileFormat::Toml)),
        )?,
    };
    table.validate()?;

    info!(source = %source, "Loaded constants table");
    Ok(table)
}

fn deserialize(builder: ConfigBuilder<DefaultState>) -> Result<ConstantsTable, ConfigError> {
    Ok(builder.build()?.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const MINIMAL_JSON: &str = r#"{
        "baseline_cortisol": 12.0,
        "baseline_cycle_days": 0.81,
        "baseline_bone_loss": 0.2,
        "weights": {
            "cortisol_radiation": 8.0,
            "cortisol_isolation": 12.0,
            "cortisol_stress_sleep": 24.0,
            "cycle_stress_sleep": 8.0,
            "cycle_isolation": 2.5,
            "cycle_radiation": 1.5,
            "cycle_irregularity_history": 3.0,
            "cycle_hormonal_condition": 1.5,
            "cycle_baseline_deviation": 4.0,
            "bone_microgravity": 1.2,
            "bone_radiation": 0.5,
            "bone_sleep": 0.25,
            "bone_stress": 0.3,
            "bone_density_concerns": 0.3,
            "bone_bmd_offset": 1.5
        },
        "bucket_thresholds": [0.35, 0.70],
        "subsystem_weights": { "cortisol": 0.45, "cycle": 0.30, "bone": 0.25 }
    }"#;

    #[test]
    fn test_builtin_constants_are_valid() {
        assert!(ConstantsTable::default().validate().is_ok());
        assert!(load_constants(ConstantsSource::Builtin).is_ok());
    }

    #[test]
    fn test_minimal_json_fills_optional_sections_with_defaults() {
        let table = load_constants(ConstantsSource::Json(MINIMAL_JSON)).unwrap();
        assert_eq!(table, ConstantsTable::default());
    }

    #[test]
    fn test_missing_required_key_fails_to_load() {
        let json = MINIMAL_JSON.replace("\"baseline_cortisol\": 12.0,", "");
        let result = load_constants(ConstantsSource::Json(&json));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_missing_weight_fails_to_load() {
        let json = MINIMAL_JSON.replace("\"bone_stress\": 0.3,", "");
        let result = load_constants(ConstantsSource::Json(&json));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_negative_weight_fails_validation() {
        let json = MINIMAL_JSON.replace("\"cycle_isolation\": 2.5", "\"cycle_isolation\": -2.5");
        let result = load_constants(ConstantsSource::Json(&json));
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::Negative {
                key: "weights.cycle_isolation",
                ..
            }))
        ));
    }

    #[test]
    fn test_subsystem_weights_not_summing_to_one_fail_at_load() {
        let json = MINIMAL_JSON.replace("\"bone\": 0.25", "\"bone\": 0.35");
        let result = load_constants(ConstantsSource::Json(&json));
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::SubsystemWeightsSum { .. }))
        ));
    }

    #[test]
    fn test_threshold_out_of_range_fails_validation() {
        let json = MINIMAL_JSON.replace("[0.35, 0.70]", "[0.35, 1.70]");
        let result = load_constants(ConstantsSource::Json(&json));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_toml_source_loads() {
        let toml = r#"
            baseline_cortisol = 10.0
            baseline_cycle_days = 1.0
            baseline_bone_loss = 0.3
            bucket_thresholds = [0.3, 0.6]

            [weights]
            cortisol_radiation = 8.0
            cortisol_isolation = 12.0
            cortisol_stress_sleep = 24.0
            cycle_stress_sleep = 8.0
            cycle_isolation = 2.5
            cycle_radiation = 1.5
            cycle_irregularity_history = 3.0
            cycle_hormonal_condition = 1.5
            cycle_baseline_deviation = 4.0
            bone_microgravity = 1.2
            bone_radiation = 0.5
            bone_sleep = 0.25
            bone_stress = 0.3
            bone_density_concerns = 0.3
            bone_bmd_offset = 1.5

            [subsystem_weights]
            cortisol = 0.4
            cycle = 0.4
            bone = 0.2

            [explanation]
            max_drivers_per_subsystem = 1
        "#;
        let table = load_constants(ConstantsSource::Toml(toml)).unwrap();
        assert_eq!(table.baseline_cortisol, 10.0);
        assert_eq!(table.bucket_thresholds, BucketThresholds::new(0.3, 0.6));
        assert_eq!(table.explanation.max_drivers_per_subsystem, 1);
        assert_eq!(table.explanation.min_contribution, 0.05);
    }

    #[test]
    fn test_file_source_infers_format_from_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(MINIMAL_JSON.as_bytes()).unwrap();

        let table = load_constants(ConstantsSource::File(file.path())).unwrap();
        assert_eq!(table.baseline_bone_loss, 0.2);
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let result = load_constants(ConstantsSource::File(Path::new("/nonexistent/constants.json")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_environment_overrides_builtin_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IUNOIA__BASELINE_CORTISOL", "14.5");
        env::set_var("IUNOIA__WEIGHTS__BONE_MICROGRAVITY", "1.1");
        let result = ConstantsTable::load_with_env(None);
        env::remove_var("IUNOIA__BASELINE_CORTISOL");
        env::remove_var("IUNOIA__WEIGHTS__BONE_MICROGRAVITY");

        let table = result.unwrap();
        assert_eq!(table.baseline_cortisol, 14.5);
        assert_eq!(table.weights.bone_microgravity, 1.1);
        assert_eq!(table.weights.bone_stress, 0.3);
    }

    #[test]
    fn test_environment_override_is_still_validated() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IUNOIA__SUBSYSTEM_WEIGHTS__CORTISOL", "0.9");
        let result = ConstantsTable::load_with_env(None);
        env::remove_var("IUNOIA__SUBSYSTEM_WEIGHTS__CORTISOL");

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConstantsSource::Builtin.to_string(), "builtin");
        assert_eq!(ConstantsSource::Json("{}").to_string(), "inline-json");
    }
}
