//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ConfigError;

/// Tracing subscriber settings for hosts embedding the pipeline
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Load logging settings from `IUNOIA_LOG_LEVEL` / `IUNOIA_LOG_JSON`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("IUNOIA_LOG").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Install the global subscriber described by this config
    pub fn init(&self) {
        init_tracing(&self.level, self.json);
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,iunoia_core=debug".to_string()
}

/// Install a global fmt subscriber filtered by `filter`.
///
/// Falls back to `info` on an unparsable directive. Later calls are no-ops
/// when a subscriber is already installed.
pub fn init_tracing(filter: &str, json: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
