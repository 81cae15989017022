use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::error::CoreResult;
use crate::types::IsolationLevel;

const ENV_PREFIX: &str = "SKIT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub transaction: TransactionConfig,
}

/// Defaults applied to transactions opened from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionConfig {
    #[serde(default)]
    pub isolation: IsolationLevel,
    #[serde(default)]
    pub read_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` and `SKIT_`-prefixed environment
    /// variables into a `Settings`. Nested keys use `__` as separator, e.g.
    /// `SKIT_DATABASE__URL`. Environment variables take precedence over file
    /// values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::build(
            Config::builder()
                // TOML file
                .add_source(config::File::with_name("config.toml").required(false))
                // Env
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .ignore_empty(true)
                        .try_parsing(true),
                ),
        )
    }

    /// ## Summary
    /// Builds a `Settings` from an inline TOML document, with the same
    /// defaults as [`Settings::load`].
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not
    /// deserialize into `Settings`.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Self::build(Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        Ok(builder
            .set_default("database.transaction.isolation", "default")?
            .set_default("database.transaction.read_only", false)?
            .set_default("logging.level", "info")?
            .build()?
            .try_deserialize::<Self>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
