use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Fixed seed for reproducible plans; unset means a fresh random plan each run
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BROKEEATS__PLANNER__SEED, etc.)
    /// 2. Config file given by path, `BROKEEATS_CONFIG`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().as_ref())?
            .set_default("display.currency_symbol", default_currency_symbol())?;

        let config_file_path = config_path
            .or_else(|| env::var("BROKEEATS_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BROKEEATS")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(format!("Invalid log level '{}': {}", self.logging.level, e));
        }
        if self.display.currency_symbol.is_empty() {
            return Err("Currency symbol must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_level() {
        let config = Config {
            logging: LoggingConfig {
                level: " ".to_string(),
                format: LogFormat::Json,
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "brokeeats=loud".to_string(),
                format: LogFormat::Pretty,
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_directives() {
        let config = Config {
            logging: LoggingConfig {
                level: "brokeeats=debug,warn".to_string(),
                format: LogFormat::Pretty,
            },
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_currency() {
        let config = Config {
            display: DisplayConfig {
                currency_symbol: String::new(),
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
        assert_eq!(LogFormat::Json.as_ref(), "json");
    }
}
