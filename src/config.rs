//! Configuration management for sunshine
//!
//! Handles loading configuration from a TOML file and `SUNSHINE_`-prefixed
//! environment variables, and validates the result.

use crate::SunshineError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SunshineConfig {
    /// Generative backend settings
    pub llm: LlmConfig,
    /// Unit prices for usage cost accounting
    pub llm_cost: LlmCostConfig,
    /// Weather provider settings
    pub weather: WeatherConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Generative backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Use the generative advisor instead of the template
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Bearer token, if the endpoint needs one
    pub api_key: Option<String>,
    /// Model identifier sent with each request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Cost per 1,000 tokens. Both unset means cost is reported as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmCostConfig {
    pub input_per_1k: Option<Decimal>,
    pub output_per_1k: Option<Decimal>,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_llm_timeout() -> u32 {
    60
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_llm_base_url(),
            api_key: None,
            model: default_llm_model(),
            timeout_seconds: default_llm_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SunshineConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);
        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // SUNSHINE_LLM__ENABLED=true, SUNSHINE_LLM_COST__INPUT_PER_1K=0.01
        builder = builder.add_source(
            Environment::with_prefix("SUNSHINE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SunshineConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sunshine").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.llm.base_url.is_empty() {
            self.llm.base_url = default_llm_base_url();
        }
        if self.llm.model.is_empty() {
            self.llm.model = default_llm_model();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_prices()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        for (name, timeout) in [
            ("LLM", self.llm.timeout_seconds),
            ("Weather API", self.weather.timeout_seconds),
        ] {
            if timeout == 0 || timeout > 300 {
                return Err(SunshineError::config(format!(
                    "{name} timeout must be between 1 and 300 seconds"
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_prices(&self) -> Result<()> {
        let prices = [self.llm_cost.input_per_1k, self.llm_cost.output_per_1k];
        if prices.iter().flatten().any(Decimal::is_sign_negative) {
            return Err(SunshineError::config("LLM token prices cannot be negative").into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SunshineError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SunshineError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("LLM", &self.llm.base_url),
            ("Weather API", &self.weather.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(SunshineError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
