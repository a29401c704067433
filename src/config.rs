use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::FallbackWeights;
use crate::services::CompletionOptions;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmSettings {
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_temperature() -> f32 { 0.5 }
fn default_max_tokens() -> u32 { 1000 }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_job_type_weight")]
    pub job_type: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            location: default_location_weight(),
            job_type: default_job_type_weight(),
        }
    }
}

impl From<&WeightsConfig> for FallbackWeights {
    fn from(config: &WeightsConfig) -> Self {
        FallbackWeights {
            skills: config.skills,
            location: config.location,
            job_type: config.job_type,
        }
    }
}

fn default_skills_weight() -> f64 { 0.6 }
fn default_location_weight() -> f64 { 0.2 }
fn default_job_type_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with JOBMATCH_)
    /// 4. OPENAI_API_KEY, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH__LLM__MODEL -> llm.model
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    pub fn fallback_weights(&self) -> FallbackWeights {
        FallbackWeights::from(&self.scoring.weights)
    }
}

/// Apply well-known environment variables that do not follow the JOBMATCH_ scheme
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        builder = builder.set_override("llm.api_key", api_key)?;
    }

    builder.build()
}
