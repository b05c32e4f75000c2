//! Shared types used across the checker crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default banner when `app_name` is not configured.
pub const DEFAULT_APP_NAME: &str = "Chronic Disease Symptom Checker";

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report with ruled sections.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Banner printed above the label menu.
    pub app_name: String,
    /// Optional TOML rule file replacing the built-in disease table.
    #[serde(default)]
    pub rules_path: Option<String>,
    /// Report format.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            rules_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `CHRONIC_CONFIG` path > `config/checker` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CHRONIC_CONFIG").unwrap_or_else(|_| "config/checker".to_string());
        Self::load_from(&config_path)
    }

    /// Load config from the given file (extension optional; skipped if absent) plus `CHRONIC__*` env overrides.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", DEFAULT_APP_NAME)?
            .set_default("output", "text")?;

        let path = Path::new(config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(config_path).required(false))
        };

        let built = builder
            .add_source(config::Environment::with_prefix("CHRONIC").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
