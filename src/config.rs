//! Configuration file support for dependency-analytics.
//!
//! Provides YAML-based configuration through `dependency-analytics.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::dispatch::{DebounceScope, DEFAULT_DEBOUNCE_DELAY};
use crate::application::dto::{ClientIdentity, Settings};
use crate::shared::error::AnalysisError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dependency-analytics.config.yml";

/// Top-level configuration file schema.
///
/// Everything here is fixed for the lifetime of the process except
/// `settings`, which only seeds the settings store.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub telemetry_id: String,
    pub source: String,
    pub dev_mode: bool,
    pub debounce_delay_ms: u64,
    pub debounce_scope: DebounceScope,
    pub engine: EngineConfig,
    pub settings: Settings,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// External command used as the scanning engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "exhort".to_string(),
            args: Vec::new(),
            timeout_secs: 120,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let identity = ClientIdentity::default();
        Self {
            telemetry_id: identity.telemetry_id,
            source: identity.source,
            dev_mode: identity.dev_mode,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY.as_millis() as u64,
            debounce_scope: DebounceScope::default(),
            engine: EngineConfig::default(),
            settings: Settings::default(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl ServerConfig {
    pub fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            telemetry_id: self.telemetry_id.clone(),
            source: self.source.clone(),
            dev_mode: self.dev_mode,
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn engine_timeout(&self) -> Duration {
        Duration::from_secs(self.engine.timeout_secs)
    }

    /// Replaces the engine program, keeping its arguments.
    pub fn override_engine_program(&mut self, program: &str) {
        self.engine.program = program.to_string();
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ServerConfig> {
    validate_not_symlink(path, "config read").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ServerConfig = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ServerConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
pub fn validate_config(config: &ServerConfig) -> Result<()> {
    let invalid = |details: &str, hint: String| -> anyhow::Error {
        AnalysisError::ConfigError {
            details: details.to_string(),
            hint,
        }
        .into()
    };

    if config.engine.program.trim().is_empty() {
        return Err(invalid(
            "engine.program must not be empty",
            "Set engine.program to the command that runs the component analysis.".to_string(),
        ));
    }
    if config.debounce_delay_ms == 0 {
        return Err(invalid(
            "debounce_delay_ms must be greater than 0",
            format!(
                "Remove the field to use the default of {} ms.",
                DEFAULT_DEBOUNCE_DELAY.as_millis()
            ),
        ));
    }
    if config.engine.timeout_secs == 0 {
        return Err(invalid(
            "engine.timeout_secs must be greater than 0",
            "Remove the field to use the default of 120 seconds.".to_string(),
        ));
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ServerConfig) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
