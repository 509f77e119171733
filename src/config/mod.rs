//! config
//!
//! API key and environment resolution.
//!
//! # Sources and Precedence
//!
//! Two sources feed the configuration, resolved independently per field:
//!
//! 1. `~/.qodo/config.json` - JSON object with optional string fields
//!    `API_KEY` and `ENVIRONMENT_NAME`
//! 2. Environment variables `QODO_API_KEY` and `QODO_ENVIRONMENT_NAME`
//!
//! A non-empty environment variable wins for its field; an unset or empty
//! one falls back to the file value. An empty final value normalizes to
//! `None`. Any read or parse failure of the config file is treated as "no
//! file values" - a broken config must never break the run.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Default rule service host.
const DEFAULT_API_BASE: &str = "https://qodo-platform.qodo.ai/rules/v1";

/// Raw shape of `~/.qodo/config.json`.
///
/// Unknown fields are ignored and missing fields default to empty, so a
/// partially filled or over-filled file still loads.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default, rename = "API_KEY")]
    api_key: String,
    #[serde(default, rename = "ENVIRONMENT_NAME")]
    environment_name: String,
}

/// Resolved configuration, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Bearer token for the rule service.
    pub api_key: Option<String>,
    /// Environment name selecting an API host, e.g. `staging`.
    pub environment_name: Option<String>,
}

impl Config {
    /// Load configuration from the per-user config file and environment.
    pub fn load() -> Self {
        let file = Self::read_config_file().unwrap_or_default();
        Self::from_sources(
            file,
            std::env::var("QODO_API_KEY").ok(),
            std::env::var("QODO_ENVIRONMENT_NAME").ok(),
        )
    }

    /// Canonical path of the per-user config file, `~/.qodo/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qodo/config.json"))
    }

    /// Read and parse the config file, collapsing every failure to `None`.
    fn read_config_file() -> Option<ConfigFile> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Merge file values with environment overrides, field by field.
    fn from_sources(file: ConfigFile, env_key: Option<String>, env_name: Option<String>) -> Self {
        Self {
            api_key: overlay(env_key, file.api_key),
            environment_name: overlay(env_name, file.environment_name),
        }
    }
}

/// Resolve one field: a non-empty env value wins, else the file value,
/// with an empty result normalized to `None`.
fn overlay(env_value: Option<String>, file_value: String) -> Option<String> {
    match env_value {
        Some(v) if !v.is_empty() => Some(v),
        _ if !file_value.is_empty() => Some(file_value),
        _ => None,
    }
}

/// Build the rule service base URL for an optional environment name.
pub fn api_base_url(environment_name: Option<&str>) -> String {
    match environment_name {
        Some(env) => format!("https://qodo-platform.{}.qodo.ai/rules/v1", env),
        None => DEFAULT_API_BASE.to_string(),
    }
}
