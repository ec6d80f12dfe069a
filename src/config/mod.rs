//! Configuration file handling
//!
//! A TOML file at `{config_dir}/doccmp/config.toml` (XDG on Linux, dotdir
//! elsewhere; `DOCCMP_CONFIG_DIR` overrides both). The endpoint resolves
//! with CLI flag > `DOCCMP_ENDPOINT` env var > config file; everything else
//! has a default. The resolved config is passed explicitly to whatever
//! needs it, never held in a global.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const ENDPOINT_ENV_VAR: &str = "DOCCMP_ENDPOINT";
const CONFIG_DIR_ENV_VAR: &str = "DOCCMP_CONFIG_DIR";

const CONFIG_TEMPLATE: &str = "\
# doccmp configuration

# Base URL of the document comparison service (required for network
# commands; can also come from --endpoint or DOCCMP_ENDPOINT).
# endpoint = \"https://comparator.example.com\"

# HTTP client timeout in seconds.
timeout_secs = 60

# Cosmetic delay before showing results, in milliseconds. Set to 0 to
# show results immediately.
reveal_delay_ms = 500

# Color theme for the TUI: \"mocha\" (dark) or \"latte\" (light).
theme = \"mocha\"
";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Comparator service base URL.
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_reveal_delay_ms() -> u64 {
    500
}

fn default_theme() -> String {
    "mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            reveal_delay_ms: default_reveal_delay_ms(),
            theme: default_theme(),
        }
    }
}

/// Where the configured endpoint came from, for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Flag,
    Env,
    File,
}

impl EndpointSource {
    pub fn label(&self) -> &'static str {
        match self {
            EndpointSource::Flag => "--endpoint flag",
            EndpointSource::Env => ENDPOINT_ENV_VAR,
            EndpointSource::File => "config file",
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(dir)
        } else if cfg!(target_os = "linux") {
            // XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("doccmp")
        } else {
            // Home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".doccmp")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            debug!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    /// Write the commented template to the config path. Refuses to clobber
    /// an existing file unless `force` is set.
    pub fn write_template(force: bool) -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() && !force {
            anyhow::bail!(
                "Config file already exists at {} (use --force to overwrite)",
                config_path.display()
            );
        }

        fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config template: {:?}", config_path))?;

        info!("Wrote config template to {:?}", config_path);
        Ok(config_path)
    }

    /// Resolve the comparator endpoint: CLI flag, then the environment,
    /// then the config file. A missing endpoint names all three sources.
    pub fn resolve_endpoint(&self, flag: Option<String>) -> Result<(String, EndpointSource)> {
        if let Some(endpoint) = flag {
            return Ok((endpoint, EndpointSource::Flag));
        }

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.is_empty() {
                return Ok((endpoint, EndpointSource::Env));
            }
        }

        if let Some(endpoint) = &self.endpoint {
            return Ok((endpoint.clone(), EndpointSource::File));
        }

        anyhow::bail!(
            "No comparison endpoint configured. Pass --endpoint, set {}, or add `endpoint` to {}.",
            ENDPOINT_ENV_VAR,
            Self::get_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = toml::from_str("endpoint = \"http://localhost:8000\"").unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.reveal_delay_ms, 500);
        assert_eq!(config.theme, "mocha");
    }

    #[test]
    fn test_template_parses_with_defaults() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.reveal_delay_ms, 500);
    }

    #[test]
    fn test_flag_takes_precedence_over_file() {
        let config = Config {
            endpoint: Some("http://from-file".to_string()),
            ..Config::default()
        };
        let (endpoint, source) = config
            .resolve_endpoint(Some("http://from-flag".to_string()))
            .unwrap();
        assert_eq!(endpoint, "http://from-flag");
        assert_eq!(source, EndpointSource::Flag);
    }

    #[test]
    fn test_file_endpoint_used_when_no_flag() {
        // DOCCMP_ENDPOINT may leak in from the environment; only assert the
        // file fallback when it is unset.
        if std::env::var(ENDPOINT_ENV_VAR).is_ok() {
            return;
        }
        let config = Config {
            endpoint: Some("http://from-file".to_string()),
            ..Config::default()
        };
        let (endpoint, source) = config.resolve_endpoint(None).unwrap();
        assert_eq!(endpoint, "http://from-file");
        assert_eq!(source, EndpointSource::File);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            endpoint: Some("http://localhost:8000".to_string()),
            timeout_secs: 30,
            reveal_delay_ms: 0,
            theme: "latte".to_string(),
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.timeout_secs, 30);
        assert_eq!(parsed.reveal_delay_ms, 0);
        assert_eq!(parsed.theme, "latte");
    }
}
