// Configuration loader
// Reads ~/.madslang/config.toml, then applies MADSLANG_* environment overrides

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::colors::{ColorScheme, ColorTheme};
use super::constants::*;
use super::settings::{ClientConfig, Config, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    host: Option<String>,
    port: Option<u16>,
    request_timeout_secs: Option<u64>,
    shutdown_grace_ms: Option<u64>,
    #[serde(default)]
    theme: ColorTheme,
    colors: Option<ColorScheme>,
    log_file: Option<PathBuf>,
}

/// Default location of the config file, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default file is used when
/// present and built-in defaults otherwise. Environment overrides apply in
/// both cases.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            load_from_path(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_path(&path)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(
        &mut config,
        std::env::var(ENV_HOST).ok(),
        std::env::var(ENV_PORT).ok(),
    )?;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

/// Parse a config file without applying environment overrides.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn parse_config(contents: &str) -> Result<Config> {
    let toml_config: TomlConfig = toml::from_str(contents)?;
    let defaults = ClientConfig::default();

    let client = ClientConfig {
        host: toml_config.host.unwrap_or(defaults.host),
        port: toml_config.port.unwrap_or(defaults.port),
        request_timeout_secs: toml_config.request_timeout_secs,
        shutdown_grace_ms: toml_config
            .shutdown_grace_ms
            .unwrap_or(defaults.shutdown_grace_ms),
    };

    let colors = toml_config
        .colors
        .unwrap_or_else(|| toml_config.theme.to_scheme());

    Ok(Config {
        client,
        colors,
        log_file: toml_config.log_file,
    })
}

/// Apply MADSLANG_HOST / MADSLANG_PORT values. Empty values are ignored.
pub fn apply_env_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
        config.client.host = host.trim().to_string();
    }
    if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
        config.client.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvPort {
                name: ENV_PORT,
                value: port.clone(),
            })?;
    }
    Ok(())
}
