//! Application configuration for the fleet frontends.

use std::{
    fs,
    path::{Path, PathBuf},
};

use ::config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Directory under the user's config directory holding `config.toml`.
pub const CONFIG_DIR: &str = "fleet";
/// Prefix for environment overrides, e.g. `FLEET_FLEET_FILE`.
pub const ENV_PREFIX: &str = "FLEET";

const DEFAULT_CONFIG: &str = r#"# Fleet configuration.
#
# Every key can be overridden with a FLEET_<KEY> environment variable.

# Directory receiving fleet.log.
# log_dir = "logs"

# JSON fleet to display instead of the built-in demo fleet.
# fleet_file = "fleet.json"

# Currency label printed next to fares.
currency = "RUB"
"#;

/// Settings read from `config.toml` and the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving the log file.
    pub log_dir: PathBuf,
    /// Optional fleet document to load instead of the demo fleet.
    pub fleet_file: Option<PathBuf>,
    /// Currency label printed next to fares.
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            fleet_file: None,
            currency: "RUB".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the default config file, then `FLEET_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path` (which may be missing), then `FLEET_*` environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }

    fn build(path: &Path, environment: Environment) -> Result<Self> {
        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
        }
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(environment)
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Location of `config.toml` under the user's config directory.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.toml")
}

/// Write the commented default config if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    ensure_default_config_at(&path)?;
    Ok(path)
}

/// Write the commented default config to `path` if it does not exist.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write config {}", path.display()))?;
    info!("wrote default config to {}", path.display());
    Ok(())
}
