//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.funcpad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FuncpadConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub create: CreateConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateConfig {
    pub language: Option<String>,
    pub template: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LANGUAGE: &str = "node";
pub const DEFAULT_TEMPLATE: &str = "http";
pub const DEFAULT_LOG_FILE: &str = "funcpad.log";

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# funcpad configuration
#
# All settings are optional; CLI flags and FUNCPAD_* environment variables
# override anything set here.

# [general]
# log_file = \"funcpad.log\"

# [create]
# language = \"node\"       # node, go, python
# template = \"http\"       # http, cloudevents
";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: String,
    pub template: String,
    pub log_file: PathBuf,
}

/// CLI-provided overrides, the top of the hierarchy.
#[derive(Debug, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub template: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".funcpad").join("config.toml"))
}

/// Load the config file, degrading to defaults on any problem. A missing
/// file is the normal first-run case and triggers generation of the
/// commented template.
pub fn load() -> FuncpadConfig {
    let Some(path) = config_path() else {
        warn!("No home directory; using default configuration");
        return FuncpadConfig::default();
    };
    if !path.exists() {
        if let Err(e) = write_default(&path) {
            warn!("Could not write default config to {}: {e}", path.display());
        }
        return FuncpadConfig::default();
    }
    match load_from(&path) {
        Ok(config) => {
            info!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring config at {}: {e}", path.display());
            FuncpadConfig::default()
        }
    }
}

fn load_from(path: &Path) -> Result<FuncpadConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&raw).map_err(ConfigError::Parse)
}

fn write_default(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(ConfigError::Io)?;
    info!("Wrote default config template to {}", path.display());
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the hierarchy into concrete values:
/// CLI flag → env var → config file → built-in default.
pub fn resolve(file: FuncpadConfig, cli: Overrides) -> ResolvedConfig {
    resolve_with(
        file,
        cli,
        std::env::var("FUNCPAD_LANGUAGE").ok(),
        std::env::var("FUNCPAD_TEMPLATE").ok(),
    )
}

fn resolve_with(
    file: FuncpadConfig,
    cli: Overrides,
    env_language: Option<String>,
    env_template: Option<String>,
) -> ResolvedConfig {
    let language = cli
        .language
        .or(env_language)
        .or(file.create.language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let template = cli
        .template
        .or(env_template)
        .or(file.create.template)
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let log_file = cli
        .log_file
        .or(file.general.log_file)
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    ResolvedConfig {
        language,
        template,
        log_file: PathBuf::from(log_file),
    }
}
