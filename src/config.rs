use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DistPrepError, Result};

/// Represents the complete configuration for dist-prep.
///
/// Contains the fixed release version target, long-description output behavior,
/// and the locations of the Markdown and RST documents.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Version string used for release builds (development builds derive
    /// theirs from the VCS history instead).
    #[serde(default = "default_target_version")]
    pub target_version: String,

    /// Whether to persist the generated RST document to disk. When false,
    /// any stale generated file is removed instead.
    #[serde(default = "default_create_rst")]
    pub create_rst: bool,

    /// Repository URL, used to derive the download location for a resolved
    /// version. Optional; no download location is reported without it.
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub paths: PathsConfig,
}

fn default_target_version() -> String {
    "0.1.0".to_string()
}

fn default_create_rst() -> bool {
    true
}

/// Locations of the documents the pipeline reads and writes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PathsConfig {
    #[serde(default = "default_readme")]
    pub readme: PathBuf,

    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    #[serde(default = "default_rst_output")]
    pub rst_output: PathBuf,
}

fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_rst_output() -> PathBuf {
    PathBuf::from("README.rst")
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            readme: default_readme(),
            changelog: default_changelog(),
            rst_output: default_rst_output(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_version: default_target_version(),
            create_rst: default_create_rst(),
            repository: None,
            paths: PathsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `distprep.toml` in current directory
/// 3. `~/.config/.distprep.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./distprep.toml").exists() {
        fs::read_to_string("./distprep.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".distprep.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| DistPrepError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}
