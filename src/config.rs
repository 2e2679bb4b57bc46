//! Runtime settings: scan filter rules and the crowding threshold.
//!
//! Scan rules come from an optional TOML file; the category table itself is
//! embedded configuration and never read from disk. The crowding threshold
//! comes from the `CROWDED_FOLDER` environment variable, read once at
//! startup.
//!
//! # Configuration File Format
//!
//! ```toml
//! [scan]
//! include_hidden = false
//! exclude = ["desktop.ini", "Thumbs.db"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the crowding threshold.
pub const CROWDED_FOLDER_VAR: &str = "CROWDED_FOLDER";

/// File count above which a year folder is offered for month sorting.
pub const DEFAULT_CROWDING_THRESHOLD: usize = 24;

/// Errors that can occur during configuration loading.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// IO error while reading configuration.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Which top-level files the scan skips.
    pub scan: ScanRules,
    /// File count above which a year folder is offered for month sorting.
    pub crowding_threshold: usize,
}

impl Settings {
    /// Loads settings for a run over `root`: scan rules from the config
    /// file search path and the crowding threshold from the environment.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(root, config_path)?;
        Ok(Self {
            scan: file.scan,
            crowding_threshold: crowding_threshold_from(
                std::env::var(CROWDED_FOLDER_VAR).ok().as_deref(),
            ),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan: ScanRules::default(),
            crowding_threshold: DEFAULT_CROWDING_THRESHOLD,
        }
    }
}

/// Parses a threshold override, falling back to the default on absence or
/// garbage (the run should not die over a malformed environment variable).
fn crowding_threshold_from(raw: Option<&str>) -> usize {
    match raw {
        None => DEFAULT_CROWDING_THRESHOLD,
        Some(value) => match value.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                log::warn!(
                    "ignoring invalid {} value {:?}, using {}",
                    CROWDED_FOLDER_VAR,
                    value,
                    DEFAULT_CROWDING_THRESHOLD
                );
                DEFAULT_CROWDING_THRESHOLD
            }
        },
    }
}

/// On-disk configuration root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    scan: ScanRules,
}

/// Rules deciding which top-level files the scan considers at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRules {
    /// Whether to include hidden files (starting with "."). Defaults to false.
    #[serde(default)]
    pub include_hidden: bool,

    /// Exact filenames the scan never touches.
    #[serde(default = "default_exclusions")]
    pub exclude: Vec<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            include_hidden: false,
            exclude: default_exclusions(),
        }
    }
}

fn default_exclusions() -> Vec<String> {
    vec!["desktop.ini".to_string()]
}

impl ScanRules {
    /// Whether a file name passes the scan filter.
    pub fn should_include(&self, file_name: &str) -> bool {
        if !self.include_hidden && file_name.starts_with('.') {
            return false;
        }
        !self.exclude.iter().any(|excluded| excluded == file_name)
    }
}

impl ConfigFile {
    /// Load configuration from a file, with fallback to defaults.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.declutter.toml` in the directory being cleaned
    /// 3. Look for `~/.config/declutter/config.toml` in the home directory
    /// 4. Fall back to default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is explicitly provided but
    /// cannot be read or parsed.
    fn load(root: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = root.join(".declutter.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("declutter")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }
}
