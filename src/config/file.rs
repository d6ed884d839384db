//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".life-inventory.yaml",
    ".life-inventory.yml",
    "life-inventory.yaml",
    "life-inventory.yml",
];

/// Directories searched for a config file, in order.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_out.push(cwd);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_out.push(config_dir.join("life-inventory"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home);
    }
    dirs_out
}

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/life-inventory/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist, searching defaults", path.display());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(definition) = &overrides.definition {
            self.questionnaire.definition = Some(definition.clone());
        }
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(ms) = overrides.tick_rate_ms {
            self.tui.tick_rate_ms = ms;
        }
        if let Some(show) = overrides.show_progress {
            self.tui.show_progress = show;
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# life-inventory configuration
# ============================
#
# Place this file at:
#   - .life-inventory.yaml in the current directory
#   - ~/.config/life-inventory/life-inventory.yaml for global config
#
# CLI arguments always override file settings.

# Questionnaire source: a YAML or JSON definition file.
# Omit for the built-in inventory.
# questionnaire:
#   definition: ./my-steps.yaml

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  # Event poll interval in milliseconds (16-5000)
  tick_rate_ms: 250
  # Show step counter and answered fields in the header
  show_progress: true
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
