//! Configuration types for life-inventory.

use super::defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Which questionnaire to present
    pub questionnaire: QuestionnaireConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Use a questionnaire definition file instead of the built-in one.
    pub fn definition(mut self, path: Option<PathBuf>) -> Self {
        self.config.questionnaire.definition = path;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub const fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.tui.tick_rate_ms = ms;
        self
    }

    pub const fn show_progress(mut self, show: bool) -> Self {
        self.config.tui.show_progress = show;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given on the command line. Every `Some` wins over the config file,
/// even when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub definition: Option<PathBuf>,
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub show_progress: Option<bool>,
}

// ============================================================================
// Questionnaire Configuration
// ============================================================================

/// Questionnaire source configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct QuestionnaireConfig {
    /// Path to a YAML or JSON definition; the built-in inventory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<PathBuf>,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
    /// Show the step counter and per-step answer count in the header
    pub show_progress: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_progress: true,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
///
/// Only display preferences live here; answers are never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("life-inventory").join("preferences.json"))
    }

    /// Load preferences from disk, or defaults if absent or unreadable.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save preferences to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .definition(Some(PathBuf::from("steps.yaml")))
            .theme("light")
            .tick_rate_ms(100)
            .show_progress(false)
            .build();
        assert_eq!(
            config.questionnaire.definition,
            Some(PathBuf::from("steps.yaml"))
        );
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert!(!config.tui.show_progress);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: light\n").expect("valid");
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.questionnaire.definition.is_none());
    }

    #[test]
    fn test_preferences_roundtrip_through_file() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested").join("preferences.json");
        let prefs = TuiPreferences {
            theme: "high-contrast".to_string(),
        };
        prefs.save_to(&path).expect("save");
        let loaded: TuiPreferences =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(loaded, prefs);
    }
}
