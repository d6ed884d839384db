//! Configuration validation for life-inventory.

use super::defaults::{THEME_NAMES, TICK_RATE_RANGE_MS};
use super::types::{AppConfig, ConfigOverrides, QuestionnaireConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.questionnaire.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for QuestionnaireConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref path) = self.definition {
            if !path.exists() {
                errors.push(ConfigError {
                    field: "questionnaire.definition".to_string(),
                    message: format!("Definition file not found: {}", path.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            });
        }

        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}

impl Validatable for ConfigOverrides {
    /// Checks only the values that were given.
    fn validate(&self) -> Vec<ConfigError> {
        let mut tui = TuiConfig::default();
        if let Some(theme) = &self.theme {
            tui.theme.clone_from(theme);
        }
        if let Some(ms) = self.tick_rate_ms {
            tui.tick_rate_ms = ms;
        }
        tui.validate()
    }
}

// ============================================================================
// Tests
// ============================================================================
