//! Configuration module for life-inventory.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.life-inventory.yaml` file in the current directory or
//! `~/.config/life-inventory/`:
//!
//! ```yaml
//! questionnaire:
//!   definition: ./steps.yaml
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS, THEME_NAMES, TICK_RATE_RANGE_MS};
pub use types::{
    AppConfig, AppConfigBuilder, ConfigOverrides, QuestionnaireConfig, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, config_search_dirs, discover_config_file,
    generate_full_example_config, load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("questionnaire"));
        assert!(schema.contains("tick_rate_ms"));
    }
}
