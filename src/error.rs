//! Unified error types for life-inventory.
//!
//! Controller operations are total and never fail. Errors only arise at the
//! edges: loading a questionnaire definition, reading files, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for life-inventory operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InventoryError {
    /// The questionnaire definition is malformed or violates an invariant
    #[error("Invalid questionnaire definition: {context}: {source}")]
    Definition {
        context: String,
        #[source]
        source: DefinitionErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific definition error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefinitionErrorKind {
    #[error("questionnaire has no steps")]
    NoSteps,

    #[error("step {index} has an empty answer key")]
    EmptyKey { index: usize },

    #[error("answer key '{key}' is used more than once")]
    DuplicateKey { key: String },

    #[error("select step '{key}' has no options")]
    NoOptions { key: String },

    #[error("multipart step '{key}' has no parts")]
    NoParts { key: String },

    #[error("unsupported definition file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for life-inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl InventoryError {
    /// Create a definition error with context
    pub fn definition(context: impl Into<String>, source: DefinitionErrorKind) -> Self {
        Self::Definition {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The definition error kind, if this is a definition error.
    #[must_use]
    pub const fn definition_kind(&self) -> Option<&DefinitionErrorKind> {
        match self {
            Self::Definition { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::definition(
            "JSON deserialization",
            DefinitionErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for InventoryError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::definition(
            "YAML deserialization",
            DefinitionErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is prepended to the error's existing context, so nested calls
/// produce a chain like `"loading steps.yaml: YAML deserialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<InventoryError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: InventoryError, new_ctx: &str) -> InventoryError {
    match err {
        InventoryError::Definition {
            context: existing,
            source,
        } => InventoryError::Definition {
            context: chain_context(new_ctx, &existing),
            source,
        },
        InventoryError::Io {
            path,
            message,
            source,
        } => InventoryError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        InventoryError::Config(msg) => InventoryError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_display() {
        let err = InventoryError::definition(
            "steps.yaml",
            DefinitionErrorKind::DuplicateKey {
                key: "period".to_string(),
            },
        );
        let display = err.to_string();
        assert!(display.contains("steps.yaml"), "{display}");
        assert_eq!(
            err.definition_kind(),
            Some(&DefinitionErrorKind::DuplicateKey {
                key: "period".to_string()
            })
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = InventoryError::io("/path/to/steps.yaml", io_err);

        assert!(err.to_string().contains("/path/to/steps.yaml"));
        assert!(err.definition_kind().is_none());
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(InventoryError::definition("base", DefinitionErrorKind::NoSteps))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(InventoryError::Definition { context, source }) => {
                assert_eq!(context, "outer layer: middle layer: base");
                assert_eq!(source, DefinitionErrorKind::NoSteps);
            }
            other => panic!("Expected Definition error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(InventoryError::config("bad"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_yaml_error_converts_to_definition_error() {
        let parsed: std::result::Result<Vec<String>, serde_yaml::Error> =
            serde_yaml::from_str("{ not: [a list");
        let err: InventoryError = parsed.unwrap_err().into();
        assert!(matches!(
            err.definition_kind(),
            Some(DefinitionErrorKind::InvalidYaml(_))
        ));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
