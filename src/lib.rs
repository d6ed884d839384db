//! **A guided self-reflection questionnaire for the terminal.**
//!
//! `life-inventory` walks a person through a fixed sequence of reflective
//! questions, one step per screen, and keeps their answers in memory for the
//! duration of the session. Each step carries a section name, a question, and
//! one of three input kinds: a single choice from a list, a free-text area
//! (optionally followed by a second free-text prompt), or a group of labeled
//! free-text parts.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The static [`Questionnaire`] (an ordered list of [`Step`]s)
//!   and the [`AnswerStore`] mapping answer keys to text.
//! - **[`controller`]**: [`QuestionnaireController`], the navigation cursor and
//!   answer state. Navigation is clamped at both ends and never fails.
//! - **[`presentation`]**: [`render_step`] turns a step and the stored answers
//!   into input widgets bound to answer keys, independent of any terminal.
//! - **[`tui`]**: The ratatui front end.
//! - **[`config`]**: YAML configuration file discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use life_inventory::QuestionnaireController;
//!
//! let mut controller = QuestionnaireController::default();
//! controller.record_answer("period", "中学生");
//! controller.advance();
//!
//! assert_eq!(controller.cursor(), 1);
//! assert_eq!(controller.answer("period"), "中学生");
//! assert_eq!(controller.answer("relationships"), "");
//! ```
//!
//! ### Loading a custom definition
//!
//! ```no_run
//! use std::path::Path;
//! use life_inventory::{Questionnaire, QuestionnaireController};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let questionnaire = Questionnaire::from_path(Path::new("steps.yaml"))?;
//!     let controller = QuestionnaireController::new(questionnaire);
//!     println!("{} steps", controller.len());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math casts between usize and u16
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools
)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod presentation;
pub mod tui;

// Re-export main types for convenience
pub use config::{
    AppConfig, AppConfigBuilder, ConfigError, ConfigOverrides, TuiConfig, Validatable,
};
pub use controller::QuestionnaireController;
pub use error::{DefinitionErrorKind, ErrorContext, InventoryError, Result};
pub use model::{AnswerStore, Labels, Part, Questionnaire, Step, StepKind};
pub use presentation::{InputWidget, NavigationState, StepView, render_step};
