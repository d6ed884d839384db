//! Interactive terminal UI using ratatui.
//!
//! One screen per step: a heading, the question, the step's inputs, and a
//! row with the previous/next buttons. Focus moves with Tab; steps change
//! with the buttons or PageUp/PageDown.

mod app;
mod events;
mod status;
pub mod theme;
mod ui;
mod widgets;

pub use app::{App, FocusTarget, focus_targets};
pub use events::{Event, EventHandler, handle_key_event};
pub use status::StatusMessage;
pub use theme::{Theme, colors, current_theme_name, set_theme};
pub use ui::{render, run_tui};
