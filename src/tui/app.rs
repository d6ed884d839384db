//! TUI application state.
//!
//! [`App`] wraps a [`QuestionnaireController`] with the screen-only state the
//! terminal needs: which control has focus, overlays, and the status bar.
//! Every edit is routed through the controller, so the answers it holds are
//! the single source of truth.

use super::status::StatusMessage;
use crate::config::TuiPreferences;
use crate::controller::QuestionnaireController;
use crate::presentation::{InputWidget, StepView};
use std::time::Duration;

/// How long status bar messages stay visible.
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// A focusable control on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Input widget at this index of the step view
    Input(usize),
    Previous,
    Next,
}

impl FocusTarget {
    /// Short kind name used for footer hints.
    #[must_use]
    pub fn kind(self, view: &StepView) -> &'static str {
        match self {
            Self::Input(i) => match view.inputs.get(i) {
                Some(InputWidget::Select(_)) => "select",
                Some(InputWidget::Text(_)) => "text",
                None => "none",
            },
            Self::Previous | Self::Next => "button",
        }
    }
}

/// Focusable controls of `view` in ring order: inputs, then the enabled
/// navigation buttons.
#[must_use]
pub fn focus_targets(view: &StepView) -> Vec<FocusTarget> {
    let mut targets: Vec<FocusTarget> = (0..view.inputs.len()).map(FocusTarget::Input).collect();
    if view.navigation.previous_enabled {
        targets.push(FocusTarget::Previous);
    }
    if view.navigation.next_enabled {
        targets.push(FocusTarget::Next);
    }
    targets
}

/// Main application state for the questionnaire TUI.
#[derive(Debug)]
pub struct App {
    controller: QuestionnaireController,
    /// Index into `focus_targets` of the current view
    focus: usize,
    pub show_help: bool,
    pub show_progress: bool,
    pub status: StatusMessage,
    pub should_quit: bool,
    pub tick: u64,
    /// Persist theme changes to the preferences file
    pub persist_preferences: bool,
}

impl App {
    #[must_use]
    pub fn new(controller: QuestionnaireController) -> Self {
        Self {
            controller,
            focus: 0,
            show_help: false,
            show_progress: true,
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            should_quit: false,
            tick: 0,
            persist_preferences: true,
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &QuestionnaireController {
        &self.controller
    }

    /// Presentation of the current step.
    #[must_use]
    pub fn view(&self) -> StepView {
        self.controller.view()
    }

    /// The focused control.
    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        let targets = focus_targets(&self.view());
        targets
            .get(self.focus)
            .or_else(|| targets.first())
            .copied()
    }

    pub fn focus_next(&mut self) {
        let len = focus_targets(&self.view()).len();
        if len > 0 {
            self.focus = (self.focus.min(len - 1) + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = focus_targets(&self.view()).len();
        if len > 0 {
            self.focus = (self.focus.min(len - 1) + len - 1) % len;
        }
    }

    /// Go to the next step if the "next" control is enabled.
    pub fn next_step(&mut self) {
        if !self.controller.can_advance() {
            self.status.set("Already at the last step");
            return;
        }
        self.controller.advance();
        self.focus = 0;
    }

    /// Go to the previous step if the "previous" control is enabled.
    pub fn previous_step(&mut self) {
        if !self.controller.can_retreat() {
            self.status.set("Already at the first step");
            return;
        }
        self.controller.retreat();
        self.focus = 0;
    }

    /// Press Enter on the focused control.
    pub fn activate(&mut self) {
        match self.focused() {
            Some(FocusTarget::Previous) => self.previous_step(),
            Some(FocusTarget::Next) => self.next_step(),
            Some(FocusTarget::Input(_)) => {
                if !self.cycle_select(1) {
                    self.type_char('\n');
                }
            }
            None => {}
        }
    }

    /// Append `c` to the focused text input. Returns whether an input took it.
    pub fn type_char(&mut self, c: char) -> bool {
        let Some(key) = self.focused_text_key() else {
            return false;
        };
        let mut value = self.controller.answer(&key).to_string();
        value.push(c);
        self.controller.record_answer(key, value);
        true
    }

    /// Delete the last character of the focused text input.
    pub fn backspace(&mut self) -> bool {
        let Some(key) = self.focused_text_key() else {
            return false;
        };
        let mut value = self.controller.answer(&key).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.controller.record_answer(key, value);
        true
    }

    /// Move the focused select input's choice by `delta`, wrapping through the
    /// "no answer" sentinel. Returns whether a select input was focused.
    pub fn cycle_select(&mut self, delta: isize) -> bool {
        let Some(FocusTarget::Input(i)) = self.focused() else {
            return false;
        };
        let view = self.view();
        let Some(InputWidget::Select(select)) = view.inputs.get(i) else {
            return false;
        };
        let value = select.cycled_value(delta).to_string();
        self.controller.record_answer(select.key.clone(), value);
        true
    }

    fn focused_text_key(&self) -> Option<String> {
        let Some(FocusTarget::Input(i)) = self.focused() else {
            return None;
        };
        match self.view().inputs.get(i) {
            Some(InputWidget::Text(text)) => Some(text.key.clone()),
            _ => None,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch to the next theme and remember it for future sessions.
    pub fn cycle_theme(&mut self) {
        let name = super::theme::toggle_theme();
        self.status.set(format!("Theme: {name}"));
        if self.persist_preferences {
            let prefs = TuiPreferences {
                theme: name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("Failed to save preferences: {}", e);
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation tick and expire stale status messages.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
    }
}
