//! Framework-independent presentation of a step.
//!
//! [`render_step`] is a pure function from a [`Step`] and an [`AnswerStore`]
//! snapshot to the input widgets the step shows, each bound to the answer key
//! it reads from and writes to. Front ends draw these descriptions and route
//! edits back through the controller.

use crate::model::{AnswerStore, Labels, Step, StepKind, followup_key};

/// One choice of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// Value recorded when chosen; `""` for the sentinel
    pub value: String,
}

/// A single-choice control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectInput {
    pub key: String,
    /// Sentinel first, then the step's options in order
    pub choices: Vec<Choice>,
    /// Index into `choices`
    pub selected: usize,
}

impl SelectInput {
    fn new(key: &str, options: &[String], placeholder: &str, current: &str) -> Self {
        let mut choices = Vec::with_capacity(options.len() + 1);
        choices.push(Choice {
            label: placeholder.to_string(),
            value: String::new(),
        });
        choices.extend(options.iter().map(|opt| Choice {
            label: opt.clone(),
            value: opt.clone(),
        }));

        let selected = options
            .iter()
            .position(|opt| !current.is_empty() && opt == current)
            .map_or(0, |i| i + 1);

        Self {
            key: key.to_string(),
            choices,
            selected,
        }
    }

    /// The currently selected choice.
    #[must_use]
    pub fn current(&self) -> &Choice {
        &self.choices[self.selected]
    }

    /// Whether the sentinel ("no answer") is selected.
    #[must_use]
    pub const fn is_unanswered(&self) -> bool {
        self.selected == 0
    }

    /// Value recorded by moving the selection `delta` places, wrapping.
    #[must_use]
    pub fn cycled_value(&self, delta: isize) -> &str {
        let len = self.choices.len() as isize;
        let idx = (self.selected as isize + delta).rem_euclid(len) as usize;
        &self.choices[idx].value
    }
}

/// A free-text control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub key: String,
    /// Label drawn above the input (multipart parts)
    pub heading: Option<String>,
    /// Hint shown while the value is empty
    pub placeholder: String,
    pub value: String,
}

/// An input widget bound to one answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWidget {
    Select(SelectInput),
    Text(TextInput),
}

impl InputWidget {
    /// The answer key this widget is bound to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Select(s) => &s.key,
            Self::Text(t) => &t.key,
        }
    }
}

/// Enablement of the two navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavigationState {
    /// Enablement for `cursor` in a sequence of `len` steps.
    #[must_use]
    pub const fn at(cursor: usize, len: usize) -> Self {
        Self {
            previous_enabled: cursor != 0,
            next_enabled: cursor + 1 != len,
        }
    }
}

/// Everything a front end needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub title: String,
    pub section: String,
    pub question: String,
    pub inputs: Vec<InputWidget>,
    pub navigation: NavigationState,
    pub previous_label: String,
    pub next_label: String,
    /// Zero-based index of the step
    pub position: usize,
    pub total: usize,
}

impl StepView {
    /// Header text, `"<title> - <section>"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.section)
    }
}

/// Input widgets for `step`, reflecting the answers in `answers`.
#[must_use]
pub fn render_step(step: &Step, answers: &AnswerStore, labels: &Labels) -> Vec<InputWidget> {
    match &step.kind {
        StepKind::Select { options } => vec![InputWidget::Select(SelectInput::new(
            &step.key,
            options,
            &labels.select_placeholder,
            answers.get(&step.key),
        ))],
        StepKind::TextArea { sub_question } => {
            let mut inputs = vec![InputWidget::Text(TextInput {
                key: step.key.clone(),
                heading: None,
                placeholder: labels.text_placeholder.clone(),
                value: answers.get(&step.key).to_string(),
            })];
            if let Some(sub) = sub_question {
                let key = followup_key(&step.key);
                let value = answers.get(&key).to_string();
                inputs.push(InputWidget::Text(TextInput {
                    key,
                    heading: None,
                    placeholder: sub.clone(),
                    value,
                }));
            }
            inputs
        }
        StepKind::Multipart { parts } => parts
            .iter()
            .map(|part| {
                InputWidget::Text(TextInput {
                    key: part.key.clone(),
                    heading: Some(part.label.clone()),
                    placeholder: part.question.clone(),
                    value: answers.get(&part.key).to_string(),
                })
            })
            .collect(),
    }
}
