//! The questionnaire session controller.
//!
//! [`QuestionnaireController`] owns the cursor and the answer store for one
//! session. Every operation is total: navigation saturates at both ends and
//! recording accepts any string. Front ends observe the controller and
//! re-render after each mutation.

use crate::model::{AnswerStore, Questionnaire, Step};
use crate::presentation::{NavigationState, StepView, render_step};

/// Session state for a linear walk through a questionnaire.
#[derive(Debug, Clone)]
pub struct QuestionnaireController {
    questionnaire: Questionnaire,
    cursor: usize,
    answers: AnswerStore,
}

impl Default for QuestionnaireController {
    fn default() -> Self {
        Self::new(Questionnaire::builtin())
    }
}

impl QuestionnaireController {
    /// Start a fresh session on the first step with no answers.
    #[must_use]
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            cursor: 0,
            answers: AnswerStore::new(),
        }
    }

    /// Move to the next step. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.cursor += 1;
            tracing::debug!(cursor = self.cursor, "Advanced to next step");
            true
        } else {
            false
        }
    }

    /// Move to the previous step. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.can_retreat() {
            self.cursor -= 1;
            tracing::debug!(cursor = self.cursor, "Retreated to previous step");
            true
        } else {
            false
        }
    }

    /// Set `answers[key] = value`, overwriting any prior value.
    pub fn record_answer(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        tracing::trace!(key = %key, len = value.chars().count(), "Recorded answer");
        self.answers.record(key, value);
    }

    /// The step under the cursor.
    #[must_use]
    pub fn current_step(&self) -> &Step {
        // The cursor is kept in [0, len-1] and a questionnaire is never empty.
        &self.questionnaire.steps()[self.cursor]
    }

    /// The answer for `key`, or `""`.
    #[must_use]
    pub fn answer(&self, key: &str) -> &str {
        self.answers.get(key)
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questionnaire.len()
    }

    /// Always false; a questionnaire has at least one step.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questionnaire.is_empty()
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    #[must_use]
    pub const fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.cursor == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.len()
    }

    /// Whether the "previous" control is enabled.
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        !self.is_first()
    }

    /// Whether the "next" control is enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_last()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        NavigationState::at(self.cursor, self.len())
    }

    /// Presentation of the current step against the current answers.
    #[must_use]
    pub fn view(&self) -> StepView {
        let step = self.current_step();
        let labels = self.questionnaire.labels();
        StepView {
            title: labels.title.clone(),
            section: step.section.clone(),
            question: step.question.clone(),
            inputs: render_step(step, &self.answers, labels),
            navigation: self.navigation(),
            previous_label: labels.previous.clone(),
            next_label: labels.next.clone(),
            position: self.cursor,
            total: self.len(),
        }
    }

    /// Answered keys of the current step over all of its keys.
    #[must_use]
    pub fn current_progress(&self) -> (usize, usize) {
        let keys = self.current_step().answer_keys();
        (self.answers.answered_count(&keys), keys.len())
    }
}
