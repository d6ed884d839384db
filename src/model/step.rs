//! Step and part definitions.
//!
//! A [`Step`] is one page of the questionnaire. The input kind is a closed sum
//! type, so every consumer matches exhaustively and an unknown `type` tag in a
//! definition file fails to deserialize instead of rendering nothing.

use serde::{Deserialize, Serialize};

/// Suffix appended to a text step's key to store its followup answer.
pub const FOLLOWUP_SUFFIX: &str = "_sub";

/// Answer key for the followup prompt of a text step.
#[must_use]
pub fn followup_key(key: &str) -> String {
    format!("{key}{FOLLOWUP_SUFFIX}")
}

/// One page of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Display heading
    pub section: String,
    /// Prompt text
    pub question: String,
    /// Base answer identifier
    pub key: String,
    /// Input kind and its kind-specific fields
    #[serde(flatten)]
    pub kind: StepKind,
}

/// Input kind of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StepKind {
    /// Single choice among ordered options
    #[serde(rename = "select")]
    Select { options: Vec<String> },
    /// Free text with an optional followup prompt
    #[serde(rename = "textArea")]
    TextArea {
        #[serde(
            rename = "subQuestion",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        sub_question: Option<String>,
    },
    /// Several independently keyed free-text parts
    #[serde(rename = "multipart")]
    Multipart { parts: Vec<Part> },
}

/// One sub-field of a multipart step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub label: String,
    pub question: String,
    pub key: String,
}

impl Part {
    pub fn new(
        label: impl Into<String>,
        question: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            question: question.into(),
            key: key.into(),
        }
    }
}

impl Step {
    /// A select step.
    pub fn select<I, S>(
        section: impl Into<String>,
        question: impl Into<String>,
        key: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            section: section.into(),
            question: question.into(),
            key: key.into(),
            kind: StepKind::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// A free-text step, optionally with a followup prompt.
    pub fn text_area(
        section: impl Into<String>,
        question: impl Into<String>,
        key: impl Into<String>,
        sub_question: Option<&str>,
    ) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
            key: key.into(),
            kind: StepKind::TextArea {
                sub_question: sub_question.map(str::to_string),
            },
        }
    }

    /// A multipart step.
    pub fn multipart(
        section: impl Into<String>,
        question: impl Into<String>,
        key: impl Into<String>,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
            key: key.into(),
            kind: StepKind::Multipart { parts },
        }
    }

    /// Short name of the input kind, as written in definition files.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            StepKind::Select { .. } => "select",
            StepKind::TextArea { .. } => "textArea",
            StepKind::Multipart { .. } => "multipart",
        }
    }

    /// Every answer key this step writes to.
    ///
    /// A multipart step writes only to its parts' keys; its own key names the
    /// step but never holds an answer.
    #[must_use]
    pub fn answer_keys(&self) -> Vec<String> {
        match &self.kind {
            StepKind::Select { .. } => vec![self.key.clone()],
            StepKind::TextArea { sub_question } => {
                let mut keys = vec![self.key.clone()];
                if sub_question.is_some() {
                    keys.push(followup_key(&self.key));
                }
                keys
            }
            StepKind::Multipart { parts } => parts.iter().map(|p| p.key.clone()).collect(),
        }
    }
}
