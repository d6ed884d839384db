//! Validated, immutable questionnaire definitions.
//!
//! A [`Questionnaire`] is static configuration: built once at startup (either
//! the built-in inventory or a definition file) and never mutated afterwards.
//! All structural invariants are checked at construction, including during
//! deserialization.

use super::step::{Step, StepKind};
use crate::error::{DefinitionErrorKind, ErrorContext, InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Display strings that are not part of any single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    /// Title shown before the section heading
    pub title: String,
    /// Sentinel choice meaning "no answer" on select steps
    pub select_placeholder: String,
    /// Placeholder of the main text input on text steps
    pub text_placeholder: String,
    /// Previous button label
    pub previous: String,
    /// Next button label
    pub next: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "人生の棚卸し".to_string(),
            select_placeholder: "選択してください".to_string(),
            text_placeholder: "ここに記入してください...".to_string(),
            previous: "前へ".to_string(),
            next: "次へ".to_string(),
        }
    }
}

/// Raw definition as read from a file, before validation.
#[derive(Debug, Deserialize)]
struct QuestionnaireDef {
    #[serde(default)]
    labels: Labels,
    steps: Vec<Step>,
}

/// An ordered, validated sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionnaireDef")]
pub struct Questionnaire {
    labels: Labels,
    steps: Vec<Step>,
}

impl TryFrom<QuestionnaireDef> for Questionnaire {
    type Error = InventoryError;

    fn try_from(def: QuestionnaireDef) -> Result<Self> {
        Self::new(def.steps, def.labels)
    }
}

impl Questionnaire {
    /// Build a questionnaire, checking every structural invariant.
    pub fn new(steps: Vec<Step>, labels: Labels) -> Result<Self> {
        validate_steps(&steps)?;
        Ok(Self { labels, steps })
    }

    /// Build from data known to satisfy every invariant.
    pub(super) const fn from_trusted(steps: Vec<Step>, labels: Labels) -> Self {
        Self { labels, steps }
    }

    /// Build a questionnaire with the default labels.
    pub fn with_steps(steps: Vec<Step>) -> Result<Self> {
        Self::new(steps, Labels::default())
    }

    /// Parse a YAML definition.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let def: QuestionnaireDef = serde_yaml::from_str(content)?;
        Self::try_from(def)
    }

    /// Parse a JSON definition.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let def: QuestionnaireDef = serde_json::from_str(content)?;
        Self::try_from(def)
    }

    /// Load a definition file, choosing the parser by extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content =
            std::fs::read_to_string(path).map_err(|e| InventoryError::io(path, e))?;

        let parsed = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(InventoryError::definition(
                "choosing a parser",
                DefinitionErrorKind::UnsupportedFormat(other.to_string()),
            )),
        };

        let questionnaire = parsed.with_context(|| format!("loading {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            steps = questionnaire.len(),
            "Loaded questionnaire definition"
        );
        Ok(questionnaire)
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Number of steps; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated questionnaire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every answer key across all steps, in step order.
    #[must_use]
    pub fn answer_keys(&self) -> Vec<String> {
        self.steps.iter().flat_map(Step::answer_keys).collect()
    }
}

fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(InventoryError::definition(
            "validating steps",
            DefinitionErrorKind::NoSteps,
        ));
    }

    let mut seen: HashSet<String> = HashSet::new();
    for (index, step) in steps.iter().enumerate() {
        let ctx = format!("step {index} ('{}')", step.section);

        if step.key.is_empty() {
            return Err(InventoryError::definition(
                ctx,
                DefinitionErrorKind::EmptyKey { index },
            ));
        }

        match &step.kind {
            StepKind::Select { options } if options.is_empty() => {
                return Err(InventoryError::definition(
                    ctx,
                    DefinitionErrorKind::NoOptions {
                        key: step.key.clone(),
                    },
                ));
            }
            StepKind::Multipart { parts } => {
                if parts.is_empty() {
                    return Err(InventoryError::definition(
                        ctx,
                        DefinitionErrorKind::NoParts {
                            key: step.key.clone(),
                        },
                    ));
                }
                if parts.iter().any(|p| p.key.is_empty()) {
                    return Err(InventoryError::definition(
                        ctx,
                        DefinitionErrorKind::EmptyKey { index },
                    ));
                }
            }
            StepKind::Select { .. } | StepKind::TextArea { .. } => {}
        }

        // The step key itself must be unique even for multipart steps, whose
        // key never stores an answer.
        let mut keys = step.answer_keys();
        if !keys.contains(&step.key) {
            keys.push(step.key.clone());
        }
        for key in keys {
            if !seen.insert(key.clone()) {
                return Err(InventoryError::definition(
                    ctx,
                    DefinitionErrorKind::DuplicateKey { key },
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Part;

    fn kind_of(result: Result<Questionnaire>) -> DefinitionErrorKind {
        match result {
            Err(InventoryError::Definition { source, .. }) => source,
            other => panic!("expected definition error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_sequence() {
        assert_eq!(
            kind_of(Questionnaire::with_steps(vec![])),
            DefinitionErrorKind::NoSteps
        );
    }

    #[test]
    fn test_rejects_duplicate_step_keys() {
        let steps = vec![
            Step::text_area("A", "q", "notes", None),
            Step::text_area("B", "q", "notes", None),
        ];
        assert_eq!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::DuplicateKey {
                key: "notes".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_collision_with_followup_key() {
        let steps = vec![
            Step::text_area("A", "q", "values", Some("why?")),
            Step::text_area("B", "q", "values_sub", None),
        ];
        assert_eq!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::DuplicateKey {
                key: "values_sub".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_part_key_colliding_with_step_key() {
        let steps = vec![
            Step::select("A", "q", "period", ["x"]),
            Step::multipart("B", "q", "parts", vec![Part::new("L", "q", "period")]),
        ];
        assert!(matches!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::DuplicateKey { .. }
        ));
    }

    #[test]
    fn test_rejects_select_without_options() {
        let steps = vec![Step::select("A", "q", "period", Vec::<String>::new())];
        assert_eq!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::NoOptions {
                key: "period".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_multipart_without_parts() {
        let steps = vec![Step::multipart("A", "q", "wellbeing", vec![])];
        assert_eq!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::NoParts {
                key: "wellbeing".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_empty_key() {
        let steps = vec![Step::text_area("A", "q", "", None)];
        assert_eq!(
            kind_of(Questionnaire::with_steps(steps)),
            DefinitionErrorKind::EmptyKey { index: 0 }
        );
    }

    #[test]
    fn test_yaml_definition_uses_default_labels() {
        let yaml = r"
steps:
  - section: Only
    question: Anything?
    type: textArea
    key: only
";
        let questionnaire = Questionnaire::from_yaml_str(yaml).expect("valid definition");
        assert_eq!(questionnaire.len(), 1);
        assert_eq!(questionnaire.labels(), &Labels::default());
    }

    #[test]
    fn test_yaml_definition_keeps_validation_kind() {
        let yaml = r"
steps:
  - section: A
    question: q
    type: textArea
    key: same
  - section: B
    question: q
    type: textArea
    key: same
";
        assert_eq!(
            kind_of(Questionnaire::from_yaml_str(yaml)),
            DefinitionErrorKind::DuplicateKey {
                key: "same".to_string()
            }
        );
    }

    #[test]
    fn test_json_definition_keeps_validation_kind() {
        assert_eq!(
            kind_of(Questionnaire::from_json_str(r#"{"steps": []}"#)),
            DefinitionErrorKind::NoSteps
        );
    }

    #[test]
    fn test_malformed_yaml_is_invalid_yaml() {
        assert!(matches!(
            kind_of(Questionnaire::from_yaml_str("steps: [unterminated")),
            DefinitionErrorKind::InvalidYaml(_)
        ));
    }

    #[test]
    fn test_direct_deserialization_still_validates() {
        let yaml = "steps: []\n";
        assert!(serde_yaml::from_str::<Questionnaire>(yaml).is_err());
    }

    #[test]
    fn test_answer_keys_in_step_order() {
        let steps = vec![
            Step::select("A", "q", "period", ["x"]),
            Step::text_area("B", "q", "values", Some("why?")),
        ];
        let questionnaire = Questionnaire::with_steps(steps).expect("valid");
        assert_eq!(
            questionnaire.answer_keys(),
            vec!["period", "values", "values_sub"]
        );
    }
}
