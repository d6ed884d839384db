//! The built-in five-step life inventory.

use super::questionnaire::{Labels, Questionnaire};
use super::step::{Part, Step};

/// Steps of the built-in inventory, in display order.
#[must_use]
pub fn builtin_steps() -> Vec<Step> {
    vec![
        Step::select(
            "時期選択",
            "まず、振り返りたい時期を選んでください",
            "period",
            ["小学生", "中学生", "高校生", "現在"],
        ),
        Step::text_area(
            "人間関係",
            "その時期の人間関係について、具体的なエピソードを教えてください",
            "relationships",
            Some("そのエピソードは、あなたにどのような影響を与えましたか？"),
        ),
        Step::text_area(
            "趣味・自己成長",
            "その時期に打ち込んでいたことは何ですか？",
            "growth",
            Some("それによって得られた結果と内的な変化を教えてください"),
        ),
        Step::text_area(
            "精神的な幸福",
            "その時期のあなたは、どのような価値観を持っていましたか？",
            "values",
            Some("なぜそのような価値観を持つようになったと思いますか？"),
        ),
        Step::multipart(
            "Well-being分析",
            "以下の要素について、詳しく教えてください：",
            "wellbeing",
            vec![
                Part::new("没頭", "何に没頭し、なぜ没頭できましたか？", "immersion"),
                Part::new("意義性", "何に意味を感じ、なぜそう感じましたか？", "meaning"),
                Part::new("達成感", "どんな成長や達成を感じましたか？", "achievement"),
                Part::new("仲間", "どんな関係性があり、何を共有できましたか？", "companions"),
                Part::new("欲求の解消", "どんな欲求があり、どう満たされましたか？", "desires"),
            ],
        ),
    ]
}

impl Questionnaire {
    /// The built-in inventory with its default labels.
    ///
    /// Skips runtime validation; see `builtin_passes_validation`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_steps(), Labels::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepKind;

    #[test]
    fn builtin_passes_validation() {
        let validated = Questionnaire::with_steps(builtin_steps()).expect("builtin is valid");
        assert_eq!(validated, Questionnaire::builtin());
    }

    #[test]
    fn builtin_has_five_steps_in_order() {
        let q = Questionnaire::builtin();
        let kinds: Vec<&str> = q.steps().iter().map(Step::kind_name).collect();
        assert_eq!(
            kinds,
            vec!["select", "textArea", "textArea", "textArea", "multipart"]
        );
        assert_eq!(q.steps()[0].key, "period");
        assert_eq!(q.steps()[1].key, "relationships");
    }

    #[test]
    fn builtin_multipart_parts() {
        let q = Questionnaire::builtin();
        let StepKind::Multipart { parts } = &q.steps()[4].kind else {
            panic!("last step should be multipart");
        };
        let keys: Vec<&str> = parts.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["immersion", "meaning", "achievement", "companions", "desires"]
        );
    }
}
