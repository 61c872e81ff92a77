use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option id(s) for one question. Untagged so the wire shape stays
/// `"q1": "q1_health"` for single answers and `"q2": ["q2_nutrition"]` for
/// multi-select answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// The selected option id when exactly one is expected.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(option_id) => Some(option_id),
            AnswerValue::Multiple(_) => None,
        }
    }

    /// Every selected option id, regardless of answer shape.
    pub fn selections(&self) -> &[String] {
        match self {
            AnswerValue::Single(option_id) => std::slice::from_ref(option_id),
            AnswerValue::Multiple(option_ids) => option_ids,
        }
    }
}

/// A user's raw quiz submission: question id mapped to the selection made.
/// Unknown question ids are carried and ignored by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers(pub BTreeMap<String, AnswerValue>);

impl QuizAnswers {
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Single-choice selection for `question_id`, if one was given.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_single)
    }

    pub fn insert_single(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        self.0
            .insert(question_id.into(), AnswerValue::Single(option_id.into()));
    }

    pub fn insert_multiple<I, S>(&mut self, question_id: impl Into<String>, option_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let option_ids = option_ids.into_iter().map(Into::into).collect();
        self.0
            .insert(question_id.into(), AnswerValue::Multiple(option_ids));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_answer_shapes() {
        let raw = r#"{"q1": "q1_health", "q2": ["q2_nutrition", "q2_sleep"]}"#;
        let answers: QuizAnswers = serde_json::from_str(raw).expect("answers parse");

        assert_eq!(answers.single("q1"), Some("q1_health"));
        assert_eq!(
            answers.get("q2").map(AnswerValue::selections),
            Some(&["q2_nutrition".to_string(), "q2_sleep".to_string()][..])
        );
    }

    #[test]
    fn single_accessor_rejects_multi_select_answers() {
        let mut answers = QuizAnswers::default();
        answers.insert_multiple("q2", ["q2_nutrition"]);

        assert_eq!(answers.single("q2"), None);
        assert_eq!(answers.get("q2").map(|a| a.selections().len()), Some(1));
    }

    #[test]
    fn selections_treat_single_answers_as_one_element() {
        let answer = AnswerValue::Single("q3_serious".to_string());
        assert_eq!(answer.selections(), &["q3_serious".to_string()][..]);
    }
}
