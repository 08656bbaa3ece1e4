//! Quiz question value object

use serde::{Deserialize, Serialize};

/// A single yes/no quiz prompt (Value Object)
///
/// `weight` is the score delta for *disagreeing*; agreeing applies its
/// negation. The questionnaire file names the prompt `question` and the
/// weight `point`, both accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question id; 0 when the source file omits it
    #[serde(default)]
    pub id: u32,
    /// Issue category (e.g. "Economic Policy")
    #[serde(default)]
    pub issue_area: String,
    /// Prompt text shown to the user
    #[serde(alias = "question")]
    pub prompt: String,
    /// Signed score contribution
    #[serde(alias = "point")]
    pub weight: i32,
}

impl Question {
    pub fn new(id: u32, issue_area: impl Into<String>, prompt: impl Into<String>, weight: i32) -> Self {
        Self {
            id,
            issue_area: issue_area.into(),
            prompt: prompt.into(),
            weight,
        }
    }

    /// Score delta applied by an answer to this question.
    ///
    /// `None` when agreeing with an `i32::MIN` weight.
    pub fn delta(&self, agree: bool) -> Option<i32> {
        if agree {
            self.weight.checked_neg()
        } else {
            Some(self.weight)
        }
    }

    /// `score` after an answer to this question, `None` on overflow
    pub fn apply(&self, score: i32, agree: bool) -> Option<i32> {
        if agree {
            score.checked_sub(self.weight)
        } else {
            score.checked_add(self.weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign() {
        let q = Question::new(1, "Health Care", "Should...?", 5);
        assert_eq!(q.delta(true), Some(-5));
        assert_eq!(q.delta(false), Some(5));

        let negative = Question::new(2, "Economy", "Should...?", -3);
        assert_eq!(negative.delta(true), Some(3));
        assert_eq!(negative.delta(false), Some(-3));
    }

    #[test]
    fn test_extreme_weights() {
        let min = Question::new(1, "Economy", "Should...?", i32::MIN);
        assert_eq!(min.delta(true), None);
        assert_eq!(min.delta(false), Some(i32::MIN));
        assert_eq!(min.apply(-1, true), Some(i32::MAX));
        assert_eq!(min.apply(0, true), None);

        let max = Question::new(2, "Economy", "Should...?", i32::MAX);
        assert_eq!(max.apply(1, false), None);
        assert_eq!(max.apply(-1, false), Some(i32::MAX - 1));
    }

    #[test]
    fn test_deserialize_questionnaire_shape() {
        let json = r#"{"id": 4, "issueArea": "Education", "question": "Free college?", "point": 2}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 4);
        assert_eq!(q.issue_area, "Education");
        assert_eq!(q.prompt, "Free college?");
        assert_eq!(q.weight, 2);
    }

    #[test]
    fn test_missing_issue_area_defaults_empty() {
        let json = r#"{"id": 1, "prompt": "P", "weight": 1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.issue_area.is_empty());
    }
}
