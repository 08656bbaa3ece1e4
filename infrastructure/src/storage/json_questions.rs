//! Questionnaire loaded from a JSON file.
//!
//! Accepts either a bare array of questions or an object with a
//! `questions` array.

use async_trait::async_trait;
use poligrade_application::ports::question_source::{QuestionSource, QuestionSourceError};
use poligrade_domain::Question;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionnaireFile {
    List(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

/// Question source reading a JSON questionnaire on every load
pub struct JsonQuestionSource {
    path: PathBuf,
}

impl JsonQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Questions without an id are numbered in file order after the
    /// largest explicit id. Duplicate explicit ids are rejected.
    fn parse(content: &str) -> Result<Vec<Question>, String> {
        let file = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let mut questions = match file {
            QuestionnaireFile::List(questions) => questions,
            QuestionnaireFile::Wrapped { questions } => questions,
        };

        let mut seen = HashSet::new();
        for question in questions.iter().filter(|q| q.id != 0) {
            if !seen.insert(question.id) {
                return Err(format!("duplicate question id {}", question.id));
            }
        }

        let mut next = seen.iter().copied().max().unwrap_or(0);
        for question in questions.iter_mut().filter(|q| q.id == 0) {
            next = next
                .checked_add(1)
                .ok_or_else(|| "no question id left to assign".to_string())?;
            question.id = next;
        }
        Ok(questions)
    }
}

#[async_trait]
impl QuestionSource for JsonQuestionSource {
    async fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    QuestionSourceError::NotFound(self.path.display().to_string())
                }
                _ => QuestionSourceError::Io(format!("{}: {}", self.path.display(), e)),
            })?;

        let questions = Self::parse(&content).map_err(|e| {
            QuestionSourceError::Malformed(format!("{}: {}", self.path.display(), e))
        })?;
        debug!("Read {} questions from {}", questions.len(), self.path.display());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questionnaire.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "issueArea": "Economy", "prompt": "Cut taxes?", "weight": 3},
                {"id": 2, "question": "Ban assault weapons?", "point": 4}
            ]"#,
        )
        .unwrap();

        let questions = JsonQuestionSource::new(&path).load_questions().await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].issue_area, "Economy");
        assert_eq!(questions[1].prompt, "Ban assault weapons?");
        assert_eq!(questions[1].weight, 4);
    }

    #[tokio::test]
    async fn test_load_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questionnaire.json");
        std::fs::write(
            &path,
            r#"{"questions": [{"id": 1, "prompt": "Raise the minimum wage?", "weight": 2}]}"#,
        )
        .unwrap();

        let questions = JsonQuestionSource::new(&path).load_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_missing_ids_numbered_by_position() {
        let questions = JsonQuestionSource::parse(
            r#"[
                {"issueArea": "Economy", "question": "Cut taxes?", "point": 3},
                {"issueArea": "Health", "question": "Expand Medicare?", "point": 2}
            ]"#,
        )
        .unwrap();
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 2);
    }

    #[test]
    fn test_missing_ids_follow_explicit_ids() {
        let questions = JsonQuestionSource::parse(
            r#"[
                {"question": "Cut taxes?", "point": 3},
                {"id": 1, "question": "Expand Medicare?", "point": 2},
                {"question": "Raise the minimum wage?", "point": 1}
            ]"#,
        )
        .unwrap();
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = JsonQuestionSource::parse(
            r#"[
                {"id": 4, "question": "Cut taxes?", "point": 3},
                {"id": 4, "question": "Expand Medicare?", "point": 2}
            ]"#,
        )
        .unwrap_err();
        assert!(err.contains("duplicate question id 4"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questionnaire.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "prompt": "A?", "weight": 1}, {"id": 1, "prompt": "B?", "weight": 2}]"#,
        )
        .unwrap();

        let result = JsonQuestionSource::new(&path).load_questions().await;
        assert!(matches!(result, Err(QuestionSourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonQuestionSource::new(dir.path().join("nope.json"))
            .load_questions()
            .await;
        assert!(matches!(result, Err(QuestionSourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questionnaire.json");
        std::fs::write(&path, r#"[{"id": 1}]"#).unwrap();

        let result = JsonQuestionSource::new(&path).load_questions().await;
        assert!(matches!(result, Err(QuestionSourceError::Malformed(_))));
    }
}
