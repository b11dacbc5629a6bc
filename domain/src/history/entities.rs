//! History entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::answer::QuestionnaireAnswer;

/// Identifier of a stored prompt
pub type PromptId = u64;

/// A submitted base prompt (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: PromptId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub base_prompt: String,
    pub created_at: DateTime<Utc>,
}

/// One stored questionnaire answer (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: u64,
    pub prompt_id: PromptId,
    pub question: String,
    pub answer: String,
}

impl AnswerRecord {
    pub fn to_answer(&self) -> QuestionnaireAnswer {
        QuestionnaireAnswer::new(self.question.clone(), self.answer.clone())
    }
}

/// Text a model produced for a prompt (Entity)
///
/// `model_name` is the friendly catalog name the output was requested under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOutputRecord {
    pub id: u64,
    pub prompt_id: PromptId,
    pub model_name: String,
    pub output: String,
    pub created_at: DateTime<Utc>,
}

/// A prompt with everything recorded against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDetail {
    pub prompt: PromptRecord,
    pub answers: Vec<AnswerRecord>,
    pub outputs: Vec<ModelOutputRecord>,
}

impl PromptDetail {
    /// Answers in the shape the rule engines consume
    pub fn questionnaire_answers(&self) -> Vec<QuestionnaireAnswer> {
        self.answers.iter().map(AnswerRecord::to_answer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> PromptDetail {
        let now = Utc::now();
        PromptDetail {
            prompt: PromptRecord {
                id: 7,
                user_id: None,
                base_prompt: "Write a haiku".to_string(),
                created_at: now,
            },
            answers: vec![AnswerRecord {
                id: 1,
                prompt_id: 7,
                question: "Tone?".to_string(),
                answer: "wistful".to_string(),
            }],
            outputs: vec![],
        }
    }

    #[test]
    fn test_questionnaire_answers_preserve_pairs() {
        let answers = detail().questionnaire_answers();
        assert_eq!(answers, vec![QuestionnaireAnswer::new("Tone?", "wistful")]);
    }

    #[test]
    fn test_user_id_omitted_when_absent() {
        let json = serde_json::to_value(detail().prompt).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["base_prompt"], "Write a haiku");
    }
}
