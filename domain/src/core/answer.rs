//! Questionnaire answer value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DomainError;

/// Answers that carry no signal for the rule engines.
///
/// Compared after trimming and lowercasing; the empty answer is also treated
/// as no signal.
pub const NO_SIGNAL_ANSWERS: [&str; 4] = ["none", "n/a", "not sure", "any"];

/// One clarifying (question, answer) pair (Value Object)
///
/// A sequence of these represents one round of clarification for a base
/// prompt; order follows the order the questions were asked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionnaireAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Whether the answer should be ignored by every rule.
    pub fn is_no_signal(&self) -> bool {
        let normalized = self.answer.trim().to_lowercase();
        normalized.is_empty() || NO_SIGNAL_ANSWERS.contains(&normalized.as_str())
    }

    /// Lowercased question text
    pub fn question_lower(&self) -> String {
        self.question.to_lowercase()
    }

    /// Lowercased answer text
    pub fn answer_lower(&self) -> String {
        self.answer.to_lowercase()
    }
}

impl FromStr for QuestionnaireAnswer {
    type Err = DomainError;

    /// Parse the `question=answer` shorthand used on the command line.
    ///
    /// Splits on the first `=`; the question part must not be blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (question, answer) = s
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidAnswer(format!("expected QUESTION=ANSWER, got '{s}'")))?;
        if question.trim().is_empty() {
            return Err(DomainError::InvalidAnswer(format!(
                "question part is empty in '{s}'"
            )));
        }
        Ok(Self::new(question.trim(), answer.trim()))
    }
}
