//! Rule-engine settings (`[questionnaire]` and `[recommender]` sections)

use promptsmith_domain::{ConfigIssue, ConfigIssueCode, MatchMode, QuestionnaireOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionnaireConfig {
    /// Fixed seed for reproducible question sets
    pub seed: Option<u64>,
    /// Ask about libraries/frameworks for code prompts
    pub library_question: bool,
}

impl FileQuestionnaireConfig {
    pub fn to_options(&self) -> QuestionnaireOptions {
        QuestionnaireOptions {
            library_question: self.library_question,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommenderConfig {
    /// "substring" or "ranked-keywords"
    pub match_mode: String,
}

impl Default for FileRecommenderConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring.as_str().to_string(),
        }
    }
}

impl FileRecommenderConfig {
    /// Parse the match mode, falling back to substring matching on unknown values.
    pub fn parse_match_mode(&self) -> (MatchMode, Vec<ConfigIssue>) {
        match self.match_mode.parse() {
            Ok(mode) => (mode, vec![]),
            Err(_) => (
                MatchMode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::UnknownMatchMode,
                    format!(
                        "recommender.match_mode: unknown value '{}', falling back to 'substring'",
                        self.match_mode
                    ),
                )],
            ),
        }
    }
}
