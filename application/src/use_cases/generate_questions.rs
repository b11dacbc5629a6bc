//! Generate Questions use case

use crate::config::WorkflowConfig;
use promptsmith_domain::{QuestionSet, generate_questions_with};
use tracing::debug;

/// Input for the GenerateQuestions use case
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    pub base_prompt: String,
    /// Per-call seed, overriding the configured one
    pub seed: Option<u64>,
}

impl GenerateQuestionsInput {
    pub fn new(base_prompt: impl Into<String>) -> Self {
        Self {
            base_prompt: base_prompt.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Use case for drawing clarifying questions
pub struct GenerateQuestionsUseCase {
    config: WorkflowConfig,
}

impl GenerateQuestionsUseCase {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: GenerateQuestionsInput) -> QuestionSet {
        let mut rng = self.config.questionnaire_rng(input.seed);
        let questions =
            generate_questions_with(&input.base_prompt, &self.config.questionnaire, &mut rng);
        debug!(
            "Generated {} questions (seeded: {})",
            questions.len(),
            input.seed.or(self.config.questionnaire_seed).is_some()
        );
        questions
    }
}
