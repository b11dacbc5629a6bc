//! Submit Questionnaire use case
//!
//! Stores a base prompt together with its questionnaire answers.

use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use promptsmith_domain::{PromptDetail, QuestionnaireAnswer};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SubmitQuestionnaireError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the SubmitQuestionnaire use case
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireInput {
    pub base_prompt: String,
    pub user_id: Option<u64>,
    pub answers: Vec<QuestionnaireAnswer>,
}

pub struct SubmitQuestionnaireUseCase<R: HistoryRepository + ?Sized> {
    repository: Arc<R>,
    logger: Arc<dyn InteractionLogger>,
}

impl<R: HistoryRepository + ?Sized> SubmitQuestionnaireUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            logger: Arc::new(NoInteractionLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(
        &self,
        input: SubmitQuestionnaireInput,
    ) -> Result<PromptDetail, SubmitQuestionnaireError> {
        let prompt = self
            .repository
            .create_prompt(&input.base_prompt, input.user_id)
            .await?;
        let answers = self
            .repository
            .add_answers(prompt.id, &input.answers)
            .await?;

        info!(
            "Stored prompt {} with {} answers",
            prompt.id,
            answers.len()
        );
        self.logger.log(InteractionEvent::new(
            "prompt_submitted",
            serde_json::json!({
                "prompt_id": prompt.id,
                "user_id": prompt.user_id,
                "base_prompt": prompt.base_prompt,
                "answers": input.answers,
            }),
        ));

        Ok(PromptDetail {
            prompt,
            answers,
            outputs: Vec::new(),
        })
    }
}
