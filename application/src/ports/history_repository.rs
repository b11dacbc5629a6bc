//! History repository port
//!
//! Storage for submitted prompts, their answers and model outputs.

use async_trait::async_trait;
use promptsmith_domain::{
    AnswerRecord, ModelOutputRecord, PromptDetail, PromptId, PromptRecord, QuestionnaireAnswer,
};
use thiserror::Error;

/// Errors that can occur in history storage
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Prompt with ID {0} not found")]
    NotFound(PromptId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository for interaction history
///
/// Listing is ordered by ascending prompt id. Child records (answers and
/// outputs) keep insertion order. Writing children for an unknown prompt
/// fails with [`RepositoryError::NotFound`].
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn create_prompt(
        &self,
        base_prompt: &str,
        user_id: Option<u64>,
    ) -> Result<PromptRecord, RepositoryError>;

    async fn get_prompt(&self, id: PromptId) -> Result<Option<PromptRecord>, RepositoryError>;

    async fn list_prompts(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError>;

    async fn list_prompts_by_user(
        &self,
        user_id: u64,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError>;

    async fn add_answers(
        &self,
        prompt_id: PromptId,
        answers: &[QuestionnaireAnswer],
    ) -> Result<Vec<AnswerRecord>, RepositoryError>;

    async fn answers_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<AnswerRecord>, RepositoryError>;

    async fn add_model_output(
        &self,
        prompt_id: PromptId,
        model_name: &str,
        output: &str,
    ) -> Result<ModelOutputRecord, RepositoryError>;

    async fn outputs_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<ModelOutputRecord>, RepositoryError>;

    /// Prompt with its answers and outputs, or `None` if the prompt is unknown
    async fn prompt_detail(
        &self,
        prompt_id: PromptId,
    ) -> Result<Option<PromptDetail>, RepositoryError> {
        let Some(prompt) = self.get_prompt(prompt_id).await? else {
            return Ok(None);
        };
        let answers = self.answers_for_prompt(prompt_id).await?;
        let outputs = self.outputs_for_prompt(prompt_id).await?;
        Ok(Some(PromptDetail {
            prompt,
            answers,
            outputs,
        }))
    }
}
