//! Browse History use case

use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::use_cases::shared::{LoadError, load_detail};
use promptsmith_domain::{PromptDetail, PromptId, PromptRecord};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseHistoryError {
    #[error("Prompt with ID {0} not found")]
    PromptNotFound(PromptId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Paging for prompt listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPromptsInput {
    pub user_id: Option<u64>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for ListPromptsInput {
    fn default() -> Self {
        Self {
            user_id: None,
            skip: 0,
            limit: 100,
        }
    }
}

pub struct BrowseHistoryUseCase<R: HistoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: HistoryRepository + ?Sized> BrowseHistoryUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        input: ListPromptsInput,
    ) -> Result<Vec<PromptRecord>, BrowseHistoryError> {
        let prompts = match input.user_id {
            Some(user_id) => {
                self.repository
                    .list_prompts_by_user(user_id, input.skip, input.limit)
                    .await?
            }
            None => self.repository.list_prompts(input.skip, input.limit).await?,
        };
        Ok(prompts)
    }

    pub async fn detail(&self, prompt_id: PromptId) -> Result<PromptDetail, BrowseHistoryError> {
        load_detail(self.repository.as_ref(), prompt_id)
            .await
            .map_err(|e| match e {
                LoadError::NotFound(id) => BrowseHistoryError::PromptNotFound(id),
                LoadError::Repository(e) => BrowseHistoryError::Repository(e),
            })
    }
}
