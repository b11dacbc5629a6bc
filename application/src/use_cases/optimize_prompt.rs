//! Optimize Prompt use case

use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::use_cases::shared::{LoadError, PromptSource, resolve_inputs};
use promptsmith_domain::{PromptId, optimize_prompt};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum OptimizePromptError {
    #[error("Prompt with ID {0} not found")]
    PromptNotFound(PromptId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl OptimizePromptError {
    fn from_load(e: LoadError) -> Self {
        match e {
            LoadError::NotFound(id) => Self::PromptNotFound(id),
            LoadError::Repository(e) => Self::Repository(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizePromptInput {
    pub source: PromptSource,
    /// Catalog name or free text; only picks a vendor flourish
    pub target_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizePromptOutput {
    pub base_prompt: String,
    pub optimized_prompt: String,
}

pub struct OptimizePromptUseCase<R: HistoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: HistoryRepository + ?Sized> OptimizePromptUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        input: OptimizePromptInput,
    ) -> Result<OptimizePromptOutput, OptimizePromptError> {
        let inputs = resolve_inputs(self.repository.as_ref(), input.source)
            .await
            .map_err(OptimizePromptError::from_load)?;
        let optimized_prompt = optimize_prompt(
            &inputs.base_prompt,
            &inputs.answers,
            input.target_model.as_deref(),
        );
        debug!(
            "Optimized prompt from {} answers ({} -> {} chars)",
            inputs.answers.len(),
            inputs.base_prompt.len(),
            optimized_prompt.len()
        );
        Ok(OptimizePromptOutput {
            base_prompt: inputs.base_prompt,
            optimized_prompt,
        })
    }
}
