//! Get Model Response use case
//!
//! Optimizes a stored prompt for one catalog model, dispatches it and
//! records the output.

use crate::ports::dispatch_gateway::{DispatchError, DispatchGateway};
use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use crate::use_cases::shared::{LoadError, load_detail};
use promptsmith_domain::core::string::truncate;
use promptsmith_domain::{CatalogModel, PromptId, optimize_prompt};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while getting a model response
#[derive(Error, Debug)]
pub enum GetModelResponseError {
    #[error("Model '{0}' is not supported")]
    UnsupportedModel(String),

    #[error("Prompt with ID {0} not found")]
    PromptNotFound(PromptId),

    #[error("LLM API call failed: {}", .0.sentinel())]
    DispatchFailed(DispatchError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GetModelResponseError {
    fn from_load(e: LoadError) -> Self {
        match e {
            LoadError::NotFound(id) => Self::PromptNotFound(id),
            LoadError::Repository(e) => Self::Repository(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetModelResponseInput {
    pub prompt_id: PromptId,
    /// Friendly catalog name as typed by the caller
    pub model_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetModelResponseOutput {
    pub prompt_id: PromptId,
    pub model_name: String,
    pub optimized_prompt_used: String,
    pub output: String,
}

pub struct GetModelResponseUseCase<G, R>
where
    G: DispatchGateway + ?Sized,
    R: HistoryRepository + ?Sized,
{
    gateway: Arc<G>,
    repository: Arc<R>,
    logger: Arc<dyn InteractionLogger>,
}

impl<G, R> GetModelResponseUseCase<G, R>
where
    G: DispatchGateway + ?Sized,
    R: HistoryRepository + ?Sized,
{
    pub fn new(gateway: Arc<G>, repository: Arc<R>) -> Self {
        Self {
            gateway,
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
        input: GetModelResponseInput,
    ) -> Result<GetModelResponseOutput, GetModelResponseError> {
        let model: CatalogModel = input
            .model_name
            .parse()
            .map_err(|_| GetModelResponseError::UnsupportedModel(input.model_name.clone()))?;

        let detail = load_detail(self.repository.as_ref(), input.prompt_id)
            .await
            .map_err(GetModelResponseError::from_load)?;
        let answers = detail.questionnaire_answers();
        let optimized = optimize_prompt(&detail.prompt.base_prompt, &answers, Some(model.as_str()));

        info!(
            "Dispatching prompt {} to {} ({})",
            input.prompt_id,
            model,
            truncate(&optimized, 50)
        );
        self.logger.log(InteractionEvent::new(
            "dispatch_request",
            serde_json::json!({
                "prompt_id": input.prompt_id,
                "model": model.as_str(),
                "prompt": optimized,
            }),
        ));

        let output = match self.gateway.dispatch(&optimized, &model).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Dispatch to {} failed: {}", model, e);
                self.logger.log(InteractionEvent::new(
                    "dispatch_failed",
                    serde_json::json!({
                        "prompt_id": input.prompt_id,
                        "model": model.as_str(),
                        "error": e.sentinel(),
                    }),
                ));
                return Err(GetModelResponseError::DispatchFailed(e));
            }
        };

        self.repository
            .add_model_output(input.prompt_id, model.as_str(), &output)
            .await?;
        self.logger.log(InteractionEvent::new(
            "model_output",
            serde_json::json!({
                "prompt_id": input.prompt_id,
                "model": model.as_str(),
                "output": output,
            }),
        ));

        Ok(GetModelResponseOutput {
            prompt_id: input.prompt_id,
            model_name: model.as_str().to_string(),
            optimized_prompt_used: optimized,
            output,
        })
    }
}
