//! Compare Models use case
//!
//! Sends one stored prompt to several catalog models concurrently. Each
//! model receives the prompt optimized with itself as the target.

use crate::ports::dispatch_gateway::{DispatchError, DispatchGateway};
use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::{LoadError, load_detail};
use promptsmith_domain::{
    CatalogModel, PromptId, RecommenderOptions, optimize_prompt, recommend_models_with,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CompareModelsError {
    #[error("Model '{0}' is not supported")]
    UnsupportedModel(String),

    #[error("Prompt with ID {0} not found")]
    PromptNotFound(PromptId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CompareModelsError {
    fn from_load(e: LoadError) -> Self {
        match e {
            LoadError::NotFound(id) => Self::PromptNotFound(id),
            LoadError::Repository(e) => Self::Repository(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompareModelsInput {
    pub prompt_id: PromptId,
    /// Friendly catalog names; empty means "the recommended models"
    pub models: Vec<String>,
}

/// Outcome for one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRun {
    pub model: CatalogModel,
    pub optimized_prompt_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// `Error: `-prefixed failure text. Set together with `output` when the
    /// model answered but the reply could not be stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelRun {
    pub fn succeeded(&self) -> bool {
        self.output.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareModelsOutput {
    pub prompt_id: PromptId,
    /// Ordered by catalog priority
    pub runs: Vec<ModelRun>,
}

pub struct CompareModelsUseCase<G, R>
where
    G: DispatchGateway + ?Sized + 'static,
    R: HistoryRepository + ?Sized,
{
    gateway: Arc<G>,
    repository: Arc<R>,
    options: RecommenderOptions,
    logger: Arc<dyn InteractionLogger>,
}

impl<G, R> CompareModelsUseCase<G, R>
where
    G: DispatchGateway + ?Sized + 'static,
    R: HistoryRepository + ?Sized,
{
    pub fn new(gateway: Arc<G>, repository: Arc<R>, options: RecommenderOptions) -> Self {
        Self {
            gateway,
            repository,
            options,
            logger: Arc::new(NoInteractionLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: CompareModelsInput,
    ) -> Result<CompareModelsOutput, CompareModelsError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: CompareModelsInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CompareModelsOutput, CompareModelsError> {
        let mut requested = BTreeSet::new();
        for name in &input.models {
            let model: CatalogModel = name
                .parse()
                .map_err(|_| CompareModelsError::UnsupportedModel(name.clone()))?;
            requested.insert(model);
        }

        let detail = load_detail(self.repository.as_ref(), input.prompt_id)
            .await
            .map_err(CompareModelsError::from_load)?;
        let answers = detail.questionnaire_answers();

        let models: Vec<CatalogModel> = if requested.is_empty() {
            recommend_models_with(&detail.prompt.base_prompt, &answers, &self.options)
        } else {
            requested.into_iter().collect()
        };

        info!(
            "Comparing prompt {} across {} models",
            input.prompt_id,
            models.len()
        );
        progress.on_dispatch_start(models.len());

        let mut join_set = JoinSet::new();
        let mut pending: BTreeMap<CatalogModel, String> = BTreeMap::new();
        for model in &models {
            let gateway = Arc::clone(&self.gateway);
            let model = *model;
            let prompt = optimize_prompt(&detail.prompt.base_prompt, &answers, Some(model.as_str()));
            pending.insert(model, prompt.clone());

            join_set.spawn(async move {
                let result = gateway.dispatch(&prompt, &model).await;
                (model, prompt, result)
            });
        }

        let mut runs = Vec::with_capacity(models.len());
        let mut join_failures = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((model, prompt, result)) => {
                    pending.remove(&model);
                    progress.on_model_complete(&model, result.is_ok());
                    runs.push(self.record_run(input.prompt_id, model, prompt, result).await);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    join_failures.push(e.to_string());
                }
            }
        }

        // Tasks that never returned leave their model behind in `pending`
        let reason = join_failures.join("; ");
        for (model, prompt) in pending {
            progress.on_model_complete(&model, false);
            let error = DispatchError::Other(format!("Dispatch task failed: {reason}"));
            runs.push(self.record_run(input.prompt_id, model, prompt, Err(error)).await);
        }
        progress.on_dispatch_complete();

        runs.sort_by_key(|run| run.model);
        Ok(CompareModelsOutput {
            prompt_id: input.prompt_id,
            runs,
        })
    }

    /// Persist a successful reply and turn the result into a [`ModelRun`].
    ///
    /// A reply that cannot be stored keeps its output and carries the
    /// storage failure in `error`.
    async fn record_run(
        &self,
        prompt_id: PromptId,
        model: CatalogModel,
        prompt: String,
        result: Result<String, DispatchError>,
    ) -> ModelRun {
        match result {
            Ok(output) => {
                info!("Model {} responded successfully", model);
                let error = match self
                    .repository
                    .add_model_output(prompt_id, model.as_str(), &output)
                    .await
                {
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Failed to store output of {}: {}", model, e);
                        Some(format!("Error: Failed to store output: {e}"))
                    }
                };
                self.logger.log(InteractionEvent::new(
                    "model_output",
                    serde_json::json!({
                        "prompt_id": prompt_id,
                        "model": model.as_str(),
                        "output": output,
                        "stored": error.is_none(),
                    }),
                ));
                ModelRun {
                    model,
                    optimized_prompt_used: prompt,
                    output: Some(output),
                    error,
                }
            }
            Err(e) => {
                warn!("Model {} failed: {}", model, e);
                self.logger.log(InteractionEvent::new(
                    "dispatch_failed",
                    serde_json::json!({
                        "prompt_id": prompt_id,
                        "model": model.as_str(),
                        "error": e.sentinel(),
                    }),
                ));
                ModelRun {
                    model,
                    optimized_prompt_used: prompt,
                    output: None,
                    error: Some(e.sentinel()),
                }
            }
        }
    }
}
