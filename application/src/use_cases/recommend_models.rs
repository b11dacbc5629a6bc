//! Recommend Models use case

use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::use_cases::shared::{LoadError, PromptSource, resolve_inputs};
use promptsmith_domain::{CatalogModel, PromptId, RecommenderOptions, recommend_models_with};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RecommendModelsError {
    #[error("Prompt with ID {0} not found")]
    PromptNotFound(PromptId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RecommendModelsError {
    fn from_load(e: LoadError) -> Self {
        match e {
            LoadError::NotFound(id) => Self::PromptNotFound(id),
            LoadError::Repository(e) => Self::Repository(e),
        }
    }
}

pub struct RecommendModelsUseCase<R: HistoryRepository + ?Sized> {
    repository: Arc<R>,
    options: RecommenderOptions,
}

impl<R: HistoryRepository + ?Sized> RecommendModelsUseCase<R> {
    pub fn new(repository: Arc<R>, options: RecommenderOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    pub async fn execute(
        &self,
        source: PromptSource,
    ) -> Result<Vec<CatalogModel>, RecommendModelsError> {
        let inputs = resolve_inputs(self.repository.as_ref(), source)
            .await
            .map_err(RecommendModelsError::from_load)?;
        let models = recommend_models_with(&inputs.base_prompt, &inputs.answers, &self.options);
        debug!(
            "Recommended {:?} ({} mode)",
            models.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
            self.options.match_mode
        );
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryRepository;
    use promptsmith_domain::{MatchMode, QuestionnaireAnswer};

    #[tokio::test]
    async fn test_recommend_ad_hoc() {
        let use_case =
            RecommendModelsUseCase::new(Arc::new(MemoryRepository::new()), Default::default());
        let models = use_case
            .execute(PromptSource::ad_hoc("Write a poem about the sea.", vec![]))
            .await
            .unwrap();
        assert_eq!(models, vec![CatalogModel::ClaudeOpus4, CatalogModel::Gpt41]);
    }

    #[tokio::test]
    async fn test_recommend_stored_prompt_reads_answers() {
        let repository = Arc::new(MemoryRepository::new());
        let prompt = repository.create_prompt("Hello there", None).await.unwrap();
        repository
            .add_answers(prompt.id, &[QuestionnaireAnswer::new("Tone?", "formal")])
            .await
            .unwrap();
        let use_case = RecommendModelsUseCase::new(repository, Default::default());
        let models = use_case.execute(PromptSource::Stored(prompt.id)).await.unwrap();
        assert_eq!(models, vec![CatalogModel::ClaudeOpus4]);
    }

    #[tokio::test]
    async fn test_match_mode_option_is_applied() {
        let options = RecommenderOptions {
            match_mode: MatchMode::RankedKeywords,
        };
        let use_case = RecommendModelsUseCase::new(Arc::new(MemoryRepository::new()), options);
        let models = use_case
            .execute(PromptSource::ad_hoc("Keyboard shortcut ideas", vec![]))
            .await
            .unwrap();
        assert_eq!(
            models,
            vec![
                CatalogModel::ClaudeSonnet4,
                CatalogModel::Gemini25Pro,
                CatalogModel::Gpt41Mini
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_prompt() {
        let use_case =
            RecommendModelsUseCase::new(Arc::new(MemoryRepository::new()), Default::default());
        let err = use_case.execute(PromptSource::Stored(9)).await.unwrap_err();
        assert!(matches!(err, RecommendModelsError::PromptNotFound(9)));
    }
}
