//! Shared utilities for use cases.
//!
//! Loading a prompt's inputs (base prompt plus answers) either from history
//! or from ad hoc values, used by the optimize, recommend and dispatch flows.

use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use promptsmith_domain::{PromptDetail, PromptId, QuestionnaireAnswer};

/// Where a use case gets its base prompt and answers from
#[derive(Debug, Clone)]
pub enum PromptSource {
    /// A prompt previously stored in history
    Stored(PromptId),
    /// Values supplied directly by the caller
    AdHoc {
        base_prompt: String,
        answers: Vec<QuestionnaireAnswer>,
    },
}

impl PromptSource {
    pub fn ad_hoc(base_prompt: impl Into<String>, answers: Vec<QuestionnaireAnswer>) -> Self {
        PromptSource::AdHoc {
            base_prompt: base_prompt.into(),
            answers,
        }
    }
}

/// Base prompt and answers ready for the rule engines
pub(crate) struct PromptInputs {
    pub base_prompt: String,
    pub answers: Vec<QuestionnaireAnswer>,
}

/// Failure while resolving a [`PromptSource`]
#[derive(Debug)]
pub(crate) enum LoadError {
    NotFound(PromptId),
    Repository(RepositoryError),
}

impl From<RepositoryError> for LoadError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => LoadError::NotFound(id),
            other => LoadError::Repository(other),
        }
    }
}

pub(crate) async fn load_detail<R: HistoryRepository + ?Sized>(
    repository: &R,
    prompt_id: PromptId,
) -> Result<PromptDetail, LoadError> {
    repository
        .prompt_detail(prompt_id)
        .await?
        .ok_or(LoadError::NotFound(prompt_id))
}

pub(crate) async fn resolve_inputs<R: HistoryRepository + ?Sized>(
    repository: &R,
    source: PromptSource,
) -> Result<PromptInputs, LoadError> {
    match source {
        PromptSource::Stored(id) => {
            let detail = load_detail(repository, id).await?;
            Ok(PromptInputs {
                answers: detail.questionnaire_answers(),
                base_prompt: detail.prompt.base_prompt,
            })
        }
        PromptSource::AdHoc {
            base_prompt,
            answers,
        } => Ok(PromptInputs {
            base_prompt,
            answers,
        }),
    }
}
