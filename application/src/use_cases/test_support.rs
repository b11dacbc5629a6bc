//! Hand-written mocks shared by the use-case tests.

use crate::ports::dispatch_gateway::{DispatchError, DispatchGateway};
use crate::ports::history_repository::{HistoryRepository, RepositoryError};
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use chrono::Utc;
use promptsmith_domain::{
    AnswerRecord, CatalogModel, ModelOutputRecord, PromptId, PromptRecord, QuestionnaireAnswer,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Gateway that replays a scripted result per model and records prompts.
#[derive(Default)]
pub struct MockGateway {
    results: HashMap<CatalogModel, Result<String, DispatchError>>,
    panics_on: Option<CatalogModel>,
    pub calls: Mutex<Vec<(CatalogModel, String)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, model: CatalogModel, result: Result<String, DispatchError>) -> Self {
        self.results.insert(model, result);
        self
    }

    /// Panic inside `dispatch` for `model`, like a crashing adapter.
    pub fn panicking_on(mut self, model: CatalogModel) -> Self {
        self.panics_on = Some(model);
        self
    }

    pub fn prompts_sent(&self) -> Vec<(CatalogModel, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DispatchGateway for MockGateway {
    async fn dispatch(&self, prompt: &str, model: &CatalogModel) -> Result<String, DispatchError> {
        self.calls.lock().unwrap().push((*model, prompt.to_string()));
        if self.panics_on == Some(*model) {
            panic!("adapter for {model} crashed");
        }
        self.results
            .get(model)
            .cloned()
            .unwrap_or_else(|| Err(DispatchError::ModelNotAvailable(model.to_string())))
    }

    fn supported_models(&self) -> Vec<CatalogModel> {
        CatalogModel::ALL.to_vec()
    }
}

#[derive(Default)]
struct Tables {
    prompts: Vec<PromptRecord>,
    answers: Vec<AnswerRecord>,
    outputs: Vec<ModelOutputRecord>,
}

/// In-memory repository with sequential ids starting at 1.
#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
    fail_output_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every `add_model_output` with a storage error.
    pub fn with_failing_output_writes(mut self) -> Self {
        self.fail_output_writes = true;
        self
    }

    pub fn output_count(&self) -> usize {
        self.tables.lock().unwrap().outputs.len()
    }

    fn ensure_prompt(tables: &Tables, id: PromptId) -> Result<(), RepositoryError> {
        if tables.prompts.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(RepositoryError::NotFound(id))
        }
    }
}

#[async_trait]
impl HistoryRepository for MemoryRepository {
    async fn create_prompt(
        &self,
        base_prompt: &str,
        user_id: Option<u64>,
    ) -> Result<PromptRecord, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let record = PromptRecord {
            id: tables.prompts.len() as u64 + 1,
            user_id,
            base_prompt: base_prompt.to_string(),
            created_at: Utc::now(),
        };
        tables.prompts.push(record.clone());
        Ok(record)
    }

    async fn get_prompt(&self, id: PromptId) -> Result<Option<PromptRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_prompts(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.prompts.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn list_prompts_by_user(
        &self,
        user_id: u64,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .prompts
            .iter()
            .filter(|p| p.user_id == Some(user_id))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn add_answers(
        &self,
        prompt_id: PromptId,
        answers: &[QuestionnaireAnswer],
    ) -> Result<Vec<AnswerRecord>, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        Self::ensure_prompt(&tables, prompt_id)?;
        let mut created = Vec::new();
        for answer in answers {
            let record = AnswerRecord {
                id: tables.answers.len() as u64 + 1,
                prompt_id,
                question: answer.question.clone(),
                answer: answer.answer.clone(),
            };
            tables.answers.push(record.clone());
            created.push(record);
        }
        Ok(created)
    }

    async fn answers_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<AnswerRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .answers
            .iter()
            .filter(|a| a.prompt_id == prompt_id)
            .cloned()
            .collect())
    }

    async fn add_model_output(
        &self,
        prompt_id: PromptId,
        model_name: &str,
        output: &str,
    ) -> Result<ModelOutputRecord, RepositoryError> {
        if self.fail_output_writes {
            return Err(RepositoryError::Storage("disk full".to_string()));
        }
        let mut tables = self.tables.lock().unwrap();
        Self::ensure_prompt(&tables, prompt_id)?;
        let record = ModelOutputRecord {
            id: tables.outputs.len() as u64 + 1,
            prompt_id,
            model_name: model_name.to_string(),
            output: output.to_string(),
            created_at: Utc::now(),
        };
        tables.outputs.push(record.clone());
        Ok(record)
    }

    async fn outputs_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<ModelOutputRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .outputs
            .iter()
            .filter(|o| o.prompt_id == prompt_id)
            .cloned()
            .collect())
    }
}

/// Logger that keeps event types in order.
#[derive(Default)]
pub struct RecordingLogger {
    pub events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl InteractionLogger for RecordingLogger {
    fn log(&self, event: InteractionEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

/// Progress notifier that records every callback.
#[derive(Default)]
pub struct RecordingProgress {
    pub started_with: Mutex<Option<usize>>,
    pub completed: Mutex<Vec<(CatalogModel, bool)>>,
    pub finished: Mutex<bool>,
}

impl ProgressNotifier for RecordingProgress {
    fn on_dispatch_start(&self, total_models: usize) {
        *self.started_with.lock().unwrap() = Some(total_models);
    }

    fn on_model_complete(&self, model: &CatalogModel, success: bool) {
        self.completed.lock().unwrap().push((*model, success));
    }

    fn on_dispatch_complete(&self) {
        *self.finished.lock().unwrap() = true;
    }
}
