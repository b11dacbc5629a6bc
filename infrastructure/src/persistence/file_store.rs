//! JSON snapshot history store
//!
//! The whole history lives in memory and, when a path is configured, is
//! rewritten to disk after every mutation (temp file + rename). A mutation is
//! applied to a copy and only becomes visible once the snapshot is on disk.

use async_trait::async_trait;
use chrono::Utc;
use promptsmith_application::ports::history_repository::{HistoryRepository, RepositoryError};
use promptsmith_domain::{
    AnswerRecord, ModelOutputRecord, PromptId, PromptRecord, QuestionnaireAnswer,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Snapshot {
    last_prompt_id: u64,
    last_answer_id: u64,
    last_output_id: u64,
    prompts: Vec<PromptRecord>,
    answers: Vec<AnswerRecord>,
    outputs: Vec<ModelOutputRecord>,
}

impl Snapshot {
    fn has_prompt(&self, id: PromptId) -> bool {
        self.prompts.iter().any(|p| p.id == id)
    }

    fn require_prompt(&self, id: PromptId) -> Result<(), RepositoryError> {
        if self.has_prompt(id) {
            Ok(())
        } else {
            Err(RepositoryError::NotFound(id))
        }
    }
}

/// [`HistoryRepository`] backed by a single JSON file, or memory only.
pub struct FileHistoryStore {
    path: Option<PathBuf>,
    state: Mutex<Snapshot>,
}

impl FileHistoryStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: Mutex::new(Snapshot::default()),
        }
    }

    /// Load the snapshot at `path`; a missing file starts an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let snapshot = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                RepositoryError::Storage(format!(
                    "Failed to parse history file {}: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Snapshot::default(),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "Failed to read history file {}: {e}",
                    path.display()
                )));
            }
        };
        debug!(
            "Loaded {} prompts from {}",
            snapshot.prompts.len(),
            path.display()
        );
        Ok(Self {
            path: Some(path),
            state: Mutex::new(snapshot),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply `change` to a copy of the history, persist it, then publish it.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Snapshot) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let value = change(&mut next)?;
        self.persist(&next).await?;
        *state = next;
        Ok(value)
    }

    async fn persist(&self, snapshot: &Snapshot) -> Result<(), RepositoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let storage = |what: &str, e: std::io::Error| {
            RepositoryError::Storage(format!("Failed to {what} {}: {e}", path.display()))
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage("create directory for", e))?;
        }

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| RepositoryError::Storage(format!("Failed to serialize history: {e}")))?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| storage("write", e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| storage("replace", e))
    }
}

#[async_trait]
impl HistoryRepository for FileHistoryStore {
    async fn create_prompt(
        &self,
        base_prompt: &str,
        user_id: Option<u64>,
    ) -> Result<PromptRecord, RepositoryError> {
        self.mutate(|s| {
            s.last_prompt_id += 1;
            let record = PromptRecord {
                id: s.last_prompt_id,
                user_id,
                base_prompt: base_prompt.to_string(),
                created_at: Utc::now(),
            };
            s.prompts.push(record.clone());
            Ok(record)
        })
        .await
    }

    async fn get_prompt(&self, id: PromptId) -> Result<Option<PromptRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_prompts(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.prompts.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn list_prompts_by_user(
        &self,
        user_id: u64,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<PromptRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
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
        self.mutate(|s| {
            s.require_prompt(prompt_id)?;
            let mut added = Vec::with_capacity(answers.len());
            for answer in answers {
                s.last_answer_id += 1;
                let record = AnswerRecord {
                    id: s.last_answer_id,
                    prompt_id,
                    question: answer.question.clone(),
                    answer: answer.answer.clone(),
                };
                s.answers.push(record.clone());
                added.push(record);
            }
            Ok(added)
        })
        .await
    }

    async fn answers_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<AnswerRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
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
        self.mutate(|s| {
            s.require_prompt(prompt_id)?;
            s.last_output_id += 1;
            let record = ModelOutputRecord {
                id: s.last_output_id,
                prompt_id,
                model_name: model_name.to_string(),
                output: output.to_string(),
                created_at: Utc::now(),
            };
            s.outputs.push(record.clone());
            Ok(record)
        })
        .await
    }

    async fn outputs_for_prompt(
        &self,
        prompt_id: PromptId,
    ) -> Result<Vec<ModelOutputRecord>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .outputs
            .iter()
            .filter(|o| o.prompt_id == prompt_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<QuestionnaireAnswer> {
        vec![
            QuestionnaireAnswer::new("Who is the audience?", "children"),
            QuestionnaireAnswer::new("Preferred format?", "markdown"),
        ]
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = FileHistoryStore::in_memory();
        let first = store.create_prompt("one", None).await.unwrap();
        let second = store.create_prompt("two", Some(9)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(second.user_id, Some(9));
    }

    #[tokio::test]
    async fn test_prompt_detail_collects_children() {
        let store = FileHistoryStore::in_memory();
        let prompt = store.create_prompt("Write a fable", None).await.unwrap();
        let other = store.create_prompt("unrelated", None).await.unwrap();

        store.add_answers(prompt.id, &answers()).await.unwrap();
        store.add_answers(other.id, &answers()[..1]).await.unwrap();
        store
            .add_model_output(prompt.id, "Claude Opus 4", "Once upon a time")
            .await
            .unwrap();

        let detail = store.prompt_detail(prompt.id).await.unwrap().unwrap();
        assert_eq!(detail.prompt.base_prompt, "Write a fable");
        assert_eq!(detail.answers.len(), 2);
        assert_eq!(detail.answers[1].answer, "markdown");
        assert_eq!(detail.questionnaire_answers(), answers());
        assert_eq!(detail.outputs.len(), 1);
        assert_eq!(detail.outputs[0].model_name, "Claude Opus 4");

        assert!(store.prompt_detail(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_children_for_unknown_prompt_are_rejected() {
        let store = FileHistoryStore::in_memory();
        assert!(matches!(
            store.add_answers(42, &answers()).await,
            Err(RepositoryError::NotFound(42))
        ));
        assert!(matches!(
            store.add_model_output(42, "Grok-3", "text").await,
            Err(RepositoryError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_listing_pages_and_filters_by_user() {
        let store = FileHistoryStore::in_memory();
        for n in 0..5 {
            let user = if n % 2 == 0 { Some(1) } else { Some(2) };
            store.create_prompt(&format!("prompt {n}"), user).await.unwrap();
        }

        let page: Vec<u64> = store
            .list_prompts(1, 2)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(page, vec![2, 3]);

        let mine: Vec<u64> = store
            .list_prompts_by_user(1, 0, 100)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(mine, vec![1, 3, 5]);
        assert!(store.list_prompts(10, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("history.json");

        {
            let store = FileHistoryStore::open(&path).unwrap();
            let prompt = store.create_prompt("persist me", Some(3)).await.unwrap();
            store.add_answers(prompt.id, &answers()).await.unwrap();
            store.add_model_output(prompt.id, "GPT-4.1", "ok").await.unwrap();
        }
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = FileHistoryStore::open(&path).unwrap();
        let detail = reopened.prompt_detail(1).await.unwrap().unwrap();
        assert_eq!(detail.prompt.base_prompt, "persist me");
        assert_eq!(detail.answers.len(), 2);
        assert_eq!(detail.outputs[0].output, "ok");

        let next = reopened.create_prompt("after reopen", None).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileHistoryStore::open(&path),
            Err(RepositoryError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_history_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("sub");
        let store = FileHistoryStore::open(parent.join("history.json")).unwrap();
        std::fs::write(&parent, "not a directory").unwrap();

        assert!(matches!(
            store.create_prompt("lost", None).await,
            Err(RepositoryError::Storage(_))
        ));
        assert!(store.list_prompts(0, 10).await.unwrap().is_empty());
    }
}
