//! Guided session: ask the generated questions, then optimize, recommend,
//! store and (optionally) dispatch.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use promptsmith_application::ports::progress::{NoProgress, ProgressNotifier};
use promptsmith_application::{
    CompareModelsError, CompareModelsInput, CompareModelsUseCase, DispatchGateway,
    GenerateQuestionsInput, GenerateQuestionsUseCase, HistoryRepository, InteractionLogger,
    NoInteractionLogger, OptimizePromptError, OptimizePromptInput, OptimizePromptUseCase,
    PromptSource, RecommendModelsError, RecommendModelsUseCase, SubmitQuestionnaireError,
    SubmitQuestionnaireInput, SubmitQuestionnaireUseCase, WorkflowConfig,
};
use promptsmith_domain::{CatalogModel, QuestionnaireAnswer};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Submit(#[from] SubmitQuestionnaireError),

    #[error(transparent)]
    Optimize(#[from] OptimizePromptError),

    #[error(transparent)]
    Recommend(#[from] RecommendModelsError),

    #[error(transparent)]
    Compare(#[from] CompareModelsError),
}

/// Source of interactive input lines. `Ok(None)` means the user bailed out
/// (Ctrl-C / Ctrl-D).
pub trait LineReader {
    fn read_line(&mut self, label: &str) -> std::io::Result<Option<String>>;
}

impl LineReader for Reedline {
    fn read_line(&mut self, label: &str) -> std::io::Result<Option<String>> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        match Reedline::read_line(self, &prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            _ => Ok(None),
        }
    }
}

/// Which recommended models to send the prompt to
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Skip,
    Models(Vec<CatalogModel>),
}

/// Parse the dispatch choice: blank skips, `all` takes every recommendation,
/// otherwise 1-based indexes or catalog names separated by commas.
fn parse_selection(input: &str, recommended: &[CatalogModel]) -> Result<Selection, String> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("none") {
        return Ok(Selection::Skip);
    }
    if input.eq_ignore_ascii_case("all") {
        return Ok(Selection::Models(recommended.to_vec()));
    }

    let mut models = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let model = match part.parse::<usize>() {
            Ok(n) if (1..=recommended.len()).contains(&n) => recommended[n - 1],
            Ok(n) => return Err(format!("No recommendation numbered {n}")),
            Err(_) => part
                .parse::<CatalogModel>()
                .map_err(|_| format!("Model '{part}' is not supported"))?,
        };
        if !models.contains(&model) {
            models.push(model);
        }
    }
    Ok(Selection::Models(models))
}

/// Interactive session over the prompt-building workflow
pub struct SessionRepl<G, R>
where
    G: DispatchGateway + ?Sized + 'static,
    R: HistoryRepository + ?Sized,
{
    gateway: Arc<G>,
    repository: Arc<R>,
    workflow: WorkflowConfig,
    logger: Arc<dyn InteractionLogger>,
    show_progress: bool,
}

impl<G, R> SessionRepl<G, R>
where
    G: DispatchGateway + ?Sized + 'static,
    R: HistoryRepository + ?Sized,
{
    pub fn new(gateway: Arc<G>, repository: Arc<R>, workflow: WorkflowConfig) -> Self {
        Self {
            gateway,
            repository,
            workflow,
            logger: Arc::new(NoInteractionLogger),
            show_progress: true,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run one session on the terminal
    pub async fn run(
        &self,
        prompt: Option<String>,
        user_id: Option<u64>,
        seed: Option<u64>,
    ) -> Result<(), SessionError> {
        let mut editor = Reedline::create();
        self.run_with(&mut editor, prompt, user_id, seed).await
    }

    pub async fn run_with(
        &self,
        reader: &mut dyn LineReader,
        prompt: Option<String>,
        user_id: Option<u64>,
        seed: Option<u64>,
    ) -> Result<(), SessionError> {
        print_welcome();

        let base_prompt = match prompt {
            Some(p) => p,
            None => match reader.read_line("prompt")? {
                Some(p) => p.trim().to_string(),
                None => return cancelled(),
            },
        };

        let questions = GenerateQuestionsUseCase::new(self.workflow.clone())
            .execute(GenerateQuestionsInput::new(base_prompt.clone()).with_seed(seed));
        println!();
        println!("{}", "Answer a few questions (blank to skip):".cyan().bold());

        let Some(answers) = collect_answers(reader, questions.questions())? else {
            return cancelled();
        };

        let detail = SubmitQuestionnaireUseCase::new(Arc::clone(&self.repository))
            .with_logger(Arc::clone(&self.logger))
            .execute(SubmitQuestionnaireInput {
                base_prompt,
                user_id,
                answers,
            })
            .await?;
        let prompt_id = detail.prompt.id;
        println!();
        println!("{} #{}", "Stored prompt".green(), prompt_id);

        let optimized = OptimizePromptUseCase::new(Arc::clone(&self.repository))
            .execute(OptimizePromptInput {
                source: PromptSource::Stored(prompt_id),
                target_model: None,
            })
            .await?;
        print!("{}", ConsoleFormatter::format_optimized(&optimized));

        let recommended =
            RecommendModelsUseCase::new(Arc::clone(&self.repository), self.workflow.recommender)
                .execute(PromptSource::Stored(prompt_id))
                .await?;
        print!("{}", ConsoleFormatter::format_recommendations(&recommended));
        println!();

        let models = loop {
            let Some(line) = reader.read_line("send to (numbers, names, all, blank to finish)")?
            else {
                return cancelled();
            };
            match parse_selection(&line, &recommended) {
                Ok(Selection::Skip) => {
                    println!("Done. Use `promptsmith respond {prompt_id} -m <MODEL>` later.");
                    return Ok(());
                }
                Ok(Selection::Models(models)) => break models,
                Err(message) => println!("{}", message.red()),
            }
        };

        let compare = CompareModelsUseCase::new(
            Arc::clone(&self.gateway),
            Arc::clone(&self.repository),
            self.workflow.recommender,
        )
        .with_logger(Arc::clone(&self.logger));
        let input = CompareModelsInput {
            prompt_id,
            models: models.iter().map(|m| m.as_str().to_string()).collect(),
        };
        let progress: Box<dyn ProgressNotifier> = if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };
        let result = compare
            .execute_with_progress(input, progress.as_ref())
            .await?;
        print!("{}", ConsoleFormatter::format_comparison(&result));
        Ok(())
    }
}

/// Ask each question in turn. `None` when the user cancels midway.
fn collect_answers(
    reader: &mut dyn LineReader,
    questions: &[String],
) -> std::io::Result<Option<Vec<QuestionnaireAnswer>>> {
    let mut answers = Vec::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).cyan(), question);
        let Some(line) = reader.read_line("answer")? else {
            return Ok(None);
        };
        answers.push(QuestionnaireAnswer::new(question.clone(), line.trim()));
    }
    Ok(Some(answers))
}

fn cancelled() -> Result<(), SessionError> {
    println!("Session cancelled.");
    Ok(())
}

fn print_welcome() {
    println!();
    println!("╭─────────────────────────────────────────────╮");
    println!("│           promptsmith - Session             │");
    println!("╰─────────────────────────────────────────────╯");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Option<&'static str>>);

    impl LineReader for Scripted {
        fn read_line(&mut self, _label: &str) -> std::io::Result<Option<String>> {
            Ok(self.0.pop_front().flatten().map(str::to_string))
        }
    }

    const RECOMMENDED: [CatalogModel; 3] = [
        CatalogModel::ClaudeOpus4,
        CatalogModel::Gpt41,
        CatalogModel::Gemini25Pro,
    ];

    #[test]
    fn test_blank_selection_skips() {
        assert_eq!(parse_selection("  ", &RECOMMENDED), Ok(Selection::Skip));
        assert_eq!(parse_selection("none", &RECOMMENDED), Ok(Selection::Skip));
    }

    #[test]
    fn test_all_takes_every_recommendation() {
        assert_eq!(
            parse_selection("ALL", &RECOMMENDED),
            Ok(Selection::Models(RECOMMENDED.to_vec()))
        );
    }

    #[test]
    fn test_indexes_and_names_mix() {
        assert_eq!(
            parse_selection("2, grok-3, 2", &RECOMMENDED),
            Ok(Selection::Models(vec![CatalogModel::Gpt41, CatalogModel::Grok3]))
        );
    }

    #[test]
    fn test_bad_selection_reports_reason() {
        assert_eq!(
            parse_selection("7", &RECOMMENDED),
            Err("No recommendation numbered 7".to_string())
        );
        assert_eq!(
            parse_selection("gpt-2", &RECOMMENDED),
            Err("Model 'gpt-2' is not supported".to_string())
        );
    }

    #[test]
    fn test_collect_answers_pairs_questions() {
        let questions = vec!["Tone?".to_string(), "Length?".to_string()];
        let mut reader = Scripted(VecDeque::from([Some(" playful "), Some("")]));
        let answers = collect_answers(&mut reader, &questions).unwrap().unwrap();
        assert_eq!(
            answers,
            vec![
                QuestionnaireAnswer::new("Tone?", "playful"),
                QuestionnaireAnswer::new("Length?", ""),
            ]
        );
    }

    #[test]
    fn test_collect_answers_stops_on_cancel() {
        let questions = vec!["Tone?".to_string(), "Length?".to_string()];
        let mut reader = Scripted(VecDeque::from([Some("calm"), None]));
        assert_eq!(collect_answers(&mut reader, &questions).unwrap(), None);
    }

    use async_trait::async_trait;
    use promptsmith_application::{DispatchError, HistoryRepository};
    use promptsmith_infrastructure::FileHistoryStore;
    use std::sync::Mutex;

    /// Answers questions and picks models by prompt label.
    struct Conversation {
        answers: VecDeque<&'static str>,
        selections: VecDeque<&'static str>,
    }

    impl LineReader for Conversation {
        fn read_line(&mut self, label: &str) -> std::io::Result<Option<String>> {
            let line = if label == "answer" {
                Some(self.answers.pop_front().unwrap_or(""))
            } else {
                self.selections.pop_front()
            };
            Ok(line.map(str::to_string))
        }
    }

    #[derive(Default)]
    struct EchoGateway {
        calls: Mutex<Vec<CatalogModel>>,
    }

    #[async_trait]
    impl DispatchGateway for EchoGateway {
        async fn dispatch(
            &self,
            _prompt: &str,
            model: &CatalogModel,
        ) -> Result<String, DispatchError> {
            self.calls.lock().unwrap().push(*model);
            Ok(format!("reply from {model}"))
        }

        fn supported_models(&self) -> Vec<CatalogModel> {
            CatalogModel::ALL.to_vec()
        }
    }

    const POEM: &str = "Write a poem about the sea.";

    fn session(
        gateway: &Arc<EchoGateway>,
        repository: &Arc<FileHistoryStore>,
    ) -> SessionRepl<EchoGateway, FileHistoryStore> {
        SessionRepl::new(
            Arc::clone(gateway),
            Arc::clone(repository),
            WorkflowConfig::default(),
        )
        .with_progress(false)
    }

    fn question_count(seed: u64) -> usize {
        GenerateQuestionsUseCase::new(WorkflowConfig::default())
            .execute(GenerateQuestionsInput::new(POEM).with_seed(Some(seed)))
            .len()
    }

    #[tokio::test]
    async fn test_session_stores_answers_and_blank_selection_skips_dispatch() {
        let gateway = Arc::new(EchoGateway::default());
        let repository = Arc::new(FileHistoryStore::in_memory());
        let mut reader = Conversation {
            answers: VecDeque::from(["playful"]),
            selections: VecDeque::from([""]),
        };

        session(&gateway, &repository)
            .run_with(&mut reader, Some(POEM.to_string()), Some(9), Some(7))
            .await
            .unwrap();

        let detail = repository.prompt_detail(1).await.unwrap().unwrap();
        assert_eq!(detail.prompt.base_prompt, POEM);
        assert_eq!(detail.prompt.user_id, Some(9));
        assert_eq!(detail.answers.len(), question_count(7));
        assert_eq!(detail.answers[0].answer, "playful");
        assert!(detail.outputs.is_empty());
        assert!(gateway.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_dispatches_selected_recommendation() {
        let gateway = Arc::new(EchoGateway::default());
        let repository = Arc::new(FileHistoryStore::in_memory());
        let mut reader = Conversation {
            answers: VecDeque::new(),
            selections: VecDeque::from(["9", "1"]),
        };

        session(&gateway, &repository)
            .run_with(&mut reader, Some(POEM.to_string()), None, Some(3))
            .await
            .unwrap();

        // A poem recommends Claude Opus 4 first
        assert_eq!(*gateway.calls.lock().unwrap(), vec![CatalogModel::ClaudeOpus4]);
        let outputs = repository.outputs_for_prompt(1).await.unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].model_name, "Claude Opus 4");
        assert_eq!(outputs[0].output, "reply from Claude Opus 4");
    }

    #[tokio::test]
    async fn test_session_cancelled_at_prompt_stores_nothing() {
        let gateway = Arc::new(EchoGateway::default());
        let repository = Arc::new(FileHistoryStore::in_memory());
        let mut reader = Conversation {
            answers: VecDeque::new(),
            selections: VecDeque::new(),
        };

        session(&gateway, &repository)
            .run_with(&mut reader, None, None, None)
            .await
            .unwrap();

        assert!(repository.list_prompts(0, 10).await.unwrap().is_empty());
    }
}
