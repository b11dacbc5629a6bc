//! CLI entrypoint for promptsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use promptsmith_application::{
    BrowseHistoryUseCase, CompareModelsInput, CompareModelsUseCase, DispatchGateway,
    GenerateQuestionsInput, GenerateQuestionsUseCase, GetModelResponseInput,
    GetModelResponseUseCase, InteractionLogger, ListPromptsInput, NoInteractionLogger,
    NoProgress, OptimizePromptInput, OptimizePromptUseCase, ProgressNotifier, PromptSource,
    RecommendModelsUseCase, SubmitQuestionnaireInput, SubmitQuestionnaireUseCase, WorkflowConfig,
};
use promptsmith_domain::OutputFormat;
use promptsmith_infrastructure::{
    ConfigLoader, DispatchRegistry, FileConfig, FileHistoryStore, JsonlInteractionLogger, ModelMap,
};
use promptsmith_presentation::{
    Cli, Command, ConsoleFormatter, ModelEntry, ProgressReporter, SessionRepl, SimpleProgress,
};
use serde_json::json;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Print `value` as JSON or the text rendering, per the chosen format
fn emit<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::json(value)),
        OutputFormat::Text => print!("{}", text()),
    }
}

/// Install the console subscriber and, when configured, a daily log file.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match config.logging.log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "promptsmith.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let _log_guard = init_logging(cli.verbose, &config);
    for issue in config.check()? {
        warn!("{}", issue.message);
    }
    info!("Starting promptsmith");

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }
    let show_progress = !cli.quiet && format == OutputFormat::Text;

    // === Dependency Injection ===
    let workflow: WorkflowConfig = config.to_workflow_config();
    let provider_config = config.to_provider_config();

    let repository = Arc::new(match config.history.resolved_path() {
        Some(path) => FileHistoryStore::open(&path)
            .with_context(|| format!("Failed to open history at {}", path.display()))?,
        None => FileHistoryStore::in_memory(),
    });

    let logger: Arc<dyn InteractionLogger> = match config
        .logging
        .transcript_path()
        .and_then(JsonlInteractionLogger::new)
    {
        Some(transcript) => Arc::new(transcript),
        None => Arc::new(NoInteractionLogger),
    };

    let gateway = Arc::new(DispatchRegistry::from_config(&provider_config)?);

    match command {
        Command::Questions { prompt, seed } => {
            let questions = GenerateQuestionsUseCase::new(workflow)
                .execute(GenerateQuestionsInput::new(prompt.clone()).with_seed(seed));
            emit(
                format,
                &json!({ "base_prompt": prompt, "questions": questions }),
                || ConsoleFormatter::format_questions(&questions),
            );
        }

        Command::Optimize {
            prompt,
            answers,
            target,
        } => {
            let result = OptimizePromptUseCase::new(repository)
                .execute(OptimizePromptInput {
                    source: PromptSource::ad_hoc(prompt, answers),
                    target_model: target,
                })
                .await?;
            emit(format, &result, || ConsoleFormatter::format_optimized(&result));
        }

        Command::Recommend { prompt, answers } => {
            let models = RecommendModelsUseCase::new(repository, workflow.recommender)
                .execute(PromptSource::ad_hoc(prompt, answers))
                .await?;
            emit(format, &json!({ "recommended_models": models }), || {
                ConsoleFormatter::format_recommendations(&models)
            });
        }

        Command::Submit {
            prompt,
            answers,
            user_id,
        } => {
            let detail = SubmitQuestionnaireUseCase::new(repository)
                .with_logger(logger)
                .execute(SubmitQuestionnaireInput {
                    base_prompt: prompt,
                    user_id,
                    answers,
                })
                .await?;
            emit(format, &detail, || ConsoleFormatter::format_detail(&detail));
        }

        Command::Respond { prompt_id, model } => {
            let result = GetModelResponseUseCase::new(gateway, repository)
                .with_logger(logger)
                .execute(GetModelResponseInput {
                    prompt_id,
                    model_name: model,
                })
                .await?;
            emit(format, &result, || ConsoleFormatter::format_model_response(&result));
        }

        Command::Compare { prompt_id, model } => {
            let use_case = CompareModelsUseCase::new(gateway, repository, workflow.recommender)
                .with_logger(logger);
            let input = CompareModelsInput {
                prompt_id,
                models: model,
            };
            let progress: Box<dyn ProgressNotifier> = if !show_progress {
                Box::new(NoProgress)
            } else if std::io::stderr().is_terminal() {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(SimpleProgress)
            };
            let result = use_case
                .execute_with_progress(input, progress.as_ref())
                .await?;
            emit(format, &result, || ConsoleFormatter::format_comparison(&result));
        }

        Command::History {
            user_id,
            skip,
            limit,
        } => {
            let prompts = BrowseHistoryUseCase::new(repository)
                .list(ListPromptsInput {
                    user_id,
                    skip,
                    limit,
                })
                .await?;
            emit(format, &prompts, || ConsoleFormatter::format_history(&prompts));
        }

        Command::Show { prompt_id } => {
            let detail = BrowseHistoryUseCase::new(repository)
                .detail(prompt_id)
                .await?;
            emit(format, &detail, || ConsoleFormatter::format_detail(&detail));
        }

        Command::Models => {
            let (routes, _) = ModelMap::with_overrides(&provider_config.model_overrides);
            let entries: Vec<ModelEntry> = gateway
                .supported_models()
                .into_iter()
                .filter_map(|model| {
                    routes.resolve(model).map(|route| ModelEntry {
                        model,
                        provider: route.provider.display_name().to_string(),
                        vendor_model_id: route.vendor_model_id.clone(),
                    })
                })
                .collect();
            emit(format, &entries, || ConsoleFormatter::format_models(&entries));
        }

        Command::Session {
            prompt,
            user_id,
            seed,
        } => {
            SessionRepl::new(gateway, repository, workflow)
                .with_logger(logger)
                .with_progress(!cli.quiet)
                .run(prompt, user_id, seed)
                .await?;
        }
    }

    Ok(())
}
