//! Application layer for promptsmith
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WorkflowConfig;
pub use ports::{
    dispatch_gateway::{DispatchError, DispatchGateway},
    history_repository::{HistoryRepository, RepositoryError},
    interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::PromptSource;
pub use use_cases::browse_history::{BrowseHistoryError, BrowseHistoryUseCase, ListPromptsInput};
pub use use_cases::compare_models::{
    CompareModelsError, CompareModelsInput, CompareModelsOutput, CompareModelsUseCase, ModelRun,
};
pub use use_cases::generate_questions::{GenerateQuestionsInput, GenerateQuestionsUseCase};
pub use use_cases::get_model_response::{
    GetModelResponseError, GetModelResponseInput, GetModelResponseOutput, GetModelResponseUseCase,
};
pub use use_cases::optimize_prompt::{
    OptimizePromptError, OptimizePromptInput, OptimizePromptOutput, OptimizePromptUseCase,
};
pub use use_cases::recommend_models::{RecommendModelsError, RecommendModelsUseCase};
pub use use_cases::submit_questionnaire::{
    SubmitQuestionnaireError, SubmitQuestionnaireInput, SubmitQuestionnaireUseCase,
};
