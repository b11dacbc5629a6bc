//! Domain layer for promptsmith
//!
//! This crate contains the rule engines, entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! Everything here is lexical keyword matching over plain strings:
//!
//! - **Questionnaire**: 3–5 clarifying questions chosen from fixed pools
//!   gated by keyword triggers
//! - **Optimizer**: the base prompt plus instruction fragments derived from
//!   the answers and a few unconditional strategies
//! - **Recommender**: up to four catalog models ranked by a fixed priority
//!
//! The engines are total and pure. The questionnaire's only randomness
//! comes from an injected [`rand::Rng`].

pub mod config;
pub mod core;
pub mod history;
pub mod optimizer;
pub mod providers;
pub mod questionnaire;
pub mod recommender;
pub mod signal;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::{
    answer::{NO_SIGNAL_ANSWERS, QuestionnaireAnswer},
    error::DomainError,
    model::{CatalogModel, ModelFamily},
};
pub use history::{AnswerRecord, ModelOutputRecord, PromptDetail, PromptId, PromptRecord};
pub use optimizer::optimize_prompt;
pub use providers::{AnthropicProviderConfig, ApiProviderConfig, ProviderConfig};
pub use questionnaire::{
    MAX_QUESTIONS, MIN_QUESTIONS, QuestionSet, QuestionnaireOptions, generate_questions,
    generate_questions_with,
};
pub use recommender::{
    MAX_RECOMMENDATIONS, MatchMode, RecommenderOptions, recommend_models, recommend_models_with,
};
pub use signal::{Category, has_signal, matches_any, rank_keywords};
