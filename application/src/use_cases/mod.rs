//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_history;
pub mod compare_models;
pub mod generate_questions;
pub mod get_model_response;
pub mod optimize_prompt;
pub mod recommend_models;
pub(crate) mod shared;
pub mod submit_questionnaire;

#[cfg(test)]
pub(crate) mod test_support;

pub use shared::PromptSource;
