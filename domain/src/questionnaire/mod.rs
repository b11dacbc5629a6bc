//! Clarifying questionnaire generation.
//!
//! - [`questions`]: the fixed question texts and their keyword triggers
//! - [`generator`]: [`generate_questions`] and its seedable variant

pub mod generator;
pub mod questions;

pub use generator::{
    MAX_QUESTIONS, MIN_QUESTIONS, QuestionSet, QuestionnaireOptions, generate_questions,
    generate_questions_with,
};
