//! Interaction history entities
//!
//! Records of submitted prompts, their questionnaire answers and the model
//! outputs produced for them. Storage lives behind the application layer's
//! `HistoryRepository` port.

pub mod entities;

pub use entities::{AnswerRecord, ModelOutputRecord, PromptDetail, PromptId, PromptRecord};
