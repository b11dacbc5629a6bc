//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The rule engines themselves are total and never return these; they are
/// raised while parsing user-facing identifiers at the edges of the domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Model '{0}' is not supported")]
    UnknownModel(String),

    #[error("Unknown match mode: {0}")]
    UnknownMatchMode(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
}

impl DomainError {
    /// Check if this error was caused by a model outside the catalog
    pub fn is_unknown_model(&self) -> bool {
        matches!(self, DomainError::UnknownModel(_))
    }
}
