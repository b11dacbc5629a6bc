//! Core domain concepts shared across all subdomains.
//!
//! - [`model::CatalogModel`]: the closed catalog of recommendable models
//! - [`answer::QuestionnaireAnswer`]: one clarifying (question, answer) pair
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod model;
pub mod string;
