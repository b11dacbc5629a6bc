//! Dispatch gateway port
//!
//! Defines how the application layer sends an optimized prompt to a vendor
//! model. Implementations (the vendor adapters and their registry) live in
//! the infrastructure layer.

use async_trait::async_trait;
use promptsmith_domain::CatalogModel;
use thiserror::Error;

/// Errors that can occur while dispatching a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{0} API key not configured")]
    NotConfigured(String),

    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("{0}")]
    Other(String),
}

impl DispatchError {
    /// The `Error: `-prefixed text older clients detect failures by.
    pub fn sentinel(&self) -> String {
        format!("Error: {self}")
    }

    /// Transient failures worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            DispatchError::Connection(_) | DispatchError::RateLimited(_) | DispatchError::Timeout => {
                true
            }
            DispatchError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Gateway for sending prompts to catalog models
#[async_trait]
pub trait DispatchGateway: Send + Sync {
    /// Send `prompt` to `model` and return the generated text
    async fn dispatch(&self, prompt: &str, model: &CatalogModel) -> Result<String, DispatchError>;

    /// Catalog models this gateway can route
    fn supported_models(&self) -> Vec<CatalogModel>;
}
