//! Infrastructure layer for promptsmith
//!
//! Adapters that implement the application ports: vendor API clients behind
//! a dispatch registry, the file-backed history store, the JSONL interaction
//! transcript, and configuration file loading.

pub mod config;
pub mod logging;
pub mod persistence;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig};
pub use logging::JsonlInteractionLogger;
pub use persistence::FileHistoryStore;
pub use providers::{
    ProviderAdapter, ProviderKind,
    anthropic::AnthropicAdapter,
    gemini::GeminiAdapter,
    model_map::{ModelMap, ModelRoute},
    openai::OpenAiCompatibleAdapter,
    registry::DispatchRegistry,
};
