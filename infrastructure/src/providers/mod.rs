//! Vendor model adapters
//!
//! Each adapter speaks one vendor's HTTP API and implements
//! [`ProviderAdapter`]. The [`registry::DispatchRegistry`] owns one adapter
//! per [`ProviderKind`] and routes catalog models to them through the
//! [`model_map`].

pub mod anthropic;
pub mod gemini;
pub mod http;
pub mod model_map;
pub mod openai;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_server;

use async_trait::async_trait;
use promptsmith_application::ports::dispatch_gateway::DispatchError;
use promptsmith_domain::ModelFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
    Xai,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Gemini,
        ProviderKind::Xai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Xai => "xai",
        }
    }

    /// Vendor name used in user-facing error text
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Gemini => "Google Gemini",
            ProviderKind::Xai => "xAI Grok",
        }
    }

    pub fn for_family(family: ModelFamily) -> Self {
        match family {
            ModelFamily::OpenAi => ProviderKind::OpenAi,
            ModelFamily::Anthropic => ProviderKind::Anthropic,
            ModelFamily::Google => ProviderKind::Gemini,
            ModelFamily::Xai => ProviderKind::Xai,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vendor API client
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Send one user prompt to `vendor_model_id` and return the reply text
    async fn send(&self, prompt: &str, vendor_model_id: &str) -> Result<String, DispatchError>;
}
