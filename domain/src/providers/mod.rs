//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of vendor API settings without depending
//! on any serialization format (TOML, JSON, etc.).

use std::collections::HashMap;

/// Top-level provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Retries for retryable dispatch failures (default: 2).
    pub max_retries: u32,
    /// Per-request timeout in seconds (default: 60).
    pub timeout_secs: u64,
    /// Friendly catalog name → vendor model id overrides.
    pub model_overrides: HashMap<String, String>,
    pub openai: ApiProviderConfig,
    pub anthropic: AnthropicProviderConfig,
    pub gemini: ApiProviderConfig,
    pub xai: ApiProviderConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            timeout_secs: 60,
            model_overrides: HashMap::new(),
            openai: ApiProviderConfig::openai(),
            anthropic: AnthropicProviderConfig::default(),
            gemini: ApiProviderConfig::gemini(),
            xai: ApiProviderConfig::xai(),
        }
    }
}

/// Settings shared by every HTTP vendor API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProviderConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
}

impl ApiProviderConfig {
    pub fn openai() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 4096,
        }
    }

    /// xAI speaks the OpenAI chat-completions dialect.
    pub fn xai() -> Self {
        Self {
            api_key_env: "XAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.x.ai/v1".to_string(),
            max_tokens: 4096,
        }
    }

    pub fn gemini() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_tokens: 4096,
        }
    }

    /// Explicit key first, then the configured environment variable.
    ///
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnthropicProviderConfig {
    pub api: ApiProviderConfig,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            api: ApiProviderConfig {
                api_key_env: "ANTHROPIC_API_KEY".to_string(),
                api_key: None,
                base_url: "https://api.anthropic.com".to_string(),
                max_tokens: 4096,
            },
            api_version: "2023-06-01".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.xai.base_url, "https://api.x.ai/v1");
        assert_eq!(config.anthropic.api.max_tokens, 4096);
        assert_eq!(config.anthropic.api_version, "2023-06-01");
    }

    #[test]
    fn test_resolve_api_key_prefers_explicit_key() {
        let mut api = ApiProviderConfig::openai();
        api.api_key = Some("sk-direct".to_string());
        let key = api.resolve_api_key_with(|_| Some("sk-env".to_string()));
        assert_eq!(key.as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_resolve_api_key_reads_named_env() {
        let api = ApiProviderConfig::gemini();
        let key = api.resolve_api_key_with(|name| {
            (name == "GOOGLE_API_KEY").then(|| "g-key".to_string())
        });
        assert_eq!(key.as_deref(), Some("g-key"));
    }

    #[test]
    fn test_blank_keys_are_missing() {
        let mut api = ApiProviderConfig::xai();
        api.api_key = Some("  ".to_string());
        assert_eq!(api.resolve_api_key_with(|_| Some(String::new())), None);
    }
}
