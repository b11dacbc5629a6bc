//! Vendor API configuration from TOML (`[providers]` section)
//!
//! Every field is optional; unset fields keep the built-in vendor defaults
//! from [`ProviderConfig::default`].

use promptsmith_domain::{
    AnthropicProviderConfig, ApiProviderConfig, CatalogModel, ConfigIssue, ConfigIssueCode,
    ProviderConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One vendor's API settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
}

impl FileApiConfig {
    fn apply(&self, mut config: ApiProviderConfig) -> ApiProviderConfig {
        if let Some(env) = &self.api_key_env {
            config.api_key_env = env.clone();
        }
        if self.api_key.is_some() {
            config.api_key = self.api_key.clone();
        }
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        config
    }

    fn validate(&self, section: &str, issues: &mut Vec<ConfigIssue>) {
        if self.base_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                format!("providers.{section}.base_url cannot be empty"),
            ));
        }
        if self.max_tokens == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTokens,
                format!("providers.{section}.max_tokens cannot be 0"),
            ));
        }
    }
}

/// Anthropic settings: the common API fields plus the version header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    pub api_key_env: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    /// `anthropic-version` header value
    pub api_version: Option<String>,
}

impl FileAnthropicConfig {
    fn api(&self) -> FileApiConfig {
        FileApiConfig {
            api_key_env: self.api_key_env.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Retries for connection errors, rate limits, timeouts and 5xx replies
    pub max_retries: u32,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub openai: FileApiConfig,
    pub anthropic: FileAnthropicConfig,
    pub gemini: FileApiConfig,
    pub xai: FileApiConfig,
    /// Catalog name → vendor model id overrides
    pub models: HashMap<String, String>,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        let defaults = ProviderConfig::default();
        Self {
            max_retries: defaults.max_retries,
            timeout_secs: defaults.timeout_secs,
            openai: FileApiConfig::default(),
            anthropic: FileAnthropicConfig::default(),
            gemini: FileApiConfig::default(),
            xai: FileApiConfig::default(),
            models: HashMap::new(),
        }
    }
}

impl FileProvidersConfig {
    pub fn to_provider_config(&self) -> ProviderConfig {
        let defaults = ProviderConfig::default();
        let mut anthropic = AnthropicProviderConfig {
            api: self.anthropic.api().apply(defaults.anthropic.api),
            api_version: defaults.anthropic.api_version,
        };
        if let Some(version) = &self.anthropic.api_version {
            anthropic.api_version = version.clone();
        }

        ProviderConfig {
            max_retries: self.max_retries,
            timeout_secs: self.timeout_secs,
            model_overrides: self.models.clone(),
            openai: self.openai.apply(defaults.openai),
            anthropic,
            gemini: self.gemini.apply(defaults.gemini),
            xai: self.xai.apply(defaults.xai),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "providers.timeout_secs cannot be 0",
            ));
        }

        self.openai.validate("openai", &mut issues);
        self.anthropic.api().validate("anthropic", &mut issues);
        self.gemini.validate("gemini", &mut issues);
        self.xai.validate("xai", &mut issues);

        let mut names: Vec<&String> = self.models.keys().collect();
        names.sort();
        for name in names {
            if name.parse::<CatalogModel>().is_err() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownCatalogModel,
                    format!("providers.models: '{name}' is not a catalog model and will be ignored"),
                ));
            } else if self.models[name].trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyModelOverride,
                    format!("providers.models: '{name}' maps to an empty vendor id and will be ignored"),
                ));
            }
        }

        issues
    }
}
