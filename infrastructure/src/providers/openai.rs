//! OpenAI-compatible chat completions adapter
//!
//! Serves both OpenAI and xAI (Grok), which exposes the same
//! `/chat/completions` API under its own base URL.

use super::http::{build_client, ensure_ready, map_send_error, map_status, non_empty, preview};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use promptsmith_application::ports::dispatch_gateway::DispatchError;
use promptsmith_domain::ApiProviderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiCompatibleAdapter {
    kind: ProviderKind,
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl OpenAiCompatibleAdapter {
    pub fn new(
        kind: ProviderKind,
        config: &ApiProviderConfig,
        timeout: Duration,
    ) -> Result<Self, DispatchError> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            warn!(
                "{} client not configured: set {}",
                kind.display_name(),
                config.api_key_env
            );
        }
        Ok(Self {
            kind,
            client: build_client(timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            max_tokens: config.max_tokens,
        })
    }

    pub fn openai(config: &ApiProviderConfig, timeout: Duration) -> Result<Self, DispatchError> {
        Self::new(ProviderKind::OpenAi, config, timeout)
    }

    pub fn xai(config: &ApiProviderConfig, timeout: Duration) -> Result<Self, DispatchError> {
        Self::new(ProviderKind::Xai, config, timeout)
    }
}

/// Text of the first choice
pub fn parse_chat_completion(body: &str) -> Result<String, DispatchError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| DispatchError::Other(format!("Malformed chat completion: {e}")))?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();
    non_empty(content)
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatibleAdapter {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn send(&self, prompt: &str, vendor_model_id: &str) -> Result<String, DispatchError> {
        let api_key = ensure_ready(self.kind, self.api_key.as_deref(), prompt)?;
        info!(
            "Sending request to {} model {}: '{}'",
            self.kind.display_name(),
            vendor_model_id,
            preview(prompt)
        );

        let request = ChatRequest {
            model: vendor_model_id,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(self.kind, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_send_error(self.kind, e))?;
        if !status.is_success() {
            return Err(map_status(self.kind, status, &body));
        }

        let text = parse_chat_completion(&body)?;
        info!(
            "Received response from {} model {}: '{}'",
            self.kind.display_name(),
            vendor_model_id,
            preview(&text)
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_server::serve_once;

    fn config(base_url: &str, key: Option<&str>) -> ApiProviderConfig {
        ApiProviderConfig {
            api_key_env: "PROMPTSMITH_TEST_UNSET_KEY".to_string(),
            api_key: key.map(str::to_string),
            base_url: base_url.to_string(),
            max_tokens: 256,
        }
    }

    #[test]
    fn test_parse_chat_completion() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Hello!\n"}}]}"#;
        assert_eq!(parse_chat_completion(body).unwrap(), "Hello!");
    }

    #[test]
    fn test_parse_empty_choices() {
        assert_eq!(
            parse_chat_completion(r#"{"choices":[]}"#),
            Err(DispatchError::EmptyResponse)
        );
        assert_eq!(
            parse_chat_completion(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(DispatchError::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let adapter =
            OpenAiCompatibleAdapter::xai(&config("http://127.0.0.1:9", None), Duration::from_secs(1))
                .unwrap();
        assert_eq!(
            adapter.send("hi", "grok-3").await,
            Err(DispatchError::NotConfigured("xAI Grok".to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_prompt() {
        let adapter = OpenAiCompatibleAdapter::openai(
            &config("http://127.0.0.1:9", Some("sk-test")),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(adapter.send("", "gpt-4.1").await, Err(DispatchError::EmptyPrompt));
    }

    #[tokio::test]
    async fn test_send_posts_chat_completion() {
        let (base_url, captured) =
            serve_once(200, r#"{"choices":[{"message":{"content":"Paris"}}]}"#).await;
        let adapter =
            OpenAiCompatibleAdapter::openai(&config(&base_url, Some("sk-test")), Duration::from_secs(5))
                .unwrap();

        let reply = adapter.send("Capital of France?", "gpt-4.1").await.unwrap();
        assert_eq!(reply, "Paris");

        let captured = captured.lock().unwrap();
        assert!(captured.head.starts_with("POST /chat/completions"));
        assert!(captured.head.to_lowercase().contains("authorization: bearer sk-test"));
        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(body["model"], "gpt-4.1");
        assert_eq!(body["messages"][0]["content"], "Capital of France?");
        assert_eq!(body["max_tokens"], 256);
    }

    #[tokio::test]
    async fn test_rate_limit_status() {
        let (base_url, _) =
            serve_once(429, r#"{"error":{"message":"Rate limit reached"}}"#).await;
        let adapter =
            OpenAiCompatibleAdapter::xai(&config(&base_url, Some("xai-test")), Duration::from_secs(5))
                .unwrap();
        let err = adapter.send("hi", "grok-3").await.unwrap_err();
        assert!(matches!(err, DispatchError::RateLimited(m) if m.contains("Rate limit reached")));
    }
}
