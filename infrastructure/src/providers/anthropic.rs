//! Anthropic Messages API adapter

use super::http::{build_client, ensure_ready, map_send_error, map_status, non_empty, preview};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use promptsmith_application::ports::dispatch_gateway::DispatchError;
use promptsmith_domain::AnthropicProviderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(config: &AnthropicProviderConfig, timeout: Duration) -> Result<Self, DispatchError> {
        let api_key = config.api.resolve_api_key();
        if api_key.is_none() {
            warn!("Anthropic client not configured: set {}", config.api.api_key_env);
        }
        Ok(Self {
            client: build_client(timeout)?,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            api_key,
            api_version: config.api_version.clone(),
            max_tokens: config.api.max_tokens,
        })
    }
}

/// Concatenate every text block of a Messages API reply.
pub fn parse_messages(body: &str) -> Result<String, DispatchError> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| DispatchError::Other(format!("Malformed Anthropic response: {e}")))?;
    let text: String = response
        .content
        .into_iter()
        .filter(|block| block.block_type == "text")
        .filter_map(|block| block.text)
        .collect();
    non_empty(text)
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn send(&self, prompt: &str, vendor_model_id: &str) -> Result<String, DispatchError> {
        let kind = self.kind();
        let api_key = ensure_ready(kind, self.api_key.as_deref(), prompt)?;
        info!(
            "Sending request to Anthropic model {}: '{}'",
            vendor_model_id,
            preview(prompt)
        );

        let request = MessagesRequest {
            model: vendor_model_id,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(kind, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| map_send_error(kind, e))?;
        if !status.is_success() {
            return Err(map_status(kind, status, &body));
        }

        let text = parse_messages(&body)?;
        info!(
            "Received response from Anthropic model {}: '{}'",
            vendor_model_id,
            preview(&text)
        );
        Ok(text)
    }
}
