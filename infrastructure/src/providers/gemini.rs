//! Google Gemini `generateContent` adapter

use super::http::{build_client, ensure_ready, map_send_error, map_status, non_empty, preview};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use promptsmith_application::ports::dispatch_gateway::DispatchError;
use promptsmith_domain::ApiProviderConfig;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl GeminiAdapter {
    pub fn new(config: &ApiProviderConfig, timeout: Duration) -> Result<Self, DispatchError> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            warn!("Google Gemini client not configured: set {}", config.api_key_env);
        }
        Ok(Self {
            client: build_client(timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            max_tokens: config.max_tokens,
        })
    }
}

/// Text of the first candidate, or the block reason when the prompt was refused.
pub fn parse_generate_content(body: &str) -> Result<String, DispatchError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| DispatchError::Other(format!("Malformed Gemini response: {e}")))?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(DispatchError::Blocked(format!(
                "Prompt blocked by Google Gemini API. Reason: {reason}"
            )));
        }
    }
    non_empty(text)
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn send(&self, prompt: &str, vendor_model_id: &str) -> Result<String, DispatchError> {
        let kind = self.kind();
        let api_key = ensure_ready(kind, self.api_key.as_deref(), prompt)?;
        info!(
            "Sending request to Google Gemini model {}: '{}'",
            vendor_model_id,
            preview(prompt)
        );

        let request = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "maxOutputTokens": self.max_tokens },
        });
        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, vendor_model_id
            ))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(kind, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| map_send_error(kind, e))?;
        if !status.is_success() {
            return Err(map_status(kind, status, &body));
        }

        let text = parse_generate_content(&body)?;
        info!(
            "Received response from Google Gemini model {}: '{}'",
            vendor_model_id,
            preview(&text)
        );
        Ok(text)
    }
}
