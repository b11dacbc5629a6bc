//! Shared HTTP plumbing for the vendor adapters.

use super::ProviderKind;
use promptsmith_application::ports::dispatch_gateway::DispatchError;
use promptsmith_domain::core::string::truncate;
use reqwest::StatusCode;
use std::time::Duration;

/// Characters of prompt/response text shown in logs
pub const PREVIEW_CHARS: usize = 50;

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, DispatchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DispatchError::Other(format!("Failed to create HTTP client: {e}")))
}

/// Common preconditions: a key must be configured and the prompt non-empty.
pub fn ensure_ready<'a>(
    kind: ProviderKind,
    api_key: Option<&'a str>,
    prompt: &str,
) -> Result<&'a str, DispatchError> {
    let key = api_key.ok_or_else(|| DispatchError::NotConfigured(kind.display_name().to_string()))?;
    if prompt.is_empty() {
        return Err(DispatchError::EmptyPrompt);
    }
    Ok(key)
}

pub fn map_send_error(kind: ProviderKind, e: reqwest::Error) -> DispatchError {
    if e.is_timeout() {
        DispatchError::Timeout
    } else if e.is_connect() {
        DispatchError::Connection(format!("Could not connect to {} API. {e}", kind.display_name()))
    } else {
        DispatchError::Other(format!(
            "An unexpected error occurred while contacting {}. {e}",
            kind.display_name()
        ))
    }
}

/// Map a non-success status and its body to a dispatch error.
pub fn map_status(kind: ProviderKind, status: StatusCode, body: &str) -> DispatchError {
    let message = error_message(body);
    match status.as_u16() {
        401 | 403 => DispatchError::Authentication(format!(
            "{} API rejected the key. {message}",
            kind.display_name()
        )),
        429 => DispatchError::RateLimited(format!(
            "{} API rate limit exceeded. {message}",
            kind.display_name()
        )),
        code => DispatchError::Status {
            status: code,
            message,
        },
    }
}

/// Pull `error.message` out of a vendor error body, or fall back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| truncate(body.trim(), 200))
}

pub fn preview(text: &str) -> String {
    let mut shown: String = text.chars().take(PREVIEW_CHARS).collect();
    if shown.len() < text.len() {
        shown.push_str("...");
    }
    shown
}

/// Trim the reply and reject it when nothing is left.
pub fn non_empty(text: String) -> Result<String, DispatchError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(DispatchError::EmptyResponse)
    } else {
        Ok(trimmed.to_string())
    }
}
