use super::anthropic::AnthropicAdapter;
use super::gemini::GeminiAdapter;
use super::model_map::ModelMap;
use super::openai::OpenAiCompatibleAdapter;
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use promptsmith_application::ports::dispatch_gateway::{DispatchError, DispatchGateway};
use promptsmith_domain::{CatalogModel, ProviderConfig};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

/// Routes catalog models to vendor adapters.
///
/// Built once at startup and shared behind an `Arc<dyn DispatchGateway>`.
/// Retryable failures (connection, rate limit, timeout, 5xx) are retried up to
/// `max_retries` times with exponential backoff.
pub struct DispatchRegistry {
    adapters: HashMap<ProviderKind, Arc<dyn ProviderAdapter>>,
    models: ModelMap,
    max_retries: u32,
    base_backoff: Duration,
}

impl DispatchRegistry {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, models: ModelMap) -> Self {
        Self {
            adapters: adapters.into_iter().map(|a| (a.kind(), a)).collect(),
            models,
            max_retries: 0,
            base_backoff: DEFAULT_BACKOFF,
        }
    }

    /// Register every vendor adapter from configuration.
    ///
    /// Adapters without an API key are still registered; they answer with
    /// [`DispatchError::NotConfigured`].
    pub fn from_config(config: &ProviderConfig) -> Result<Self, DispatchError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let adapters: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(OpenAiCompatibleAdapter::openai(&config.openai, timeout)?),
            Arc::new(AnthropicAdapter::new(&config.anthropic, timeout)?),
            Arc::new(GeminiAdapter::new(&config.gemini, timeout)?),
            Arc::new(OpenAiCompatibleAdapter::xai(&config.xai, timeout)?),
        ];

        let (models, unknown) = ModelMap::with_overrides(&config.model_overrides);
        for name in unknown {
            warn!("Ignoring model override for unknown catalog model '{}'", name);
        }

        Ok(Self::new(adapters, models).with_retry(config.max_retries, DEFAULT_BACKOFF))
    }

    pub fn with_retry(mut self, max_retries: u32, base_backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.base_backoff = base_backoff;
        self
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.base_backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}

#[async_trait]
impl DispatchGateway for DispatchRegistry {
    async fn dispatch(&self, prompt: &str, model: &CatalogModel) -> Result<String, DispatchError> {
        let route = self
            .models
            .resolve(*model)
            .ok_or_else(|| DispatchError::ModelNotAvailable(model.to_string()))?;
        let adapter = self.adapters.get(&route.provider).ok_or_else(|| {
            DispatchError::ModelNotAvailable(format!(
                "{} (no {} adapter registered)",
                model,
                route.provider.display_name()
            ))
        })?;

        debug!(
            "Dispatching to {} via {} as {}",
            model, route.provider, route.vendor_model_id
        );

        let mut attempt = 0;
        loop {
            match adapter.send(prompt, &route.vendor_model_id).await {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = self.backoff(attempt);
                    attempt += 1;
                    warn!(
                        "{} request failed ({}), retry {}/{} in {:?}",
                        model, e, attempt, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    fn supported_models(&self) -> Vec<CatalogModel> {
        CatalogModel::ALL
            .into_iter()
            .filter(|model| {
                self.models
                    .resolve(*model)
                    .is_some_and(|route| self.adapters.contains_key(&route.provider))
            })
            .collect()
    }
}
