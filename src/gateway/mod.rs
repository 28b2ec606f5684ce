//! Provider-agnostic translation entry point.
//!
//! The gateway validates an inbound [`TranslationRequest`], resolves the
//! adapter through the [`ProviderRegistry`], normalizes language codes to the
//! provider's canonical spelling and invokes the adapter under a timeout.
//! Results and errors are returned unchanged.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::models::{ProviderRequest, TranslationRequest, TranslationResult, AUTO};
use crate::providers::{ProviderRegistry, TranslationProvider};
use crate::utils::retry::with_retry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct Gateway {
    registry: Arc<ProviderRegistry>,
    timeout: Duration,
    max_retries: u32,
}

impl Gateway {
    pub fn new(registry: Arc<ProviderRegistry>, timeout: Duration, max_retries: u32) -> Self {
        Self {
            registry,
            timeout,
            max_retries,
        }
    }

    pub fn from_config(registry: Arc<ProviderRegistry>, config: &GatewayConfig) -> Self {
        Self::new(registry, config.timeout(), config.max_retries)
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate, dispatch and normalize one translation.
    pub async fn handle(&self, request: TranslationRequest) -> Result<TranslationResult> {
        if request.text.trim().is_empty() {
            return Err(GatewayError::invalid_input("Text is required"));
        }

        let target = match request.target() {
            Some(target) => target,
            None => {
                // List the provider's codes when the name is valid so the
                // client can correct the request in one round trip.
                let supported = self
                    .registry
                    .resolve(&request.provider)
                    .ok()
                    .map(|adapter| adapter.languages().codes());
                return Err(GatewayError::InvalidInput {
                    message: "Invalid target language".to_string(),
                    supported,
                });
            }
        };

        let adapter = self.registry.resolve(&request.provider)?;
        let provider_request = normalize(adapter.as_ref(), &request, target)?;

        debug!(
            "Dispatching to {}: {} -> {} ({} chars)",
            adapter.provider(),
            provider_request.source,
            provider_request.target,
            provider_request.text.chars().count()
        );

        let started = Instant::now();
        let result = self.invoke(adapter.as_ref(), &provider_request).await;

        match &result {
            Ok(_) => info!(
                "{} translated {} -> {} in {}ms",
                adapter.provider(),
                provider_request.source,
                provider_request.target,
                started.elapsed().as_millis()
            ),
            Err(e) => warn!("{} translation failed: {}", adapter.provider(), e),
        }

        result
    }

    async fn invoke(
        &self,
        adapter: &dyn TranslationProvider,
        request: &ProviderRequest,
    ) -> Result<TranslationResult> {
        let provider = adapter.provider();
        let timeout = self.timeout;

        with_retry(provider.as_str(), self.max_retries, || async move {
            match tokio::time::timeout(timeout, adapter.translate(request)).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::upstream(
                    provider,
                    UpstreamCause::Timeout,
                    format!("no response within {}ms", timeout.as_millis()),
                )),
            }
        })
        .await
    }
}

/// Check the languages of `request` against the adapter's set and build the
/// adapter-facing request with canonical codes.
fn normalize(
    adapter: &dyn TranslationProvider,
    request: &TranslationRequest,
    target: &str,
) -> Result<ProviderRequest> {
    let provider = adapter.provider();
    let languages = adapter.languages();

    let target = languages
        .resolve(target)
        .ok_or_else(|| GatewayError::UnsupportedLanguage {
            provider,
            language: target.to_string(),
            supported: languages.codes(),
        })?;

    let sources = adapter.source_languages();
    let source = match request.source() {
        None => AUTO,
        Some(source) if source.eq_ignore_ascii_case(AUTO) => AUTO,
        Some(source) => sources
            .resolve(source)
            .ok_or_else(|| GatewayError::UnsupportedLanguage {
                provider,
                language: source.to_string(),
                supported: sources.codes(),
            })?,
    };

    if source == AUTO && !adapter.supports_detection() {
        return Err(GatewayError::InvalidInput {
            message: format!("{} cannot detect the source language; set `from`", provider),
            supported: Some(languages.codes()),
        });
    }

    Ok(ProviderRequest {
        text: request.text.clone(),
        source: source.to_string(),
        target: target.to_string(),
    })
}
