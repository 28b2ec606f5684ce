// Provider registry: name -> adapter lookup built once at startup
// Author: kelexine (https://github.com/kelexine)

use super::{
    BaiduProvider, BingProvider, CaiyunProvider, DeepLProvider, GoogleProvider,
    NiuTransProvider, TencentProvider, TranslationProvider, YoudaoProvider,
};
use crate::config::ProvidersConfig;
use crate::error::{GatewayError, Result};
use crate::models::Provider;
use reqwest::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// Immutable after construction; shared read-only across requests.
#[derive(Default)]
pub struct ProviderRegistry {
    adapters: HashMap<Provider, Arc<dyn TranslationProvider>>,
    /// Providers that are known but could not be configured, with the reason.
    unavailable: BTreeMap<Provider, String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an adapter for every provider. Providers whose credentials are
    /// missing are kept as unavailable rather than failing startup.
    pub fn from_config(config: &ProvidersConfig, client: Client) -> Self {
        let mut registry = Self::new();

        registry.register_result(Provider::Google, GoogleProvider::new(&config.google, client.clone()));
        registry.register_result(Provider::Baidu, BaiduProvider::new(&config.baidu, client.clone()));
        registry.register_result(Provider::Bing, BingProvider::new(&config.bing, client.clone()));
        registry.register_result(Provider::Caiyun, CaiyunProvider::new(&config.caiyun, client.clone()));
        registry.register_result(Provider::Deepl, DeepLProvider::new(&config.deepl, client.clone()));
        registry.register_result(Provider::Tencent, TencentProvider::new(&config.tencent, client.clone()));
        registry.register_result(Provider::Niutrans, NiuTransProvider::new(&config.niutrans, client.clone()));
        registry.register_result(Provider::Youdao, YoudaoProvider::new(&config.youdao, client));

        info!(
            "Provider registry ready: {} available, {} unavailable",
            registry.adapters.len(),
            registry.unavailable.len()
        );
        registry
    }

    fn register_result<P>(&mut self, provider: Provider, adapter: Result<P>)
    where
        P: TranslationProvider + 'static,
    {
        match adapter {
            Ok(adapter) => {
                info!("✓ {} provider configured", provider);
                self.register(Arc::new(adapter));
            }
            Err(e) => {
                warn!("✗ {} provider unavailable: {}", provider, e);
                let reason = match e {
                    GatewayError::AuthFailure { message, .. } => message,
                    other => other.to_string(),
                };
                self.unavailable.insert(provider, reason);
            }
        }
    }

    /// Add (or replace) an adapter under its own provider name.
    pub fn register(&mut self, adapter: Arc<dyn TranslationProvider>) {
        let provider = adapter.provider();
        self.unavailable.remove(&provider);
        self.adapters.insert(provider, adapter);
    }

    /// Look up the adapter for a route name.
    ///
    /// Unknown names are `UnknownProvider`; known but unconfigured providers
    /// are `AuthFailure`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn TranslationProvider>> {
        let provider: Provider = name.parse()?;
        if let Some(adapter) = self.adapters.get(&provider) {
            return Ok(Arc::clone(adapter));
        }
        match self.unavailable.get(&provider) {
            Some(reason) => Err(GatewayError::auth(provider, reason.clone())),
            None => Err(GatewayError::UnknownProvider(name.to_string())),
        }
    }

    /// Configured providers, in canonical order.
    pub fn available(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.adapters.contains_key(p))
            .collect()
    }

    pub fn unavailable(&self) -> &BTreeMap<Provider, String> {
        &self.unavailable
    }

    pub fn is_available(&self, provider: Provider) -> bool {
        self.adapters.contains_key(&provider)
    }

    /// True when no provider can serve requests.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
