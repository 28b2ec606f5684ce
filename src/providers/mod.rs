//! Translation vendor adapters.
//!
//! Every vendor is wrapped in a [`TranslationProvider`] implementation that
//! owns its credentials, its language set and a handle to the shared HTTP
//! client. Adapters perform exactly one outbound call per invocation and map
//! every failure onto [`GatewayError`]; they never retry.
//!
//! # Submodules
//!
//! - `http`: shared request sending, status mapping and body parsing.
//! - `registry`: startup-built lookup table from provider name to adapter.
//! - one module per vendor.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod baidu;
pub mod bing;
pub mod caiyun;
pub mod deepl;
pub mod google;
pub mod http;
pub mod niutrans;
pub mod registry;
pub mod tencent;
pub mod youdao;

pub use baidu::BaiduProvider;
pub use bing::BingProvider;
pub use caiyun::CaiyunProvider;
pub use deepl::DeepLProvider;
pub use google::GoogleProvider;
pub use niutrans::NiuTransProvider;
pub use registry::ProviderRegistry;
pub use tencent::TencentProvider;
pub use youdao::YoudaoProvider;

use crate::config::{present, Secret};
use crate::error::{GatewayError, Result};
use crate::languages::LanguageSet;
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;

/// Contract every vendor adapter implements.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Which vendor this adapter talks to.
    fn provider(&self) -> Provider;

    /// Target languages the vendor accepts.
    fn languages(&self) -> &'static LanguageSet;

    /// Languages accepted as an explicit source. Same as the targets unless
    /// the vendor restricts them.
    fn source_languages(&self) -> &'static LanguageSet {
        self.languages()
    }

    /// Whether the vendor can detect the source language (`from: "auto"`).
    fn supports_detection(&self) -> bool {
        true
    }

    /// Translate one validated request. Performs a single outbound call.
    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult>;
}

/// Fetch a required credential, failing with `AuthFailure` when it is
/// missing or blank.
pub(crate) fn require_secret(provider: Provider, secret: &Option<Secret>, key: &str) -> Result<Secret> {
    present(secret).cloned().ok_or_else(|| {
        GatewayError::auth(
            provider,
            format!("missing credential `providers.{}.{}`", provider, key),
        )
    })
}

/// Join an endpoint base and a path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
