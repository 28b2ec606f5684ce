// Normalized translation request/response types
// Author: kelexine (https://github.com/kelexine)

use super::Provider;
use serde::{Deserialize, Serialize};

/// Source language value meaning "let the vendor detect it".
pub const AUTO: &str = "auto";

/// Inbound request as accepted at the gateway boundary.
///
/// Field names are normalized to `text` / `from` / `to`, but the names the
/// individual vendors use are accepted as aliases so existing clients keep
/// working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: String,

    #[serde(
        default,
        alias = "source_lang",
        alias = "source",
        alias = "sourceLanguage",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<String>,

    #[serde(
        default,
        alias = "target_lang",
        alias = "target",
        alias = "targetLanguage",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<String>,

    /// Provider name, taken from the route rather than the body.
    #[serde(skip)]
    pub provider: String,
}

impl TranslationRequest {
    pub fn new(provider: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider: provider.into(),
            ..Default::default()
        }
    }

    pub fn from_lang(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn to_lang(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Target language, with blank values treated as absent.
    pub fn target(&self) -> Option<&str> {
        self.to.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Source language, with blank values treated as absent.
    pub fn source(&self) -> Option<&str> {
        self.from.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Validated request handed to a provider adapter. Language codes are the
/// canonical spellings from the provider's language set (or `auto`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

impl ProviderRequest {
    pub fn is_auto_source(&self) -> bool {
        self.source == AUTO
    }
}

/// Uniform success envelope returned for every provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated: String,
    /// Detected source language when the vendor reports one, otherwise the
    /// requested source.
    pub from: String,
    pub to: String,
    pub provider: Provider,
}
