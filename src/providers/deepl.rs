// DeepL adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, require_secret, TranslationProvider};
use crate::config::{DeepLConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: Provider = Provider::Deepl;

pub struct DeepLProvider {
    client: Client,
    api_key: Secret,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    detected_source_language: Option<String>,
    text: String,
}

impl DeepLProvider {
    pub fn new(config: &DeepLConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            api_key: require_secret(PROVIDER, &config.api_key, "api_key")?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::DEEPL
    }

    fn source_languages(&self) -> &'static LanguageSet {
        &languages::DEEPL_SOURCE
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let mut form = vec![
            ("text", request.text.as_str()),
            ("target_lang", request.target.as_str()),
        ];
        if !request.is_auto_source() {
            form.push(("source_lang", request.source.as_str()));
        }

        let outbound = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key.expose()))
            .form(&form);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: DeepLResponse = http::parse_json(PROVIDER, &response.body)?;
        let first = parsed.translations.into_iter().next().ok_or_else(|| {
            GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no translations",
            )
        })?;

        Ok(TranslationResult {
            translated: first.text,
            from: first
                .detected_source_language
                .unwrap_or_else(|| request.source.clone()),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
