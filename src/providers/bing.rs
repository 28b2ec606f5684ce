// Microsoft Translator (Bing) adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, join_url, require_secret, TranslationProvider};
use crate::config::{BingConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const PROVIDER: Provider = Provider::Bing;
const API_VERSION: &str = "3.0";

pub struct BingProvider {
    client: Client,
    key: Secret,
    region: Option<String>,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct BingText<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BingItem {
    detected_language: Option<BingDetected>,
    #[serde(default)]
    translations: Vec<BingTranslation>,
}

#[derive(Debug, Deserialize)]
struct BingDetected {
    language: String,
}

#[derive(Debug, Deserialize)]
struct BingTranslation {
    text: String,
}

impl BingProvider {
    pub fn new(config: &BingConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            key: require_secret(PROVIDER, &config.key, "key")?,
            region: config.region.clone().filter(|r| !r.trim().is_empty()),
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for BingProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::BING
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let mut query = vec![
            ("api-version", API_VERSION),
            ("to", request.target.as_str()),
        ];
        // Omitting `from` makes the service detect the source language.
        if !request.is_auto_source() {
            query.push(("from", request.source.as_str()));
        }

        let mut outbound = self
            .client
            .post(join_url(&self.endpoint, "translate"))
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", self.key.expose())
            .json(&[BingText {
                text: &request.text,
            }]);
        if let Some(region) = &self.region {
            outbound = outbound.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let items: Vec<BingItem> = http::parse_json(PROVIDER, &response.body)?;
        let item = items.into_iter().next().ok_or_else(|| {
            GatewayError::upstream(PROVIDER, UpstreamCause::MalformedResponse, "empty response")
        })?;
        let translation = item.translations.into_iter().next().ok_or_else(|| {
            GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no translations",
            )
        })?;

        Ok(TranslationResult {
            translated: translation.text,
            from: item
                .detected_language
                .map(|d| d.language)
                .unwrap_or_else(|| request.source.clone()),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
