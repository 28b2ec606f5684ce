// NiuTrans (Xiaoniu) adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, require_secret, TranslationProvider};
use crate::config::{NiuTransConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const PROVIDER: Provider = Provider::Niutrans;

pub struct NiuTransProvider {
    client: Client,
    api_key: Secret,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct NiuTransResponse {
    from: Option<String>,
    tgt_text: Option<String>,
    error_code: Option<Value>,
    error_msg: Option<String>,
}

impl NiuTransProvider {
    pub fn new(config: &NiuTransConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            api_key: require_secret(PROVIDER, &config.api_key, "api_key")?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for NiuTransProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::NIUTRANS
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let outbound = self.client.post(&self.endpoint).query(&[
            ("from", request.source.as_str()),
            ("to", request.target.as_str()),
            ("apikey", self.api_key.expose()),
            ("src_text", request.text.as_str()),
        ]);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: NiuTransResponse = http::parse_json(PROVIDER, &response.body)?;

        if let Some(code) = parsed.error_code {
            let code = match code {
                Value::String(s) => s,
                other => other.to_string(),
            };
            let message = parsed.error_msg.unwrap_or_else(|| "unknown error".to_string());
            return Err(http::vendor_error(PROVIDER, code, message));
        }

        let translated = parsed.tgt_text.ok_or_else(|| {
            GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no tgt_text",
            )
        })?;

        Ok(TranslationResult {
            translated,
            from: parsed.from.unwrap_or_else(|| request.source.clone()),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
