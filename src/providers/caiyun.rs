// Caiyun (LingoCloud) adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, require_secret, TranslationProvider};
use crate::config::{CaiyunConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PROVIDER: Provider = Provider::Caiyun;

pub struct CaiyunProvider {
    client: Client,
    token: Secret,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct CaiyunRequest<'a> {
    source: &'a str,
    trans_type: String,
    request_id: String,
    detect: bool,
}

#[derive(Debug, Deserialize)]
struct CaiyunResponse {
    target: Option<Value>,
    message: Option<String>,
}

impl CaiyunProvider {
    pub fn new(config: &CaiyunConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            token: require_secret(PROVIDER, &config.token, "token")?,
            endpoint: config.endpoint.clone(),
        })
    }
}

/// Caiyun encodes the direction as `{from}2{to}`, e.g. `auto2en`.
pub fn trans_type(source: &str, target: &str) -> String {
    format!("{}2{}", source, target)
}

#[async_trait]
impl TranslationProvider for CaiyunProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::CAIYUN
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let body = CaiyunRequest {
            source: &request.text,
            trans_type: trans_type(&request.source, &request.target),
            request_id: uuid::Uuid::new_v4().simple().to_string(),
            detect: request.is_auto_source(),
        };

        let outbound = self
            .client
            .post(&self.endpoint)
            .header("x-authorization", format!("token {}", self.token.expose()))
            .json(&body);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: CaiyunResponse = http::parse_json(PROVIDER, &response.body)?;

        // `target` mirrors the shape of `source`: a string here.
        let translated = match parsed.target {
            Some(Value::String(text)) => text,
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => {
                return Err(match parsed.message {
                    Some(message) => http::vendor_error(PROVIDER, "message", message),
                    None => GatewayError::upstream(
                        PROVIDER,
                        UpstreamCause::MalformedResponse,
                        "response contained no target",
                    ),
                })
            }
        };

        Ok(TranslationResult {
            translated,
            from: request.source.clone(),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
