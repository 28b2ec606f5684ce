// Tencent Machine Translation (TMT) adapter
// Author: kelexine (https://github.com/kelexine)
//
// Requests are signed with TC3-HMAC-SHA256.

use super::{http, require_secret, TranslationProvider};
use crate::config::{Secret, TencentConfig};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use ring::{digest, hmac};
use serde::{Deserialize, Serialize};

const PROVIDER: Provider = Provider::Tencent;

const SERVICE: &str = "tmt";
const ACTION: &str = "TextTranslate";
const VERSION: &str = "2018-03-21";
const ALGORITHM: &str = "TC3-HMAC-SHA256";
const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

pub struct TencentProvider {
    client: Client,
    secret_id: Secret,
    secret_key: Secret,
    region: String,
    endpoint: String,
    host: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TencentRequest<'a> {
    source_text: &'a str,
    source: &'a str,
    target: &'a str,
    project_id: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TencentEnvelope {
    response: TencentResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TencentResponse {
    target_text: Option<String>,
    source: Option<String>,
    error: Option<TencentError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TencentError {
    code: String,
    message: String,
}

fn hmac_sha256(key: &[u8], msg: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, msg).as_ref().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(digest::digest(&digest::SHA256, data))
}

/// Builds the `Authorization` header for a POST of `payload` to `host`
/// at unix time `timestamp`.
pub fn authorization(
    secret_id: &str,
    secret_key: &str,
    host: &str,
    payload: &str,
    timestamp: i64,
) -> Result<String> {
    let date = chrono::DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| GatewayError::Internal(format!("invalid timestamp {}", timestamp)))?
        .format("%Y-%m-%d")
        .to_string();

    let canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-tc-action:{}\n",
        CONTENT_TYPE,
        host,
        ACTION.to_lowercase()
    );
    let canonical_request = format!(
        "POST\n/\n\n{}\n{}\n{}",
        canonical_headers,
        SIGNED_HEADERS,
        sha256_hex(payload.as_bytes())
    );

    let credential_scope = format!("{}/{}/tc3_request", date, SERVICE);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        timestamp,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let secret_date = hmac_sha256(format!("TC3{}", secret_key).as_bytes(), date.as_bytes());
    let secret_service = hmac_sha256(&secret_date, SERVICE.as_bytes());
    let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
    let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

    Ok(format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, secret_id, credential_scope, SIGNED_HEADERS, signature
    ))
}

impl TencentProvider {
    pub fn new(config: &TencentConfig, client: Client) -> Result<Self> {
        let host = reqwest::Url::parse(&config.endpoint)
            .ok()
            .and_then(|url| {
                url.host_str().map(|host| match url.port() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host.to_string(),
                })
            })
            .ok_or_else(|| {
                GatewayError::Config(format!(
                    "providers.tencent.endpoint is not a valid URL: {}",
                    config.endpoint
                ))
            })?;

        Ok(Self {
            client,
            secret_id: require_secret(PROVIDER, &config.secret_id, "secret_id")?,
            secret_key: require_secret(PROVIDER, &config.secret_key, "secret_key")?,
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
            host,
        })
    }
}

#[async_trait]
impl TranslationProvider for TencentProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::TENCENT
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        // The signature covers the exact bytes sent.
        let payload = serde_json::to_string(&TencentRequest {
            source_text: &request.text,
            source: &request.source,
            target: &request.target,
            project_id: 0,
        })?;
        let timestamp = chrono::Utc::now().timestamp();
        let auth = authorization(
            self.secret_id.expose(),
            self.secret_key.expose(),
            &self.host,
            &payload,
            timestamp,
        )?;

        let outbound = self
            .client
            .post(&self.endpoint)
            .header("Authorization", auth)
            .header("Content-Type", CONTENT_TYPE)
            .header("X-TC-Action", ACTION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("X-TC-Version", VERSION)
            .header("X-TC-Region", &self.region)
            .body(payload);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let envelope: TencentEnvelope = http::parse_json(PROVIDER, &response.body)?;
        let parsed = envelope.response;

        if let Some(error) = parsed.error {
            if error.code.starts_with("AuthFailure") {
                return Err(GatewayError::auth(
                    PROVIDER,
                    format!("{}: {}", error.code, error.message),
                ));
            }
            return Err(http::vendor_error(PROVIDER, error.code, error.message));
        }

        let translated = parsed.target_text.ok_or_else(|| {
            GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no TargetText",
            )
        })?;

        Ok(TranslationResult {
            translated,
            from: parsed.source.unwrap_or_else(|| request.source.clone()),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
