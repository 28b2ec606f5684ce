// Youdao AI Cloud adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, require_secret, TranslationProvider};
use crate::config::{Secret, YoudaoConfig};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

const PROVIDER: Provider = Provider::Youdao;

/// Invalid app key, signature mismatch, account in arrears.
const AUTH_ERROR_CODES: [&str; 3] = ["108", "202", "401"];

pub struct YoudaoProvider {
    client: Client,
    app_key: Secret,
    app_secret: Secret,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YoudaoResponse {
    error_code: String,
    #[serde(default)]
    translation: Vec<String>,
    /// Direction actually used, e.g. `en2zh-CHS`.
    l: Option<String>,
}

/// The signed form of `q`: texts longer than 20 characters are reduced to
/// the first 10 characters, the character count, and the last 10.
pub fn sign_input(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 20 {
        return text.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 10..].iter().collect();
    format!("{}{}{}", head, chars.len(), tail)
}

/// v3 signature: `sha256(appKey + input + salt + curtime + appSecret)`.
pub fn sign(app_key: &str, text: &str, salt: &str, curtime: &str, app_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(app_key.as_bytes());
    hasher.update(sign_input(text).as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(curtime.as_bytes());
    hasher.update(app_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Source half of a Youdao direction string (`en2zh-CHS` -> `en`).
fn detected_source(direction: &str) -> Option<&str> {
    direction.split_once('2').map(|(from, _)| from).filter(|s| !s.is_empty())
}

impl YoudaoProvider {
    pub fn new(config: &YoudaoConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            app_key: require_secret(PROVIDER, &config.app_key, "app_key")?,
            app_secret: require_secret(PROVIDER, &config.app_secret, "app_secret")?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for YoudaoProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::YOUDAO
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let salt = uuid::Uuid::new_v4().to_string();
        let curtime = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            self.app_key.expose(),
            &request.text,
            &salt,
            &curtime,
            self.app_secret.expose(),
        );

        let outbound = self.client.get(&self.endpoint).query(&[
            ("q", request.text.as_str()),
            ("from", request.source.as_str()),
            ("to", request.target.as_str()),
            ("appKey", self.app_key.expose()),
            ("salt", salt.as_str()),
            ("sign", signature.as_str()),
            ("signType", "v3"),
            ("curtime", curtime.as_str()),
        ]);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: YoudaoResponse = http::parse_json(PROVIDER, &response.body)?;

        if parsed.error_code != "0" {
            if AUTH_ERROR_CODES.contains(&parsed.error_code.as_str()) {
                return Err(GatewayError::auth(
                    PROVIDER,
                    format!("credentials rejected (errorCode {})", parsed.error_code),
                ));
            }
            let message = format!("Youdao errorCode {}", parsed.error_code);
            return Err(http::vendor_error(PROVIDER, parsed.error_code, message));
        }

        let translated = parsed.translation.into_iter().next().ok_or_else(|| {
            GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no translation",
            )
        })?;

        let from = parsed
            .l
            .as_deref()
            .and_then(detected_source)
            .map(str::to_string)
            .unwrap_or_else(|| request.source.clone());

        Ok(TranslationResult {
            translated,
            from,
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
