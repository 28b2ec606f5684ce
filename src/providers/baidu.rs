// Baidu Fanyi adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, require_secret, TranslationProvider};
use crate::config::{BaiduConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const PROVIDER: Provider = Provider::Baidu;

/// Baidu reports success explicitly with this code on some endpoints.
const SUCCESS_CODE: &str = "52000";
/// Unauthorized app id / invalid signature.
const AUTH_ERROR_CODES: [&str; 2] = ["52003", "54001"];

pub struct BaiduProvider {
    client: Client,
    app_id: Secret,
    secret_key: Secret,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct BaiduResponse {
    from: Option<String>,
    #[serde(default)]
    trans_result: Vec<BaiduSegment>,
    error_code: Option<Value>,
    error_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BaiduSegment {
    dst: String,
}

/// `md5(appid + q + salt + secret)`, lowercase hex.
pub fn sign(app_id: &str, text: &str, salt: &str, secret_key: &str) -> String {
    let input = format!("{}{}{}{}", app_id, text, salt, secret_key);
    format!("{:x}", md5::compute(input.as_bytes()))
}

impl BaiduProvider {
    pub fn new(config: &BaiduConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            app_id: require_secret(PROVIDER, &config.app_id, "app_id")?,
            secret_key: require_secret(PROVIDER, &config.secret_key, "secret_key")?,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for BaiduProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::BAIDU
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let salt = chrono::Utc::now().timestamp_millis().to_string();
        let signature = sign(
            self.app_id.expose(),
            &request.text,
            &salt,
            self.secret_key.expose(),
        );

        let outbound = self.client.get(&self.endpoint).query(&[
            ("q", request.text.as_str()),
            ("from", request.source.as_str()),
            ("to", request.target.as_str()),
            ("appid", self.app_id.expose()),
            ("salt", salt.as_str()),
            ("sign", signature.as_str()),
        ]);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: BaiduResponse = http::parse_json(PROVIDER, &response.body)?;

        if let Some(code) = parsed.error_code.as_ref().map(code_string) {
            if code != SUCCESS_CODE {
                let message = parsed.error_msg.unwrap_or_else(|| "unknown error".to_string());
                if AUTH_ERROR_CODES.contains(&code.as_str()) {
                    return Err(GatewayError::auth(
                        PROVIDER,
                        format!("credentials rejected (error {}: {})", code, message),
                    ));
                }
                return Err(http::vendor_error(PROVIDER, code, message));
            }
        }

        if parsed.trans_result.is_empty() {
            return Err(GatewayError::upstream(
                PROVIDER,
                UpstreamCause::MalformedResponse,
                "response contained no trans_result",
            ));
        }

        let translated = parsed
            .trans_result
            .into_iter()
            .map(|segment| segment.dst)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(TranslationResult {
            translated,
            from: parsed.from.unwrap_or_else(|| request.source.clone()),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}

fn code_string(code: &Value) -> String {
    match code {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_matches_documented_example() {
        assert_eq!(
            sign("2015063000000001", "apple", "1435660288", "12345678"),
            "f89f9594663708c1605f3d736d01d2d4"
        );
    }

    #[test]
    fn test_code_string() {
        assert_eq!(code_string(&Value::from("52003")), "52003");
        assert_eq!(code_string(&Value::from(54001)), "54001");
    }
}
