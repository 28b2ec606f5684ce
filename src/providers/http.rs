// Shared outbound HTTP plumbing for provider adapters
// Author: kelexine (https://github.com/kelexine)

use crate::config::{GatewayConfig, PerformanceConfig};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::models::Provider;
use crate::utils::logging::{preview, sanitize, sanitize_json};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Build the HTTP client shared by every adapter.
///
/// Constructed once at startup; adapters keep a clone (the connection pool
/// is shared).
pub fn build_client(gateway: &GatewayConfig, performance: &PerformanceConfig) -> Result<Client> {
    Client::builder()
        .timeout(gateway.timeout())
        .connect_timeout(Duration::from_secs(10).min(gateway.timeout()))
        .pool_max_idle_per_host(performance.connection_pool_size)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        .use_rustls_tls()
        .user_agent(concat!("transgate/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Raw vendor reply: status plus the body as text.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Send one request to a vendor.
///
/// Transport failures are mapped to `UpstreamFailure` (timeout or network);
/// the HTTP status is not inspected here, see [`ensure_success`].
pub async fn send(provider: Provider, request: RequestBuilder) -> Result<UpstreamResponse> {
    let start = Instant::now();

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            let elapsed = start.elapsed().as_secs_f64();
            let (cause, outcome) = if e.is_timeout() {
                (UpstreamCause::Timeout, "timeout")
            } else {
                (UpstreamCause::Network, "network")
            };
            crate::metrics::record_upstream_call(provider.as_str(), outcome, elapsed);
            warn!("{} request failed: {}", provider, sanitize(&e.to_string()));
            return Err(GatewayError::upstream(
                provider,
                cause,
                format!("request to {} failed: {}", provider, sanitize(&e.without_url().to_string())),
            ));
        }
    };

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        let cause = if e.is_timeout() {
            UpstreamCause::Timeout
        } else {
            UpstreamCause::Network
        };
        GatewayError::upstream(
            provider,
            cause,
            format!("failed to read {} response body: {}", provider, e.without_url()),
        )
    })?;

    crate::metrics::record_upstream_call(
        provider.as_str(),
        status.as_str(),
        start.elapsed().as_secs_f64(),
    );
    debug!(
        "{} responded HTTP {} in {:?}: {}",
        provider,
        status,
        start.elapsed(),
        preview(&body, 300)
    );

    Ok(UpstreamResponse { status, body })
}

/// Map a non-2xx vendor reply onto the error taxonomy.
///
/// - 401/403: `AuthFailure`
/// - 429 and DeepL's 456 (quota exceeded): `UpstreamFailure{rate_limited}`
/// - other 4xx: `InvalidInput`
/// - everything else: `UpstreamFailure{http_status}`
pub fn ensure_success(provider: Provider, response: &UpstreamResponse) -> Result<()> {
    let status = response.status;
    if status.is_success() {
        return Ok(());
    }

    let detail = sanitized_json(&response.body);
    let vendor_message = detail
        .as_ref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| preview(response.body.trim(), 200));

    warn!("{} returned HTTP {}: {}", provider, status, vendor_message);

    let code = status.as_u16();
    let err = match code {
        401 | 403 => GatewayError::auth(provider, format!("credentials rejected (HTTP {})", code)),
        429 | 456 => GatewayError::upstream(
            provider,
            UpstreamCause::RateLimited,
            format!("rate limit or quota exceeded: {}", vendor_message),
        ),
        400..=499 => GatewayError::invalid_input(format!(
            "{} rejected the request: {}",
            provider, vendor_message
        )),
        _ => GatewayError::upstream(provider, UpstreamCause::HttpStatus(code), vendor_message),
    };

    Err(match detail {
        Some(detail) => err.with_detail(detail),
        None => err,
    })
}

/// Deserialize a vendor body, mapping failures to `malformed_response`.
pub fn parse_json<T: DeserializeOwned>(provider: Provider, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        warn!("Unexpected {} response ({}): {}", provider, e, preview(body, 300));
        GatewayError::upstream(
            provider,
            UpstreamCause::MalformedResponse,
            format!("unexpected response from {}: {}", provider, e),
        )
    })
}

/// Vendor error code embedded in an otherwise successful reply.
pub fn vendor_error(provider: Provider, code: impl ToString, message: impl Into<String>) -> GatewayError {
    let code = code.to_string();
    let message = message.into();
    warn!("{} returned vendor error {}: {}", provider, code, message);
    GatewayError::upstream(provider, UpstreamCause::VendorError(code.clone()), message)
        .with_detail(serde_json::json!({ "code": code }))
}

/// Parse a body as JSON, then scrub credentials from the parsed value.
fn sanitized_json(body: &str) -> Option<Value> {
    let mut value: Value = serde_json::from_str(body).ok()?;
    sanitize_json(&mut value);
    Some(value)
}

/// Pull a human-readable message out of the error shapes vendors use.
pub fn extract_error_message(value: &Value) -> Option<String> {
    let candidates = [
        value.pointer("/error/message"),
        value.pointer("/Response/Error/Message"),
        value.get("message"),
        value.get("error_msg"),
        value.get("msg"),
        value.get("error").filter(|e| e.is_string()),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: &str) -> UpstreamResponse {
        UpstreamResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_success_passes() {
        assert!(ensure_success(Provider::Deepl, &reply(200, "{}")).is_ok());
    }

    #[test]
    fn test_auth_statuses() {
        for status in [401, 403] {
            let err = ensure_success(Provider::Deepl, &reply(status, r#"{"message":"Wrong key"}"#))
                .unwrap_err();
            assert!(matches!(err, GatewayError::AuthFailure { .. }), "{}", status);
        }
    }

    #[test]
    fn test_rate_limit_statuses() {
        for status in [429, 456] {
            let err = ensure_success(Provider::Deepl, &reply(status, "")).unwrap_err();
            assert_eq!(err.upstream_cause(), Some(&UpstreamCause::RateLimited));
        }
    }

    #[test]
    fn test_client_error_is_invalid_input() {
        let err = ensure_success(Provider::Bing, &reply(400, r#"{"error":{"code":400036,"message":"The target language is not valid."}}"#))
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidInput { .. }));
        assert!(err.to_string().contains("target language is not valid"));
    }

    #[test]
    fn test_server_error_keeps_detail() {
        let err = ensure_success(Provider::Caiyun, &reply(503, r#"{"message":"busy"}"#)).unwrap_err();
        assert_eq!(err.upstream_cause(), Some(&UpstreamCause::HttpStatus(503)));
        assert_eq!(err.detail(), Some(&json!({"message": "busy"})));
    }

    #[test]
    fn test_error_body_mentioning_token_keeps_detail() {
        let err = ensure_success(Provider::Caiyun, &reply(503, r#"{"message":"Invalid token"}"#))
            .unwrap_err();
        assert_eq!(err.detail(), Some(&json!({"message": "Invalid token"})));
        assert_eq!(
            err.to_string(),
            "caiyun upstream failure (HTTP 503): Invalid token"
        );
    }

    #[test]
    fn test_error_detail_is_scrubbed() {
        let body = r#"{"error":{"message":"bad request","api_key":"abc123","trace":"key=abc123"}}"#;
        let err = ensure_success(Provider::Google, &reply(500, body)).unwrap_err();
        let detail = err.detail().unwrap();
        assert_eq!(detail["error"]["api_key"], "[REDACTED]");
        assert_eq!(detail["error"]["trace"], "key=[REDACTED]");
        assert!(!err.to_string().contains("abc123"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_json::<Value>(Provider::Youdao, "<html>").unwrap_err();
        assert_eq!(err.upstream_cause(), Some(&UpstreamCause::MalformedResponse));
    }

    #[test]
    fn test_extract_error_message_shapes() {
        assert_eq!(
            extract_error_message(&json!({"error": {"message": "bad key"}})),
            Some("bad key".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({"Response": {"Error": {"Code": "AuthFailure", "Message": "sig"}}})),
            Some("sig".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({"error_code": "52003", "error_msg": "UNAUTHORIZED USER"})),
            Some("UNAUTHORIZED USER".to_string())
        );
        assert_eq!(extract_error_message(&json!({"ok": true})), None);
    }
}
